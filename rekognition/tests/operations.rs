/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Uri;
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_ok, validate_headers, validate_json_body};
use rekognition::error::RekognitionErrorKind;
use rekognition::idempotency_token::IdempotencyTokenProvider;
use rekognition::input::{
    AssociateFacesInput, CreateCollectionInput, CreateUserInput, DeleteFacesInput,
    DeleteUserInput, DescribeCollectionInput, DescribeProjectsInput, DetectFacesInput,
    DetectLabelsInput, DetectProtectiveEquipmentInput, DetectTextInput, DisassociateFacesInput,
    GetCelebrityRecognitionInput, IndexFacesInput, ListFacesInput, ListUsersInput,
    RecognizeCelebritiesInput, SearchFacesByImageInput, SearchFacesInput, SearchUsersInput,
};
use rekognition::model::{Attribute, Image};
use rekognition::{Blob, BuildError, Config, Region};
use smithy_http::operation::Operation;
use smithy_http::result::SdkError;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};

const FACE_ID: &str = "a1b2c3d4-0000-4000-8000-000000000000";
const TOKEN: &str = "00000000-0000-4000-8000-000000000000";

fn config() -> Config {
    Config::builder()
        .region(Region::from_static("us-west-2"))
        .idempotency_token_provider(IdempotencyTokenProvider::fixed(TOKEN))
        .build()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amzn-requestid", "5d4f8e2a-5e5c-4f0b-9c6e-1c2d3e4f5a6b")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn list_faces_request() {
    let op = ListFacesInput::builder()
        .collection_id("my-collection")
        .max_results(100)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), &http::Method::POST);
    assert_eq!(
        request.uri(),
        &Uri::from_static("https://rekognition.us-west-2.amazonaws.com/")
    );
    let body = request.body().bytes();
    let content_length = body.len().to_string();
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "RekognitionService.ListFaces"),
            ("content-length", content_length.as_str()),
        ],
    ));
    assert_ok(validate_json_body(
        body,
        r#"{"CollectionId": "my-collection", "MaxResults": 100}"#,
    ));

    let metadata = op.metadata().expect("operations carry metadata");
    assert_eq!(metadata.name(), "ListFaces");
    assert_eq!(metadata.service(), "rekognition");
}

fn image() -> Image {
    Image {
        bytes: Some(Blob::new("jpeg")),
        s3_object: None,
    }
}

fn assert_target<H>(name: &str, op: Operation<H>) {
    let request = op.request().http();
    assert_eq!(request.method(), &http::Method::POST);
    assert_eq!(
        request.uri(),
        &Uri::from_static("https://rekognition.us-west-2.amazonaws.com/")
    );
    let target = format!("RekognitionService.{}", name);
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", target.as_str()),
        ],
    ));
    let metadata = op.metadata().expect("operations carry metadata");
    assert_eq!(metadata.name(), name);
    assert_eq!(metadata.service(), "rekognition");
}

macro_rules! assert_targets {
    ($($name:literal => $builder:expr,)*) => {
        $(
            assert_target(
                $name,
                $builder.build().unwrap().make_operation(&config()).unwrap(),
            );
        )*
    };
}

#[test]
fn every_operation_targets_its_action() {
    assert_targets! {
        "AssociateFaces" => AssociateFacesInput::builder()
            .collection_id("my-collection")
            .user_id("user-1")
            .face_ids(FACE_ID),
        "CreateCollection" => CreateCollectionInput::builder().collection_id("my-collection"),
        "CreateUser" => CreateUserInput::builder()
            .collection_id("my-collection")
            .user_id("user-1"),
        "DeleteFaces" => DeleteFacesInput::builder()
            .collection_id("my-collection")
            .face_ids(FACE_ID),
        "DeleteUser" => DeleteUserInput::builder()
            .collection_id("my-collection")
            .user_id("user-1"),
        "DescribeCollection" => DescribeCollectionInput::builder().collection_id("my-collection"),
        "DescribeProjects" => DescribeProjectsInput::builder(),
        "DetectFaces" => DetectFacesInput::builder().image(image()),
        "DetectLabels" => DetectLabelsInput::builder().image(image()),
        "DetectProtectiveEquipment" => DetectProtectiveEquipmentInput::builder().image(image()),
        "DetectText" => DetectTextInput::builder().image(image()),
        "DisassociateFaces" => DisassociateFacesInput::builder()
            .collection_id("my-collection")
            .user_id("user-1")
            .face_ids(FACE_ID),
        "GetCelebrityRecognition" => GetCelebrityRecognitionInput::builder().job_id(TOKEN),
        "IndexFaces" => IndexFacesInput::builder()
            .collection_id("my-collection")
            .image(image()),
        "ListFaces" => ListFacesInput::builder().collection_id("my-collection"),
        "ListUsers" => ListUsersInput::builder().collection_id("my-collection"),
        "RecognizeCelebrities" => RecognizeCelebritiesInput::builder().image(image()),
        "SearchFaces" => SearchFacesInput::builder()
            .collection_id("my-collection")
            .face_id(FACE_ID),
        "SearchFacesByImage" => SearchFacesByImageInput::builder()
            .collection_id("my-collection")
            .image(image()),
        "SearchUsers" => SearchUsersInput::builder().collection_id("my-collection"),
    }
}

#[test]
fn image_bytes_are_base64_encoded() {
    let op = DetectFacesInput::builder()
        .image(image())
        .attributes(Attribute::Default)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_json_body(
        op.request().http().body().bytes(),
        r#"{"Image": {"Bytes": "anBlZw=="}, "Attributes": ["DEFAULT"]}"#,
    ));
}

#[test]
fn missing_client_request_token_is_generated() {
    let input = CreateUserInput::builder()
        .collection_id("my-collection")
        .user_id("user-1")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    assert_ok(validate_json_body(
        op.request().http().body().bytes(),
        r#"{
            "CollectionId": "my-collection",
            "UserId": "user-1",
            "ClientRequestToken": "00000000-0000-4000-8000-000000000000"
        }"#,
    ));
    // the input itself is left untouched
    assert_eq!(input.client_request_token, None);

    let op = AssociateFacesInput::builder()
        .collection_id("my-collection")
        .user_id("user-1")
        .face_ids(FACE_ID)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_ok(validate_json_body(
        op.request().http().body().bytes(),
        r#"{
            "CollectionId": "my-collection",
            "UserId": "user-1",
            "FaceIds": ["a1b2c3d4-0000-4000-8000-000000000000"],
            "ClientRequestToken": "00000000-0000-4000-8000-000000000000"
        }"#,
    ));
}

#[test]
fn random_tokens_are_uuids() {
    let config = Config::builder()
        .region("us-east-1")
        .idempotency_token_provider(IdempotencyTokenProvider::with_seed(1234))
        .build();
    let op = DeleteUserInput::builder()
        .collection_id("my-collection")
        .user_id("user-1")
        .build()
        .unwrap()
        .make_operation(&config)
        .unwrap();
    let body: serde_json::Value =
        serde_json::from_slice(op.request().http().body().bytes()).unwrap();
    let token = body["ClientRequestToken"].as_str().expect("token was filled");
    assert_eq!(token.len(), 36);
    assert_eq!(&token[14..15], "4");
}

#[test]
fn endpoint_override() {
    let config = Config::builder()
        .endpoint(Uri::from_static("http://localhost:4566/"))
        .build();
    let op = SearchFacesInput::builder()
        .collection_id("my-collection")
        .face_id(FACE_ID)
        .build()
        .unwrap()
        .make_operation(&config)
        .unwrap();
    assert_eq!(op.request().http().uri(), "http://localhost:4566/");
}

#[test]
fn missing_region() {
    let err = SearchFacesInput::builder()
        .collection_id("my-collection")
        .face_id(FACE_ID)
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .unwrap_err();
    assert!(matches!(err, BuildError::MissingRegion));
}

#[test]
fn invalid_inputs_do_not_produce_requests() {
    let input = SearchFacesInput {
        collection_id: Some("my collection".to_owned()),
        face_id: Some(FACE_ID.to_owned()),
        ..Default::default()
    };
    let err = input.make_operation(&config()).unwrap_err();
    assert_eq!(err.field(), Some("CollectionId"));
}

#[test]
fn parse_success() {
    let op = SearchFacesInput::builder()
        .collection_id("my-collection")
        .face_id(FACE_ID)
        .max_faces(2)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let success = op
        .parse(response(
            200,
            r#"{
                "SearchedFaceId": "a1b2c3d4-0000-4000-8000-000000000000",
                "FaceMatches": [{
                    "Similarity": 99.2,
                    "Face": {"FaceId": "a1b2c3d4-0000-4000-8000-000000000001", "Confidence": 99.9}
                }],
                "FaceModelVersion": "7.0"
            }"#,
        ))
        .unwrap();
    let output = success.parsed;
    assert_eq!(output.searched_face_id.as_deref(), Some(FACE_ID));
    let matches = output.face_matches.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].similarity, Some(99.2));
    assert_eq!(output.face_model_version.as_deref(), Some("7.0"));
}

#[test]
fn parse_modeled_error() {
    let op = ListFacesInput::builder()
        .collection_id("missing")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = op
        .parse(response(
            400,
            r#"{"__type": "ResourceNotFoundException", "Message": "The collection id: missing does not exist", "Code": "ResourceNotFoundException"}"#,
        ))
        .unwrap_err();
    let err = match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(raw.status(), 400);
            err
        }
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_resource_not_found_error());
    assert!(matches!(
        err.kind,
        RekognitionErrorKind::ResourceNotFoundError
    ));
    assert_eq!(
        err.message(),
        Some("The collection id: missing does not exist")
    );
    assert_eq!(
        err.request_id(),
        Some("5d4f8e2a-5e5c-4f0b-9c6e-1c2d3e4f5a6b")
    );
    assert_eq!(err.retryable_error_kind(), None);
}

#[test]
fn parse_throttling_error() {
    let op = ListFacesInput::builder()
        .collection_id("my-collection")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = op
        .parse(response(
            400,
            r#"{"__type": "com.amazonaws.rekognition#ThrottlingException", "message": "Slow down"}"#,
        ))
        .unwrap_err();
    let err = err.service_error().expect("modeled error");
    assert!(err.is_throttling_error());
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
}

#[test]
fn parse_unmodeled_error() {
    let op = ListFacesInput::builder()
        .collection_id("my-collection")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let err = op
        .parse(response(500, r#"{"__type": "SomethingNewException"}"#))
        .unwrap_err();
    let err = err.service_error().expect("parsed error");
    assert!(err.is_unhandled());
    assert_eq!(err.code(), Some("SomethingNewException"));
}
