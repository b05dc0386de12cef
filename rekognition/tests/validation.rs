/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use rekognition::input::{
    CreateCollectionInput, DeleteFacesInput, DescribeProjectsInput, DetectLabelsInput,
    GetCelebrityRecognitionInput, IndexFacesInput, ListFacesInput, ListUsersInput,
    SearchFacesByImageInput, SearchFacesInput,
};
use rekognition::model::{
    Attribute, CustomizationFeature, DetectLabelsFeatureName, Image, QualityFilter, S3Object,
};
use rekognition::validation::ConstraintViolation;
use rekognition::{Blob, BuildError};

const FACE_ID: &str = "a1b2c3d4-0000-4000-8000-000000000000";

fn s3_image() -> Image {
    Image {
        bytes: None,
        s3_object: Some(S3Object {
            bucket: Some("my-bucket".to_owned()),
            name: Some("photos/group.jpg".to_owned()),
            version: None,
        }),
    }
}

fn invalid(err: BuildError) -> (&'static str, ConstraintViolation) {
    match err {
        BuildError::InvalidField { field, violation } => (field, violation),
        other => panic!("expected an invalid field, got {:?}", other),
    }
}

#[test]
fn list_faces_max_results_is_bounded() {
    let err = ListFacesInput::builder()
        .collection_id("my-collection")
        .max_results(5000)
        .build()
        .unwrap_err();
    assert_eq!(
        invalid(err),
        (
            "MaxResults",
            ConstraintViolation::Range {
                min: 0.0,
                max: Some(4096.0),
                actual: 5000.0
            }
        )
    );

    assert!(ListFacesInput::builder()
        .collection_id("my-collection")
        .max_results(4096)
        .build()
        .is_ok());
}

#[test]
fn search_faces_by_image_max_faces_is_bounded() {
    for max_faces in &[0, 4097] {
        let err = SearchFacesByImageInput::builder()
            .collection_id("my-collection")
            .image(s3_image())
            .max_faces(*max_faces)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), Some("MaxFaces"));
        assert!(matches!(
            err.violation(),
            Some(ConstraintViolation::Range { .. })
        ));
    }
    for max_faces in &[1, 4096] {
        assert!(SearchFacesByImageInput::builder()
            .collection_id("my-collection")
            .image(s3_image())
            .max_faces(*max_faces)
            .build()
            .is_ok());
    }
}

#[test]
fn collection_id_pattern() {
    let err = CreateCollectionInput::builder()
        .collection_id("my collection")
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("CollectionId"));
    assert!(matches!(
        err.violation(),
        Some(ConstraintViolation::Pattern { .. })
    ));
    assert!(err.to_string().starts_with("`CollectionId` is invalid"));

    for collection_id in &["my-collection", "faces_2024.v1", "A"] {
        assert!(CreateCollectionInput::builder()
            .collection_id(*collection_id)
            .build()
            .is_ok());
    }
}

#[test]
fn collection_id_length() {
    let err = CreateCollectionInput::builder()
        .collection_id("a".repeat(256))
        .build()
        .unwrap_err();
    assert_eq!(
        err.violation(),
        Some(&ConstraintViolation::Length {
            min: 1,
            max: Some(255),
            actual: 256
        })
    );
    let err = CreateCollectionInput::builder()
        .collection_id("")
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("CollectionId"));
}

#[test]
fn required_fields() {
    let err = SearchFacesInput::builder()
        .collection_id("my-collection")
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::MissingField { field: "FaceId" }));
    assert_eq!(err.to_string(), "`FaceId` is required");

    let err = IndexFacesInput::builder()
        .collection_id("my-collection")
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("Image"));

    let err = GetCelebrityRecognitionInput::builder().build().unwrap_err();
    assert_eq!(err.field(), Some("JobId"));
}

#[test]
fn face_ids_must_be_uuids() {
    let err = SearchFacesInput::builder()
        .collection_id("my-collection")
        .face_id("not-a-face-id")
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("FaceId"));

    // right length, wrong alphabet
    let err = SearchFacesInput::builder()
        .collection_id("my-collection")
        .face_id("A1B2C3D4-0000-4000-8000-000000000000")
        .build()
        .unwrap_err();
    assert!(matches!(
        err.violation(),
        Some(ConstraintViolation::Pattern { .. })
    ));

    let err = DeleteFacesInput::builder()
        .collection_id("my-collection")
        .face_ids(FACE_ID)
        .face_ids("nope")
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("FaceIds"));
}

#[test]
fn empty_face_id_list() {
    let err = DeleteFacesInput::builder()
        .collection_id("my-collection")
        .set_face_ids(Some(vec![]))
        .build()
        .unwrap_err();
    assert_eq!(
        err.violation(),
        Some(&ConstraintViolation::ItemCount {
            min: 1,
            max: Some(4096),
            actual: 0
        })
    );
}

#[test]
fn next_token_length() {
    let err = ListUsersInput::builder()
        .collection_id("my-collection")
        .next_token("t".repeat(256))
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("NextToken"));

    assert!(ListUsersInput::builder()
        .collection_id("my-collection")
        .next_token("t".repeat(255))
        .build()
        .is_ok());
}

#[test]
fn thresholds_are_percentages() {
    let err = SearchFacesInput::builder()
        .collection_id("my-collection")
        .face_id(FACE_ID)
        .face_match_threshold(100.5)
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("FaceMatchThreshold"));

    let err = SearchFacesInput::builder()
        .collection_id("my-collection")
        .face_id(FACE_ID)
        .face_match_threshold(f32::NAN)
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("FaceMatchThreshold"));
}

#[test]
fn image_constraints() {
    let err = IndexFacesInput::builder()
        .collection_id("my-collection")
        .image(Image {
            bytes: Some(Blob::new(Vec::new())),
            s3_object: None,
        })
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("Image.Bytes"));

    let err = IndexFacesInput::builder()
        .collection_id("my-collection")
        .image(Image {
            bytes: None,
            s3_object: Some(S3Object {
                bucket: Some("ab".to_owned()),
                ..Default::default()
            }),
        })
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("S3Object.Bucket"));

    assert!(IndexFacesInput::builder()
        .collection_id("my-collection")
        .image(Image {
            bytes: Some(Blob::new(vec![0xff, 0xd8, 0xff])),
            s3_object: None,
        })
        .build()
        .is_ok());
}

#[test]
fn unknown_enum_values_are_rejected_in_requests() {
    let err = IndexFacesInput::builder()
        .collection_id("my-collection")
        .image(s3_image())
        .quality_filter(QualityFilter::from("MAXIMUM"))
        .build()
        .unwrap_err();
    match err.violation() {
        Some(ConstraintViolation::UnknownVariant { value, allowed }) => {
            assert_eq!(value, "MAXIMUM");
            assert!(allowed.contains(&"NONE"));
            assert!(allowed.contains(&"AUTO"));
        }
        other => panic!("unexpected violation {:?}", other),
    }

    assert!(IndexFacesInput::builder()
        .collection_id("my-collection")
        .image(s3_image())
        .quality_filter(QualityFilter::None)
        .detection_attributes(Attribute::All)
        .build()
        .is_ok());
}

#[test]
fn feature_list_sizes() {
    let err = DetectLabelsInput::builder()
        .image(s3_image())
        .features(DetectLabelsFeatureName::GeneralLabels)
        .features(DetectLabelsFeatureName::ImageProperties)
        .features(DetectLabelsFeatureName::GeneralLabels)
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("Features"));

    let err = DescribeProjectsInput::builder()
        .set_features(Some(vec![]))
        .build()
        .unwrap_err();
    assert_eq!(err.field(), Some("Features"));

    assert!(DescribeProjectsInput::builder()
        .features(CustomizationFeature::CustomLabels)
        .build()
        .is_ok());
}

#[test]
fn struct_literals_are_validated_too() {
    let input = ListFacesInput {
        collection_id: Some("my-collection".to_owned()),
        max_results: Some(-1),
        ..Default::default()
    };
    assert_eq!(input.validate().unwrap_err().field(), Some("MaxResults"));
}
