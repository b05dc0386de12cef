/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers, one per operation.
//!
//! Each handler turns the raw HTTP response for its operation into the operation's output, or
//! into a [`RekognitionError`](crate::error::RekognitionError).

use crate::aws_json_errors;
use crate::error::RekognitionError;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use smithy_http::response::ParseStrictResponse;

fn parse_json_response<O>(response: &http::Response<Bytes>) -> Result<O, RekognitionError>
where
    O: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(aws_json_errors::parse_error(response));
    }
    // operations with an empty output may answer with no body at all
    let body: &[u8] = match response.body().as_ref() {
        b"" => b"{}",
        body => body,
    };
    serde_json::from_slice(body).map_err(RekognitionError::unhandled)
}

/// Parses the response to a [`AssociateFacesInput`](crate::input::AssociateFacesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AssociateFaces {
    _private: (),
}
impl AssociateFaces {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for AssociateFaces {
    type Output = Result<crate::output::AssociateFacesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`CreateCollectionInput`](crate::input::CreateCollectionInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateCollection {
    _private: (),
}
impl CreateCollection {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateCollection {
    type Output = Result<crate::output::CreateCollectionOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`CreateUserInput`](crate::input::CreateUserInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateUser {
    _private: (),
}
impl CreateUser {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateUser {
    type Output = Result<crate::output::CreateUserOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DeleteFacesInput`](crate::input::DeleteFacesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteFaces {
    _private: (),
}
impl DeleteFaces {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteFaces {
    type Output = Result<crate::output::DeleteFacesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DeleteUserInput`](crate::input::DeleteUserInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteUser {
    _private: (),
}
impl DeleteUser {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteUser {
    type Output = Result<crate::output::DeleteUserOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DescribeCollectionInput`](crate::input::DescribeCollectionInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeCollection {
    _private: (),
}
impl DescribeCollection {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeCollection {
    type Output = Result<crate::output::DescribeCollectionOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DescribeProjectsInput`](crate::input::DescribeProjectsInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeProjects {
    _private: (),
}
impl DescribeProjects {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeProjects {
    type Output = Result<crate::output::DescribeProjectsOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DetectFacesInput`](crate::input::DetectFacesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DetectFaces {
    _private: (),
}
impl DetectFaces {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DetectFaces {
    type Output = Result<crate::output::DetectFacesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DetectLabelsInput`](crate::input::DetectLabelsInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DetectLabels {
    _private: (),
}
impl DetectLabels {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DetectLabels {
    type Output = Result<crate::output::DetectLabelsOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DetectProtectiveEquipmentInput`](crate::input::DetectProtectiveEquipmentInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DetectProtectiveEquipment {
    _private: (),
}
impl DetectProtectiveEquipment {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DetectProtectiveEquipment {
    type Output = Result<crate::output::DetectProtectiveEquipmentOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DetectTextInput`](crate::input::DetectTextInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DetectText {
    _private: (),
}
impl DetectText {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DetectText {
    type Output = Result<crate::output::DetectTextOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`DisassociateFacesInput`](crate::input::DisassociateFacesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DisassociateFaces {
    _private: (),
}
impl DisassociateFaces {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DisassociateFaces {
    type Output = Result<crate::output::DisassociateFacesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`GetCelebrityRecognitionInput`](crate::input::GetCelebrityRecognitionInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetCelebrityRecognition {
    _private: (),
}
impl GetCelebrityRecognition {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for GetCelebrityRecognition {
    type Output = Result<crate::output::GetCelebrityRecognitionOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`IndexFacesInput`](crate::input::IndexFacesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct IndexFaces {
    _private: (),
}
impl IndexFaces {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for IndexFaces {
    type Output = Result<crate::output::IndexFacesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`ListFacesInput`](crate::input::ListFacesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListFaces {
    _private: (),
}
impl ListFaces {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListFaces {
    type Output = Result<crate::output::ListFacesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`ListUsersInput`](crate::input::ListUsersInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListUsers {
    _private: (),
}
impl ListUsers {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListUsers {
    type Output = Result<crate::output::ListUsersOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`RecognizeCelebritiesInput`](crate::input::RecognizeCelebritiesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct RecognizeCelebrities {
    _private: (),
}
impl RecognizeCelebrities {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for RecognizeCelebrities {
    type Output = Result<crate::output::RecognizeCelebritiesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`SearchFacesInput`](crate::input::SearchFacesInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct SearchFaces {
    _private: (),
}
impl SearchFaces {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for SearchFaces {
    type Output = Result<crate::output::SearchFacesOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`SearchFacesByImageInput`](crate::input::SearchFacesByImageInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct SearchFacesByImage {
    _private: (),
}
impl SearchFacesByImage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for SearchFacesByImage {
    type Output = Result<crate::output::SearchFacesByImageOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}

/// Parses the response to a [`SearchUsersInput`](crate::input::SearchUsersInput) request
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct SearchUsers {
    _private: (),
}
impl SearchUsers {
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for SearchUsers {
    type Output = Result<crate::output::SearchUsersOutput, RekognitionError>;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_json_response(response)
    }
}
#[cfg(test)]
mod test {
    use crate::model::UserStatus;
    use crate::operation::{CreateUser, ListUsers, SearchFaces};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn parse_success() {
        let output = ListUsers::new()
            .parse(&response(
                200,
                r#"{"Users":[{"UserId":"user-1","UserStatus":"ACTIVE"}],"NextToken":"abc"}"#,
            ))
            .expect("valid response");
        let users = output.users.expect("users are present");
        assert_eq!(users[0].user_id.as_deref(), Some("user-1"));
        assert_eq!(users[0].user_status, Some(UserStatus::Active));
        assert_eq!(output.next_token.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_body_is_an_empty_output() {
        CreateUser::new()
            .parse(&response(200, ""))
            .expect("no body is fine for an empty output");
    }

    #[test]
    fn error_status_is_parsed_as_service_error() {
        let err = SearchFaces::new()
            .parse(&response(
                400,
                r#"{"__type":"ResourceNotFoundException","Message":"The collection id: faces does not exist"}"#,
            ))
            .expect_err("400 is an error");
        assert!(err.is_resource_not_found_error());
        assert_eq!(
            err.message(),
            Some("The collection id: faces does not exist")
        );
    }

    #[test]
    fn malformed_body_is_unhandled() {
        let err = SearchFaces::new()
            .parse(&response(200, r#"{"FaceMatches":"#))
            .expect_err("truncated body");
        assert!(err.is_unhandled());
    }
}
