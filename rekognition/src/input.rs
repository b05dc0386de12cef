/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.
//!
//! Inputs are constructed with their builder, which refuses to produce an input that the
//! service would reject with a `ValidationException`:
//!
//! ```
//! use rekognition::input::SearchFacesInput;
//!
//! let input = SearchFacesInput::builder()
//!     .collection_id("my-collection")
//!     .face_id("a1b2c3d4-0000-4000-8000-000000000000")
//!     .max_faces(10)
//!     .build()
//!     .expect("valid input");
//! assert_eq!(input.face_match_threshold, None);
//! ```

use crate::config::Config;
use crate::error::BuildError;
use crate::validation::{self, Pattern};
use serde::{Deserialize, Serialize};
use smithy_http::body::SdkBody;
use smithy_http::operation::{Metadata, Operation, Request};

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Serialize `input` into an awsJson1.1 `POST` for `operation_name`.
fn build_operation<I, H>(
    input: &I,
    config: &Config,
    handler: H,
    operation_name: &'static str,
) -> Result<Operation<H>, BuildError>
where
    I: Serialize,
{
    let body = serde_json::to_vec(input)?;
    let content_length = body.len();
    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(config.endpoint_uri()?)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header(
            "x-amz-target",
            format!("RekognitionService.{}", operation_name),
        )
        .header(http::header::CONTENT_LENGTH, content_length)
        .body(SdkBody::from(body))?;
    tracing::debug!(
        operation = operation_name,
        content_length,
        "constructed request"
    );
    Ok(Operation::new(Request::new(request), handler)
        .with_metadata(Metadata::new(operation_name, "rekognition")))
}

/// See [`AssociateFacesInput`](crate::input::AssociateFacesInput)
pub mod associate_faces_input {
    /// A builder for [`AssociateFacesInput`](crate::input::AssociateFacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        user_id: Option<String>,
        face_ids: Option<Vec<String>>,
        user_match_threshold: Option<f32>,
        client_request_token: Option<String>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: Option<String>) -> Self {
            self.user_id = input;
            self
        }
        /// Appends an item to `face_ids`.
        pub fn face_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.face_ids.unwrap_or_default();
            v.push(input.into());
            self.face_ids = Some(v);
            self
        }
        pub fn set_face_ids(mut self, input: Option<Vec<String>>) -> Self {
            self.face_ids = input;
            self
        }
        pub fn user_match_threshold(mut self, input: f32) -> Self {
            self.user_match_threshold = Some(input);
            self
        }
        pub fn set_user_match_threshold(mut self, input: Option<f32>) -> Self {
            self.user_match_threshold = input;
            self
        }
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        /// Consumes the builder and constructs a [`AssociateFacesInput`](crate::input::AssociateFacesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::AssociateFacesInput, crate::error::BuildError> {
            let input = crate::input::AssociateFacesInput {
                collection_id: self.collection_id,
                user_id: self.user_id,
                face_ids: self.face_ids,
                user_match_threshold: self.user_match_threshold,
                client_request_token: self.client_request_token,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl AssociateFacesInput {
    /// Creates a new builder-style object to manufacture [`AssociateFacesInput`](crate::input::AssociateFacesInput)
    pub fn builder() -> crate::input::associate_faces_input::Builder {
        crate::input::associate_faces_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("UserId", self.user_id.as_ref())?;
        validation::required("FaceIds", self.face_ids.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::string(
            "UserId",
            self.user_id.as_deref(),
            1,
            Some(128),
            Some(Pattern::ExternalId),
        )?;
        validation::items("FaceIds", self.face_ids.as_deref(), 1, Some(100))?;
        validation::strings(
            "FaceIds",
            self.face_ids.as_deref(),
            36,
            Some(36),
            Some(Pattern::Uuid),
        )?;
        validation::range("UserMatchThreshold", self.user_match_threshold, 0.0, Some(100.0))?;
        validation::string(
            "ClientRequestToken",
            self.client_request_token.as_deref(),
            1,
            Some(64),
            Some(Pattern::Token),
        )?;
        Ok(())
    }

    /// Constructs the request for this input, generating a `ClientRequestToken` if none was set.
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::AssociateFaces>, BuildError> {
        self.validate()?;
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(
                config
                    .idempotency_token_provider()
                    .make_idempotency_token(),
            );
            tracing::trace!(operation = "AssociateFaces", "generated idempotency token");
        }
        build_operation(
            &input,
            config,
            crate::operation::AssociateFaces::new(),
            "AssociateFaces",
        )
    }
}

/// Associates up to 100 faces in a collection with an existing user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateFacesInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Id of the user within the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Ids of the faces to operate on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<String>>,
    /// Minimum confidence, 0 to 100, for a user match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_match_threshold: Option<f32>,
    /// Idempotency token. One is generated when left unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

/// See [`CreateCollectionInput`](crate::input::CreateCollectionInput)
pub mod create_collection_input {
    /// A builder for [`CreateCollectionInput`](crate::input::CreateCollectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        tags: Option<std::collections::HashMap<String, String>>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(
            mut self,
            input: Option<std::collections::HashMap<String, String>>,
        ) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCollectionInput`](crate::input::CreateCollectionInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::CreateCollectionInput, crate::error::BuildError> {
            let input = crate::input::CreateCollectionInput {
                collection_id: self.collection_id,
                tags: self.tags,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl CreateCollectionInput {
    /// Creates a new builder-style object to manufacture [`CreateCollectionInput`](crate::input::CreateCollectionInput)
    pub fn builder() -> crate::input::create_collection_input::Builder {
        crate::input::create_collection_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        if let Some(tags) = &self.tags {
            validation::count("Tags", Some(tags.len()), 0, Some(200))?;
            for (key, value) in tags {
                validation::string("Tags", Some(key), 1, Some(128), Some(Pattern::TagKey))?;
                validation::string("Tags", Some(value), 0, Some(256), Some(Pattern::TagValue))?;
            }
        }
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateCollection>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::CreateCollection::new(),
            "CreateCollection",
        )
    }
}

/// Creates a collection in the configured region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCollectionInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Tags to attach to the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<std::collections::HashMap<String, String>>,
}

/// See [`CreateUserInput`](crate::input::CreateUserInput)
pub mod create_user_input {
    /// A builder for [`CreateUserInput`](crate::input::CreateUserInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        user_id: Option<String>,
        client_request_token: Option<String>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: Option<String>) -> Self {
            self.user_id = input;
            self
        }
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateUserInput`](crate::input::CreateUserInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::CreateUserInput, crate::error::BuildError> {
            let input = crate::input::CreateUserInput {
                collection_id: self.collection_id,
                user_id: self.user_id,
                client_request_token: self.client_request_token,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl CreateUserInput {
    /// Creates a new builder-style object to manufacture [`CreateUserInput`](crate::input::CreateUserInput)
    pub fn builder() -> crate::input::create_user_input::Builder {
        crate::input::create_user_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("UserId", self.user_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::string(
            "UserId",
            self.user_id.as_deref(),
            1,
            Some(128),
            Some(Pattern::ExternalId),
        )?;
        validation::string(
            "ClientRequestToken",
            self.client_request_token.as_deref(),
            1,
            Some(64),
            Some(Pattern::Token),
        )?;
        Ok(())
    }

    /// Constructs the request for this input, generating a `ClientRequestToken` if none was set.
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateUser>, BuildError> {
        self.validate()?;
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(
                config
                    .idempotency_token_provider()
                    .make_idempotency_token(),
            );
            tracing::trace!(operation = "CreateUser", "generated idempotency token");
        }
        build_operation(
            &input,
            config,
            crate::operation::CreateUser::new(),
            "CreateUser",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

/// See [`DeleteFacesInput`](crate::input::DeleteFacesInput)
pub mod delete_faces_input {
    /// A builder for [`DeleteFacesInput`](crate::input::DeleteFacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        face_ids: Option<Vec<String>>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        /// Appends an item to `face_ids`.
        pub fn face_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.face_ids.unwrap_or_default();
            v.push(input.into());
            self.face_ids = Some(v);
            self
        }
        pub fn set_face_ids(mut self, input: Option<Vec<String>>) -> Self {
            self.face_ids = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteFacesInput`](crate::input::DeleteFacesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DeleteFacesInput, crate::error::BuildError> {
            let input = crate::input::DeleteFacesInput {
                collection_id: self.collection_id,
                face_ids: self.face_ids,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DeleteFacesInput {
    /// Creates a new builder-style object to manufacture [`DeleteFacesInput`](crate::input::DeleteFacesInput)
    pub fn builder() -> crate::input::delete_faces_input::Builder {
        crate::input::delete_faces_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("FaceIds", self.face_ids.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::items("FaceIds", self.face_ids.as_deref(), 1, Some(4096))?;
        validation::strings(
            "FaceIds",
            self.face_ids.as_deref(),
            36,
            Some(36),
            Some(Pattern::Uuid),
        )?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteFaces>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::DeleteFaces::new(),
            "DeleteFaces",
        )
    }
}

/// Deletes faces from a collection by face id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFacesInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Ids of the faces to operate on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<String>>,
}

/// See [`DeleteUserInput`](crate::input::DeleteUserInput)
pub mod delete_user_input {
    /// A builder for [`DeleteUserInput`](crate::input::DeleteUserInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        user_id: Option<String>,
        client_request_token: Option<String>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: Option<String>) -> Self {
            self.user_id = input;
            self
        }
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteUserInput`](crate::input::DeleteUserInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DeleteUserInput, crate::error::BuildError> {
            let input = crate::input::DeleteUserInput {
                collection_id: self.collection_id,
                user_id: self.user_id,
                client_request_token: self.client_request_token,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DeleteUserInput {
    /// Creates a new builder-style object to manufacture [`DeleteUserInput`](crate::input::DeleteUserInput)
    pub fn builder() -> crate::input::delete_user_input::Builder {
        crate::input::delete_user_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("UserId", self.user_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::string(
            "UserId",
            self.user_id.as_deref(),
            1,
            Some(128),
            Some(Pattern::ExternalId),
        )?;
        validation::string(
            "ClientRequestToken",
            self.client_request_token.as_deref(),
            1,
            Some(64),
            Some(Pattern::Token),
        )?;
        Ok(())
    }

    /// Constructs the request for this input, generating a `ClientRequestToken` if none was set.
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteUser>, BuildError> {
        self.validate()?;
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(
                config
                    .idempotency_token_provider()
                    .make_idempotency_token(),
            );
            tracing::trace!(operation = "DeleteUser", "generated idempotency token");
        }
        build_operation(
            &input,
            config,
            crate::operation::DeleteUser::new(),
            "DeleteUser",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

/// See [`DescribeCollectionInput`](crate::input::DescribeCollectionInput)
pub mod describe_collection_input {
    /// A builder for [`DescribeCollectionInput`](crate::input::DescribeCollectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeCollectionInput`](crate::input::DescribeCollectionInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DescribeCollectionInput, crate::error::BuildError> {
            let input = crate::input::DescribeCollectionInput {
                collection_id: self.collection_id,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DescribeCollectionInput {
    /// Creates a new builder-style object to manufacture [`DescribeCollectionInput`](crate::input::DescribeCollectionInput)
    pub fn builder() -> crate::input::describe_collection_input::Builder {
        crate::input::describe_collection_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeCollection>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::DescribeCollection::new(),
            "DescribeCollection",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCollectionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

/// See [`DescribeProjectsInput`](crate::input::DescribeProjectsInput)
pub mod describe_projects_input {
    /// A builder for [`DescribeProjectsInput`](crate::input::DescribeProjectsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
        project_names: Option<Vec<String>>,
        features: Option<Vec<crate::model::CustomizationFeature>>,
    }
    impl Builder {
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Appends an item to `project_names`.
        pub fn project_names(mut self, input: impl Into<String>) -> Self {
            let mut v = self.project_names.unwrap_or_default();
            v.push(input.into());
            self.project_names = Some(v);
            self
        }
        pub fn set_project_names(mut self, input: Option<Vec<String>>) -> Self {
            self.project_names = input;
            self
        }
        /// Appends an item to `features`.
        pub fn features(mut self, input: impl Into<crate::model::CustomizationFeature>) -> Self {
            let mut v = self.features.unwrap_or_default();
            v.push(input.into());
            self.features = Some(v);
            self
        }
        pub fn set_features(
            mut self,
            input: Option<Vec<crate::model::CustomizationFeature>>,
        ) -> Self {
            self.features = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeProjectsInput`](crate::input::DescribeProjectsInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DescribeProjectsInput, crate::error::BuildError> {
            let input = crate::input::DescribeProjectsInput {
                next_token: self.next_token,
                max_results: self.max_results,
                project_names: self.project_names,
                features: self.features,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DescribeProjectsInput {
    /// Creates a new builder-style object to manufacture [`DescribeProjectsInput`](crate::input::DescribeProjectsInput)
    pub fn builder() -> crate::input::describe_projects_input::Builder {
        crate::input::describe_projects_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::string("NextToken", self.next_token.as_deref(), 0, Some(1024), None)?;
        validation::range("MaxResults", self.max_results, 1.0, Some(100.0))?;
        validation::items("ProjectNames", self.project_names.as_deref(), 1, Some(10))?;
        validation::strings(
            "ProjectNames",
            self.project_names.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::items("Features", self.features.as_deref(), 1, Some(2))?;
        validation::variants("Features", self.features.as_deref())?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeProjects>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::DescribeProjects::new(),
            "DescribeProjects",
        )
    }
}

/// Lists Custom Labels and adapter projects. Paginated with `next_token`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProjectsInput {
    /// Pagination token from a previous response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum number of results to return per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Names of the projects to describe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_names: Option<Vec<String>>,
    /// Features to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<crate::model::CustomizationFeature>>,
}

/// See [`DetectFacesInput`](crate::input::DetectFacesInput)
pub mod detect_faces_input {
    /// A builder for [`DetectFacesInput`](crate::input::DetectFacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image: Option<crate::model::Image>,
        attributes: Option<Vec<crate::model::Attribute>>,
    }
    impl Builder {
        pub fn image(mut self, input: crate::model::Image) -> Self {
            self.image = Some(input);
            self
        }
        pub fn set_image(mut self, input: Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        /// Appends an item to `attributes`.
        pub fn attributes(mut self, input: impl Into<crate::model::Attribute>) -> Self {
            let mut v = self.attributes.unwrap_or_default();
            v.push(input.into());
            self.attributes = Some(v);
            self
        }
        pub fn set_attributes(mut self, input: Option<Vec<crate::model::Attribute>>) -> Self {
            self.attributes = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectFacesInput`](crate::input::DetectFacesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DetectFacesInput, crate::error::BuildError> {
            let input = crate::input::DetectFacesInput {
                image: self.image,
                attributes: self.attributes,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DetectFacesInput {
    /// Creates a new builder-style object to manufacture [`DetectFacesInput`](crate::input::DetectFacesInput)
    pub fn builder() -> crate::input::detect_faces_input::Builder {
        crate::input::detect_faces_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("Image", self.image.as_ref())?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        validation::variants("Attributes", self.attributes.as_deref())?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DetectFaces>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::DetectFaces::new(),
            "DetectFaces",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFacesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::model::Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<crate::model::Attribute>>,
}

/// See [`DetectLabelsInput`](crate::input::DetectLabelsInput)
pub mod detect_labels_input {
    /// A builder for [`DetectLabelsInput`](crate::input::DetectLabelsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image: Option<crate::model::Image>,
        max_labels: Option<i32>,
        min_confidence: Option<f32>,
        features: Option<Vec<crate::model::DetectLabelsFeatureName>>,
        settings: Option<crate::model::DetectLabelsSettings>,
    }
    impl Builder {
        pub fn image(mut self, input: crate::model::Image) -> Self {
            self.image = Some(input);
            self
        }
        pub fn set_image(mut self, input: Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        pub fn max_labels(mut self, input: i32) -> Self {
            self.max_labels = Some(input);
            self
        }
        pub fn set_max_labels(mut self, input: Option<i32>) -> Self {
            self.max_labels = input;
            self
        }
        pub fn min_confidence(mut self, input: f32) -> Self {
            self.min_confidence = Some(input);
            self
        }
        pub fn set_min_confidence(mut self, input: Option<f32>) -> Self {
            self.min_confidence = input;
            self
        }
        /// Appends an item to `features`.
        pub fn features(mut self, input: impl Into<crate::model::DetectLabelsFeatureName>) -> Self {
            let mut v = self.features.unwrap_or_default();
            v.push(input.into());
            self.features = Some(v);
            self
        }
        pub fn set_features(
            mut self,
            input: Option<Vec<crate::model::DetectLabelsFeatureName>>,
        ) -> Self {
            self.features = input;
            self
        }
        pub fn settings(mut self, input: crate::model::DetectLabelsSettings) -> Self {
            self.settings = Some(input);
            self
        }
        pub fn set_settings(mut self, input: Option<crate::model::DetectLabelsSettings>) -> Self {
            self.settings = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectLabelsInput`](crate::input::DetectLabelsInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DetectLabelsInput, crate::error::BuildError> {
            let input = crate::input::DetectLabelsInput {
                image: self.image,
                max_labels: self.max_labels,
                min_confidence: self.min_confidence,
                features: self.features,
                settings: self.settings,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DetectLabelsInput {
    /// Creates a new builder-style object to manufacture [`DetectLabelsInput`](crate::input::DetectLabelsInput)
    pub fn builder() -> crate::input::detect_labels_input::Builder {
        crate::input::detect_labels_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("Image", self.image.as_ref())?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        validation::range("MaxLabels", self.max_labels, 0.0, None)?;
        validation::range("MinConfidence", self.min_confidence, 0.0, Some(100.0))?;
        validation::items("Features", self.features.as_deref(), 0, Some(2))?;
        validation::variants("Features", self.features.as_deref())?;
        if let Some(settings) = &self.settings {
            settings.validate()?;
        }
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DetectLabels>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::DetectLabels::new(),
            "DetectLabels",
        )
    }
}

/// Detects objects, scenes and concepts in an image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsInput {
    /// The input image, as raw bytes or an S3 object reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::model::Image>,
    /// Maximum number of labels to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_labels: Option<i32>,
    /// Minimum confidence, 0 to 100, for a label to be returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,
    /// Features to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<crate::model::DetectLabelsFeatureName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<crate::model::DetectLabelsSettings>,
}

/// See [`DetectProtectiveEquipmentInput`](crate::input::DetectProtectiveEquipmentInput)
pub mod detect_protective_equipment_input {
    /// A builder for [`DetectProtectiveEquipmentInput`](crate::input::DetectProtectiveEquipmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image: Option<crate::model::Image>,
        summarization_attributes: Option<crate::model::ProtectiveEquipmentSummarizationAttributes>,
    }
    impl Builder {
        pub fn image(mut self, input: crate::model::Image) -> Self {
            self.image = Some(input);
            self
        }
        pub fn set_image(mut self, input: Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        pub fn summarization_attributes(
            mut self,
            input: crate::model::ProtectiveEquipmentSummarizationAttributes,
        ) -> Self {
            self.summarization_attributes = Some(input);
            self
        }
        pub fn set_summarization_attributes(
            mut self,
            input: Option<crate::model::ProtectiveEquipmentSummarizationAttributes>,
        ) -> Self {
            self.summarization_attributes = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectProtectiveEquipmentInput`](crate::input::DetectProtectiveEquipmentInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DetectProtectiveEquipmentInput, crate::error::BuildError> {
            let input = crate::input::DetectProtectiveEquipmentInput {
                image: self.image,
                summarization_attributes: self.summarization_attributes,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DetectProtectiveEquipmentInput {
    /// Creates a new builder-style object to manufacture [`DetectProtectiveEquipmentInput`](crate::input::DetectProtectiveEquipmentInput)
    pub fn builder() -> crate::input::detect_protective_equipment_input::Builder {
        crate::input::detect_protective_equipment_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("Image", self.image.as_ref())?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        if let Some(summarization_attributes) = &self.summarization_attributes {
            summarization_attributes.validate()?;
        }
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DetectProtectiveEquipment>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::DetectProtectiveEquipment::new(),
            "DetectProtectiveEquipment",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectProtectiveEquipmentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::model::Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarization_attributes: Option<crate::model::ProtectiveEquipmentSummarizationAttributes>,
}

/// See [`DetectTextInput`](crate::input::DetectTextInput)
pub mod detect_text_input {
    /// A builder for [`DetectTextInput`](crate::input::DetectTextInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image: Option<crate::model::Image>,
        filters: Option<crate::model::DetectTextFilters>,
    }
    impl Builder {
        pub fn image(mut self, input: crate::model::Image) -> Self {
            self.image = Some(input);
            self
        }
        pub fn set_image(mut self, input: Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        pub fn filters(mut self, input: crate::model::DetectTextFilters) -> Self {
            self.filters = Some(input);
            self
        }
        pub fn set_filters(mut self, input: Option<crate::model::DetectTextFilters>) -> Self {
            self.filters = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectTextInput`](crate::input::DetectTextInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DetectTextInput, crate::error::BuildError> {
            let input = crate::input::DetectTextInput {
                image: self.image,
                filters: self.filters,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DetectTextInput {
    /// Creates a new builder-style object to manufacture [`DetectTextInput`](crate::input::DetectTextInput)
    pub fn builder() -> crate::input::detect_text_input::Builder {
        crate::input::detect_text_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("Image", self.image.as_ref())?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        if let Some(filters) = &self.filters {
            filters.validate()?;
        }
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DetectText>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::DetectText::new(),
            "DetectText",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectTextInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::model::Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<crate::model::DetectTextFilters>,
}

/// See [`DisassociateFacesInput`](crate::input::DisassociateFacesInput)
pub mod disassociate_faces_input {
    /// A builder for [`DisassociateFacesInput`](crate::input::DisassociateFacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        user_id: Option<String>,
        client_request_token: Option<String>,
        face_ids: Option<Vec<String>>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: Option<String>) -> Self {
            self.user_id = input;
            self
        }
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        /// Appends an item to `face_ids`.
        pub fn face_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.face_ids.unwrap_or_default();
            v.push(input.into());
            self.face_ids = Some(v);
            self
        }
        pub fn set_face_ids(mut self, input: Option<Vec<String>>) -> Self {
            self.face_ids = input;
            self
        }
        /// Consumes the builder and constructs a [`DisassociateFacesInput`](crate::input::DisassociateFacesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::DisassociateFacesInput, crate::error::BuildError> {
            let input = crate::input::DisassociateFacesInput {
                collection_id: self.collection_id,
                user_id: self.user_id,
                client_request_token: self.client_request_token,
                face_ids: self.face_ids,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl DisassociateFacesInput {
    /// Creates a new builder-style object to manufacture [`DisassociateFacesInput`](crate::input::DisassociateFacesInput)
    pub fn builder() -> crate::input::disassociate_faces_input::Builder {
        crate::input::disassociate_faces_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("UserId", self.user_id.as_ref())?;
        validation::required("FaceIds", self.face_ids.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::string(
            "UserId",
            self.user_id.as_deref(),
            1,
            Some(128),
            Some(Pattern::ExternalId),
        )?;
        validation::string(
            "ClientRequestToken",
            self.client_request_token.as_deref(),
            1,
            Some(64),
            Some(Pattern::Token),
        )?;
        validation::items("FaceIds", self.face_ids.as_deref(), 1, Some(100))?;
        validation::strings(
            "FaceIds",
            self.face_ids.as_deref(),
            36,
            Some(36),
            Some(Pattern::Uuid),
        )?;
        Ok(())
    }

    /// Constructs the request for this input, generating a `ClientRequestToken` if none was set.
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DisassociateFaces>, BuildError> {
        self.validate()?;
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(
                config
                    .idempotency_token_provider()
                    .make_idempotency_token(),
            );
            tracing::trace!(
                operation = "DisassociateFaces",
                "generated idempotency token"
            );
        }
        build_operation(
            &input,
            config,
            crate::operation::DisassociateFaces::new(),
            "DisassociateFaces",
        )
    }
}

/// Removes the association between faces and a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateFacesInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Id of the user within the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Idempotency token. One is generated when left unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Ids of the faces to operate on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<String>>,
}

/// See [`GetCelebrityRecognitionInput`](crate::input::GetCelebrityRecognitionInput)
pub mod get_celebrity_recognition_input {
    /// A builder for [`GetCelebrityRecognitionInput`](crate::input::GetCelebrityRecognitionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: Option<String>,
        max_results: Option<i32>,
        next_token: Option<String>,
        sort_by: Option<crate::model::CelebrityRecognitionSortBy>,
    }
    impl Builder {
        pub fn job_id(mut self, input: impl Into<String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: Option<String>) -> Self {
            self.job_id = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::CelebrityRecognitionSortBy) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(
            mut self,
            input: Option<crate::model::CelebrityRecognitionSortBy>,
        ) -> Self {
            self.sort_by = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCelebrityRecognitionInput`](crate::input::GetCelebrityRecognitionInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::GetCelebrityRecognitionInput, crate::error::BuildError> {
            let input = crate::input::GetCelebrityRecognitionInput {
                job_id: self.job_id,
                max_results: self.max_results,
                next_token: self.next_token,
                sort_by: self.sort_by,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl GetCelebrityRecognitionInput {
    /// Creates a new builder-style object to manufacture [`GetCelebrityRecognitionInput`](crate::input::GetCelebrityRecognitionInput)
    pub fn builder() -> crate::input::get_celebrity_recognition_input::Builder {
        crate::input::get_celebrity_recognition_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("JobId", self.job_id.as_ref())?;
        validation::string("JobId", self.job_id.as_deref(), 1, Some(64), Some(Pattern::Token))?;
        validation::range("MaxResults", self.max_results, 1.0, None)?;
        validation::string("NextToken", self.next_token.as_deref(), 0, Some(255), None)?;
        validation::variant("SortBy", self.sort_by.as_ref())?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetCelebrityRecognition>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::GetCelebrityRecognition::new(),
            "GetCelebrityRecognition",
        )
    }
}

/// Gets the results of a celebrity recognition job on a stored video.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCelebrityRecognitionInput {
    /// Job id returned when the recognition job was started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Maximum number of results to return per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<crate::model::CelebrityRecognitionSortBy>,
}

/// See [`IndexFacesInput`](crate::input::IndexFacesInput)
pub mod index_faces_input {
    /// A builder for [`IndexFacesInput`](crate::input::IndexFacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        image: Option<crate::model::Image>,
        external_image_id: Option<String>,
        detection_attributes: Option<Vec<crate::model::Attribute>>,
        max_faces: Option<i32>,
        quality_filter: Option<crate::model::QualityFilter>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn image(mut self, input: crate::model::Image) -> Self {
            self.image = Some(input);
            self
        }
        pub fn set_image(mut self, input: Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        pub fn external_image_id(mut self, input: impl Into<String>) -> Self {
            self.external_image_id = Some(input.into());
            self
        }
        pub fn set_external_image_id(mut self, input: Option<String>) -> Self {
            self.external_image_id = input;
            self
        }
        /// Appends an item to `detection_attributes`.
        pub fn detection_attributes(mut self, input: impl Into<crate::model::Attribute>) -> Self {
            let mut v = self.detection_attributes.unwrap_or_default();
            v.push(input.into());
            self.detection_attributes = Some(v);
            self
        }
        pub fn set_detection_attributes(
            mut self,
            input: Option<Vec<crate::model::Attribute>>,
        ) -> Self {
            self.detection_attributes = input;
            self
        }
        pub fn max_faces(mut self, input: i32) -> Self {
            self.max_faces = Some(input);
            self
        }
        pub fn set_max_faces(mut self, input: Option<i32>) -> Self {
            self.max_faces = input;
            self
        }
        pub fn quality_filter(mut self, input: crate::model::QualityFilter) -> Self {
            self.quality_filter = Some(input);
            self
        }
        pub fn set_quality_filter(mut self, input: Option<crate::model::QualityFilter>) -> Self {
            self.quality_filter = input;
            self
        }
        /// Consumes the builder and constructs a [`IndexFacesInput`](crate::input::IndexFacesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::IndexFacesInput, crate::error::BuildError> {
            let input = crate::input::IndexFacesInput {
                collection_id: self.collection_id,
                image: self.image,
                external_image_id: self.external_image_id,
                detection_attributes: self.detection_attributes,
                max_faces: self.max_faces,
                quality_filter: self.quality_filter,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl IndexFacesInput {
    /// Creates a new builder-style object to manufacture [`IndexFacesInput`](crate::input::IndexFacesInput)
    pub fn builder() -> crate::input::index_faces_input::Builder {
        crate::input::index_faces_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("Image", self.image.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        validation::string(
            "ExternalImageId",
            self.external_image_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::ExternalId),
        )?;
        validation::variants("DetectionAttributes", self.detection_attributes.as_deref())?;
        validation::range("MaxFaces", self.max_faces, 1.0, None)?;
        validation::variant("QualityFilter", self.quality_filter.as_ref())?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::IndexFaces>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::IndexFaces::new(),
            "IndexFaces",
        )
    }
}

/// Detects faces in an image and adds them to a collection.
///
/// Faces that were detected but filtered out are returned in `unindexed_faces` of the output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFacesInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// The input image, as raw bytes or an S3 object reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::model::Image>,
    /// Id the caller attaches to every face detected in the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_image_id: Option<String>,
    /// Facial attributes to return for each indexed face
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_attributes: Option<Vec<crate::model::Attribute>>,
    /// Maximum number of faces to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<i32>,
    /// Filter applied to faces before the operation runs. Defaults to `AUTO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_filter: Option<crate::model::QualityFilter>,
}

/// See [`ListFacesInput`](crate::input::ListFacesInput)
pub mod list_faces_input {
    /// A builder for [`ListFacesInput`](crate::input::ListFacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        next_token: Option<String>,
        max_results: Option<i32>,
        user_id: Option<String>,
        face_ids: Option<Vec<String>>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: Option<String>) -> Self {
            self.user_id = input;
            self
        }
        /// Appends an item to `face_ids`.
        pub fn face_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.face_ids.unwrap_or_default();
            v.push(input.into());
            self.face_ids = Some(v);
            self
        }
        pub fn set_face_ids(mut self, input: Option<Vec<String>>) -> Self {
            self.face_ids = input;
            self
        }
        /// Consumes the builder and constructs a [`ListFacesInput`](crate::input::ListFacesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::ListFacesInput, crate::error::BuildError> {
            let input = crate::input::ListFacesInput {
                collection_id: self.collection_id,
                next_token: self.next_token,
                max_results: self.max_results,
                user_id: self.user_id,
                face_ids: self.face_ids,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl ListFacesInput {
    /// Creates a new builder-style object to manufacture [`ListFacesInput`](crate::input::ListFacesInput)
    pub fn builder() -> crate::input::list_faces_input::Builder {
        crate::input::list_faces_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::string("NextToken", self.next_token.as_deref(), 0, Some(255), None)?;
        validation::range("MaxResults", self.max_results, 0.0, Some(4096.0))?;
        validation::string(
            "UserId",
            self.user_id.as_deref(),
            1,
            Some(128),
            Some(Pattern::ExternalId),
        )?;
        validation::items("FaceIds", self.face_ids.as_deref(), 1, Some(4096))?;
        validation::strings(
            "FaceIds",
            self.face_ids.as_deref(),
            36,
            Some(36),
            Some(Pattern::Uuid),
        )?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListFaces>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::ListFaces::new(),
            "ListFaces",
        )
    }
}

/// Lists the faces in a collection, optionally restricted to a user or to specific faces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFacesInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Pagination token from a previous response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum number of results to return per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Id of the user within the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Ids of the faces to operate on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<String>>,
}

/// See [`ListUsersInput`](crate::input::ListUsersInput)
pub mod list_users_input {
    /// A builder for [`ListUsersInput`](crate::input::ListUsersInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListUsersInput`](crate::input::ListUsersInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::ListUsersInput, crate::error::BuildError> {
            let input = crate::input::ListUsersInput {
                collection_id: self.collection_id,
                max_results: self.max_results,
                next_token: self.next_token,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl ListUsersInput {
    /// Creates a new builder-style object to manufacture [`ListUsersInput`](crate::input::ListUsersInput)
    pub fn builder() -> crate::input::list_users_input::Builder {
        crate::input::list_users_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::range("MaxResults", self.max_results, 1.0, Some(500.0))?;
        validation::string("NextToken", self.next_token.as_deref(), 0, Some(255), None)?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListUsers>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::ListUsers::new(),
            "ListUsers",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// See [`RecognizeCelebritiesInput`](crate::input::RecognizeCelebritiesInput)
pub mod recognize_celebrities_input {
    /// A builder for [`RecognizeCelebritiesInput`](crate::input::RecognizeCelebritiesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        image: Option<crate::model::Image>,
    }
    impl Builder {
        pub fn image(mut self, input: crate::model::Image) -> Self {
            self.image = Some(input);
            self
        }
        pub fn set_image(mut self, input: Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        /// Consumes the builder and constructs a [`RecognizeCelebritiesInput`](crate::input::RecognizeCelebritiesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::RecognizeCelebritiesInput, crate::error::BuildError> {
            let input = crate::input::RecognizeCelebritiesInput {
                image: self.image,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl RecognizeCelebritiesInput {
    /// Creates a new builder-style object to manufacture [`RecognizeCelebritiesInput`](crate::input::RecognizeCelebritiesInput)
    pub fn builder() -> crate::input::recognize_celebrities_input::Builder {
        crate::input::recognize_celebrities_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("Image", self.image.as_ref())?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::RecognizeCelebrities>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::RecognizeCelebrities::new(),
            "RecognizeCelebrities",
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecognizeCelebritiesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::model::Image>,
}

/// See [`SearchFacesInput`](crate::input::SearchFacesInput)
pub mod search_faces_input {
    /// A builder for [`SearchFacesInput`](crate::input::SearchFacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        face_id: Option<String>,
        max_faces: Option<i32>,
        face_match_threshold: Option<f32>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn face_id(mut self, input: impl Into<String>) -> Self {
            self.face_id = Some(input.into());
            self
        }
        pub fn set_face_id(mut self, input: Option<String>) -> Self {
            self.face_id = input;
            self
        }
        pub fn max_faces(mut self, input: i32) -> Self {
            self.max_faces = Some(input);
            self
        }
        pub fn set_max_faces(mut self, input: Option<i32>) -> Self {
            self.max_faces = input;
            self
        }
        pub fn face_match_threshold(mut self, input: f32) -> Self {
            self.face_match_threshold = Some(input);
            self
        }
        pub fn set_face_match_threshold(mut self, input: Option<f32>) -> Self {
            self.face_match_threshold = input;
            self
        }
        /// Consumes the builder and constructs a [`SearchFacesInput`](crate::input::SearchFacesInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::SearchFacesInput, crate::error::BuildError> {
            let input = crate::input::SearchFacesInput {
                collection_id: self.collection_id,
                face_id: self.face_id,
                max_faces: self.max_faces,
                face_match_threshold: self.face_match_threshold,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl SearchFacesInput {
    /// Creates a new builder-style object to manufacture [`SearchFacesInput`](crate::input::SearchFacesInput)
    pub fn builder() -> crate::input::search_faces_input::Builder {
        crate::input::search_faces_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("FaceId", self.face_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::string("FaceId", self.face_id.as_deref(), 36, Some(36), Some(Pattern::Uuid))?;
        validation::range("MaxFaces", self.max_faces, 1.0, Some(4096.0))?;
        validation::range("FaceMatchThreshold", self.face_match_threshold, 0.0, Some(100.0))?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::SearchFaces>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::SearchFaces::new(),
            "SearchFaces",
        )
    }
}

/// Searches a collection for faces matching a face already in the collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Id of a face in the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    /// Maximum number of faces to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<i32>,
    /// Minimum confidence, 0 to 100, for a face match to be returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f32>,
}

/// See [`SearchFacesByImageInput`](crate::input::SearchFacesByImageInput)
pub mod search_faces_by_image_input {
    /// A builder for [`SearchFacesByImageInput`](crate::input::SearchFacesByImageInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        image: Option<crate::model::Image>,
        max_faces: Option<i32>,
        face_match_threshold: Option<f32>,
        quality_filter: Option<crate::model::QualityFilter>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn image(mut self, input: crate::model::Image) -> Self {
            self.image = Some(input);
            self
        }
        pub fn set_image(mut self, input: Option<crate::model::Image>) -> Self {
            self.image = input;
            self
        }
        pub fn max_faces(mut self, input: i32) -> Self {
            self.max_faces = Some(input);
            self
        }
        pub fn set_max_faces(mut self, input: Option<i32>) -> Self {
            self.max_faces = input;
            self
        }
        pub fn face_match_threshold(mut self, input: f32) -> Self {
            self.face_match_threshold = Some(input);
            self
        }
        pub fn set_face_match_threshold(mut self, input: Option<f32>) -> Self {
            self.face_match_threshold = input;
            self
        }
        pub fn quality_filter(mut self, input: crate::model::QualityFilter) -> Self {
            self.quality_filter = Some(input);
            self
        }
        pub fn set_quality_filter(mut self, input: Option<crate::model::QualityFilter>) -> Self {
            self.quality_filter = input;
            self
        }
        /// Consumes the builder and constructs a [`SearchFacesByImageInput`](crate::input::SearchFacesByImageInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::SearchFacesByImageInput, crate::error::BuildError> {
            let input = crate::input::SearchFacesByImageInput {
                collection_id: self.collection_id,
                image: self.image,
                max_faces: self.max_faces,
                face_match_threshold: self.face_match_threshold,
                quality_filter: self.quality_filter,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl SearchFacesByImageInput {
    /// Creates a new builder-style object to manufacture [`SearchFacesByImageInput`](crate::input::SearchFacesByImageInput)
    pub fn builder() -> crate::input::search_faces_by_image_input::Builder {
        crate::input::search_faces_by_image_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::required("Image", self.image.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        validation::range("MaxFaces", self.max_faces, 1.0, Some(4096.0))?;
        validation::range("FaceMatchThreshold", self.face_match_threshold, 0.0, Some(100.0))?;
        validation::variant("QualityFilter", self.quality_filter.as_ref())?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::SearchFacesByImage>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::SearchFacesByImage::new(),
            "SearchFacesByImage",
        )
    }
}

/// Searches a collection for faces matching the largest face in an image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesByImageInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// The input image, as raw bytes or an S3 object reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::model::Image>,
    /// Maximum number of faces to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_faces: Option<i32>,
    /// Minimum confidence, 0 to 100, for a face match to be returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f32>,
    /// Filter applied to faces before the operation runs. Defaults to `AUTO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_filter: Option<crate::model::QualityFilter>,
}

/// See [`SearchUsersInput`](crate::input::SearchUsersInput)
pub mod search_users_input {
    /// A builder for [`SearchUsersInput`](crate::input::SearchUsersInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        collection_id: Option<String>,
        user_id: Option<String>,
        face_id: Option<String>,
        user_match_threshold: Option<f32>,
        max_users: Option<i32>,
    }
    impl Builder {
        pub fn collection_id(mut self, input: impl Into<String>) -> Self {
            self.collection_id = Some(input.into());
            self
        }
        pub fn set_collection_id(mut self, input: Option<String>) -> Self {
            self.collection_id = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: Option<String>) -> Self {
            self.user_id = input;
            self
        }
        pub fn face_id(mut self, input: impl Into<String>) -> Self {
            self.face_id = Some(input.into());
            self
        }
        pub fn set_face_id(mut self, input: Option<String>) -> Self {
            self.face_id = input;
            self
        }
        pub fn user_match_threshold(mut self, input: f32) -> Self {
            self.user_match_threshold = Some(input);
            self
        }
        pub fn set_user_match_threshold(mut self, input: Option<f32>) -> Self {
            self.user_match_threshold = input;
            self
        }
        pub fn max_users(mut self, input: i32) -> Self {
            self.max_users = Some(input);
            self
        }
        pub fn set_max_users(mut self, input: Option<i32>) -> Self {
            self.max_users = input;
            self
        }
        /// Consumes the builder and constructs a [`SearchUsersInput`](crate::input::SearchUsersInput).
        ///
        /// Fails if a required field is missing or a field violates a documented constraint.
        pub fn build(
            self,
        ) -> Result<crate::input::SearchUsersInput, crate::error::BuildError> {
            let input = crate::input::SearchUsersInput {
                collection_id: self.collection_id,
                user_id: self.user_id,
                face_id: self.face_id,
                user_match_threshold: self.user_match_threshold,
                max_users: self.max_users,
            };
            input.validate()?;
            Ok(input)
        }
    }
}

impl SearchUsersInput {
    /// Creates a new builder-style object to manufacture [`SearchUsersInput`](crate::input::SearchUsersInput)
    pub fn builder() -> crate::input::search_users_input::Builder {
        crate::input::search_users_input::Builder::default()
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        validation::required("CollectionId", self.collection_id.as_ref())?;
        validation::string(
            "CollectionId",
            self.collection_id.as_deref(),
            1,
            Some(255),
            Some(Pattern::CollectionId),
        )?;
        validation::string(
            "UserId",
            self.user_id.as_deref(),
            1,
            Some(128),
            Some(Pattern::ExternalId),
        )?;
        validation::string("FaceId", self.face_id.as_deref(), 36, Some(36), Some(Pattern::Uuid))?;
        validation::range("UserMatchThreshold", self.user_match_threshold, 0.0, Some(100.0))?;
        validation::range("MaxUsers", self.max_users, 1.0, Some(500.0))?;
        Ok(())
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::SearchUsers>, BuildError> {
        self.validate()?;
        build_operation(
            self,
            config,
            crate::operation::SearchUsers::new(),
            "SearchUsers",
        )
    }
}

/// Searches a collection for users matching a user id or a face id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchUsersInput {
    /// Id of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Id of the user within the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Id of a face in the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    /// Minimum confidence, 0 to 100, for a user match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_match_threshold: Option<f32>,
    /// Maximum number of users to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_users: Option<i32>,
}
