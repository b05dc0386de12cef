/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::validation::ConstraintViolation;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// Failure to construct an input or its HTTP request.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("`{field}` is required")]
    MissingField { field: &'static str },
    #[error("`{field}` is invalid: {violation}")]
    InvalidField {
        field: &'static str,
        violation: ConstraintViolation,
    },
    #[error("no region was configured")]
    MissingRegion,
    #[error("the configured endpoint is not a valid URI: {0}")]
    InvalidEndpoint(String),
    #[error("failed to serialize the request body")]
    SerializationError(#[from] serde_json::Error),
    #[error("failed to construct the HTTP request")]
    InvalidRequest(#[from] http::Error),
}

impl BuildError {
    /// Name of the offending field, if the failure concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BuildError::MissingField { field } | BuildError::InvalidField { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    pub fn violation(&self) -> Option<&ConstraintViolation> {
        match self {
            BuildError::InvalidField { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

/// An error returned by Rekognition, or a response that could not be understood.
#[derive(Debug)]
pub struct RekognitionError {
    pub kind: RekognitionErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[non_exhaustive]
#[derive(Debug)]
pub enum RekognitionErrorKind {
    /// You are not authorized to perform the action.
    AccessDeniedError,
    /// A user or face is already being modified by a concurrent request.
    ConflictError,
    /// A `ClientRequestToken` was reused with different parameters.
    IdempotentParameterMismatchError,
    /// The input image size exceeds the allowed limit.
    ImageTooLargeError,
    /// Rekognition experienced a service issue.
    InternalServerError,
    /// The provided image format is not supported.
    InvalidImageFormatError,
    /// Pagination token in the request is not valid.
    InvalidPaginationTokenError,
    /// Input parameter violated a constraint.
    InvalidParameterError,
    /// Rekognition is unable to access the S3 object specified in the request.
    InvalidS3ObjectError,
    LimitExceededError,
    ProvisionedThroughputExceededError,
    ResourceAlreadyExistsError,
    ResourceInUseError,
    ResourceNotFoundError,
    ServiceQuotaExceededError,
    ThrottlingError,
    /// An error code this crate does not model, or a response that could not be parsed
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for RekognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RekognitionErrorKind::Unhandled(inner) => inner.fmt(f),
            modeled => {
                write!(f, "{:?}", modeled)?;
                if let Some(message) = self.meta.message() {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }
    }
}

impl ProvideErrorKind for RekognitionError {
    fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            RekognitionErrorKind::ThrottlingError
            | RekognitionErrorKind::ProvisionedThroughputExceededError => {
                Some(ErrorKind::ThrottlingError)
            }
            RekognitionErrorKind::InternalServerError => Some(ErrorKind::ServerError),
            _ => None,
        }
    }
}

impl RekognitionError {
    pub fn new(kind: RekognitionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: RekognitionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    /// An unmodeled error: the generic metadata is both the source and the metadata.
    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: RekognitionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::AccessDeniedError)
    }

    pub fn is_conflict_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::ConflictError)
    }

    pub fn is_idempotent_parameter_mismatch_error(&self) -> bool {
        matches!(
            &self.kind,
            RekognitionErrorKind::IdempotentParameterMismatchError
        )
    }

    pub fn is_image_too_large_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::ImageTooLargeError)
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::InternalServerError)
    }

    pub fn is_invalid_image_format_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::InvalidImageFormatError)
    }

    pub fn is_invalid_pagination_token_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::InvalidPaginationTokenError)
    }

    pub fn is_invalid_parameter_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::InvalidParameterError)
    }

    pub fn is_invalid_s3_object_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::InvalidS3ObjectError)
    }

    pub fn is_limit_exceeded_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::LimitExceededError)
    }

    pub fn is_provisioned_throughput_exceeded_error(&self) -> bool {
        matches!(
            &self.kind,
            RekognitionErrorKind::ProvisionedThroughputExceededError
        )
    }

    pub fn is_resource_already_exists_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::ResourceAlreadyExistsError)
    }

    pub fn is_resource_in_use_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::ResourceInUseError)
    }

    pub fn is_resource_not_found_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::ResourceNotFoundError)
    }

    pub fn is_service_quota_exceeded_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::ServiceQuotaExceededError)
    }

    pub fn is_throttling_error(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::ThrottlingError)
    }

    pub fn is_unhandled(&self) -> bool {
        matches!(&self.kind, RekognitionErrorKind::Unhandled(_))
    }
}

impl std::error::Error for RekognitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            RekognitionErrorKind::Unhandled(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}
