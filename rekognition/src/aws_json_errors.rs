/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::{RekognitionError, RekognitionErrorKind};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Response};
use serde::Deserialize;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Reduce an error code to its shape name.
///
/// Codes can arrive fully qualified (`com.amazonaws.rekognition#ThrottlingException`) or with a
/// trailing URL (`ThrottlingException:http://internal.amazon.com/...`).
pub(crate) fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(rename = "__type")]
    type_: Option<String>,
    #[serde(alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
    #[serde(rename = "Logref")]
    logref: Option<String>,
}

fn header<'a>(headers: &'a HeaderMap<HeaderValue>, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Extract the generic error metadata from an error response.
///
/// The code is taken from the `x-amzn-errortype` header when present, then from `__type` and
/// finally `code` in the body. A body that is not JSON yields metadata without a message.
pub(crate) fn parse_generic_error(response: &Response<Bytes>) -> smithy_types::Error {
    let body: ErrorBody = serde_json::from_slice(response.body()).unwrap_or_default();
    let mut err = smithy_types::Error::builder();
    let code = header(response.headers(), ERROR_TYPE_HEADER)
        .or_else(|| body.type_.as_deref())
        .or_else(|| body.code.as_deref());
    if let Some(code) = code {
        err = err.code(sanitize_error_code(code));
    }
    if let Some(message) = body.message {
        err = err.message(message);
    }
    if let Some(logref) = body.logref {
        err = err.custom("logref", logref);
    }
    if let Some(request_id) = header(response.headers(), REQUEST_ID_HEADER) {
        err = err.request_id(request_id);
    }
    err.build()
}

/// Map a non-success response to the error for the code it carries.
pub(crate) fn parse_error(response: &Response<Bytes>) -> RekognitionError {
    let generic = parse_generic_error(response);
    let kind = match generic.code() {
        Some("AccessDeniedException") => RekognitionErrorKind::AccessDeniedError,
        Some("ConflictException") => RekognitionErrorKind::ConflictError,
        Some("IdempotentParameterMismatchException") => {
            RekognitionErrorKind::IdempotentParameterMismatchError
        }
        Some("ImageTooLargeException") => RekognitionErrorKind::ImageTooLargeError,
        Some("InternalServerError") => RekognitionErrorKind::InternalServerError,
        Some("InvalidImageFormatException") => RekognitionErrorKind::InvalidImageFormatError,
        Some("InvalidPaginationTokenException") => {
            RekognitionErrorKind::InvalidPaginationTokenError
        }
        Some("InvalidParameterException") => RekognitionErrorKind::InvalidParameterError,
        Some("InvalidS3ObjectException") => RekognitionErrorKind::InvalidS3ObjectError,
        Some("LimitExceededException") => RekognitionErrorKind::LimitExceededError,
        Some("ProvisionedThroughputExceededException") => {
            RekognitionErrorKind::ProvisionedThroughputExceededError
        }
        Some("ResourceAlreadyExistsException") => RekognitionErrorKind::ResourceAlreadyExistsError,
        Some("ResourceInUseException") => RekognitionErrorKind::ResourceInUseError,
        Some("ResourceNotFoundException") => RekognitionErrorKind::ResourceNotFoundError,
        Some("ServiceQuotaExceededException") => RekognitionErrorKind::ServiceQuotaExceededError,
        Some("ThrottlingException") => RekognitionErrorKind::ThrottlingError,
        _ => {
            tracing::debug!(
                code = generic.code(),
                status = response.status().as_u16(),
                "unmodeled error response"
            );
            return RekognitionError::generic(generic);
        }
    };
    tracing::debug!(
        code = generic.code(),
        status = response.status().as_u16(),
        request_id = generic.request_id(),
        "error response"
    );
    RekognitionError::new(kind, generic)
}
