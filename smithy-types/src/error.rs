/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error metadata returned alongside every service error.

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::collections::HashMap;
use std::fmt;

/// Generic Error type
///
/// Rekognition models most of its errors, but every error response carries the same metadata:
/// the error `code`, a human readable `message` and the `request_id` of the failed call. For
/// errors the model crate does not know about, this is all the information there is.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: HashMap<&'static str, String>,
}

#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Set a custom field on the error metadata
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner.extras.insert(key, value.into());
        self
    }

    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras.get(key).map(|v| v.as_str())
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        for (k, v) in &self.extras {
            fmt.field(k, &v);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::retry::ProvideErrorKind;
    use crate::Error;

    #[test]
    fn builder_sets_all_fields() {
        let err = Error::builder()
            .code("ResourceNotFoundException")
            .message("The collection id: missing does not exist")
            .request_id("bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
            .custom("status", "400")
            .build();
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(
            err.message(),
            Some("The collection id: missing does not exist")
        );
        assert_eq!(
            err.request_id(),
            Some("bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
        );
        assert_eq!(err.extra("status"), Some("400"));
        assert_eq!(err.extra("host_id"), None);
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn display_skips_missing_fields() {
        let err = Error::builder().code("ThrottlingException").build();
        assert_eq!(format!("{}", err), "Error { code: \"ThrottlingException\" }");
        assert_eq!(format!("{}", Error::default()), "Error");
    }

    #[test]
    fn into_builder_preserves_fields() {
        let err = Error::builder().code("InternalServerError").build();
        let err = err.into_builder().message("try again").build();
        assert_eq!(err.code(), Some("InternalServerError"));
        assert_eq!(err.message(), Some("try again"));
    }
}
