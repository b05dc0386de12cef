/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors for an external retry layer.
//!
//! Nothing in this workspace retries; errors only describe themselves so that the transport
//! that dispatches requests can decide.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout or a TLS negotiation failure.
    ///
    /// These should never be retried for non-idempotent requests since it is impossible to
    /// know whether the request had a side effect on the server.
    TransientError,

    /// The server explicitly told the client to back off, e.g. `ThrottlingException` or
    /// `ProvisionedThroughputExceededException`.
    ThrottlingError,

    /// A server error that isn't throttling but is still worth retrying.
    ServerError,

    /// Doesn't count against any budgets.
    ClientError,
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind` when the error is retryable.
    ///
    /// If the error kind cannot be determined (e.g. the error is unmodeled and the kind depends
    /// on an HTTP status code), return `None`.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}
