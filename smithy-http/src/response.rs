/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// Parses a fully loaded HTTP response into an operation's output.
///
/// Every Rekognition operation is a request/response JSON call, so the response body is always
/// read to the end before parsing. This keeps parsing pure and sync, and makes it trivial to
/// test: build an `http::Response<Bytes>` and hand it to the parser.
pub trait ParseStrictResponse {
    /// For Rekognition operations this is `Result<XOutput, RekognitionError>`.
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}
