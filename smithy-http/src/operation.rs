/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::response::ParseStrictResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// A fully constructed request paired with the handler that understands its response.
///
/// Dispatching the request (signing, sending, retrying) is the job of a transport outside this
/// workspace; it hands the loaded response back to [`Operation::parse`].
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    response_handler: H,
    metadata: Option<Metadata>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            response_handler,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn response_handler(&self) -> &H {
        &self.response_handler
    }

    pub fn into_request_response(self) -> (Request, H) {
        (self.request, self.response_handler)
    }
}

impl<H, O, E> Operation<H>
where
    H: ParseStrictResponse<Output = Result<O, E>>,
{
    /// Parse a loaded response for this operation.
    pub fn parse(&self, response: http::Response<Bytes>) -> Result<SdkSuccess<O>, SdkError<E>> {
        let parsed = self.response_handler.parse(&response);
        if let Some(metadata) = &self.metadata {
            tracing::trace!(
                service = metadata.service(),
                operation = metadata.name(),
                status = response.status().as_u16(),
                success = parsed.is_ok(),
                "parsed response"
            );
        }
        match parsed {
            Ok(parsed) => Ok(SdkSuccess {
                raw: response,
                parsed,
            }),
            Err(err) => Err(SdkError::ServiceError { raw: response, err }),
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request { inner: base }
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method())
            .version(self.inner.version());
        if let Some(headers) = cloned_request.headers_mut() {
            *headers = self.inner.headers().clone();
        }
        let inner = cloned_request.body(cloned_body).ok()?;
        Some(Request { inner })
    }

    pub fn into_parts(self) -> http::Request<SdkBody> {
        self.inner
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{Metadata, Operation, Request};
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;

    #[test]
    fn try_clone_clones_all_data() {
        let request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("https://rekognition.us-east-1.amazonaws.com/"))
                .method("POST")
                .header(CONTENT_LENGTH, 24)
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .body(SdkBody::from(r#"{"CollectionId":"faces"}"#))
                .expect("valid request"),
        );
        let cloned = request.try_clone().expect("request is cloneable");

        let request = cloned.into_parts();
        assert_eq!(
            request.uri(),
            &Uri::from_static("https://rekognition.us-east-1.amazonaws.com/")
        );
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "24");
        assert_eq!(request.body().bytes(), r#"{"CollectionId":"faces"}"#.as_bytes());
    }

    #[derive(Debug)]
    struct StatusParser;

    #[derive(Debug, PartialEq)]
    struct BadStatus(u16);

    impl ParseStrictResponse for StatusParser {
        type Output = Result<usize, BadStatus>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(response.body().len())
            } else {
                Err(BadStatus(response.status().as_u16()))
            }
        }
    }

    #[test]
    fn parse_splits_success_and_service_errors() {
        let op = Operation::new(
            Request::new(http::Request::new(SdkBody::empty())),
            StatusParser,
        )
        .with_metadata(Metadata::new("ListFaces", "rekognition"));
        assert_eq!(op.metadata().unwrap().name(), "ListFaces");
        assert_eq!(op.metadata().unwrap().service(), "rekognition");

        let ok = op
            .parse(http::Response::new(Bytes::from_static(b"{}")))
            .expect("200 is a success");
        assert_eq!(ok.parsed, 2);

        let failure = http::Response::builder()
            .status(400)
            .body(Bytes::new())
            .unwrap();
        match op.parse(failure) {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, BadStatus(400));
                assert_eq!(raw.status(), 400);
            }
            other => panic!("expected a service error, got {:?}", other.map(|s| s.parsed)),
        }
    }
}
