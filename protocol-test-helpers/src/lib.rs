/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Request;
use pretty_assertions::Comparison;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("body was not valid JSON: {found}")]
    InvalidBodyFormat { found: String },
    #[error("body did not match:\n{comparison}")]
    BodyDidNotMatch { comparison: String },
    #[error("missing key in JSON body: `{expected}`")]
    MissingBodyKey { expected: String },
    #[error("forbidden key present in JSON body: `{expected}`")]
    ForbiddenBodyKey { expected: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        // Header lists are compared comma-delimited
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-utf8 header>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

fn parse_json(body: &[u8]) -> Result<Value, ProtocolTestFailure> {
    serde_json::from_slice(body).map_err(|_| ProtocolTestFailure::InvalidBodyFormat {
        found: String::from_utf8_lossy(body).into_owned(),
    })
}

/// Compare a JSON body to the expected document, ignoring key order and whitespace.
pub fn validate_json_body(actual: &[u8], expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual = parse_json(actual)?;
    let expected = parse_json(expected.as_bytes())?;
    if actual == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: format!(
                "{}",
                Comparison::new(
                    &PrettyJson(&serde_json::to_string_pretty(&actual).unwrap_or_default()),
                    &PrettyJson(&serde_json::to_string_pretty(&expected).unwrap_or_default())
                )
            ),
        })
    }
}

/// Every JSON pointer (e.g. `/Image/S3Object/Bucket`) must resolve in the body.
pub fn require_json_keys(body: &[u8], pointers: &[&str]) -> Result<(), ProtocolTestFailure> {
    let body = parse_json(body)?;
    for pointer in pointers {
        if body.pointer(pointer).is_none() {
            return Err(ProtocolTestFailure::MissingBodyKey {
                expected: pointer.to_string(),
            });
        }
    }
    Ok(())
}

/// No JSON pointer may resolve in the body. A key present with a `null` value still counts.
pub fn forbid_json_keys(body: &[u8], pointers: &[&str]) -> Result<(), ProtocolTestFailure> {
    let body = parse_json(body)?;
    for pointer in pointers {
        if body.pointer(pointer).is_some() {
            return Err(ProtocolTestFailure::ForbiddenBodyKey {
                expected: pointer.to_string(),
            });
        }
    }
    Ok(())
}

/// The keys of the top level JSON object, sorted. Empty if the body is not an object.
pub fn top_level_keys(body: &[u8]) -> Result<Vec<String>, ProtocolTestFailure> {
    let mut keys: Vec<String> = match parse_json(body)? {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => vec![],
    };
    keys.sort();
    Ok(keys)
}

/// Debug-prints a JSON string without escaping so diffs stay readable
struct PrettyJson<'a>(&'a str);

impl std::fmt::Debug for PrettyJson<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_json_keys, require_json_keys, top_level_keys, validate_headers,
        validate_json_body, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Amz-Target", "RekognitionService.ListFaces")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Amz-Target", "RekognitionService.ListFaces")])
            .expect("header present");
        validate_headers(&request, &[("X-Amz-Target", "rekognitionservice.listfaces")])
            .expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let body = br#"{"CollectionId":"faces","MaxResults":10}"#;
        validate_json_body(body, r#"{ "MaxResults": 10, "CollectionId": "faces" }"#)
            .expect("key order and whitespace are ignored");
        let err = validate_json_body(body, r#"{"CollectionId":"faces"}"#)
            .expect_err("extra key must fail");
        assert!(matches!(err, ProtocolTestFailure::BodyDidNotMatch { .. }));
        assert_eq!(
            validate_json_body(b"not json", "{}"),
            Err(ProtocolTestFailure::InvalidBodyFormat {
                found: "not json".to_owned()
            })
        );
    }

    #[test]
    fn test_json_keys() {
        let body = br#"{"Image":{"S3Object":{"Bucket":"photos"}},"MaxFaces":null}"#;
        require_json_keys(body, &["/Image/S3Object/Bucket", "/Image"]).expect("keys present");
        require_json_keys(body, &["/Image/Bytes"]).expect_err("no bytes");
        forbid_json_keys(body, &["/FaceMatchThreshold"]).expect("key absent");
        forbid_json_keys(body, &["/MaxFaces"]).expect_err("null still counts as present");
        assert_eq!(
            top_level_keys(body).unwrap(),
            vec!["Image".to_owned(), "MaxFaces".to_owned()]
        );
        assert!(top_level_keys(b"[]").unwrap().is_empty());
    }
}
