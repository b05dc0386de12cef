/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client-side checks of the constraints Rekognition documents for its request fields.
//!
//! Every input builder runs these before an input can exist, so an invalid request is caught
//! before it is ever serialized rather than coming back as a `ValidationException`.

use crate::error::BuildError;
use lazy_static::lazy_static;
use regex::Regex;
use smithy_types::Blob;
use std::fmt;

/// Why a field value was rejected.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    /// String length in characters (or blob length in bytes) outside the allowed bounds.
    Length {
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
    Pattern {
        pattern: &'static str,
    },
    Range {
        min: f64,
        max: Option<f64>,
        actual: f64,
    },
    /// Number of elements of a list or map outside the allowed bounds.
    ItemCount {
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
    UnknownVariant {
        value: String,
        allowed: &'static [&'static str],
    },
    ReservedPrefix {
        prefix: &'static str,
    },
}

fn fmt_bounds<T: fmt::Display>(f: &mut fmt::Formatter<'_>, min: T, max: Option<T>) -> fmt::Result {
    match max {
        Some(max) => write!(f, "[{}, {}]", min, max),
        None => write!(f, "[{}, ...)", min),
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Length { min, max, actual } => {
                write!(f, "length {} is outside ", actual)?;
                fmt_bounds(f, *min, *max)
            }
            ConstraintViolation::Pattern { pattern } => {
                write!(f, "value does not match pattern `{}`", pattern)
            }
            ConstraintViolation::Range { min, max, actual } => {
                write!(f, "value {} is outside ", actual)?;
                fmt_bounds(f, *min, *max)
            }
            ConstraintViolation::ItemCount { min, max, actual } => {
                write!(f, "{} items is outside ", actual)?;
                fmt_bounds(f, *min, *max)
            }
            ConstraintViolation::UnknownVariant { value, allowed } => {
                write!(f, "`{}` is not one of {:?}", value, allowed)
            }
            ConstraintViolation::ReservedPrefix { prefix } => {
                write!(f, "value must not start with `{}`", prefix)
            }
        }
    }
}

impl std::error::Error for ConstraintViolation {}

/// Documented string patterns. All patterns must match the entire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pattern {
    /// `CollectionId`, `ProjectName`
    CollectionId,
    /// `FaceId`, `ImageId`
    Uuid,
    /// `UserId`, `ExternalImageId`
    ExternalId,
    /// `ClientRequestToken`, `JobId`
    Token,
    S3Bucket,
    TagKey,
    TagValue,
}

lazy_static! {
    static ref COLLECTION_ID: Regex = Regex::new(r"^[a-zA-Z0-9_.\-]+$").expect("valid regex");
    static ref UUID: Regex =
        Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("valid regex");
    static ref EXTERNAL_ID: Regex = Regex::new(r"^[a-zA-Z0-9_.\-:]+$").expect("valid regex");
    static ref TOKEN: Regex = Regex::new(r"^[a-zA-Z0-9_\-]+$").expect("valid regex");
    static ref S3_BUCKET: Regex = Regex::new(r"^[0-9A-Za-z.\-_]*$").expect("valid regex");
    static ref TAG: Regex = Regex::new(r"^[\p{L}\p{Z}\p{N}_.:/=+\-@]*$").expect("valid regex");
}

impl Pattern {
    /// The pattern as documented by the service
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Pattern::CollectionId => r"[a-zA-Z0-9_.\-]+",
            Pattern::Uuid => r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
            Pattern::ExternalId => r"[a-zA-Z0-9_.\-:]+",
            Pattern::Token => r"^[a-zA-Z0-9-_]+$",
            Pattern::S3Bucket => r"[0-9A-Za-z\.\-_]*",
            Pattern::TagKey => r"^(?!aws:)[\p{L}\p{Z}\p{N}_.:/=+\-@]*$",
            Pattern::TagValue => r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Pattern::CollectionId => &COLLECTION_ID,
            Pattern::Uuid => &UUID,
            Pattern::ExternalId => &EXTERNAL_ID,
            Pattern::Token => &TOKEN,
            Pattern::S3Bucket => &S3_BUCKET,
            Pattern::TagKey | Pattern::TagValue => &TAG,
        }
    }

    pub(crate) fn matches(self, value: &str) -> bool {
        if self == Pattern::TagKey && value.starts_with("aws:") {
            return false;
        }
        self.regex().is_match(value)
    }
}

/// Implemented by every string enum so inputs can refuse values the service would reject.
pub(crate) trait KnownVariant {
    fn is_known(&self) -> bool;
    fn allowed() -> &'static [&'static str];
    fn wire_value(&self) -> &str;
}

fn invalid(field: &'static str, violation: ConstraintViolation) -> BuildError {
    BuildError::InvalidField { field, violation }
}

pub(crate) fn required<T>(field: &'static str, value: Option<&T>) -> Result<(), BuildError> {
    match value {
        Some(_) => Ok(()),
        None => Err(BuildError::MissingField { field }),
    }
}

pub(crate) fn string(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: Option<usize>,
    pattern: Option<Pattern>,
) -> Result<(), BuildError> {
    let value = match value {
        Some(value) => value,
        None => return Ok(()),
    };
    let actual = value.chars().count();
    if actual < min || max.map(|max| actual > max).unwrap_or(false) {
        return Err(invalid(
            field,
            ConstraintViolation::Length { min, max, actual },
        ));
    }
    if let Some(pattern) = pattern {
        if pattern == Pattern::TagKey && value.starts_with("aws:") {
            return Err(invalid(
                field,
                ConstraintViolation::ReservedPrefix { prefix: "aws:" },
            ));
        }
        if !pattern.matches(value) {
            return Err(invalid(
                field,
                ConstraintViolation::Pattern {
                    pattern: pattern.as_str(),
                },
            ));
        }
    }
    Ok(())
}

/// Applies [`string`] to every element of a list of strings.
pub(crate) fn strings(
    field: &'static str,
    values: Option<&[String]>,
    min: usize,
    max: Option<usize>,
    pattern: Option<Pattern>,
) -> Result<(), BuildError> {
    for value in values.unwrap_or_default() {
        string(field, Some(value), min, max, pattern)?;
    }
    Ok(())
}

pub(crate) fn range<N>(
    field: &'static str,
    value: Option<N>,
    min: f64,
    max: Option<f64>,
) -> Result<(), BuildError>
where
    N: Into<f64> + Copy,
{
    let actual: f64 = match value {
        Some(value) => value.into(),
        None => return Ok(()),
    };
    // written so that NaN is always rejected
    let in_range = actual >= min && max.map(|max| actual <= max).unwrap_or(true);
    if in_range {
        Ok(())
    } else {
        Err(invalid(field, ConstraintViolation::Range { min, max, actual }))
    }
}

pub(crate) fn items<T>(
    field: &'static str,
    values: Option<&[T]>,
    min: usize,
    max: Option<usize>,
) -> Result<(), BuildError> {
    count(field, values.map(|values| values.len()), min, max)
}

/// Like [`items`] for maps and other collections that only expose a length.
pub(crate) fn count(
    field: &'static str,
    len: Option<usize>,
    min: usize,
    max: Option<usize>,
) -> Result<(), BuildError> {
    match len {
        Some(actual) if actual < min || max.map(|max| actual > max).unwrap_or(false) => Err(
            invalid(field, ConstraintViolation::ItemCount { min, max, actual }),
        ),
        _ => Ok(()),
    }
}

pub(crate) fn blob(
    field: &'static str,
    value: Option<&Blob>,
    min: usize,
    max: Option<usize>,
) -> Result<(), BuildError> {
    match value {
        Some(blob) if blob.len() < min || max.map(|max| blob.len() > max).unwrap_or(false) => {
            Err(invalid(
                field,
                ConstraintViolation::Length {
                    min,
                    max,
                    actual: blob.len(),
                },
            ))
        }
        _ => Ok(()),
    }
}

pub(crate) fn variant<E: KnownVariant>(
    field: &'static str,
    value: Option<&E>,
) -> Result<(), BuildError> {
    match value {
        Some(value) if !value.is_known() => Err(invalid(
            field,
            ConstraintViolation::UnknownVariant {
                value: value.wire_value().to_owned(),
                allowed: E::allowed(),
            },
        )),
        _ => Ok(()),
    }
}

pub(crate) fn variants<E: KnownVariant>(
    field: &'static str,
    values: Option<&[E]>,
) -> Result<(), BuildError> {
    for value in values.unwrap_or_default() {
        variant(field, Some(value))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{ConstraintViolation, Pattern};
    use crate::error::BuildError;
    use crate::model::UserStatus;
    use smithy_types::Blob;

    fn violation(result: Result<(), BuildError>) -> ConstraintViolation {
        match result {
            Err(BuildError::InvalidField { violation, .. }) => violation,
            other => panic!("expected an invalid field, got {:?}", other),
        }
    }

    #[test]
    fn patterns_match_whole_value() {
        assert!(Pattern::CollectionId.matches("my-collection_1.0"));
        assert!(!Pattern::CollectionId.matches("my collection"));
        assert!(!Pattern::CollectionId.matches(""));
        assert!(Pattern::Uuid.matches("a1b2c3d4-0000-4000-8000-000000000000"));
        assert!(!Pattern::Uuid.matches("A1B2C3D4-0000-4000-8000-000000000000"));
        assert!(!Pattern::Uuid.matches("a1b2c3d4-0000-4000-8000-0000000000001"));
        assert!(Pattern::ExternalId.matches("user:42"));
        assert!(Pattern::Token.matches("retry-token_1"));
        assert!(!Pattern::Token.matches("retry token"));
        assert!(Pattern::S3Bucket.matches("my.photo-bucket_1"));
        assert!(Pattern::TagKey.matches("team name"));
        assert!(!Pattern::TagKey.matches("aws:reserved"));
        assert!(Pattern::TagValue.matches("aws:allowed in values"));
        assert!(!Pattern::TagValue.matches("semi;colon"));
    }

    #[test]
    fn string_checks_length_in_chars() {
        super::string("UserId", Some("ü"), 1, Some(1), None).expect("one char");
        assert_eq!(
            violation(super::string("UserId", Some(""), 1, Some(128), None)),
            ConstraintViolation::Length {
                min: 1,
                max: Some(128),
                actual: 0
            }
        );
        super::string("UserId", None, 1, Some(128), Some(Pattern::ExternalId))
            .expect("absent values are not checked");
    }

    #[test]
    fn tag_keys_reject_reserved_prefix() {
        assert_eq!(
            violation(super::string(
                "Tags",
                Some("aws:createdBy"),
                1,
                Some(128),
                Some(Pattern::TagKey)
            )),
            ConstraintViolation::ReservedPrefix { prefix: "aws:" }
        );
    }

    #[test]
    fn range_rejects_nan_and_out_of_bounds() {
        super::range("FaceMatchThreshold", Some(100.0f32), 0.0, Some(100.0)).expect("inclusive");
        assert!(matches!(
            violation(super::range("FaceMatchThreshold", Some(f32::NAN), 0.0, Some(100.0))),
            ConstraintViolation::Range { .. }
        ));
        assert_eq!(
            violation(super::range("MaxFaces", Some(0), 1.0, None)),
            ConstraintViolation::Range {
                min: 1.0,
                max: None,
                actual: 0.0
            }
        );
        super::range("MaxFaces", Some(i32::MAX), 1.0, None).expect("no upper bound");
    }

    #[test]
    fn item_counts() {
        let face_ids = vec!["a".to_owned(); 101];
        assert_eq!(
            violation(super::items("FaceIds", Some(&face_ids[..]), 1, Some(100))),
            ConstraintViolation::ItemCount {
                min: 1,
                max: Some(100),
                actual: 101
            }
        );
        super::items::<String>("FaceIds", None, 1, Some(100)).expect("absent list");
    }

    #[test]
    fn blob_length_in_bytes() {
        assert!(matches!(
            violation(super::blob("Image.Bytes", Some(&Blob::new(vec![])), 1, Some(5242880))),
            ConstraintViolation::Length { actual: 0, .. }
        ));
        super::blob("Image.Bytes", Some(&Blob::new("x")), 1, Some(5242880)).expect("1 byte");
    }

    #[test]
    fn unknown_variants_are_rejected() {
        super::variant("UserStatus", Some(&UserStatus::Active)).expect("known");
        assert_eq!(
            violation(super::variant(
                "UserStatus",
                Some(&UserStatus::from("ARCHIVED"))
            )),
            ConstraintViolation::UnknownVariant {
                value: "ARCHIVED".to_owned(),
                allowed: UserStatus::values()
            }
        );
    }

    #[test]
    fn display() {
        let violation = ConstraintViolation::Range {
            min: 1.0,
            max: Some(4096.0),
            actual: 5000.0,
        };
        assert_eq!(violation.to_string(), "value 5000 is outside [1, 4096]");
        let violation = ConstraintViolation::Length {
            min: 1,
            max: None,
            actual: 0,
        };
        assert_eq!(violation.to_string(), "length 0 is outside [1, ...)");
    }
}
