/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `#[serde(with = "crate::blob_serde")]` for optional blob fields: base64 strings on the wire.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use smithy_types::Blob;

pub(crate) fn serialize<S>(value: &Option<Blob>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(blob) => serializer.serialize_str(&base64::encode(blob.as_ref())),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Blob>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(encoded) => base64::decode(&encoded)
            .map(|bytes| Some(Blob::new(bytes)))
            .map_err(D::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use smithy_types::Blob;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        #[serde(
            default,
            with = "super",
            skip_serializing_if = "Option::is_none",
            rename = "Bytes"
        )]
        bytes: Option<Blob>,
    }

    #[test]
    fn blobs_are_base64() {
        let holder = Holder {
            bytes: Some(Blob::new("hello")),
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"Bytes":"aGVsbG8="}"#);
        assert_eq!(serde_json::from_str::<Holder>(&json).unwrap(), holder);
    }

    #[test]
    fn absent_and_null() {
        assert_eq!(
            serde_json::from_str::<Holder>("{}").unwrap(),
            Holder { bytes: None }
        );
        assert_eq!(
            serde_json::from_str::<Holder>(r#"{"Bytes":null}"#).unwrap(),
            Holder { bytes: None }
        );
        assert_eq!(serde_json::to_string(&Holder { bytes: None }).unwrap(), "{}");
    }

    #[test]
    fn invalid_base64_is_an_error() {
        assert!(serde_json::from_str::<Holder>(r#"{"Bytes":"not base64!"}"#).is_err());
    }
}
