/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `#[serde(with = "crate::instant_epoch")]` for optional timestamps sent as epoch seconds.

use serde::{Deserialize, Deserializer, Serializer};
use smithy_types::Instant;

pub(crate) fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(instant) if instant.has_nanos() => {
            serializer.serialize_f64(instant.epoch_fractional_seconds())
        }
        Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(Instant::from_f64))
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use smithy_types::Instant;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        #[serde(
            default,
            with = "super",
            skip_serializing_if = "Option::is_none",
            rename = "CreationTimestamp"
        )]
        creation_timestamp: Option<Instant>,
    }

    #[test]
    fn fractional_epoch_seconds() {
        let holder: Holder =
            serde_json::from_str(r#"{"CreationTimestamp":1576540098.5}"#).unwrap();
        assert_eq!(
            holder.creation_timestamp,
            Some(Instant::from_fractional_seconds(1576540098, 0.5))
        );
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"CreationTimestamp":1576540098.5}"#
        );
    }

    #[test]
    fn whole_seconds_serialize_as_integers() {
        let holder = Holder {
            creation_timestamp: Some(Instant::from_epoch_seconds(1576540098)),
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"CreationTimestamp":1576540098}"#);
        assert_eq!(serde_json::from_str::<Holder>(&json).unwrap(), holder);
        assert_eq!(
            serde_json::from_str::<Holder>("{}").unwrap(),
            Holder {
                creation_timestamp: None
            }
        );
    }
}
