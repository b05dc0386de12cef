/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const MILLIS_PER_SECOND: u32 = 1_000;

/// A point in time with nanosecond precision, stored as seconds since the Unix epoch.
///
/// Rekognition sends timestamps such as `CreationTimestamp` as fractional epoch seconds, e.g.
/// `1576540098.52`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` must be in `[0, 1)`; values outside are clamped.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64).round();
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: nanos.max(0.0).min((NANOS_PER_SECOND - 1) as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Parse fractional epoch seconds as sent on the wire.
    ///
    /// An `f64` near the current epoch carries only about seven significant fraction digits, so
    /// the fraction is rounded to whole milliseconds, the precision the service uses.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let millis = ((epoch_seconds - seconds) * MILLIS_PER_SECOND as f64).round() as u32;
        Instant::from_secs_and_nanos(seconds as i64, millis * NANOS_PER_MILLI)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let instant = Instant::from_epoch_seconds(-(duration.as_secs() as i64));
                match duration.subsec_nanos() {
                    0 => instant,
                    nanos => Instant {
                        seconds: instant.seconds - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                // AutoSi pads to 3/6/9 digits; trim so `.520` prints as `.52`
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    match rfc3339.find('.') {
                        Some(_) => {
                            let mut trimmed = rfc3339
                                .trim_end_matches('Z')
                                .trim_end_matches('0')
                                .to_owned();
                            trimmed.push('Z');
                            trimmed
                        }
                        None => rfc3339,
                    }
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Fractional seconds since the epoch, e.g. `1576540098.52`
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn from_f64_splits_fraction() {
        let instant = Instant::from_f64(1576540098.25);
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert_eq!(instant.epoch_subsecond_nanos(), 250_000_000);
        assert!(instant.has_nanos());
        assert_eq!(instant.epoch_fractional_seconds(), 1576540098.25);
    }

    #[test]
    fn nanos_overflow_carries_into_seconds() {
        assert_eq!(
            Instant::from_secs_and_nanos(10, 1_500_000_000),
            Instant::from_secs_and_nanos(11, 500_000_000)
        );
    }

    #[test]
    fn system_time_conversion() {
        let time = UNIX_EPOCH + Duration::new(1614952162, 5);
        let instant = Instant::from(time);
        assert_eq!(instant.epoch_seconds(), 1614952162);
        assert_eq!(instant.epoch_subsecond_nanos(), 5);

        let before = UNIX_EPOCH - Duration::new(1, 250_000_000);
        let instant = Instant::from_system_time(before);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 750_000_000);
    }

    #[test]
    fn from_f64_rounds_to_millis() {
        let instant = Instant::from_f64(1576540098.52);
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");

        let instant = Instant::from_f64(1700000000.123);
        assert_eq!(instant.epoch_subsecond_nanos(), 123_000_000);

        // 0.9996 rounds up to a full second
        assert_eq!(
            Instant::from_f64(1700000000.9996),
            Instant::from_epoch_seconds(1700000001)
        );
    }

    proptest! {
        #[test]
        fn millis_survive_f64(secs in 0i64..253402300799, millis in 0u32..1000) {
            let instant = Instant::from_secs_and_nanos(secs, millis * 1_000_000);
            prop_assert_eq!(Instant::from_f64(instant.epoch_fractional_seconds()), instant);
        }

        #[test]
        fn whole_seconds_survive_f64(secs in 0i64..253402300799) {
            let instant = Instant::from_epoch_seconds(secs);
            prop_assert_eq!(Instant::from_f64(instant.epoch_fractional_seconds()), instant);
        }
    }
}
