//! Timestamp codec for Nursys payloads.
//!
//! The upstream service is inconsistent about how it spells a point in time:
//! the same response may mix RFC 3339, a space-separated variant and bare
//! local timestamps. [`Time`] accepts all of them on the way in and always
//! writes one canonical form on the way out.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// A timestamp did not match any accepted layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time format: {raw:?}")]
pub struct TimeDecodeError {
    pub raw: String,
}

/// Layouts accepted by [`Time::decode`], tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// `2021-01-02T03:04:05.000001-05:00`
    Rfc3339,
    /// `2021-01-02 03:04:05.000001-05:00`, offset and fraction optional
    Spaced,
    /// `2021-07-08T11:34:55`, fraction optional, read as UTC
    Bare,
    /// `2021-07-08T11:34:55-07:00`
    BareWithOffset,
}

const DECODE_ORDER: [Layout; 4] = [
    Layout::Rfc3339,
    Layout::Spaced,
    Layout::Bare,
    Layout::BareWithOffset,
];

impl Layout {
    fn parse(self, raw: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Rfc3339 => DateTime::parse_from_rfc3339(raw).ok(),
            Self::Spaced => DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z")
                .ok()
                .or_else(|| utc(raw, "%Y-%m-%d %H:%M:%S%.fZ"))
                .or_else(|| utc(raw, "%Y-%m-%d %H:%M:%S%.f")),
            Self::Bare => utc(raw, "%Y-%m-%dT%H:%M:%S%.f"),
            Self::BareWithOffset => DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%:z").ok(),
        }
    }
}

fn utc(raw: &str, layout: &str) -> Option<DateTime<FixedOffset>> {
    NaiveDateTime::parse_from_str(raw, layout)
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// A point in time with an explicit UTC offset.
///
/// Equality and ordering compare instants, so two values spelled with
/// different offsets are equal when they name the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(DateTime<FixedOffset>);

impl Time {
    /// Canonical form: RFC 3339 with microseconds and a numeric offset,
    /// e.g. `2021-01-02T03:04:05.000001-05:00`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    /// Parse `raw` with the first accepted layout that matches exactly.
    ///
    /// # Errors
    /// Returns `TimeDecodeError` carrying the raw input when no layout matches.
    pub fn decode(raw: &str) -> Result<Self, TimeDecodeError> {
        DECODE_ORDER
            .iter()
            .find_map(|layout| layout.parse(raw))
            .map(Self)
            .ok_or_else(|| TimeDecodeError {
                raw: raw.to_string(),
            })
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    #[must_use]
    pub const fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Time {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.fixed_offset())
    }
}

impl From<Time> for DateTime<FixedOffset> {
    fn from(value: Time) -> Self {
        value.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Time {
    type Err = TimeDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::decode(&raw).map_err(de::Error::custom)
    }
}
