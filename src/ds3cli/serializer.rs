//! # Canonical Text
//!
//! Every byte ds3cli prints on stdout goes through [`to_canonical_text`]. The
//! output is meant to be diffed, golden-file tested and piped into scripts, so
//! three things are fixed:
//!
//! - **Pretty printing**: `serde_json`'s pretty printer, two-space indentation.
//! - **Line endings**: always `\n`, whatever the host convention.
//! - **Timestamps**: `yyyy-MM-ddTHH:mm:ss.sssZ` in UTC (see [`Timestamp`]).
//!
//! Field order is the declaration order of the serialized struct. Keys are not
//! renamed or sorted here; any renaming lives on the model types themselves.

use crate::error::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The one timestamp layout ds3cli emits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Serializes `value` to pretty-printed JSON with `\n` line endings.
///
/// Fails with [`Ds3Error::Serialization`](crate::error::Ds3Error::Serialization)
/// when the value graph has no JSON projection (e.g. a map with non-string keys).
pub fn to_canonical_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(normalize_line_endings(&text))
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a timestamp written with [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(text: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

/// A point in time that always serializes with [`TIMESTAMP_FORMAT`].
///
/// Model types hold timestamps as this type rather than a bare `DateTime<Utc>`,
/// so no field can fall back to chrono's own layout. Reading accepts any
/// RFC 3339 instant (backends report offsets) and converts it to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(&self.0))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(&self.0))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|instant| Self(instant.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}
