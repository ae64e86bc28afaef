use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Point in time as it appears on the wire
///
/// The service is not consistent about timestamp encoding: some fields carry
/// ISO-8601 text, others epoch numbers. The raw scalar is kept as-is so that
/// re-encoding reproduces the original document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Epoch(Number),
}

impl Timestamp {
    /// Interpret the raw value as a UTC instant
    ///
    /// Text is read as RFC 3339, or as ISO-8601 without offset (taken as UTC).
    /// Numbers are epoch milliseconds.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Text(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDateTime::parse_from_str(s, NAIVE_ISO_FORMAT)
                        .ok()
                        .map(|naive| naive.and_utc())
                }),
            Timestamp::Epoch(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .and_then(DateTime::from_timestamp_millis),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Text(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Text(s) => f.write_str(s),
            Timestamp::Epoch(n) => write!(f, "{n}"),
        }
    }
}
