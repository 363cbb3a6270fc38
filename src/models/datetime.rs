//! Textual timestamp format shared by event bodies and query windows
//!
//! Events travel as `yyyy-MM-ddTHH:mm:ss.SSSSSS` (fixed-width microseconds).

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{AppError, AppResult};

/// chrono pattern for the fixed-width event timestamp
pub const EVENT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Patterns accepted for window bounds, most specific first
const WINDOW_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Format a timestamp in the fixed event format
pub fn format(value: &NaiveDateTime) -> String {
    value.format(EVENT_DATETIME_FORMAT).to_string()
}

/// Parse an event timestamp.
///
/// The input must be exactly in the fixed format: since the format is
/// zero-padded and fixed width, a valid value formats back to the same text.
pub fn parse_strict(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, EVENT_DATETIME_FORMAT)
        .ok()
        .filter(|parsed| format(parsed) == value)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid event datetime '{}', expected yyyy-MM-ddTHH:mm:ss.SSSSSS",
                value
            ))
        })
}

/// Parse a window bound, accepting any ISO-8601 local date-time
pub fn parse_window_bound(name: &str, value: &str) -> AppResult<NaiveDateTime> {
    WINDOW_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid '{}' datetime: {}", name, value)))
}

/// serde helpers for `#[serde(with = "crate::models::datetime")]`
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_strict(&s).map_err(serde::de::Error::custom)
}
