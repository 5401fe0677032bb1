//! Output shaping helpers shared by every tool
//!
//! Timestamps are rendered as plain strings in result records, and long text
//! fields are cut down either by character count or by line range.

pub mod text;

use chrono::{DateTime, SecondsFormat, Utc};

pub use text::*;

/// `YYYY-MM-DD HH:MM:SS` in UTC, used by repository and release records
pub fn display_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// RFC 3339 with second precision and a `Z` suffix
pub fn rfc3339_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn display_datetime_opt(datetime: Option<&DateTime<Utc>>) -> Option<String> {
    datetime.map(display_datetime)
}

pub fn rfc3339_datetime_opt(datetime: Option<&DateTime<Utc>>) -> Option<String> {
    datetime.map(rfc3339_datetime)
}
