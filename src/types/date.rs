//! Date codec for the accounting platform's JSON dialect.
//!
//! Responses carry dates as `/Date(1573755038314+0000)/` (milliseconds since the Unix epoch, UTC,
//! followed by an informational offset). Requests may use plain ISO-8601. Both forms are read;
//! dates are written as `YYYY-MM-DD` and timestamps in the `/Date()/` form.

use crate::types::errors::DateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const PLATFORM_PREFIX: &str = "/Date(";
const PLATFORM_SUFFIX: &str = ")/";

/// Parses a timestamp from either the `/Date()/` form or ISO-8601 (with or without an offset).
/// A bare date is taken as midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DateError> {
    let value = value.trim();

    if let Some(inner) = value.strip_prefix(PLATFORM_PREFIX).and_then(|v| v.strip_suffix(PLATFORM_SUFFIX)) {
        return parse_platform_timestamp(inner);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DateError::InvalidFormat(format!("Unrecognised timestamp [{value}]")))
}

/// Parses a calendar date from `YYYY-MM-DD`, an ISO-8601 date-time, or the `/Date()/` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    let trimmed = value.trim();

    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => parse_timestamp(trimmed).map(|timestamp| timestamp.date_naive())
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    format!("{PLATFORM_PREFIX}{}+0000{PLATFORM_SUFFIX}", timestamp.timestamp_millis())
}

fn parse_platform_timestamp(inner: &str) -> Result<DateTime<Utc>, DateError> {
    //NOTE: The leading character may be a minus sign for pre-epoch values, so the offset search starts after it
    let split = inner.char_indices().skip(1).find(|(_, c)| *c == '+' || *c == '-');

    let (millis, offset) = match split {
        Some((index, _)) => inner.split_at(index),
        None => (inner, "")
    };

    if !offset.is_empty() && (offset.len() != 5 || !offset[1..].chars().all(|c| c.is_ascii_digit())) {
        return Err(DateError::InvalidFormat(format!("Invalid offset [{offset}]")));
    }

    let millis: i64 = millis.parse().map_err(|error| {
        DateError::InvalidFormat(format!("Invalid milliseconds [{millis}]: {:?}", error))
    })?;

    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DateError::InvalidFormat(format!("Milliseconds out of range [{millis}]")))
}

/// Serde adapter for optional calendar dates.
pub mod date_option {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&super::format_date(*date)),
            None => serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| super::parse_date(&value))
            .transpose()
            .map_err(de::Error::custom)
    }
}

/// Serde adapter for optional UTC timestamps.
pub mod timestamp_option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_str(&super::format_timestamp(*timestamp)),
            None => serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| super::parse_timestamp(&value))
            .transpose()
            .map_err(de::Error::custom)
    }
}
