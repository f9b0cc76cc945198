//! Field-level conversions shared by the record parsers.
//!
//! Every helper takes the whole field slice and an index so a failure can
//! name the field and the offending raw value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::RecordError;

/// A decimal number; both `.` and `,` are accepted as the decimal separator.
pub fn decimal(fields: &[&str], index: usize) -> Result<f64, RecordError> {
    let raw = fields[index];
    raw.replace(',', ".").parse().map_err(|_| invalid(index, raw, "not a decimal number"))
}

pub fn integer(fields: &[&str], index: usize) -> Result<i64, RecordError> {
    let raw = fields[index];
    raw.parse().map_err(|_| invalid(index, raw, "not an integer"))
}

pub fn unsigned(fields: &[&str], index: usize) -> Result<u32, RecordError> {
    let raw = fields[index];
    raw.parse().map_err(|_| invalid(index, raw, "not a non-negative integer"))
}

/// Case-insensitive `true` / `false`.
pub fn boolean(fields: &[&str], index: usize) -> Result<bool, RecordError> {
    let raw = fields[index];
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid(index, raw, "not a boolean"))
    }
}

pub fn text(fields: &[&str], index: usize) -> String {
    fields[index].to_string()
}

/// `YYYY-MM-DD`.
pub fn date(fields: &[&str], index: usize) -> Result<NaiveDate, RecordError> {
    let raw = fields[index];
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid(index, raw, "not a date"))
}

/// `HH:MM`.
pub fn time(fields: &[&str], index: usize) -> Result<NaiveTime, RecordError> {
    let raw = fields[index];
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| invalid(index, raw, "not a time of day"))
}

/// `YYYY-MM-DD HH:MM:SS`.
pub fn date_time(fields: &[&str], index: usize) -> Result<NaiveDateTime, RecordError> {
    let raw = fields[index];
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map_err(|_| invalid(index, raw, "not a date-time"))
}

/// Flexible ISO-8601 timestamp: a full date-time with optional fractional
/// seconds and optional UTC offset, or a bare date (taken as midnight).
///
/// An offset is kept as wall-clock time; the period predicates work on
/// calendar dates as written in the file.
pub fn timestamp(fields: &[&str], index: usize) -> Result<NaiveDateTime, RecordError> {
    let raw = fields[index];
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    if let Ok(date_only) = raw.parse::<NaiveDate>() {
        return Ok(date_only.and_time(NaiveTime::MIN));
    }
    Err(invalid(index, raw, "not an ISO-8601 timestamp"))
}

fn invalid(index: usize, raw: &str, reason: &'static str) -> RecordError {
    RecordError::Field { index, value: raw.to_string(), reason }
}
