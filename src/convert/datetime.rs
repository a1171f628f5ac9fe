//! Exact-format and locale free-form date/time parsing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::column::ColumnSpec;

/// Parse a date/time field under the column's configuration
///
/// An exact format pins the accepted shape: input that is a valid date in
/// some other shape still fails. Without one, the locale's ordered format
/// list is tried until a pattern matches.
pub(super) fn parse_datetime(raw: &str, spec: &ColumnSpec) -> Option<NaiveDateTime> {
    let input = if spec.datetime_style.allow_whitespace {
        raw.trim()
    } else {
        raw
    };

    match spec.exact_date_format.as_deref() {
        Some(format) => parse_with_format(input, format),
        None => spec
            .locale
            .datetime_formats
            .iter()
            .find_map(|format| parse_with_format(input, format)),
    }
}

/// Try a pattern as a full date/time, then as a date-only shape at midnight
fn parse_with_format(input: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
