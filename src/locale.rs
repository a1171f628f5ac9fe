//! Explicit locale configuration for field parsing.
//!
//! Every locale-sensitive decision (numeric separators, boolean literals,
//! date/time shapes) is carried as plain data on a [`Locale`] value held by
//! the column configuration. Nothing is read from ambient process state at
//! conversion time.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Locale settings consulted during numeric and date/time parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Character separating the integral and fractional digits
    pub decimal_separator: char,

    /// Digit grouping (thousands) separator
    pub group_separator: char,

    /// Word accepted as the literal `true` boolean (case-insensitive)
    pub true_literal: String,

    /// Word accepted as the literal `false` boolean (case-insensitive)
    pub false_literal: String,

    /// Ordered strftime patterns tried during free-form date/time parsing
    ///
    /// Date-only patterns are valid entries; a match yields midnight.
    pub datetime_formats: Vec<String>,
}

impl Locale {
    /// United States English: `.` decimal, `,` grouping, month-first dates
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            datetime_formats: to_owned(&[
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%dT%H:%M:%S",
                "%m/%d/%Y %H:%M:%S",
                "%m/%d/%Y %I:%M %p",
                "%Y-%m-%d",
                "%m/%d/%Y",
            ]),
        }
    }

    /// British English: `.` decimal, `,` grouping, day-first dates
    pub fn en_gb() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            datetime_formats: to_owned(&[
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%dT%H:%M:%S",
                "%d/%m/%Y %H:%M:%S",
                "%d/%m/%Y %H:%M",
                "%Y-%m-%d",
                "%d/%m/%Y",
            ]),
        }
    }

    /// German: `,` decimal, `.` grouping, dotted day-first dates
    pub fn de_de() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            datetime_formats: to_owned(&[
                "%Y-%m-%d %H:%M:%S",
                "%d.%m.%Y %H:%M:%S",
                "%d.%m.%Y %H:%M",
                "%Y-%m-%d",
                "%d.%m.%Y",
            ]),
        }
    }

    /// Parse a boolean literal under this locale's word pair
    pub fn parse_bool_literal(&self, value: &str) -> Option<bool> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(&self.true_literal) {
            Some(true)
        } else if trimmed.eq_ignore_ascii_case(&self.false_literal) {
            Some(false)
        } else {
            None
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" => Ok(Self::en_us()),
            "en-gb" => Ok(Self::en_gb()),
            "de-de" => Ok(Self::de_de()),
            _ => Err(Error::unknown_locale(name)),
        }
    }
}

fn to_owned(formats: &[&str]) -> Vec<String> {
    formats.iter().map(|f| (*f).to_string()).collect()
}
