//! Typed conversion results.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A successfully-typed field value, tagged by its target kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Value {
    Text(String),
    Uuid(Uuid),
    Blob(Vec<u8>),
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    DateTime(NaiveDateTime),
}

/// Outcome of one lenient conversion call
///
/// On success `value` holds the typed result. On failure `value` holds the
/// type-appropriate placeholder (zero, empty, false, nil UUID, the epoch
/// date/time, or the raw string for an unsupported kind) so callers that
/// ignore `converted` still receive something shaped like the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Whether the raw string parsed under the column's rules
    pub converted: bool,

    /// Typed result on success, placeholder default on failure
    pub value: Value,
}

impl Conversion {
    /// Successful outcome carrying the typed value
    pub fn ok(value: Value) -> Self {
        Self {
            converted: true,
            value,
        }
    }

    /// Failed outcome carrying the placeholder default
    pub fn malformed(placeholder: Value) -> Self {
        Self {
            converted: false,
            value: placeholder,
        }
    }

    /// The typed value if conversion succeeded
    pub fn into_value(self) -> Option<Value> {
        self.converted.then_some(self.value)
    }
}
