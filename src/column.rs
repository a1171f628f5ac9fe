//! Per-column configuration: target type and parsing rules.
//!
//! A [`ColumnSpec`] is a plain configuration holder owned and mutated only
//! by its creator. The converter reads it through `&self` and never writes
//! back, so a spec may be shared read-only across threads as long as the
//! caller does not mutate it concurrently.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of target kinds a field can be coerced into
///
/// Dispatch matches exhaustively over this enum, so adding a kind without a
/// parsing rule is a compile-time error rather than a silent fall-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Raw string passed through unchanged
    #[default]
    Text,
    /// Canonical UUID/GUID identifier
    Uuid,
    /// Base64-encoded byte sequence
    Blob,
    /// Boolean, accepting integer encodings before literal words
    Boolean,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Single-precision float
    Float32,
    /// Double-precision float
    Float64,
    /// Fixed-point decimal preserving input digits
    Decimal,
    /// Calendar date/time without timezone
    DateTime,
    /// Kind with no conversion rule; conversion always fails
    Unsupported,
}

impl TargetKind {
    /// Map a loosely-spelled external type name onto a kind
    ///
    /// Unknown names map to [`TargetKind::Unsupported`] rather than erroring,
    /// so schema files naming exotic types still produce a spec whose
    /// conversions fail per-field instead of aborting ingestion.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "str" | "varchar" => Self::Text,
            "uuid" | "guid" => Self::Uuid,
            "blob" | "base64" | "bytes" | "binary" => Self::Blob,
            "bool" | "boolean" => Self::Boolean,
            "i32" | "int" | "int32" | "integer" => Self::Int32,
            "i64" | "long" | "int64" | "bigint" => Self::Int64,
            "f32" | "float" | "float32" | "single" => Self::Float32,
            "f64" | "double" | "float64" => Self::Float64,
            "decimal" | "numeric" => Self::Decimal,
            "datetime" | "date" | "timestamp" => Self::DateTime,
            _ => Self::Unsupported,
        }
    }

    /// Name used in diagnostics and serialized forms
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Decimal => "decimal",
            Self::DateTime => "date-time",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetKind {
    type Err = crate::Error;

    /// Strict lookup for configuration paths; unknown names are an error,
    /// unlike the lenient [`TargetKind::from_name`]
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match Self::from_name(name) {
            Self::Unsupported if !name.trim().eq_ignore_ascii_case("unsupported") => {
                Err(crate::Error::unknown_target_kind(name))
            }
            kind => Ok(kind),
        }
    }
}

/// Flags controlling which numeric string shapes are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberStyle {
    /// Permit whitespace before the number
    pub allow_leading_whitespace: bool,

    /// Permit whitespace after the number
    pub allow_trailing_whitespace: bool,

    /// Permit a leading `+` or `-`
    pub allow_sign: bool,

    /// Permit the locale's grouping separator between integral digits
    pub allow_thousands: bool,

    /// Permit the locale's decimal separator
    pub allow_decimal_point: bool,

    /// Permit an `e`/`E` exponent
    pub allow_exponent: bool,
}

impl NumberStyle {
    /// Accept any reasonable numeric form (every flag on)
    pub fn any() -> Self {
        Self {
            allow_leading_whitespace: true,
            allow_trailing_whitespace: true,
            allow_sign: true,
            allow_thousands: true,
            allow_decimal_point: true,
            allow_exponent: true,
        }
    }

    /// Bare digits only (every flag off)
    pub fn none() -> Self {
        Self {
            allow_leading_whitespace: false,
            allow_trailing_whitespace: false,
            allow_sign: false,
            allow_thousands: false,
            allow_decimal_point: false,
            allow_exponent: false,
        }
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::any()
    }
}

/// Flags controlling date/time parsing leniency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeStyle {
    /// Trim surrounding whitespace before matching
    pub allow_whitespace: bool,
}

/// Metadata describing one column's target type and parsing configuration
///
/// Construction defaults: target [`TargetKind::Text`], the default locale
/// preset, the most permissive [`NumberStyle`], a strict [`DateTimeStyle`],
/// and no exact date format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Identifying label; uniqueness is the caller's concern
    pub name: String,

    /// Target kind applied by the conversion dispatch
    #[serde(default)]
    pub target: TargetKind,

    /// Substitute for missing raw values, applied by the caller's
    /// row-assembly logic rather than by this crate
    #[serde(default)]
    pub default_value: Option<String>,

    /// Unconditional replacement value, likewise applied by the caller
    #[serde(default)]
    pub override_value: Option<String>,

    /// Locale consulted for all locale-sensitive parsing
    #[serde(default)]
    pub locale: Locale,

    /// Accepted numeric string shapes
    #[serde(default)]
    pub number_style: NumberStyle,

    /// Date/time leniency flags
    #[serde(default)]
    pub datetime_style: DateTimeStyle,

    /// When set, date/time input must match this strftime pattern exactly
    ///
    /// Ignored for non-date-time targets.
    #[serde(default)]
    pub exact_date_format: Option<String>,
}

impl ColumnSpec {
    /// Create a spec with the documented defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: TargetKind::Text,
            default_value: None,
            override_value: None,
            locale: Locale::default(),
            number_style: NumberStyle::any(),
            datetime_style: DateTimeStyle::default(),
            exact_date_format: None,
        }
    }

    /// Set the target kind
    pub fn with_target(mut self, target: TargetKind) -> Self {
        self.target = target;
        self
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the numeric style flags
    pub fn with_number_style(mut self, style: NumberStyle) -> Self {
        self.number_style = style;
        self
    }

    /// Set the date/time leniency flags
    pub fn with_datetime_style(mut self, style: DateTimeStyle) -> Self {
        self.datetime_style = style;
        self
    }

    /// Require date/time input to match the given strftime pattern exactly
    pub fn with_exact_date_format(mut self, format: impl Into<String>) -> Self {
        self.exact_date_format = Some(format.into());
        self
    }
}
