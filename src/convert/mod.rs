//! Conversion dispatch from raw field strings to typed values.
//!
//! The converter is stateless per call: each conversion reads one raw string
//! against one [`ColumnSpec`] and produces a [`Conversion`] outcome. Failures
//! never raise through the primary path; the error-channel entry point
//! additionally reports a [`MalformedField`] diagnostic through an optional
//! synchronous callback.
//!
//! ## Architecture
//!
//! - [`Converter`] - entry points and the malformed-field callback
//! - `numeric` - locale- and flag-aware numeric normalization
//! - `datetime` - exact-format and free-form date/time parsing

mod datetime;
mod numeric;

#[cfg(test)]
pub mod tests;

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::column::{ColumnSpec, TargetKind};
use crate::value::{Conversion, Value};

/// Diagnostic record for a field that failed conversion
///
/// Carries the column name, the target kind that rejected the value, and the
/// offending raw string. The `Display` form is the human-readable message
/// delivered to diagnostic consumers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to convert column '{column}' to {kind}: raw value '{raw}'")]
pub struct MalformedField {
    /// Name of the column whose spec rejected the value
    pub column: String,

    /// Target kind the value was coerced toward
    pub kind: TargetKind,

    /// The raw field string as received
    pub raw: String,
}

impl MalformedField {
    fn new(spec: &ColumnSpec, raw: &str) -> Self {
        Self {
            column: spec.name.clone(),
            kind: spec.target,
            raw: raw.to_string(),
        }
    }
}

/// Field converter with an optional malformed-field callback
///
/// The callback replaces an ambient subscriber list: callers that want
/// diagnostics register a handler at construction, everyone else pays
/// nothing. The handler runs synchronously on the caller's thread inside
/// [`Converter::convert`], exactly once per failed conversion, after the
/// outcome is already fixed.
pub struct Converter<'a> {
    on_malformed: Option<Box<dyn FnMut(&MalformedField) + 'a>>,
}

impl<'a> Converter<'a> {
    /// Create a converter with no diagnostic handler
    pub fn new() -> Self {
        Self { on_malformed: None }
    }

    /// Register a handler invoked once per malformed field
    pub fn on_malformed(mut self, handler: impl FnMut(&MalformedField) + 'a) -> Self {
        self.on_malformed = Some(Box::new(handler));
        self
    }

    /// Lenient entry point: convert without diagnostics
    ///
    /// On failure the outcome carries `converted == false` and the target
    /// kind's placeholder default; no handler is invoked.
    pub fn try_convert(&self, spec: &ColumnSpec, raw: &str) -> Conversion {
        coerce(spec, raw)
    }

    /// Error-channel entry point: convert, reporting failures
    ///
    /// Delegates to the lenient conversion. On failure, notifies the
    /// registered handler (if any) with a [`MalformedField`] and returns
    /// `None`. The handler cannot alter the outcome.
    pub fn convert(&mut self, spec: &ColumnSpec, raw: &str) -> Option<Value> {
        let outcome = coerce(spec, raw);
        if outcome.converted {
            return Some(outcome.value);
        }

        let report = MalformedField::new(spec, raw);
        debug!("{report}");
        if let Some(handler) = self.on_malformed.as_mut() {
            handler(&report);
        }
        None
    }
}

impl Default for Converter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("on_malformed", &self.on_malformed.is_some())
            .finish()
    }
}

/// Apply the target kind's parsing rule to one raw string
fn coerce(spec: &ColumnSpec, raw: &str) -> Conversion {
    match spec.target {
        TargetKind::Text => Conversion::ok(Value::Text(raw.to_string())),

        TargetKind::Uuid => match Uuid::try_parse(raw) {
            Ok(id) => Conversion::ok(Value::Uuid(id)),
            Err(_) => Conversion::malformed(Value::Uuid(Uuid::nil())),
        },

        TargetKind::Blob => match BASE64_STANDARD.decode(raw) {
            Ok(bytes) => Conversion::ok(Value::Blob(bytes)),
            Err(_) => Conversion::malformed(Value::Blob(Vec::new())),
        },

        TargetKind::Boolean => {
            // Integer encodings take precedence over literal words
            if let Some(n) = numeric::parse_i64(raw, spec.number_style, &spec.locale) {
                Conversion::ok(Value::Boolean(n != 0))
            } else if let Some(b) = spec.locale.parse_bool_literal(raw) {
                Conversion::ok(Value::Boolean(b))
            } else {
                Conversion::malformed(Value::Boolean(false))
            }
        }

        TargetKind::Int32 => match numeric::parse_i32(raw, spec.number_style, &spec.locale) {
            Some(n) => Conversion::ok(Value::Int32(n)),
            None => Conversion::malformed(Value::Int32(0)),
        },

        TargetKind::Int64 => match numeric::parse_i64(raw, spec.number_style, &spec.locale) {
            Some(n) => Conversion::ok(Value::Int64(n)),
            None => Conversion::malformed(Value::Int64(0)),
        },

        TargetKind::Float32 => match numeric::parse_f32(raw, spec.number_style, &spec.locale) {
            Some(x) => Conversion::ok(Value::Float32(x)),
            None => Conversion::malformed(Value::Float32(0.0)),
        },

        TargetKind::Float64 => match numeric::parse_f64(raw, spec.number_style, &spec.locale) {
            Some(x) => Conversion::ok(Value::Float64(x)),
            None => Conversion::malformed(Value::Float64(0.0)),
        },

        TargetKind::Decimal => match numeric::parse_decimal(raw, spec.number_style, &spec.locale) {
            Some(d) => Conversion::ok(Value::Decimal(d)),
            None => Conversion::malformed(Value::Decimal(Decimal::ZERO)),
        },

        TargetKind::DateTime => match datetime::parse_datetime(raw, spec) {
            Some(dt) => Conversion::ok(Value::DateTime(dt)),
            None => Conversion::malformed(Value::DateTime(
                chrono::DateTime::UNIX_EPOCH.naive_utc(),
            )),
        },

        // No rule to apply, so no target default either: hand back the raw
        // string and report failure
        TargetKind::Unsupported => Conversion::malformed(Value::Text(raw.to_string())),
    }
}
