//! Fieldcast Library
//!
//! A Rust library for coercing raw text field values from delimited-text
//! sources into strongly-typed values according to per-column declarations.
//!
//! This library provides tools for:
//! - Declaring per-column target types and parsing configuration
//! - Locale-aware numeric parsing (separators, signs, grouping, exponents)
//! - Exact-format and locale free-form date/time parsing
//! - Base64 blob and UUID field decoding
//! - Lenient conversion with type-appropriate placeholder defaults
//! - Opt-in structured diagnostics for malformed fields
//!
//! The delimited-text tokenizer and any table assembly are external
//! collaborators: callers hand this crate one already-extracted field
//! string at a time, together with the [`ColumnSpec`] describing the
//! column, and receive a typed [`Value`] or a failure outcome.

pub mod column;
pub mod convert;
pub mod locale;
pub mod value;

// Re-export commonly used types
pub use column::{ColumnSpec, DateTimeStyle, NumberStyle, TargetKind};
pub use convert::{Converter, MalformedField};
pub use locale::Locale;
pub use value::{Conversion, Value};

/// Result type alias for fieldcast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for configuration and diagnostic promotion
///
/// Conversion itself never returns `Err`: malformed fields surface as a
/// [`Conversion`] outcome or an absent value plus an optional callback.
/// `Error` covers the configuration surface (locale and kind lookup) and
/// lets callers fold a [`MalformedField`] diagnostic into their own chains.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A raw field value could not be coerced to its column's target kind
    #[error("malformed field: {0}")]
    Malformed(#[from] MalformedField),

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Locale name not recognized by any preset
    #[error("unknown locale: {name}")]
    UnknownLocale { name: String },

    /// Target kind name not recognized
    #[error("unknown target kind: {name}")]
    UnknownTargetKind { name: String },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown locale error
    pub fn unknown_locale(name: impl Into<String>) -> Self {
        Self::UnknownLocale { name: name.into() }
    }

    /// Create an unknown target kind error
    pub fn unknown_target_kind(name: impl Into<String>) -> Self {
        Self::UnknownTargetKind { name: name.into() }
    }
}
