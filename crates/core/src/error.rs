//! Error types for the dock theme core.
//!
//! The `Color` operations themselves never fail; these errors only come out of
//! the parsing surfaces (preference strings and adjustment specs).

use thiserror::Error;

/// Errors produced while decoding colors or adjustments from text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// A preference string did not have exactly four `;;`-separated fields.
    #[error("malformed color preference '{input}': expected 4 fields, got {fields}")]
    MalformedPrefs { input: String, fields: usize },

    /// A preference field was not an integer.
    #[error("invalid {channel} component '{raw}' in color preference")]
    InvalidComponent { channel: &'static str, raw: String },

    /// An adjustment name was not recognized.
    #[error("unknown adjustment: {0}")]
    UnknownAdjustment(String),

    /// An adjustment spec could not be parsed (missing `=` or bad amount).
    #[error("invalid adjustment '{spec}': {reason}")]
    InvalidAdjustment { spec: String, reason: String },
}
