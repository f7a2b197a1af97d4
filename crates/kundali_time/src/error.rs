//! Error types for birth-time parsing and conversion.

use thiserror::Error;

/// Errors from birth date-time parsing or offset resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The date-time text matched none of the accepted forms.
    #[error("malformed date-time {input:?}: {reason}")]
    Malformed { input: String, reason: String },
    /// A UTC offset outside the +/-23:59 range was requested.
    #[error("invalid UTC offset of {minutes} minutes")]
    InvalidOffset { minutes: i32 },
    /// The local time could not be mapped to a single instant.
    #[error("ambiguous or non-existent local time {0}")]
    UnmappableLocalTime(String),
}
