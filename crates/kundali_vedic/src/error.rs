//! Error types for Vedic calculations.

use chrono::{DateTime, Utc};
use kundali_ephem::{EphemerisError, SupportedRange};
use thiserror::Error;

/// Errors from validation and the sidereal pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Latitude or longitude outside its physical bounds, or not finite.
    #[error("invalid {axis}: {value} is outside [{min}, {max}]")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// UTC instant outside the ephemeris window.
    #[error(
        "date {} is out of range: supported window is {range} (UTC)",
        provided.to_rfc3339()
    )]
    DateOutOfRange {
        provided: DateTime<Utc>,
        range: SupportedRange,
    },
    /// Unparseable degrees-minutes-seconds text.
    #[error("malformed DMS value '{0}'")]
    MalformedDms(String),
    /// Error from the ephemeris provider.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
