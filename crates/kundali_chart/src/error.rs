//! Error types for chart assembly.

use std::fmt::{Display, Formatter};

use kundali_ephem::EphemerisError;
use kundali_time::TimeError;
use kundali_vedic::VedicError;
use serde::Serialize;
use thiserror::Error;

/// Coarse classification reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidCoordinate,
    DateOutOfRange,
    EphemerisLookupError,
    MalformedInput,
    Config,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InvalidCoordinate => "InvalidCoordinate",
            Self::DateOutOfRange => "DateOutOfRange",
            Self::EphemerisLookupError => "EphemerisLookupError",
            Self::MalformedInput => "MalformedInput",
            Self::Config => "Config",
        })
    }
}

/// Errors from building an engine or computing a chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth record could not be parsed.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// Startup configuration was unreadable or inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput(_) | Self::Time(_) => ErrorKind::MalformedInput,
            Self::Vedic(VedicError::InvalidCoordinate { .. }) => ErrorKind::InvalidCoordinate,
            Self::Vedic(VedicError::DateOutOfRange { .. }) => ErrorKind::DateOutOfRange,
            Self::Vedic(VedicError::Ephemeris(e)) | Self::Ephemeris(e) => ephemeris_kind(e),
            Self::Vedic(_) => ErrorKind::MalformedInput,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

fn ephemeris_kind(e: &EphemerisError) -> ErrorKind {
    match e {
        EphemerisError::Load { .. } | EphemerisError::InvalidDataset(_) => ErrorKind::Config,
        _ => ErrorKind::EphemerisLookupError,
    }
}
