//! Error types for ephemeris lookup and dataset loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::Body;

/// Errors from an [`EphemerisProvider`](crate::EphemerisProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no data for the body at the requested instant.
    #[error("ephemeris cannot resolve {body} at {instant}: {reason}")]
    Lookup {
        body: Body,
        instant: String,
        reason: String,
    },
    /// The dataset file could not be read or parsed.
    #[error("failed to load ephemeris dataset {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },
    /// The dataset parsed but is structurally unusable.
    #[error("invalid ephemeris dataset: {0}")]
    InvalidDataset(String),
}
