//! Ephemeris providers for chart computation.
//!
//! An [`EphemerisProvider`] answers one question: the apparent geocentric
//! tropical longitude of a body at a UTC instant. Two providers ship:
//!
//! - [`AnalyticEphemeris`]: closed-form theories, no data files
//! - [`TabulatedEphemeris`]: Chebyshev segments loaded from a JSON dataset
//!
//! Providers are immutable after construction and are shared across
//! threads behind `Arc<dyn EphemerisProvider>`.

pub mod analytic;
pub mod chebyshev;
pub mod coverage;
pub mod error;
pub mod tabulated;

use std::fmt::{Debug, Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use analytic::AnalyticEphemeris;
pub use coverage::SupportedRange;
pub use error::EphemerisError;
pub use tabulated::{ChebyshevSegment, EphemerisDataset, TabulatedEphemeris, build_dataset};

/// Bodies an ephemeris must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    /// All bodies in weekday-lord order.
    pub const ALL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tropical longitude together with the body it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisSample {
    pub body: Body,
    pub tropical_longitude_deg: f64,
}

/// Source of apparent geocentric tropical longitudes.
pub trait EphemerisProvider: Send + Sync + Debug {
    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Window of UTC instants this provider answers for.
    fn coverage(&self) -> SupportedRange;

    /// Longitude in `[0, 360)` degrees on the true ecliptic of date.
    fn tropical_longitude_deg(&self, body: Body, utc: &DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Longitudes for every body in [`Body::ALL`] order.
    fn sample_all(&self, utc: &DateTime<Utc>) -> Result<Vec<EphemerisSample>, EphemerisError> {
        Body::ALL
            .into_iter()
            .map(|body| {
                Ok(EphemerisSample {
                    body,
                    tropical_longitude_deg: self.tropical_longitude_deg(body, utc)?,
                })
            })
            .collect()
    }
}
