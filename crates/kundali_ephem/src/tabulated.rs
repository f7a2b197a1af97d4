//! Ephemeris backed by a precomputed Chebyshev-segment dataset.
//!
//! The dataset is a JSON document:
//!
//! ```json
//! {
//!   "name": "de421-fit",
//!   "coverage": { "first_day": "1899-07-29", "last_day": "2053-10-09" },
//!   "bodies": {
//!     "sun": [ { "start_jd": 2414864.5, "end_jd": 2414896.5, "coeffs": [ ... ] } ]
//!   }
//! }
//! ```
//!
//! Segments are indexed by TT Julian Date and their coefficients expand the
//! apparent tropical longitude in degrees, unwrapped across the segment.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use kundali_time::{jd_from_utc, normalize_360, ut_to_tt_jd};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::chebyshev::{clenshaw, fit, nodes, normalise};
use crate::coverage::SupportedRange;
use crate::error::EphemerisError;
use crate::{Body, EphemerisProvider};

/// One Chebyshev segment for a single body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChebyshevSegment {
    pub start_jd: f64,
    pub end_jd: f64,
    pub coeffs: Vec<f64>,
}

impl ChebyshevSegment {
    fn covers(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd <= self.end_jd
    }

    fn evaluate(&self, jd: f64) -> f64 {
        clenshaw(&self.coeffs, normalise(jd, self.start_jd, self.end_jd))
    }
}

/// Serialized form of a tabulated ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisDataset {
    pub name: String,
    pub coverage: SupportedRange,
    pub bodies: BTreeMap<Body, Vec<ChebyshevSegment>>,
}

impl EphemerisDataset {
    /// Check every body is present with ordered, well-formed segments.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        for body in Body::ALL {
            let segments = self.bodies.get(&body).ok_or_else(|| {
                EphemerisError::InvalidDataset(format!("no segments for {body}"))
            })?;
            if segments.is_empty() {
                return Err(EphemerisError::InvalidDataset(format!(
                    "empty segment list for {body}"
                )));
            }
            for (i, seg) in segments.iter().enumerate() {
                if !(seg.start_jd.is_finite() && seg.end_jd.is_finite())
                    || seg.end_jd <= seg.start_jd
                {
                    return Err(EphemerisError::InvalidDataset(format!(
                        "{body} segment {i} has bad interval [{}, {}]",
                        seg.start_jd, seg.end_jd
                    )));
                }
                if seg.coeffs.is_empty() || seg.coeffs.iter().any(|c| !c.is_finite()) {
                    return Err(EphemerisError::InvalidDataset(format!(
                        "{body} segment {i} has missing or non-finite coefficients"
                    )));
                }
            }
            if segments.windows(2).any(|w| w[1].start_jd < w[0].end_jd) {
                return Err(EphemerisError::InvalidDataset(format!(
                    "{body} segments are unordered or overlap"
                )));
            }
        }
        Ok(())
    }
}

/// Sample `provider` over its coverage window and fit Chebyshev segments.
///
/// `segment_days` is the span of each segment and `degree` the number of
/// coefficients per segment.
pub fn build_dataset(
    provider: &dyn EphemerisProvider,
    name: &str,
    segment_days: f64,
    degree: usize,
) -> Result<EphemerisDataset, EphemerisError> {
    if segment_days.is_nan() || segment_days <= 0.0 || degree == 0 {
        return Err(EphemerisError::InvalidDataset(format!(
            "segment span {segment_days} d and degree {degree} must be positive"
        )));
    }
    let coverage = provider.coverage();
    let (start_ut, end_ut) = coverage.jd_bounds();
    let start = ut_to_tt_jd(start_ut);
    let end = ut_to_tt_jd(end_ut);
    let xs = nodes(degree);

    let mut bodies = BTreeMap::new();
    for body in Body::ALL {
        let mut segments = Vec::new();
        let mut seg_start = start;
        while seg_start < end {
            let seg_end = (seg_start + segment_days).min(end);
            let mut values = Vec::with_capacity(degree);
            for &x in &xs {
                let jd_tt = seg_start + (x + 1.0) * 0.5 * (seg_end - seg_start);
                let utc = utc_from_tt_jd(jd_tt, &coverage);
                let lon = provider.tropical_longitude_deg(body, &utc)?;
                values.push(unwrap_near(lon, values.last().copied()));
            }
            segments.push(ChebyshevSegment {
                start_jd: seg_start,
                end_jd: seg_end,
                coeffs: fit(&values),
            });
            seg_start = seg_end;
        }
        debug!("fitted {} segments for {body}", segments.len());
        bodies.insert(body, segments);
    }

    Ok(EphemerisDataset {
        name: name.to_string(),
        coverage,
        bodies,
    })
}

/// Shift `lon` by whole turns so it lies within 180 deg of `previous`.
fn unwrap_near(lon: f64, previous: Option<f64>) -> f64 {
    match previous {
        Some(prev) => lon + 360.0 * ((prev - lon) / 360.0).round(),
        None => lon,
    }
}

/// Inverse of the TT conversion, clamped into the sampled window.
fn utc_from_tt_jd(jd_tt: f64, coverage: &SupportedRange) -> DateTime<Utc> {
    // Delta T varies by well under a second per day, one step suffices.
    let jd_ut = jd_tt - (ut_to_tt_jd(jd_tt) - jd_tt);
    let millis = ((jd_ut - kundali_time::julian::UNIX_EPOCH_JD) * 86_400_000.0).round() as i64;
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(|| coverage.min_utc());
    utc.clamp(coverage.min_utc(), coverage.max_utc())
}

/// Provider that evaluates a loaded [`EphemerisDataset`].
#[derive(Debug, Clone)]
pub struct TabulatedEphemeris {
    dataset: EphemerisDataset,
}

impl TabulatedEphemeris {
    /// Load and validate a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EphemerisError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EphemerisError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let dataset: EphemerisDataset =
            serde_json::from_str(&text).map_err(|e| EphemerisError::Load {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let eph = Self::from_dataset(dataset)?;
        info!(
            "loaded ephemeris '{}' from {} covering {}",
            eph.dataset.name,
            path.display(),
            eph.dataset.coverage
        );
        Ok(eph)
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, EphemerisError> {
        let dataset: EphemerisDataset = serde_json::from_str(json)
            .map_err(|e| EphemerisError::InvalidDataset(e.to_string()))?;
        Self::from_dataset(dataset)
    }

    pub fn from_dataset(dataset: EphemerisDataset) -> Result<Self, EphemerisError> {
        dataset.validate()?;
        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &EphemerisDataset {
        &self.dataset
    }

    /// Write the dataset as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EphemerisError> {
        let path = path.as_ref();
        let to_load_err = |reason: String| EphemerisError::Load {
            path: path.to_path_buf(),
            reason,
        };
        let json = serde_json::to_string(&self.dataset).map_err(|e| to_load_err(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| to_load_err(e.to_string()))
    }

    fn segment(&self, body: Body, jd_tt: f64) -> Option<&ChebyshevSegment> {
        let segments = self.dataset.bodies.get(&body)?;
        let idx = segments.partition_point(|s| s.end_jd < jd_tt);
        segments.get(idx).filter(|s| s.covers(jd_tt))
    }
}

impl EphemerisProvider for TabulatedEphemeris {
    fn name(&self) -> &str {
        &self.dataset.name
    }

    fn coverage(&self) -> SupportedRange {
        self.dataset.coverage
    }

    fn tropical_longitude_deg(&self, body: Body, utc: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        if !self.dataset.coverage.contains(utc) {
            return Err(EphemerisError::Lookup {
                body,
                instant: utc.to_rfc3339(),
                reason: format!("outside dataset coverage {}", self.dataset.coverage),
            });
        }
        let jd_tt = ut_to_tt_jd(jd_from_utc(utc));
        let segment = self.segment(body, jd_tt).ok_or_else(|| EphemerisError::Lookup {
            body,
            instant: utc.to_rfc3339(),
            reason: format!("no segment covers JD(TT) {jd_tt:.5}"),
        })?;
        Ok(normalize_360(segment.evaluate(jd_tt)))
    }
}
