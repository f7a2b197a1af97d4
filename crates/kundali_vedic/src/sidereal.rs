//! Tropical to sidereal conversion.

use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

/// `normalize(tropical - ayanamsha)`, in [0, 360).
pub fn to_sidereal(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}

/// A longitude in both zodiacs together with its sign placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealLongitude {
    pub tropical_deg: f64,
    pub sidereal_deg: f64,
    pub rashi: RashiInfo,
}

impl SiderealLongitude {
    pub fn new(tropical_deg: f64, ayanamsha_deg: f64) -> Self {
        let sidereal_deg = to_sidereal(tropical_deg, ayanamsha_deg);
        Self {
            tropical_deg: normalize_360(tropical_deg),
            sidereal_deg,
            rashi: rashi_from_longitude(sidereal_deg),
        }
    }
}
