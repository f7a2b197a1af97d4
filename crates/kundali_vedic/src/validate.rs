//! Input validation for birth coordinates and instants.
//!
//! Coordinates are checked before the date, so an impossible location is
//! reported as such whatever the instant.

use chrono::{DateTime, Utc};
use kundali_ephem::SupportedRange;

use crate::error::VedicError;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

fn check_axis(axis: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), VedicError> {
    // NaN fails the range test as well.
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(VedicError::InvalidCoordinate {
            axis,
            value,
            min,
            max,
        })
    }
}

/// Latitude in [-90, 90] and longitude in [-180, 180], both finite.
pub fn validate_coordinates(latitude_deg: f64, longitude_deg: f64) -> Result<(), VedicError> {
    check_axis("latitude", latitude_deg, LATITUDE_RANGE)?;
    check_axis("longitude", longitude_deg, LONGITUDE_RANGE)
}

/// UTC instant within the supported window.
pub fn validate_instant(utc: &DateTime<Utc>, range: &SupportedRange) -> Result<(), VedicError> {
    if range.contains(utc) {
        Ok(())
    } else {
        Err(VedicError::DateOutOfRange {
            provided: *utc,
            range: *range,
        })
    }
}

/// Full gate: coordinates first, then the instant.
pub fn validate_birth(
    utc: &DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
    range: &SupportedRange,
) -> Result<(), VedicError> {
    validate_coordinates(latitude_deg, longitude_deg)?;
    validate_instant(utc, range)
}
