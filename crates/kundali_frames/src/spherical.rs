//! Cartesian -> ecliptic longitude/latitude conversion.

use kundali_time::normalize_360;

/// Ecliptic spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from the origin, in the input's length unit.
    pub distance: f64,
}

/// Convert ecliptic Cartesian `[x, y, z]` to spherical coordinates.
///
/// The origin maps to all-zero coordinates.
pub fn cartesian_to_ecliptic(xyz: &[f64; 3]) -> EclipticCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return EclipticCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    EclipticCoords {
        lon_deg: normalize_360(y.atan2(x).to_degrees()),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_y_is_ninety() {
        let c = cartesian_to_ecliptic(&[0.0, 2.0, 0.0]);
        assert!((c.lon_deg - 90.0).abs() < 1e-12);
        assert!((c.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn minus_y_wraps_to_270() {
        let c = cartesian_to_ecliptic(&[0.0, -1.0, 0.0]);
        assert!((c.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn just_below_plus_x_folds_to_zero() {
        let c = cartesian_to_ecliptic(&[1.0, -1e-20, 0.0]);
        assert_eq!(c.lon_deg, 0.0);
    }

    #[test]
    fn latitude_from_z() {
        let c = cartesian_to_ecliptic(&[1.0, 0.0, 1.0]);
        assert!((c.lat_deg - 45.0).abs() < 1e-12);
    }

    #[test]
    fn origin_is_zero() {
        let c = cartesian_to_ecliptic(&[0.0, 0.0, 0.0]);
        assert_eq!(c.distance, 0.0);
    }
}
