//! Reference-frame quantities for chart computation.
//!
//! Provides the obliquity of the ecliptic, the short nutation series,
//! general precession in longitude, and Cartesian -> ecliptic conversion.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use nutation::{
    fundamental_arguments, mean_longitudes_sun_moon, nutation_longitude_deg,
    nutation_short_arcsec,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use spherical::{EclipticCoords, cartesian_to_ecliptic};
