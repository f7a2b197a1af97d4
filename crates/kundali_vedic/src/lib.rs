//! Sidereal chart geometry.
//!
//! This crate provides:
//! - Ayanamsha (linear J285.0 model, optional nutation)
//! - Tropical to sidereal conversion and rashi/DMS placement
//! - Lagna and MC with the MC-consistency branch check
//! - Sripati and Equal bhava cusps, and house placement
//! - Mean and true lunar nodes
//! - Coordinate and coverage validation

pub mod ayanamsha;
pub mod bhava;
pub mod bhava_types;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod rashi;
pub mod sidereal;
pub mod util;
pub mod validate;

pub use ayanamsha::{
    AYANAMSHA_RATE_ARCSEC_PER_YEAR, AYANAMSHA_ZERO_EPOCH_YEAR, ayanamsha_deg, ayanamsha_mean_deg,
    ayanamsha_true_deg, zero_epoch_jd,
};
pub use bhava::{compute_bhavas, compute_cusps, compute_sripati, house_of};
pub use bhava_types::{ALL_HOUSE_SYSTEMS, Bhava, BhavaResult, HouseSystem};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use lagna::{AngleSet, lagna_and_mc_deg, mc_longitude_deg, raw_ascendant_deg};
pub use lunar_nodes::{LunarNode, NodeMode, ketu_from_rahu, lunar_node_deg, rahu_deg};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, dms_to_deg, format_dms, format_longitude_dms,
    rashi_from_longitude,
};
pub use sidereal::{SiderealLongitude, to_sidereal};
pub use util::{arc_forward, normalize_360};
pub use validate::{validate_birth, validate_coordinates, validate_instant};
