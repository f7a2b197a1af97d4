//! Sidereal birth chart assembly.
//!
//! Takes a birth record (date-time, latitude, longitude) and produces a
//! [`Chart`]: ayanamsha, sidereal Lagna and MC, twelve bhava cusps and the
//! nine grahas with sign, DMS and house placement.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kundali_chart::*;
//!
//! let engine = ChartEngine::new(ChartConfig::default())?;
//! let input = BirthInput::parse("1990-05-15T14:30:00", 28.6139, 77.2090)?;
//! let chart = engine.compute(&input)?;
//! println!("{}", chart.to_json_pretty()?);
//! ```

pub mod assemble;
pub mod birth;
pub mod chart;
pub mod config;
pub mod error;

pub use assemble::ChartEngine;
pub use birth::{BirthInput, BirthRecord};
pub use chart::{Chart, ChartDebug, HouseCusp, SiderealPosition};
pub use config::ChartConfig;
pub use error::{ChartError, ErrorKind};

// Re-export the types a caller needs to read a chart.
pub use kundali_ephem::{AnalyticEphemeris, Body, EphemerisProvider, SupportedRange, TabulatedEphemeris};
pub use kundali_time::BirthInstant;
pub use kundali_vedic::{Graha, HouseSystem, NodeMode, Rashi};
