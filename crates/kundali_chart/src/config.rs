//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! house_system = "sripati"         # or "equal"
//! node_mode = "mean"               # or "true"
//! use_nutation = true
//! default_utc_offset_minutes = 330 # applied to offset-less birth times
//! ephemeris_path = "data/eph.json" # optional; analytic theories if absent
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::FixedOffset;
use kundali_ephem::{AnalyticEphemeris, EphemerisProvider, TabulatedEphemeris};
use kundali_time::{IST_OFFSET_MINUTES, offset_from_minutes};
use kundali_vedic::{HouseSystem, NodeMode};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Largest offset magnitude in use by any civil time zone, minutes.
const MAX_CIVIL_OFFSET_MINUTES: i32 = 14 * 60;

/// Chart engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
    pub use_nutation: bool,
    pub default_utc_offset_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeris_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Sripati,
            node_mode: NodeMode::Mean,
            use_nutation: true,
            default_utc_offset_minutes: IST_OFFSET_MINUTES,
            ephemeris_path: None,
        }
    }
}

impl ChartConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        let config: Self = toml::from_str(text).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// A relative `ephemeris_path` is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("cannot read {}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(eph) = config.ephemeris_path.take() {
            let resolved = match path.parent() {
                Some(dir) if eph.is_relative() => dir.join(eph),
                _ => eph,
            };
            config.ephemeris_path = Some(resolved);
        }
        info!("loaded chart configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.default_utc_offset_minutes.abs() > MAX_CIVIL_OFFSET_MINUTES {
            return Err(ChartError::Config(format!(
                "default_utc_offset_minutes {} exceeds +/-{MAX_CIVIL_OFFSET_MINUTES}",
                self.default_utc_offset_minutes
            )));
        }
        if let Some(path) = &self.ephemeris_path {
            if path.as_os_str().is_empty() {
                return Err(ChartError::Config("ephemeris_path must not be empty".into()));
            }
        }
        Ok(())
    }

    /// Offset applied to birth times that carry none.
    pub fn default_offset(&self) -> Result<FixedOffset, ChartError> {
        offset_from_minutes(self.default_utc_offset_minutes)
            .map_err(|e| ChartError::Config(e.to_string()))
    }

    /// Build the configured ephemeris provider. Tabulated datasets are
    /// loaded here, once.
    pub fn build_provider(&self) -> Result<Arc<dyn EphemerisProvider>, ChartError> {
        match &self.ephemeris_path {
            Some(path) => Ok(Arc::new(TabulatedEphemeris::load(path)?)),
            None => Ok(Arc::new(AnalyticEphemeris::new())),
        }
    }
}
