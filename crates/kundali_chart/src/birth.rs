//! Birth records: the per-chart input.

use std::path::Path;

use kundali_time::BirthInstant;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// One validated-shape birth record. Coordinates are range-checked by the
/// engine, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub name: Option<String>,
    pub birthplace: Option<String>,
    pub instant: BirthInstant,
    /// Geographic latitude, degrees north.
    pub latitude: f64,
    /// Geographic longitude, degrees east.
    pub longitude: f64,
}

impl BirthInput {
    pub fn new(instant: BirthInstant, latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            birthplace: None,
            instant,
            latitude,
            longitude,
        }
    }

    /// Parse the date-time text and build an unnamed record.
    pub fn parse(birth_datetime: &str, latitude: f64, longitude: f64) -> Result<Self, ChartError> {
        Ok(Self::new(birth_datetime.parse()?, latitude, longitude))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_birthplace(mut self, birthplace: impl Into<String>) -> Self {
        self.birthplace = Some(birthplace.into());
        self
    }

    /// Parse a JSON birth record.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let record: BirthRecord =
            serde_json::from_str(json).map_err(|e| ChartError::MalformedInput(e.to_string()))?;
        record.try_into()
    }

    /// Read a JSON birth record from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ChartError::MalformedInput(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }
}

/// Wire form of a birth record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BirthRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    pub birth_datetime: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<BirthRecord> for BirthInput {
    type Error = ChartError;

    fn try_from(record: BirthRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: record.name,
            birthplace: record.birthplace,
            instant: record.birth_datetime.parse()?,
            latitude: record.latitude,
            longitude: record.longitude,
        })
    }
}

impl From<&BirthInput> for BirthRecord {
    fn from(input: &BirthInput) -> Self {
        Self {
            name: input.name.clone(),
            birthplace: input.birthplace.clone(),
            birth_datetime: input.instant.to_string(),
            latitude: input.latitude,
            longitude: input.longitude,
        }
    }
}
