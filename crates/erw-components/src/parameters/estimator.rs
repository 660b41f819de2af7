//! Estimator parameters
//!
//! Bundles the environment defaults and every model's parameters so a full
//! configuration can be loaded from a single TOML document.

use super::{
    CarbonAccountingParameters, DicExportParameters, PermanenceParameters, WeatheringParameters,
};
use erw_core::environment::EnvironmentDefaults;
use erw_core::errors::{ERWError, ERWResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete estimator configuration.
///
/// Every section is optional in TOML/JSON; missing sections and fields fall
/// back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorParameters {
    pub environment: EnvironmentDefaults,
    pub weathering: WeatheringParameters,
    pub carbon: CarbonAccountingParameters,
    pub dic_export: DicExportParameters,
    pub permanence: PermanenceParameters,
}

impl EstimatorParameters {
    pub fn from_toml_str(toml_str: &str) -> ERWResult<Self> {
        toml::from_str(toml_str).map_err(|e| ERWError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> ERWResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> ERWResult<String> {
        toml::to_string_pretty(self).map_err(|e| ERWError::Config(e.to_string()))
    }
}
