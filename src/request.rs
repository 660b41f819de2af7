//! Estimation requests
//!
//! A request bundles an application, an optional partial environment snapshot
//! and optional parameter overrides:
//!
//! ```toml
//! [application]
//! application_id = "app-1"
//! farm_id = "farm-1"
//! applied_at = "2024-05-01T00:00:00Z"
//! basalt_mass_kg = 10000.0
//! particle_size_mm = 0.25
//!
//! [environment]
//! soil_pH = 7.0
//!
//! [parameters.carbon]
//! co2_per_kg_basalt = 0.33
//! ```

use erw_components::estimator::{AuditedEstimate, Estimator};
use erw_components::parameters::EstimatorParameters;
use erw_core::application::ApplicationInput;
use erw_core::environment::EnvironmentSnapshot;
use erw_core::errors::{ERWError, ERWResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationRequest {
    pub application: ApplicationInput,
    pub environment: EnvironmentSnapshot,
    pub parameters: EstimatorParameters,
}

impl EstimationRequest {
    pub fn from_toml_str(toml_str: &str) -> ERWResult<Self> {
        toml::from_str(toml_str).map_err(|e| ERWError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> ERWResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Validate the application and run the estimator with this request's
    /// parameters.
    pub fn run(&self) -> ERWResult<AuditedEstimate> {
        let application = self.application.validate()?;
        let estimator = Estimator::from_parameters(self.parameters.clone());
        estimator.estimate_audited(&application, &self.environment)
    }
}
