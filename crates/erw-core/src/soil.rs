//! Typed soil and climate context for the weathering model.

use crate::environment::DefaultedEnvironment;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Soil and climate conditions at the application site.
///
/// Built once per estimation and never mutated. Soil chemistry fields stay
/// optional so the weathering factors can apply their own neutral values when
/// a context is built directly rather than from a defaulted environment.
///
/// `bulk_density` is carried as an opaque, already-converted value. Nothing in
/// the estimation re-derives its units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilContext {
    ph: Option<FloatValue>,
    clay_pct: Option<FloatValue>,
    bulk_density: Option<FloatValue>,
    annual_rain: FloatValue,
    mean_temp: FloatValue,
}

impl SoilContext {
    pub fn new(
        ph: Option<FloatValue>,
        clay_pct: Option<FloatValue>,
        bulk_density: Option<FloatValue>,
        annual_rain: FloatValue,
        mean_temp: FloatValue,
    ) -> Self {
        Self {
            ph,
            clay_pct,
            bulk_density,
            annual_rain,
            mean_temp,
        }
    }

    pub fn from_environment(env: &DefaultedEnvironment) -> Self {
        Self::new(
            Some(env.soil_ph),
            Some(env.clay_pct),
            Some(env.bulk_density),
            env.annual_rainfall_mm,
            env.mean_temp_c,
        )
    }

    pub fn ph(&self) -> Option<FloatValue> {
        self.ph
    }

    /// Clay content (%)
    pub fn clay_pct(&self) -> Option<FloatValue> {
        self.clay_pct
    }

    /// Bulk density (g / cm^3)
    pub fn bulk_density(&self) -> Option<FloatValue> {
        self.bulk_density
    }

    /// Annual rainfall (mm / yr)
    pub fn annual_rain(&self) -> FloatValue {
        self.annual_rain
    }

    /// Mean annual temperature (°C)
    pub fn mean_temp(&self) -> FloatValue {
        self.mean_temp
    }
}
