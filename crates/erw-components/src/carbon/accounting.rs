//! CO2 removal and uncertainty bands
//!
//! Converts a weathering fraction into a CO2 removal mass and derives the
//! conservative and optimistic bounds reported alongside it.

use crate::parameters::CarbonAccountingParameters;
use erw_core::FloatValue;
use serde::{Deserialize, Serialize};

pub const KG_PER_TONNE: FloatValue = 1000.0;

/// CO2 removal with its fixed multiplicative bounds.
///
/// For a non-negative central value `conservative ≤ central ≤ optimistic`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemovalBands {
    pub conservative: FloatValue,
    pub central: FloatValue,
    pub optimistic: FloatValue,
}

impl RemovalBands {
    /// Convert every band from kg to t.
    ///
    /// Divides rather than multiplying by `1e-3`, which can differ in the last
    /// bit and would change the audit fingerprint.
    pub fn to_tonnes(&self) -> Self {
        Self {
            conservative: self.conservative / KG_PER_TONNE,
            central: self.central / KG_PER_TONNE,
            optimistic: self.optimistic / KG_PER_TONNE,
        }
    }
}

/// Carbon accounting for weathered basalt.
///
/// $$ CO2_{kg} = m_{basalt} \times k_{CO2} \times WF $$
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonAccounting {
    parameters: CarbonAccountingParameters,
}

impl CarbonAccounting {
    pub fn new() -> Self {
        Self::from_parameters(CarbonAccountingParameters::default())
    }

    pub fn from_parameters(parameters: CarbonAccountingParameters) -> Self {
        Self { parameters }
    }

    /// CO2 removed (kg) by `basalt_mass_kg` of basalt weathering at fraction `wf`.
    pub fn co2_removal_kg(&self, basalt_mass_kg: FloatValue, wf: FloatValue) -> FloatValue {
        basalt_mass_kg * self.parameters.co2_per_kg_basalt * wf
    }

    pub fn conservative_band(&self, value: FloatValue) -> FloatValue {
        value * self.parameters.conservative_multiplier
    }

    pub fn optimistic_band(&self, value: FloatValue) -> FloatValue {
        value * self.parameters.optimistic_multiplier
    }

    pub fn bands(&self, central: FloatValue) -> RemovalBands {
        RemovalBands {
            conservative: self.conservative_band(central),
            central,
            optimistic: self.optimistic_band(central),
        }
    }

    pub fn parameters(&self) -> &CarbonAccountingParameters {
        &self.parameters
    }
}
