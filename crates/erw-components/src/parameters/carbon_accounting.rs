//! Carbon accounting parameters
//!
//! Conversion from weathered basalt to CO2 removal and the fixed uncertainty
//! band multipliers.

use erw_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for CO2 removal and its bounds.
///
/// $$ CO2 = m_{basalt} \times k_{CO2} \times WF $$
///
/// The bands are fixed multiplicative bounds around the central estimate,
/// not statistically derived confidence intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonAccountingParameters {
    /// CO2 captured per unit mass of weathered basalt.
    ///
    /// Stoichiometric central value for a typical CaO + MgO content. A tunable
    /// constant, not derived per sample.
    ///
    /// unit: kg CO2 / kg basalt
    /// default: 0.33
    pub co2_per_kg_basalt: FloatValue,

    /// Multiplier for the conservative bound
    /// unit: dimensionless
    /// default: 0.8
    pub conservative_multiplier: FloatValue,

    /// Multiplier for the optimistic bound
    /// unit: dimensionless
    /// default: 1.15
    pub optimistic_multiplier: FloatValue,
}

impl Default for CarbonAccountingParameters {
    fn default() -> Self {
        Self {
            co2_per_kg_basalt: 0.33,
            conservative_multiplier: 0.8,
            optimistic_multiplier: 1.15,
        }
    }
}
