//! DIC export parameters

use erw_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the runoff index and dissolved inorganic carbon export.
///
/// $$ RI = \mathrm{clamp}\left(\frac{P}{P_{ref}} \cdot \frac{S}{S_{ref}}, 0, 1\right) $$
/// $$ f_{export} = \mathrm{clamp}(RI \cdot k, f_{min}, f_{max}) $$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DicExportParameters {
    /// Rainfall normalising the runoff index
    /// unit: mm / yr
    /// default: 2000.0
    pub reference_rainfall_mm: FloatValue,

    /// Slope normalising the runoff index
    /// unit: %
    /// default: 10.0
    pub reference_slope_percent: FloatValue,

    /// Export fraction per unit runoff index
    /// unit: dimensionless
    /// default: 0.25
    pub export_per_runoff: FloatValue,

    /// Minimum fraction of produced CO2 exported as DIC
    /// default: 0.05
    pub min_export_fraction: FloatValue,

    /// Maximum fraction of produced CO2 exported as DIC
    /// default: 0.4
    pub max_export_fraction: FloatValue,
}

impl Default for DicExportParameters {
    fn default() -> Self {
        Self {
            reference_rainfall_mm: 2000.0,
            reference_slope_percent: 10.0,
            export_per_runoff: 0.25,
            min_export_fraction: 0.05,
            max_export_fraction: 0.4,
        }
    }
}
