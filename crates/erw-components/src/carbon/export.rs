//! DIC Export Model
//!
//! Estimates how much of the CO2 captured by weathering leaves the plot as
//! dissolved inorganic carbon (DIC) in runoff.
//!
//! # What This Model Does
//!
//! 1. Builds a runoff index in [0, 1] from annual rainfall and slope
//! 2. Maps it to an export fraction bounded to [5%, 40%]
//! 3. Applies the fraction to the produced CO2
//!
//! Steeper, wetter plots export more. The bounds hold for any runoff index,
//! including values outside [0, 1] supplied by a caller.

use crate::parameters::DicExportParameters;
use erw_core::FloatValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DicExport {
    parameters: DicExportParameters,
}

impl DicExport {
    pub fn new() -> Self {
        Self::from_parameters(DicExportParameters::default())
    }

    pub fn from_parameters(parameters: DicExportParameters) -> Self {
        Self { parameters }
    }

    /// Runoff index from annual rainfall (mm) and slope (%).
    ///
    /// $$ RI = \mathrm{clamp}\left(\frac{P}{2000} \cdot \frac{S}{10}, 0, 1\right) $$
    pub fn runoff_index(
        &self,
        annual_rain_mm: FloatValue,
        slope_percent: FloatValue,
    ) -> FloatValue {
        let p = &self.parameters;
        ((annual_rain_mm / p.reference_rainfall_mm) * (slope_percent / p.reference_slope_percent))
            .max(0.0)
            .min(1.0)
    }

    /// Fraction of produced CO2 exported as DIC.
    pub fn export_fraction(&self, runoff_index: FloatValue) -> FloatValue {
        let p = &self.parameters;
        (runoff_index * p.export_per_runoff)
            .max(p.min_export_fraction)
            .min(p.max_export_fraction)
    }

    /// DIC exported (same unit as `co2`).
    pub fn dic_export(&self, co2: FloatValue, runoff_index: FloatValue) -> FloatValue {
        co2 * self.export_fraction(runoff_index)
    }

    pub fn parameters(&self) -> &DicExportParameters {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runoff_index() {
        let model = DicExport::new();
        assert!((model.runoff_index(1500.0, 5.0) - 0.375).abs() < 1e-12);
        assert_eq!(model.runoff_index(4000.0, 30.0), 1.0);
        assert_eq!(model.runoff_index(1500.0, -5.0), 0.0);
        assert_eq!(model.runoff_index(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_export_fraction_bounds() {
        let model = DicExport::new();
        for ri in [-10.0, -1.0, 0.0, 0.1, 0.5, 1.0, 1.6, 2.0, 100.0] {
            let f = model.export_fraction(ri);
            assert!((0.05..=0.4).contains(&f), "runoff index {} gave {}", ri, f);
        }
        assert_eq!(model.export_fraction(0.0), 0.05);
        assert_eq!(model.export_fraction(100.0), 0.4);
        assert!((model.export_fraction(1.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_dic_export() {
        let model = DicExport::new();
        let dic = model.dic_export(481.14, 0.375);
        assert!((dic - 481.14 * 0.09375).abs() < 1e-9);
    }
}
