//! Weathering parameters
//!
//! Parameters for the empirical weathering-fraction model: a tuned baseline
//! rate scaled by particle-size, pH, clay and climate factors.

use erw_core::FloatValue;
use serde::{Deserialize, Serialize};

/// One band of a step function.
///
/// A value falls in the band when it is below `upper` (or equal to it when
/// `inclusive`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepBand {
    pub upper: FloatValue,
    #[serde(default)]
    pub inclusive: bool,
    pub factor: FloatValue,
}

impl StepBand {
    pub const fn below(upper: FloatValue, factor: FloatValue) -> Self {
        Self {
            upper,
            inclusive: false,
            factor,
        }
    }

    pub const fn up_to(upper: FloatValue, factor: FloatValue) -> Self {
        Self {
            upper,
            inclusive: true,
            factor,
        }
    }

    fn contains(&self, value: FloatValue) -> bool {
        if self.inclusive {
            value <= self.upper
        } else {
            value < self.upper
        }
    }
}

/// Step function mapping a soil reading to a multiplier.
///
/// Bands are checked in order and the first match wins, so they must be
/// listed with increasing `upper`. Values above every band get `above`; a
/// missing reading gets `missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTable {
    pub above: FloatValue,
    pub missing: FloatValue,
    pub bands: Vec<StepBand>,
}

impl StepTable {
    pub fn lookup(&self, value: Option<FloatValue>) -> FloatValue {
        match value {
            None => self.missing,
            Some(v) => self
                .bands
                .iter()
                .find(|band| band.contains(v))
                .map(|band| band.factor)
                .unwrap_or(self.above),
        }
    }
}

/// Parameters for the weathering fraction calculation.
///
/// $$ WF = \mathrm{clamp}(r_0 \cdot f_{size} \cdot f_{pH} \cdot f_{clay} \cdot f_{climate}, WF_{min}, WF_{max}) $$
///
/// The pH table deliberately penalises strongly acidic soils (0.4 below pH 5.5)
/// even though dissolution kinetics are often faster at low pH. This is a
/// domain tuning choice pending expert review; do not change it silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatheringParameters {
    /// Baseline fraction weathered per year under ideal conditions (r_0)
    /// unit: 1 / yr
    /// default: 0.18
    pub base_rate: FloatValue,

    /// Lower bound of the weathering fraction. Weathering is slow but never zero.
    /// unit: 1 / yr
    /// default: 0.005
    pub min_fraction: FloatValue,

    /// Upper bound of the weathering fraction (plausible physical maximum)
    /// unit: 1 / yr
    /// default: 0.35
    pub max_fraction: FloatValue,

    /// Smallest particle size used in the size factor; guards the division
    /// unit: mm
    /// default: 0.05
    pub min_particle_size_mm: FloatValue,

    /// Particle size at and below which the size factor saturates
    /// unit: mm
    /// default: 0.25
    pub reference_particle_size_mm: FloatValue,

    /// Saturation value of the size factor
    /// unit: dimensionless
    /// default: 1.0
    pub max_particle_factor: FloatValue,

    /// Soil pH step table
    /// default: <5.5 → 0.4, <6.0 → 0.7, ≤7.5 → 1.0, above → 0.85, missing → 0.8
    pub ph_table: StepTable,

    /// Clay content (%) step table
    /// default: <15 → 1.0, <25 → 0.9, <35 → 0.75, above → 0.6, missing → 0.85
    pub clay_table: StepTable,

    /// Rainfall giving a rain factor of 1
    /// unit: mm / yr
    /// default: 1500.0
    pub reference_rainfall_mm: FloatValue,

    /// Cap on the rain factor (tropical rainfall)
    /// unit: dimensionless
    /// default: 1.5
    pub max_rain_factor: FloatValue,

    /// Offset added to the mean temperature
    /// unit: °C
    /// default: 5.0
    pub temp_offset_c: FloatValue,

    /// Temperature span giving a temperature factor of 1 (after offset)
    /// unit: °C
    /// default: 30.0
    pub temp_span_c: FloatValue,

    /// Cap on the temperature factor
    /// unit: dimensionless
    /// default: 1.4
    pub max_temp_factor: FloatValue,
}

impl Default for WeatheringParameters {
    fn default() -> Self {
        Self {
            base_rate: 0.18,
            min_fraction: 0.005,
            max_fraction: 0.35,
            min_particle_size_mm: 0.05,
            reference_particle_size_mm: 0.25,
            max_particle_factor: 1.0,
            ph_table: StepTable {
                above: 0.85,
                missing: 0.8,
                bands: vec![
                    StepBand::below(5.5, 0.4),
                    StepBand::below(6.0, 0.7),
                    StepBand::up_to(7.5, 1.0),
                ],
            },
            clay_table: StepTable {
                above: 0.6,
                missing: 0.85,
                bands: vec![
                    StepBand::below(15.0, 1.0),
                    StepBand::below(25.0, 0.9),
                    StepBand::below(35.0, 0.75),
                ],
            },
            reference_rainfall_mm: 1500.0,
            max_rain_factor: 1.5,
            temp_offset_c: 5.0,
            temp_span_c: 30.0,
            max_temp_factor: 1.4,
        }
    }
}
