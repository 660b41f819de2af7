//! Weathering Fraction Model
//!
//! Estimates the fraction of applied basalt that chemically reacts within one
//! year, from particle size and the soil/climate context.
//!
//! # What This Model Does
//!
//! 1. Computes four independent multiplicative factors:
//!    particle size, soil pH, clay content and climate
//! 2. Scales a tuned baseline rate by their product
//! 3. Clamps the result to a plausible annual range
//!
//! # Inputs
//!
//! - particle size (mm), any real; clamped internally
//! - [`SoilContext`]: pH, clay (%), annual rainfall (mm), mean temperature (°C)
//!
//! # Outputs
//!
//! - weathering fraction (1/yr) in `[min_fraction, max_fraction]`
//! - the individual factors, for audit and logging
//!
//! # Simplifications
//!
//! - **Step functions for soil chemistry**: pH and clay effects are banded
//!   multipliers rather than continuous rate laws.
//! - **Low-pH penalty**: strongly acidic soils weather *slower* here. Real
//!   dissolution is often faster at low pH; kept as a documented tuning choice.
//! - **No mineralogy**: a single baseline rate stands in for the full basalt
//!   mineral assemblage.
//! - **Bulk density unused**: carried through the soil context but not part of
//!   the rate.

use crate::parameters::WeatheringParameters;
use erw_core::soil::SoilContext;
use erw_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Breakdown of a weathering fraction calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatheringFactors {
    pub particle: FloatValue,
    pub ph: FloatValue,
    pub clay: FloatValue,
    pub climate: FloatValue,
    /// Product of the baseline rate and all factors, before clamping.
    pub unclamped: FloatValue,
    /// Final weathering fraction.
    pub fraction: FloatValue,
}

/// Empirical weathering-fraction model.
///
/// $$ WF = \mathrm{clamp}(r_0 \cdot f_{size} \cdot f_{pH} \cdot f_{clay} \cdot f_{climate}, WF_{min}, WF_{max}) $$
///
/// The clamp is applied once, after every factor has been multiplied in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatheringModel {
    parameters: WeatheringParameters,
}

impl WeatheringModel {
    pub fn new() -> Self {
        Self::from_parameters(WeatheringParameters::default())
    }

    pub fn from_parameters(parameters: WeatheringParameters) -> Self {
        Self { parameters }
    }

    /// Particle-size factor.
    ///
    /// $$ f_{size} = \min\left(\frac{d_{ref}}{\max(d, d_{min})}, f_{max}\right) $$
    ///
    /// Fine particles saturate at 1.0; coarser particles decay inversely with
    /// size. Sizes at or below zero use `d_min`.
    pub fn particle_factor(&self, size_mm: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let size = size_mm.max(p.min_particle_size_mm);
        (p.reference_particle_size_mm / size).min(p.max_particle_factor)
    }

    /// Soil pH factor. Fastest in the near-neutral band.
    pub fn ph_factor(&self, ph: Option<FloatValue>) -> FloatValue {
        self.parameters.ph_table.lookup(ph)
    }

    /// Clay factor. Decreases as clay content (%) increases.
    pub fn clay_factor(&self, clay_pct: Option<FloatValue>) -> FloatValue {
        self.parameters.clay_table.lookup(clay_pct)
    }

    /// Climate factor.
    ///
    /// $$ f_{climate} = \min\left(\frac{P}{P_{ref}}, 1.5\right) \cdot \min\left(\frac{T + 5}{30}, 1.4\right) $$
    ///
    /// Capped above at 1.5 × 1.4 but not bounded below: temperatures under
    /// -5 °C give a negative factor, absorbed by the final clamp.
    pub fn climate_factor(
        &self,
        annual_rain_mm: FloatValue,
        mean_temp_c: FloatValue,
    ) -> FloatValue {
        let p = &self.parameters;
        let rain_factor = (annual_rain_mm / p.reference_rainfall_mm).min(p.max_rain_factor);
        let temp_factor = ((mean_temp_c + p.temp_offset_c) / p.temp_span_c).min(p.max_temp_factor);
        rain_factor * temp_factor
    }

    /// Calculate every factor and the clamped weathering fraction.
    pub fn calculate_factors(
        &self,
        soil: &SoilContext,
        particle_size_mm: FloatValue,
    ) -> WeatheringFactors {
        let particle = self.particle_factor(particle_size_mm);
        let ph = self.ph_factor(soil.ph());
        let clay = self.clay_factor(soil.clay_pct());
        let climate = self.climate_factor(soil.annual_rain(), soil.mean_temp());

        let unclamped = self.parameters.base_rate * particle * ph * clay * climate;
        // Floor first: f64::max ignores NaN, so a NaN product lands on the floor
        let fraction = unclamped
            .max(self.parameters.min_fraction)
            .min(self.parameters.max_fraction);

        WeatheringFactors {
            particle,
            ph,
            clay,
            climate,
            unclamped,
            fraction,
        }
    }

    /// Weathering fraction per year.
    pub fn weathering_fraction(
        &self,
        soil: &SoilContext,
        particle_size_mm: FloatValue,
    ) -> FloatValue {
        self.calculate_factors(soil, particle_size_mm).fraction
    }

    pub fn parameters(&self) -> &WeatheringParameters {
        &self.parameters
    }
}
