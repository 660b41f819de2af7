//! Observation reduction
//!
//! Pure reductions that turn raw weather, soil and terrain payloads into the
//! scalar fields of an [`EnvironmentSnapshot`](crate::environment::EnvironmentSnapshot).
//! Fetching those payloads is the caller's concern; nothing here does I/O.
//!
//! # Weather
//!
//! Daily precipitation series are annualised as `mean(daily) × 365`, hourly
//! series as `mean(hourly) × 24 × 365`. Temperature is the plain mean.
//!
//! # Soil
//!
//! Soil layers are reduced to a depth-weighted mean over the top
//! [`DEFAULT_TARGET_DEPTH_CM`] centimetres, then rescaled from SoilGrids'
//! integer-scaled units: pH × 10, clay in permille, bulk density in cg / cm^3.
//! The rescaling is best effort; the estimator treats the result as opaque.

use crate::FloatValue;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: FloatValue = 365.0;
pub const HOURS_PER_DAY: FloatValue = 24.0;

/// Depth over which soil layers are averaged (cm).
pub const DEFAULT_TARGET_DEPTH_CM: FloatValue = 30.0;

const SOILGRIDS_PH_SCALE: FloatValue = 10.0;
const SOILGRIDS_CLAY_SCALE: FloatValue = 10.0;
const SOILGRIDS_BULK_DENSITY_SCALE: FloatValue = 100.0;

/// Arithmetic mean, `None` for an empty series.
pub fn mean(values: &[FloatValue]) -> Option<FloatValue> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<FloatValue>() / values.len() as FloatValue)
    }
}

pub fn annual_rainfall_from_daily(daily_mm: &[FloatValue]) -> Option<FloatValue> {
    mean(daily_mm).map(|d| d * DAYS_PER_YEAR)
}

pub fn annual_rainfall_from_hourly(hourly_mm: &[FloatValue]) -> Option<FloatValue> {
    mean(hourly_mm).map(|h| h * HOURS_PER_DAY * DAYS_PER_YEAR)
}

/// Weather fields of a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub mean_temp_c: Option<FloatValue>,
    pub annual_rainfall_mm: Option<FloatValue>,
}

impl WeatherSummary {
    /// Summarise daily mean temperatures (°C) and daily precipitation totals (mm).
    pub fn from_daily(temps_c: &[FloatValue], precip_mm: &[FloatValue]) -> Self {
        Self {
            mean_temp_c: mean(temps_c),
            annual_rainfall_mm: annual_rainfall_from_daily(precip_mm),
        }
    }

    /// Summarise hourly temperatures (°C) and hourly precipitation (mm).
    pub fn from_hourly(temps_c: &[FloatValue], precip_mm: &[FloatValue]) -> Self {
        Self {
            mean_temp_c: mean(temps_c),
            annual_rainfall_mm: annual_rainfall_from_hourly(precip_mm),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mean_temp_c.is_none() && self.annual_rainfall_mm.is_none()
    }

    /// First summary with any data wins; used to fall back between sources.
    pub fn or(self, fallback: WeatherSummary) -> WeatherSummary {
        if self.is_empty() {
            fallback
        } else {
            self
        }
    }
}

/// One depth interval of a soil property, in source units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSample {
    pub value: FloatValue,
    pub top_depth_cm: FloatValue,
    pub bottom_depth_cm: FloatValue,
}

impl DepthSample {
    pub fn new(value: FloatValue, top_depth_cm: FloatValue, bottom_depth_cm: FloatValue) -> Self {
        Self {
            value,
            top_depth_cm,
            bottom_depth_cm,
        }
    }

    /// Layer thickness; zero when the bottom depth is unknown (zero).
    pub fn thickness(&self) -> FloatValue {
        if self.bottom_depth_cm == 0.0 {
            0.0
        } else {
            self.bottom_depth_cm - self.top_depth_cm
        }
    }
}

/// Thickness-weighted mean of `samples` until `target_depth_cm` of soil has
/// been accumulated.
///
/// Samples are taken in the given order (shallowest first). A layer crossing
/// the target depth only contributes the part above it. Layers without
/// positive thickness are skipped. Returns `None` when nothing contributed.
pub fn depth_weighted_mean(
    samples: &[DepthSample],
    target_depth_cm: FloatValue,
) -> Option<FloatValue> {
    let mut total_weight = 0.0;
    let mut total_value = 0.0;

    for sample in samples {
        if total_weight >= target_depth_cm {
            break;
        }
        let used = sample.thickness().min(target_depth_cm - total_weight);
        if used <= 0.0 {
            continue;
        }
        total_value += sample.value * used;
        total_weight += used;
    }

    if total_weight == 0.0 {
        None
    } else {
        Some(total_value / total_weight)
    }
}

/// Soil property a named source layer describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilProperty {
    Ph,
    Clay,
    BulkDensity,
}

impl SoilProperty {
    /// Properties matched by a source layer name such as `phh2o`, `clay`
    /// or `bdod`. Matching is case-insensitive.
    pub fn from_layer_name(name: &str) -> Vec<SoilProperty> {
        let name = name.to_lowercase();
        let mut matched = Vec::new();
        if name.contains("ph") {
            matched.push(SoilProperty::Ph);
        }
        if name.contains("clay") {
            matched.push(SoilProperty::Clay);
        }
        if name.contains("bdod") || name.contains("bulk") {
            matched.push(SoilProperty::BulkDensity);
        }
        matched
    }
}

/// Raw soil profile collected from a soil-grid source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoilProfile {
    pub ph: Vec<DepthSample>,
    pub clay: Vec<DepthSample>,
    pub bulk_density: Vec<DepthSample>,
}

impl SoilProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the depth samples of a named source layer to every property the
    /// name matches. Unrecognised layers are ignored.
    pub fn add_layer(&mut self, name: &str, samples: &[DepthSample]) {
        for property in SoilProperty::from_layer_name(name) {
            let target = match property {
                SoilProperty::Ph => &mut self.ph,
                SoilProperty::Clay => &mut self.clay,
                SoilProperty::BulkDensity => &mut self.bulk_density,
            };
            target.extend_from_slice(samples);
        }
    }

    /// Depth-weight every property and convert to snapshot units.
    pub fn reduce(&self, target_depth_cm: FloatValue) -> SoilSummary {
        SoilSummary {
            soil_ph: depth_weighted_mean(&self.ph, target_depth_cm).map(|v| v / SOILGRIDS_PH_SCALE),
            clay_pct: depth_weighted_mean(&self.clay, target_depth_cm)
                .map(|v| v / SOILGRIDS_CLAY_SCALE),
            bulk_density: depth_weighted_mean(&self.bulk_density, target_depth_cm)
                .map(|v| v / SOILGRIDS_BULK_DENSITY_SCALE),
        }
    }
}

/// Soil fields of a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilSummary {
    pub soil_ph: Option<FloatValue>,
    pub clay_pct: Option<FloatValue>,
    pub bulk_density: Option<FloatValue>,
}

/// Terrain fields of a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainSummary {
    pub elevation_m: Option<FloatValue>,
}
