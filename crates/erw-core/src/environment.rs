//! Environment snapshot and defaulting
//!
//! An [`EnvironmentSnapshot`] is whatever the data-acquisition layer managed to
//! observe for a plot. Any field may be missing. Before estimation the snapshot
//! is normalised exactly once with [`EnvironmentSnapshot::with_defaults`], which
//! yields a [`DefaultedEnvironment`] where every field except elevation is a
//! plain number.
//!
//! Environmental readings are physically estimable, so substituting a regional
//! default is acceptable. Operator-provided application facts are not; see
//! [`crate::application`].

use crate::observations::{SoilSummary, TerrainSummary, WeatherSummary};
use crate::standard_variables::{
    FieldDefinition, FIELD_ANNUAL_RAINFALL, FIELD_BULK_DENSITY, FIELD_CLAY, FIELD_MEAN_TEMP,
    FIELD_SLOPE, FIELD_SOIL_PH,
};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default values substituted for missing environment fields.
///
/// Elevation has no default: it is informational and may legitimately stay
/// unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentDefaults {
    /// Annual rainfall
    /// unit: mm / yr
    /// default: 1500.0
    pub annual_rainfall_mm: FloatValue,

    /// Mean annual temperature
    /// unit: °C
    /// default: 22.0
    pub mean_temp_c: FloatValue,

    /// Soil pH
    /// unit: dimensionless
    /// default: 6.8
    pub soil_ph: FloatValue,

    /// Clay content
    /// unit: %
    /// default: 18.0
    pub clay_pct: FloatValue,

    /// Terrain slope
    /// unit: %
    /// default: 5.0
    pub slope_percent: FloatValue,

    /// Bulk density
    /// unit: g / cm^3
    /// default: 1.2
    pub bulk_density: FloatValue,

    /// Slope added per kilometre of elevation when slope is derived from
    /// elevation (terrain proxy).
    /// unit: % / km
    /// default: 5.0
    pub slope_per_km_elevation: FloatValue,

    /// Upper bound of the elevation-derived slope proxy.
    /// unit: %
    /// default: 45.0
    pub max_derived_slope_percent: FloatValue,
}

impl Default for EnvironmentDefaults {
    fn default() -> Self {
        Self {
            annual_rainfall_mm: 1500.0,
            mean_temp_c: 22.0,
            soil_ph: 6.8,
            clay_pct: 18.0,
            slope_percent: 5.0,
            bulk_density: 1.2,
            slope_per_km_elevation: 5.0,
            max_derived_slope_percent: 45.0,
        }
    }
}

impl EnvironmentDefaults {
    /// Terrain slope proxy derived from elevation.
    ///
    /// $$ slope = \mathrm{clamp}\left(\frac{elevation}{1000} \times k, 0, slope_{max}\right) $$
    pub fn slope_from_elevation(&self, elevation_m: FloatValue) -> FloatValue {
        (elevation_m / 1000.0 * self.slope_per_km_elevation)
            .max(0.0)
            .min(self.max_derived_slope_percent)
    }
}

/// A possibly partial environmental observation for a plot.
///
/// Serialises with the wire names listed in [`crate::standard_variables`].
/// Unknown keys (raw source payloads and the like) are ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSnapshot {
    pub mean_temp_c: Option<FloatValue>,
    pub annual_rainfall_mm: Option<FloatValue>,
    #[serde(rename = "soil_pH")]
    pub soil_ph: Option<FloatValue>,
    pub clay_pct: Option<FloatValue>,
    pub bulk_density: Option<FloatValue>,
    pub slope_percent: Option<FloatValue>,
    pub elevation_m: Option<FloatValue>,
}

impl EnvironmentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay observed weather values. Missing values in the summary leave
    /// the snapshot untouched.
    pub fn merge_weather(&mut self, weather: &WeatherSummary) {
        overlay(&mut self.mean_temp_c, weather.mean_temp_c);
        overlay(&mut self.annual_rainfall_mm, weather.annual_rainfall_mm);
    }

    pub fn merge_soil(&mut self, soil: &SoilSummary) {
        overlay(&mut self.soil_ph, soil.soil_ph);
        overlay(&mut self.clay_pct, soil.clay_pct);
        overlay(&mut self.bulk_density, soil.bulk_density);
    }

    pub fn merge_terrain(&mut self, terrain: &TerrainSummary) {
        overlay(&mut self.elevation_m, terrain.elevation_m);
    }

    /// Produce a complete environment, substituting defaults for every
    /// missing, null or non-finite field.
    ///
    /// When slope is missing but elevation is known, slope is first derived
    /// from elevation. This never fails.
    pub fn with_defaults(&self, defaults: &EnvironmentDefaults) -> DefaultedEnvironment {
        let elevation_m = self.elevation_m.filter(|v| v.is_finite());
        let slope = self
            .slope_percent
            .filter(|v| v.is_finite())
            .or_else(|| elevation_m.map(|e| defaults.slope_from_elevation(e)));

        DefaultedEnvironment {
            mean_temp_c: resolve(self.mean_temp_c, defaults.mean_temp_c, &FIELD_MEAN_TEMP),
            annual_rainfall_mm: resolve(
                self.annual_rainfall_mm,
                defaults.annual_rainfall_mm,
                &FIELD_ANNUAL_RAINFALL,
            ),
            soil_ph: resolve(self.soil_ph, defaults.soil_ph, &FIELD_SOIL_PH),
            clay_pct: resolve(self.clay_pct, defaults.clay_pct, &FIELD_CLAY),
            bulk_density: resolve(self.bulk_density, defaults.bulk_density, &FIELD_BULK_DENSITY),
            slope_percent: resolve(slope, defaults.slope_percent, &FIELD_SLOPE),
            elevation_m,
        }
    }
}

fn overlay(target: &mut Option<FloatValue>, value: Option<FloatValue>) {
    if value.is_some() {
        *target = value;
    }
}

fn resolve(value: Option<FloatValue>, default: FloatValue, field: &FieldDefinition) -> FloatValue {
    match value {
        Some(v) if v.is_finite() => v,
        Some(v) => {
            debug!(
                field = field.name,
                value = v,
                default,
                "Non-finite environment value replaced by default"
            );
            default
        }
        None => {
            debug!(field = field.name, default, "Missing environment value replaced by default");
            default
        }
    }
}

/// A complete environment: every field except elevation is guaranteed present.
///
/// Serialises to the same shape as [`EnvironmentSnapshot`] so it can be echoed
/// back in an estimation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultedEnvironment {
    pub mean_temp_c: FloatValue,
    pub annual_rainfall_mm: FloatValue,
    #[serde(rename = "soil_pH")]
    pub soil_ph: FloatValue,
    pub clay_pct: FloatValue,
    pub bulk_density: FloatValue,
    pub slope_percent: FloatValue,
    pub elevation_m: Option<FloatValue>,
}

impl From<DefaultedEnvironment> for EnvironmentSnapshot {
    fn from(env: DefaultedEnvironment) -> Self {
        Self {
            mean_temp_c: Some(env.mean_temp_c),
            annual_rainfall_mm: Some(env.annual_rainfall_mm),
            soil_ph: Some(env.soil_ph),
            clay_pct: Some(env.clay_pct),
            bulk_density: Some(env.bulk_density),
            slope_percent: Some(env.slope_percent),
            elevation_m: env.elevation_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_gets_all_defaults() {
        let defaults = EnvironmentDefaults::default();
        let env = EnvironmentSnapshot::new().with_defaults(&defaults);

        assert_eq!(env.annual_rainfall_mm, 1500.0);
        assert_eq!(env.mean_temp_c, 22.0);
        assert_eq!(env.soil_ph, 6.8);
        assert_eq!(env.clay_pct, 18.0);
        assert_eq!(env.slope_percent, 5.0);
        assert_eq!(env.bulk_density, 1.2);
        assert_eq!(env.elevation_m, None);
    }

    #[test]
    fn test_observed_values_are_kept() {
        let snapshot = EnvironmentSnapshot {
            soil_ph: Some(5.2),
            clay_pct: Some(40.0),
            elevation_m: Some(120.0),
            slope_percent: Some(1.0),
            ..Default::default()
        };
        let env = snapshot.with_defaults(&EnvironmentDefaults::default());

        assert_eq!(env.soil_ph, 5.2);
        assert_eq!(env.clay_pct, 40.0);
        assert_eq!(env.slope_percent, 1.0);
        assert_eq!(env.elevation_m, Some(120.0));
        assert_eq!(env.annual_rainfall_mm, 1500.0);
    }

    #[test]
    fn test_non_finite_values_are_defaulted() {
        let snapshot = EnvironmentSnapshot {
            mean_temp_c: Some(f64::NAN),
            annual_rainfall_mm: Some(f64::INFINITY),
            ..Default::default()
        };
        let env = snapshot.with_defaults(&EnvironmentDefaults::default());

        assert_eq!(env.mean_temp_c, 22.0);
        assert_eq!(env.annual_rainfall_mm, 1500.0);
    }

    #[test]
    fn test_slope_derived_from_elevation() {
        let defaults = EnvironmentDefaults::default();
        let snapshot = EnvironmentSnapshot {
            elevation_m: Some(800.0),
            ..Default::default()
        };
        let env = snapshot.with_defaults(&defaults);
        assert!((env.slope_percent - 4.0).abs() < 1e-12);

        // Derived slope is capped
        let high = EnvironmentSnapshot {
            elevation_m: Some(20_000.0),
            ..Default::default()
        };
        assert_eq!(high.with_defaults(&defaults).slope_percent, 45.0);

        // and never negative
        let below_sea = EnvironmentSnapshot {
            elevation_m: Some(-50.0),
            ..Default::default()
        };
        assert_eq!(below_sea.with_defaults(&defaults).slope_percent, 0.0);
    }

    #[test]
    fn test_observed_slope_wins_over_elevation_proxy() {
        let snapshot = EnvironmentSnapshot {
            elevation_m: Some(800.0),
            slope_percent: Some(12.0),
            ..Default::default()
        };
        let env = snapshot.with_defaults(&EnvironmentDefaults::default());
        assert_eq!(env.slope_percent, 12.0);
    }

    #[test]
    fn test_merge_summaries() {
        let mut snapshot = EnvironmentSnapshot {
            mean_temp_c: Some(10.0),
            ..Default::default()
        };
        snapshot.merge_weather(&WeatherSummary {
            mean_temp_c: None,
            annual_rainfall_mm: Some(900.0),
        });
        snapshot.merge_soil(&SoilSummary {
            soil_ph: Some(6.1),
            clay_pct: None,
            bulk_density: Some(1.35),
        });
        snapshot.merge_terrain(&TerrainSummary {
            elevation_m: Some(250.0),
        });

        assert_eq!(snapshot.mean_temp_c, Some(10.0));
        assert_eq!(snapshot.annual_rainfall_mm, Some(900.0));
        assert_eq!(snapshot.soil_ph, Some(6.1));
        assert_eq!(snapshot.clay_pct, None);
        assert_eq!(snapshot.bulk_density, Some(1.35));
        assert_eq!(snapshot.elevation_m, Some(250.0));
    }

    #[test]
    fn test_wire_names() {
        let json = r#"{"soil_pH": 7.1, "clay_pct": null, "weather_raw": {"ignored": true}}"#;
        let snapshot: EnvironmentSnapshot =
            serde_json::from_str(json).expect("Deserialization failed");
        assert_eq!(snapshot.soil_ph, Some(7.1));
        assert_eq!(snapshot.clay_pct, None);

        let env = snapshot.with_defaults(&EnvironmentDefaults::default());
        let value = serde_json::to_value(env).expect("Serialization failed");
        assert_eq!(value["soil_pH"], 7.1);
        assert!(value["elevation_m"].is_null());
    }

    #[test]
    fn test_partial_defaults_deserialization() {
        let defaults: EnvironmentDefaults =
            toml::from_str("clay_pct = 30.0").expect("Partial deserialization failed");
        assert_eq!(defaults.clay_pct, 30.0);
        assert_eq!(defaults.soil_ph, 6.8);
        assert_eq!(defaults.max_derived_slope_percent, 45.0);
    }
}
