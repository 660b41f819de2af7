//! Invariants that must hold for any finite input.
//!
//! These sweep the input space rather than checking single values:
//! - the weathering fraction stays inside its bounds
//! - removal bands stay ordered
//! - DIC export fraction stays inside its bounds
//! - defaulting is total

use erw_components::carbon::{CarbonAccounting, DicExport, Permanence, PermanenceClassifier};
use erw_components::weathering::WeatheringModel;
use erw_core::environment::{EnvironmentDefaults, EnvironmentSnapshot};
use erw_core::soil::SoilContext;
use is_close::is_close;

const PH_VALUES: [f64; 8] = [0.0, 3.5, 5.5, 6.0, 7.0, 7.5, 9.0, 14.0];
const CLAY_VALUES: [f64; 7] = [0.0, 10.0, 15.0, 25.0, 35.0, 60.0, 100.0];
const RAIN_VALUES: [f64; 6] = [0.0, 200.0, 1500.0, 2250.0, 4000.0, 10_000.0];
const TEMP_VALUES: [f64; 7] = [-40.0, -5.0, 0.0, 10.0, 22.0, 35.0, 60.0];
const SIZE_VALUES: [f64; 7] = [-1.0, 0.0, 0.01, 0.25, 1.0, 10.0, 1000.0];

mod weathering_bounds {
    use super::*;

    #[test]
    fn test_fraction_always_within_bounds() {
        let model = WeatheringModel::new();
        let mut checked = 0;

        for &ph in &PH_VALUES {
            for &clay in &CLAY_VALUES {
                for &rain in &RAIN_VALUES {
                    for &temp in &TEMP_VALUES {
                        for &size in &SIZE_VALUES {
                            let soil =
                                SoilContext::new(Some(ph), Some(clay), Some(1.2), rain, temp);
                            let wf = model.weathering_fraction(&soil, size);
                            assert!(
                                (0.005..=0.35).contains(&wf),
                                "wf {} out of bounds for pH={} clay={} rain={} temp={} size={}",
                                wf,
                                ph,
                                clay,
                                rain,
                                temp,
                                size
                            );
                            checked += 1;
                        }
                    }
                }
            }
        }

        assert_eq!(checked, 8 * 7 * 6 * 7 * 7);
    }

    #[test]
    fn test_extreme_inputs() {
        let model = WeatheringModel::new();
        let soil = SoilContext::new(Some(14.0), Some(100.0), None, 10_000.0, -40.0);
        assert_eq!(model.weathering_fraction(&soil, 0.25), 0.005);
    }

    #[test]
    fn test_non_positive_sizes_match_clamp_floor() {
        let model = WeatheringModel::new();
        let floor = model.particle_factor(0.05);
        for size in [0.0, -0.05, -3.0, f64::MIN] {
            assert_eq!(model.particle_factor(size), floor);
        }
    }

    #[test]
    fn test_finer_particles_never_weather_slower() {
        let model = WeatheringModel::new();
        let sizes = [0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0];
        for pair in sizes.windows(2) {
            assert!(model.particle_factor(pair[0]) >= model.particle_factor(pair[1]));
        }
    }
}

mod carbon_bounds {
    use super::*;

    #[test]
    fn test_bands_ordered_for_non_negative_values() {
        let accounting = CarbonAccounting::new();
        let mut value = 0.0;
        while value < 1e6 {
            let bands = accounting.bands(value);
            assert!(bands.conservative <= bands.central);
            assert!(bands.central <= bands.optimistic);
            assert!(is_close!(bands.conservative, 0.8 * value));
            assert!(is_close!(bands.optimistic, 1.15 * value));
            value = value * 3.0 + 0.7;
        }
    }

    #[test]
    fn test_export_fraction_bounded_for_any_runoff_index() {
        let model = DicExport::new();
        let mut ri = -50.0;
        while ri <= 50.0 {
            let f = model.export_fraction(ri);
            assert!((0.05..=0.4).contains(&f), "runoff index {} gave {}", ri, f);
            ri += 0.37;
        }
        for ri in [f64::MIN, f64::MAX] {
            let f = model.export_fraction(ri);
            assert!((0.05..=0.4).contains(&f));
        }
    }

    #[test]
    fn test_runoff_index_bounded() {
        let model = DicExport::new();
        for &rain in &RAIN_VALUES {
            for slope in [-20.0, 0.0, 2.0, 5.0, 15.0, 45.0, 90.0] {
                let ri = model.runoff_index(rain, slope);
                assert!((0.0..=1.0).contains(&ri));
            }
        }
    }
}

mod permanence {
    use super::*;

    #[test]
    fn test_documented_cases() {
        let c = PermanenceClassifier::new();
        assert_eq!(c.permanence_score(2.0, Some(15.0)), Permanence::High);
        assert_eq!(c.permanence_score(2.0, Some(25.0)), Permanence::Medium);
        assert_eq!(c.permanence_score(5.0, None), Permanence::Medium);
        assert_eq!(c.permanence_score(15.0, Some(5.0)), Permanence::Low);
    }

    #[test]
    fn test_steeper_never_more_permanent() {
        let c = PermanenceClassifier::new();
        let rank = |p: Permanence| match p {
            Permanence::High => 2,
            Permanence::Medium => 1,
            Permanence::Low => 0,
        };
        for clay in [None, Some(5.0), Some(19.9), Some(20.0), Some(80.0)] {
            let mut previous = rank(c.permanence_score(-10.0, clay));
            for step in 0..60 {
                let current = rank(c.permanence_score(step as f64 * 0.5, clay));
                assert!(current <= previous);
                previous = current;
            }
        }
    }
}

mod defaulting {
    use super::*;

    #[test]
    fn test_defaulting_is_total() {
        let defaults = EnvironmentDefaults::default();
        let values = [None, Some(f64::NAN), Some(f64::NEG_INFINITY), Some(-3.0), Some(42.0)];

        for &temp in &values {
            for &rain in &values {
                for &ph in &values {
                    for &slope in &values {
                        let snapshot = EnvironmentSnapshot {
                            mean_temp_c: temp,
                            annual_rainfall_mm: rain,
                            soil_ph: ph,
                            clay_pct: ph,
                            bulk_density: rain,
                            slope_percent: slope,
                            elevation_m: temp,
                        };
                        let env = snapshot.with_defaults(&defaults);
                        for v in [
                            env.mean_temp_c,
                            env.annual_rainfall_mm,
                            env.soil_ph,
                            env.clay_pct,
                            env.bulk_density,
                            env.slope_percent,
                        ] {
                            assert!(v.is_finite());
                        }
                    }
                }
            }
        }
    }
}
