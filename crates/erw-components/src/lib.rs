//! Enhanced rock weathering estimation models
//!
//! This crate turns a basalt application and its environmental context into a
//! carbon removal estimate following the `beerling-simplified-v1` methodology.
//!
//! # Module Organisation
//!
//! - `weathering`: annual weathering fraction from particle size, soil pH,
//!   clay content and climate
//! - `carbon`: CO2 removal and bounds, DIC export, permanence
//! - `estimator`: the full pipeline and its audited result
//!
//! # Parameters
//!
//! Each model has an associated parameters struct in the `parameters` module
//! whose defaults reproduce the published methodology constants.
//!
//! # Example
//!
//! ```rust
//! use erw_components::estimator::Estimator;
//! use erw_core::application::ApplicationInput;
//! use erw_core::environment::EnvironmentSnapshot;
//!
//! let application = ApplicationInput {
//!     application_id: "app-1".to_string(),
//!     farm_id: "farm-1".to_string(),
//!     basalt_mass_kg: Some(10_000.0),
//!     particle_size_mm: Some(0.25),
//!     ..Default::default()
//! }
//! .validate()
//! .unwrap();
//!
//! let snapshot = EnvironmentSnapshot {
//!     soil_ph: Some(7.0),
//!     ..Default::default()
//! };
//!
//! let result = Estimator::new().estimate(&application, &snapshot);
//! assert!((result.wf - 0.1458).abs() < 1e-12);
//! ```

pub mod carbon;
pub mod estimator;
pub mod parameters;
pub mod weathering;
