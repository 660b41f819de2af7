//! Core data model for enhanced rock weathering (ERW) carbon removal estimates.
//!
//! This crate holds everything the estimation models share:
//!
//! - `environment`: the environment snapshot and its defaulting layer
//! - `soil`: the typed soil context consumed by the weathering model
//! - `application`: operator-provided application facts and their validation
//! - `observations`: reduction of raw weather/soil/terrain payloads into snapshot fields
//! - `audit`: the canonical audit payload and its SHA-256 fingerprint
//! - `standard_variables`: names and units of the recognised environment fields
//!
//! The estimation models themselves live in `erw-components`.

pub mod application;
pub mod audit;
pub mod environment;
pub mod errors;
pub mod observations;
pub mod soil;
pub mod standard_variables;

/// Floating point type used for all physical quantities.
pub type FloatValue = f64;
