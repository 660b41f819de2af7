//! Weathering domain models
//!
//! - `WeatheringModel`: empirical annual weathering fraction from particle
//!   size, soil chemistry and climate

mod fraction;

pub use fraction::{WeatheringFactors, WeatheringModel};
