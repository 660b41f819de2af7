//! Model parameters
//!
//! Each model has an associated parameters struct. Defaults reproduce the
//! `beerling-simplified-v1` methodology; every struct supports partial
//! TOML/JSON overrides through `#[serde(default)]`.

mod carbon_accounting;
mod dic_export;
mod estimator;
mod permanence;
mod weathering;

pub use carbon_accounting::CarbonAccountingParameters;
pub use dic_export::DicExportParameters;
pub use estimator::EstimatorParameters;
pub use permanence::PermanenceParameters;
pub use weathering::{StepBand, StepTable, WeatheringParameters};
