//! Carbon accounting models
//!
//! - `CarbonAccounting`: CO2 removal from weathered basalt and its bounds
//! - `DicExport`: runoff index and dissolved inorganic carbon export
//! - `PermanenceClassifier`: qualitative permanence from slope and clay

mod accounting;
mod export;
mod permanence;

pub use accounting::{CarbonAccounting, RemovalBands, KG_PER_TONNE};
pub use export::DicExport;
pub use permanence::{Permanence, PermanenceClassifier};
