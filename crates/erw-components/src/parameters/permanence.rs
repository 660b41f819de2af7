//! Permanence classification parameters

use erw_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Thresholds for the qualitative permanence score.
///
/// Rules are applied in order, first match wins:
/// 1. slope below `high_max_slope_percent` and clay unknown or below
///    `high_max_clay_pct` → High
/// 2. slope below `medium_max_slope_percent` → Medium
/// 3. otherwise → Low
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermanenceParameters {
    /// unit: %
    /// default: 3.0
    pub high_max_slope_percent: FloatValue,

    /// unit: %
    /// default: 20.0
    pub high_max_clay_pct: FloatValue,

    /// unit: %
    /// default: 10.0
    pub medium_max_slope_percent: FloatValue,
}

impl Default for PermanenceParameters {
    fn default() -> Self {
        Self {
            high_max_slope_percent: 3.0,
            high_max_clay_pct: 20.0,
            medium_max_slope_percent: 10.0,
        }
    }
}
