//! Permanence classification
//!
//! Qualitative estimate of how durably captured carbon stays sequestered,
//! driven by erosion risk (slope) and soil retention (clay).

use crate::parameters::PermanenceParameters;
use erw_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Permanence rating, serialised as `"High"`, `"Medium"` or `"Low"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permanence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Permanence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Permanence::High => "High",
            Permanence::Medium => "Medium",
            Permanence::Low => "Low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermanenceClassifier {
    parameters: PermanenceParameters,
}

impl PermanenceClassifier {
    pub fn new() -> Self {
        Self::from_parameters(PermanenceParameters::default())
    }

    pub fn from_parameters(parameters: PermanenceParameters) -> Self {
        Self { parameters }
    }

    /// Classify a plot. First matching rule wins; total over all inputs.
    pub fn permanence_score(
        &self,
        slope_percent: FloatValue,
        clay_pct: Option<FloatValue>,
    ) -> Permanence {
        let p = &self.parameters;
        let low_clay = clay_pct.map_or(true, |clay| clay < p.high_max_clay_pct);

        if slope_percent < p.high_max_slope_percent && low_clay {
            Permanence::High
        } else if slope_percent < p.medium_max_slope_percent {
            Permanence::Medium
        } else {
            Permanence::Low
        }
    }

    pub fn parameters(&self) -> &PermanenceParameters {
        &self.parameters
    }
}
