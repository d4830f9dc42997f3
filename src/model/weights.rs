use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::indicators::Component;

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightsError {
    #[error("weights must sum to 1.0, got {total}")]
    BadSum { total: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentWeights {
    pub transportation: f64,
    pub labor_market: f64,
    pub licensing: f64,
    pub policy: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            transportation: 0.30,
            labor_market: 0.35,
            licensing: 0.20,
            policy: 0.15,
        }
    }
}

impl ComponentWeights {
    pub fn new(transportation: f64, labor_market: f64, licensing: f64, policy: f64) -> Self {
        Self {
            transportation,
            labor_market,
            licensing,
            policy,
        }
    }

    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Transportation => self.transportation,
            Component::LaborMarket => self.labor_market,
            Component::Licensing => self.licensing,
            Component::Policy => self.policy,
        }
    }

    pub fn total(&self) -> f64 {
        self.transportation + self.labor_market + self.licensing + self.policy
    }

    /// NaN totals fail the comparison and are rejected.
    pub fn validate(&self) -> Result<(), WeightsError> {
        let total = self.total();
        if (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(())
        } else {
            Err(WeightsError::BadSum { total })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
