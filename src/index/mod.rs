//! Pure in-memory index calculation, no I/O.

pub mod components;
pub mod engine;
pub mod normalize;
pub mod rank;
pub mod sensitivity;
pub mod summary;

use thiserror::Error;

use crate::model::indicators::{Component, Indicator};
use crate::model::weights::WeightsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    #[error("invalid component weights: {0}")]
    Weights(#[from] WeightsError),
    #[error("weights for scenario {scenario} must sum to 1.0, got {total}")]
    ScenarioWeights { scenario: String, total: f64 },
    #[error("duplicate scenario name: {0}")]
    DuplicateScenario(String),
    #[error("scenario name is reserved: {0}")]
    ReservedScenario(String),
    #[error("{component} score requires missing column: {column}")]
    MissingColumn {
        component: Component,
        column: Indicator,
    },
}

pub use engine::{IndexEngine, ScoredTable};
pub use sensitivity::{Scenario, SensitivityTable};
pub use summary::SummaryTable;
