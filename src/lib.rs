pub mod cli;
pub mod index;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scenarios;

pub mod prelude {
    pub use crate::index::{IndexEngine, IndexError, Scenario, ScoredTable, SensitivityTable};
    pub use crate::model::indicators::{Component, Indicator};
    pub use crate::model::region::{RegionRecord, RegionTable};
    pub use crate::model::weights::ComponentWeights;
}

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
pub(crate) mod support;
