use tracing::debug;

use crate::index::IndexError;
use crate::index::components::ComponentScores;
use crate::index::rank::{best_by_rank, competition_rank, worst_by_rank};
use crate::index::sensitivity::{self, Scenario, SensitivityTable};
use crate::index::summary::{self, SummaryTable};
use crate::model::indicators::Component;
use crate::model::region::RegionTable;
use crate::model::weights::ComponentWeights;

#[derive(Debug, Clone, PartialEq)]
pub struct IndexEngine {
    weights: ComponentWeights,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTable {
    pub regions: RegionTable,
    pub components: ComponentScores,
    pub reai: Vec<f64>,
    pub reai_rank: Vec<u32>,
}

impl Default for IndexEngine {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
        }
    }
}

impl IndexEngine {
    pub fn new(weights: ComponentWeights) -> Result<Self, IndexError> {
        weights.validate()?;
        debug!(
            transportation = weights.transportation,
            labor_market = weights.labor_market,
            licensing = weights.licensing,
            policy = weights.policy,
            "index engine configured"
        );
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ComponentWeights {
        &self.weights
    }

    pub fn calculate(&self, table: &RegionTable) -> Result<ScoredTable, IndexError> {
        let components = ComponentScores::compute(table)?;
        let reai = composite(&components, &self.weights);
        let reai_rank = competition_rank(&reai);
        debug!(regions = table.len(), "composite index calculated");
        Ok(ScoredTable {
            regions: table.clone(),
            components,
            reai,
            reai_rank,
        })
    }

    pub fn sensitivity_analysis(
        &self,
        scored: &ScoredTable,
        scenarios: &[Scenario],
    ) -> Result<SensitivityTable, IndexError> {
        sensitivity::analyze(scored, scenarios)
    }

    pub fn summary_statistics(&self, scored: &ScoredTable) -> SummaryTable {
        summary::summarize(scored, &self.weights)
    }
}

pub fn composite(components: &ComponentScores, weights: &ComponentWeights) -> Vec<f64> {
    (0..components.len())
        .map(|i| {
            components.transportation[i] * weights.transportation
                + components.labor_market[i] * weights.labor_market
                + components.licensing[i] * weights.licensing
                + components.policy[i] * weights.policy
        })
        .collect()
}

impl ScoredTable {
    pub fn len(&self) -> usize {
        self.reai.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reai.is_empty()
    }

    pub fn component(&self, component: Component) -> &[f64] {
        self.components.get(component)
    }

    pub fn top(&self, n: usize) -> Vec<usize> {
        best_by_rank(&self.reai_rank, n)
    }

    pub fn bottom(&self, n: usize) -> Vec<usize> {
        worst_by_rank(&self.reai_rank, n)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/engine.rs"]
mod tests;
