use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::IndexError;
use crate::index::engine::{ScoredTable, composite};
use crate::index::rank::{best_by_rank, competition_rank};
use crate::model::weights::ComponentWeights;

pub const BASE_SCENARIO: &str = "base";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub weights: ComponentWeights,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub reai: Vec<f64>,
    pub rank: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityTable {
    pub region_ids: Vec<String>,
    pub region_names: Vec<String>,
    pub base_reai: Vec<f64>,
    pub base_rank: Vec<u32>,
    pub scenarios: Vec<ScenarioResult>,
}

pub fn analyze(scored: &ScoredTable, scenarios: &[Scenario]) -> Result<SensitivityTable, IndexError> {
    let mut seen = HashSet::new();
    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        if scenario.name == BASE_SCENARIO {
            return Err(IndexError::ReservedScenario(scenario.name.clone()));
        }
        if !seen.insert(scenario.name.as_str()) {
            return Err(IndexError::DuplicateScenario(scenario.name.clone()));
        }
        scenario
            .weights
            .validate()
            .map_err(|_| IndexError::ScenarioWeights {
                scenario: scenario.name.clone(),
                total: scenario.weights.total(),
            })?;

        let reai = composite(&scored.components, &scenario.weights);
        let rank = competition_rank(&reai);
        debug!(scenario = scenario.name.as_str(), "scenario evaluated");
        results.push(ScenarioResult {
            name: scenario.name.clone(),
            reai,
            rank,
        });
    }

    Ok(SensitivityTable {
        region_ids: scored.regions.region_ids.clone(),
        region_names: scored.regions.region_names.clone(),
        base_reai: scored.reai.clone(),
        base_rank: scored.reai_rank.clone(),
        scenarios: results,
    })
}

impl SensitivityTable {
    pub fn len(&self) -> usize {
        self.region_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.region_ids.is_empty()
    }

    pub fn scenario(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Ranks under `name`, where `base` selects the base weighting.
    pub fn ranks(&self, name: &str) -> Option<&[u32]> {
        if name == BASE_SCENARIO {
            return Some(&self.base_rank);
        }
        self.scenario(name).map(|s| s.rank.as_slice())
    }

    pub fn scenario_names(&self) -> Vec<&str> {
        let mut names = vec![BASE_SCENARIO];
        names.extend(self.scenarios.iter().map(|s| s.name.as_str()));
        names
    }

    pub fn top(&self, name: &str, n: usize) -> Option<Vec<usize>> {
        self.ranks(name).map(|ranks| best_by_rank(ranks, n))
    }

    pub fn header(&self) -> Vec<String> {
        let mut cols = vec![
            "region_id".to_string(),
            "region_name".to_string(),
            "base_REAI".to_string(),
            "base_rank".to_string(),
        ];
        for s in &self.scenarios {
            cols.push(format!("{}_REAI", s.name));
            cols.push(format!("{}_rank", s.name));
        }
        cols
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/sensitivity.rs"]
mod tests;
