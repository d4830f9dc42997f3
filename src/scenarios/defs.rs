use serde::{Deserialize, Serialize};

use crate::index::sensitivity::Scenario;
use crate::model::weights::ComponentWeights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub weights: ComponentWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub base: ComponentWeights,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

impl ScenarioDef {
    pub fn new(name: &str, description: &str, weights: ComponentWeights) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weights,
        }
    }

    pub fn scenario(&self) -> Scenario {
        Scenario {
            name: self.name.clone(),
            weights: self.weights,
        }
    }
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self {
            base: ComponentWeights::default(),
            scenarios: vec![
                ScenarioDef::new(
                    "labor_focused",
                    "Labor market demand dominates",
                    ComponentWeights::new(0.20, 0.50, 0.15, 0.15),
                ),
                ScenarioDef::new(
                    "transport_focused",
                    "Transportation and mobility dominate",
                    ComponentWeights::new(0.50, 0.25, 0.15, 0.10),
                ),
                ScenarioDef::new(
                    "policy_focused",
                    "Fair-chance policy environment weighted up",
                    ComponentWeights::new(0.25, 0.25, 0.20, 0.30),
                ),
            ],
        }
    }
}

impl ScenarioSet {
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios.iter().map(ScenarioDef::scenario).collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.name.as_str())
    }
}
