use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::weights::ComponentWeights;
use crate::scenarios::defs::{ScenarioDef, ScenarioSet};

#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no scenarios found in {0}")]
    Empty(String),
    #[error("duplicate scenario name: {0}")]
    Duplicate(String),
    #[error("base weights defined more than once (second in {0})")]
    ConflictingBase(String),
    #[error("no [weights] table in {0}")]
    MissingWeights(String),
}

#[derive(serde::Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    weights: Option<ComponentWeights>,
    #[serde(default)]
    scenario: Vec<ScenarioDef>,
}

/// Reads every `*.toml` file in `dir` in file name order. At most one file
/// may carry a `[weights]` base table; without one the default base applies.
pub fn load_scenarios_from_dir(dir: &Path) -> Result<ScenarioSet, ScenarioLoadError> {
    let mut files = list_toml_files(dir)?;
    files.sort();

    let mut base: Option<ComponentWeights> = None;
    let mut scenarios = Vec::new();
    let mut seen = HashSet::new();
    for file in files {
        let text = fs::read_to_string(&file)?;
        let parsed: ScenarioFile = toml::from_str(&text)?;
        if let Some(weights) = parsed.weights {
            if base.is_some() {
                return Err(ScenarioLoadError::ConflictingBase(
                    file.to_string_lossy().to_string(),
                ));
            }
            base = Some(weights);
        }
        for def in parsed.scenario {
            if !seen.insert(def.name.clone()) {
                return Err(ScenarioLoadError::Duplicate(def.name));
            }
            scenarios.push(def);
        }
    }

    if scenarios.is_empty() {
        return Err(ScenarioLoadError::Empty(dir.to_string_lossy().to_string()));
    }

    Ok(ScenarioSet {
        base: base.unwrap_or_default(),
        scenarios,
    })
}

pub fn load_weights_file(path: &Path) -> Result<ComponentWeights, ScenarioLoadError> {
    let text = fs::read_to_string(path)?;
    let parsed: ScenarioFile = toml::from_str(&text)?;
    parsed
        .weights
        .ok_or_else(|| ScenarioLoadError::MissingWeights(path.to_string_lossy().to_string()))
}

pub fn default_scenarios_dir() -> PathBuf {
    let relative = Path::new("assets").join("scenarios");
    if relative.is_dir() {
        return relative;
    }

    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("scenarios");
    if manifest.is_dir() {
        return manifest;
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let sibling = dir.join("assets").join("scenarios");
        if sibling.is_dir() {
            return sibling;
        }
        let parent = dir.join("..").join("assets").join("scenarios");
        if parent.is_dir() {
            return parent;
        }
    }

    relative
}

fn list_toml_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scenarios/loader.rs"]
mod tests;
