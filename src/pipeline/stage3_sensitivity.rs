use std::path::Path;

use thiserror::Error;

use crate::index::IndexError;
use crate::index::engine::{IndexEngine, ScoredTable};
use crate::index::sensitivity::SensitivityTable;
use crate::report::ReportError;
use crate::report::tables::write_sensitivity_tsv;
use crate::scenarios::defs::ScenarioSet;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("index error: {0}")]
    Index(#[from] IndexError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

pub const SENSITIVITY_FILE: &str = "reai_sensitivity.tsv";

pub fn run_stage3_sensitivity(
    engine: &IndexEngine,
    scored: &ScoredTable,
    scenarios: &ScenarioSet,
    out_dir: &Path,
) -> Result<SensitivityTable, Stage3Error> {
    let table = engine.sensitivity_analysis(scored, &scenarios.scenarios())?;
    write_sensitivity_tsv(&out_dir.join(SENSITIVITY_FILE), &table)?;
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_sensitivity.rs"]
mod tests;
