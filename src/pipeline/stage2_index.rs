use std::path::Path;

use thiserror::Error;

use crate::index::IndexError;
use crate::index::engine::{IndexEngine, ScoredTable};
use crate::pipeline::stage1_load::LoadContext;
use crate::report::ReportError;
use crate::report::tables::write_scored_tsv;

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("index error: {0}")]
    Index(#[from] IndexError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

pub const RESULTS_FILE: &str = "reai_results.tsv";

pub fn run_stage2_index(
    engine: &IndexEngine,
    load: &LoadContext,
    out_dir: &Path,
) -> Result<ScoredTable, Stage2Error> {
    let scored = engine.calculate(&load.table)?;
    write_scored_tsv(&out_dir.join(RESULTS_FILE), &scored)?;
    Ok(scored)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_index.rs"]
mod tests;
