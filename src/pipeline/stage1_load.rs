use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::input::InputError;
use crate::input::regions::{IdColumns, read_region_table};
use crate::model::indicators::Indicator;
use crate::model::region::RegionTable;

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("region table is empty")]
    NoRegions,
}

#[derive(Debug, Clone)]
pub struct LoadContext {
    pub input_path: PathBuf,
    pub table: RegionTable,
    pub missing_indicators: Vec<Indicator>,
    /// Present columns holding a single value; they score 50 for every region.
    pub degenerate_indicators: Vec<Indicator>,
}

pub fn run_stage1(input: &Path, id_columns: &IdColumns) -> Result<LoadContext, Stage1Error> {
    let table = read_region_table(input, id_columns)?;
    if table.is_empty() {
        return Err(Stage1Error::NoRegions);
    }

    let mut missing_indicators = Vec::new();
    let mut degenerate_indicators = Vec::new();
    for &indicator in Indicator::ordered() {
        match table.indicator(indicator) {
            None => {
                warn!(column = indicator.as_str(), "indicator column missing");
                missing_indicators.push(indicator);
            }
            Some(values) if is_constant(values) => {
                warn!(
                    column = indicator.as_str(),
                    "indicator column is constant; every region scores 50"
                );
                degenerate_indicators.push(indicator);
            }
            Some(_) => {}
        }
    }

    Ok(LoadContext {
        input_path: input.to_path_buf(),
        table,
        missing_indicators,
        degenerate_indicators,
    })
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
