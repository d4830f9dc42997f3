use serde::Serialize;

use crate::index::engine::ScoredTable;
use crate::model::indicators::{Component, REAI_COLUMN};
use crate::model::weights::ComponentWeights;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub weight: f64,
    #[serde(flatten)]
    pub stats: Describe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub rows: Vec<ColumnSummary>,
}

impl SummaryTable {
    pub fn row(&self, column: &str) -> Option<&ColumnSummary> {
        self.rows.iter().find(|r| r.column == column)
    }
}

pub fn summarize(scored: &ScoredTable, weights: &ComponentWeights) -> SummaryTable {
    let mut rows = Vec::with_capacity(1 + Component::ordered().len());
    rows.push(ColumnSummary {
        column: REAI_COLUMN.to_string(),
        weight: 1.0,
        stats: describe(&scored.reai),
    });
    for &component in Component::ordered() {
        rows.push(ColumnSummary {
            column: component.score_column().to_string(),
            weight: weights.get(component),
            stats: describe(scored.component(component)),
        });
    }
    SummaryTable { rows }
}

/// NaN values are skipped. std needs at least two values.
pub fn describe(values: &[f64]) -> Describe {
    let mut vals: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = vals.len();
    if n == 0 {
        return Describe {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = vals.iter().sum::<f64>() / n as f64;
    let std = if n < 2 {
        f64::NAN
    } else {
        let ss: f64 = vals.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n as f64 - 1.0)).sqrt()
    };

    Describe {
        count: n,
        mean,
        std,
        min: vals[0],
        p25: percentile(&vals, 0.25),
        p50: percentile(&vals, 0.50),
        p75: percentile(&vals, 0.75),
        max: vals[n - 1],
    }
}

pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = p * (sorted.len() as f64 - 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/summary.rs"]
mod tests;
