use serde::Serialize;

use crate::index::engine::ScoredTable;
use crate::index::summary::describe;
use crate::model::indicators::{Component, Indicator};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionScore {
    pub region_id: String,
    pub region_name: String,
    pub reai: f64,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMean {
    pub component: String,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correlation {
    pub indicator: String,
    pub pearson_r: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyFindings {
    pub mean_reai: f64,
    pub std_reai: f64,
    pub min_reai: f64,
    pub max_reai: f64,
    pub highest: Option<RegionScore>,
    pub lowest: Option<RegionScore>,
    pub component_means: Vec<ComponentMean>,
    pub correlations: Vec<Correlation>,
}

const CORRELATED_INDICATORS: [Indicator; 2] = [Indicator::UnemploymentRate, Indicator::PovertyRate];

pub fn key_findings(scored: &ScoredTable) -> KeyFindings {
    let stats = describe(&scored.reai);

    let component_means = Component::ordered()
        .iter()
        .map(|c| ComponentMean {
            component: c.as_str().to_string(),
            mean: describe(scored.component(*c)).mean,
        })
        .collect();

    let correlations = CORRELATED_INDICATORS
        .iter()
        .map(|ind| Correlation {
            indicator: ind.as_str().to_string(),
            pearson_r: scored
                .regions
                .indicator(*ind)
                .map(|values| pearson(&scored.reai, values))
                .unwrap_or(f64::NAN),
        })
        .collect();

    KeyFindings {
        mean_reai: stats.mean,
        std_reai: stats.std,
        min_reai: stats.min,
        max_reai: stats.max,
        highest: extreme(scored, |candidate, best| candidate > best),
        lowest: extreme(scored, |candidate, best| candidate < best),
        component_means,
        correlations,
    }
}

pub fn region_score(scored: &ScoredTable, idx: usize) -> RegionScore {
    RegionScore {
        region_id: scored.regions.region_ids[idx].clone(),
        region_name: scored.regions.region_names[idx].clone(),
        reai: scored.reai[idx],
        rank: scored.reai_rank[idx],
    }
}

fn extreme(scored: &ScoredTable, better: impl Fn(f64, f64) -> bool) -> Option<RegionScore> {
    let mut best: Option<usize> = None;
    for (idx, value) in scored.reai.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some(b) if !better(*value, scored.reai[b]) => {}
            _ => best = Some(idx),
        }
    }
    best.map(|idx| region_score(scored, idx))
}

pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/findings.rs"]
mod tests;
