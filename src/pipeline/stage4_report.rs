use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::index::engine::{IndexEngine, ScoredTable};
use crate::index::sensitivity::SensitivityTable;
use crate::index::summary::SummaryTable;
use crate::model::weights::ComponentWeights;
use crate::pipeline::stage1_load::LoadContext;
use crate::report::ReportError;
use crate::report::findings::{KeyFindings, RegionScore, key_findings, region_score};
use crate::report::json::write_summary;
use crate::report::tables::write_summary_tsv;
use crate::report::text::render_report;

pub const SCENARIO_LEADERS: usize = 5;

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalSummary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub weights: ComponentWeights,
    pub statistics: SummaryTable,
    pub top: Vec<RegionScore>,
    pub bottom: Vec<RegionScore>,
    pub scenarios: Vec<ScenarioLeaders>,
    pub findings: KeyFindings,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub n_regions: usize,
    pub degenerate_columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioLeaders {
    pub scenario: String,
    pub top: Vec<RegionScore>,
}

pub fn run_stage4_report(
    engine: &IndexEngine,
    load: &LoadContext,
    scored: &ScoredTable,
    sensitivity: Option<&SensitivityTable>,
    out_dir: &Path,
    top_n: usize,
) -> Result<FinalSummary, Stage4Error> {
    std::fs::create_dir_all(out_dir)?;

    let statistics = engine.summary_statistics(scored);
    write_summary_tsv(&out_dir.join("summary_stats.tsv"), &statistics)?;

    let scenarios = match sensitivity {
        Some(table) => scenario_leaders(table),
        None => Vec::new(),
    };

    let summary = FinalSummary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            path: load.input_path.to_string_lossy().to_string(),
            n_regions: scored.len(),
            degenerate_columns: load
                .degenerate_indicators
                .iter()
                .map(|i| i.as_str().to_string())
                .collect(),
        },
        weights: *engine.weights(),
        statistics,
        top: scored.top(top_n).into_iter().map(|i| region_score(scored, i)).collect(),
        bottom: scored
            .bottom(top_n)
            .into_iter()
            .map(|i| region_score(scored, i))
            .collect(),
        scenarios,
        findings: key_findings(scored),
    };

    write_summary(out_dir, &summary)?;
    std::fs::write(out_dir.join("report.txt"), render_report(&summary))?;

    Ok(summary)
}

fn scenario_leaders(table: &SensitivityTable) -> Vec<ScenarioLeaders> {
    let mut out = Vec::new();
    for name in table.scenario_names() {
        let (reai, ranks) = match table.scenario(name) {
            Some(s) => (&s.reai, &s.rank),
            None => (&table.base_reai, &table.base_rank),
        };
        let top = table
            .top(name, SCENARIO_LEADERS)
            .unwrap_or_default()
            .into_iter()
            .map(|i| RegionScore {
                region_id: table.region_ids[i].clone(),
                region_name: table.region_names[i].clone(),
                reai: reai[i],
                rank: ranks[i],
            })
            .collect();
        out.push(ScenarioLeaders {
            scenario: name.to_string(),
            top,
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
