use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::{info, warn};

use crate::index::engine::IndexEngine;
use crate::input::regions::{DEFAULT_ID_COLUMN, DEFAULT_NAME_COLUMN, IdColumns};
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_index::run_stage2_index;
use crate::pipeline::stage3_sensitivity::run_stage3_sensitivity;
use crate::pipeline::stage4_report::run_stage4_report;
use crate::scenarios::defs::ScenarioSet;
use crate::scenarios::loader::{default_scenarios_dir, load_scenarios_from_dir, load_weights_file};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input region table (CSV, or TSV with a .tsv extension; .gz accepted)
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub(crate) out: PathBuf,

    /// Scenario directory of TOML files (defaults to bundled assets/scenarios)
    #[arg(long)]
    pub(crate) scenarios: Option<PathBuf>,

    /// TOML file with a [weights] table overriding the base weights
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,

    /// Column holding the unique region key
    #[arg(long, default_value = DEFAULT_ID_COLUMN)]
    pub(crate) id_column: String,

    /// Column holding the region display name
    #[arg(long, default_value = DEFAULT_NAME_COLUMN)]
    pub(crate) name_column: String,

    /// Number of regions listed at each end of the ranking
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,

    /// Skip the alternative-weighting comparison
    #[arg(long, default_value_t = false)]
    pub(crate) skip_sensitivity: bool,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let scenario_set = resolve_scenarios(&args)?;
    let base = match &args.weights {
        Some(path) => load_weights_file(path)?,
        None => scenario_set.base,
    };
    let engine = IndexEngine::new(base)?;
    info!(
        transportation = base.transportation,
        labor_market = base.labor_market,
        licensing = base.licensing,
        policy = base.policy,
        "component weights"
    );

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let id_columns = IdColumns {
        id: args.id_column.clone(),
        name: args.name_column.clone(),
    };
    let load = run_stage1(&args.input, &id_columns)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        regions = load.table.len(),
        missing = load.missing_indicators.len(),
        degenerate = load.degenerate_indicators.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_index", "starting stage");
    let scored = run_stage2_index(&engine, &load, &args.out)?;
    info!(
        stage = "stage2_index",
        elapsed_ms = start.elapsed().as_millis(),
        regions = scored.len(),
        "finished stage"
    );

    let sensitivity = if args.skip_sensitivity {
        None
    } else {
        let start = Instant::now();
        info!(stage = "stage3_sensitivity", "starting stage");
        let table = run_stage3_sensitivity(&engine, &scored, &scenario_set, &args.out)?;
        info!(
            stage = "stage3_sensitivity",
            elapsed_ms = start.elapsed().as_millis(),
            scenarios = table.scenarios.len(),
            "finished stage"
        );
        Some(table)
    };

    let start = Instant::now();
    info!(stage = "stage4_report", "starting stage");
    let summary = run_stage4_report(
        &engine,
        &load,
        &scored,
        sensitivity.as_ref(),
        &args.out,
        args.top,
    )?;
    info!(
        stage = "stage4_report",
        elapsed_ms = start.elapsed().as_millis(),
        mean_reai = summary.findings.mean_reai,
        "finished stage"
    );
    Ok(())
}

fn resolve_scenarios(args: &RunArgs) -> anyhow::Result<ScenarioSet> {
    match &args.scenarios {
        Some(dir) => Ok(load_scenarios_from_dir(dir)?),
        None => bundled_or_builtin(&default_scenarios_dir()),
    }
}

/// Only a missing directory falls back to the built-in scenarios.
pub(crate) fn bundled_or_builtin(dir: &Path) -> anyhow::Result<ScenarioSet> {
    if !dir.is_dir() {
        warn!(
            dir = %dir.display(),
            "bundled scenarios not found; using built-in defaults"
        );
        return Ok(ScenarioSet::default());
    }
    Ok(load_scenarios_from_dir(dir)?)
}
