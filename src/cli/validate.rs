use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::input::regions::{DEFAULT_ID_COLUMN, DEFAULT_NAME_COLUMN, IdColumns};
use crate::model::indicators::Indicator;
use crate::pipeline::stage1_load::{LoadContext, run_stage1};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input region table
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub(crate) out: PathBuf,

    /// Column holding the unique region key
    #[arg(long, default_value = DEFAULT_ID_COLUMN)]
    pub(crate) id_column: String,

    /// Column holding the region display name
    #[arg(long, default_value = DEFAULT_NAME_COLUMN)]
    pub(crate) name_column: String,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let id_columns = IdColumns {
        id: args.id_column.clone(),
        name: args.name_column.clone(),
    };
    let ctx = run_stage1(&args.input, &id_columns)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    write_validate(&args.out, &ctx)?;
    if !ctx.missing_indicators.is_empty() {
        anyhow::bail!(
            "missing indicator columns: {}",
            join_indicators(&ctx.missing_indicators)
        );
    }
    Ok(())
}

fn write_validate(out_dir: &Path, ctx: &LoadContext) -> anyhow::Result<()> {
    let present: Vec<Indicator> = Indicator::ordered()
        .iter()
        .copied()
        .filter(|i| ctx.table.has_indicator(*i))
        .collect();

    let mut lines = Vec::new();
    lines.push(("input", ctx.input_path.to_string_lossy().to_string()));
    lines.push(("n_regions", ctx.table.len().to_string()));
    lines.push(("indicators_present", join_indicators(&present)));
    lines.push(("indicators_missing", join_indicators(&ctx.missing_indicators)));
    lines.push((
        "indicators_constant",
        join_indicators(&ctx.degenerate_indicators),
    ));
    let extra: Vec<&str> = ctx.table.extra.keys().map(|k| k.as_str()).collect();
    lines.push((
        "passthrough_columns",
        if extra.is_empty() {
            ".".to_string()
        } else {
            extra.join(",")
        },
    ));

    let mut buf = String::new();
    for (key, value) in lines {
        buf.push_str(key);
        buf.push('\t');
        buf.push_str(&value);
        buf.push('\n');
    }
    std::fs::write(out_dir.join("validate.tsv"), buf)?;
    Ok(())
}

fn join_indicators(indicators: &[Indicator]) -> String {
    if indicators.is_empty() {
        return ".".to_string();
    }
    indicators
        .iter()
        .map(|i| i.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
