use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::scenarios::loader::{default_scenarios_dir, load_scenarios_from_dir};

#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Scenario directory (defaults to bundled assets/scenarios)
    #[arg(long)]
    pub(crate) dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: ScenariosCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ScenariosCommand {
    List,
    Dump(ScenariosDumpArgs),
}

#[derive(Args, Debug)]
pub struct ScenariosDumpArgs {
    /// Output directory
    #[arg(long)]
    pub(crate) out: PathBuf,
}

pub fn handle(args: ScenariosArgs) -> anyhow::Result<()> {
    let dir = args.dir.unwrap_or_else(default_scenarios_dir);
    match args.command {
        ScenariosCommand::List => list_scenarios(&dir),
        ScenariosCommand::Dump(dump) => dump_scenarios(&dir, dump),
    }
}

fn list_scenarios(dir: &std::path::Path) -> anyhow::Result<()> {
    let set = load_scenarios_from_dir(dir)?;
    println!("scenario\ttransportation\tlabor_market\tlicensing\tpolicy\tvalid");
    let base = set.base;
    println!(
        "base\t{}\t{}\t{}\t{}\t{}",
        base.transportation,
        base.labor_market,
        base.licensing,
        base.policy,
        base.validate().is_ok()
    );
    for def in &set.scenarios {
        let w = def.weights;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            def.name,
            w.transportation,
            w.labor_market,
            w.licensing,
            w.policy,
            w.validate().is_ok()
        );
    }
    Ok(())
}

fn dump_scenarios(dir: &std::path::Path, args: ScenariosDumpArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;
    let set = load_scenarios_from_dir(dir)?;
    let json = serde_json::to_string_pretty(&set)?;
    let path = args.out.join("scenarios_manifest.json");
    std::fs::write(path, json)?;
    Ok(())
}
