use clap::{Parser, Subcommand};

mod run;
mod scenarios;
mod validate;

#[derive(Parser, Debug)]
#[command(
    name = "reai",
    version,
    about = "Reentry Employment Accessibility Index CLI"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Run(run::RunArgs),
    Validate(validate::ValidateArgs),
    Scenarios(scenarios::ScenariosArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Run(args) => run::handle(args),
            Command::Validate(args) => validate::handle(args),
            Command::Scenarios(args) => scenarios::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
