use anyhow::{Context, Result};
use clap::Parser;
use packlist::config::Config;
use packlist::logging::init_tracing;
use packlist::store::SortMode;
use std::path::PathBuf;
use std::process::ExitCode;

/// Plan what to pack for a trip, right in the terminal.
#[derive(Debug, Parser)]
#[command(name = "packlist", version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial sort order of the list
    #[arg(long, value_enum, value_name = "MODE")]
    sort: Option<SortMode>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Exiting with error");
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(sort) = cli.sort {
        config.defaults.sort = sort;
    }

    packlist::ui::run(&config).context("Terminal UI failed")
}
