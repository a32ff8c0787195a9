use anyhow::Context;
use clap::Parser;
use ghcn_seasons::cli::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref()).context("failed to set up logging")?;

    run(&cli).with_context(|| format!("failed to plot station {}", cli.station_id))
}
