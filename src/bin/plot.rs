// src/bin/plot.rs
use pfr_stats::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::PlotArgs::parse_with_aliases();
    log::init(args.verbose);

    cli::run_plot(&args)?;
    Ok(())
}
