// src/bin/scrape.rs
use clap::Parser;
use pfr_stats::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::ScrapeArgs::parse();
    log::init(args.verbose);

    // An empty page is reported through the progress log.
    cli::run_scrape(&args)?;
    Ok(())
}
