// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::ScrapeOptions,
    core::net::PageSource,
    error::Result,
    file::{ensure_directory, write_table_csv},
    progress::Progress,
    scrape::Scraper,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Scrape every table on the configured page into `<output_dir>/<id>.csv`.
/// Tables are fetched and written one at a time, in discovery order; the
/// first error stops the run.
/// `progress` can be None (no updates) or Some(&mut impl Progress).
pub fn run_scrape<S: PageSource>(
    opts: &ScrapeOptions,
    source: S,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let scraper = Scraper::new(opts.url(), source);
    let ids = scraper.discover_table_ids()?;

    ensure_directory(&opts.output_dir)?;

    if ids.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("No tables found on {}", scraper.url()));
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let mut written = Vec::with_capacity(ids.len());
    for id in &ids {
        let rs = scraper
            .scrape_table(id)
            .inspect_err(|e| loge!("Scrape: table {id} failed: {e}"))?;
        let path = write_table_csv(&opts.output_dir, id, &rs)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(id, &path);
        }
        written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary { files_written: written })
}
