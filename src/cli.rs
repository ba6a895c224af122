// src/cli.rs
//
// Argument parsing for the two binaries and the glue that turns parsed
// arguments into a run.
//
//   pfr_scrape -y 2020 -s passing -o output
//   pfr_plot -c1 Yds -c2 TD -i output/passing.csv -l 50

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;

use crate::{
    config::{
        consts::{DEFAULT_HOST, DEFAULT_OUT_DIR, DEFAULT_PLOT_LIMIT, DEFAULT_YEAR},
        options::{PlotOptions, ScrapeOptions},
    },
    core::net::HttpSource,
    data::TableId,
    error::Result,
    progress::Progress,
    runner::{self, RunSummary},
};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pfr_scrape", version)]
#[command(about = "Scrape every stat table on a season page into one CSV per table", long_about = None)]
pub struct ScrapeArgs {
    /// Season year
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u32,

    /// Stat page name, e.g. passing, rushing, receiving
    #[arg(short, long)]
    pub stat: String,

    /// Directory for the CSV files (created if missing)
    #[arg(short, long = "output_dir", default_value = DEFAULT_OUT_DIR)]
    pub output_dir: PathBuf,

    /// Site host name
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pfr_plot", version)]
#[command(about = "Scatter plot two columns of a scraped CSV, labelled by player", long_about = None)]
pub struct PlotArgs {
    /// Column for the x axis (also -c1)
    #[arg(long = "col1_name")]
    pub col1_name: String,

    /// Column for the y axis (also -c2)
    #[arg(long = "col2_name")]
    pub col2_name: String,

    /// CSV written by pfr_scrape
    #[arg(short, long = "input_csv")]
    pub input_csv: PathBuf,

    /// Plot at most this many leading rows
    #[arg(short, long, default_value_t = DEFAULT_PLOT_LIMIT)]
    pub limit: usize,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&ScrapeArgs> for ScrapeOptions {
    fn from(a: &ScrapeArgs) -> Self {
        Self {
            host: a.host.clone(),
            year: a.year,
            stat: a.stat.clone(),
            output_dir: a.output_dir.clone(),
        }
    }
}

impl From<&PlotArgs> for PlotOptions {
    fn from(a: &PlotArgs) -> Self {
        Self {
            col1: a.col1_name.clone(),
            col2: a.col2_name.clone(),
            input_csv: a.input_csv.clone(),
            limit: a.limit,
        }
    }
}

/// Rewrite the two-character short flags `-c1` / `-c2` (also `-c1=Yds`) to
/// their long forms; clap only knows single-character shorts.
pub fn expand_short_aliases<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    const ALIASES: [(&str, &str); 2] = [("-c1", "--col1_name"), ("-c2", "--col2_name")];

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else { return arg };
            for (short, long) in ALIASES {
                if text == short {
                    return OsString::from(long);
                }
                if let Some(value) = text.strip_prefix(short).and_then(|r| r.strip_prefix('=')) {
                    return OsString::from(format!("{long}={value}"));
                }
            }
            arg
        })
        .collect()
}

impl PlotArgs {
    /// Parse from the process arguments, accepting `-c1` / `-c2`.
    pub fn parse_with_aliases() -> Self {
        Self::parse_from(expand_short_aliases(std::env::args_os()))
    }
}

/// Prints each written file on stdout, one per line.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("Scrape: {total} table(s) to write");
    }
    fn log(&mut self, msg: &str) {
        logw!("{msg}");
    }
    fn item_done(&mut self, id: &TableId, path: &Path) {
        self.done += 1;
        logd!("Scrape: {id} done ({}/{})", self.done, self.total);
        println!("{}", path.display());
    }
    fn finish(&mut self) {
        logf!("Scrape: wrote {} file(s)", self.done);
    }
}

pub fn run_scrape(args: &ScrapeArgs) -> Result<RunSummary> {
    let opts = ScrapeOptions::from(args);
    let source = HttpSource::new()?;
    let mut progress = CliProgress::default();
    runner::run_scrape(&opts, source, Some(&mut progress))
}

/// Load the CSV and open the plot window.
#[cfg(feature = "gui")]
pub fn run_plot(args: &PlotArgs) -> Result<()> {
    let opts = PlotOptions::from(args);
    let rs = crate::file::load_record_set(&opts.input_csv)?;
    crate::plot::render(&rs, &opts.col1, &opts.col2, opts.limit)
}
