// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub host: String,
    pub year: u32,
    pub stat: String,
    pub output_dir: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            host: s!(DEFAULT_HOST),
            year: DEFAULT_YEAR,
            stat: s!(),
            output_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ScrapeOptions {
    pub fn url(&self) -> String {
        crate::scrape::stats_url(&self.host, self.year, &self.stat)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotOptions {
    pub col1: String,
    pub col2: String,
    pub input_csv: PathBuf,
    pub limit: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            col1: s!(),
            col2: s!(),
            input_csv: PathBuf::new(),
            limit: DEFAULT_PLOT_LIMIT,
        }
    }
}

/// Tuning for the label declutter pass. Expansion factors scale a box about
/// its centre before overlap tests; forces scale each push.
#[derive(Clone, Debug, PartialEq)]
pub struct DeclutterParams {
    pub force_text: f64,
    pub force_points: f64,
    pub expand_text: (f64, f64),
    pub expand_points: (f64, f64),
    pub max_iterations: usize,
    pub precision: f64,
}

impl Default for DeclutterParams {
    fn default() -> Self {
        Self {
            force_text: FORCE_TEXT,
            force_points: FORCE_POINTS,
            expand_text: EXPAND_TEXT,
            expand_points: EXPAND_POINTS,
            max_iterations: DECLUTTER_MAX_ITERATIONS,
            precision: DECLUTTER_PRECISION_PX,
        }
    }
}
