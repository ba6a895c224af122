// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a scrape or a plot. All variants are fatal to the
/// invoking command; nothing is retried.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The HTTP client could not be built; no request was made.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Any failed page fetch: unreachable host, timeout, bad body, or a
    /// non-success status.
    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchFailure,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Column not found: {0:?}")]
    ColumnNotFound(String),

    #[error("Column {column:?}, row {row}: {value:?} is not a number")]
    Conversion {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Input path does not exist: {}", .0.display())]
    Path(PathBuf),

    #[error("Plot window failed: {0}")]
    Gui(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a fetch failed.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
}

impl StatsError {
    /// Status code of a fetch that got an answer other than 2xx.
    pub fn http_status(&self) -> Option<reqwest::StatusCode> {
        match self {
            StatsError::Fetch { source: FetchFailure::Status(s), .. } => Some(*s),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
