// src/lib.rs
//! Scrape pro-football-reference stat tables into CSV files and plot any two
//! columns of a scraped table.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod plot;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

#[cfg(feature = "gui")]
pub mod gui;

pub use data::{RecordSet, RecordView, TableId};
pub use error::{Result, StatsError};
