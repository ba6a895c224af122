// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific parsing: *where the ground truth lives in the HTML* and *how to
//! extract it*. Specs are pure: they take a page's HTML text and return ids or
//! record sets. Fetching, writing CSVs and progress reporting live elsewhere
//! (`scrape`, `runner`, `file`).
//!
//! ## Conventions & invariants
//! - Comments that carry a `<table` are parsed as separate fragments
//!   (`core::html::hidden_tables`) and searched alongside the live document,
//!   so a table is found the same way whether or not the site shipped it
//!   commented out. All other comments stay inert.
//! - Cell text is kept **raw** (no trimming, no number coercion).
//! - The site's leading rank column is dropped by a named convention
//!   (`config::consts::LEADING_INDEX_COLUMNS`), not by guessing.
//! - A page with no tables is an empty result; a table that breaks the
//!   `thead`/`tbody` layout is a `ParseError`.
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML snippets that mirror the live
//! layout (plain tables, comment-wrapped tables, over-headers, repeated
//! in-body header rows).
pub mod stats_page;

pub use stats_page::{parse_table, parse_table_ids};
