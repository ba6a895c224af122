// src/data.rs
//
// In-memory tables.
//
// - TableId:    non-empty identifier of one table on a stats page.
// - RecordSet:  ordered column names + rows of raw cell text aligned to them.
//               Cells stay text; numbers are parsed only where a caller needs
//               them (see plot::prepare).
// - RecordView: borrowed window over the leading rows of a RecordSet.

use std::collections::HashSet;
use std::fmt;

use crate::core::sanitize::strip_quotes;
use crate::error::{Result, StatsError};

/// Identifier of one table within a page's content region.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(String);

impl TableId {
    /// Strip quote characters; `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let id = strip_quotes(raw);
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableId {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Make header names unique in order of appearance: the second `Yds` becomes
/// `Yds.1`, the third `Yds.2`, and so on.
pub fn unique_columns(names: Vec<String>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.clone();
        let mut n = 0usize;
        while used.contains(&candidate) {
            n += 1;
            candidate = format!("{name}.{n}");
        }
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

/// A scraped (or re-loaded) table. Column names are unique and every row has
/// exactly one cell per column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordSet {
    /// Build from header names and rows. Duplicate names are renamed via
    /// [`unique_columns`]; a row whose width differs from the header is a
    /// `ParseError`.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let columns = unique_columns(columns);
        if let Some((ix, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns.len()) {
            return Err(StatsError::Parse(format!(
                "row {ix} has {} cells, expected {}",
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] { &self.columns }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    /// Number of rows.
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`column_index`](Self::column_index) but a missing column is an error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| StatsError::ColumnNotFound(s!(name)))
    }

    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.rows.get(i).map(|r| r.as_slice())
    }

    /// Cell text by row position and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let ci = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(ci)).map(|s| s.as_str())
    }

    /// The first `min(len, limit)` rows, in order.
    pub fn head(&self, limit: usize) -> RecordView<'_> {
        let n = self.rows.len().min(limit);
        RecordView { rows: &self.rows[..n] }
    }
}

/// Zero-copy window over a RecordSet.
#[derive(Clone, Copy, Debug)]
pub struct RecordView<'a> {
    rows: &'a [Vec<String>],
}

impl<'a> RecordView<'a> {
    /// Number of rows in the window.
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Borrow a single row (no cloning).
    pub fn row(&self, i: usize) -> Option<&'a [String]> {
        self.rows.get(i).map(|r| r.as_slice())
    }

    /// Cells of one column, top to bottom.
    pub fn column_values(self, ci: usize) -> impl Iterator<Item = &'a str> {
        self.rows.iter().map(move |r| r.get(ci).map(|s| s.as_str()).unwrap_or(""))
    }
}
