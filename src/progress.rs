// src/progress.rs
use std::path::Path;

use crate::data::TableId;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the table ids are known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one table has been written.
    fn item_done(&mut self, _id: &TableId, _path: &Path) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}
