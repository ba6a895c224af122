// src/csv.rs
//
// RecordSet <-> CSV. On disk a record set carries an extra leading column:
// an empty header cell and a 0-based row index per data row. Cell text is
// written exactly as scraped.

use std::io::{Read, Write};

use crate::data::RecordSet;
use crate::error::Result;

/// Header text of the inserted row-index column.
pub const INDEX_HEADER: &str = "";

/* ---------------- Writing ---------------- */

pub fn write_record_set<W: Write>(w: W, rs: &RecordSet) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(w);

    let header = std::iter::once(INDEX_HEADER).chain(rs.columns().iter().map(String::as_str));
    wtr.write_record(header)?;

    for (i, row) in rs.rows().iter().enumerate() {
        let ix = i.to_string();
        let record = std::iter::once(ix.as_str()).chain(row.iter().map(String::as_str));
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/* ---------------- Parsing ---------------- */

/// Read a CSV with a header row. A leading column whose header is empty is
/// taken to be the row-index column and dropped; anything else is kept as is.
pub fn read_record_set<R: Read>(r: R) -> Result<RecordSet> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(r);

    let headers = rdr.headers()?.clone();
    let skip = usize::from(headers.get(0) == Some(INDEX_HEADER));
    let columns: Vec<String> = headers.iter().skip(skip).map(str::to_owned).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().skip(skip).map(str::to_owned).collect());
    }
    logd!("CSV: read {} columns x {} rows", columns.len(), rows.len());

    RecordSet::new(columns, rows)
}
