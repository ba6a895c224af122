// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::CSV_EXT;
use crate::core::sanitize::sanitize_file_stem;
use crate::csv::{read_record_set, write_record_set};
use crate::data::{RecordSet, TableId};
use crate::error::{Result, StatsError};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// `<dir>/<tableId>.csv`
pub fn table_csv_path(dir: &Path, id: &TableId) -> PathBuf {
    dir.join(format!("{}.{CSV_EXT}", sanitize_file_stem(id.as_str())))
}

/// Write one table into `dir` (created if missing). Returns the path written.
pub fn write_table_csv(dir: &Path, id: &TableId, rs: &RecordSet) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = table_csv_path(dir, id);

    let mut out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    write_record_set(&mut out, rs)?;
    out.flush()?;

    logf!("Wrote {} ({} rows)", path.display(), rs.len());
    Ok(path)
}

/// Load a CSV written by [`write_table_csv`] (or any CSV with a header row).
pub fn load_record_set(path: &Path) -> Result<RecordSet> {
    if !path.exists() {
        return Err(StatsError::Path(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_record_set(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("pfr_file_{}", name));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn missing_input_is_path_error() {
        let p = tmp_dir("missing").join("nope.csv");
        assert!(matches!(load_record_set(&p), Err(StatsError::Path(_))));
    }

    #[test]
    fn write_creates_directory_and_names_file_after_table() {
        let dir = tmp_dir("write").join("nested");
        let id = TableId::new("passing").unwrap();
        let rs = RecordSet::new(vec![s!("Player")], vec![vec![s!("A")]]).unwrap();

        let path = write_table_csv(&dir, &id, &rs).unwrap();
        assert_eq!(path, dir.join("passing.csv"));
        assert_eq!(load_record_set(&path).unwrap(), rs);
    }

    #[test]
    fn file_where_directory_expected() {
        let dir = tmp_dir("not_a_dir");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("occupied");
        fs::write(&file, "x").unwrap();
        assert!(ensure_directory(&file).is_err());
    }
}
