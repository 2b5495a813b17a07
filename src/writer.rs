//! CSV serialization of filtered records
//!
//! The header row is derived from the key set of the FIRST record, in that
//! record's field order; every row emits those columns in the same order.
//! Records with a different key set than the first are handled loosely:
//! extra keys are silently dropped and missing keys produce empty cells.
//! This is a documented limitation carried over from the source dataset's
//! uniform-shape assumption, preserved deliberately rather than fixed.

use crate::error::{Error, Result};
use crate::types::TimeZoneRecord;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Write records to `<directory>/<file_name>` as UTF-8 CSV.
///
/// An empty input is a no-op by contract, not an error: nothing is written
/// and `Ok(None)` is returned. Otherwise the file is created or
/// overwritten and its path returned.
///
/// The write is all-or-nothing: rows are serialized to an in-memory buffer
/// first and the buffer lands on disk in a single write, so a
/// serialization failure never leaves a partial file behind.
pub fn write_csv(
    records: &[TimeZoneRecord],
    directory: &Path,
    file_name: &str,
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        tracing::info!("nothing to write, skipping CSV output");
        return Ok(None);
    }

    let header: Vec<&str> = records[0].keys().collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header)?;
    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|key| render_cell(record.get(key)))
            .collect();
        writer.write_record(&row)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| Error::Io(std::io::Error::new(e.error().kind(), e.to_string())))?;

    let path = directory.join(file_name);
    fs::write(&path, buffer)?;

    tracing::info!(path = %path.display(), rows = records.len(), "output file written");
    Ok(Some(path))
}

/// Render one JSON value as a CSV cell.
///
/// Strings are written raw (no JSON quoting); every other value keeps its
/// compact JSON form, so `-12`, `false` and `["Etc/GMT+12"]` appear
/// literally. A missing key renders as an empty cell.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
