//! JSON import and export: an array of objects with the wire field names.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use roster_model::StudentRecord;

use crate::error::{IngestError, Result, ensure_file};

/// Import student records from a JSON array of objects.
///
/// Content that is not a valid JSON array matching the record shape fails
/// with [`IngestError::Json`]; nothing is partially imported.
pub fn import_json(path: &Path) -> Result<Vec<StudentRecord>> {
    ensure_file(path)?;
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<StudentRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        record_count = records.len(),
        "json import complete"
    );
    Ok(records)
}

/// Serialize the full record list as an indented JSON array.
pub fn export_json(records: &[StudentRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        record_count = records.len(),
        "json export complete"
    );
    Ok(())
}
