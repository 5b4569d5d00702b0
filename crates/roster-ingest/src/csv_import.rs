//! Header-driven CSV import.
//!
//! Columns are resolved against an explicit [`FieldMapping`] table. Parsing
//! is permissive: unmapped columns are ignored, missing mapped columns leave
//! the field at its default, short rows are tolerated.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::{FieldMapping, RecordField, StudentRecord};

use crate::error::{IngestError, Result, ensure_file};

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Import student records from a delimited file with a header row.
pub fn import_csv(path: &Path, mapping: &FieldMapping) -> Result<Vec<StudentRecord>> {
    ensure_file(path)?;
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns: Vec<Option<RecordField>> = headers
        .iter()
        .map(|header| mapping.field_for(normalize_header(header)))
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut record = StudentRecord::default();
        for (index, field) in columns.iter().enumerate() {
            let Some(field) = field else {
                continue;
            };
            if let Some(value) = row.get(index) {
                record.set_field(*field, normalize_cell(value));
            }
        }
        records.push(record);
    }
    debug!(
        path = %path.display(),
        record_count = records.len(),
        "csv import complete"
    );
    Ok(records)
}
