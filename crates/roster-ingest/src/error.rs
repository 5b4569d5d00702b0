//! Error types for roster import and export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all import/export operations.
///
/// Parse errors surface the whole failure: no operation returns a partial
/// record list. Zero records is not an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Input path does not exist or is not a regular file.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be read or written.
    #[error("io error on {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV structure.
    #[error("malformed csv in {path}: {source}")]
    Csv {
        /// The file being parsed.
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed XML structure.
    #[error("malformed xml in {path}: {source}")]
    Xml {
        /// The file being parsed.
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// Content is not a JSON array of records.
    #[error("malformed json in {path}: {source}")]
    Json {
        /// The file being parsed.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An element value cannot be converted to the target field.
    #[error("row {row} in {path}: value {value:?} cannot be converted for field {field}")]
    FieldConversion {
        /// The file being parsed.
        path: PathBuf,
        /// One-based record index within the file.
        row: usize,
        /// Wire name of the field being populated.
        field: String,
        /// Offending content.
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Reject paths that do not point at a readable regular file.
pub(crate) fn ensure_file(path: &std::path::Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
