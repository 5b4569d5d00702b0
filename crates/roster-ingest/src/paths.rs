//! Output path naming.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

/// Derive an export path from a source path by inserting the current local
/// date (`_YYYYMMDD`) between the file stem and its extension, so exports
/// never overwrite the file they were imported from.
pub fn stamped_path(path: &Path) -> PathBuf {
    stamped_path_with_date(path, Local::now().date_naive())
}

/// [`stamped_path`] with an explicit date.
pub fn stamped_path_with_date(path: &Path, date: NaiveDate) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("export");
    let stamp = date.format("%Y%m%d");
    let file_name = match path.extension().and_then(|value| value.to_str()) {
        Some(extension) => format!("{stem}_{stamp}.{extension}"),
        None => format!("{stem}_{stamp}"),
    };
    path.with_file_name(file_name)
}
