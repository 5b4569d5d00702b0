use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use roster_ingest::{IngestError, export_json, import_json};
use roster_model::StudentRecord;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn record(class_name: &str, first_name: &str, last_name: &str, email: &str) -> StudentRecord {
    StudentRecord {
        class_name: class_name.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn imports_wire_field_names() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "schueler.json",
        r#"[{"Klasse":"10a","Vorname":"Anna","Nachname":"Muller","Email":""}]"#,
    );
    let records = import_json(&path).expect("import json");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].class_name, "10a");
    assert_eq!(records[0].first_name, "Anna");
}

#[test]
fn missing_wire_fields_default() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "partial.json", r#"[{"Vorname":"Anna"}]"#);
    let records = import_json(&path).expect("import json");
    assert_eq!(records[0].first_name, "Anna");
    assert_eq!(records[0].class_name, "");
    assert_eq!(records[0].email, "");
}

#[test]
fn empty_array_yields_no_records() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "empty.json", "[]");
    let records = import_json(&path).expect("import json");
    assert!(records.is_empty());
}

#[test]
fn round_trips_through_export_import_export() {
    let dir = TempDir::new().expect("temp dir");
    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");
    let records = vec![
        record("10a", "Anna", "Muller", "anna.muller@schule.de"),
        record("10a", "Anna", "Muller", "anna.muller2@schule.de"),
        record("", "", "", ""),
    ];
    export_json(&records, &first_path).expect("first export");
    let imported = import_json(&first_path).expect("import own output");
    assert_eq!(imported, records);
    export_json(&imported, &second_path).expect("second export");
    let reimported = import_json(&second_path).expect("reimport");
    assert_eq!(reimported, records);
}

#[test]
fn export_is_indented() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pretty.json");
    export_json(&[record("10a", "Anna", "Muller", "")], &path).expect("export json");
    let contents = fs::read_to_string(&path).expect("read output");
    assert!(contents.contains("\n  {"));
    assert!(contents.contains("\"Klasse\": \"10a\""));
}

#[test]
fn non_array_content_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "object.json", r#"{"Klasse":"10a"}"#);
    let error = import_json(&path).expect_err("object is not an array");
    assert!(matches!(error, IngestError::Json { .. }));
}

#[test]
fn malformed_content_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "broken.json", "[{\"Klasse\":");
    let error = import_json(&path).expect_err("malformed json");
    assert!(matches!(error, IngestError::Json { .. }));
}

#[test]
fn missing_file_is_a_file_not_found_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = import_json(&dir.path().join("nope.json")).expect_err("missing file");
    assert!(matches!(error, IngestError::FileNotFound { .. }));
}
