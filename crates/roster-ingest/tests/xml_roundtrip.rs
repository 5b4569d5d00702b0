use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use roster_ingest::{IngestError, export_xml, import_xml};
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
fn imports_rows_by_tag_name() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "schueler.xml",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<root>
  <row>
    <Klasse>10a</Klasse>
    <Nachname>Muller</Nachname>
    <Vorname>Anna</Vorname>
  </row>
  <row>
    <Klasse>10b</Klasse>
    <Nachname>Weber</Nachname>
    <Vorname>Ben</Vorname>
  </row>
</root>
"#,
    );
    let records = import_xml(&path).expect("import xml");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].class_name, "10a");
    assert_eq!(records[0].first_name, "Anna");
    assert_eq!(records[0].last_name, "Muller");
    assert_eq!(records[1].last_name, "Weber");
}

#[test]
fn ignores_unrecognized_tags() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "extra.xml",
        "<root><row><Klasse>10a</Klasse><Telefon>12345</Telefon>\
         <Vorname>Anna</Vorname></row></root>",
    );
    let records = import_xml(&path).expect("import xml");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].class_name, "10a");
    assert_eq!(records[0].first_name, "Anna");
    assert_eq!(records[0].last_name, "");
}

#[test]
fn empty_row_element_yields_default_record() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "empty_row.xml", "<root><row/></root>");
    let records = import_xml(&path).expect("import xml");
    assert_eq!(records, vec![StudentRecord::default()]);
}

#[test]
fn decodes_escaped_text() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "escaped.xml",
        "<root><row><Nachname>M&amp;M</Nachname></row></root>",
    );
    let records = import_xml(&path).expect("import xml");
    assert_eq!(records[0].last_name, "M&M");
}

#[test]
fn round_trips_own_output() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("roundtrip.xml");
    let records = vec![
        record("10a", "Anna", "Muller", "anna.muller@schule.de"),
        record("10b", "Jo-Ann", "O'Brien", "joann.obrien@schule.de"),
        record("", "", "", ""),
    ];
    export_xml(&records, &path).expect("export xml");
    let round = import_xml(&path).expect("import own output");
    assert_eq!(round, records);
}

#[test]
fn export_writes_declaration_and_rows_root() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("shape.xml");
    export_xml(&[record("10a", "Anna", "Muller", "")], &path).expect("export xml");
    let contents = fs::read_to_string(&path).expect("read output");
    assert!(contents.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(contents.contains("<rows>"));
    assert!(contents.contains("<row>"));
    assert!(contents.contains("<Klasse>10a</Klasse>"));
}

#[test]
fn nested_element_in_field_is_a_conversion_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "nested.xml",
        "<root><row><Nachname><b>Muller</b></Nachname></row></root>",
    );
    let error = import_xml(&path).expect_err("nested element");
    match error {
        IngestError::FieldConversion { row, field, .. } => {
            assert_eq!(row, 1);
            assert_eq!(field, "Nachname");
        }
        other => panic!("expected field conversion error, got {other:?}"),
    }
}

#[test]
fn mismatched_end_tag_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "mismatched.xml",
        "<root><row><Klasse>10a</Nachname></row></root>",
    );
    let error = import_xml(&path).expect_err("mismatched tags");
    assert!(matches!(error, IngestError::Xml { .. }));
}

#[test]
fn truncated_document_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "truncated.xml", "<root><row><Klasse>10a</Klasse>");
    let error = import_xml(&path).expect_err("truncated document");
    assert!(matches!(error, IngestError::Xml { .. }));
}

#[test]
fn missing_file_is_a_file_not_found_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = import_xml(&dir.path().join("nope.xml")).expect_err("missing file");
    assert!(matches!(error, IngestError::FileNotFound { .. }));
}
