//! XML import and export.
//!
//! Canonical document shape, both directions: a root element containing
//! repeated `row` children whose child elements carry the wire field names
//! (`Klasse`, `Vorname`, `Nachname`, `Email`). Import accepts any root
//! element name and skips unrecognized tags; export always writes `rows`.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use roster_model::{FieldMapping, RecordField, StudentRecord};

use crate::error::{IngestError, Result, ensure_file};

/// Root element written by [`export_xml`].
pub const XML_ROOT: &str = "rows";

/// Per-record element name, both directions.
pub const XML_ROW: &str = "row";

/// Import student records from an XML document of `row` elements.
pub fn import_xml(path: &Path) -> Result<Vec<StudentRecord>> {
    ensure_file(path)?;
    let mapping = FieldMapping::student();
    let mut reader = Reader::from_file(path).map_err(|error| xml_error(path, error.into()))?;
    reader.config_mut().trim_text(true);
    let records = read_document(&mut reader, &mapping, path)?;
    debug!(
        path = %path.display(),
        record_count = records.len(),
        "xml import complete"
    );
    Ok(records)
}

/// Serialize the full record list as an XML document.
pub fn export_xml(records: &[StudentRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut xml = Writer::new_with_indent(BufWriter::new(file), b' ', 2);
    write_document(&mut xml, records).map_err(|error| xml_error(path, error))?;
    let mut inner = xml.into_inner();
    inner.flush().map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        record_count = records.len(),
        "xml export complete"
    );
    Ok(())
}

fn read_document<R: BufRead>(
    reader: &mut Reader<R>,
    mapping: &FieldMapping,
    path: &Path,
) -> Result<Vec<StudentRecord>> {
    let mut buf = Vec::new();
    // Advance to the document root, whatever its name.
    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|error| xml_error(path, error))?
        {
            Event::Start(_) => break,
            Event::Eof => return Err(truncated(path)),
            _ => {}
        }
        buf.clear();
    }

    let mut records = Vec::new();
    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|error| xml_error(path, error))?;
        match event {
            Event::Start(start) => {
                if start.name().as_ref() == XML_ROW.as_bytes() {
                    let row = records.len() + 1;
                    records.push(read_row(reader, mapping, path, row)?);
                } else {
                    // Foreign element between rows: consume its whole subtree.
                    let skip = start.to_owned();
                    let mut skip_buf = Vec::new();
                    reader
                        .read_to_end_into(skip.name(), &mut skip_buf)
                        .map_err(|error| xml_error(path, error))?;
                }
            }
            Event::Empty(start) if start.name().as_ref() == XML_ROW.as_bytes() => {
                records.push(StudentRecord::default());
            }
            Event::End(_) => break,
            Event::Eof => return Err(truncated(path)),
            _ => {}
        }
    }
    Ok(records)
}

fn read_row<R: BufRead>(
    reader: &mut Reader<R>,
    mapping: &FieldMapping,
    path: &Path,
    row: usize,
) -> Result<StudentRecord> {
    let mut record = StudentRecord::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|error| xml_error(path, error))?;
        match event {
            Event::Start(start) => {
                let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                let value = read_element_text(reader, path, row, &tag)?;
                // Unrecognized tags are consumed above, then dropped here.
                if let Some(field) = mapping.field_for(&tag) {
                    record.set_field(field, value);
                }
            }
            Event::Empty(start) => {
                let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                if let Some(field) = mapping.field_for(&tag) {
                    record.set_field(field, String::new());
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(truncated(path)),
            _ => {}
        }
    }
    Ok(record)
}

fn read_element_text<R: BufRead>(
    reader: &mut Reader<R>,
    path: &Path,
    row: usize,
    tag: &str,
) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|error| xml_error(path, error))?;
        match event {
            Event::Text(content) => {
                let decoded = content
                    .decode()
                    .map_err(|error| xml_error(path, error.into()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(reference) => {
                let entity = format!(
                    "&{};",
                    reference
                        .decode()
                        .map_err(|error| xml_error(path, error.into()))?
                );
                let resolved =
                    unescape(&entity).map_err(|error| xml_error(path, error.into()))?;
                text.push_str(&resolved);
            }
            Event::CData(content) => {
                text.push_str(&String::from_utf8_lossy(content.as_ref()));
            }
            Event::Start(nested) | Event::Empty(nested) => {
                // Element content inside a field tag is not convertible text.
                return Err(IngestError::FieldConversion {
                    path: path.to_path_buf(),
                    row,
                    field: tag.to_string(),
                    value: format!("<{}>", String::from_utf8_lossy(nested.name().as_ref())),
                });
            }
            Event::End(_) => break,
            Event::Eof => return Err(truncated(path)),
            _ => {}
        }
    }
    Ok(text)
}

fn write_document<W: Write>(
    xml: &mut Writer<W>,
    records: &[StudentRecord],
) -> std::result::Result<(), quick_xml::Error> {
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new(XML_ROOT)))?;
    for record in records {
        xml.write_event(Event::Start(BytesStart::new(XML_ROW)))?;
        for field in RecordField::ALL {
            write_text_element(xml, field.wire_name(), record.field(field))?;
        }
        xml.write_event(Event::End(BytesEnd::new(XML_ROW)))?;
    }
    xml.write_event(Event::End(BytesEnd::new(XML_ROOT)))?;
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> std::result::Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn xml_error(path: &Path, source: quick_xml::Error) -> IngestError {
    IngestError::Xml {
        path: path.to_path_buf(),
        source,
    }
}

fn truncated(path: &Path) -> IngestError {
    xml_error(
        path,
        quick_xml::Error::from(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "unexpected end of document",
        )),
    )
}
