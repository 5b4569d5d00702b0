use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single student row as imported from CSV, XML, or JSON sources.
///
/// Serde names follow the wire format of the source files (`Klasse`,
/// `Vorname`, `Nachname`, `Email`). Identity is positional: records carry no
/// key, and input order is significant for email assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Klasse", default)]
    pub class_name: String,
    #[serde(rename = "Vorname", default)]
    pub first_name: String,
    #[serde(rename = "Nachname", default)]
    pub last_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
}

impl StudentRecord {
    pub fn new(
        class_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: String::new(),
        }
    }

    /// Read a field through the mapping-table indirection.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::ClassName => &self.class_name,
            RecordField::FirstName => &self.first_name,
            RecordField::LastName => &self.last_name,
            RecordField::Email => &self.email,
        }
    }

    /// Write a field through the mapping-table indirection.
    pub fn set_field(&mut self, field: RecordField, value: String) {
        match field {
            RecordField::ClassName => self.class_name = value,
            RecordField::FirstName => self.first_name = value,
            RecordField::LastName => self.last_name = value,
            RecordField::Email => self.email = value,
        }
    }
}

/// Target attribute of a mapped source column or element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    ClassName,
    FirstName,
    LastName,
    Email,
}

impl RecordField {
    /// All fields in canonical export order.
    pub const ALL: [RecordField; 4] = [
        RecordField::ClassName,
        RecordField::FirstName,
        RecordField::LastName,
        RecordField::Email,
    ];

    /// The column header / element tag / JSON key used in the wire formats.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RecordField::ClassName => "Klasse",
            RecordField::FirstName => "Vorname",
            RecordField::LastName => "Nachname",
            RecordField::Email => "Email",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for RecordField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("KLASSE") {
            Ok(RecordField::ClassName)
        } else if trimmed.eq_ignore_ascii_case("VORNAME") {
            Ok(RecordField::FirstName)
        } else if trimmed.eq_ignore_ascii_case("NACHNAME") {
            Ok(RecordField::LastName)
        } else if trimmed.eq_ignore_ascii_case("EMAIL") {
            Ok(RecordField::Email)
        } else {
            Err(format!("unknown record field: {}", s))
        }
    }
}

/// Explicit (source name, target field) mapping table.
///
/// Replaces runtime-reflected schema discovery with a per-entity table
/// evaluated at definition time. Unlisted source names are ignored by
/// importers; unlisted fields keep their defaults.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    pairs: Vec<(String, RecordField)>,
}

impl FieldMapping {
    pub fn new(pairs: Vec<(String, RecordField)>) -> Self {
        Self { pairs }
    }

    /// The mapping used by student source files.
    pub fn student() -> Self {
        Self::new(
            RecordField::ALL
                .iter()
                .map(|field| (field.wire_name().to_string(), *field))
                .collect(),
        )
    }

    /// Resolve a source column/tag name to its target field, if mapped.
    /// Source names match case-insensitively after trimming.
    pub fn field_for(&self, source_name: &str) -> Option<RecordField> {
        let trimmed = source_name.trim();
        self.pairs
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
            .map(|(_, field)| *field)
    }

    /// Reverse lookup: the source name a field is exported under.
    pub fn source_name(&self, field: RecordField) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(_, mapped)| *mapped == field)
            .map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::student()
    }
}
