pub mod csv_import;
pub mod error;
pub mod json;
pub mod paths;
pub mod xml;

pub use csv_import::import_csv;
pub use error::{IngestError, Result};
pub use json::{export_json, import_json};
pub use paths::{stamped_path, stamped_path_with_date};
pub use xml::{export_xml, import_xml};
