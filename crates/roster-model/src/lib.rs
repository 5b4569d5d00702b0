pub mod record;
pub mod stats;

pub use record::{FieldMapping, RecordField, StudentRecord};
pub use stats::RosterStats;
