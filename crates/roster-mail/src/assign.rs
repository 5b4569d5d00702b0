//! Email assignment for student rosters.
//!
//! Addresses are derived from the student's name and de-duplicated against
//! every record processed earlier in the same pass. Input order decides which
//! record gets the bare address: later records with the same normalized name
//! receive a numeric suffix (`anna.muller@schule.de`, `anna.muller2@...`,
//! `anna.muller3@...`).

use std::collections::BTreeMap;

use tracing::debug;

use roster_model::StudentRecord;

/// Domain appended to every generated address.
pub const EMAIL_DOMAIN: &str = "schule.de";

/// Assign a unique email address to every record, in input order.
///
/// The occurrence registry is local to one call: re-running the pass on the
/// same input reproduces the same addresses.
pub fn assign_emails(records: &mut [StudentRecord]) {
    let mut registry: BTreeMap<String, u32> = BTreeMap::new();
    for record in records.iter_mut() {
        let base = sanitized_base(&record.first_name, &record.last_name);
        if base.chars().all(|ch| ch == '.') {
            // Degenerate but defined: names with no ASCII letters or digits
            // collapse to ".@schule.de", ".2@schule.de", ...
            debug!(
                first_name = %record.first_name,
                last_name = %record.last_name,
                "name sanitized to empty email base"
            );
        }
        match registry.get_mut(&base) {
            Some(count) => {
                *count += 1;
                record.email = format!("{base}{count}@{EMAIL_DOMAIN}");
            }
            None => {
                record.email = format!("{base}@{EMAIL_DOMAIN}");
                registry.insert(base, 1);
            }
        }
    }
}

/// Build the sanitized local part: `first.last`, lowercased, spaces removed,
/// restricted to ASCII letters, ASCII digits, and dots.
pub fn sanitized_base(first_name: &str, last_name: &str) -> String {
    let base = format!(
        "{}.{}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
    .replace(' ', "");
    base.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '.')
        .collect()
}
