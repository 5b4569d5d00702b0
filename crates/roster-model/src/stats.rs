use std::collections::BTreeMap;

use crate::record::StudentRecord;

/// Aggregated class/student counts over one roster.
///
/// The empty roster is a first-class state: `mean_per_class` is `None` and
/// callers render a "no data" indication instead of computing 0/0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterStats {
    pub total_students: usize,
    pub students_per_class: BTreeMap<String, usize>,
}

impl RosterStats {
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let mut students_per_class: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *students_per_class
                .entry(record.class_name.clone())
                .or_insert(0) += 1;
        }
        Self {
            total_students: records.len(),
            students_per_class,
        }
    }

    pub fn class_count(&self) -> usize {
        self.students_per_class.len()
    }

    /// Mean students per class, `None` for an empty roster.
    pub fn mean_per_class(&self) -> Option<f64> {
        if self.students_per_class.is_empty() {
            return None;
        }
        Some(self.total_students as f64 / self.students_per_class.len() as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.total_students == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class_name: &str, first_name: &str) -> StudentRecord {
        StudentRecord::new(class_name, first_name, "Muster")
    }

    #[test]
    fn counts_students_per_class() {
        let records = vec![
            record("10a", "Anna"),
            record("10a", "Ben"),
            record("10b", "Cora"),
        ];
        let stats = RosterStats::from_records(&records);
        assert_eq!(stats.total_students, 3);
        assert_eq!(stats.class_count(), 2);
        assert_eq!(stats.students_per_class.get("10a"), Some(&2));
        assert_eq!(stats.students_per_class.get("10b"), Some(&1));
    }

    #[test]
    fn mean_per_class_over_two_classes() {
        let records = vec![
            record("10a", "Anna"),
            record("10a", "Ben"),
            record("10b", "Cora"),
        ];
        let stats = RosterStats::from_records(&records);
        let mean = stats.mean_per_class().expect("mean for non-empty roster");
        assert!((mean - 1.5).abs() < 1e-9);
    }

    #[test]
    fn empty_roster_has_no_mean() {
        let stats = RosterStats::from_records(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.class_count(), 0);
        assert_eq!(stats.mean_per_class(), None);
    }

    #[test]
    fn blank_class_name_is_its_own_class() {
        let records = vec![record("", "Anna"), record("10a", "Ben")];
        let stats = RosterStats::from_records(&records);
        assert_eq!(stats.class_count(), 2);
        assert_eq!(stats.students_per_class.get(""), Some(&1));
    }
}
