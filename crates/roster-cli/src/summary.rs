//! Console rendering of rosters and statistics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{RecordField, RosterStats, StudentRecord};

use crate::types::{AssignResult, ConvertResult, StatsResult};

/// Shown whenever a roster or statistic has nothing to report.
pub const NO_DATA: &str = "No student data available.";

pub fn print_assign_summary(result: &AssignResult) {
    println!("Roster: {}", result.input.display());
    println!("{}", render_roster(&result.records));
    if let Some(path) = &result.output {
        println!("Exported: {}", path.display());
    }
}

pub fn print_convert_summary(result: &ConvertResult) {
    println!(
        "Converted {} records from {} to {}",
        result.record_count,
        result.input.display(),
        result.output.display()
    );
}

pub fn print_stats_summary(result: &StatsResult) {
    println!("Roster: {}", result.input.display());
    println!("{}", render_stats(&result.stats));
}

/// Render the full roster as a table, one row per record.
pub fn render_roster(records: &[StudentRecord]) -> String {
    if records.is_empty() {
        return NO_DATA.to_string();
    }
    let mut table = Table::new();
    table.set_header(
        RecordField::ALL
            .iter()
            .map(|field| header_cell(field.wire_name()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in records {
        table.add_row(
            RecordField::ALL
                .iter()
                .map(|field| value_cell(record.field(*field)))
                .collect::<Vec<_>>(),
        );
    }
    table.to_string()
}

/// Render statistics: totals, mean class size, and per-class counts.
pub fn render_stats(stats: &RosterStats) -> String {
    if stats.is_empty() {
        return NO_DATA.to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("Classes: {}\n", stats.class_count()));
    out.push_str(&format!("Students: {}\n", stats.total_students));
    if let Some(mean) = stats.mean_per_class() {
        out.push_str(&format!("Mean students per class: {mean:.2}\n"));
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Klasse"), header_cell("Students")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (class_name, count) in &stats.students_per_class {
        let class_cell = if class_name.is_empty() {
            dim_cell("(none)")
        } else {
            Cell::new(class_name)
        };
        table.add_row(vec![class_cell, Cell::new(count)]);
    }
    out.push_str(&table.to_string());
    out
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::StudentRecord;

    #[test]
    fn empty_roster_renders_no_data_line() {
        assert_eq!(render_roster(&[]), NO_DATA);
    }

    #[test]
    fn roster_table_contains_wire_headers_and_values() {
        let mut record = StudentRecord::new("10a", "Anna", "Muller");
        record.email = "anna.muller@schule.de".to_string();
        let rendered = render_roster(&[record]);
        assert!(rendered.contains("Klasse"));
        assert!(rendered.contains("Vorname"));
        assert!(rendered.contains("anna.muller@schule.de"));
    }

    #[test]
    fn empty_stats_render_no_data_line() {
        let stats = RosterStats::from_records(&[]);
        assert_eq!(render_stats(&stats), NO_DATA);
    }

    #[test]
    fn stats_render_totals_and_mean() {
        let records = vec![
            StudentRecord::new("10a", "Anna", "Muller"),
            StudentRecord::new("10a", "Ben", "Weber"),
            StudentRecord::new("10b", "Cora", "Schmidt"),
        ];
        let stats = RosterStats::from_records(&records);
        let rendered = render_stats(&stats);
        assert!(rendered.contains("Classes: 2"));
        assert!(rendered.contains("Students: 3"));
        assert!(rendered.contains("Mean students per class: 1.50"));
        assert!(rendered.contains("10a"));
    }
}
