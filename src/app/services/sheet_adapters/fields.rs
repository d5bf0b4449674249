//! Row access and field parsing helpers shared by the sheet adapters

use crate::app::models::{IngestIssue, IngestReport, SheetKind};
use tracing::debug;

/// Positional view over one parsed row
#[derive(Debug, Clone, Copy)]
pub struct RowCells<'a> {
    cells: &'a [String],
}

impl<'a> RowCells<'a> {
    pub fn new(cells: &'a [String]) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Trimmed text of a column, `""` when the row is shorter
    pub fn text(&self, column: usize) -> &'a str {
        self.cells.get(column).map(|cell| cell.trim()).unwrap_or("")
    }

    /// Owned text of a column
    pub fn string(&self, column: usize) -> String {
        self.text(column).to_string()
    }

    /// Owned text of a column, or `default` when the cell is empty
    pub fn string_or(&self, column: usize, default: &str) -> String {
        let value = self.text(column);
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    }

    /// Yes/no flag; empty cells take `default`
    pub fn flag(&self, column: usize, default: bool) -> bool {
        parse_flag(self.text(column), default)
    }
}

/// Interpret a yes/no cell. Anything other than an explicit negative is true.
pub fn parse_flag(value: &str, default: bool) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return default;
    }
    !matches!(
        value.to_ascii_lowercase().as_str(),
        "n" | "no" | "false" | "0" | "inactive"
    )
}

/// Check a row against the sheet's minimum width, recording a malformed-row
/// issue when it is too short
pub fn has_min_fields(
    sheet: SheetKind,
    row_index: usize,
    row: RowCells<'_>,
    required: usize,
    report: &mut IngestReport,
) -> bool {
    if row.len() >= required {
        return true;
    }
    debug!(
        "Skipping {} row {}: {} fields, {} required",
        sheet,
        row_index,
        row.len(),
        required
    );
    report.stats_mut(sheet).rows_skipped += 1;
    report.record(IngestIssue::MalformedRow {
        sheet,
        row: row_index,
        fields: row.len(),
        required,
    });
    false
}

/// Count a row skipped for a missing key field
pub fn skip_keyless(sheet: SheetKind, row_index: usize, key: &str, report: &mut IngestReport) {
    debug!("Skipping {} row {}: empty {}", sheet, row_index, key);
    report.stats_mut(sheet).rows_skipped += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_text_is_trimmed_and_defaults_empty() {
        let row = cells(&[" alice ", "APX"]);
        let view = RowCells::new(&row);
        assert_eq!(view.text(0), "alice");
        assert_eq!(view.text(5), "");
        assert_eq!(view.string_or(5, "#fff"), "#fff");
    }

    #[test]
    fn test_flags() {
        assert!(parse_flag("y", false));
        assert!(parse_flag("Yes", false));
        assert!(!parse_flag("n", true));
        assert!(!parse_flag("FALSE", true));
        assert!(parse_flag("", true));
        assert!(!parse_flag("  ", false));
    }

    #[test]
    fn test_min_fields_records_issue() {
        let row = cells(&["alice"]);
        let mut report = IngestReport::new();
        assert!(!has_min_fields(
            SheetKind::Drivers,
            3,
            RowCells::new(&row),
            6,
            &mut report
        ));
        assert_eq!(report.stats(SheetKind::Drivers).rows_skipped, 1);
        assert_eq!(
            report.issues,
            vec![IngestIssue::MalformedRow {
                sheet: SheetKind::Drivers,
                row: 3,
                fields: 1,
                required: 6,
            }]
        );
    }
}
