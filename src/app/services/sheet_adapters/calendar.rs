//! Calendar sheet adapter
//!
//! The calendar is laid out sideways: three rows used as parallel arrays
//! (race names, dates, round labels) with data from column 1. Column 0 holds
//! row labels and is ignored.

use crate::app::models::{CalendarEntry, IngestReport, SheetKind};
use crate::app::services::csv_table::SheetTable;
use tracing::debug;

/// Row positions in the Calendar sheet
mod row {
    pub const NAMES: usize = 0;
    pub const DATES: usize = 1;
    pub const ROUNDS: usize = 2;
}

/// First data column
const FIRST_COLUMN: usize = 1;

/// Parse the Calendar sheet into one entry per non-empty race name.
///
/// Dates are kept raw; normalization happens when race events are built.
/// Empty round labels default to `Round <column>`.
pub fn parse_calendar(table: &SheetTable, report: &mut IngestReport) -> Vec<CalendarEntry> {
    let sheet = SheetKind::Calendar;
    let Some(names) = table.row(row::NAMES) else {
        return Vec::new();
    };
    if table.len() > row::ROUNDS + 1 {
        debug!(
            "Calendar has {} rows; only the first {} are read",
            table.len(),
            row::ROUNDS + 1
        );
    }

    let mut entries = Vec::new();
    for column in FIRST_COLUMN..names.len() {
        let name = table.cell(row::NAMES, column);
        if name.is_empty() {
            continue;
        }

        let label = table.cell(row::ROUNDS, column);
        entries.push(CalendarEntry {
            column,
            name: name.to_string(),
            raw_date: table.cell(row::DATES, column).to_string(),
            round_label: if label.is_empty() {
                format!("Round {}", column)
            } else {
                label.to_string()
            },
        });
    }

    report.stats_mut(sheet).records += entries.len();
    entries
}
