//! Qualifying sheet adapter
//!
//! Two header rows (race names, round labels), then one driver per row with
//! round `r` in column `r`. Qualifying feeds display and pole counts only,
//! never championship points.

use super::race_results::{result_rows, round_headers};
use crate::app::models::{IngestReport, QualifyingTable, SheetKind};
use crate::app::services::csv_table::SheetTable;

/// Row positions in the Qualifying sheet
mod row {
    pub const NAMES: usize = 0;
    pub const ROUNDS: usize = 1;
    pub const FIRST_DRIVER: usize = 2;
}

/// Parse the Qualifying sheet
pub fn parse_qualifying(
    table: &SheetTable,
    ceiling: usize,
    report: &mut IngestReport,
) -> QualifyingTable {
    if table.is_empty() {
        return QualifyingTable::default();
    }

    QualifyingTable {
        rounds: round_headers(table, row::NAMES, row::ROUNDS, ceiling),
        rows: result_rows(
            table,
            SheetKind::Qualifying,
            row::FIRST_DRIVER,
            ceiling,
            report,
        ),
    }
}
