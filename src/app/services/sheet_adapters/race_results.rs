//! Race results sheet adapter
//!
//! Layout:
//! - row 0: completion markers, `x` (any case) under each completed round
//! - row 1: race names
//! - row 2: round labels
//! - rows 3+: one driver per row, name in column 0, round `r` in column `r`
//!
//! Column 0 of the header rows is a row label. Rounds beyond the configured
//! ceiling are not read.

use super::fields::{RowCells, has_min_fields, skip_keyless};
use super::result_cell::parse_result_cell;
use crate::app::models::{IngestReport, RaceResultsTable, ResultRow, RoundHeader, SheetKind};
use crate::app::services::csv_table::SheetTable;
use crate::constants::{COMPLETION_MARKER, min_fields};
use tracing::{debug, warn};

/// Row positions in the Race Results sheet
mod row {
    pub const MARKERS: usize = 0;
    pub const NAMES: usize = 1;
    pub const ROUNDS: usize = 2;
    pub const FIRST_DRIVER: usize = 3;
}

/// Column holding the driver name
const DRIVER_COLUMN: usize = 0;

/// Round headers for columns `1..=ceiling` that carry a name or a label
pub(super) fn round_headers(
    table: &SheetTable,
    names_row: usize,
    labels_row: usize,
    ceiling: usize,
) -> Vec<RoundHeader> {
    (1..=ceiling)
        .filter_map(|round| {
            let name = table.cell(names_row, round);
            let label = table.cell(labels_row, round);
            if name.is_empty() && label.is_empty() {
                return None;
            }
            Some(RoundHeader {
                round,
                name: name.to_string(),
                label: if label.is_empty() {
                    format!("Round {}", round)
                } else {
                    label.to_string()
                },
            })
        })
        .collect()
}

/// Driver rows from `first_row` onwards with result cells for `1..=ceiling`
pub(super) fn result_rows(
    table: &SheetTable,
    sheet: SheetKind,
    first_row: usize,
    ceiling: usize,
    report: &mut IngestReport,
) -> Vec<ResultRow> {
    let mut rows = Vec::new();

    for (row_index, cells) in table.data_rows(first_row) {
        let cells = RowCells::new(cells);
        if !has_min_fields(sheet, row_index, cells, min_fields::RESULTS, report) {
            continue;
        }
        let driver = cells.text(DRIVER_COLUMN);
        if driver.is_empty() {
            skip_keyless(sheet, row_index, "driver name", report);
            continue;
        }

        rows.push(ResultRow {
            driver: driver.to_string(),
            results: (1..=ceiling)
                .map(|column| parse_result_cell(cells.text(column)))
                .collect(),
        });
    }

    report.stats_mut(sheet).records += rows.len();
    rows
}

/// Parse the Race Results sheet
pub fn parse_race_results(
    table: &SheetTable,
    ceiling: usize,
    report: &mut IngestReport,
) -> RaceResultsTable {
    if table.is_empty() {
        return RaceResultsTable::default();
    }

    let completed_rounds: Vec<usize> = (1..=ceiling)
        .filter(|&round| {
            table
                .cell(row::MARKERS, round)
                .eq_ignore_ascii_case(COMPLETION_MARKER)
        })
        .collect();

    let contiguous = completed_rounds
        .iter()
        .enumerate()
        .all(|(index, &round)| round == index + 1);
    if !contiguous {
        warn!(
            "Completion markers are not contiguous ({:?}); rounds 1..={} are treated as completed",
            completed_rounds,
            completed_rounds.len()
        );
    }

    let rounds = round_headers(table, row::NAMES, row::ROUNDS, ceiling);
    let rows = result_rows(
        table,
        SheetKind::RaceResults,
        row::FIRST_DRIVER,
        ceiling,
        report,
    );

    debug!(
        "Race results: {} completed rounds, {} round headers, {} drivers",
        completed_rounds.len(),
        rounds.len(),
        rows.len()
    );

    RaceResultsTable {
        completed_rounds,
        rounds,
        rows,
    }
}
