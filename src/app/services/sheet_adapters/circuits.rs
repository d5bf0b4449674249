//! Circuits sheet adapter
//!
//! One header row, then one circuit per row across columns 0-7. The race
//! name in column 0 is the free-text join key against calendar names.

use super::fields::{RowCells, has_min_fields, skip_keyless};
use crate::app::models::{Circuit, IngestReport, SheetKind};
use crate::app::services::csv_table::SheetTable;
use crate::constants::min_fields;

/// Column positions in the Circuits sheet
mod col {
    pub const RACE_NAME: usize = 0;
    pub const ID: usize = 1;
    pub const LOCATION: usize = 2;
    pub const LENGTH: usize = 3;
    pub const LAP_RECORD: usize = 4;
    pub const DESCRIPTION: usize = 5;
    pub const CIRCUIT_NAME: usize = 6;
    pub const TRACK_IMAGE: usize = 7;
}

fn circuit_from_row(row: RowCells<'_>) -> Circuit {
    Circuit {
        race_name: row.string(col::RACE_NAME),
        id: row.string(col::ID),
        location: row.string(col::LOCATION),
        length: row.string(col::LENGTH),
        lap_record: row.string(col::LAP_RECORD),
        description: row.string(col::DESCRIPTION),
        circuit_name: row.string(col::CIRCUIT_NAME),
        track_image_url: row.string(col::TRACK_IMAGE),
        placeholder: false,
    }
}

/// Parse the Circuits sheet, keeping source row order for matching
pub fn parse_circuits(table: &SheetTable, report: &mut IngestReport) -> Vec<Circuit> {
    let sheet = SheetKind::Circuits;
    let mut circuits = Vec::new();

    for (row_index, cells) in table.data_rows(1) {
        let row = RowCells::new(cells);
        if !has_min_fields(sheet, row_index, row, min_fields::CIRCUITS, report) {
            continue;
        }
        if row.text(col::RACE_NAME).is_empty() {
            skip_keyless(sheet, row_index, "race name", report);
            continue;
        }
        circuits.push(circuit_from_row(row));
    }

    report.stats_mut(sheet).records += circuits.len();
    circuits
}
