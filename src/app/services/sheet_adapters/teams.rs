//! Teams sheet adapter
//!
//! One header row, then one team per row across columns 0-15. Colours and
//! the active flag fall back to defaults when their cells are empty.

use super::fields::{RowCells, has_min_fields, parse_flag, skip_keyless};
use crate::app::models::{IngestReport, SheetKind, Team};
use crate::app::services::csv_table::SheetTable;
use crate::constants::{
    DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TEAM_ACTIVE, min_fields,
};
use std::collections::HashSet;
use tracing::debug;

/// Column positions in the Teams sheet
mod col {
    pub const NAME: usize = 0;
    pub const SPONSOR: usize = 1;
    pub const ID: usize = 2;
    pub const PRIMARY_COLOR: usize = 3;
    pub const SECONDARY_COLOR: usize = 4;
    pub const LOGO: usize = 5;
    pub const CAR_IMAGE: usize = 6;
    pub const DRIVER1: usize = 7;
    pub const DRIVER2: usize = 8;
    pub const RESERVE1: usize = 9;
    pub const RESERVE2: usize = 10;
    pub const OWNER: usize = 11;
    pub const PRINCIPAL: usize = 12;
    pub const ENGINEER: usize = 13;
    pub const DESCRIPTION: usize = 14;
    pub const ACTIVE: usize = 15;
}

fn team_from_row(row: RowCells<'_>) -> Team {
    Team {
        name: row.string(col::NAME),
        sponsor: row.string(col::SPONSOR),
        id: row.string(col::ID),
        primary_color: row.string_or(col::PRIMARY_COLOR, DEFAULT_PRIMARY_COLOR),
        secondary_color: row.string_or(col::SECONDARY_COLOR, DEFAULT_SECONDARY_COLOR),
        logo_url: row.string(col::LOGO),
        car_image_url: row.string(col::CAR_IMAGE),
        driver1: row.string(col::DRIVER1),
        driver2: row.string(col::DRIVER2),
        reserve1: row.string(col::RESERVE1),
        reserve2: row.string(col::RESERVE2),
        owner: row.string(col::OWNER),
        principal: row.string(col::PRINCIPAL),
        engineer: row.string(col::ENGINEER),
        description: row.string(col::DESCRIPTION),
        active: parse_flag(&row.string_or(col::ACTIVE, DEFAULT_TEAM_ACTIVE), true),
    }
}

/// Parse the Teams sheet. Team ids are unique: later duplicates are skipped.
pub fn parse_teams(table: &SheetTable, report: &mut IngestReport) -> Vec<Team> {
    let sheet = SheetKind::Teams;
    let mut teams = Vec::new();
    let mut seen = HashSet::new();

    for (row_index, cells) in table.data_rows(1) {
        let row = RowCells::new(cells);
        if !has_min_fields(sheet, row_index, row, min_fields::TEAMS, report) {
            continue;
        }
        if row.text(col::ID).is_empty() {
            skip_keyless(sheet, row_index, "id", report);
            continue;
        }

        let team = team_from_row(row);
        if !seen.insert(team.id.clone()) {
            debug!("Skipping duplicate team id '{}' at row {}", team.id, row_index);
            report.stats_mut(sheet).rows_skipped += 1;
            continue;
        }
        teams.push(team);
    }

    report.stats_mut(sheet).records += teams.len();
    teams
}
