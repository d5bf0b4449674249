//! Drivers sheet adapter
//!
//! One header row, then one driver per row across columns 0-12.

use super::fields::{RowCells, has_min_fields, skip_keyless};
use crate::app::models::{Driver, DriverStats, IngestReport, SheetKind};
use crate::app::services::csv_table::SheetTable;
use crate::constants::min_fields;
use std::collections::HashSet;
use tracing::debug;

/// Column positions in the Drivers sheet
mod col {
    pub const USERNAME: usize = 0;
    pub const ID: usize = 1;
    pub const SHORT_DISPLAY: usize = 2;
    pub const DISCORD: usize = 3;
    pub const NATIONALITY: usize = 4;
    pub const TEAM_CODE: usize = 5;
    pub const POSITION: usize = 6;
    pub const ACTIVE: usize = 7;
    pub const PHOTO: usize = 8;
    pub const NUMBER: usize = 9;
    pub const SOCIALS: usize = 10;
    pub const DESCRIPTION: usize = 11;
    pub const VALUE: usize = 12;
}

fn driver_from_row(row: RowCells<'_>) -> Driver {
    Driver {
        username: row.string(col::USERNAME),
        id: row.string(col::ID),
        short_display: row.string(col::SHORT_DISPLAY),
        discord: row.string(col::DISCORD),
        nationality: row.string(col::NATIONALITY),
        team_code: row.string(col::TEAM_CODE),
        position: row.string(col::POSITION),
        active: row.flag(col::ACTIVE, true),
        photo_url: row.string(col::PHOTO),
        number: row.string(col::NUMBER),
        socials: row.string(col::SOCIALS),
        description: row.string(col::DESCRIPTION),
        value: row.string(col::VALUE),
        stats: DriverStats::default(),
    }
}

/// Parse the Drivers sheet. Usernames are unique: later duplicates are skipped.
pub fn parse_drivers(table: &SheetTable, report: &mut IngestReport) -> Vec<Driver> {
    let sheet = SheetKind::Drivers;
    let mut drivers = Vec::new();
    let mut seen = HashSet::new();

    for (row_index, cells) in table.data_rows(1) {
        let row = RowCells::new(cells);
        if !has_min_fields(sheet, row_index, row, min_fields::DRIVERS, report) {
            continue;
        }
        if row.text(col::USERNAME).is_empty() {
            skip_keyless(sheet, row_index, "username", report);
            continue;
        }

        let driver = driver_from_row(row);
        if !seen.insert(driver.username.to_lowercase()) {
            debug!("Skipping duplicate driver '{}' at row {}", driver.username, row_index);
            report.stats_mut(sheet).rows_skipped += 1;
            continue;
        }
        drivers.push(driver);
    }

    report.stats_mut(sheet).records += drivers.len();
    drivers
}
