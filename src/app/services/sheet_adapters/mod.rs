//! Sheet adapters: typed records from positional spreadsheet rows
//!
//! Each adapter reads exactly one sheet of the league spreadsheet. Layouts are
//! fixed per sheet and undocumented by type, so every adapter owns an explicit
//! column map and builds one typed record per row through it.
//!
//! ## Conventions
//!
//! - Header rows are discarded by position, never detected by content.
//! - Rows shorter than the sheet's minimum field count are skipped and
//!   reported as [`IngestIssue::MalformedRow`](crate::app::models::IngestIssue).
//! - Rows without their key field (username, team id, race name) are skipped.
//! - An empty table (unavailable sheet) yields an empty result, never an error.
//!
//! ## Architecture
//!
//! - [`fields`] - row accessor and shared field parsing helpers
//! - [`result_cell`] - decoding of `P3 (Fastest Lap)` style result cells
//! - [`drivers`], [`teams`], [`circuits`] - one record per data row
//! - [`calendar`] - three parallel rows read column-wise
//! - [`race_results`], [`qualifying`] - round grids with header rows

pub mod calendar;
pub mod circuits;
pub mod drivers;
pub mod fields;
pub mod qualifying;
pub mod race_results;
pub mod result_cell;
pub mod teams;

#[cfg(test)]
pub mod tests;

pub use calendar::parse_calendar;
pub use circuits::parse_circuits;
pub use drivers::parse_drivers;
pub use qualifying::parse_qualifying;
pub use race_results::parse_race_results;
pub use result_cell::parse_result_cell;
pub use teams::parse_teams;
