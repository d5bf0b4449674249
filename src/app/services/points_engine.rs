//! Championship points for parsed results
//!
//! Finishing positions P1..P10 score from the fixed table in
//! [`POINTS_TABLE`](crate::constants::POINTS_TABLE); P11 and below score
//! nothing. A non-finish (DNF, DNS, DSQ) scores nothing for position. The
//! fastest-lap bonus is added whenever the cell encodes it, independent of
//! position or classification.

use crate::app::models::ParsedResult;
use crate::app::services::sheet_adapters::parse_result_cell;
use crate::constants::{FASTEST_LAP_BONUS, POINTS_TABLE};

/// Points for a classified finishing position
pub fn position_points(position: u32) -> u32 {
    position
        .checked_sub(1)
        .and_then(|index| POINTS_TABLE.get(index as usize))
        .copied()
        .unwrap_or(0)
}

/// Points for one parsed result, including the fastest-lap bonus
pub fn points_for(result: &ParsedResult) -> u32 {
    let finish = match (result.non_finish, result.position) {
        (None, Some(position)) => position_points(position),
        _ => 0,
    };
    let bonus = if result.fastest_lap { FASTEST_LAP_BONUS } else { 0 };
    finish + bonus
}

/// Points for a raw result cell; empty cells score zero
pub fn points_for_cell(raw: &str) -> u32 {
    parse_result_cell(raw).map_or(0, |result| points_for(&result))
}
