//! Driver progression

use super::accumulate;
use crate::app::models::{
    Driver, ProgressionRow, ProgressionTable, RaceResultsTable, StandingsRow,
};
use crate::app::services::entity_resolver::DriverIndex;
use crate::app::services::points_engine::points_for;
use tracing::debug;

/// Per-driver progression, rows in standings order.
///
/// `drivers` must already include drivers carried over from results rows,
/// as produced by [`compute_driver_stats`](crate::app::services::standings::compute_driver_stats).
pub fn compute_driver_progression(
    results: &RaceResultsTable,
    drivers: &[Driver],
    standings: &[StandingsRow],
) -> ProgressionTable {
    let completed = results.completed_round_count();
    let round_count = results.total_rounds();
    let index = DriverIndex::new(drivers);
    let mut scored = vec![vec![0u32; completed]; drivers.len()];

    for row in &results.rows {
        let Some(position) = index.position(&row.driver) else {
            debug!("No driver for results row '{}'", row.driver);
            continue;
        };
        for (round, points) in scored[position].iter_mut().enumerate() {
            if let Some(result) = row.result(round + 1) {
                *points += points_for(result);
            }
        }
    }

    let rows = standings
        .iter()
        .filter_map(|standing| {
            let position = drivers
                .iter()
                .position(|driver| driver.username == standing.driver)?;
            let (rounds, total) = accumulate(&scored[position], round_count);
            Some(ProgressionRow {
                name: standing.driver.clone(),
                team_code: standing.team_code.clone(),
                rounds,
                total,
            })
        })
        .collect();

    ProgressionTable {
        rounds: results.rounds.clone(),
        completed_rounds: completed,
        rows,
    }
}
