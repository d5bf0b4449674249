//! Driver aggregate statistics from the result grids

use crate::app::models::{
    Driver, DriverStats, IngestIssue, IngestReport, QualifyingTable, RaceResultsTable,
    ReferenceKind,
};
use crate::app::services::entity_resolver::DriverIndex;
use crate::app::services::points_engine::points_for;
use tracing::debug;

/// Drivers with their season statistics filled in.
///
/// Results rows are matched to drivers through [`DriverIndex`]. A results row
/// naming nobody on the Drivers sheet is carried as a team-less driver so its
/// points still count, and is reported as an unresolved reference. Only rounds
/// `1..=completed` contribute to race statistics.
pub fn compute_driver_stats(
    drivers: &[Driver],
    results: &RaceResultsTable,
    qualifying: &QualifyingTable,
    report: &mut IngestReport,
) -> Vec<Driver> {
    let mut drivers: Vec<Driver> = drivers
        .iter()
        .cloned()
        .map(|mut driver| {
            driver.stats = DriverStats::default();
            driver
        })
        .collect();
    let completed = results.completed_round_count();

    for row in &results.rows {
        let index = match DriverIndex::new(&drivers).position(&row.driver) {
            Some(index) => index,
            None => {
                debug!("Results row '{}' has no driver record", row.driver);
                report.record(IngestIssue::UnresolvedReference {
                    kind: ReferenceKind::Driver,
                    name: row.driver.clone(),
                });
                drivers.push(Driver::from_results_name(&row.driver));
                drivers.len() - 1
            }
        };

        let stats = &mut drivers[index].stats;
        for round in 1..=completed {
            let Some(result) = row.result(round) else {
                continue;
            };
            stats.races_attended += 1;
            stats.points += points_for(result);
            if result.is_win() {
                stats.wins += 1;
            }
            if result.is_podium() {
                stats.podiums += 1;
            }
            if result.fastest_lap {
                stats.fastest_laps += 1;
            }
            if result.non_finish.is_some() {
                stats.dnfs += 1;
            }
        }
    }

    for row in &qualifying.rows {
        let Some(index) = DriverIndex::new(&drivers).position(&row.driver) else {
            debug!("Qualifying row '{}' has no driver record", row.driver);
            continue;
        };
        let poles = qualifying
            .rounds
            .iter()
            .filter_map(|header| row.result(header.round))
            .filter(|result| result.is_win())
            .count() as u32;
        drivers[index].stats.poles += poles;
    }

    drivers
}
