//! Ranking, gaps and constructor grouping

use crate::app::models::{
    ConstructorRow, Driver, IngestIssue, IngestReport, ReferenceKind, StandingsRow, Team,
};
use crate::app::services::entity_resolver::resolve_team_name;
use std::collections::HashSet;
use tracing::debug;

/// Tie-aware championship positions for points sorted in descending order.
///
/// Equal points share the position of the first row in the tie; the next
/// distinct total takes its 1-based index.
pub fn championship_positions(points: &[u32]) -> Vec<usize> {
    let mut positions: Vec<usize> = Vec::with_capacity(points.len());
    for (index, value) in points.iter().enumerate() {
        let position = match index.checked_sub(1) {
            Some(previous) if points[previous] == *value => positions[previous],
            _ => index + 1,
        };
        positions.push(position);
    }
    positions
}

/// Driver championship in descending points order.
///
/// Every driver is listed. Team names resolve through the Teams sheet, then
/// the static dictionary, then the raw code; codes left raw are reported once.
pub fn compute_driver_standings(
    drivers: &[Driver],
    teams: &[Team],
    report: &mut IngestReport,
) -> Vec<StandingsRow> {
    let mut unresolved = HashSet::new();
    let mut rows: Vec<StandingsRow> = drivers
        .iter()
        .map(|driver| {
            let team_name = if driver.has_team() {
                let resolved = resolve_team_name(&driver.team_code, teams);
                if resolved.is_fallback() && unresolved.insert(driver.team_code.clone()) {
                    debug!("Team code '{}' not found, shown verbatim", driver.team_code);
                    report.record(IngestIssue::UnresolvedReference {
                        kind: ReferenceKind::Team,
                        name: driver.team_code.clone(),
                    });
                }
                resolved.name
            } else {
                String::new()
            };

            StandingsRow {
                position: 0,
                driver: driver.username.clone(),
                team_code: driver.team_code.clone(),
                team_name,
                points: driver.stats.points,
                wins: driver.stats.wins,
                podiums: driver.stats.podiums,
                gap: 0,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.points.cmp(&a.points));
    let points: Vec<u32> = rows.iter().map(|row| row.points).collect();
    let leader = points.first().copied().unwrap_or(0);
    for (row, position) in rows.iter_mut().zip(championship_positions(&points)) {
        row.position = position;
        row.gap = leader.saturating_sub(row.points);
    }
    rows
}

/// Constructor championship: drivers grouped by team code in order of first
/// appearance, then ranked like the driver standings. Drivers without a team
/// are left out.
pub fn compute_constructor_standings(drivers: &[Driver], teams: &[Team]) -> Vec<ConstructorRow> {
    let mut rows: Vec<ConstructorRow> = Vec::new();

    for driver in drivers.iter().filter(|driver| driver.has_team()) {
        let code = driver.team_code.trim();
        let row = match rows.iter().position(|row| row.team_code == code) {
            Some(index) => &mut rows[index],
            None => {
                rows.push(ConstructorRow {
                    position: 0,
                    team_code: code.to_string(),
                    team_name: resolve_team_name(code, teams).name,
                    points: 0,
                    wins: 0,
                    podiums: 0,
                    members: Vec::new(),
                    gap: 0,
                });
                let last = rows.len() - 1;
                &mut rows[last]
            }
        };
        row.points += driver.stats.points;
        row.wins += driver.stats.wins;
        row.podiums += driver.stats.podiums;
        row.members.push(driver.username.clone());
    }

    rows.sort_by(|a, b| b.points.cmp(&a.points));
    let points: Vec<u32> = rows.iter().map(|row| row.points).collect();
    let leader = points.first().copied().unwrap_or(0);
    for (row, position) in rows.iter_mut().zip(championship_positions(&points)) {
        row.position = position;
        row.gap = leader.saturating_sub(row.points);
    }
    rows
}
