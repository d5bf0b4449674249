//! Constructor progression
//!
//! Driver progression rows are summed into the constructor their team label
//! matches (see [`match_constructor`]). Rows whose label matches nothing are
//! dropped. Afterwards any constructor whose summed total is zero while its
//! standings points are not is re-derived directly from its members and the
//! drivers named on its team roster.

use super::accumulate;
use crate::app::models::{
    ConstructorRow, Driver, IngestIssue, IngestReport, ProgressionRow, ProgressionTable,
    ReferenceKind, StandingsRow, Team,
};
use crate::app::services::entity_resolver::{DriverIndex, match_constructor};
use std::collections::HashSet;
use tracing::{debug, info};

/// Inputs shared by the summing and repair passes
pub struct ConstructorInputs<'a> {
    pub driver_progression: &'a ProgressionTable,
    pub driver_standings: &'a [StandingsRow],
    pub constructors: &'a [ConstructorRow],
    pub teams: &'a [Team],
    pub drivers: &'a [Driver],
}

/// Per-constructor progression, rows in constructor standings order
pub fn compute_constructor_progression(
    inputs: &ConstructorInputs<'_>,
    report: &mut IngestReport,
) -> ProgressionTable {
    let completed = inputs.driver_progression.completed_rounds;
    let round_count = inputs.driver_progression.rounds.len().max(
        inputs
            .driver_progression
            .rows
            .first()
            .map_or(0, |row| row.rounds.len()),
    );

    let mut scored = vec![vec![0u32; completed]; inputs.constructors.len()];
    let mut dropped = HashSet::new();

    for row in &inputs.driver_progression.rows {
        if row.team_code.trim().is_empty() {
            continue;
        }
        let label = inputs
            .driver_standings
            .iter()
            .find(|standing| standing.driver == row.name)
            .map_or(row.team_code.as_str(), |standing| standing.team_name.as_str());

        match match_constructor(label, &row.team_code, inputs.constructors) {
            Some(index) => add_round_points(&mut scored[index], row),
            None => {
                if dropped.insert(label.to_string()) {
                    debug!("Dropping round points for unmatched team '{}'", label);
                    report.record(IngestIssue::UnresolvedReference {
                        kind: ReferenceKind::ConstructorRound,
                        name: label.to_string(),
                    });
                }
            }
        }
    }

    for (index, constructor) in inputs.constructors.iter().enumerate() {
        let total: u32 = scored[index].iter().sum();
        if total == 0 && constructor.points > 0 {
            info!(
                "Repairing progression for {}: summed 0, standings {}",
                constructor.team_name, constructor.points
            );
            scored[index] = repair_from_members(inputs, constructor, completed);
        }
    }

    let rows = inputs
        .constructors
        .iter()
        .zip(scored)
        .map(|(constructor, points)| {
            let (rounds, total) = accumulate(&points, round_count);
            ProgressionRow {
                name: constructor.team_name.clone(),
                team_code: constructor.team_code.clone(),
                rounds,
                total,
            }
        })
        .collect();

    ProgressionTable {
        rounds: inputs.driver_progression.rounds.clone(),
        completed_rounds: completed,
        rows,
    }
}

fn add_round_points(target: &mut [u32], row: &ProgressionRow) {
    for (slot, round) in target.iter_mut().zip(&row.rounds) {
        *slot += round.points().unwrap_or(0);
    }
}

/// Round points summed over the constructor's members and roster drivers
fn repair_from_members(
    inputs: &ConstructorInputs<'_>,
    constructor: &ConstructorRow,
    completed: usize,
) -> Vec<u32> {
    let index = DriverIndex::new(inputs.drivers);
    let mut names: Vec<String> = constructor.members.clone();
    if let Some(team) = inputs
        .teams
        .iter()
        .find(|team| team.id == constructor.team_code)
    {
        names.extend(
            team.roster()
                .filter_map(|name| index.resolve(name))
                .map(|driver| driver.username.clone()),
        );
    }

    let mut seen = HashSet::new();
    let mut points = vec![0u32; completed];
    for name in names {
        if !seen.insert(name.clone()) {
            continue;
        }
        if let Some(row) = inputs.driver_progression.row(&name) {
            add_round_points(&mut points, row);
        }
    }
    points
}
