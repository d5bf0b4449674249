//! One ingestion pass over already-fetched sheet text
//!
//! The pass is a pure function of its inputs: parse every sheet, derive
//! statistics, standings and progression, build race events and merge
//! overrides. Nothing here fails; every recovery is recorded in the report.

use super::overrides::Overrides;
use super::snapshot::{IngestOutcome, SeasonSnapshot};
use crate::app::models::{
    CalendarEntry, Circuit, IngestIssue, IngestReport, RaceEvent, RaceStatus, SheetKind,
};
use crate::app::services::csv_table::SheetTable;
use crate::app::services::date_normalizer::DateNormalizer;
use crate::app::services::entity_resolver::CircuitResolver;
use crate::app::services::progression::{
    ConstructorInputs, compute_constructor_progression, compute_driver_progression,
};
use crate::app::services::sheet_adapters::{
    parse_calendar, parse_circuits, parse_drivers, parse_qualifying, parse_race_results,
    parse_teams,
};
use crate::app::services::standings::{
    compute_constructor_standings, compute_driver_standings, compute_driver_stats,
};
use crate::config::IngestConfig;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Raw text of each sheet for one pass; missing sheets read as empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheets {
    texts: BTreeMap<SheetKind, String>,
}

impl RawSheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sheet: SheetKind, text: impl Into<String>) -> Self {
        self.insert(sheet, text);
        self
    }

    pub fn insert(&mut self, sheet: SheetKind, text: impl Into<String>) {
        self.texts.insert(sheet, text.into());
    }

    pub fn text(&self, sheet: SheetKind) -> &str {
        self.texts.get(&sheet).map_or("", String::as_str)
    }
}

/// Parse one sheet, recording it as unavailable when its text is empty
fn parse_sheet(raw: &RawSheets, sheet: SheetKind, report: &mut IngestReport) -> SheetTable {
    let text = raw.text(sheet);
    if text.trim().is_empty() {
        warn!("{} sheet is unavailable, treating it as empty", sheet);
        report.record(IngestIssue::SourceUnavailable { sheet });
    }
    let table = SheetTable::parse(text);
    report.stats_mut(sheet).rows_read = table.len();
    table
}

/// Status of a 1-based calendar round given the completed-round count
pub fn event_status(round: usize, completed: usize) -> RaceStatus {
    if round <= completed {
        RaceStatus::Completed
    } else if round == completed + 1 {
        RaceStatus::Next
    } else {
        RaceStatus::Upcoming
    }
}

/// Calendar entries joined to circuits, with normalized dates and status
pub fn build_events(
    calendar: &[CalendarEntry],
    circuits: &[Circuit],
    completed: usize,
    normalizer: &DateNormalizer,
    report: &mut IngestReport,
) -> Vec<RaceEvent> {
    let resolver = CircuitResolver::new();
    calendar
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let round = index + 1;
            RaceEvent {
                round,
                round_label: entry.round_label.clone(),
                name: entry.name.clone(),
                raw_date: entry.raw_date.clone(),
                date: normalizer.normalize(&entry.raw_date).text,
                status: event_status(round, completed),
                circuit: resolver.resolve(&entry.name, circuits, report),
            }
        })
        .collect()
}

/// Run a full pass over fetched sheet text
pub fn build_snapshot(
    raw: &RawSheets,
    config: &IngestConfig,
    overrides: &Overrides,
    ingested_at: DateTime<Utc>,
) -> IngestOutcome {
    let mut report = IngestReport::new();

    let drivers = parse_drivers(&parse_sheet(raw, SheetKind::Drivers, &mut report), &mut report);
    let teams = parse_teams(&parse_sheet(raw, SheetKind::Teams, &mut report), &mut report);
    let circuits = parse_circuits(&parse_sheet(raw, SheetKind::Circuits, &mut report), &mut report);
    let calendar = parse_calendar(&parse_sheet(raw, SheetKind::Calendar, &mut report), &mut report);
    let race_results = parse_race_results(
        &parse_sheet(raw, SheetKind::RaceResults, &mut report),
        config.race_round_ceiling,
        &mut report,
    );
    let qualifying = parse_qualifying(
        &parse_sheet(raw, SheetKind::Qualifying, &mut report),
        config.qualifying_round_ceiling,
        &mut report,
    );

    if drivers.is_empty()
        && teams.is_empty()
        && circuits.is_empty()
        && calendar.is_empty()
        && race_results.is_empty()
        && qualifying.is_empty()
    {
        warn!("Ingestion produced no data");
        return IngestOutcome::Empty(report);
    }

    let drivers = compute_driver_stats(&drivers, &race_results, &qualifying, &mut report);
    let driver_standings = compute_driver_standings(&drivers, &teams, &mut report);
    let constructor_standings = compute_constructor_standings(&drivers, &teams);
    let driver_progression =
        compute_driver_progression(&race_results, &drivers, &driver_standings);
    let constructor_progression = compute_constructor_progression(
        &ConstructorInputs {
            driver_progression: &driver_progression,
            driver_standings: &driver_standings,
            constructors: &constructor_standings,
            teams: &teams,
            drivers: &drivers,
        },
        &mut report,
    );

    let normalizer = DateNormalizer::new(config.date_order);
    let mut events = build_events(
        &calendar,
        &circuits,
        race_results.completed_round_count(),
        &normalizer,
        &mut report,
    );
    overrides.apply(&mut events, &normalizer);
    for event in &events {
        if normalizer.normalize(&event.raw_date).is_unparsed() {
            report.record(IngestIssue::UnparseableDate {
                race: event.name.clone(),
                raw: event.raw_date.clone(),
            });
        }
    }

    info!(
        "Ingested {} drivers, {} teams, {} events, {} of {} rounds completed ({} issues)",
        drivers.len(),
        teams.len(),
        events.len(),
        race_results.completed_round_count(),
        race_results.total_rounds(),
        report.issues.len()
    );

    IngestOutcome::Ready(Arc::new(SeasonSnapshot {
        drivers,
        teams,
        circuits,
        events,
        race_results,
        qualifying,
        driver_standings,
        constructor_standings,
        driver_progression,
        constructor_progression,
        report,
        ingested_at,
    }))
}
