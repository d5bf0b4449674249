//! Immutable result of one ingestion pass

use crate::app::models::{
    Circuit, ConstructorRow, Driver, IngestReport, ProgressionTable, QualifyingTable,
    RaceEvent, RaceResultsTable, RaceStatus, StandingsRow, Team,
};
use crate::app::services::date_normalizer::parse_display_date;
use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Everything derived from one pass over the league sheets
#[derive(Debug, Clone, Serialize)]
pub struct SeasonSnapshot {
    /// Drivers with season statistics, including drivers carried from results
    pub drivers: Vec<Driver>,
    pub teams: Vec<Team>,
    pub circuits: Vec<Circuit>,
    pub events: Vec<RaceEvent>,
    pub race_results: RaceResultsTable,
    pub qualifying: QualifyingTable,
    pub driver_standings: Vec<StandingsRow>,
    pub constructor_standings: Vec<ConstructorRow>,
    pub driver_progression: ProgressionTable,
    pub constructor_progression: ProgressionTable,
    pub report: IngestReport,
    pub ingested_at: DateTime<Utc>,
}

impl SeasonSnapshot {
    /// The event with status `next`, if the season is not over
    pub fn next_event(&self) -> Option<&RaceEvent> {
        self.events
            .iter()
            .find(|event| event.status == RaceStatus::Next)
    }

    pub fn completed_rounds(&self) -> usize {
        self.race_results.completed_round_count()
    }

    pub fn driver(&self, username: &str) -> Option<&Driver> {
        self.drivers
            .iter()
            .find(|driver| driver.username.eq_ignore_ascii_case(username))
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }
}

/// Outcome of a pass. `Empty` carries the report explaining why nothing was
/// produced; substituting fixture data is the caller's decision.
#[derive(Debug, Clone)]
pub enum IngestOutcome {
    Ready(Arc<SeasonSnapshot>),
    Empty(IngestReport),
}

impl IngestOutcome {
    pub fn snapshot(&self) -> Option<&Arc<SeasonSnapshot>> {
        match self {
            IngestOutcome::Ready(snapshot) => Some(snapshot),
            IngestOutcome::Empty(_) => None,
        }
    }

    pub fn report(&self) -> &IngestReport {
        match self {
            IngestOutcome::Ready(snapshot) => &snapshot.report,
            IngestOutcome::Empty(report) => report,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, IngestOutcome::Empty(_))
    }
}

/// Whole time units until the next race starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub race: String,
    pub starts_at: DateTime<Utc>,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn has_started(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Time remaining until the `next` event starts.
///
/// The event's normalized date is parsed back into a calendar date and
/// combined with the configured start time. `None` when there is no next
/// event or its date is `TBD` or unreadable. Zero once the start has passed.
pub fn next_race_countdown(
    snapshot: &SeasonSnapshot,
    start_time: NaiveTime,
    now: DateTime<Utc>,
) -> Option<Countdown> {
    let event = snapshot.next_event()?;
    let date = parse_display_date(&event.date)?;
    let starts_at = date.and_time(start_time).and_utc();

    let remaining = (starts_at - now).num_seconds().max(0);
    Some(Countdown {
        race: event.name.clone(),
        starts_at,
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
    })
}
