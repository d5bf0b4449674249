//! Data models for league ingestion
//!
//! This module contains the canonical domain model built from the league
//! spreadsheet (drivers, teams, circuits, race events, results) together with
//! the derived standings and progression tables and the per-pass ingest report.
//! Every value here belongs to one ingestion pass and is never mutated after
//! the pass that produced it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Sheets
// =============================================================================

/// The source sheets read by one ingestion pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    Drivers,
    Teams,
    Calendar,
    RaceResults,
    Qualifying,
    Circuits,
}

impl SheetKind {
    /// Every sheet, in fetch order
    pub const ALL: [SheetKind; 6] = [
        SheetKind::Drivers,
        SheetKind::Teams,
        SheetKind::Calendar,
        SheetKind::RaceResults,
        SheetKind::Qualifying,
        SheetKind::Circuits,
    ];
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SheetKind::Drivers => "drivers",
            SheetKind::Teams => "teams",
            SheetKind::Calendar => "calendar",
            SheetKind::RaceResults => "race results",
            SheetKind::Qualifying => "qualifying",
            SheetKind::Circuits => "circuits",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Drivers and Teams
// =============================================================================

/// Season statistics accumulated for a driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStats {
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
    pub poles: u32,
    pub fastest_laps: u32,
    pub dnfs: u32,
    pub races_attended: u32,
}

/// A driver row from the Drivers sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique, non-empty username; the join key for results rows
    pub username: String,
    pub id: String,
    pub short_display: String,
    pub discord: String,
    pub nationality: String,
    /// Team code; empty means the driver has no team
    pub team_code: String,
    /// Seat label from the sheet (e.g. `Main`, `Reserve`)
    pub position: String,
    pub active: bool,
    pub photo_url: String,
    pub number: String,
    pub socials: String,
    pub description: String,
    pub value: String,
    #[serde(default)]
    pub stats: DriverStats,
}

impl Driver {
    /// Driver carried over from a results row that has no Drivers sheet entry
    pub fn from_results_name(name: &str) -> Self {
        Self {
            username: name.to_string(),
            id: String::new(),
            short_display: String::new(),
            discord: String::new(),
            nationality: String::new(),
            team_code: String::new(),
            position: String::new(),
            active: true,
            photo_url: String::new(),
            number: String::new(),
            socials: String::new(),
            description: String::new(),
            value: String::new(),
            stats: DriverStats::default(),
        }
    }

    /// Whether the driver belongs to a team
    pub fn has_team(&self) -> bool {
        !self.team_code.trim().is_empty()
    }

    /// Racing number without a leading `#`, if it parses
    pub fn racing_number(&self) -> Option<u32> {
        self.number.trim().trim_start_matches('#').parse().ok()
    }
}

/// A team row from the Teams sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub sponsor: String,
    /// Unique, non-empty team code
    pub id: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub logo_url: String,
    pub car_image_url: String,
    pub driver1: String,
    pub driver2: String,
    pub reserve1: String,
    pub reserve2: String,
    pub owner: String,
    pub principal: String,
    pub engineer: String,
    pub description: String,
    pub active: bool,
}

impl Team {
    /// Free-text driver names listed on the roster (race seats, then reserves)
    pub fn roster(&self) -> impl Iterator<Item = &str> {
        [&self.driver1, &self.driver2, &self.reserve1, &self.reserve2]
            .into_iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
    }
}

// =============================================================================
// Circuits and Calendar
// =============================================================================

/// A circuit row from the Circuits sheet, or a placeholder for an unmatched race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Free-text race name; the join key against calendar names
    pub race_name: String,
    pub id: String,
    pub location: String,
    pub length: String,
    pub lap_record: String,
    pub description: String,
    pub circuit_name: String,
    pub track_image_url: String,
    /// True when no circuit row matched and this value was synthesized
    #[serde(default)]
    pub placeholder: bool,
}

/// One calendar column: a race name with its raw date and round label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Sheet column the entry came from (data starts at column 1)
    pub column: usize,
    pub name: String,
    pub raw_date: String,
    pub round_label: String,
}

/// Race status relative to the completed-round count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Completed,
    Next,
    Upcoming,
}

impl fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceStatus::Completed => f.write_str("completed"),
            RaceStatus::Next => f.write_str("next"),
            RaceStatus::Upcoming => f.write_str("upcoming"),
        }
    }
}

/// A scheduled race with its normalized date, status and resolved circuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEvent {
    /// 1-based position in the calendar
    pub round: usize,
    pub round_label: String,
    pub name: String,
    pub raw_date: String,
    /// `Month D, YYYY`, `TBD`, or the raw text when it could not be parsed
    pub date: String,
    pub status: RaceStatus,
    pub circuit: Circuit,
}

// =============================================================================
// Results
// =============================================================================

/// Non-finishing classification encoded in a result cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NonFinish {
    Dnf,
    Dns,
    Dsq,
}

/// A result cell decoded into position, fastest-lap flag and non-finish class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    pub raw: String,
    pub position: Option<u32>,
    pub fastest_lap: bool,
    pub non_finish: Option<NonFinish>,
}

impl ParsedResult {
    /// Classified finish at the given position
    pub fn finished_at(&self, max_position: u32) -> bool {
        self.non_finish.is_none() && self.position.is_some_and(|p| p >= 1 && p <= max_position)
    }

    pub fn is_win(&self) -> bool {
        self.finished_at(1)
    }

    pub fn is_podium(&self) -> bool {
        self.finished_at(3)
    }
}

/// Column header of one round in a results sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundHeader {
    /// 1-based round number (equal to the sheet column)
    pub round: usize,
    pub name: String,
    pub label: String,
}

/// One driver's row of result cells, indexed by round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Free-text driver name from column 0
    pub driver: String,
    /// `results[r - 1]` holds round `r`; `None` for an empty cell
    pub results: Vec<Option<ParsedResult>>,
}

impl ResultRow {
    /// Result for a 1-based round, if the cell was non-empty
    pub fn result(&self, round: usize) -> Option<&ParsedResult> {
        round
            .checked_sub(1)
            .and_then(|index| self.results.get(index))
            .and_then(Option::as_ref)
    }
}

/// Race results sheet: completion markers, round headers and driver rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResultsTable {
    /// Round numbers carrying a completion marker, in column order
    pub completed_rounds: Vec<usize>,
    pub rounds: Vec<RoundHeader>,
    pub rows: Vec<ResultRow>,
}

impl RaceResultsTable {
    /// Number of completion markers; rounds `1..=count` are treated as run
    pub fn completed_round_count(&self) -> usize {
        self.completed_rounds.len()
    }

    /// Whether a round counts as completed
    pub fn is_completed(&self, round: usize) -> bool {
        round >= 1 && round <= self.completed_round_count()
    }

    /// Number of round columns known to the sheet
    pub fn total_rounds(&self) -> usize {
        self.rounds
            .iter()
            .map(|header| header.round)
            .max()
            .unwrap_or(0)
            .max(self.completed_round_count())
    }

    pub fn is_empty(&self) -> bool {
        self.completed_rounds.is_empty() && self.rounds.is_empty() && self.rows.is_empty()
    }
}

/// Qualifying sheet: round headers and driver rows, display only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifyingTable {
    pub rounds: Vec<RoundHeader>,
    pub rows: Vec<ResultRow>,
}

impl QualifyingTable {
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty() && self.rows.is_empty()
    }
}

// =============================================================================
// Standings and Progression
// =============================================================================

/// One driver's line in the championship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// Tie-aware position: equal points share a position, the next distinct
    /// total skips ahead by the number of tied rows
    pub position: usize,
    pub driver: String,
    pub team_code: String,
    pub team_name: String,
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
    /// Leader's points minus this row's points
    pub gap: u32,
}

/// One constructor's line in the championship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorRow {
    pub position: usize,
    pub team_code: String,
    pub team_name: String,
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
    /// Usernames of the drivers whose points were summed
    pub members: Vec<String>,
    pub gap: u32,
}

/// Points for one round of a progression row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RoundPoints {
    /// The round has not been run yet; distinct from scoring zero
    NotRun,
    Scored { points: u32, cumulative: u32 },
}

impl RoundPoints {
    /// Points scored in the round, `None` if it has not been run
    pub fn points(&self) -> Option<u32> {
        match self {
            RoundPoints::NotRun => None,
            RoundPoints::Scored { points, .. } => Some(*points),
        }
    }

    pub fn cumulative(&self) -> Option<u32> {
        match self {
            RoundPoints::NotRun => None,
            RoundPoints::Scored { cumulative, .. } => Some(*cumulative),
        }
    }
}

/// Round-by-round points for one driver or constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRow {
    pub name: String,
    pub team_code: String,
    /// `rounds[r - 1]` holds round `r`
    pub rounds: Vec<RoundPoints>,
    pub total: u32,
}

/// Progression for every driver or every constructor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionTable {
    pub rounds: Vec<RoundHeader>,
    pub completed_rounds: usize,
    pub rows: Vec<ProgressionRow>,
}

impl ProgressionTable {
    pub fn row(&self, name: &str) -> Option<&ProgressionRow> {
        self.rows.iter().find(|row| row.name == name)
    }
}

// =============================================================================
// Ingest Report
// =============================================================================

/// Which kind of entity a free-text reference failed to resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Circuit,
    Team,
    Driver,
    ConstructorRound,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Circuit => f.write_str("circuit"),
            ReferenceKind::Team => f.write_str("team"),
            ReferenceKind::Driver => f.write_str("driver"),
            ReferenceKind::ConstructorRound => f.write_str("constructor round"),
        }
    }
}

/// A condition the pass recovered from locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum IngestIssue {
    /// Fetch failed or timed out; the sheet was treated as empty
    SourceUnavailable { sheet: SheetKind },
    /// Row had too few fields and was skipped
    MalformedRow {
        sheet: SheetKind,
        row: usize,
        fields: usize,
        required: usize,
    },
    /// A name did not resolve; a placeholder or fallback was used
    UnresolvedReference { kind: ReferenceKind, name: String },
    /// A date cell could not be parsed; the raw text was kept
    UnparseableDate { race: String, raw: String },
}

impl fmt::Display for IngestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestIssue::SourceUnavailable { sheet } => {
                write!(f, "{} sheet unavailable", sheet)
            }
            IngestIssue::MalformedRow {
                sheet,
                row,
                fields,
                required,
            } => write!(
                f,
                "{} row {}: {} fields, {} required",
                sheet, row, fields, required
            ),
            IngestIssue::UnresolvedReference { kind, name } => {
                write!(f, "unresolved {} '{}'", kind, name)
            }
            IngestIssue::UnparseableDate { race, raw } => {
                write!(f, "unparseable date '{}' for {}", raw, race)
            }
        }
    }
}

/// Per-sheet row counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetStats {
    /// Non-blank lines parsed from the sheet text
    pub rows_read: usize,
    /// Typed records produced
    pub records: usize,
    /// Rows skipped as malformed or keyless
    pub rows_skipped: usize,
}

/// Everything one pass recovered from, plus row counts per sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    pub sheets: BTreeMap<SheetKind, SheetStats>,
    pub issues: Vec<IngestIssue>,
}

impl IngestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, issue: IngestIssue) {
        self.issues.push(issue);
    }

    pub fn stats_mut(&mut self, sheet: SheetKind) -> &mut SheetStats {
        self.sheets.entry(sheet).or_default()
    }

    pub fn stats(&self, sheet: SheetKind) -> SheetStats {
        self.sheets.get(&sheet).copied().unwrap_or_default()
    }

    /// Sheets whose fetch failed during the pass
    pub fn unavailable_sheets(&self) -> Vec<SheetKind> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                IngestIssue::SourceUnavailable { sheet } => Some(*sheet),
                _ => None,
            })
            .collect()
    }
}
