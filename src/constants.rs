//! Application constants for league ingestion
//!
//! Sheet names, per-sheet column minimums, the points table, round ceilings
//! and the closed lookup dictionaries used by entity resolution.

// =============================================================================
// Sheet Names
// =============================================================================

/// Default sheet names as they appear in the league spreadsheet
pub mod sheet_names {
    pub const DRIVERS: &str = "Drivers";
    pub const TEAMS: &str = "Teams";
    pub const CALENDAR: &str = "Calendar";
    pub const RACE_RESULTS: &str = "Race Results";
    pub const QUALIFYING: &str = "Qualifying";
    pub const CIRCUITS: &str = "Circuits";
}

// =============================================================================
// Column Layouts
// =============================================================================

/// Minimum field counts below which a data row is skipped as malformed.
///
/// These cover the columns up to and including each sheet's key field plus
/// the fields every downstream consumer reads. Trailing optional columns
/// default when absent.
pub mod min_fields {
    /// username .. teamCode
    pub const DRIVERS: usize = 6;
    /// name, sponsor, id
    pub const TEAMS: usize = 3;
    /// raceName, id
    pub const CIRCUITS: usize = 2;
    /// driver name
    pub const RESULTS: usize = 1;
}

/// Default primary team colour when the sheet cell is empty
pub const DEFAULT_PRIMARY_COLOR: &str = "#00f7ff";

/// Default secondary team colour when the sheet cell is empty
pub const DEFAULT_SECONDARY_COLOR: &str = "#ffffff";

/// Default active flag for teams
pub const DEFAULT_TEAM_ACTIVE: &str = "y";

/// Completion marker in the first race-results row
pub const COMPLETION_MARKER: &str = "x";

/// Literal returned for dates that are not yet known
pub const DATE_TBD: &str = "TBD";

// =============================================================================
// Round Ceilings
// =============================================================================

/// Highest round column read from the race results sheet
pub const DEFAULT_RACE_ROUND_CEILING: usize = 10;

/// Highest round column read from the qualifying sheet
pub const DEFAULT_QUALIFYING_ROUND_CEILING: usize = 11;

// =============================================================================
// Points
// =============================================================================

/// Points awarded for finishing positions P1..P10; P11 and below score zero
pub const POINTS_TABLE: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Bonus for setting the fastest lap, awarded regardless of finishing position
pub const FASTEST_LAP_BONUS: u32 = 1;

// =============================================================================
// Entity Resolution Dictionaries
// =============================================================================

/// Static team code to display name fallback, consulted when a driver's team
/// code has no row in the Teams sheet
pub const TEAM_CODE_NAMES: &[(&str, &str)] = &[
    ("RBR", "Red Bull Racing"),
    ("FER", "Ferrari"),
    ("MER", "Mercedes"),
    ("MCL", "McLaren"),
    ("AST", "Aston Martin"),
    ("ALP", "Alpine"),
    ("WIL", "Williams"),
    ("HAA", "Haas"),
    ("SAU", "Sauber"),
    ("RB", "Racing Bulls"),
];

/// Country/keyword pairs for circuit matching.
///
/// Each pair is `(keyword in the calendar race name, keyword in the circuit
/// row)`. The list is closed; extend it only by adding pairs.
pub const CIRCUIT_KEYWORDS: &[(&str, &str)] = &[
    ("germany", "germany"),
    ("germany", "hockenheim"),
    ("germany", "nurburgring"),
    ("australia", "australia"),
    ("australia", "melbourne"),
    ("japan", "japan"),
    ("japan", "suzuka"),
    ("brazil", "brazil"),
    ("brazil", "interlagos"),
    ("usa", "usa"),
    ("usa", "united states"),
    ("usa", "austin"),
    ("britain", "britain"),
    ("britain", "british"),
    ("britain", "silverstone"),
    ("italy", "italy"),
    ("italy", "italian"),
    ("italy", "monza"),
    ("monaco", "monaco"),
    ("monaco", "monte carlo"),
    ("spain", "spain"),
    ("spain", "spanish"),
    ("spain", "barcelona"),
];

/// Placeholder location for races without a matching circuit row
pub const PLACEHOLDER_LOCATION: &str = "TBA";

// =============================================================================
// Runtime Defaults
// =============================================================================

/// Per-sheet fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Race start time of day (UTC) used by the countdown
pub const DEFAULT_RACE_START_TIME: &str = "20:00";

/// Query parameter naming the sheet for HTTP sources
pub const DEFAULT_SHEET_PARAM: &str = "sheet";

/// Application directory name under the user config directory
pub const APP_DIR_NAME: &str = "league-standings";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
