//! Configuration management and validation.
//!
//! Provides the ingestion configuration: sheet names, round ceilings, the
//! slash-date convention, fetch behaviour and where the sheets come from.
//! Values are read from a TOML file (every field optional) and then
//! overridden by command-line flags through the `with_*` builders.

use crate::app::models::SheetKind;
use crate::app::services::date_normalizer::DateOrder;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_QUALIFYING_ROUND_CEILING,
    DEFAULT_RACE_ROUND_CEILING, DEFAULT_RACE_START_TIME, DEFAULT_SHEET_PARAM, sheet_names,
};
use crate::{Error, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Format of `race_start_time`
const START_TIME_FORMAT: &str = "%H:%M";

/// Sheet names as they appear in the league spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetNames {
    pub drivers: String,
    pub teams: String,
    pub calendar: String,
    pub race_results: String,
    pub qualifying: String,
    pub circuits: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            drivers: sheet_names::DRIVERS.to_string(),
            teams: sheet_names::TEAMS.to_string(),
            calendar: sheet_names::CALENDAR.to_string(),
            race_results: sheet_names::RACE_RESULTS.to_string(),
            qualifying: sheet_names::QUALIFYING.to_string(),
            circuits: sheet_names::CIRCUITS.to_string(),
        }
    }
}

impl SheetNames {
    /// Configured name for a sheet
    pub fn name(&self, sheet: SheetKind) -> &str {
        match sheet {
            SheetKind::Drivers => &self.drivers,
            SheetKind::Teams => &self.teams,
            SheetKind::Calendar => &self.calendar,
            SheetKind::RaceResults => &self.race_results,
            SheetKind::Qualifying => &self.qualifying,
            SheetKind::Circuits => &self.circuits,
        }
    }
}

/// Where sheet text is fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// One `<sheet>.csv` file per sheet in a directory
    Directory { path: PathBuf },
    /// A CSV export endpoint taking the sheet name as a query parameter
    Http {
        base_url: String,
        #[serde(default = "default_sheet_param")]
        sheet_param: String,
    },
}

fn default_sheet_param() -> String {
    DEFAULT_SHEET_PARAM.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Directory {
            path: PathBuf::from("sheets"),
        }
    }
}

/// Configuration for one league's ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Sheet names in the source spreadsheet
    pub sheets: SheetNames,

    /// Highest round column read from the race results sheet
    pub race_round_ceiling: usize,

    /// Highest round column read from the qualifying sheet
    pub qualifying_round_ceiling: usize,

    /// Field order for `a/b/c` dates, applied to every calendar cell
    pub date_order: DateOrder,

    /// Per-sheet fetch timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Race start time of day (UTC, `HH:MM`) used by the countdown
    pub race_start_time: String,

    /// Sheet text source
    pub source: SourceConfig,

    /// Optional JSON file with date and circuit overrides
    pub overrides_path: Option<PathBuf>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            sheets: SheetNames::default(),
            race_round_ceiling: DEFAULT_RACE_ROUND_CEILING,
            qualifying_round_ceiling: DEFAULT_QUALIFYING_ROUND_CEILING,
            date_order: DateOrder::default(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            race_start_time: DEFAULT_RACE_START_TIME.to_string(),
            source: SourceConfig::default(),
            overrides_path: None,
        }
    }
}

impl IngestConfig {
    /// Default configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let config = toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load an explicit file, else the default location if it exists, else
    /// built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Check the configuration for values ingestion cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.race_round_ceiling == 0 || self.qualifying_round_ceiling == 0 {
            return Err(Error::configuration("Round ceilings must be at least 1"));
        }
        if let Some(sheet) = SheetKind::ALL
            .iter()
            .find(|&&sheet| self.sheets.name(sheet).trim().is_empty())
        {
            return Err(Error::configuration(format!(
                "Sheet name for {} must not be empty",
                sheet
            )));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(Error::configuration("Fetch timeout must be at least 1 second"));
        }
        self.race_start()?;

        match &self.source {
            SourceConfig::Directory { path } if path.as_os_str().is_empty() => {
                Err(Error::configuration("Sheet directory must not be empty"))
            }
            SourceConfig::Http { base_url, .. } if base_url.trim().is_empty() => {
                Err(Error::configuration("Sheet URL must not be empty"))
            }
            SourceConfig::Http { sheet_param, .. } if sheet_param.trim().is_empty() => {
                Err(Error::configuration("Sheet query parameter must not be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Parsed race start time
    pub fn race_start(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(self.race_start_time.trim(), START_TIME_FORMAT).map_err(|_| {
            Error::configuration(format!(
                "Invalid race start time '{}', expected HH:MM",
                self.race_start_time
            ))
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Read sheets from `<dir>/<sheet>.csv`
    pub fn with_sheets_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = SourceConfig::Directory { path: path.into() };
        self
    }

    /// Fetch sheets over HTTP, keeping a configured query parameter name
    pub fn with_sheet_url(mut self, base_url: impl Into<String>) -> Self {
        let sheet_param = match &self.source {
            SourceConfig::Http { sheet_param, .. } => sheet_param.clone(),
            SourceConfig::Directory { .. } => default_sheet_param(),
        };
        self.source = SourceConfig::Http {
            base_url: base_url.into(),
            sheet_param,
        };
        self
    }

    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    pub fn with_overrides_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides_path = Some(path.into());
        self
    }

    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Set the race results and qualifying round ceilings
    pub fn with_round_ceilings(mut self, race: usize, qualifying: usize) -> Self {
        self.race_round_ceiling = race;
        self.qualifying_round_ceiling = qualifying;
        self
    }

    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    pub fn with_race_start_time(mut self, time: impl Into<String>) -> Self {
        self.race_start_time = time.into();
        self
    }

    pub fn with_sheets(mut self, sheets: SheetNames) -> Self {
        self.sheets = sheets;
        self
    }
}
