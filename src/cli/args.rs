//! Command-line argument definitions for league-standings
//!
//! This module defines the CLI interface using the clap derive API. Global
//! flags choose the configuration file, the sheet source and verbosity;
//! subcommands choose which derived view of the season to print.

use crate::app::services::date_normalizer::DateOrder;
use crate::config::IngestConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the league standings engine
///
/// Reads the league spreadsheet (one CSV export per sheet) and prints
/// championship standings, the race calendar, round-by-round progression
/// and qualifying grids.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "league-standings",
    version,
    about = "Championship standings and progression from a racing league spreadsheet",
    long_about = "Ingests the per-sheet CSV exports of a racing league spreadsheet (drivers, \
                  teams, calendar, race results, qualifying, circuits), resolves free-text \
                  names across sheets and derives driver and constructor standings with \
                  tie-aware positions and round-by-round progression."
)]
pub struct Args {
    /// Configuration file (TOML)
    ///
    /// Defaults to league-standings/config.toml in the user configuration
    /// directory when that file exists.
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding one `<sheet>.csv` file per sheet
    #[arg(
        long = "sheets-dir",
        value_name = "DIR",
        global = true,
        conflicts_with = "sheet_url"
    )]
    pub sheets_dir: Option<PathBuf>,

    /// CSV export URL; the sheet name is appended as a query parameter
    #[arg(long = "sheet-url", value_name = "URL", global = true)]
    pub sheet_url: Option<String>,

    /// JSON file with race date and circuit overrides
    #[arg(long = "overrides", value_name = "FILE", global = true)]
    pub overrides: Option<PathBuf>,

    /// Read slash dates as day/month/year instead of month/day/year
    #[arg(long = "day-first", global = true)]
    pub day_first: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Driver (or constructor) championship standings
    Standings(StandingsArgs),
    /// Race calendar with status, circuits and the next-race countdown
    Calendar(OutputArgs),
    /// Round-by-round cumulative points
    Progression(StandingsArgs),
    /// Qualifying results grid
    Qualifying(OutputArgs),
    /// The full season snapshot as JSON
    Snapshot,
}

/// Arguments for the standings and progression commands
#[derive(Debug, Clone, Parser)]
pub struct StandingsArgs {
    /// Show constructors instead of drivers
    #[arg(long = "constructors")]
    pub constructors: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output selection shared by the display commands
#[derive(Debug, Clone, Parser)]
pub struct OutputArgs {
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON for scripting
    Json,
}

impl Commands {
    /// Output format requested by the command
    pub fn format(&self) -> OutputFormat {
        match self {
            Commands::Standings(args) | Commands::Progression(args) => args.output.format,
            Commands::Calendar(args) | Commands::Qualifying(args) => args.format,
            Commands::Snapshot => OutputFormat::Json,
        }
    }
}

impl Args {
    /// Log level implied by `-v` and `--quiet`
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether to draw the progress spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check flag values that clap cannot
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.sheets_dir {
            if !dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Sheets directory does not exist: {}",
                    dir.display()
                )));
            }
        }
        if let Some(path) = &self.overrides {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Override file does not exist: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Layer command-line flags over a loaded configuration
    pub fn apply_to(&self, mut config: IngestConfig) -> IngestConfig {
        if let Some(dir) = &self.sheets_dir {
            config = config.with_sheets_dir(dir);
        }
        if let Some(url) = &self.sheet_url {
            config = config.with_sheet_url(url);
        }
        if let Some(path) = &self.overrides {
            config = config.with_overrides_path(path);
        }
        if self.day_first {
            config = config.with_date_order(DateOrder::DayFirst);
        }
        config
    }
}
