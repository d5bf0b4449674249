//! Command implementations for the league-standings CLI
//!
//! Every command runs one ingestion pass against the configured sheet source,
//! then prints one view of the resulting snapshot as a table or as JSON.
//! Ingestion never fails outright: unreadable sheets degrade to empty tables
//! and are listed in the pass report. A pass that yields no data at all is
//! reported with a distinct exit status.

mod render;

use crate::app::adapters::sheet_source::source_from_config;
use crate::app::models::{IngestReport, RaceEvent};
use crate::app::services::ingestor::{
    Countdown, IngestOutcome, Ingestor, Overrides, SeasonSnapshot, next_race_countdown,
};
use crate::cli::args::{Args, Commands, OutputFormat};
use crate::config::IngestConfig;
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How a command run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// A snapshot was produced and printed
    Success,
    /// The pass produced no data
    Empty,
}

impl RunStatus {
    /// Process exit code for this status
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Empty => 2,
        }
    }
}

/// Calendar JSON: events plus the countdown to the next race
#[derive(Debug, Serialize)]
struct CalendarView<'a> {
    events: &'a [RaceEvent],
    countdown: Option<Countdown>,
}

/// Main command runner
///
/// 1. Set up logging and load the layered configuration
/// 2. Build the sheet source and run one ingestion pass
/// 3. Print the requested view, or a notice when the pass was empty
pub async fn run(args: Args) -> Result<RunStatus> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let Some(command) = args.command.clone() else {
        bail!("No command given");
    };

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);
    let overrides = load_overrides(&config)?;

    let source = source_from_config(&config.source, config.fetch_timeout())
        .context("Failed to set up sheet source")?;
    let ingestor = Ingestor::new(source, config.clone()).with_overrides(overrides);

    let spinner = if args.show_progress() {
        Some(spinner("Reading league sheets...")?)
    } else {
        None
    };

    let start_time = Instant::now();
    let outcome = ingestor.refresh().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    info!("Ingestion pass finished in {:?}", start_time.elapsed());

    let snapshot = match outcome {
        IngestOutcome::Ready(snapshot) => snapshot,
        IngestOutcome::Empty(report) => {
            print_empty_notice(&report);
            return Ok(RunStatus::Empty);
        }
    };

    log_issues(&snapshot.report);
    if args.verbose > 0 && command.format() == OutputFormat::Table {
        eprintln!("{}", render::report_summary(&snapshot.report));
    }

    let output = render_command(&command, &snapshot, &config, Utc::now())?;
    println!("{}", output.trim_end());
    Ok(RunStatus::Success)
}

/// Render one command's view of a snapshot
pub fn render_command(
    command: &Commands,
    snapshot: &SeasonSnapshot,
    config: &IngestConfig,
    now: DateTime<Utc>,
) -> Result<String> {
    let format = command.format();
    let output = match command {
        Commands::Standings(args) if args.constructors => match format {
            OutputFormat::Table => render::constructor_standings(&snapshot.constructor_standings),
            OutputFormat::Json => to_json(&snapshot.constructor_standings)?,
        },
        Commands::Standings(_) => match format {
            OutputFormat::Table => render::driver_standings(&snapshot.driver_standings),
            OutputFormat::Json => to_json(&snapshot.driver_standings)?,
        },
        Commands::Calendar(_) => {
            let countdown = next_race_countdown(snapshot, config.race_start()?, now);
            match format {
                OutputFormat::Table => render::calendar(&snapshot.events, countdown.as_ref()),
                OutputFormat::Json => to_json(&CalendarView {
                    events: &snapshot.events,
                    countdown,
                })?,
            }
        }
        Commands::Progression(args) => {
            let table = if args.constructors {
                &snapshot.constructor_progression
            } else {
                &snapshot.driver_progression
            };
            match format {
                OutputFormat::Table => render::progression(table),
                OutputFormat::Json => to_json(table)?,
            }
        }
        Commands::Qualifying(_) => match format {
            OutputFormat::Table => render::qualifying(&snapshot.qualifying),
            OutputFormat::Json => to_json(&snapshot.qualifying)?,
        },
        Commands::Snapshot => to_json(snapshot)?,
    };
    Ok(output)
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("league_standings={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> args)
fn load_configuration(args: &Args) -> Result<IngestConfig> {
    let config = IngestConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    let config = args.apply_to(config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn load_overrides(config: &IngestConfig) -> Result<Overrides> {
    match &config.overrides_path {
        Some(path) => {
            let overrides = Overrides::load(path)
                .with_context(|| format!("Failed to load overrides from {}", path.display()))?;
            info!(
                "Loaded {} date and {} circuit overrides",
                overrides.race_dates.len(),
                overrides.circuits.len()
            );
            Ok(overrides)
        }
        None => Ok(Overrides::default()),
    }
}

fn log_issues(report: &IngestReport) {
    for sheet in report.unavailable_sheets() {
        warn!("The {} sheet could not be read; it was treated as empty", sheet);
    }
    for issue in &report.issues {
        debug!("Ingest issue: {}", issue);
    }
    if !report.issues.is_empty() {
        info!("Pass recovered from {} issues", report.issues.len());
    }
}

fn print_empty_notice(report: &IngestReport) {
    eprintln!(
        "{}",
        "No league data available: every sheet was empty or unreadable"
            .yellow()
            .bold()
    );
    let unavailable = report.unavailable_sheets();
    if !unavailable.is_empty() {
        let names: Vec<String> = unavailable.iter().map(ToString::to_string).collect();
        eprintln!("  Unavailable: {}", names.join(", "));
    }
}
