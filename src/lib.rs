//! League Standings Library
//!
//! Ingestion and standings engine for racing leagues whose data lives in a
//! hand-maintained spreadsheet exported one CSV per sheet.
//!
//! This library provides tools for:
//! - Parsing loosely structured CSV sheets with quoted fields and ragged rows
//! - Mapping Drivers, Teams, Circuits, Calendar, Race Results and Qualifying
//!   sheets into typed records, skipping malformed rows
//! - Resolving free-text names across sheets with ordered fallback strategies
//! - Scoring results and deriving tie-aware driver and constructor standings
//! - Building round-by-round progression that distinguishes unrun rounds
//! - Running deduplicated ingestion passes with per-sheet timeouts and a
//!   snapshot cache

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_table;
        pub mod date_normalizer;
        pub mod entity_resolver;
        pub mod ingestor;
        pub mod points_engine;
        pub mod progression;
        pub mod sheet_adapters;
        pub mod standings;
    }
    pub mod adapters {
        pub mod sheet_source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::sheet_source::{DirectorySource, HttpSource, SheetTextSource, StaticSource};
pub use app::models::{ConstructorRow, Driver, IngestReport, RaceEvent, StandingsRow, Team};
pub use app::services::ingestor::{IngestOutcome, Ingestor, SeasonSnapshot};
pub use config::IngestConfig;
pub use error::{Error, Result};
