//! Error handling for league ingestion.
//!
//! Only the outer layers (configuration, sheet sources, the CLI) produce
//! errors. The ingestion core recovers locally and records what it recovered
//! from as [`IngestIssue`](crate::app::models::IngestIssue) values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Error types for configuration loading and sheet fetching
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Override file could not be parsed
    #[error("Invalid override file {path}: {source}")]
    OverridesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A sheet could not be fetched
    #[error("Sheet '{sheet}' unavailable: {reason}")]
    SourceUnavailable { sheet: String, reason: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Sheet base URL could not be parsed
    #[error("Invalid sheet URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a source unavailable error
    pub fn source_unavailable(sheet: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            sheet: sheet.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
