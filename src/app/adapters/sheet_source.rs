//! Sheet text sources
//!
//! A [`SheetTextSource`] returns the raw CSV text of one named sheet. Sources
//! never fail at the trait boundary: a missing file, a transport error or a
//! non-success response is logged and comes back as empty text, which the
//! ingestion pass treats as an unavailable sheet.
//!
//! ## Implementations
//!
//! - [`DirectorySource`] - `<dir>/<sheet>.csv` files on disk
//! - [`HttpSource`] - a CSV export endpoint with the sheet name in the query
//! - [`StaticSource`] - in-memory sheet text

use crate::config::SourceConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("league-standings/", env!("CARGO_PKG_VERSION"));

/// Raw text of named sheets
#[async_trait]
pub trait SheetTextSource: Send + Sync {
    /// CSV text of a sheet, or `""` if it could not be fetched
    async fn fetch_sheet_text(&self, sheet: &str) -> String;
}

/// Reads `<dir>/<sheet>.csv`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.root.join(format!("{}.csv", sheet))
    }

    async fn read(&self, sheet: &str) -> Result<String> {
        let path = self.sheet_path(sheet);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
    }
}

#[async_trait]
impl SheetTextSource for DirectorySource {
    async fn fetch_sheet_text(&self, sheet: &str) -> String {
        match self.read(sheet).await {
            Ok(text) => {
                debug!("Read sheet '{}' ({} bytes)", sheet, text.len());
                text
            }
            Err(error) => {
                warn!("Sheet '{}' unavailable: {}", sheet, error);
                String::new()
            }
        }
    }
}

/// Fetches `<base_url>?<sheet_param>=<sheet>`
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
    sheet_param: String,
}

impl HttpSource {
    pub fn new(base_url: &str, sheet_param: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            sheet_param: sheet_param.into(),
        })
    }

    /// Export URL for one sheet
    pub fn sheet_url(&self, sheet: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(&self.sheet_param, sheet);
        url
    }

    async fn fetch(&self, sheet: &str) -> Result<String> {
        let response = self.client.get(self.sheet_url(sheet)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::source_unavailable(
                sheet,
                format!("HTTP {}", status.as_u16()),
            ));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SheetTextSource for HttpSource {
    async fn fetch_sheet_text(&self, sheet: &str) -> String {
        match self.fetch(sheet).await {
            Ok(text) => {
                debug!("Fetched sheet '{}' ({} bytes)", sheet, text.len());
                text
            }
            Err(error) => {
                warn!("Sheet '{}' unavailable: {}", sheet, error);
                String::new()
            }
        }
    }
}

/// In-memory sheets keyed by name
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    sheets: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>, text: impl Into<String>) -> Self {
        self.sheets.insert(sheet.into(), text.into());
        self
    }

    pub fn insert(&mut self, sheet: impl Into<String>, text: impl Into<String>) {
        self.sheets.insert(sheet.into(), text.into());
    }
}

#[async_trait]
impl SheetTextSource for StaticSource {
    async fn fetch_sheet_text(&self, sheet: &str) -> String {
        self.sheets.get(sheet).cloned().unwrap_or_default()
    }
}

/// Build the configured source
pub fn source_from_config(
    config: &SourceConfig,
    timeout: Duration,
) -> Result<Arc<dyn SheetTextSource>> {
    let source: Arc<dyn SheetTextSource> = match config {
        SourceConfig::Directory { path } => Arc::new(DirectorySource::new(path)),
        SourceConfig::Http {
            base_url,
            sheet_param,
        } => Arc::new(HttpSource::new(base_url, sheet_param.clone(), timeout)?),
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_directory_source_reads_csv_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Drivers.csv"), "Username\nalice\n").unwrap();
        let source = DirectorySource::new(dir.path());

        assert_eq!(source.fetch_sheet_text("Drivers").await, "Username\nalice\n");
        assert_eq!(source.fetch_sheet_text("Teams").await, "");
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new().with_sheet("Calendar", "Race,A");
        assert_eq!(source.fetch_sheet_text("Calendar").await, "Race,A");
        assert_eq!(source.fetch_sheet_text("Circuits").await, "");
    }

    #[test]
    fn test_http_sheet_url_encodes_name() {
        let source = HttpSource::new(
            "https://example.com/export?format=csv",
            "sheet",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            source.sheet_url("Race Results").as_str(),
            "https://example.com/export?format=csv&sheet=Race+Results"
        );
    }

    #[test]
    fn test_http_source_rejects_bad_url() {
        let result = HttpSource::new("not a url", "sheet", Duration::from_secs(5));
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_http_source_yields_empty_text() {
        let source =
            HttpSource::new("http://127.0.0.1:9/export", "sheet", Duration::from_secs(2)).unwrap();
        assert_eq!(source.fetch_sheet_text("Drivers").await, "");
    }

    #[test]
    fn test_source_from_config() {
        let config = SourceConfig::Http {
            base_url: "https://example.com/export".to_string(),
            sheet_param: "sheet".to_string(),
        };
        assert!(source_from_config(&config, Duration::from_secs(5)).is_ok());

        let config = SourceConfig::Http {
            base_url: "::".to_string(),
            sheet_param: "sheet".to_string(),
        };
        assert!(source_from_config(&config, Duration::from_secs(5)).is_err());
    }
}
