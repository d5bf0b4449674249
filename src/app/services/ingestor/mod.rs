//! Ingestion passes, the snapshot cache and the in-flight guard
//!
//! An [`Ingestor`] owns one sheet source, one configuration and the cache of
//! the last successful pass. A pass fetches every sheet concurrently, each
//! fetch bounded by the configured timeout, then runs the pure pipeline in
//! [`pipeline`]. A slow or failing sheet degrades to an empty table; it never
//! aborts the pass.
//!
//! At most one pass runs at a time: a refresh requested while a pass is in
//! flight joins that pass and receives its outcome. The cached snapshot is
//! replaced wholesale, and only when a pass produced data.
//!
//! ## Architecture
//!
//! - [`pipeline`] - parse, derive and assemble a snapshot from sheet text
//! - [`snapshot`] - the immutable pass result and the race countdown
//! - [`overrides`] - manual date and circuit overrides merged after a pass

pub mod overrides;
pub mod pipeline;
pub mod snapshot;

#[cfg(test)]
pub mod tests;

pub use overrides::{CircuitOverride, Overrides};
pub use pipeline::{RawSheets, build_events, build_snapshot, event_status};
pub use snapshot::{Countdown, IngestOutcome, SeasonSnapshot, next_race_countdown};

use crate::app::adapters::sheet_source::SheetTextSource;
use crate::app::models::SheetKind;
use crate::config::IngestConfig;
use chrono::Utc;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

type PassFuture = Shared<BoxFuture<'static, IngestOutcome>>;

/// Owner of the snapshot cache for one league
pub struct Ingestor {
    source: Arc<dyn SheetTextSource>,
    config: Arc<IngestConfig>,
    overrides: RwLock<Arc<Overrides>>,
    cache: RwLock<Option<Arc<SeasonSnapshot>>>,
    in_flight: Mutex<Option<PassFuture>>,
}

impl Ingestor {
    pub fn new(source: Arc<dyn SheetTextSource>, config: IngestConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
            overrides: RwLock::new(Arc::new(Overrides::default())),
            cache: RwLock::new(None),
            in_flight: Mutex::new(None),
        }
    }

    /// Start with the given overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = RwLock::new(Arc::new(overrides));
        self
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Replace the overrides; they take effect on the next pass
    pub async fn set_overrides(&self, overrides: Overrides) {
        *self.overrides.write().await = Arc::new(overrides);
    }

    /// The cached snapshot, if a pass has produced one
    pub async fn snapshot(&self) -> Option<Arc<SeasonSnapshot>> {
        self.cache.read().await.clone()
    }

    /// Drop the cached snapshot
    pub async fn invalidate(&self) {
        debug!("Invalidating cached snapshot");
        *self.cache.write().await = None;
    }

    /// The cached snapshot, or a fresh pass when there is none
    pub async fn get_or_refresh(&self) -> IngestOutcome {
        match self.snapshot().await {
            Some(snapshot) => IngestOutcome::Ready(snapshot),
            None => self.refresh().await,
        }
    }

    /// Run a pass, or join the one already in flight
    pub async fn refresh(&self) -> IngestOutcome {
        let pass = {
            let mut in_flight = self.in_flight.lock().await;
            match in_flight.as_ref() {
                Some(pass) => {
                    debug!("Joining ingestion pass already in flight");
                    pass.clone()
                }
                None => {
                    let pass = self.start_pass().await;
                    *in_flight = Some(pass.clone());
                    pass
                }
            }
        };

        let outcome = pass.clone().await;

        let mut in_flight = self.in_flight.lock().await;
        if in_flight
            .as_ref()
            .is_some_and(|current| current.ptr_eq(&pass))
        {
            *in_flight = None;
            if let IngestOutcome::Ready(snapshot) = &outcome {
                *self.cache.write().await = Some(Arc::clone(snapshot));
            }
        }
        outcome
    }

    async fn start_pass(&self) -> PassFuture {
        let source = Arc::clone(&self.source);
        let config = Arc::clone(&self.config);
        let overrides = Arc::clone(&*self.overrides.read().await);

        async move {
            info!("Starting ingestion pass");
            let raw = fetch_all(source.as_ref(), &config).await;
            build_snapshot(&raw, &config, &overrides, Utc::now())
        }
        .boxed()
        .shared()
    }
}

/// Fetch every sheet concurrently
async fn fetch_all(source: &dyn SheetTextSource, config: &IngestConfig) -> RawSheets {
    let timeout = config.fetch_timeout();
    let names = &config.sheets;

    let (drivers, teams, calendar, race_results, qualifying, circuits) = futures::join!(
        fetch_sheet(source, names.name(SheetKind::Drivers), timeout),
        fetch_sheet(source, names.name(SheetKind::Teams), timeout),
        fetch_sheet(source, names.name(SheetKind::Calendar), timeout),
        fetch_sheet(source, names.name(SheetKind::RaceResults), timeout),
        fetch_sheet(source, names.name(SheetKind::Qualifying), timeout),
        fetch_sheet(source, names.name(SheetKind::Circuits), timeout),
    );

    RawSheets::new()
        .with(SheetKind::Drivers, drivers)
        .with(SheetKind::Teams, teams)
        .with(SheetKind::Calendar, calendar)
        .with(SheetKind::RaceResults, race_results)
        .with(SheetKind::Qualifying, qualifying)
        .with(SheetKind::Circuits, circuits)
}

/// One sheet's text, or `""` if the fetch outlives the timeout
async fn fetch_sheet(source: &dyn SheetTextSource, sheet: &str, timeout: Duration) -> String {
    match tokio::time::timeout(timeout, source.fetch_sheet_text(sheet)).await {
        Ok(text) => text,
        Err(_) => {
            warn!("Sheet '{}' timed out after {:?}", sheet, timeout);
            String::new()
        }
    }
}
