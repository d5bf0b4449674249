//! Manual overrides merged into a finished pass
//!
//! Overrides come from outside the spreadsheet (an admin tool or a local
//! file) and win over computed values. Keys are matched exactly: race dates
//! by event name, circuit details by circuit id or event name.

use crate::app::models::{Circuit, RaceEvent};
use crate::app::services::date_normalizer::DateNormalizer;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Replacement values for a resolved circuit; absent fields are kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitOverride {
    pub circuit_name: Option<String>,
    pub location: Option<String>,
    pub length: Option<String>,
    pub lap_record: Option<String>,
    pub description: Option<String>,
    pub track_image_url: Option<String>,
}

impl CircuitOverride {
    fn apply(&self, circuit: &mut Circuit) {
        let fields = [
            (&self.circuit_name, &mut circuit.circuit_name),
            (&self.location, &mut circuit.location),
            (&self.length, &mut circuit.length),
            (&self.lap_record, &mut circuit.lap_record),
            (&self.description, &mut circuit.description),
            (&self.track_image_url, &mut circuit.track_image_url),
        ];
        for (value, target) in fields {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
    }
}

/// Race date and circuit overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Event name to raw date text
    pub race_dates: HashMap<String, String>,
    /// Circuit id or event name to circuit details
    pub circuits: HashMap<String, CircuitOverride>,
}

impl Overrides {
    /// Load overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read override file {}", path.display()), e)
        })?;
        serde_json::from_str(&text).map_err(|source| Error::OverridesParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.race_dates.is_empty() && self.circuits.is_empty()
    }

    /// Merge overrides into built events. Overridden dates are normalized
    /// like calendar cells.
    pub fn apply(&self, events: &mut [RaceEvent], normalizer: &DateNormalizer) {
        for event in events.iter_mut() {
            if let Some(raw) = self.race_dates.get(&event.name) {
                debug!("Date override for '{}': {}", event.name, raw);
                event.raw_date = raw.clone();
                event.date = normalizer.normalize(raw).text;
            }

            let by_id = (!event.circuit.id.is_empty())
                .then(|| self.circuits.get(&event.circuit.id))
                .flatten();
            if let Some(details) = by_id.or_else(|| self.circuits.get(&event.name)) {
                debug!("Circuit override for '{}'", event.name);
                details.apply(&mut event.circuit);
            }
        }
    }
}
