//! Circuit matching for calendar race names
//!
//! Strategies, in precedence order:
//! 1. [`ExactRaceName`] - case-insensitive equality with the circuit's race name
//! 2. [`FirstToken`] - the target contains the first word of the candidate's
//!    race name
//! 3. [`KeywordDictionary`] - a country keyword in the target pairs with a
//!    venue keyword in the candidate
//!
//! When all three fail the resolver synthesizes a placeholder circuit.

use crate::app::models::{Circuit, IngestIssue, IngestReport, ReferenceKind};
use crate::constants::{CIRCUIT_KEYWORDS, PLACEHOLDER_LOCATION};
use tracing::debug;

/// One circuit matching strategy
pub trait CircuitMatcher: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// First candidate (in row order) this strategy accepts for `target`
    fn try_match<'a>(&self, target: &str, candidates: &'a [Circuit]) -> Option<&'a Circuit>;
}

/// Case-insensitive full-string equality on the race name
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactRaceName;

impl CircuitMatcher for ExactRaceName {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn try_match<'a>(&self, target: &str, candidates: &'a [Circuit]) -> Option<&'a Circuit> {
        let target = target.trim();
        candidates
            .iter()
            .find(|circuit| circuit.race_name.trim().eq_ignore_ascii_case(target))
    }
}

/// Target contains the first whitespace-delimited token of the race name
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstToken;

impl CircuitMatcher for FirstToken {
    fn name(&self) -> &'static str {
        "first-token"
    }

    fn try_match<'a>(&self, target: &str, candidates: &'a [Circuit]) -> Option<&'a Circuit> {
        let target = target.to_lowercase();
        candidates.iter().find(|circuit| {
            circuit
                .race_name
                .split_whitespace()
                .next()
                .is_some_and(|token| target.contains(&token.to_lowercase()))
        })
    }
}

/// Closed country/venue keyword dictionary
#[derive(Debug, Clone, Copy)]
pub struct KeywordDictionary {
    pairs: &'static [(&'static str, &'static str)],
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self {
            pairs: CIRCUIT_KEYWORDS,
        }
    }
}

impl KeywordDictionary {
    pub fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    fn candidate_text(circuit: &Circuit) -> String {
        format!(
            "{} {} {} {}",
            circuit.race_name, circuit.circuit_name, circuit.location, circuit.id
        )
        .to_lowercase()
    }
}

impl CircuitMatcher for KeywordDictionary {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn try_match<'a>(&self, target: &str, candidates: &'a [Circuit]) -> Option<&'a Circuit> {
        let target = target.to_lowercase();
        let keywords: Vec<&str> = self
            .pairs
            .iter()
            .filter(|(country, _)| target.contains(country))
            .map(|(_, venue)| *venue)
            .collect();
        if keywords.is_empty() {
            return None;
        }

        candidates.iter().find(|circuit| {
            let text = Self::candidate_text(circuit);
            keywords.iter().any(|venue| text.contains(venue))
        })
    }
}

/// Synthetic circuit for a race with no matching circuit row.
///
/// `Atlantis Grand Prix` becomes `Atlantis Circuit` at location `TBA`.
pub fn placeholder_circuit(race_name: &str) -> Circuit {
    let stem = race_name
        .replace("Grand Prix", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let circuit_name = if stem.is_empty() {
        "Circuit".to_string()
    } else {
        format!("{} Circuit", stem)
    };

    Circuit {
        race_name: race_name.trim().to_string(),
        id: String::new(),
        location: PLACEHOLDER_LOCATION.to_string(),
        length: String::new(),
        lap_record: String::new(),
        description: String::new(),
        circuit_name,
        track_image_url: String::new(),
        placeholder: true,
    }
}

/// Ordered chain of circuit matchers
pub struct CircuitResolver {
    matchers: Vec<Box<dyn CircuitMatcher>>,
}

impl Default for CircuitResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitResolver {
    /// The standard chain: exact, first token, keyword dictionary
    pub fn new() -> Self {
        Self::with_matchers(vec![
            Box::new(ExactRaceName),
            Box::new(FirstToken),
            Box::new(KeywordDictionary::default()),
        ])
    }

    pub fn with_matchers(matchers: Vec<Box<dyn CircuitMatcher>>) -> Self {
        Self { matchers }
    }

    /// Matched circuit row, if any strategy accepts one
    pub fn find<'a>(&self, target: &str, candidates: &'a [Circuit]) -> Option<&'a Circuit> {
        self.matchers.iter().find_map(|matcher| {
            let found = matcher.try_match(target, candidates)?;
            debug!(
                "Circuit '{}' matched '{}' by {}",
                target,
                found.race_name,
                matcher.name()
            );
            Some(found)
        })
    }

    /// Matched circuit, or a placeholder recorded as an unresolved reference
    pub fn resolve(&self, target: &str, candidates: &[Circuit], report: &mut IngestReport) -> Circuit {
        match self.find(target, candidates) {
            Some(circuit) => circuit.clone(),
            None => {
                debug!("No circuit for '{}', using placeholder", target);
                report.record(IngestIssue::UnresolvedReference {
                    kind: ReferenceKind::Circuit,
                    name: target.to_string(),
                });
                placeholder_circuit(target)
            }
        }
    }
}
