//! Entity resolution: free-text names to canonical records
//!
//! The league sheets are maintained independently and only ever refer to one
//! another by free text. Resolution here is heuristic and best-effort: each
//! chain is an ordered list of strategies, the first strategy that produces
//! a match wins, and candidates are always visited in source row order so
//! repeated passes over the same input resolve identically.
//!
//! ## Architecture
//!
//! - [`circuits`] - calendar race name to circuit row, with a placeholder
//!   circuit when nothing matches
//! - [`teams`] - team code to display name
//! - [`drivers`] - results-sheet driver names to driver records
//! - [`constructors`] - driver team labels to constructor standings rows

pub mod circuits;
pub mod constructors;
pub mod drivers;
pub mod teams;

#[cfg(test)]
pub mod tests;

pub use circuits::{
    CircuitMatcher, CircuitResolver, ExactRaceName, FirstToken, KeywordDictionary,
    placeholder_circuit,
};
pub use constructors::match_constructor;
pub use drivers::DriverIndex;
pub use teams::{ResolvedTeamName, TeamNameSource, resolve_team_name};
