//! Championship standings
//!
//! Standings are derived from scratch on every pass. Driver statistics are
//! accumulated over the completed rounds of the race results (poles come from
//! qualifying), then ranked by points. Constructor standings group the same
//! drivers by team code.
//!
//! Ordering is a stable sort on points alone: tied rows keep their input
//! order. The displayed championship position is tie-aware and skips ahead
//! after a tie, so three drivers tied on top are all `1` and the next one
//! is `4`.
//!
//! ## Architecture
//!
//! - [`stats`] - per-driver aggregates from result grids
//! - [`ranking`] - ordering, gaps, positions and constructor grouping

pub mod ranking;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use ranking::{
    championship_positions, compute_constructor_standings, compute_driver_standings,
};
pub use stats::compute_driver_stats;
