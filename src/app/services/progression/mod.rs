//! Round-by-round championship progression
//!
//! Each row carries one [`RoundPoints`] per known round: rounds up to the
//! completed count hold the points scored and the running total, later rounds
//! are [`RoundPoints::NotRun`]. A driver's final cumulative total equals their
//! standings points.
//!
//! ## Architecture
//!
//! - [`drivers`] - per-driver points from the race results grid
//! - [`constructors`] - driver rows summed per constructor, with a repair
//!   pass for constructors whose summed progression disagrees with standings

pub mod constructors;
pub mod drivers;

#[cfg(test)]
pub mod tests;

pub use constructors::{ConstructorInputs, compute_constructor_progression};
pub use drivers::compute_driver_progression;

use crate::app::models::RoundPoints;

/// Round entries and total for points scored in completed rounds.
///
/// `scored[r - 1]` holds round `r`; rounds past `scored.len()` up to
/// `round_count` are not run.
pub(crate) fn accumulate(scored: &[u32], round_count: usize) -> (Vec<RoundPoints>, u32) {
    let mut cumulative = 0;
    let rounds = (0..round_count.max(scored.len()))
        .map(|index| match scored.get(index) {
            Some(&points) => {
                cumulative += points;
                RoundPoints::Scored { points, cumulative }
            }
            None => RoundPoints::NotRun,
        })
        .collect();
    (rounds, cumulative)
}
