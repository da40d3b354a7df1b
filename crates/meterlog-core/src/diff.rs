//! Period-over-period consumption deltas
//!
//! Computes, for each reading in a window, how much each counter advanced
//! since the chronologically previous reading in the same window.

use crate::models::{Reading, ReadingWithDiff};

/// Pair each reading with its per-metric delta against the next-older
/// reading in the window.
///
/// The window must be ordered by date descending (most recent first), which
/// is how paginated listings come out of the store. The oldest entry of the
/// window gets `None` deltas: its predecessor may lie outside the window, so
/// an absent delta is the only honest answer.
pub fn with_diffs(window: &[Reading]) -> Vec<ReadingWithDiff> {
    window
        .iter()
        .enumerate()
        .map(|(i, reading)| {
            let previous = window.get(i + 1);

            ReadingWithDiff {
                reading: reading.clone(),
                diff_electricity_high: previous
                    .map(|p| reading.electricity_high - p.electricity_high),
                diff_electricity_low: previous.map(|p| reading.electricity_low - p.electricity_low),
                diff_gas: previous.map(|p| reading.gas - p.gas),
                diff_water: previous.map(|p| reading.water - p.water),
            }
        })
        .collect()
}
