//! Grid classification.
//!
//! Combines the directional run scanner across the whole grid into a binary
//! [`Verdict`]: a table is flagged when at least [`FLAG_THRESHOLD`] qualifying
//! runs exist anywhere in it, counting overlapping runs at different starting
//! cells or different directions as distinct matches. A single cell may
//! contribute up to four matches, one per direction.
//!
//! The scan stops as soon as the threshold is reached, including mid-cell.
//! Early termination is a performance optimization only; [`run_count`]
//! provides the exhaustive count so tests can prove the verdict is identical
//! either way.

use tracing::debug;

use crate::grid::Grid;
use crate::scan::{run_starts_at, Direction};
use crate::Verdict;

/// Minimum number of qualifying runs for a grid to classify as flagged.
pub const FLAG_THRESHOLD: u32 = 2;

/// Classifies a validated grid.
///
/// Iterates cells in row-major order, evaluating all four directional
/// predicates at each cell, and returns [`Verdict::Flagged`] as soon as the
/// match count reaches [`FLAG_THRESHOLD`]. Read-only; the caller owns any
/// cache interaction.
#[must_use]
pub fn classify(grid: &Grid) -> Verdict {
    let mut matches: u32 = 0;

    'scan: for row in 0..grid.side() {
        for col in 0..grid.side() {
            for direction in Direction::all() {
                if run_starts_at(grid, row, col, *direction) {
                    matches += 1;
                    if matches >= FLAG_THRESHOLD {
                        break 'scan;
                    }
                }
            }
        }
    }

    let verdict = if matches >= FLAG_THRESHOLD {
        Verdict::Flagged
    } else {
        Verdict::Ordinary
    };
    debug!(matches, side = grid.side(), %verdict, "grid scan complete");
    verdict
}

/// Counts every qualifying run in the grid, with no early exit.
///
/// Diagnostic companion to [`classify`]; the two always agree:
/// `classify(g).is_flagged() == (run_count(g) >= FLAG_THRESHOLD)`.
#[must_use]
pub fn run_count(grid: &Grid) -> u32 {
    let mut matches: u32 = 0;

    for row in 0..grid.side() {
        for col in 0..grid.side() {
            for direction in Direction::all() {
                if run_starts_at(grid, row, col, *direction) {
                    matches += 1;
                }
            }
        }
    }

    matches
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
