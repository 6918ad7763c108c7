//! Directional run scanning.
//!
//! Four independent predicates, one per direction, each answering: does a run
//! of [`RUN_LENGTH`] identical bases start at `(row, col)`? Every predicate
//! performs its bounds pre-check before reading a single symbol, so a table
//! smaller than 4x4 can never contain a qualifying run in any direction.
//!
//! All predicates are referentially transparent: same grid and coordinates
//! always yield the same boolean. Coordinates are expected to lie within
//! `0..grid.side()`.

use crate::grid::Grid;

/// Number of identical consecutive bases required to qualify as a run.
pub const RUN_LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// The four directions a run may extend from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along the row, toward higher column indices.
    Right,
    /// Along the column, toward higher row indices.
    Down,
    /// Diagonally down and to the left.
    DownLeft,
    /// Diagonally down and to the right.
    DownRight,
}

impl Direction {
    /// All four directions, in the order the classifier evaluates them.
    #[must_use]
    pub const fn all() -> &'static [Direction; 4] {
        &[Self::Right, Self::Down, Self::DownLeft, Self::DownRight]
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Does a rightward run of [`RUN_LENGTH`] identical bases start at
/// `(row, col)`?
#[must_use]
pub fn run_right(grid: &Grid, row: usize, col: usize) -> bool {
    if grid.side() - col < RUN_LENGTH {
        return false;
    }

    let base = grid.at(row, col);
    (1..RUN_LENGTH).all(|step| grid.at(row, col + step) == base)
}

/// Does a downward run of [`RUN_LENGTH`] identical bases start at
/// `(row, col)`?
#[must_use]
pub fn run_down(grid: &Grid, row: usize, col: usize) -> bool {
    if grid.side() - row < RUN_LENGTH {
        return false;
    }

    let base = grid.at(row, col);
    (1..RUN_LENGTH).all(|step| grid.at(row + step, col) == base)
}

/// Does a down-left diagonal run of [`RUN_LENGTH`] identical bases start at
/// `(row, col)`? Requires the start cell to be far enough from both the
/// bottom edge and the left edge.
#[must_use]
pub fn run_down_left(grid: &Grid, row: usize, col: usize) -> bool {
    if grid.side() - row < RUN_LENGTH || col < RUN_LENGTH - 1 {
        return false;
    }

    let base = grid.at(row, col);
    (1..RUN_LENGTH).all(|step| grid.at(row + step, col - step) == base)
}

/// Does a down-right diagonal run of [`RUN_LENGTH`] identical bases start at
/// `(row, col)`? Requires the start cell to be far enough from both the
/// bottom edge and the right edge.
#[must_use]
pub fn run_down_right(grid: &Grid, row: usize, col: usize) -> bool {
    if grid.side() - row < RUN_LENGTH || grid.side() - col < RUN_LENGTH {
        return false;
    }

    let base = grid.at(row, col);
    (1..RUN_LENGTH).all(|step| grid.at(row + step, col + step) == base)
}

/// Dispatches to the predicate for `direction`.
#[must_use]
pub fn run_starts_at(grid: &Grid, row: usize, col: usize, direction: Direction) -> bool {
    match direction {
        Direction::Right => run_right(grid, row, col),
        Direction::Down => run_down(grid, row, col),
        Direction::DownLeft => run_down_left(grid, row, col),
        Direction::DownRight => run_down_right(grid, row, col),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
