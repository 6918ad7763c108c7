//! Validated sequence tables.
//!
//! A [`Grid`] is an immutable square table of bases over the fixed alphabet
//! {A, T, C, G}, constructed once from raw row data and discarded after
//! classification. Validation order matters: the square-shape check runs
//! before the alphabet check, so a table failing both reports
//! [`GridError::NotSquare`].

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// The fixed four-symbol alphabet a grid may contain.
pub const ALPHABET: [u8; 4] = *b"ATCG";

/// Returns `true` if the byte is a member of the grid alphabet.
#[must_use]
pub const fn is_valid_base(base: u8) -> bool {
    matches!(base, b'A' | b'T' | b'C' | b'G')
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Validation failures for raw row data. These are client-input faults,
/// never system failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The table is not square: some row's length differs from the row count.
    #[error("sequence table is not square: {rows} rows but row {row} has {width} symbols")]
    NotSquare {
        /// Total number of rows (the expected side length).
        rows: usize,
        /// Index of the first offending row.
        row: usize,
        /// Actual symbol count of that row.
        width: usize,
    },

    /// A symbol outside the {A, T, C, G} alphabet was found.
    #[error("invalid base '{base}' at row {row}, column {col}")]
    InvalidBase {
        /// Row index of the offending symbol.
        row: usize,
        /// Column index of the offending symbol.
        col: usize,
        /// The offending symbol.
        base: char,
    },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A validated, immutable square table of bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<String>,
    side: usize,
}

impl Grid {
    /// Validates raw row data and constructs a `Grid`.
    ///
    /// # Checks (in order)
    ///
    /// 1. Every row has exactly as many symbols as there are rows
    ///    ([`GridError::NotSquare`]).
    /// 2. Every symbol belongs to {A, T, C, G} ([`GridError::InvalidBase`]).
    ///
    /// # Errors
    ///
    /// Returns the first failing check; shape failures win over alphabet
    /// failures regardless of position.
    pub fn new(rows: Vec<String>) -> Result<Self, GridError> {
        let side = rows.len();

        for (index, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(GridError::NotSquare {
                    rows: side,
                    row: index,
                    width: row.len(),
                });
            }
        }

        for (r, row) in rows.iter().enumerate() {
            for (c, &base) in row.as_bytes().iter().enumerate() {
                if !is_valid_base(base) {
                    return Err(GridError::InvalidBase {
                        row: r,
                        col: c,
                        base: base as char,
                    });
                }
            }
        }

        Ok(Self { rows, side })
    }

    /// Side length N of the table.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// The validated rows, in original order.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The base at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of bounds; callers iterate within
    /// `0..side()`.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.rows[row].as_bytes()[col]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
