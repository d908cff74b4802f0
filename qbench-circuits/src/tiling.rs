//! Coupler tiling sequences for grid-tiled circuits
//!
//! Each layer activates one coupler symbol in `0..4`. Bit 1 of the symbol
//! picks the row offset of the partner cell (+1 when set, −1 otherwise) and
//! bit 0 picks the column offset according to a [`CouplerRule`].

use crate::grid::GridShape;
use serde::{Deserialize, Serialize};

/// The "ABCDCDAB" sequence
pub const ABCDCDAB: &[u8] = &[0, 3, 2, 1, 2, 1, 0, 3];

/// Sequence paired with [`CouplerRule::RowParity`]
pub const ROW_PARITY_PATTERN: &[u8] = &[0, 3, 1, 2, 1, 2, 0, 3];

/// Each symbol once
pub const ABCD: &[u8] = &[0, 1, 2, 3];

/// How a coupler symbol turns into a column offset and a starting row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CouplerRule {
    /// Scan from row 1; column offset +1 when bit 0 is set, else 0
    #[default]
    FixedOffsets,
    /// Symbols 0 and 1 scan from row 1, symbols 2 and 3 from row 0; the
    /// column offset depends on the parity of that starting row
    RowParity,
}

impl CouplerRule {
    /// Tiling pattern this rule is normally run with
    pub fn default_pattern(self) -> &'static [u8] {
        match self {
            Self::FixedOffsets => ABCDCDAB,
            Self::RowParity => ROW_PARITY_PATTERN,
        }
    }
}

/// One active coupler symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coupler(pub u8);

impl Coupler {
    /// Row offset from a base cell to its partner
    #[inline]
    pub fn row_offset(self) -> isize {
        if self.0 & 2 != 0 {
            1
        } else {
            -1
        }
    }

    /// First row scanned under `rule`
    #[inline]
    pub fn start_row(self, rule: CouplerRule) -> usize {
        match rule {
            CouplerRule::FixedOffsets => 1,
            CouplerRule::RowParity => {
                if self.0 < 2 {
                    1
                } else {
                    0
                }
            }
        }
    }

    /// Column offset from a base cell to its partner
    pub fn col_offset(self, rule: CouplerRule, grid: GridShape) -> isize {
        let bit = self.0 & 1 != 0;
        match rule {
            CouplerRule::FixedOffsets => {
                if grid.cols == 1 || !bit {
                    0
                } else {
                    1
                }
            }
            CouplerRule::RowParity => {
                let starts_even = self.start_row(rule) % 2 == 0;
                match (starts_even, bit) {
                    (true, true) => 0,
                    (true, false) => -1,
                    (false, true) => 1,
                    (false, false) => 0,
                }
            }
        }
    }

    /// Row-major index pairs coupled by this symbol on `grid`
    ///
    /// Rows are scanned with step 2 from the rule's start row, every column;
    /// base cells whose partner falls outside the grid are skipped.
    pub fn pairs(self, rule: CouplerRule, grid: GridShape) -> Vec<(usize, usize)> {
        let row_offset = self.row_offset();
        let col_offset = self.col_offset(rule, grid);

        let mut pairs = Vec::new();
        for row in (self.start_row(rule)..grid.rows).step_by(2) {
            for col in 0..grid.cols {
                let partner_row = row as isize + row_offset;
                let partner_col = col as isize + col_offset;
                if !grid.contains(partner_row, partner_col) {
                    continue;
                }
                pairs.push((
                    grid.index(row, col),
                    grid.index(partner_row as usize, partner_col as usize),
                ));
            }
        }
        pairs
    }
}

/// Cyclic queue of coupler symbols, advanced once per layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilingSequence {
    pattern: &'static [u8],
    position: usize,
}

impl TilingSequence {
    /// Sequence over `pattern`, starting at its first symbol
    ///
    /// # Panics
    /// Panics if `pattern` is empty
    pub fn new(pattern: &'static [u8]) -> Self {
        assert!(!pattern.is_empty(), "Tiling pattern must not be empty");
        Self {
            pattern,
            position: 0,
        }
    }

    /// Number of layers before the sequence repeats
    #[inline]
    pub fn period(&self) -> usize {
        self.pattern.len()
    }

    /// Return the front symbol and rotate it to the back
    pub fn next_coupler(&mut self) -> Coupler {
        let symbol = self.pattern[self.position];
        self.position = (self.position + 1) % self.pattern.len();
        Coupler(symbol)
    }
}

impl Iterator for TilingSequence {
    type Item = Coupler;

    fn next(&mut self) -> Option<Coupler> {
        Some(self.next_coupler())
    }
}
