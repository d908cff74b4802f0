//! Near-square grid layout of a register
//!
//! Grid-tiled circuits lay qubits out on a `rows × cols` rectangle and couple
//! neighbouring cells. Cell (r, c) is qubit `r * cols + c`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row/column factorization of a qubit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of rows
    pub rows: usize,
    /// Number of cells per row
    pub cols: usize,
}

impl GridShape {
    /// Factor `num_qubits` as close to a square as possible
    ///
    /// `cols` is the largest divisor of `num_qubits` not exceeding
    /// ⌊√num_qubits⌋ and `rows = num_qubits / cols`. A prime count gives a
    /// single-column strip.
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    ///
    /// # Example
    /// ```
    /// use qbench_circuits::GridShape;
    ///
    /// let grid = GridShape::factorize(54);
    /// assert_eq!((grid.rows, grid.cols), (9, 6));
    /// ```
    pub fn factorize(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Cannot factor an empty register");

        let mut cols = integer_sqrt(num_qubits);
        while num_qubits % cols != 0 {
            cols -= 1;
        }
        Self {
            rows: num_qubits / cols,
            cols,
        }
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Always false; a factorized grid holds at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major qubit index of (row, col)
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell holding qubit `index`
    #[inline]
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Whether signed coordinates fall inside the grid
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Correct float rounding at either edge
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// Remaps grid cells onto qubit indices before gates are issued
#[derive(Clone, Copy, Default)]
pub enum CellMapping {
    /// Row-major order, qubit = r·cols + c
    #[default]
    RowMajor,
    /// Column-major order, qubit = c·rows + r
    Transpose,
    /// Caller-supplied permutation of `[0, n)`
    Custom(fn(GridShape, usize) -> usize),
}

impl CellMapping {
    /// Qubit for the row-major index `index` of `grid`
    pub fn apply(&self, grid: GridShape, index: usize) -> usize {
        match self {
            Self::RowMajor => index,
            Self::Transpose => {
                let (row, col) = grid.cell(index);
                col * grid.rows + row
            }
            Self::Custom(map) => map(grid, index),
        }
    }
}

impl fmt::Debug for CellMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowMajor => write!(f, "RowMajor"),
            Self::Transpose => write!(f, "Transpose"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
