//! Grid-tiled circuits in the style of the Sycamore supremacy experiment
//!
//! Every layer applies one of {√X, √Y, √W} to each qubit (never the same
//! gate twice in a row), then couples the grid cells selected by the next
//! symbol of a tiling sequence with an ISWAP followed by a sixth root of CZ.

use super::CircuitGenerator;
use crate::chooser::{choose, GateTags};
use crate::grid::{CellMapping, GridShape};
use crate::tiling::{CouplerRule, TilingSequence};
use qbench_core::{QuantumEngine, Result};
use std::f64::consts::PI;

/// Controlled-phase angle of the sixth root of CZ
pub const SIXTH_ROOT_OF_CZ: f64 = PI / 6.0;

/// Grid-tiled circuit generator
#[derive(Debug, Clone)]
pub struct GridTiledCircuit {
    /// How coupler symbols turn into partner offsets
    pub rule: CouplerRule,
    /// Symbols activated layer by layer, cyclically
    pub pattern: &'static [u8],
    /// Remapping of grid cells onto qubits
    pub mapping: CellMapping,
}

impl Default for GridTiledCircuit {
    fn default() -> Self {
        Self::fixed_offsets()
    }
}

impl GridTiledCircuit {
    /// "ABCDCDAB" tiling from row 1, row-major cells
    pub fn fixed_offsets() -> Self {
        Self {
            rule: CouplerRule::FixedOffsets,
            pattern: CouplerRule::FixedOffsets.default_pattern(),
            mapping: CellMapping::RowMajor,
        }
    }

    /// Row-parity tiling with column-major cells
    pub fn row_parity() -> Self {
        Self {
            rule: CouplerRule::RowParity,
            pattern: CouplerRule::RowParity.default_pattern(),
            mapping: CellMapping::Transpose,
        }
    }

    /// Use `pattern` as the tiling sequence
    pub fn with_pattern(mut self, pattern: &'static [u8]) -> Self {
        self.pattern = pattern;
        self
    }

    /// Remap cells with `mapping`
    pub fn with_mapping(mut self, mapping: CellMapping) -> Self {
        self.mapping = mapping;
        self
    }
}

impl CircuitGenerator for GridTiledCircuit {
    fn name(&self) -> &str {
        match self.rule {
            CouplerRule::FixedOffsets => "grid-tiled",
            CouplerRule::RowParity => "grid-tiled-row-parity",
        }
    }

    fn generate<E: QuantumEngine>(
        &self,
        engine: &mut E,
        num_qubits: usize,
        depth: usize,
    ) -> Result<()> {
        let grid = GridShape::factorize(num_qubits);
        let mut sequence = TilingSequence::new(self.pattern);
        let mut tags = GateTags::new();

        for layer in 0..depth {
            for qubit in 0..num_qubits {
                let tag = choose(tags.previous(qubit), 3, engine.rand());
                match tag {
                    0 => engine.sqrt_x(qubit)?,
                    1 => engine.sqrt_y(qubit)?,
                    _ => engine.sqrt_w(qubit)?,
                }
                tags.record(qubit, tag);
            }

            let coupler = sequence.next_coupler();
            tracing::trace!(layer, symbol = coupler.0, %grid, "grid tiled layer");

            for (cell, partner) in coupler.pairs(self.rule, grid) {
                let b1 = self.mapping.apply(grid, cell);
                let b2 = self.mapping.apply(grid, partner);
                engine.iswap(b1, b2)?;
                engine.controlled_phase(b1, b2, SIXTH_ROOT_OF_CZ)?;
            }
        }

        engine.measure_all()?;
        Ok(())
    }
}
