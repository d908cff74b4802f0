//! Universal circuits restricted to nearest-neighbour couplings on a grid

use super::{coin, CircuitGenerator};
use crate::chooser::{choose, GateTags};
use crate::grid::GridShape;
use crate::tiling::{CouplerRule, TilingSequence, ABCDCDAB};
use qbench_core::{QuantumEngine, Result, SingleQubitGate};
use serde::{Deserialize, Serialize};

/// Single-qubit alphabet, indexed by choice
const ALPHABET: [SingleQubitGate; 4] = [
    SingleQubitGate::H,
    SingleQubitGate::X,
    SingleQubitGate::T,
    SingleQubitGate::Tdg,
];

/// Choice excluded on the next layer after each choice; T and T† exclude
/// each other so no qubit undoes its previous phase
const EXCLUDES: [u8; 4] = [0, 1, 3, 2];

/// Nearest-neighbour circuit generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NearestNeighborCircuit {
    /// Flip a second coin per CNOT to exchange control and target
    pub swap_operands: bool,
    /// Apply H to every qubit before the first layer
    pub hadamard_prelude: bool,
}

impl NearestNeighborCircuit {
    /// Generator with neither option enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable random control/target exchange on CNOTs
    pub fn with_swap_operands(mut self, enabled: bool) -> Self {
        self.swap_operands = enabled;
        self
    }

    /// Enable the Hadamard prelude
    pub fn with_hadamard_prelude(mut self, enabled: bool) -> Self {
        self.hadamard_prelude = enabled;
        self
    }
}

impl CircuitGenerator for NearestNeighborCircuit {
    fn name(&self) -> &str {
        "nearest-neighbor"
    }

    fn generate<E: QuantumEngine>(
        &self,
        engine: &mut E,
        num_qubits: usize,
        depth: usize,
    ) -> Result<()> {
        let grid = GridShape::factorize(num_qubits);
        let mut sequence = TilingSequence::new(ABCDCDAB);
        let mut tags = GateTags::new();

        if self.hadamard_prelude {
            for qubit in 0..num_qubits {
                engine.h(qubit)?;
            }
        }

        for layer in 0..depth {
            for qubit in 0..num_qubits {
                let choice = choose(tags.previous(qubit), ALPHABET.len(), engine.rand());
                engine.apply_single(ALPHABET[choice as usize], qubit)?;
                tags.record(qubit, EXCLUDES[choice as usize]);
            }

            let coupler = sequence.next_coupler();
            tracing::trace!(layer, symbol = coupler.0, "nearest neighbor layer");

            for (mut b1, mut b2) in coupler.pairs(CouplerRule::FixedOffsets, grid) {
                if coin(engine) {
                    if self.swap_operands && coin(engine) {
                        std::mem::swap(&mut b1, &mut b2);
                    }
                    engine.cnot(b1, b2)?;
                } else {
                    engine.cz(b1, b2)?;
                }
            }
        }

        engine.measure_all()?;
        Ok(())
    }
}
