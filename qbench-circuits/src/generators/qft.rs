//! Quantum Fourier transform workload

use super::CircuitGenerator;
use qbench_core::{QuantumEngine, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// QFT over the whole register followed by a full measurement
///
/// Deterministic; pair it with a random initial state to get a useful
/// benchmark. The depth argument is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QftCircuit;

impl CircuitGenerator for QftCircuit {
    fn name(&self) -> &str {
        "qft"
    }

    fn generate<E: QuantumEngine>(
        &self,
        engine: &mut E,
        num_qubits: usize,
        _depth: usize,
    ) -> Result<()> {
        for i in 0..num_qubits {
            engine.h(i)?;
            for j in (i + 1)..num_qubits {
                let angle = PI / 2f64.powi((j - i) as i32);
                engine.controlled_phase(j, i, angle)?;
            }
        }

        engine.measure_all()?;
        Ok(())
    }

    fn uses_depth(&self) -> bool {
        false
    }
}
