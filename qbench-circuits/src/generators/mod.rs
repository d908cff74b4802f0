//! Benchmark circuit generators
//!
//! A generator is a plain configuration struct. Given an engine, a qubit
//! count and a depth it issues one complete randomized circuit against the
//! engine, drawing every random decision from [`QuantumEngine::rand`], and
//! ends by measuring every qubit once.

mod grid_tiled;
mod nearest_neighbor;
mod qft;
mod random_universal;

pub use grid_tiled::GridTiledCircuit;
pub use nearest_neighbor::NearestNeighborCircuit;
pub use qft::QftCircuit;
pub use random_universal::{RandomUniversalCircuit, UniversalVariant};

use qbench_core::{QuantumEngine, Result};

/// A randomized benchmark workload
///
/// # Example
/// ```
/// use qbench_circuits::{CircuitGenerator, RandomUniversalCircuit};
/// use qbench_core::RecordingEngine;
///
/// let circuit = RandomUniversalCircuit::classic();
/// let mut engine = RecordingEngine::seeded(5, 1);
/// circuit.generate(&mut engine, 5, 3).unwrap();
/// assert_eq!(engine.measured_qubits(), vec![0, 1, 2, 3, 4]);
/// ```
pub trait CircuitGenerator {
    /// Short name used in reports
    fn name(&self) -> &str;

    /// Issue one circuit of `depth` layers over qubits `0..num_qubits`
    ///
    /// # Errors
    /// Propagates the first engine error; the circuit is abandoned there.
    fn generate<E: QuantumEngine>(
        &self,
        engine: &mut E,
        num_qubits: usize,
        depth: usize,
    ) -> Result<()>;

    /// Whether `depth` changes the emitted circuit
    fn uses_depth(&self) -> bool {
        true
    }
}

/// Fair coin from one engine draw
#[inline]
pub(crate) fn coin<E: QuantumEngine>(engine: &mut E) -> bool {
    2.0 * engine.rand() < 1.0
}

/// Every generator behind one type, for callers that pick at runtime
#[derive(Debug, Clone)]
pub enum AnyCircuit {
    RandomUniversal(RandomUniversalCircuit),
    GridTiled(GridTiledCircuit),
    NearestNeighbor(NearestNeighborCircuit),
    Qft(QftCircuit),
}

impl CircuitGenerator for AnyCircuit {
    fn name(&self) -> &str {
        match self {
            Self::RandomUniversal(c) => c.name(),
            Self::GridTiled(c) => c.name(),
            Self::NearestNeighbor(c) => c.name(),
            Self::Qft(c) => c.name(),
        }
    }

    fn generate<E: QuantumEngine>(
        &self,
        engine: &mut E,
        num_qubits: usize,
        depth: usize,
    ) -> Result<()> {
        match self {
            Self::RandomUniversal(c) => c.generate(engine, num_qubits, depth),
            Self::GridTiled(c) => c.generate(engine, num_qubits, depth),
            Self::NearestNeighbor(c) => c.generate(engine, num_qubits, depth),
            Self::Qft(c) => c.generate(engine, num_qubits, depth),
        }
    }

    fn uses_depth(&self) -> bool {
        match self {
            Self::RandomUniversal(c) => c.uses_depth(),
            Self::GridTiled(c) => c.uses_depth(),
            Self::NearestNeighbor(c) => c.uses_depth(),
            Self::Qft(c) => c.uses_depth(),
        }
    }
}

impl From<RandomUniversalCircuit> for AnyCircuit {
    fn from(c: RandomUniversalCircuit) -> Self {
        Self::RandomUniversal(c)
    }
}

impl From<GridTiledCircuit> for AnyCircuit {
    fn from(c: GridTiledCircuit) -> Self {
        Self::GridTiled(c)
    }
}

impl From<NearestNeighborCircuit> for AnyCircuit {
    fn from(c: NearestNeighborCircuit) -> Self {
        Self::NearestNeighbor(c)
    }
}

impl From<QftCircuit> for AnyCircuit {
    fn from(c: QftCircuit) -> Self {
        Self::Qft(c)
    }
}
