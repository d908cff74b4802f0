//! An engine that records operations instead of simulating them
//!
//! [`RecordingEngine`] validates qubit indices like a real engine would, logs
//! every call as an [`Operation`], and serves randomness from either a seeded
//! RNG or a fixed replay sequence. It is what `qbench trace` and the tests use
//! to inspect the circuits a generator emits.

use crate::engine::{max_permutation, EngineFactory, QuantumEngine};
use crate::error::check_qubits;
use crate::gate::{Operation, Pauli, Polarity, SingleQubitGate};
use crate::{EngineError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Where a recording engine draws its uniform reals from
#[derive(Debug, Clone)]
pub enum RandomSource {
    /// Pseudo-random stream from a seeded RNG
    Seeded(StdRng),
    /// Fixed values handed out in order, cycling when exhausted
    Replay { values: Vec<f64>, cursor: usize },
}

impl RandomSource {
    /// Seeded pseudo-random source
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Replay source over `values`
    ///
    /// # Panics
    /// Panics if `values` is empty or any value lies outside [0, 1)
    pub fn replay(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "Replay source needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "Replay values must lie in [0, 1)"
        );
        Self::Replay { values, cursor: 0 }
    }

    /// Next uniform real in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        match self {
            Self::Seeded(rng) => rng.gen::<f64>(),
            Self::Replay { values, cursor } => {
                let value = values[*cursor % values.len()];
                *cursor += 1;
                value
            }
        }
    }
}

/// Engine that logs operations without tracking amplitudes
///
/// Measurement reports the corresponding bit of the last basis state set
/// with [`set_permutation`](QuantumEngine::set_permutation) and consumes no
/// randomness, so replayed draws map one-to-one onto generator decisions.
#[derive(Debug, Clone)]
pub struct RecordingEngine {
    num_qubits: usize,
    permutation: u64,
    random: RandomSource,
    operations: Vec<Operation>,
}

impl RecordingEngine {
    /// Create a register of `num_qubits` in |0…0⟩ drawing from `random`
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize, random: RandomSource) -> Self {
        assert!(num_qubits > 0, "Register must have at least one qubit");
        Self {
            num_qubits,
            permutation: 0,
            random,
            operations: Vec::new(),
        }
    }

    /// Register with a seeded pseudo-random source
    pub fn seeded(num_qubits: usize, seed: u64) -> Self {
        Self::new(num_qubits, RandomSource::seeded(seed))
    }

    /// Register that replays `values` as its random draws
    pub fn replay(num_qubits: usize, values: Vec<f64>) -> Self {
        Self::new(num_qubits, RandomSource::replay(values))
    }

    /// Operations issued so far, in order
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Take the operation log, leaving it empty
    pub fn take_operations(&mut self) -> Vec<Operation> {
        std::mem::take(&mut self.operations)
    }

    /// Forget every recorded operation
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Count of recorded gates by name; measurements and bookkeeping excluded
    pub fn gate_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for op in self.operations.iter().filter(|op| op.is_gate()) {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Qubits measured so far, in measurement order
    pub fn measured_qubits(&self) -> Vec<usize> {
        self.operations
            .iter()
            .filter_map(|op| match op {
                Operation::Measure { qubit, .. } => Some(*qubit),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, qubits: &[usize], op: Operation) -> Result<()> {
        check_qubits(qubits, self.num_qubits)?;
        self.operations.push(op);
        Ok(())
    }
}

impl QuantumEngine for RecordingEngine {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn rand(&mut self) -> f64 {
        self.random.next_f64()
    }

    fn set_permutation(&mut self, permutation: u64) -> Result<()> {
        if permutation > max_permutation(self.num_qubits) {
            return Err(EngineError::InvalidPermutation {
                permutation,
                num_qubits: self.num_qubits,
            });
        }
        self.permutation = permutation;
        self.operations.push(Operation::SetPermutation(permutation));
        Ok(())
    }

    fn compose(&mut self, other: Self) -> Result<()> {
        if self.num_qubits < 64 {
            self.permutation |= other.permutation << self.num_qubits;
        }
        self.num_qubits += other.num_qubits;
        self.operations.push(Operation::Compose {
            added_qubits: other.num_qubits,
        });
        Ok(())
    }

    fn apply_single(&mut self, gate: SingleQubitGate, qubit: usize) -> Result<()> {
        self.record(&[qubit], Operation::Single { gate, qubit })
    }

    fn apply_controlled(
        &mut self,
        gate: Pauli,
        polarity: Polarity,
        controls: &[usize],
        target: usize,
    ) -> Result<()> {
        let mut qubits = controls.to_vec();
        qubits.push(target);
        self.record(
            &qubits,
            Operation::Controlled {
                gate,
                polarity,
                controls: controls.to_vec(),
                target,
            },
        )
    }

    fn swap(&mut self, qubit1: usize, qubit2: usize) -> Result<()> {
        self.record(&[qubit1, qubit2], Operation::Swap(qubit1, qubit2))
    }

    fn iswap(&mut self, qubit1: usize, qubit2: usize) -> Result<()> {
        self.record(&[qubit1, qubit2], Operation::ISwap(qubit1, qubit2))
    }

    fn controlled_phase(&mut self, control: usize, target: usize, angle: f64) -> Result<()> {
        self.record(
            &[control, target],
            Operation::ControlledPhase {
                control,
                target,
                angle,
            },
        )
    }

    fn measure(&mut self, qubit: usize) -> Result<bool> {
        let outcome = qubit < 64 && (self.permutation >> qubit) & 1 == 1;
        self.record(&[qubit], Operation::Measure { qubit, outcome })?;
        Ok(outcome)
    }

    fn finish(&mut self) -> Result<()> {
        self.operations.push(Operation::Finish);
        Ok(())
    }
}

/// Factory for [`RecordingEngine`]s with per-register seeds
///
/// Register `k` created by the factory is seeded with `seed + k`, so runs are
/// reproducible while successive registers still draw different streams.
#[derive(Debug, Clone)]
pub struct RecordingFactory {
    seed: u64,
    created: u64,
    max_qubits: usize,
}

impl RecordingFactory {
    /// Factory with no practical register ceiling
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            created: 0,
            max_qubits: usize::MAX,
        }
    }

    /// Reject registers wider than `max_qubits`
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }
}

impl EngineFactory for RecordingFactory {
    type Engine = RecordingEngine;

    fn create(&mut self, num_qubits: usize, permutation: u64) -> Result<RecordingEngine> {
        if num_qubits == 0 {
            return Err(EngineError::EmptyRegister);
        }
        if num_qubits > self.max_qubits {
            return Err(EngineError::TooManyQubits {
                requested: num_qubits,
                max: self.max_qubits,
            });
        }
        if permutation > max_permutation(num_qubits) {
            return Err(EngineError::InvalidPermutation {
                permutation,
                num_qubits,
            });
        }

        let seed = self.seed.wrapping_add(self.created);
        self.created += 1;
        tracing::debug!(num_qubits, seed, "created recording engine");

        let mut engine = RecordingEngine::seeded(num_qubits, seed);
        engine.permutation = permutation;
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_cycles() {
        let mut source = RandomSource::replay(vec![0.1, 0.2]);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.next_f64(), 0.2);
        assert_eq!(source.next_f64(), 0.1);
    }

    #[test]
    #[should_panic(expected = "[0, 1)")]
    fn test_replay_rejects_out_of_range() {
        RandomSource::replay(vec![1.0]);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);
        for _ in 0..16 {
            let value = a.next_f64();
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, b.next_f64());
        }
    }

    #[test]
    fn test_records_operations() {
        let mut engine = RecordingEngine::seeded(3, 1);
        engine.h(0).unwrap();
        engine.anti_ccz(0, 1, 2).unwrap();
        engine.iswap(1, 2).unwrap();
        engine.finish().unwrap();

        let names: Vec<String> = engine.operations().iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["H", "AntiCCZ", "ISWAP", "Finish"]);

        let counts = engine.gate_counts();
        assert_eq!(counts.get("H"), Some(&1));
        assert_eq!(counts.get("Finish"), None);
    }

    #[test]
    fn test_rejects_bad_qubits() {
        let mut engine = RecordingEngine::seeded(2, 1);
        assert_eq!(engine.x(2), Err(EngineError::InvalidQubit(2, 2)));
        assert_eq!(engine.cz(1, 1), Err(EngineError::DuplicateQubit(1)));
        assert!(engine.operations().is_empty());
    }

    #[test]
    fn test_measure_reports_permutation_bits() {
        let mut engine = RecordingEngine::seeded(3, 1);
        engine.set_permutation(0b101).unwrap();
        assert_eq!(engine.measure_all().unwrap(), 0b101);
        assert_eq!(engine.measured_qubits(), vec![0, 1, 2]);
    }

    #[test]
    fn test_set_permutation_out_of_range() {
        let mut engine = RecordingEngine::seeded(2, 1);
        assert!(matches!(
            engine.set_permutation(4),
            Err(EngineError::InvalidPermutation { .. })
        ));
    }

    #[test]
    fn test_compose() {
        let mut engine = RecordingEngine::seeded(1, 1);
        let mut other = RecordingEngine::seeded(1, 2);
        other.set_permutation(1).unwrap();
        engine.compose(other).unwrap();

        assert_eq!(engine.num_qubits(), 2);
        assert_eq!(engine.measure_all().unwrap(), 0b10);
    }

    #[test]
    fn test_factory_limits() {
        let mut factory = RecordingFactory::new(7).with_max_qubits(4);
        assert!(factory.create(4, 15).is_ok());
        assert_eq!(
            factory.create(5, 0).unwrap_err(),
            EngineError::TooManyQubits {
                requested: 5,
                max: 4
            }
        );
        assert_eq!(factory.create(0, 0).unwrap_err(), EngineError::EmptyRegister);
    }

    #[test]
    fn test_factory_registers_draw_different_streams() {
        let mut factory = RecordingFactory::new(7);
        let mut a = factory.create(1, 0).unwrap();
        let mut b = factory.create(1, 0).unwrap();
        assert_ne!(a.rand(), b.rand());
    }
}
