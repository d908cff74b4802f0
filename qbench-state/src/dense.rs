//! Dense state-vector engine
//!
//! [`DenseEngine`] stores all `2^n` amplitudes of the register and applies
//! gates eagerly, so [`finish`](QuantumEngine::finish) has nothing to wait
//! for. Qubit `q` is bit `q` of the basis index.

use crate::config::DenseEngineConfig;
use crate::error::{Result as StateResult, StateError};
use crate::kernels;
use crate::matrices::{pauli_matrix, single_qubit_matrix};
use num_complex::Complex64;
use qbench_core::{EngineError, EngineFactory, Pauli, Polarity, QuantumEngine, SingleQubitGate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Below this norm a measurement branch is treated as impossible
const COLLAPSE_EPSILON: f64 = 1e-10;

/// Full state-vector register
///
/// # Example
///
/// ```
/// use qbench_core::QuantumEngine;
/// use qbench_state::{DenseEngine, DenseEngineConfig};
///
/// let mut engine = DenseEngine::new(3, &DenseEngineConfig::debug()).unwrap();
/// engine.x(2).unwrap();
/// assert_eq!(engine.measure_all().unwrap(), 0b100);
/// ```
pub struct DenseEngine {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
    rng: StdRng,
    max_qubits: usize,
    parallel_threshold: usize,
}

impl DenseEngine {
    /// Create a register in |0…0⟩
    ///
    /// The random source is seeded from `config.seed` when present, otherwise
    /// from entropy.
    ///
    /// # Errors
    /// Returns error if `num_qubits` is 0 or exceeds `config.max_qubits`
    pub fn new(num_qubits: usize, config: &DenseEngineConfig) -> StateResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(num_qubits, config, rng)
    }

    fn with_rng(num_qubits: usize, config: &DenseEngineConfig, rng: StdRng) -> StateResult<Self> {
        if num_qubits == 0 {
            return Err(StateError::NoQubits);
        }
        if num_qubits > config.max_qubits {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: config.max_qubits,
            });
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1usize << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
            rng,
            max_qubits: config.max_qubits,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Current amplitudes, indexed by basis state
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probability of measuring `qubit` as 1
    pub fn probability_of_one(&self, qubit: usize) -> StateResult<f64> {
        self.check(&[qubit])?;
        Ok(kernels::probability_of_one(&self.amplitudes, qubit))
    }

    /// Euclidean norm of the amplitude vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check if the state is normalized within `tolerance`
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() < tolerance
    }

    #[inline]
    fn parallel(&self) -> bool {
        self.num_qubits >= self.parallel_threshold
    }

    fn check(&self, qubits: &[usize]) -> StateResult<()> {
        for (i, &q) in qubits.iter().enumerate() {
            if q >= self.num_qubits {
                return Err(StateError::InvalidQubitIndex {
                    index: q,
                    num_qubits: self.num_qubits,
                });
            }
            if qubits[..i].contains(&q) {
                return Err(StateError::DuplicateQubit { index: q });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DenseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseEngine")
            .field("num_qubits", &self.num_qubits)
            .field("max_qubits", &self.max_qubits)
            .field("parallel_threshold", &self.parallel_threshold)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for DenseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseEngine ({} qubits):", self.num_qubits)?;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            if amp.norm_sqr() > 1e-10 {
                writeln!(
                    f,
                    "  |{:0width$b}⟩: {:.6} + {:.6}i",
                    i,
                    amp.re,
                    amp.im,
                    width = self.num_qubits
                )?;
            }
        }
        Ok(())
    }
}

impl QuantumEngine for DenseEngine {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn rand(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn set_permutation(&mut self, permutation: u64) -> qbench_core::Result<()> {
        let dimension = self.dimension();
        if permutation >= dimension as u64 {
            return Err(StateError::InvalidBasisState {
                index: permutation,
                dimension,
            }
            .into());
        }
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[permutation as usize] = Complex64::new(1.0, 0.0);
        Ok(())
    }

    fn compose(&mut self, other: Self) -> qbench_core::Result<()> {
        let total = self.num_qubits + other.num_qubits;
        if total > self.max_qubits {
            return Err(StateError::TooManyQubits {
                num_qubits: total,
                max_qubits: self.max_qubits,
            }
            .into());
        }
        self.amplitudes = kernels::kron(&self.amplitudes, &other.amplitudes);
        self.num_qubits = total;
        Ok(())
    }

    fn apply_single(&mut self, gate: SingleQubitGate, qubit: usize) -> qbench_core::Result<()> {
        self.check(&[qubit])?;
        let matrix = single_qubit_matrix(gate);
        let parallel = self.parallel();
        kernels::apply_single_qubit_gate(&mut self.amplitudes, &matrix, qubit, parallel);
        Ok(())
    }

    fn apply_controlled(
        &mut self,
        gate: Pauli,
        polarity: Polarity,
        controls: &[usize],
        target: usize,
    ) -> qbench_core::Result<()> {
        let mut qubits = controls.to_vec();
        qubits.push(target);
        self.check(&qubits)?;

        let matrix = pauli_matrix(gate);
        let parallel = self.parallel();
        kernels::apply_controlled_gate(
            &mut self.amplitudes,
            &matrix,
            controls,
            target,
            polarity == Polarity::Controlled,
            parallel,
        );
        Ok(())
    }

    fn swap(&mut self, qubit1: usize, qubit2: usize) -> qbench_core::Result<()> {
        self.check(&[qubit1, qubit2])?;
        kernels::apply_swap(&mut self.amplitudes, qubit1, qubit2, Complex64::new(1.0, 0.0));
        Ok(())
    }

    fn iswap(&mut self, qubit1: usize, qubit2: usize) -> qbench_core::Result<()> {
        self.check(&[qubit1, qubit2])?;
        kernels::apply_swap(&mut self.amplitudes, qubit1, qubit2, Complex64::new(0.0, 1.0));
        Ok(())
    }

    fn controlled_phase(
        &mut self,
        control: usize,
        target: usize,
        angle: f64,
    ) -> qbench_core::Result<()> {
        self.check(&[control, target])?;
        let parallel = self.parallel();
        kernels::apply_controlled_phase(&mut self.amplitudes, control, target, angle, parallel);
        Ok(())
    }

    fn measure(&mut self, qubit: usize) -> qbench_core::Result<bool> {
        self.check(&[qubit])?;

        let prob_one = kernels::probability_of_one(&self.amplitudes, qubit);
        let outcome = self.rng.gen::<f64>() < prob_one;

        let norm = kernels::collapse(&mut self.amplitudes, qubit, outcome);
        if norm < COLLAPSE_EPSILON {
            return Err(StateError::NotNormalized { norm }.into());
        }
        Ok(outcome)
    }
}

/// Builds [`DenseEngine`] registers from one configuration
///
/// With a configured seed, register `k` is seeded with `seed + k`.
#[derive(Debug, Clone)]
pub struct DenseFactory {
    config: DenseEngineConfig,
    created: u64,
}

impl DenseFactory {
    /// Create a factory for `config`
    pub fn new(config: DenseEngineConfig) -> Self {
        Self { config, created: 0 }
    }

    /// Configuration registers are built with
    #[inline]
    pub fn config(&self) -> &DenseEngineConfig {
        &self.config
    }
}

impl Default for DenseFactory {
    fn default() -> Self {
        Self::new(DenseEngineConfig::default())
    }
}

impl EngineFactory for DenseFactory {
    type Engine = DenseEngine;

    fn create(&mut self, num_qubits: usize, permutation: u64) -> qbench_core::Result<DenseEngine> {
        self.config.validate().map_err(EngineError::Internal)?;

        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.created)),
            None => StdRng::from_entropy(),
        };
        self.created += 1;

        let mut engine = DenseEngine::with_rng(num_qubits, &self.config, rng)?;
        engine.set_permutation(permutation)?;
        tracing::debug!(num_qubits, permutation, "created dense engine");
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine(num_qubits: usize) -> DenseEngine {
        DenseEngine::new(num_qubits, &DenseEngineConfig::debug()).unwrap()
    }

    #[test]
    fn test_new_state() {
        let engine = engine(3);
        assert_eq!(engine.num_qubits(), 3);
        assert_eq!(engine.dimension(), 8);
        assert_relative_eq!(engine.amplitudes()[0].re, 1.0);
        assert!(engine.is_normalized(1e-12));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        let config = DenseEngineConfig::debug();
        assert_eq!(DenseEngine::new(0, &config).unwrap_err(), StateError::NoQubits);
        assert!(matches!(
            DenseEngine::new(13, &config),
            Err(StateError::TooManyQubits { .. })
        ));
    }

    #[test]
    fn test_set_permutation() {
        let mut engine = engine(3);
        engine.set_permutation(0b110).unwrap();
        assert_eq!(engine.measure_all().unwrap(), 0b110);

        let err = engine.set_permutation(8).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidPermutation {
                permutation: 8,
                num_qubits: 3
            }
        );
    }

    #[test]
    fn test_invalid_qubits() {
        let mut engine = engine(2);
        assert_eq!(engine.h(2).unwrap_err(), EngineError::InvalidQubit(2, 2));
        assert_eq!(engine.cnot(1, 1).unwrap_err(), EngineError::DuplicateQubit(1));
        assert_eq!(
            engine.ccz(0, 1, 0).unwrap_err(),
            EngineError::DuplicateQubit(0)
        );
    }

    #[test]
    fn test_bell_pair_correlated() {
        let mut factory = DenseFactory::new(DenseEngineConfig::debug());
        for _ in 0..20 {
            let mut engine = factory.create(2, 0).unwrap();
            engine.h(0).unwrap();
            engine.cnot(0, 1).unwrap();
            let outcome = engine.measure_all().unwrap();
            assert!(outcome == 0b00 || outcome == 0b11);
        }
    }

    #[test]
    fn test_anti_controlled_gates() {
        let mut pair = engine(2);
        pair.anti_cnot(0, 1).unwrap();
        assert_eq!(pair.measure_all().unwrap(), 0b10);

        let mut triple = engine(3);
        triple.anti_ccnot(0, 1, 2).unwrap();
        assert_eq!(triple.measure_all().unwrap(), 0b100);
    }

    #[test]
    fn test_iswap_phase() {
        let mut engine = engine(2);
        engine.x(0).unwrap();
        engine.iswap(0, 1).unwrap();
        assert_relative_eq!(engine.amplitudes()[0b10].im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compose_places_other_above() {
        let config = DenseEngineConfig::debug();
        let mut low = DenseEngine::new(1, &config).unwrap();
        let mut high = DenseEngine::new(2, &config).unwrap();
        high.set_permutation(0b10).unwrap();
        low.set_permutation(1).unwrap();

        low.compose(high).unwrap();
        assert_eq!(low.num_qubits(), 3);
        assert_eq!(low.measure_all().unwrap(), 0b101);
    }

    #[test]
    fn test_compose_respects_ceiling() {
        let config = DenseEngineConfig::debug().with_max_qubits(3);
        let mut a = DenseEngine::new(2, &config).unwrap();
        let b = DenseEngine::new(2, &config).unwrap();
        assert!(matches!(
            a.compose(b),
            Err(EngineError::TooManyQubits {
                requested: 4,
                max: 3
            })
        ));
        assert_eq!(a.num_qubits(), 2);
    }

    #[test]
    fn test_measure_collapses() {
        let mut engine = engine(1);
        engine.h(0).unwrap();
        let first = engine.measure(0).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.measure(0).unwrap(), first);
        }
        assert!(engine.is_normalized(1e-12));
    }

    #[test]
    fn test_factory_seeds_are_reproducible() {
        let mut a = DenseFactory::new(DenseEngineConfig::debug());
        let mut b = DenseFactory::new(DenseEngineConfig::debug());
        let mut ea = a.create(2, 0).unwrap();
        let mut eb = b.create(2, 0).unwrap();
        assert_eq!(ea.rand(), eb.rand());

        let mut ea2 = a.create(2, 0).unwrap();
        let mut ea_again = DenseFactory::new(DenseEngineConfig::debug())
            .create(2, 0)
            .unwrap();
        assert_ne!(ea2.rand(), ea_again.rand());
    }

    #[test]
    fn test_factory_rejects_bad_permutation() {
        let mut factory = DenseFactory::default();
        assert!(matches!(
            factory.create(2, 4),
            Err(EngineError::InvalidPermutation { .. })
        ));
    }
}
