//! Core types and traits for the QBench workload suite
//!
//! This crate defines the capability set a quantum-state engine must offer
//! to run QBench circuits:
//! - [`QuantumEngine`]: gates, measurement, randomness and the completion barrier
//! - [`EngineFactory`]: construction of registers in a basis state
//! - [`SingleQubitGate`], [`Pauli`], [`Polarity`]: the named gate alphabet
//! - [`RecordingEngine`]: an engine that logs operations instead of simulating
//!
//! # Example
//! ```
//! use qbench_core::{QuantumEngine, RecordingEngine};
//!
//! let mut engine = RecordingEngine::seeded(2, 7);
//! engine.h(0).unwrap();
//! engine.cnot(0, 1).unwrap();
//! engine.measure_all().unwrap();
//! assert_eq!(engine.operations().len(), 4);
//! ```

pub mod engine;
pub mod error;
pub mod gate;
pub mod recording;

// Re-exports for convenience
pub use engine::{max_permutation, permutation_from_draw, EngineFactory, QuantumEngine};
pub use error::EngineError;
pub use gate::{Operation, Pauli, Polarity, SingleQubitGate};
pub use recording::{RandomSource, RecordingEngine, RecordingFactory};

/// Type alias for results in QBench engines
pub type Result<T> = std::result::Result<T, EngineError>;
