//! Dense state-vector engine for QBench
//!
//! This crate provides [`DenseEngine`], a reference implementation of
//! [`qbench_core::QuantumEngine`] that stores the full `2^n` amplitude
//! vector and applies gates directly to it. Large registers split gate
//! kernels across threads with rayon.
//!
//! # Example
//!
//! ```
//! use qbench_core::{EngineFactory, QuantumEngine};
//! use qbench_state::{DenseEngineConfig, DenseFactory};
//!
//! let mut factory = DenseFactory::new(DenseEngineConfig::default().with_seed(3));
//! let mut engine = factory.create(2, 0).unwrap();
//! engine.h(0).unwrap();
//! engine.cnot(0, 1).unwrap();
//!
//! // Bell pair: both qubits agree
//! let outcome = engine.measure_all().unwrap();
//! assert!(outcome == 0b00 || outcome == 0b11);
//! ```

pub mod config;
pub mod dense;
pub mod error;
pub mod kernels;
pub mod matrices;

pub use config::DenseEngineConfig;
pub use dense::{DenseEngine, DenseFactory};
pub use error::{Result, StateError};
