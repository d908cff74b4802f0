//! Latency statistics harness for QBench
//!
//! This crate times randomized circuit generators against a quantum engine:
//! - [`BenchmarkConfig`]: qubit/depth sweep, trial count and reset policy
//! - [`Harness`]: the timed trial loop
//! - [`TimingSummary`]: mean, deviation and quartiles of one configuration
//! - [`report`]: CSV and JSON rendering
//!
//! # Example
//!
//! ```
//! use qbench_circuits::RandomUniversalCircuit;
//! use qbench_core::RecordingFactory;
//! use qbench_harness::{BenchmarkConfig, Harness};
//!
//! let config = BenchmarkConfig::quick().with_qubits(3, 4).with_depths(2, 2);
//! let harness = Harness::new(config).unwrap();
//! let summaries = harness
//!     .run(&RandomUniversalCircuit::classic(), &mut RecordingFactory::new(1))
//!     .unwrap();
//! assert_eq!(summaries.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod stats;

pub use config::{BenchmarkConfig, ResetMode, ITERATIONS};
pub use error::{HarnessError, Result};
pub use harness::{hadamard_prelude, random_separable, Harness};
pub use report::{BenchmarkReport, ReportFormat};
pub use stats::{format_time, sample_value, TimingSummary};
