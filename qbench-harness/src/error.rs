//! Error types for the benchmark harness

use qbench_core::EngineError;
use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors that can stop a benchmark run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarnessError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Engine failure while preparing or running a trial
    #[error("Engine failed at {num_qubits} qubits, depth {depth}: {source}")]
    Engine {
        num_qubits: usize,
        depth: usize,
        #[source]
        source: EngineError,
    },
}

impl HarnessError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Attach the failing configuration to an engine error
    pub fn engine(num_qubits: usize, depth: usize, source: EngineError) -> Self {
        Self::Engine {
            num_qubits,
            depth,
            source,
        }
    }
}
