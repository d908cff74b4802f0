//! Error types for state vector operations

use qbench_core::EngineError;
use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Same qubit used twice in one gate
    #[error("Qubit {index} used more than once in a single gate")]
    DuplicateQubit { index: usize },

    /// State too large for the configured ceiling
    #[error("{num_qubits}-qubit state exceeds the {max_qubits}-qubit limit")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Empty register
    #[error("State must have at least one qubit")]
    NoQubits,

    /// Basis state index outside the state
    #[error("Basis state {index} out of range for dimension {dimension}")]
    InvalidBasisState { index: u64, dimension: usize },

    /// State not normalized
    #[error("State vector not normalized, norm = {norm}")]
    NotNormalized { norm: f64 },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;

impl From<StateError> for EngineError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::InvalidQubitIndex { index, num_qubits } => {
                EngineError::InvalidQubit(index, num_qubits)
            }
            StateError::DuplicateQubit { index } => EngineError::DuplicateQubit(index),
            StateError::TooManyQubits {
                num_qubits,
                max_qubits,
            } => EngineError::TooManyQubits {
                requested: num_qubits,
                max: max_qubits,
            },
            StateError::NoQubits => EngineError::EmptyRegister,
            StateError::InvalidBasisState { index, dimension } => {
                EngineError::InvalidPermutation {
                    permutation: index,
                    num_qubits: dimension.trailing_zeros() as usize,
                }
            }
            other @ StateError::NotNormalized { .. } => EngineError::Internal(other.to_string()),
        }
    }
}
