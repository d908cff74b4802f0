//! Error types for QBench engines

use thiserror::Error;

/// Errors an engine can raise while constructing, resetting or driving a register
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Register would exceed what the engine supports
    #[error("Too many qubits: requested {requested}, engine supports at most {max}")]
    TooManyQubits { requested: usize, max: usize },

    /// Register must hold at least one qubit
    #[error("Register must have at least one qubit")]
    EmptyRegister,

    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: register has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// The same qubit appears twice in one multi-qubit operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(usize),

    /// Basis-state permutation does not fit in the register
    #[error("Permutation {permutation} out of range for {num_qubits}-qubit register")]
    InvalidPermutation { permutation: u64, num_qubits: usize },

    /// Failure inside the engine (numerical, allocation, device)
    #[error("Engine failure: {0}")]
    Internal(String),
}

impl EngineError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an internal failure error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error stems from the requested register shape rather than
    /// from a failure while running gates
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::TooManyQubits { .. } | Self::EmptyRegister | Self::InvalidPermutation { .. }
        )
    }
}

/// Check that every qubit in `qubits` is in range and distinct
pub(crate) fn check_qubits(qubits: &[usize], num_qubits: usize) -> Result<(), EngineError> {
    for (i, &q) in qubits.iter().enumerate() {
        if q >= num_qubits {
            return Err(EngineError::invalid_qubit(q, num_qubits));
        }
        if qubits[..i].contains(&q) {
            return Err(EngineError::DuplicateQubit(q));
        }
    }
    Ok(())
}
