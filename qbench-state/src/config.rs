//! Dense engine configuration

use serde::{Deserialize, Serialize};

/// Hard upper bound on register width; a 34-qubit state already needs 256 GiB
pub const ABSOLUTE_MAX_QUBITS: usize = 34;

/// Configuration for [`DenseEngine`](crate::DenseEngine) registers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseEngineConfig {
    /// Widest register the engine will allocate
    ///
    /// Construction, reset and composition beyond this width fail with a
    /// configuration error instead of attempting the allocation.
    ///
    /// Default: 24 (256 MiB of amplitudes)
    pub max_qubits: usize,

    /// Minimum number of qubits before gate kernels run on the rayon pool
    ///
    /// Default: 14
    pub parallel_threshold: usize,

    /// Random number generator seed for reproducibility
    ///
    /// If None, every register is seeded from entropy. Otherwise register `k`
    /// built by a factory is seeded with `seed + k`.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,
}

impl Default for DenseEngineConfig {
    fn default() -> Self {
        Self {
            max_qubits: 24,
            parallel_threshold: 14,
            seed: None,
        }
    }
}

impl DenseEngineConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Small, single-threaded, deterministic registers for tests
    pub fn debug() -> Self {
        Self {
            max_qubits: 12,
            parallel_threshold: usize::MAX,
            seed: Some(42),
        }
    }

    /// Set the register ceiling
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set the random seed for deterministic execution
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_qubits == 0 {
            return Err("max_qubits must be > 0".to_string());
        }
        if self.max_qubits > ABSOLUTE_MAX_QUBITS {
            return Err(format!(
                "max_qubits must be at most {}, got {}",
                ABSOLUTE_MAX_QUBITS, self.max_qubits
            ));
        }
        Ok(())
    }
}
