//! Benchmark run configuration

use crate::error::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Trials per (qubit count, depth) configuration
pub const ITERATIONS: usize = 100;

/// How the register is prepared before each trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResetMode {
    /// Reset to |0…0⟩
    ZeroPermutation,
    /// Reset to a uniformly random basis state
    #[default]
    RandomPermutation,
    /// Build a fresh register from independently rotated single qubits
    RandomSeparable,
}

impl ResetMode {
    /// Whether one register is reset and reused across trials
    #[inline]
    pub fn reuses_engine(self) -> bool {
        !matches!(self, Self::RandomSeparable)
    }
}

impl fmt::Display for ResetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ZeroPermutation => "zero",
            Self::RandomPermutation => "random-permutation",
            Self::RandomSeparable => "random-separable",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for a benchmark sweep
///
/// # Example
/// ```
/// use qbench_harness::{BenchmarkConfig, ResetMode};
///
/// let config = BenchmarkConfig::new()
///     .with_qubits(4, 8)
///     .with_depths(1, 5)
///     .with_iterations(20)
///     .with_reset_mode(ResetMode::ZeroPermutation);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Smallest register benchmarked
    ///
    /// Default: 4
    pub min_qubits: usize,

    /// Largest register benchmarked
    ///
    /// Default: 20
    pub max_qubits: usize,

    /// Shallowest circuit benchmarked
    ///
    /// Default: 1
    pub min_depth: usize,

    /// Deepest circuit benchmarked
    ///
    /// Default: 20
    pub max_depth: usize,

    /// Trials per configuration
    ///
    /// Default: [`ITERATIONS`]
    pub iterations: usize,

    /// Register preparation before each trial
    ///
    /// Default: random permutation
    pub reset_mode: ResetMode,

    /// Apply H to each qubit with probability ½ after the reset
    ///
    /// Default: false
    pub hadamard_prelude: bool,

    /// Record log2 of each trial time and report 2^statistic
    ///
    /// Default: false
    pub log_normal: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            min_qubits: 4,
            max_qubits: 20,
            min_depth: 1,
            max_depth: 20,
            iterations: ITERATIONS,
            reset_mode: ResetMode::default(),
            hadamard_prelude: false,
            log_normal: false,
        }
    }
}

impl BenchmarkConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Small, fast sweep for smoke tests
    pub fn quick() -> Self {
        Self {
            min_qubits: 2,
            max_qubits: 6,
            min_depth: 1,
            max_depth: 3,
            iterations: 8,
            ..Self::default()
        }
    }

    /// Single-depth sweep over random separable states, as QFT runs use
    pub fn separable() -> Self {
        Self {
            max_depth: 1,
            reset_mode: ResetMode::RandomSeparable,
            ..Self::default()
        }
    }

    /// Set the qubit range
    pub fn with_qubits(mut self, min: usize, max: usize) -> Self {
        self.min_qubits = min;
        self.max_qubits = max;
        self
    }

    /// Set the depth range
    pub fn with_depths(mut self, min: usize, max: usize) -> Self {
        self.min_depth = min;
        self.max_depth = max;
        self
    }

    /// Set the number of trials per configuration
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the reset mode
    pub fn with_reset_mode(mut self, mode: ResetMode) -> Self {
        self.reset_mode = mode;
        self
    }

    /// Enable or disable the random Hadamard prelude
    pub fn with_hadamard_prelude(mut self, enabled: bool) -> Self {
        self.hadamard_prelude = enabled;
        self
    }

    /// Enable or disable the log-normal transform
    pub fn with_log_normal(mut self, enabled: bool) -> Self {
        self.log_normal = enabled;
        self
    }

    /// Qubit counts swept
    pub fn qubit_range(&self) -> RangeInclusive<usize> {
        self.min_qubits..=self.max_qubits
    }

    /// Depths swept
    pub fn depth_range(&self) -> RangeInclusive<usize> {
        self.min_depth..=self.max_depth
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_qubits == 0 {
            return Err(HarnessError::invalid_config("min_qubits must be > 0"));
        }
        if self.min_qubits > self.max_qubits {
            return Err(HarnessError::invalid_config(format!(
                "min_qubits ({}) exceeds max_qubits ({})",
                self.min_qubits, self.max_qubits
            )));
        }
        if self.min_depth == 0 {
            return Err(HarnessError::invalid_config("min_depth must be > 0"));
        }
        if self.min_depth > self.max_depth {
            return Err(HarnessError::invalid_config(format!(
                "min_depth ({}) exceeds max_depth ({})",
                self.min_depth, self.max_depth
            )));
        }
        if self.iterations == 0 {
            return Err(HarnessError::invalid_config("iterations must be > 0"));
        }
        Ok(())
    }
}
