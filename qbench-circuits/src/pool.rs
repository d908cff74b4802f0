//! Qubits still free for a multi-qubit gate in the current layer

/// Shrinking pool of unused qubit indices
///
/// Each layer starts with every qubit in the pool; drawing two (or three) at a
/// time builds a random matching. A lone leftover qubit stays unpaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QubitPool {
    qubits: Vec<usize>,
}

impl QubitPool {
    /// Pool holding `0..num_qubits`
    pub fn new(num_qubits: usize) -> Self {
        Self {
            qubits: (0..num_qubits).collect(),
        }
    }

    /// Number of qubits left
    #[inline]
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Whether the pool has been drained
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Remove and return the qubit at ordinal ⌊draw·len⌋
    ///
    /// `draw` is a uniform real in [0, 1); the ordinal is clamped to the last
    /// element so a draw of exactly 1.0 is harmless.
    ///
    /// # Panics
    /// Panics if the pool is empty
    pub fn pick(&mut self, draw: f64) -> usize {
        assert!(!self.qubits.is_empty(), "Cannot pick from an empty pool");

        let len = self.qubits.len();
        let ordinal = ((draw * len as f64) as usize).min(len - 1);
        self.qubits.swap_remove(ordinal)
    }
}
