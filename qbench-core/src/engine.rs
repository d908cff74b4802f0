//! Engine capability traits
//!
//! Circuit generators and the statistics harness only talk to a register
//! through [`QuantumEngine`]. Engines implement a small set of required
//! methods; the named convenience gates (`h`, `cnot`, `anti_ccz`, ...) are
//! provided on top of them.

use crate::gate::{Pauli, Polarity, SingleQubitGate};
use crate::Result;

/// A quantum register an engine can drive
///
/// Every operation either succeeds or returns an [`EngineError`](crate::EngineError);
/// callers never retry. Engines that defer work must complete it in
/// [`finish`](QuantumEngine::finish).
pub trait QuantumEngine {
    /// Number of qubits in the register
    fn num_qubits(&self) -> usize;

    /// Uniform random real in [0, 1) from the engine's random source
    fn rand(&mut self) -> f64;

    /// Reset the register to a computational basis state
    fn set_permutation(&mut self, permutation: u64) -> Result<()>;

    /// Append `other`'s qubits after this register's qubits, taking ownership
    fn compose(&mut self, other: Self) -> Result<()>
    where
        Self: Sized;

    /// Apply a single-qubit gate
    fn apply_single(&mut self, gate: SingleQubitGate, qubit: usize) -> Result<()>;

    /// Apply a (anti-)controlled Pauli with one or more controls
    fn apply_controlled(
        &mut self,
        gate: Pauli,
        polarity: Polarity,
        controls: &[usize],
        target: usize,
    ) -> Result<()>;

    /// Exchange two qubits
    fn swap(&mut self, qubit1: usize, qubit2: usize) -> Result<()>;

    /// Exchange two qubits, imparting a phase of i when they differ
    fn iswap(&mut self, qubit1: usize, qubit2: usize) -> Result<()>;

    /// Apply phase e^{iθ} to the |11⟩ component of (control, target)
    fn controlled_phase(&mut self, control: usize, target: usize, angle: f64) -> Result<()>;

    /// Measure one qubit in the computational basis, collapsing the state
    fn measure(&mut self, qubit: usize) -> Result<bool>;

    /// Measure `len` contiguous qubits starting at `start`
    ///
    /// Bit `i` of the result holds the outcome of qubit `start + i`; outcomes
    /// past bit 63 are measured but not reported.
    fn measure_range(&mut self, start: usize, len: usize) -> Result<u64> {
        let mut result = 0u64;
        for i in 0..len {
            if self.measure(start + i)? && i < 64 {
                result |= 1 << i;
            }
        }
        Ok(result)
    }

    /// Measure every qubit once
    fn measure_all(&mut self) -> Result<u64> {
        let n = self.num_qubits();
        self.measure_range(0, n)
    }

    /// Block until every previously issued operation has taken effect
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    fn h(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::H, qubit)
    }

    fn x(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::X, qubit)
    }

    fn y(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::Y, qubit)
    }

    fn z(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::Z, qubit)
    }

    fn s(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::S, qubit)
    }

    fn sdg(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::Sdg, qubit)
    }

    fn t(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::T, qubit)
    }

    fn tdg(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::Tdg, qubit)
    }

    fn sqrt_x(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::SqrtX, qubit)
    }

    fn sqrt_y(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::SqrtY, qubit)
    }

    fn sqrt_w(&mut self, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::SqrtW, qubit)
    }

    fn phase(&mut self, angle: f64, qubit: usize) -> Result<()> {
        self.apply_single(SingleQubitGate::Phase(angle), qubit)
    }

    fn u(&mut self, qubit: usize, theta: f64, phi: f64, lambda: f64) -> Result<()> {
        self.apply_single(SingleQubitGate::U { theta, phi, lambda }, qubit)
    }

    fn cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::X, Polarity::Controlled, &[control], target)
    }

    fn anti_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::X, Polarity::AntiControlled, &[control], target)
    }

    fn cy(&mut self, control: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::Y, Polarity::Controlled, &[control], target)
    }

    fn anti_cy(&mut self, control: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::Y, Polarity::AntiControlled, &[control], target)
    }

    fn cz(&mut self, control: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::Z, Polarity::Controlled, &[control], target)
    }

    fn anti_cz(&mut self, control: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::Z, Polarity::AntiControlled, &[control], target)
    }

    fn ccnot(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::X, Polarity::Controlled, &[control1, control2], target)
    }

    fn anti_ccnot(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.apply_controlled(
            Pauli::X,
            Polarity::AntiControlled,
            &[control1, control2],
            target,
        )
    }

    fn ccy(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::Y, Polarity::Controlled, &[control1, control2], target)
    }

    fn anti_ccy(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.apply_controlled(
            Pauli::Y,
            Polarity::AntiControlled,
            &[control1, control2],
            target,
        )
    }

    fn ccz(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.apply_controlled(Pauli::Z, Polarity::Controlled, &[control1, control2], target)
    }

    fn anti_ccz(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.apply_controlled(
            Pauli::Z,
            Polarity::AntiControlled,
            &[control1, control2],
            target,
        )
    }
}

/// Builds registers for the harness
///
/// Configuration errors (register too large, permutation out of range) are
/// reported here, at construction time.
pub trait EngineFactory {
    /// Engine produced by this factory
    type Engine: QuantumEngine;

    /// Create a `num_qubits` register in basis state `permutation`
    fn create(&mut self, num_qubits: usize, permutation: u64) -> Result<Self::Engine>;
}

/// Largest basis-state index for `num_qubits`, saturating at `u64::MAX`
#[inline]
pub fn max_permutation(num_qubits: usize) -> u64 {
    if num_qubits >= 64 {
        u64::MAX
    } else {
        (1u64 << num_qubits) - 1
    }
}

/// Map a uniform draw in [0, 1) onto a basis state of `num_qubits` qubits
#[inline]
pub fn permutation_from_draw(draw: f64, num_qubits: usize) -> u64 {
    let max = max_permutation(num_qubits);
    // `as` saturates for floats beyond the integer range
    let scaled = (draw * (max as f64 + 1.0)) as u64;
    scaled.min(max)
}
