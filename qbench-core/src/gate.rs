//! The named gate alphabet shared by generators and engines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-qubit gates an engine must be able to apply
///
/// The discrete gates cover the alphabets the circuit generators draw from;
/// `Phase` and `U` carry continuous parameters in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SingleQubitGate {
    /// Hadamard
    H,
    /// Pauli-X
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// Square root of Z
    S,
    /// Adjoint of S
    Sdg,
    /// Fourth root of Z
    T,
    /// Adjoint of T
    Tdg,
    /// Square root of X
    SqrtX,
    /// Square root of Y
    SqrtY,
    /// Square root of W = (X + Y)/√2, realized as T·√X·T†
    SqrtW,
    /// diag(1, e^{iθ})
    Phase(f64),
    /// Three-Euler-angle rotation U(θ, φ, λ)
    U { theta: f64, phi: f64, lambda: f64 },
}

impl SingleQubitGate {
    /// Short gate name, e.g. "H" or "Phase"
    pub fn name(&self) -> &'static str {
        match self {
            Self::H => "H",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::S => "S",
            Self::Sdg => "Sdg",
            Self::T => "T",
            Self::Tdg => "Tdg",
            Self::SqrtX => "SqrtX",
            Self::SqrtY => "SqrtY",
            Self::SqrtW => "SqrtW",
            Self::Phase(_) => "Phase",
            Self::U { .. } => "U",
        }
    }

    /// Whether the gate carries a continuous parameter
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Phase(_) | Self::U { .. })
    }
}

/// Target operation of a controlled gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    X,
    Y,
    Z,
}

/// Which control value activates a controlled gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Fires when every control is |1⟩
    Controlled,
    /// Fires when every control is |0⟩
    AntiControlled,
}

impl Polarity {
    /// Pick a polarity from a uniform draw in [0, 1): lower half is `Controlled`
    #[inline]
    pub fn from_coin(draw: f64) -> Self {
        if 2.0 * draw < 1.0 {
            Self::Controlled
        } else {
            Self::AntiControlled
        }
    }
}

/// One call issued against an engine, as captured by the recording engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    Single {
        gate: SingleQubitGate,
        qubit: usize,
    },
    Controlled {
        gate: Pauli,
        polarity: Polarity,
        controls: Vec<usize>,
        target: usize,
    },
    Swap(usize, usize),
    ISwap(usize, usize),
    ControlledPhase {
        control: usize,
        target: usize,
        angle: f64,
    },
    Measure {
        qubit: usize,
        outcome: bool,
    },
    SetPermutation(u64),
    Compose {
        added_qubits: usize,
    },
    Finish,
}

impl Operation {
    /// Gate name including polarity and control count, e.g. "AntiCCZ"
    pub fn name(&self) -> String {
        match self {
            Self::Single { gate, .. } => gate.name().to_string(),
            Self::Controlled {
                gate,
                polarity,
                controls,
                ..
            } => {
                let prefix = match polarity {
                    Polarity::Controlled => "",
                    Polarity::AntiControlled => "Anti",
                };
                let target = match gate {
                    Pauli::X => "NOT",
                    Pauli::Y => "Y",
                    Pauli::Z => "Z",
                };
                format!("{}{}{}", prefix, "C".repeat(controls.len()), target)
            }
            Self::Swap(..) => "SWAP".to_string(),
            Self::ISwap(..) => "ISWAP".to_string(),
            Self::ControlledPhase { .. } => "CPhase".to_string(),
            Self::Measure { .. } => "M".to_string(),
            Self::SetPermutation(_) => "SetPermutation".to_string(),
            Self::Compose { .. } => "Compose".to_string(),
            Self::Finish => "Finish".to_string(),
        }
    }

    /// Qubits this operation touches, controls first
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Self::Single { qubit, .. } | Self::Measure { qubit, .. } => vec![*qubit],
            Self::Controlled {
                controls, target, ..
            } => {
                let mut qubits = controls.clone();
                qubits.push(*target);
                qubits
            }
            Self::Swap(a, b) | Self::ISwap(a, b) => vec![*a, *b],
            Self::ControlledPhase {
                control, target, ..
            } => vec![*control, *target],
            Self::SetPermutation(_) | Self::Compose { .. } | Self::Finish => Vec::new(),
        }
    }

    /// Whether this is a unitary gate (as opposed to measurement or bookkeeping)
    pub fn is_gate(&self) -> bool {
        matches!(
            self,
            Self::Single { .. }
                | Self::Controlled { .. }
                | Self::Swap(..)
                | Self::ISwap(..)
                | Self::ControlledPhase { .. }
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Self::Single {
                gate: SingleQubitGate::Phase(angle),
                ..
            }
            | Self::ControlledPhase { angle, .. } => write!(f, "[{:.4}]", angle)?,
            Self::Single {
                gate: SingleQubitGate::U { theta, phi, lambda },
                ..
            } => write!(f, "[{:.4}, {:.4}, {:.4}]", theta, phi, lambda)?,
            Self::SetPermutation(perm) => return write!(f, "({})", perm),
            Self::Compose { added_qubits } => return write!(f, "(+{})", added_qubits),
            Self::Finish => return Ok(()),
            _ => {}
        }
        write!(f, "(")?;
        for (i, q) in self.qubits().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "q{}", q)?;
        }
        write!(f, ")")?;
        if let Self::Measure { outcome, .. } = self {
            write!(f, " -> {}", u8::from(*outcome))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controlled_names() {
        let op = Operation::Controlled {
            gate: Pauli::X,
            polarity: Polarity::Controlled,
            controls: vec![0],
            target: 1,
        };
        assert_eq!(op.name(), "CNOT");

        let op = Operation::Controlled {
            gate: Pauli::Z,
            polarity: Polarity::AntiControlled,
            controls: vec![0, 2],
            target: 1,
        };
        assert_eq!(op.name(), "AntiCCZ");
        assert_eq!(op.qubits(), vec![0, 2, 1]);
    }

    #[test]
    fn test_display() {
        let op = Operation::Single {
            gate: SingleQubitGate::H,
            qubit: 3,
        };
        assert_eq!(format!("{}", op), "H(q3)");

        let op = Operation::Measure {
            qubit: 1,
            outcome: true,
        };
        assert_eq!(format!("{}", op), "M(q1) -> 1");

        let op = Operation::Swap(0, 2);
        assert_eq!(format!("{}", op), "SWAP(q0, q2)");
    }

    #[test]
    fn test_polarity_from_coin() {
        assert_eq!(Polarity::from_coin(0.0), Polarity::Controlled);
        assert_eq!(Polarity::from_coin(0.49), Polarity::Controlled);
        assert_eq!(Polarity::from_coin(0.5), Polarity::AntiControlled);
        assert_eq!(Polarity::from_coin(0.99), Polarity::AntiControlled);
    }

    #[test]
    fn test_is_gate() {
        assert!(Operation::ISwap(0, 1).is_gate());
        assert!(!Operation::Finish.is_gate());
        assert!(!Operation::Measure {
            qubit: 0,
            outcome: false
        }
        .is_gate());
    }
}
