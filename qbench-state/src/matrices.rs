//! 2×2 gate matrices for the QBench gate alphabet
//!
//! Fixed gates are compile-time constants; parameterized gates are built on
//! demand. Multi-qubit gates are applied by structured kernels, so only the
//! single-qubit blocks live here.

use num_complex::Complex64;
use qbench_core::{Pauli, SingleQubitGate};

/// Row-major 2×2 complex matrix
pub type Matrix2 = [[Complex64; 2]; 2];

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate matrix
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// S gate matrix (√Z)
pub const S_GATE: Matrix2 = [[ONE, ZERO], [ZERO, I]];

/// S† gate matrix
pub const S_GATE_DAGGER: Matrix2 = [[ONE, ZERO], [ZERO, NEG_I]];

/// T gate matrix (√S)
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: Matrix2 = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)],
];

/// T† gate matrix
pub const T_GATE_DAGGER: Matrix2 = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)],
];

/// √X gate matrix
/// SX = 1/2 * [[1+i, 1-i],
///             [1-i, 1+i]]
pub const SQRT_X: Matrix2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
];

/// √Y gate matrix
/// SY = 1/2 * [[1+i, -1-i],
///             [1+i,  1+i]]
pub const SQRT_Y: Matrix2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(-0.5, -0.5)],
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, 0.5)],
];

/// Product `a · b`
#[inline]
pub fn matmul(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// √W = T · √X · T†
pub fn sqrt_w() -> Matrix2 {
    matmul(&matmul(&T_GATE, &SQRT_X), &T_GATE_DAGGER)
}

/// Phase gate P(θ) = diag(1, e^(iθ))
#[inline]
pub fn phase(theta: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, theta)]]
}

/// U3 gate matrix (universal single-qubit gate)
/// U3(θ,φ,λ) = [[cos(θ/2),              -e^(iλ)·sin(θ/2)    ],
///              [e^(iφ)·sin(θ/2),        e^(i(φ+λ))·cos(θ/2)]]
#[inline]
pub fn u3(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let half_theta = theta / 2.0;
    let cos_val = half_theta.cos();
    let sin_val = half_theta.sin();

    [
        [
            Complex64::new(cos_val, 0.0),
            -Complex64::from_polar(1.0, lambda) * sin_val,
        ],
        [
            Complex64::from_polar(1.0, phi) * sin_val,
            Complex64::from_polar(1.0, phi + lambda) * cos_val,
        ],
    ]
}

/// Matrix for a single-qubit gate of the alphabet
pub fn single_qubit_matrix(gate: SingleQubitGate) -> Matrix2 {
    match gate {
        SingleQubitGate::H => HADAMARD,
        SingleQubitGate::X => PAULI_X,
        SingleQubitGate::Y => PAULI_Y,
        SingleQubitGate::Z => PAULI_Z,
        SingleQubitGate::S => S_GATE,
        SingleQubitGate::Sdg => S_GATE_DAGGER,
        SingleQubitGate::T => T_GATE,
        SingleQubitGate::Tdg => T_GATE_DAGGER,
        SingleQubitGate::SqrtX => SQRT_X,
        SingleQubitGate::SqrtY => SQRT_Y,
        SingleQubitGate::SqrtW => sqrt_w(),
        SingleQubitGate::Phase(theta) => phase(theta),
        SingleQubitGate::U { theta, phi, lambda } => u3(theta, phi, lambda),
    }
}

/// Target block of a controlled Pauli
pub fn pauli_matrix(pauli: Pauli) -> Matrix2 {
    match pauli {
        Pauli::X => PAULI_X,
        Pauli::Y => PAULI_Y,
        Pauli::Z => PAULI_Z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_matrix_eq(a: &Matrix2, b: &Matrix2) {
        for r in 0..2 {
            for c in 0..2 {
                assert_relative_eq!(a[r][c].re, b[r][c].re, epsilon = 1e-12);
                assert_relative_eq!(a[r][c].im, b[r][c].im, epsilon = 1e-12);
            }
        }
    }

    fn dagger(m: &Matrix2) -> Matrix2 {
        [
            [m[0][0].conj(), m[1][0].conj()],
            [m[0][1].conj(), m[1][1].conj()],
        ]
    }

    const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

    #[test]
    fn test_sqrt_gates_square_to_pauli() {
        assert_matrix_eq(&matmul(&SQRT_X, &SQRT_X), &PAULI_X);
        assert_matrix_eq(&matmul(&SQRT_Y, &SQRT_Y), &PAULI_Y);
        assert_matrix_eq(&matmul(&T_GATE, &T_GATE), &S_GATE);
        assert_matrix_eq(&matmul(&S_GATE, &S_GATE), &PAULI_Z);
    }

    #[test]
    fn test_sqrt_w_is_unitary() {
        let w = sqrt_w();
        assert_matrix_eq(&matmul(&w, &dagger(&w)), &IDENTITY);
    }

    #[test]
    fn test_u3_special_cases() {
        use std::f64::consts::PI;
        // U(π, 0, π) = X
        assert_matrix_eq(&u3(PI, 0.0, PI), &PAULI_X);
        // U(0, 0, λ) = P(λ)
        assert_matrix_eq(&u3(0.0, 0.0, 0.3), &phase(0.3));
    }

    #[test]
    fn test_all_alphabet_unitary() {
        let gates = [
            SingleQubitGate::H,
            SingleQubitGate::Y,
            SingleQubitGate::Sdg,
            SingleQubitGate::Tdg,
            SingleQubitGate::SqrtW,
            SingleQubitGate::Phase(1.1),
            SingleQubitGate::U {
                theta: 0.4,
                phi: 2.0,
                lambda: 5.1,
            },
        ];
        for gate in gates {
            let m = single_qubit_matrix(gate);
            assert_matrix_eq(&matmul(&m, &dagger(&m)), &IDENTITY);
        }
    }
}
