//! Amplitude kernels
//!
//! Every kernel takes the raw amplitude slice of an `n`-qubit state. Index
//! validation happens in [`DenseEngine`](crate::DenseEngine); kernels assume
//! in-range, distinct qubits.
//!
//! # Algorithm
//! A gate on target qubit `q` acts on pairs (i, i | 2^q) with bit `q` of `i`
//! clear. Chunking the state into blocks of `2^(q+1)` amplitudes puts every
//! pair in the same block, low half against high half, so blocks can be
//! handed to rayon independently.

use crate::matrices::Matrix2;
use num_complex::Complex64;
use rayon::prelude::*;

/// Visit every (|…0…⟩, |…1…⟩) amplitude pair of `target`
///
/// `f` receives the basis index of the low member and both amplitudes.
fn for_each_pair<F>(state: &mut [Complex64], target: usize, parallel: bool, f: F)
where
    F: Fn(usize, &mut Complex64, &mut Complex64) + Send + Sync,
{
    let stride = 1usize << target;
    let block = stride << 1;

    let body = |(block_index, chunk): (usize, &mut [Complex64])| {
        let (low, high) = chunk.split_at_mut(stride);
        let base = block_index * block;
        for (k, (a, b)) in low.iter_mut().zip(high.iter_mut()).enumerate() {
            f(base + k, a, b);
        }
    };

    if parallel {
        state.par_chunks_mut(block).enumerate().for_each(body);
    } else {
        state.chunks_mut(block).enumerate().for_each(body);
    }
}

/// Apply a 2×2 matrix to `target`
pub fn apply_single_qubit_gate(
    state: &mut [Complex64],
    matrix: &Matrix2,
    target: usize,
    parallel: bool,
) {
    let [[m00, m01], [m10, m11]] = *matrix;
    for_each_pair(state, target, parallel, |_, a, b| {
        let amp0 = *a;
        let amp1 = *b;
        *a = m00 * amp0 + m01 * amp1;
        *b = m10 * amp0 + m11 * amp1;
    });
}

/// Apply a 2×2 matrix to `target` on the subspace where every control bit
/// equals `control_value`
///
/// `control_value = true` gives the usual controlled gate, `false` the
/// anti-controlled one.
pub fn apply_controlled_gate(
    state: &mut [Complex64],
    matrix: &Matrix2,
    controls: &[usize],
    target: usize,
    control_value: bool,
    parallel: bool,
) {
    let mask = controls.iter().fold(0usize, |acc, &c| acc | (1 << c));
    let required = if control_value { mask } else { 0 };
    let [[m00, m01], [m10, m11]] = *matrix;

    for_each_pair(state, target, parallel, |index, a, b| {
        if index & mask != required {
            return;
        }
        let amp0 = *a;
        let amp1 = *b;
        *a = m00 * amp0 + m01 * amp1;
        *b = m10 * amp0 + m11 * amp1;
    });
}

/// Exchange `qubit1` and `qubit2`, multiplying the exchanged amplitudes by
/// `phase` (1 for SWAP, i for ISWAP)
pub fn apply_swap(state: &mut [Complex64], qubit1: usize, qubit2: usize, phase: Complex64) {
    let mask1 = 1usize << qubit1;
    let mask2 = 1usize << qubit2;

    for i in 0..state.len() {
        // Visit each |…1…0…⟩ / |…0…1…⟩ pair once, from the side with qubit1 set
        if i & mask1 == 0 || i & mask2 != 0 {
            continue;
        }
        let j = i ^ mask1 ^ mask2;
        let amp_i = state[i];
        state[i] = phase * state[j];
        state[j] = phase * amp_i;
    }
}

/// Multiply the |11⟩ component of (qubit1, qubit2) by e^(iθ)
pub fn apply_controlled_phase(
    state: &mut [Complex64],
    qubit1: usize,
    qubit2: usize,
    theta: f64,
    parallel: bool,
) {
    let factor = Complex64::from_polar(1.0, theta);
    let control_mask = 1usize << qubit1;
    for_each_pair(state, qubit2, parallel, |index, _, b| {
        if index & control_mask != 0 {
            *b *= factor;
        }
    });
}

/// Probability of finding `qubit` in |1⟩
pub fn probability_of_one(state: &[Complex64], qubit: usize) -> f64 {
    let mask = 1usize << qubit;
    state
        .iter()
        .enumerate()
        .filter(|(i, _)| i & mask != 0)
        .map(|(_, amp)| amp.norm_sqr())
        .sum()
}

/// Project `qubit` onto `outcome` and renormalize
///
/// Returns the norm of the projected state before renormalization; zero
/// means the outcome was impossible and the state is left zeroed.
pub fn collapse(state: &mut [Complex64], qubit: usize, outcome: bool) -> f64 {
    let mask = 1usize << qubit;
    let keep = if outcome { mask } else { 0 };

    let mut norm_sqr = 0.0;
    for (i, amp) in state.iter_mut().enumerate() {
        if i & mask == keep {
            norm_sqr += amp.norm_sqr();
        } else {
            *amp = Complex64::new(0.0, 0.0);
        }
    }

    let norm = norm_sqr.sqrt();
    if norm > 0.0 {
        let scale = 1.0 / norm;
        for amp in state.iter_mut() {
            *amp *= scale;
        }
    }
    norm
}

/// Tensor product with `high` placed above `low`: result[i | j << n_low] = low[i]·high[j]
pub fn kron(low: &[Complex64], high: &[Complex64]) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(low.len() * high.len());
    for h in high {
        out.extend(low.iter().map(|l| l * h));
    }
    out
}
