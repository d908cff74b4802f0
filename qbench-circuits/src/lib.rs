//! Randomized benchmark circuits for QBench
//!
//! This crate provides the workloads the QBench harness times:
//! - [`RandomUniversalCircuit`]: random single-qubit gates and random
//!   all-to-all couplings, in a classic and an extended gate set
//! - [`GridTiledCircuit`]: Sycamore-style √X/√Y/√W layers with ISWAP
//!   couplers tiled over a near-square grid
//! - [`NearestNeighborCircuit`]: H/X/T/T† layers with CNOT or CZ between
//!   grid neighbours
//! - [`QftCircuit`]: quantum Fourier transform over the whole register
//!
//! and the building blocks they share: grid factorization ([`grid`]),
//! without-replacement qubit picking ([`pool`]), no-repeat gate choice
//! ([`chooser`]) and coupler tiling ([`tiling`]).
//!
//! Generators are driven through [`qbench_core::QuantumEngine`] and draw all
//! of their randomness from it, so a replaying engine reproduces a circuit
//! exactly.

pub mod chooser;
pub mod generators;
pub mod grid;
pub mod pool;
pub mod tiling;

pub use generators::{
    AnyCircuit, CircuitGenerator, GridTiledCircuit, NearestNeighborCircuit, QftCircuit,
    RandomUniversalCircuit, UniversalVariant,
};
pub use grid::{CellMapping, GridShape};
pub use pool::QubitPool;
pub use tiling::{Coupler, CouplerRule, TilingSequence};
