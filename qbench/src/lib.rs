//! QBench CLI
//!
//! Command-line runner for the QBench workload suite.
//!
//! # Usage
//!
//! ```bash
//! # Time the classic random circuit over 4..20 qubits, depths 1..20
//! qbench run --circuit random-universal
//!
//! # QFT from random separable states, JSON to a file
//! qbench run --circuit qft --qubits 4..16 --reset random-separable \
//!     --format json --output qft.json
//!
//! # Print the operations of one grid-tiled circuit
//! qbench trace --circuit grid-tiled --qubits 6 --depth 2 --seed 7
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use qbench_circuits::{
    AnyCircuit, GridTiledCircuit, NearestNeighborCircuit, QftCircuit, RandomUniversalCircuit,
};
use qbench_harness::{ReportFormat, ResetMode};
use std::path::PathBuf;

pub mod run;
pub mod trace;

/// QBench command-line interface
#[derive(Parser, Debug)]
#[command(name = "qbench")]
#[command(author, version, about = "Randomized quantum circuit benchmarks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time a circuit over a qubit and depth sweep
    Run(RunArgs),

    /// Print the operation log of one circuit
    Trace(TraceArgs),
}

/// Arguments for `qbench run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Circuit to benchmark
    #[arg(short, long, value_enum, default_value = "random-universal")]
    pub circuit: CircuitKind,

    /// Qubit count or inclusive range, e.g. `8` or `4..20`
    #[arg(short, long, default_value = "4..20", value_parser = parse_qubit_range)]
    pub qubits: QubitRange,

    /// Shallowest depth
    #[arg(long, default_value = "1")]
    pub min_depth: usize,

    /// Deepest depth
    #[arg(long, default_value = "20")]
    pub max_depth: usize,

    /// Trials per configuration
    #[arg(short, long, default_value = "100")]
    pub iterations: usize,

    /// Register preparation before each trial
    #[arg(short, long, value_enum, default_value = "random-permutation")]
    pub reset: ResetArg,

    /// Apply H to each qubit with probability 1/2 before the circuit
    #[arg(long)]
    pub hadamard: bool,

    /// Average log2 of the trial times
    #[arg(long)]
    pub log_normal: bool,

    /// Swap CNOT/CZ operands on a coin flip (nearest-neighbor only)
    #[arg(long)]
    pub swap_operands: bool,

    /// Apply H to every qubit before the first layer (nearest-neighbor only)
    #[arg(long)]
    pub global_hadamard: bool,

    /// Engine the circuits run on
    #[arg(short, long, value_enum, default_value = "dense")]
    pub engine: EngineKind,

    /// Widest register the dense engine will allocate
    #[arg(long)]
    pub max_qubits: Option<usize>,

    /// Seed for reproducible randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `qbench trace`
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Circuit to trace
    #[arg(short, long, value_enum, default_value = "random-universal")]
    pub circuit: CircuitKind,

    /// Register width
    #[arg(short, long, default_value = "4")]
    pub qubits: usize,

    /// Circuit depth
    #[arg(short, long, default_value = "1")]
    pub depth: usize,

    /// Seed for the recorded randomness
    #[arg(short, long, default_value = "0")]
    pub seed: u64,

    /// Swap CNOT/CZ operands on a coin flip (nearest-neighbor only)
    #[arg(long)]
    pub swap_operands: bool,

    /// Apply H to every qubit before the first layer (nearest-neighbor only)
    #[arg(long)]
    pub global_hadamard: bool,
}

/// Circuit families
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircuitKind {
    /// Random single-qubit gates and random CNOT/CZ/CCNOT couplings
    RandomUniversal,
    /// Random universal circuit with the wider gate alphabet
    RandomUniversalExtended,
    /// √X/√Y/√W layers with ISWAP couplers, ABCDCDAB tiling
    GridTiled,
    /// Grid-tiled layers with row-parity couplers
    GridTiledRowParity,
    /// H/X/T/T† layers with CNOT or CZ between grid neighbours
    NearestNeighbor,
    /// Quantum Fourier transform (ignores depth)
    Qft,
}

impl CircuitKind {
    /// Generator for this family
    ///
    /// `swap_operands` and `global_hadamard` only affect nearest-neighbor
    /// circuits.
    pub fn build(self, swap_operands: bool, global_hadamard: bool) -> AnyCircuit {
        match self {
            Self::RandomUniversal => RandomUniversalCircuit::classic().into(),
            Self::RandomUniversalExtended => RandomUniversalCircuit::extended().into(),
            Self::GridTiled => GridTiledCircuit::fixed_offsets().into(),
            Self::GridTiledRowParity => GridTiledCircuit::row_parity().into(),
            Self::NearestNeighbor => NearestNeighborCircuit::new()
                .with_swap_operands(swap_operands)
                .with_hadamard_prelude(global_hadamard)
                .into(),
            Self::Qft => QftCircuit.into(),
        }
    }
}

/// Engines available to `qbench run`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    /// State-vector simulation
    Dense,
    /// Operation log only; times circuit generation overhead
    Recording,
}

impl EngineKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Recording => "recording",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetArg {
    /// |0…0⟩
    Zero,
    /// Uniformly random basis state
    RandomPermutation,
    /// Fresh register of independently rotated qubits
    RandomSeparable,
}

impl From<ResetArg> for ResetMode {
    fn from(arg: ResetArg) -> Self {
        match arg {
            ResetArg::Zero => ResetMode::ZeroPermutation,
            ResetArg::RandomPermutation => ResetMode::RandomPermutation,
            ResetArg::RandomSeparable => ResetMode::RandomSeparable,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Inclusive qubit range parsed from `n` or `a..b`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QubitRange {
    pub min: usize,
    pub max: usize,
}

/// Parse `n`, `a..b` or `a..=b`
pub fn parse_qubit_range(s: &str) -> Result<QubitRange, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid qubit count '{}': {}", part.trim(), e))
    };

    let range = match s.split_once("..") {
        Some((lo, hi)) => QubitRange {
            min: parse(lo)?,
            max: parse(hi.strip_prefix('=').unwrap_or(hi))?,
        },
        None => {
            let n = parse(s)?;
            QubitRange { min: n, max: n }
        }
    };

    if range.min > range.max {
        return Err(format!("empty qubit range {}..{}", range.min, range.max));
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use qbench_circuits::CircuitGenerator;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_qubit_range() {
        assert_eq!(parse_qubit_range("8"), Ok(QubitRange { min: 8, max: 8 }));
        assert_eq!(parse_qubit_range("4..20"), Ok(QubitRange { min: 4, max: 20 }));
        assert_eq!(parse_qubit_range("4..=6"), Ok(QubitRange { min: 4, max: 6 }));
        assert!(parse_qubit_range("6..4").is_err());
        assert!(parse_qubit_range("four").is_err());
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["qbench", "run"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.circuit, CircuitKind::RandomUniversal);
        assert_eq!(args.qubits, QubitRange { min: 4, max: 20 });
        assert_eq!((args.min_depth, args.max_depth), (1, 20));
        assert_eq!(args.iterations, 100);
        assert_eq!(ResetMode::from(args.reset), ResetMode::RandomPermutation);
        assert_eq!(args.engine, EngineKind::Dense);
        assert_eq!(ReportFormat::from(args.format), ReportFormat::Csv);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "qbench",
            "run",
            "--circuit",
            "grid-tiled-row-parity",
            "--qubits",
            "6..9",
            "--reset",
            "random-separable",
            "--engine",
            "recording",
            "--format",
            "json",
            "--hadamard",
            "--log-normal",
            "--seed",
            "11",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.circuit, CircuitKind::GridTiledRowParity);
        assert_eq!(args.qubits, QubitRange { min: 6, max: 9 });
        assert_eq!(args.reset, ResetArg::RandomSeparable);
        assert_eq!(args.engine, EngineKind::Recording);
        assert_eq!(args.format, FormatArg::Json);
        assert!(args.hadamard && args.log_normal);
        assert_eq!(args.seed, Some(11));
    }

    #[test]
    fn test_global_hadamard_reaches_generator() {
        let cli = Cli::try_parse_from([
            "qbench",
            "run",
            "--circuit",
            "nearest-neighbor",
            "--global-hadamard",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.global_hadamard);
        assert!(!args.hadamard);

        let AnyCircuit::NearestNeighbor(circuit) =
            args.circuit.build(args.swap_operands, args.global_hadamard)
        else {
            panic!("expected nearest-neighbor");
        };
        assert!(circuit.hadamard_prelude);
        assert!(!circuit.swap_operands);
    }

    #[test]
    fn test_circuit_names() {
        let names: Vec<String> = CircuitKind::value_variants()
            .iter()
            .map(|kind| kind.build(false, false).name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "random-universal",
                "random-universal-extended",
                "grid-tiled",
                "grid-tiled-row-parity",
                "nearest-neighbor",
                "qft",
            ]
        );
    }
}
