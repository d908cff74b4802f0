//! `qbench trace`: the operation log of a single circuit

use anyhow::{Context, Result};
use qbench_circuits::CircuitGenerator;
use qbench_core::{EngineFactory, RecordingEngine, RecordingFactory};
use std::io::{self, Write};

use crate::TraceArgs;

/// Print the trace to stdout
pub fn execute(args: &TraceArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_trace(args, &mut writer)
}

/// Record one circuit and write its operations followed by gate counts
pub fn write_trace<W: Write>(args: &TraceArgs, writer: &mut W) -> Result<()> {
    let engine = record(args)?;
    let operations = engine.operations();

    writeln!(
        writer,
        "# {} on {} qubits, depth {}, seed {}",
        args.circuit.build(args.swap_operands, args.global_hadamard).name(),
        args.qubits,
        args.depth,
        args.seed
    )?;
    for (i, op) in operations.iter().enumerate() {
        writeln!(writer, "{:>6}  {}", i, op)?;
    }

    writeln!(writer)?;
    writeln!(writer, "# gate counts")?;
    for (name, count) in engine.gate_counts() {
        writeln!(writer, "{:<10} {}", name, count)?;
    }
    let gates = operations.iter().filter(|op| op.is_gate()).count();
    writeln!(writer, "{:<10} {}", "total", gates)?;

    Ok(())
}

/// Run the traced circuit against a seeded recording engine
pub fn record(args: &TraceArgs) -> Result<RecordingEngine> {
    let circuit = args.circuit.build(args.swap_operands, args.global_hadamard);
    let mut engine = RecordingFactory::new(args.seed)
        .create(args.qubits, 0)
        .context("failed to create trace register")?;
    circuit
        .generate(&mut engine, args.qubits, args.depth)
        .with_context(|| format!("failed to trace {}", circuit.name()))?;
    tracing::debug!(operations = engine.operations().len(), "trace recorded");
    Ok(engine)
}
