//! `qbench run`: timed sweeps with a CSV or JSON report

use anyhow::{Context, Result};
use qbench_circuits::{AnyCircuit, CircuitGenerator};
use qbench_core::{EngineFactory, RecordingFactory};
use qbench_harness::{BenchmarkConfig, BenchmarkReport, Harness};
use qbench_state::{DenseEngineConfig, DenseFactory};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::{EngineKind, RunArgs};

/// Run the sweep and write the report
pub fn execute(args: &RunArgs) -> Result<()> {
    let report = benchmark(args)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            report.write(&mut writer, args.format.into())?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            report.write(&mut writer, args.format.into())?;
        }
    }

    Ok(())
}

/// Harness configuration described by `args`
pub fn benchmark_config(args: &RunArgs) -> BenchmarkConfig {
    BenchmarkConfig::new()
        .with_qubits(args.qubits.min, args.qubits.max)
        .with_depths(args.min_depth, args.max_depth)
        .with_iterations(args.iterations)
        .with_reset_mode(args.reset.into())
        .with_hadamard_prelude(args.hadamard)
        .with_log_normal(args.log_normal)
}

/// Run the sweep described by `args`
pub fn benchmark(args: &RunArgs) -> Result<BenchmarkReport> {
    let harness = Harness::new(benchmark_config(args)).context("invalid benchmark configuration")?;
    let circuit = args.circuit.build(args.swap_operands, args.global_hadamard);

    let results = match args.engine {
        EngineKind::Dense => {
            let mut config = DenseEngineConfig::new();
            if let Some(max_qubits) = args.max_qubits {
                config = config.with_max_qubits(max_qubits);
            }
            if let Some(seed) = args.seed {
                config = config.with_seed(seed);
            }
            config
                .validate()
                .map_err(anyhow::Error::msg)
                .context("invalid engine configuration")?;
            sweep(&harness, &circuit, &mut DenseFactory::new(config))?
        }
        EngineKind::Recording => {
            let mut factory = RecordingFactory::new(args.seed.unwrap_or(0));
            if let Some(max_qubits) = args.max_qubits {
                factory = factory.with_max_qubits(max_qubits);
            }
            sweep(&harness, &circuit, &mut factory)?
        }
    };

    Ok(BenchmarkReport {
        circuit: circuit.name().to_string(),
        engine: args.engine.name().to_string(),
        config: harness.config().clone(),
        results,
    })
}

fn sweep<F: EngineFactory>(
    harness: &Harness,
    circuit: &AnyCircuit,
    factory: &mut F,
) -> Result<Vec<qbench_harness::TimingSummary>> {
    let results = harness
        .run(circuit, factory)
        .with_context(|| format!("benchmark of {} failed", circuit.name()))?;
    Ok(results)
}
