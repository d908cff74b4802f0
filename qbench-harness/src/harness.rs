//! Timed trial loop
//!
//! For every (qubit count, depth) configuration the harness prepares the
//! register, runs `iterations` timed trials of a generator and reduces the
//! timings to a [`TimingSummary`]. Preparation happens outside the timed
//! window; [`QuantumEngine::finish`] is called on both sides of it so
//! asynchronous engines are charged for exactly the circuit's work.

use crate::config::{BenchmarkConfig, ResetMode};
use crate::error::{HarnessError, Result};
use crate::stats::{sample_value, TimingSummary};
use qbench_circuits::CircuitGenerator;
use qbench_core::{permutation_from_draw, EngineFactory, QuantumEngine};
use std::f64::consts::PI;
use std::time::Instant;

/// Runs benchmark sweeps for one configuration
#[derive(Debug, Clone)]
pub struct Harness {
    config: BenchmarkConfig,
}

impl Harness {
    /// Create a harness, validating `config`
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    #[inline]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Sweep every configuration and collect the summaries
    pub fn run<G, F>(&self, generator: &G, factory: &mut F) -> Result<Vec<TimingSummary>>
    where
        G: CircuitGenerator,
        F: EngineFactory,
    {
        let mut summaries = Vec::new();
        self.run_with(generator, factory, |summary| summaries.push(summary.clone()))?;
        Ok(summaries)
    }

    /// Sweep every configuration, handing each summary to `on_summary` as
    /// soon as it is ready
    ///
    /// Generators that ignore depth run at `min_depth` only.
    pub fn run_with<G, F, C>(&self, generator: &G, factory: &mut F, mut on_summary: C) -> Result<()>
    where
        G: CircuitGenerator,
        F: EngineFactory,
        C: FnMut(&TimingSummary),
    {
        let depths = if generator.uses_depth() {
            self.config.depth_range()
        } else {
            self.config.min_depth..=self.config.min_depth
        };

        tracing::info!(
            circuit = generator.name(),
            qubits = ?self.config.qubit_range(),
            depths = ?depths,
            iterations = self.config.iterations,
            reset = %self.config.reset_mode,
            "starting benchmark sweep"
        );

        for num_qubits in self.config.qubit_range() {
            for depth in depths.clone() {
                let summary = self.run_configuration(generator, factory, num_qubits, depth)?;
                on_summary(&summary);
            }
        }
        Ok(())
    }

    /// Time `iterations` trials at one (qubit count, depth)
    pub fn run_configuration<G, F>(
        &self,
        generator: &G,
        factory: &mut F,
        num_qubits: usize,
        depth: usize,
    ) -> Result<TimingSummary>
    where
        G: CircuitGenerator,
        F: EngineFactory,
    {
        let _span = tracing::info_span!("configuration", num_qubits, depth).entered();
        let engine_err = |source| HarnessError::engine(num_qubits, depth, source);

        let mut reused = if self.config.reset_mode.reuses_engine() {
            Some(factory.create(num_qubits, 0).map_err(engine_err)?)
        } else {
            None
        };

        let mut samples = Vec::with_capacity(self.config.iterations);
        for trial in 0..self.config.iterations {
            let mut fresh;
            let engine = match reused.as_mut() {
                Some(engine) => {
                    self.reset(engine, num_qubits).map_err(engine_err)?;
                    engine
                }
                None => {
                    fresh = random_separable(factory, num_qubits).map_err(engine_err)?;
                    &mut fresh
                }
            };

            if self.config.hadamard_prelude {
                hadamard_prelude(engine, num_qubits).map_err(engine_err)?;
            }
            engine.finish().map_err(engine_err)?;

            let start = Instant::now();
            generator
                .generate(engine, num_qubits, depth)
                .map_err(engine_err)?;
            engine.finish().map_err(engine_err)?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            tracing::debug!(trial, elapsed_ms, "trial finished");
            samples.push(sample_value(elapsed_ms, self.config.log_normal));
        }

        let summary =
            TimingSummary::from_samples(num_qubits, depth, samples, self.config.log_normal)?;
        tracing::info!(
            mean_ms = summary.mean,
            median_ms = summary.median,
            "configuration finished"
        );
        Ok(summary)
    }

    fn reset<E: QuantumEngine>(
        &self,
        engine: &mut E,
        num_qubits: usize,
    ) -> qbench_core::Result<()> {
        match self.config.reset_mode {
            ResetMode::ZeroPermutation => engine.set_permutation(0),
            ResetMode::RandomPermutation => {
                let permutation = permutation_from_draw(engine.rand(), num_qubits);
                engine.set_permutation(permutation)
            }
            // Separable registers are rebuilt, never reset
            ResetMode::RandomSeparable => Ok(()),
        }
    }
}

/// Register of `num_qubits` independently rotated qubits
///
/// Each qubit is built alone, rotated by `U(2π·r₁, 2π·r₂, 2π·r₃)` with draws
/// from its own engine, then appended to the register.
pub fn random_separable<F: EngineFactory>(
    factory: &mut F,
    num_qubits: usize,
) -> qbench_core::Result<F::Engine> {
    let mut register = random_qubit(factory)?;
    for _ in 1..num_qubits {
        let qubit = random_qubit(factory)?;
        register.compose(qubit)?;
    }
    Ok(register)
}

fn random_qubit<F: EngineFactory>(factory: &mut F) -> qbench_core::Result<F::Engine> {
    let mut qubit = factory.create(1, 0)?;
    let theta = 2.0 * PI * qubit.rand();
    let phi = 2.0 * PI * qubit.rand();
    let lambda = 2.0 * PI * qubit.rand();
    qubit.u(0, theta, phi, lambda)?;
    Ok(qubit)
}

/// Apply H to each qubit independently with probability ½
pub fn hadamard_prelude<E: QuantumEngine>(
    engine: &mut E,
    num_qubits: usize,
) -> qbench_core::Result<()> {
    for qubit in 0..num_qubits {
        if engine.rand() >= 0.5 {
            engine.h(qubit)?;
        }
    }
    Ok(())
}
