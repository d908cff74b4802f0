//! Benchmarks for dense engine gate kernels
//!
//! Compares sequential and rayon-parallel kernels across register widths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use qbench_core::{EngineFactory, QuantumEngine};
use qbench_state::kernels::{apply_controlled_gate, apply_single_qubit_gate};
use qbench_state::matrices::{HADAMARD, PAULI_X};
use qbench_state::{DenseEngineConfig, DenseFactory};

fn basis_state(num_qubits: usize) -> Vec<Complex64> {
    let mut state = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
    state[0] = Complex64::new(1.0, 0.0);
    state
}

fn bench_single_qubit_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gate");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1u64 << num_qubits;
        group.throughput(Throughput::Elements(size));

        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(
                BenchmarkId::new(label, num_qubits),
                num_qubits,
                |b, &num_qubits| {
                    let mut state = basis_state(num_qubits);
                    b.iter(|| {
                        apply_single_qubit_gate(
                            black_box(&mut state),
                            &HADAMARD,
                            num_qubits / 2,
                            parallel,
                        );
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_toffoli(c: &mut Criterion) {
    let mut group = c.benchmark_group("toffoli");

    for num_qubits in [10, 15, 20].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let mut state = basis_state(num_qubits);
                b.iter(|| {
                    apply_controlled_gate(black_box(&mut state), &PAULI_X, &[0, 1], 2, true, true);
                })
            },
        );
    }

    group.finish();
}

fn bench_measure_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_all");
    let mut factory = DenseFactory::new(DenseEngineConfig::default().with_seed(11));

    for num_qubits in [8, 12, 16].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                b.iter(|| {
                    let mut engine = factory.create(num_qubits, 0).unwrap();
                    for q in 0..num_qubits {
                        engine.h(q).unwrap();
                    }
                    black_box(engine.measure_all().unwrap())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_qubit_gate, bench_toffoli, bench_measure_all);
criterion_main!(benches);
