//! End-to-end tests for the circuit generators

use qbench_circuits::{
    AnyCircuit, CircuitGenerator, GridTiledCircuit, NearestNeighborCircuit, QftCircuit,
    RandomUniversalCircuit,
};
use qbench_core::{EngineFactory, Operation, QuantumEngine, RecordingEngine};
use qbench_state::{DenseEngineConfig, DenseFactory};

fn all_circuits() -> Vec<AnyCircuit> {
    vec![
        RandomUniversalCircuit::classic().into(),
        RandomUniversalCircuit::extended().into(),
        GridTiledCircuit::fixed_offsets().into(),
        GridTiledCircuit::row_parity().into(),
        NearestNeighborCircuit::new()
            .with_swap_operands(true)
            .with_hadamard_prelude(true)
            .into(),
        QftCircuit.into(),
    ]
}

#[test]
fn test_four_qubit_random_circuit_replay() {
    // four single-qubit draws, then two pairs of (pick, pick, gate) draws
    let draws = vec![0.1, 0.3, 0.6, 0.9, 0.1, 0.1, 0.3, 0.1, 0.1, 0.1];
    let mut engine = RecordingEngine::replay(4, draws);
    RandomUniversalCircuit::classic()
        .generate(&mut engine, 4, 1)
        .unwrap();

    let ops = engine.operations();

    let mut singles = vec![0; 4];
    let mut coupled = Vec::new();
    for op in ops {
        match op {
            Operation::Single { qubit, .. } => singles[*qubit] += 1,
            Operation::Measure { .. } => {}
            other => {
                assert_eq!(other.qubits().len(), 2, "{}", other);
                coupled.extend(other.qubits());
            }
        }
    }

    assert_eq!(singles, vec![1, 1, 1, 1]);
    coupled.sort_unstable();
    assert_eq!(coupled, vec![0, 1, 2, 3]);
    assert_eq!(engine.measured_qubits(), vec![0, 1, 2, 3]);
    assert_eq!(ops[4], Operation::Controlled {
        gate: qbench_core::Pauli::Z,
        polarity: qbench_core::Polarity::Controlled,
        controls: vec![0],
        target: 3,
    });
    assert_eq!(ops[5], Operation::Swap(2, 1));
}

#[test]
fn test_every_generator_measures_each_qubit_once() {
    for circuit in all_circuits() {
        for n in [1, 2, 5, 9] {
            let mut engine = RecordingEngine::seeded(n, 8);
            circuit.generate(&mut engine, n, 3).unwrap();
            assert_eq!(
                engine.measured_qubits(),
                (0..n).collect::<Vec<_>>(),
                "{} on {} qubits",
                circuit.name(),
                n
            );
        }
    }
}

#[test]
fn test_replay_is_reproducible() {
    for circuit in all_circuits() {
        let mut a = RecordingEngine::seeded(6, 31);
        let mut b = RecordingEngine::seeded(6, 31);
        circuit.generate(&mut a, 6, 4).unwrap();
        circuit.generate(&mut b, 6, 4).unwrap();
        assert_eq!(a.operations(), b.operations(), "{}", circuit.name());
    }
}

#[test]
fn test_generators_on_dense_engine() {
    let mut factory = DenseFactory::new(DenseEngineConfig::debug());
    for circuit in all_circuits() {
        let mut engine = factory.create(6, 0).unwrap();
        circuit.generate(&mut engine, 6, 5).unwrap();
        assert!(engine.is_normalized(1e-9), "{}", circuit.name());
        assert_eq!(engine.num_qubits(), 6);
    }
}

#[test]
fn test_engine_errors_propagate() {
    // the generator is told about more qubits than the register holds
    let mut engine = RecordingEngine::seeded(3, 1);
    let err = RandomUniversalCircuit::classic()
        .generate(&mut engine, 4, 1)
        .unwrap_err();
    assert_eq!(err, qbench_core::EngineError::InvalidQubit(3, 3));
}
