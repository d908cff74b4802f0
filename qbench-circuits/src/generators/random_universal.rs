//! Random universal circuits over all-to-all connectivity
//!
//! Each layer applies one single-qubit gate per qubit, then drains a
//! [`QubitPool`] to couple random pairs (and sometimes triples) of qubits.

use super::{coin, CircuitGenerator};
use crate::chooser::{choose, GateTags};
use crate::pool::QubitPool;
use qbench_core::{Pauli, Polarity, QuantumEngine, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Gate set of a random universal circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UniversalVariant {
    /// {H, X, Y, T} singles; SWAP, CZ, CNOT and CCNOT couplings
    #[default]
    Classic,
    /// Clifford-plus-phase singles; (anti-)controlled X/Y/Z couplings with
    /// one or two controls
    Extended,
}

/// Random universal circuit generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RandomUniversalCircuit {
    pub variant: UniversalVariant,
}

impl RandomUniversalCircuit {
    /// Classic gate set
    pub fn classic() -> Self {
        Self {
            variant: UniversalVariant::Classic,
        }
    }

    /// Extended gate set
    pub fn extended() -> Self {
        Self {
            variant: UniversalVariant::Extended,
        }
    }
}

impl CircuitGenerator for RandomUniversalCircuit {
    fn name(&self) -> &str {
        match self.variant {
            UniversalVariant::Classic => "random-universal",
            UniversalVariant::Extended => "random-universal-extended",
        }
    }

    fn generate<E: QuantumEngine>(
        &self,
        engine: &mut E,
        num_qubits: usize,
        depth: usize,
    ) -> Result<()> {
        let mut tags = GateTags::new();

        for layer in 0..depth {
            tracing::trace!(layer, "random universal layer");
            match self.variant {
                UniversalVariant::Classic => {
                    classic_singles(engine, num_qubits, &mut tags)?;
                    classic_couplings(engine, num_qubits)?;
                }
                UniversalVariant::Extended => {
                    extended_singles(engine, num_qubits, &mut tags)?;
                    extended_couplings(engine, num_qubits)?;
                }
            }
        }

        engine.measure_all()?;
        Ok(())
    }
}

fn classic_singles<E: QuantumEngine>(
    engine: &mut E,
    num_qubits: usize,
    tags: &mut GateTags,
) -> Result<()> {
    for qubit in 0..num_qubits {
        let tag = choose(tags.previous(qubit), 4, engine.rand());
        match tag {
            0 => engine.h(qubit)?,
            1 => engine.x(qubit)?,
            2 => engine.y(qubit)?,
            _ => engine.t(qubit)?,
        }
        tags.record(qubit, tag);
    }
    Ok(())
}

fn classic_couplings<E: QuantumEngine>(engine: &mut E, num_qubits: usize) -> Result<()> {
    let mut pool = QubitPool::new(num_qubits);

    while pool.len() > 1 {
        let b1 = pool.pick(engine.rand());
        let b2 = pool.pick(engine.rand());

        // CCNOT is only on offer while a third qubit is left
        let max_gates = if pool.is_empty() { 3.0 } else { 4.0 };
        let r = max_gates * engine.rand();

        if r < 1.0 {
            engine.swap(b1, b2)?;
        } else if r < 2.0 {
            engine.cz(b1, b2)?;
        } else if r < 3.0 || pool.is_empty() {
            engine.cnot(b1, b2)?;
        } else {
            let b3 = pool.pick(engine.rand());
            engine.ccnot(b1, b2, b3)?;
        }
    }
    Ok(())
}

fn extended_singles<E: QuantumEngine>(
    engine: &mut E,
    num_qubits: usize,
    tags: &mut GateTags,
) -> Result<()> {
    for qubit in 0..num_qubits {
        let tag = choose(tags.previous(qubit), 4, engine.rand());
        match tag {
            0 => engine.h(qubit)?,
            1 => {
                if coin(engine) {
                    engine.s(qubit)?;
                } else {
                    engine.sdg(qubit)?;
                }
            }
            2 => {
                if coin(engine) {
                    engine.h(qubit)?;
                    engine.s(qubit)?;
                } else {
                    engine.sdg(qubit)?;
                    engine.h(qubit)?;
                }
            }
            _ => {}
        }
        tags.record(qubit, tag);

        let angle = 2.0 * PI * engine.rand();
        engine.phase(angle, qubit)?;
    }
    Ok(())
}

fn extended_couplings<E: QuantumEngine>(engine: &mut E, num_qubits: usize) -> Result<()> {
    let mut pool = QubitPool::new(num_qubits);

    while pool.len() > 1 {
        let b1 = pool.pick(engine.rand());
        let b2 = pool.pick(engine.rand());

        let pair = coin(engine) || pool.is_empty();
        if pair {
            let r = 4.0 * engine.rand();
            if r < 1.0 {
                if 4.0 * engine.rand() < 3.0 {
                    let polarity = Polarity::from_coin(engine.rand());
                    engine.apply_controlled(Pauli::X, polarity, &[b1], b2)?;
                } else {
                    engine.swap(b1, b2)?;
                }
            } else if let Some(pauli) = pauli_for(r) {
                let polarity = Polarity::from_coin(engine.rand());
                engine.apply_controlled(pauli, polarity, &[b1], b2)?;
            }
        } else {
            let b3 = pool.pick(engine.rand());
            let r = 4.0 * engine.rand();
            let pauli = if r < 1.0 { Some(Pauli::X) } else { pauli_for(r) };
            if let Some(pauli) = pauli {
                let polarity = Polarity::from_coin(engine.rand());
                engine.apply_controlled(pauli, polarity, &[b1, b2], b3)?;
            }
        }
    }
    Ok(())
}

/// Target Pauli for a scaled draw `r` in [1, 4); `None` is the identity slot
#[inline]
fn pauli_for(r: f64) -> Option<Pauli> {
    if r < 2.0 {
        Some(Pauli::Y)
    } else if r < 3.0 {
        Some(Pauli::Z)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbench_core::{Operation, RecordingEngine};

    #[test]
    fn test_names() {
        assert_eq!(RandomUniversalCircuit::classic().name(), "random-universal");
        assert_eq!(
            RandomUniversalCircuit::extended().name(),
            "random-universal-extended"
        );
    }

    #[test]
    fn test_classic_two_qubits_swap() {
        // singles: H (0.1), Y (0.6); picks 0.0 -> q0, 0.0 -> q1; r = 3·0.2 -> SWAP
        let mut engine = RecordingEngine::replay(2, vec![0.1, 0.6, 0.0, 0.0, 0.2]);
        RandomUniversalCircuit::classic()
            .generate(&mut engine, 2, 1)
            .unwrap();

        let names: Vec<String> = engine.operations().iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["H", "Y", "SWAP", "M", "M"]);
        assert_eq!(engine.operations()[2], Operation::Swap(0, 1));
    }

    #[test]
    fn test_classic_ccnot_takes_third_qubit() {
        // singles all 0.0 -> H; picks q0, q2 (swap-removed into slot 0), r = 4·0.9
        // -> CCNOT with the last qubit
        let draws = vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.9, 0.0];
        let mut engine = RecordingEngine::replay(3, draws);
        RandomUniversalCircuit::classic()
            .generate(&mut engine, 3, 1)
            .unwrap();

        let ccnot = engine
            .operations()
            .iter()
            .find(|op| op.name() == "CCNOT")
            .cloned()
            .unwrap();
        assert_eq!(
            ccnot,
            Operation::Controlled {
                gate: Pauli::X,
                polarity: Polarity::Controlled,
                controls: vec![0, 2],
                target: 1,
            }
        );
    }

    #[test]
    fn test_classic_last_pair_tops_out_at_cnot() {
        // With the pool drained r = 3·0.99 lands in the CNOT slot
        let mut engine = RecordingEngine::replay(2, vec![0.0, 0.5, 0.0, 0.0, 0.99]);
        RandomUniversalCircuit::classic()
            .generate(&mut engine, 2, 1)
            .unwrap();
        assert_eq!(engine.gate_counts().get("CNOT"), Some(&1));
    }

    #[test]
    fn test_single_qubit_gates_never_repeat() {
        let mut engine = RecordingEngine::seeded(5, 99);
        RandomUniversalCircuit::classic()
            .generate(&mut engine, 5, 12)
            .unwrap();

        let mut last: Vec<Option<String>> = vec![None; 5];
        for op in engine.operations() {
            if let Operation::Single { gate, qubit } = op {
                let name = gate.name().to_string();
                assert_ne!(last[*qubit].as_deref(), Some(name.as_str()));
                last[*qubit] = Some(name);
            }
        }
    }

    #[test]
    fn test_extended_identity_still_rotates_phase() {
        // single: tag 3 (identity) then phase; pair coin 0.1, r = 4·0.8 -> identity
        let draws = vec![0.9, 0.25, 0.9, 0.25, 0.0, 0.0, 0.1, 0.8];
        let mut engine = RecordingEngine::replay(2, draws);
        RandomUniversalCircuit::extended()
            .generate(&mut engine, 2, 1)
            .unwrap();

        let names: Vec<String> = engine.operations().iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["Phase", "Phase", "M", "M"]);
    }

    #[test]
    fn test_extended_anti_controls() {
        // singles: H + phase each; pair coin, r = 4·0.3 -> CY slot, polarity 0.7 -> anti
        let draws = vec![0.0, 0.5, 0.0, 0.5, 0.0, 0.0, 0.1, 0.3, 0.7];
        let mut engine = RecordingEngine::replay(2, draws);
        RandomUniversalCircuit::extended()
            .generate(&mut engine, 2, 1)
            .unwrap();
        assert_eq!(engine.gate_counts().get("AntiCY"), Some(&1));
    }

    /// Three identity singles (tag 3, then phase), then one coupling decision
    fn extended_triple_draws(coupling: &[f64]) -> Vec<f64> {
        let mut draws = vec![0.9, 0.25, 0.9, 0.25, 0.9, 0.25];
        draws.extend_from_slice(coupling);
        draws
    }

    #[test]
    fn test_extended_triple_anti_controlled() {
        // picks q0, q2; coin 0.7 -> triple; picks q1; r = 4·0.5 -> CCZ slot;
        // polarity 0.9 -> anti
        let draws = extended_triple_draws(&[0.0, 0.0, 0.7, 0.0, 0.5, 0.9]);
        let mut engine = RecordingEngine::replay(3, draws);
        RandomUniversalCircuit::extended()
            .generate(&mut engine, 3, 1)
            .unwrap();

        let couplings: Vec<Operation> = engine
            .operations()
            .iter()
            .filter(|op| matches!(op, Operation::Controlled { .. }))
            .cloned()
            .collect();
        assert_eq!(
            couplings,
            vec![Operation::Controlled {
                gate: Pauli::Z,
                polarity: Polarity::AntiControlled,
                controls: vec![0, 2],
                target: 1,
            }]
        );
    }

    #[test]
    fn test_extended_triple_toffoli_slot() {
        // r = 4·0.1 -> X target; polarity 0.2 -> controlled
        let draws = extended_triple_draws(&[0.0, 0.0, 0.7, 0.0, 0.1, 0.2]);
        let mut engine = RecordingEngine::replay(3, draws);
        RandomUniversalCircuit::extended()
            .generate(&mut engine, 3, 1)
            .unwrap();
        assert_eq!(engine.gate_counts().get("CCNOT"), Some(&1));
    }

    #[test]
    fn test_extended_triple_identity_slot() {
        // r = 4·0.8 -> identity: the triple consumes the pool, issues no gate
        let draws = extended_triple_draws(&[0.0, 0.0, 0.7, 0.0, 0.8]);
        let mut engine = RecordingEngine::replay(3, draws);
        RandomUniversalCircuit::extended()
            .generate(&mut engine, 3, 1)
            .unwrap();

        let names: Vec<String> = engine.operations().iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["Phase", "Phase", "Phase", "M", "M", "M"]);
    }

    #[test]
    fn test_extended_measures_each_qubit_once() {
        let mut engine = RecordingEngine::seeded(7, 3);
        RandomUniversalCircuit::extended()
            .generate(&mut engine, 7, 6)
            .unwrap();
        assert_eq!(engine.measured_qubits(), (0..7).collect::<Vec<_>>());
    }
}
