// src/grover/mod.rs

//! Grover-style amplitude amplification: oracle construction, the fixed
//! diffusion operator, iteration-count schedules, and the driver that wires
//! them together.
//!
//! Oracles, diffusers, and iteration counts all come in two swappable
//! flavors. `bit_flip_oracle`, `diffuser`, and `FourthRoot` form the
//! amplitude-flip strategy: per-qubit marking (one gate per qubit position,
//! candidate i carried by qubit i), the fixed diffusion sequence including
//! its extra phase gate, and the halved-exponent iteration count.
//! `phase_oracle`, `mean_inversion_diffuser`, and `SquareRoot` are the
//! textbook counterparts that actually concentrate probability mass on
//! marked labels. Pick per call; nothing is hard-coded.

use crate::circuits::Circuit;
use crate::core::constants::MAX_QUBITS;
use crate::core::QuampError;
use crate::operations::GateOp;
use crate::simulation::Simulator;
use std::f64::consts::PI;

/// How many (oracle, diffuser) repetitions the driver should run for an
/// n-qubit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationSchedule {
    /// `floor((π/4) · (2^n)^(1/4))`, equivalently `(π/4)·sqrt(2^(n/2))`
    /// with the halved exponent kept as-is. Optimal only by coincidence at
    /// small n; pairs with `bit_flip_oracle` in the amplitude-flip strategy.
    FourthRoot,
    /// `floor((π/4) · sqrt(2^n))`, the textbook Grover count for a single
    /// marked state. Pairs with `phase_oracle`.
    SquareRoot,
}

impl IterationSchedule {
    /// Evaluates the schedule for an n-qubit register. Zero is a valid
    /// result: the driver then leaves the uniform superposition untouched.
    pub fn iterations(&self, num_qubits: usize) -> usize {
        let dim = 2f64.powi(num_qubits as i32);
        let scaled = match self {
            IterationSchedule::FourthRoot => dim.sqrt().sqrt(),
            IterationSchedule::SquareRoot => dim.sqrt(),
        };
        ((PI / 4.0) * scaled).floor() as usize
    }
}

/// Builds the per-qubit amplitude-flip oracle: exactly `num_qubits` gates,
/// one per qubit position i: identity where `predicate(i)` holds, X
/// everywhere else. The caller enumerates candidates so that candidate i is
/// carried by qubit i; a matching candidate's qubit is the only one left
/// untouched.
///
/// If nothing matches, the result is the flip-everything circuit rather than
/// a true identity. That is a known approximation of this marking scheme,
/// kept deliberately; use [`phase_oracle`] where exact marking semantics
/// matter.
pub fn bit_flip_oracle<F>(num_qubits: usize, predicate: F) -> Circuit
where
    F: Fn(u64) -> bool,
{
    let mut oracle = Circuit::new();
    for qubit in 0..num_qubits {
        if predicate(qubit as u64) {
            oracle.add_operation(GateOp::identity(qubit));
        } else {
            oracle.add_operation(GateOp::pauli_x(qubit));
        }
    }
    oracle
}

/// Builds the textbook diagonal phase oracle: a single `PhaseFlip` gate
/// negating the amplitude of every basis label in `[0, 2^n)` satisfying the
/// predicate. With zero matches the gate is a true identity.
///
/// Enumerating 2^n labels is the whole point of an oracle over basis states,
/// so the register size is capacity-checked up front.
pub fn phase_oracle<F>(num_qubits: usize, predicate: F) -> Result<Circuit, QuampError>
where
    F: Fn(u64) -> bool,
{
    if num_qubits > MAX_QUBITS {
        return Err(QuampError::CapacityExceeded { requested: num_qubits, limit: MAX_QUBITS });
    }
    let dim = 1u64 << num_qubits;
    let marked: Vec<u64> = (0..dim).filter(|&label| predicate(label)).collect();
    let mut oracle = Circuit::new();
    oracle.add_operation(GateOp::phase_flip(marked));
    Ok(oracle)
}

/// Builds the fixed diffusion circuit of the amplitude-flip strategy for an
/// n-qubit register: H on every qubit, X on every qubit, Z on the last qubit, H on
/// the last, a multi-controlled X with all but the last qubit as controls
/// and the last as target, H on the last, X on every qubit, H on every
/// qubit. Independent of the oracle; built once per qubit count and reused
/// every iteration. For a single qubit the control list is empty and the MCX
/// degenerates to a plain X.
///
/// The extra Z makes this operator `X(last) ∘ (2|u⟩⟨u| − I)` rather than a
/// pure inversion about the mean: it fixes the uniform superposition but
/// carries marked-state mass to the label with its last bit flipped. Use
/// [`mean_inversion_diffuser`] where true amplification is wanted.
pub fn diffuser(num_qubits: usize) -> Circuit {
    if num_qubits == 0 {
        return Circuit::new();
    }
    let last = num_qubits - 1;
    let mut circuit = Circuit::new();
    circuit.add_operations((0..num_qubits).map(GateOp::hadamard));
    circuit.add_operations((0..num_qubits).map(GateOp::pauli_x));
    circuit.add_operation(GateOp::pauli_z(last));
    circuit.add_operation(GateOp::hadamard(last));
    circuit.add_operation(GateOp::mcx((0..last).collect(), last));
    circuit.add_operation(GateOp::hadamard(last));
    circuit.add_operations((0..num_qubits).map(GateOp::pauli_x));
    circuit.add_operations((0..num_qubits).map(GateOp::hadamard));
    circuit
}

/// Builds the textbook Grover diffusion circuit, "invert about the mean
/// amplitude": the same H/X sandwich around the multi-controlled phase flip,
/// without the stray Z. Equal to `2|u⟩⟨u| − I` up to global phase, where |u⟩
/// is the uniform superposition.
pub fn mean_inversion_diffuser(num_qubits: usize) -> Circuit {
    if num_qubits == 0 {
        return Circuit::new();
    }
    let last = num_qubits - 1;
    let mut circuit = Circuit::new();
    circuit.add_operations((0..num_qubits).map(GateOp::hadamard));
    circuit.add_operations((0..num_qubits).map(GateOp::pauli_x));
    circuit.add_operation(GateOp::hadamard(last));
    circuit.add_operation(GateOp::mcx((0..last).collect(), last));
    circuit.add_operation(GateOp::hadamard(last));
    circuit.add_operations((0..num_qubits).map(GateOp::pauli_x));
    circuit.add_operations((0..num_qubits).map(GateOp::hadamard));
    circuit
}

/// Builds the uniform-superposition preparation circuit: H on every qubit.
pub fn uniform_superposition(num_qubits: usize) -> Circuit {
    let mut circuit = Circuit::new();
    circuit.add_operations((0..num_qubits).map(GateOp::hadamard));
    circuit
}

/// Runs the amplification loop: a fresh |0…0⟩ register, Hadamard on every
/// qubit, then `iterations` repetitions of oracle followed by diffuser.
/// Returns the simulator holding the final state for sampling. Zero
/// iterations is valid and yields the uniform superposition unchanged.
pub fn amplify(
    num_qubits: usize,
    oracle: &Circuit,
    diffuser: &Circuit,
    iterations: usize,
) -> Result<Simulator, QuampError> {
    let mut simulator = Simulator::new(num_qubits)?;
    simulator.apply(&uniform_superposition(num_qubits))?;
    for _ in 0..iterations {
        simulator.apply(oracle)?;
        simulator.apply(diffuser)?;
    }
    Ok(simulator)
}

/// Convenience driver for the textbook strategy: phase oracle plus
/// mean-inversion diffuser under the given schedule. The predicate receives
/// basis labels. With `SquareRoot` and a single marked label this
/// concentrates nearly all probability mass on it.
pub fn search<F>(
    num_qubits: usize,
    predicate: F,
    schedule: IterationSchedule,
) -> Result<Simulator, QuampError>
where
    F: Fn(u64) -> bool,
{
    let oracle = phase_oracle(num_qubits, &predicate)?;
    let diffusion = mean_inversion_diffuser(num_qubits);
    amplify(num_qubits, &oracle, &diffusion, schedule.iterations(num_qubits))
}

/// Convenience driver for the amplitude-flip strategy: per-qubit marking
/// oracle plus the fixed diffusion sequence under the given schedule. The
/// predicate receives qubit positions (candidate indices), not basis labels.
pub fn search_bit_flip<F>(
    num_qubits: usize,
    predicate: F,
    schedule: IterationSchedule,
) -> Result<Simulator, QuampError>
where
    F: Fn(u64) -> bool,
{
    let oracle = bit_flip_oracle(num_qubits, &predicate);
    let diffusion = diffuser(num_qubits);
    amplify(num_qubits, &oracle, &diffusion, schedule.iterations(num_qubits))
}
