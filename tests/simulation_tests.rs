// tests/simulation_tests.rs

// Import necessary types from the quamp crate
use quamp::{
    check_normalization, Circuit, CircuitBuilder, GateOp, QuampError, Simulator, MAX_QUBITS,
};

use num_complex::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOLERANCE: f64 = 1e-9;

// Helper to assert that a simulator's probabilities match an expected list
fn check_probabilities(simulator: &Simulator, expected: &[f64]) {
    let actual = simulator.probabilities();
    assert_eq!(actual.len(), expected.len(), "probability vector length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() < TOLERANCE,
            "probability mismatch at index {}: actual {}, expected {}",
            i, a, e
        );
    }
}

// Helper to assert two amplitude lists match within tolerance
fn check_amplitudes(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
    assert_eq!(actual.len(), expected.len(), "amplitude vector length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).norm() < TOLERANCE,
            "amplitude mismatch at index {}: actual {}, expected {}",
            i, a, e
        );
    }
}

#[test]
fn test_empty_circuit_leaves_ground_state() -> Result<(), QuampError> {
    let circuit = Circuit::new();
    let mut simulator = Simulator::new(2)?;
    simulator.apply(&circuit)?;

    check_probabilities(&simulator, &[1.0, 0.0, 0.0, 0.0]);
    Ok(())
}

#[test]
fn test_reset_returns_to_ground_state() -> Result<(), QuampError> {
    let circuit = CircuitBuilder::new()
        .add_op(GateOp::hadamard(0))
        .add_op(GateOp::pauli_x(1))
        .build();

    let mut simulator = Simulator::new(2)?;
    simulator.apply(&circuit)?;
    simulator.reset();

    check_probabilities(&simulator, &[1.0, 0.0, 0.0, 0.0]);

    // The facade stays usable after a reset.
    simulator.apply(&circuit)?;
    assert!((simulator.state().norm_sqr() - 1.0).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_hadamard_on_every_qubit_is_uniform() -> Result<(), QuampError> {
    let num_qubits = 3;
    let circuit = CircuitBuilder::new()
        .add_ops((0..num_qubits).map(GateOp::hadamard))
        .build();

    let mut simulator = Simulator::new(num_qubits)?;
    simulator.apply(&circuit)?;

    let expected = vec![1.0 / 8.0; 8];
    check_probabilities(&simulator, &expected);
    Ok(())
}

#[test]
fn test_gate_and_inverse_round_trip() -> Result<(), QuampError> {
    // H is self-inverse; Rx(θ) inverts as Rx(-θ); ZZ^t inverts as ZZ^(-t).
    let theta = 0.7;
    let circuit = CircuitBuilder::new()
        .add_op(GateOp::hadamard(0))
        .add_op(GateOp::rx(1, theta))
        .add_op(GateOp::zz_power(0, 1, 0.3))
        .add_op(GateOp::zz_power(0, 1, -0.3))
        .add_op(GateOp::rx(1, -theta))
        .add_op(GateOp::hadamard(0))
        .build();

    let mut simulator = Simulator::new(2)?;
    simulator.apply(&circuit)?;

    let one = Complex::new(1.0, 0.0);
    let zero = Complex::new(0.0, 0.0);
    check_amplitudes(simulator.state().amplitudes(), &[one, zero, zero, zero]);
    Ok(())
}

#[test]
fn test_multi_controlled_x_double_application_is_identity() -> Result<(), QuampError> {
    // Put weight on several basis states first so the permutation is visible.
    let preparation = CircuitBuilder::new()
        .add_op(GateOp::hadamard(0))
        .add_op(GateOp::hadamard(1))
        .add_op(GateOp::rx(2, 0.4))
        .build();

    let mut simulator = Simulator::new(3)?;
    simulator.apply(&preparation)?;
    let before = simulator.state().clone();

    let mcx_twice = CircuitBuilder::new()
        .add_op(GateOp::mcx(vec![0, 1], 2))
        .add_op(GateOp::mcx(vec![0, 1], 2))
        .build();
    simulator.apply(&mcx_twice)?;

    check_amplitudes(simulator.state().amplitudes(), before.amplitudes());
    Ok(())
}

#[test]
fn test_multi_controlled_x_requires_all_controls() -> Result<(), QuampError> {
    // Control still |0>: the target must not flip.
    let mut simulator = Simulator::new(2)?;
    simulator.apply(&CircuitBuilder::new().add_op(GateOp::mcx(vec![0], 1)).build())?;
    check_probabilities(&simulator, &[1.0, 0.0, 0.0, 0.0]);

    // Control raised to |1>: the target flips, |10> -> |11>.
    simulator.reset();
    let circuit = CircuitBuilder::new()
        .add_op(GateOp::pauli_x(0))
        .add_op(GateOp::mcx(vec![0], 1))
        .build();
    simulator.apply(&circuit)?;
    check_probabilities(&simulator, &[0.0, 0.0, 0.0, 1.0]);
    Ok(())
}

#[test]
fn test_norm_preserved_across_mixed_circuit() -> Result<(), QuampError> {
    let circuit = CircuitBuilder::new()
        .add_op(GateOp::hadamard(0))
        .add_op(GateOp::ry(1, 1.1))
        .add_op(GateOp::zz_power(0, 1, 0.5))
        .add_op(GateOp::mcx(vec![0], 2))
        .add_op(GateOp::phase_shift(2, 0.9))
        .add_op(GateOp::phase_flip(vec![3, 6]))
        .add_op(GateOp::rz(0, -0.25))
        .build();

    let mut simulator = Simulator::new(3)?;
    simulator.apply(&circuit)?;

    check_normalization(simulator.state(), None)?;
    Ok(())
}

#[test]
fn test_circuit_concatenation_matches_sequential_application() -> Result<(), QuampError> {
    let first = CircuitBuilder::new()
        .add_op(GateOp::hadamard(0))
        .add_op(GateOp::rx(1, 0.7))
        .build();
    let second = CircuitBuilder::new()
        .add_op(GateOp::zz_power(0, 1, 0.5))
        .add_op(GateOp::pauli_x(0))
        .build();

    let mut sequential = Simulator::new(2)?;
    sequential.apply(&first)?;
    sequential.apply(&second)?;

    let mut combined = Simulator::new(2)?;
    combined.apply(&first.concat(&second))?;

    check_amplitudes(combined.state().amplitudes(), sequential.state().amplitudes());
    Ok(())
}

#[test]
fn test_qubit_index_out_of_range() -> Result<(), QuampError> {
    let mut simulator = Simulator::new(2)?;
    let circuit = CircuitBuilder::new().add_op(GateOp::hadamard(5)).build();

    let result = simulator.apply(&circuit);
    assert_eq!(
        result,
        Err(QuampError::IndexOutOfRange { index: 5, num_qubits: 2 })
    );
    Ok(())
}

#[test]
fn test_capacity_ceiling_is_enforced_before_allocation() {
    let result = Simulator::new(MAX_QUBITS + 1);
    assert_eq!(
        result.err(),
        Some(QuampError::CapacityExceeded { requested: MAX_QUBITS + 1, limit: MAX_QUBITS })
    );
}

#[test]
fn test_zero_qubit_register_is_rejected() {
    let result = Simulator::new(0);
    assert!(matches!(result.err(), Some(QuampError::DimensionMismatch { .. })));
}

#[test]
fn test_non_unitary_matrix_is_rejected() -> Result<(), QuampError> {
    let one = Complex::new(1.0, 0.0);
    let zero = Complex::new(0.0, 0.0);
    // Upper triangular with a stray 1: rows are not orthonormal.
    let bogus = GateOp::Unitary { target: 0, matrix: [[one, one], [zero, one]] };

    let mut simulator = Simulator::new(1)?;
    let result = simulator.apply(&CircuitBuilder::new().add_op(bogus).build());
    assert!(matches!(result, Err(QuampError::NotUnitary { .. })));

    // The rejection happened before any mutation.
    check_probabilities(&simulator, &[1.0, 0.0]);
    Ok(())
}

#[test]
fn test_entangler_target_collision_is_rejected() -> Result<(), QuampError> {
    let mut simulator = Simulator::new(2)?;
    let circuit = CircuitBuilder::new().add_op(GateOp::zz_power(1, 1, 0.5)).build();

    let result = simulator.apply(&circuit);
    assert!(matches!(result, Err(QuampError::DimensionMismatch { .. })));
    Ok(())
}

#[test]
fn test_phase_flip_label_beyond_dimension_is_rejected() -> Result<(), QuampError> {
    let mut simulator = Simulator::new(2)?;
    let circuit = CircuitBuilder::new().add_op(GateOp::phase_flip(vec![4])).build();

    let result = simulator.apply(&circuit);
    assert!(matches!(result, Err(QuampError::DimensionMismatch { .. })));
    Ok(())
}

#[test]
fn test_sampling_zero_shots_is_rejected() -> Result<(), QuampError> {
    let simulator = Simulator::new(2)?;
    let mut rng = StdRng::seed_from_u64(1);

    let result = simulator.sample(&mut rng, 0);
    assert_eq!(result.err(), Some(QuampError::InvalidShots { shots: 0 }));
    Ok(())
}

#[test]
fn test_sampling_one_shot_yields_one_entry() -> Result<(), QuampError> {
    let mut simulator = Simulator::new(2)?;
    simulator.apply(&CircuitBuilder::new().add_ops((0..2).map(GateOp::hadamard)).build())?;

    let mut rng = StdRng::seed_from_u64(3);
    let histogram = simulator.sample(&mut rng, 1)?;

    assert_eq!(histogram.len(), 1, "exactly one label should be observed");
    let (_, count) = histogram.most_frequent().expect("one entry present");
    assert_eq!(count, 1);
    assert_eq!(histogram.total_shots(), 1);
    Ok(())
}

#[test]
fn test_sampling_is_deterministic_under_a_fixed_seed() -> Result<(), QuampError> {
    let mut simulator = Simulator::new(3)?;
    simulator.apply(&CircuitBuilder::new().add_ops((0..3).map(GateOp::hadamard)).build())?;

    let mut rng_a = StdRng::seed_from_u64(11);
    let mut rng_b = StdRng::seed_from_u64(11);
    let histogram_a = simulator.sample(&mut rng_a, 256)?;
    let histogram_b = simulator.sample(&mut rng_b, 256)?;

    assert_eq!(histogram_a, histogram_b);
    assert_eq!(histogram_a.total_shots(), 256);
    Ok(())
}

#[test]
fn test_basis_state_sampling_is_certain() -> Result<(), QuampError> {
    // |10> on two qubits is label 2 under the qubit-0-most-significant
    // convention; every shot must land there.
    let mut simulator = Simulator::new(2)?;
    simulator.apply(&CircuitBuilder::new().add_op(GateOp::pauli_x(0)).build())?;

    let mut rng = StdRng::seed_from_u64(9);
    let histogram = simulator.sample(&mut rng, 64)?;

    assert_eq!(histogram.len(), 1);
    assert_eq!(histogram.count(2), 64);
    Ok(())
}
