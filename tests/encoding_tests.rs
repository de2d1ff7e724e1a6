// tests/encoding_tests.rs

use quamp::circuits::encoding::{
    encode_intensity, intensity_rotation_angle, threshold_feature_map,
};
use quamp::{GateOp, QuampError, RotationAxis, Simulator};

use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_intensity_extremes_map_to_angle_extremes() -> Result<(), QuampError> {
    // Full brightness leaves the qubit in |0>; full darkness flips it.
    assert!(intensity_rotation_angle(255.0)?.abs() < TOLERANCE);
    assert!((intensity_rotation_angle(0.0)? - PI).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_out_of_range_intensity_is_rejected() {
    for value in [-1.0, 255.5, f64::NAN, f64::INFINITY] {
        let result = intensity_rotation_angle(value);
        assert!(
            matches!(result, Err(QuampError::InvalidIntensity { .. })),
            "intensity {} should be rejected",
            value
        );
    }
}

#[test]
fn test_encoded_intensity_sets_per_qubit_probability() -> Result<(), QuampError> {
    // After Rx(2·arccos(sqrt(v/255))), each qubit measures |0> with
    // probability v/255 exactly.
    let value = 128.0;
    let circuit = encode_intensity(1, value)?;

    let mut simulator = Simulator::new(1)?;
    simulator.apply(&circuit)?;

    let probabilities = simulator.probabilities();
    assert!((probabilities[0] - value / 255.0).abs() < TOLERANCE);
    assert!((probabilities[1] - (1.0 - value / 255.0)).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_encode_intensity_rotates_every_qubit() -> Result<(), QuampError> {
    let circuit = encode_intensity(4, 200.0)?;
    assert_eq!(circuit.len(), 4);
    assert!(circuit
        .operations()
        .iter()
        .all(|op| matches!(op, GateOp::Rotate { axis: RotationAxis::X, .. })));
    Ok(())
}

#[test]
fn test_feature_map_structure() {
    // Two features, one above threshold: H, H, X, ZZ.
    let circuit = threshold_feature_map(&[0.8, 0.2], 0.5);
    assert_eq!(circuit.len(), 4);
    assert_eq!(circuit.width(), 2);

    let entanglers = circuit
        .operations()
        .iter()
        .filter(|op| matches!(op, GateOp::Entangle { .. }))
        .count();
    assert_eq!(entanglers, 1);

    // No features, no circuit.
    assert!(threshold_feature_map(&[], 0.5).is_empty());
}

#[test]
fn test_feature_map_probabilities_stay_uniform() -> Result<(), QuampError> {
    // The Hadamard layer makes the distribution uniform; the threshold X
    // gates permute basis states and the ZZ powers only adjust phases, so
    // the probabilities remain uniform.
    let circuit = threshold_feature_map(&[0.8, 0.2, 0.6], 0.5);

    let mut simulator = Simulator::new(3)?;
    simulator.apply(&circuit)?;

    for p in simulator.probabilities() {
        assert!((p - 1.0 / 8.0).abs() < 1e-6);
    }
    Ok(())
}
