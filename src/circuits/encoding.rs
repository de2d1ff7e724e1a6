// src/circuits/encoding.rs

//! Circuit constructors that encode classical inputs into a register.
//!
//! These are the boundary with the image/feature collaborators: an averaged
//! pixel intensity arrives as one scalar in [0, 255], a feature row as a
//! slice of floats. The constructors turn them into circuits; reading the
//! inputs (video frames, datasets) and consuming the resulting probability
//! array stay outside this crate.

use super::Circuit;
use crate::core::QuampError;
use crate::operations::GateOp;

/// Maps an average pixel intensity in [0, 255] to a rotation angle via
/// `θ = 2·arccos(sqrt(value / 255))`. Intensity 255 gives θ = 0 (the qubit
/// stays |0⟩) and intensity 0 gives θ = π (a full flip).
pub fn intensity_rotation_angle(value: f64) -> Result<f64, QuampError> {
    if !value.is_finite() || !(0.0..=255.0).contains(&value) {
        return Err(QuampError::InvalidIntensity { value });
    }
    Ok(2.0 * (value / 255.0).sqrt().acos())
}

/// Builds the intensity-encoding circuit: an Rx rotation by the derived
/// angle on every qubit of an n-qubit register. Each qubit then measures
/// |0⟩ with probability `value / 255`.
pub fn encode_intensity(num_qubits: usize, value: f64) -> Result<Circuit, QuampError> {
    let theta = intensity_rotation_angle(value)?;
    let mut circuit = Circuit::new();
    for qubit in 0..num_qubits {
        circuit.add_operation(GateOp::rx(qubit, theta));
    }
    Ok(circuit)
}

/// Builds a thresholded feature-map circuit over `features.len()` qubits:
/// Hadamard on every qubit, an X on each qubit whose feature exceeds 0.5,
/// then a ZZ-power entangler between neighboring qubits. This is the
/// circuit-construction surface a per-example training caller drives.
pub fn threshold_feature_map(features: &[f64], exponent: f64) -> Circuit {
    let num_qubits = features.len();
    let mut circuit = Circuit::new();
    for qubit in 0..num_qubits {
        circuit.add_operation(GateOp::hadamard(qubit));
    }
    for (qubit, &feature) in features.iter().enumerate() {
        if feature > 0.5 {
            circuit.add_operation(GateOp::pauli_x(qubit));
        }
    }
    for qubit in 1..num_qubits {
        circuit.add_operation(GateOp::zz_power(qubit - 1, qubit, exponent));
    }
    circuit
}
