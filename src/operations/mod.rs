// src/operations/mod.rs

//! Defines the gate operations a circuit can contain.
//!
//! Gates are a closed tagged variant (`GateOp`) rather than trait objects:
//! the simulation engine dispatches with a single exhaustive `match`, which
//! keeps the hot path free of virtual-call indirection. A `GateOp` is
//! immutable once constructed and carries everything needed to apply it:
//! target indices plus either an explicit matrix or the parameters the
//! engine materializes one from.

use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// A 2×2 complex matrix acting on one qubit.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// A 4×4 complex matrix acting on an ordered pair of qubits.
/// Row/column index is `bit(first) * 2 + bit(second)`.
pub type Matrix4 = [[Complex<f64>; 4]; 4];

/// Axis of a parametrized single-qubit rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// Rotation about the X axis of the Bloch sphere.
    X,
    /// Rotation about the Y axis.
    Y,
    /// Rotation about the Z axis.
    Z,
}

/// One gate in a circuit.
///
/// The matrix-carrying variants accept arbitrary matrices; the engine checks
/// them against the unitarity tolerance before touching the state. The other
/// variants are unitary by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOp {
    /// An arbitrary single-qubit unitary applied to one target qubit,
    /// acting as identity on every other qubit.
    Unitary {
        /// The target qubit index.
        target: usize,
        /// The 2×2 unitary to apply.
        matrix: Matrix2,
    },

    /// An arbitrary two-qubit unitary applied to an ordered pair of qubits.
    /// The matrix basis order follows the pair order: row index is
    /// `bit(targets.0) * 2 + bit(targets.1)`.
    Entangle {
        /// The ordered target pair.
        targets: (usize, usize),
        /// The 4×4 unitary to apply.
        matrix: Matrix4,
    },

    /// A multi-controlled X: flips the target qubit on every basis state
    /// whose control bits are all 1. A pure index permutation with no
    /// amplitude mixing, hence no floating-point drift. An empty control
    /// list degenerates to a plain X.
    MultiControlledX {
        /// The control qubit indices.
        controls: Vec<usize>,
        /// The target qubit index.
        target: usize,
    },

    /// A parametrized rotation by angle `theta` about one Bloch-sphere axis.
    Rotate {
        /// The rotation axis.
        axis: RotationAxis,
        /// The rotation angle in radians.
        theta: f64,
        /// The target qubit index.
        target: usize,
    },

    /// A diagonal marking gate: negates the amplitude of every listed basis
    /// state and leaves all others untouched. This is the textbook phase
    /// oracle shape (diagonal, involutive, drift-free).
    PhaseFlip {
        /// Basis-state labels whose amplitude is negated.
        states: Vec<u64>,
    },
}

impl GateOp {
    /// The identity gate on one qubit. Occupies a slot in a circuit without
    /// transforming the state.
    pub fn identity(target: usize) -> Self {
        GateOp::Unitary {
            target,
            matrix: [
                [Complex::new(1.0, 0.0), Complex::zero()],
                [Complex::zero(), Complex::new(1.0, 0.0)],
            ],
        }
    }

    /// The Hadamard gate, mapping |0⟩ to an equal superposition.
    pub fn hadamard(target: usize) -> Self {
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        GateOp::Unitary {
            target,
            matrix: [[h, h], [h, -h]],
        }
    }

    /// The Pauli X (bit flip) gate.
    pub fn pauli_x(target: usize) -> Self {
        GateOp::Unitary {
            target,
            matrix: [
                [Complex::zero(), Complex::new(1.0, 0.0)],
                [Complex::new(1.0, 0.0), Complex::zero()],
            ],
        }
    }

    /// The Pauli Y gate.
    pub fn pauli_y(target: usize) -> Self {
        let i = Complex::i();
        GateOp::Unitary {
            target,
            matrix: [[Complex::zero(), -i], [i, Complex::zero()]],
        }
    }

    /// The Pauli Z (phase flip) gate.
    pub fn pauli_z(target: usize) -> Self {
        GateOp::Unitary {
            target,
            matrix: [
                [Complex::new(1.0, 0.0), Complex::zero()],
                [Complex::zero(), Complex::new(-1.0, 0.0)],
            ],
        }
    }

    /// A phase shift: multiplies the |1⟩ amplitude by `e^(iθ)`.
    pub fn phase_shift(target: usize, theta: f64) -> Self {
        GateOp::Unitary {
            target,
            matrix: [
                [Complex::new(1.0, 0.0), Complex::zero()],
                [Complex::zero(), Complex::from_polar(1.0, theta)],
            ],
        }
    }

    /// A rotation by `theta` about the X axis.
    pub fn rx(target: usize, theta: f64) -> Self {
        GateOp::Rotate { axis: RotationAxis::X, theta, target }
    }

    /// A rotation by `theta` about the Y axis.
    pub fn ry(target: usize, theta: f64) -> Self {
        GateOp::Rotate { axis: RotationAxis::Y, theta, target }
    }

    /// A rotation by `theta` about the Z axis.
    pub fn rz(target: usize, theta: f64) -> Self {
        GateOp::Rotate { axis: RotationAxis::Z, theta, target }
    }

    /// The parametrized ZZ-power entangler: `diag(1, e^(iπt), e^(iπt), 1)`,
    /// the t-th power of Pauli Z ⊗ Z. At `t = 1` this is Z ⊗ Z itself;
    /// fractional powers apply a partial phase to the odd-parity states.
    pub fn zz_power(q1: usize, q2: usize, t: f64) -> Self {
        let one = Complex::new(1.0, 0.0);
        let phase = Complex::from_polar(1.0, PI * t);
        let zero = Complex::zero();
        GateOp::Entangle {
            targets: (q1, q2),
            matrix: [
                [one, zero, zero, zero],
                [zero, phase, zero, zero],
                [zero, zero, phase, zero],
                [zero, zero, zero, one],
            ],
        }
    }

    /// A multi-controlled X with the given control set.
    pub fn mcx(controls: Vec<usize>, target: usize) -> Self {
        GateOp::MultiControlledX { controls, target }
    }

    /// A diagonal phase-flip marking the listed basis states.
    pub fn phase_flip(states: Vec<u64>) -> Self {
        GateOp::PhaseFlip { states }
    }

    /// Returns every qubit index the operation directly references.
    /// `PhaseFlip` acts on basis labels rather than individual qubits and
    /// reports none.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            GateOp::Unitary { target, .. } => vec![*target],
            GateOp::Entangle { targets, .. } => vec![targets.0, targets.1],
            GateOp::MultiControlledX { controls, target } => {
                let mut qubits = controls.clone();
                qubits.push(*target);
                qubits
            }
            GateOp::Rotate { target, .. } => vec![*target],
            GateOp::PhaseFlip { .. } => Vec::new(),
        }
    }
}

/// Materializes the 2×2 matrix of a parametrized rotation.
pub(crate) fn rotation_matrix(axis: RotationAxis, theta: f64) -> Matrix2 {
    let half = theta / 2.0;
    let cos = half.cos();
    let sin = half.sin();
    match axis {
        // Rx(θ) = [[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]]
        RotationAxis::X => [
            [Complex::new(cos, 0.0), Complex::new(0.0, -sin)],
            [Complex::new(0.0, -sin), Complex::new(cos, 0.0)],
        ],
        // Ry(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]
        RotationAxis::Y => [
            [Complex::new(cos, 0.0), Complex::new(-sin, 0.0)],
            [Complex::new(sin, 0.0), Complex::new(cos, 0.0)],
        ],
        // Rz(θ) = diag(e^(-iθ/2), e^(iθ/2))
        RotationAxis::Z => [
            [Complex::from_polar(1.0, -half), Complex::zero()],
            [Complex::zero(), Complex::from_polar(1.0, half)],
        ],
    }
}
