// src/lib.rs

//! `quamp` - A library for discrete quantum-state simulation
//!
//! This library represents an n-qubit register as a complex amplitude
//! vector, applies unitary gate operations to it, and drives Grover-style
//! amplitude amplification with measurement sampling over the result.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod grover;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{QuampError, StateVector, MAX_QUBITS};
pub use operations::{GateOp, Matrix2, Matrix4, RotationAxis};
pub use circuits::{Circuit, CircuitBuilder};
pub use grover::IterationSchedule;
pub use simulation::{Histogram, Simulator};
pub use validation::{check_normalization, check_unitary_2x2, check_unitary_4x4};

// Example 1: Uniform superposition
// Hadamard on every qubit of a freshly constructed register spreads the
// probability mass evenly over all basis states.
/// ```
/// use quamp::{CircuitBuilder, GateOp, Simulator};
///
/// let circuit = CircuitBuilder::new()
///     .add_op(GateOp::hadamard(0))
///     .add_op(GateOp::hadamard(1))
///     .add_op(GateOp::hadamard(2))
///     .build();
///
/// let mut simulator = Simulator::new(3).unwrap();
/// simulator.apply(&circuit).unwrap();
///
/// // Every one of the 2^3 basis states measures with probability 1/8.
/// for p in simulator.probabilities() {
///     assert!((p - 0.125).abs() < 1e-9);
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Amplitude amplification
// A textbook phase oracle marking one of 8 basis labels, amplified for the
// schedule-derived iteration count, concentrates nearly all probability mass
// on the marked label. Sampling is seeded, so the outcome is reproducible.
/// ```
/// use quamp::grover::{self, IterationSchedule};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let marked: u64 = 5;
/// let simulator = grover::search(3, |label| label == marked, IterationSchedule::SquareRoot)
///     .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let histogram = simulator.sample(&mut rng, 1024).unwrap();
///
/// let (top_label, top_count) = histogram.most_frequent().unwrap();
/// assert_eq!(top_label, marked);
/// assert!(top_count > 900); // success probability after 2 iterations ≈ 0.945
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
