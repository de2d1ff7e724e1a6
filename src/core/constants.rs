//! Numerical tolerances and capacity limits used across the simulation.

/// Largest supported register size. A 26-qubit state vector already holds
/// 2^26 complex amplitudes (1 GiB); requests beyond this fail with
/// `CapacityExceeded` before any allocation happens.
pub const MAX_QUBITS: usize = 26;

/// Tolerance for the unitarity check on caller-supplied gate matrices.
pub const UNITARY_TOLERANCE: f64 = 1e-9;

/// Allowed deviation of the state norm from 1. Accumulated floating-point
/// error over long circuits is expected and tolerated, not corrected.
pub const NORM_TOLERANCE: f64 = 1e-6;
