//! Error handling logic

use std::fmt;

/// Error types for failures the simulation can detect.
/// Every variant is a local, synchronous failure surfaced to the immediate
/// caller; none are transient, so nothing is retried internally. A gate
/// application that fails leaves the state vector untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum QuampError {
    /// A qubit index referenced by a gate lies outside the declared register size.
    IndexOutOfRange {
        /// The offending qubit index
        index: usize,
        /// The declared register size
        num_qubits: usize,
    },

    /// A vector, gate, or basis label is inconsistent with the register shape:
    /// colliding target indices, a basis label beyond 2^n, or a state vector
    /// whose length does not match the register.
    DimensionMismatch {
        /// DimensionMismatch failure message
        message: String,
    },

    /// The requested qubit count would exceed the supported memory ceiling.
    /// Raised before any state vector is allocated.
    CapacityExceeded {
        /// Requested register size
        requested: usize,
        /// Maximum supported register size
        limit: usize,
    },

    /// A sampling request asked for zero measurement shots.
    InvalidShots {
        /// The rejected shot count
        shots: u64,
    },

    /// A gate matrix failed the unitarity tolerance check, or the state norm
    /// drifted far enough that a non-unitary transformation must have occurred.
    NotUnitary {
        /// NotUnitary failure message
        message: String,
    },

    /// An average-intensity input fell outside the valid [0, 255] range.
    InvalidIntensity {
        /// The rejected intensity value
        value: f64,
    },
}

impl fmt::Display for QuampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuampError::IndexOutOfRange { index, num_qubits } => {
                write!(f, "Qubit Index Out Of Range: index {} outside register of {} qubits", index, num_qubits)
            }
            QuampError::DimensionMismatch { message } => write!(f, "Dimension Mismatch: {}", message),
            QuampError::CapacityExceeded { requested, limit } => {
                write!(f, "Capacity Exceeded: {} qubits requested, at most {} supported", requested, limit)
            }
            QuampError::InvalidShots { shots } => {
                write!(f, "Invalid Shots: shot count must be positive, got {}", shots)
            }
            QuampError::NotUnitary { message } => write!(f, "Not Unitary: {}", message),
            QuampError::InvalidIntensity { value } => {
                write!(f, "Invalid Intensity: value {} outside [0, 255]", value)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QuampError {}
