// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// The amplitude vector of an n-qubit register: one complex coefficient per
/// computational basis state, indexed by the integer value of the qubit
/// bitstring.
///
/// Bit convention, held fixed throughout the crate: qubit 0 is the MOST
/// significant bit of a basis label, so qubit `q` occupies bit position
/// `n - 1 - q`. The label of |10⟩ on two qubits is therefore 2, not 1.
///
/// Invariant: the sum of squared magnitudes stays within tolerance of 1
/// after every gate application. The vector is owned exclusively by one
/// `Simulator` instance and never aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// Amplitudes in basis-label order. Length is always 2^n.
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates a state vector from a raw amplitude list.
    /// Callers inside the crate guarantee the length is a power of two;
    /// the simulation engine validates dimensions before installing one.
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Creates the |0…0⟩ ground state of an n-qubit register:
    /// amplitude 1 at index 0, zero elsewhere.
    pub(crate) fn ground(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self::new(amplitudes)
    }

    /// Returns the state to |0…0⟩ in place. Clears, never resizes.
    pub(crate) fn reset(&mut self) {
        for amp in self.amplitudes.iter_mut() {
            *amp = Complex::zero();
        }
        self.amplitudes[0] = Complex::new(1.0, 0.0);
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Provides mutable access for the simulation engine.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Replaces the amplitude list wholesale after a gate application.
    pub(crate) fn replace(&mut self, amplitudes: Vec<Complex<f64>>) {
        self.amplitudes = amplitudes;
    }

    /// The dimension of the state space (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared amplitude magnitudes. Exactly 1 for a normalized state,
    /// up to accumulated floating-point drift.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// The measurement probability of every basis state,
    /// `p_i = |amp_i|^2 / Σ|amp_j|^2`, renormalized defensively against
    /// accumulated drift.
    pub fn probabilities(&self) -> Vec<f64> {
        let total = self.norm_sqr();
        if total > 0.0 {
            self.amplitudes.iter().map(|c| c.norm_sqr() / total).collect()
        } else {
            self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
        }
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
