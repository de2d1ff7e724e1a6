// src/simulation/mod.rs

//! Simulates circuit execution against an n-qubit amplitude vector.
//! This module contains the `Simulator` facade and the internal
//! `SimulationEngine` responsible for applying gates to the state.

// Make engine module crate visible for tests
mod results;
mod sampler;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::Histogram;

use crate::circuits::Circuit;
use crate::core::{QuampError, StateVector};
use engine::SimulationEngine;
use rand::Rng;

/// The top-level simulation facade. Owns exactly one amplitude vector,
/// created at construction in the |0…0⟩ state.
///
/// A simulator is reusable: apply circuits, read probabilities, sample,
/// `reset`, and go again; there is no terminal state. The register size is
/// fixed at construction; `reset` clears the vector but never resizes it.
/// One instance is single-owner: callers wanting parallel simulations use
/// one simulator per worker.
pub struct Simulator {
    engine: SimulationEngine,
}

impl Simulator {
    /// Creates a simulator for an n-qubit register in the |0…0⟩ state.
    ///
    /// The state vector holds 2^n complex amplitudes, so memory grows
    /// exponentially with n; requests beyond the supported ceiling fail with
    /// `CapacityExceeded` before anything is allocated.
    pub fn new(num_qubits: usize) -> Result<Self, QuampError> {
        Ok(Self { engine: SimulationEngine::init(num_qubits)? })
    }

    /// The register size this simulator was constructed with.
    pub fn num_qubits(&self) -> usize {
        self.engine.num_qubits()
    }

    /// Returns the register to |0…0⟩ from any state.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Applies a circuit's gates, in order, to the state vector.
    ///
    /// Each gate is validated in full before it mutates anything, so an
    /// error from gate k leaves the state exactly as gates 0..k left it.
    pub fn apply(&mut self, circuit: &Circuit) -> Result<(), QuampError> {
        for op in circuit.operations() {
            self.engine.apply_operation(op)?;
        }
        Ok(())
    }

    /// Read-only access to the current amplitude vector.
    pub fn state(&self) -> &StateVector {
        self.engine.state()
    }

    /// The exact measurement probability of every basis state, for callers
    /// that need the distribution rather than a stochastic estimate.
    pub fn probabilities(&self) -> Vec<f64> {
        self.engine.state().probabilities()
    }

    /// Draws `shots` measurement outcomes from the current distribution.
    /// The pseudorandom source is supplied by the caller so runs can be
    /// seeded deterministically.
    pub fn sample<R>(&self, rng: &mut R, shots: u64) -> Result<Histogram, QuampError>
    where
        R: Rng,
    {
        sampler::sample_counts(self.engine.state(), rng, shots)
    }
}
