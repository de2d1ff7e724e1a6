// src/simulation/sampler.rs

//! Draws measurement outcomes from a state's probability distribution.
//!
//! The pseudorandom source is threaded explicitly so callers (and tests)
//! control seeding; nothing here reaches for ambient global randomness.

use crate::core::{QuampError, StateVector};
use crate::simulation::results::Histogram;
use rand::{Rng, RngExt};

/// Draws `shots` independent categorical samples from the distribution
/// `p_i = |amp_i|^2 / Σ|amp_j|^2` and returns the observed frequencies.
/// The probabilities are renormalized defensively, so accumulated
/// floating-point drift in the state skews nothing.
///
/// `shots` must be positive; zero fails with `InvalidShots`.
pub fn sample_counts<R>(
    state: &StateVector,
    rng: &mut R,
    shots: u64,
) -> Result<Histogram, QuampError>
where
    R: Rng,
{
    if shots == 0 {
        return Err(QuampError::InvalidShots { shots });
    }

    let probabilities = state.probabilities();
    let mut histogram = Histogram::new();

    for _ in 0..shots {
        let sample: f64 = rng.random();
        // Walk the cumulative distribution; the final bucket absorbs any
        // floating-point shortfall in the running sum.
        let mut cumulative = 0.0;
        let mut chosen = probabilities.len() - 1;
        for (index, p) in probabilities.iter().enumerate() {
            cumulative += p;
            if sample < cumulative {
                chosen = index;
                break;
            }
        }
        histogram.record(chosen as u64);
    }

    Ok(histogram)
}
