// src/validation/mod.rs

//! Provides numerical validity checks for states and gate matrices.

use crate::core::constants::{NORM_TOLERANCE, UNITARY_TOLERANCE};
use crate::core::{QuampError, StateVector};
use num_complex::Complex;
use num_traits::Zero;

// --- Helper Functions ---

/// Checks `U · U† = I` row against row for a square matrix handed over as
/// slices. Returns the largest deviation found. (Internal to this module)
fn max_unitarity_deviation(rows: &[&[Complex<f64>]]) -> f64 {
    let n = rows.len();
    let mut worst = 0.0f64;
    for r in 0..n {
        for c in 0..n {
            let mut dot: Complex<f64> = Complex::zero();
            for k in 0..n {
                dot += rows[r][k] * rows[c][k].conj();
            }
            let expected = if r == c { Complex::new(1.0, 0.0) } else { Complex::zero() };
            worst = worst.max((dot - expected).norm());
        }
    }
    worst
}

// --- Public Validation Functions ---

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to the crate-wide
///   norm tolerance, which already budgets for accumulated per-gate drift.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QuampError::NotUnitary)` otherwise: a norm this far off means a
///   non-unitary transformation was applied somewhere.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QuampError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(QuampError::NotUnitary {
            message: format!(
                "state vector normalization failed: Sum(|c_i|^2) = {} (deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks a 2×2 gate matrix against the unitarity tolerance.
///
/// # Arguments
/// * `matrix` - The matrix to check.
/// * `tolerance` - Allowed deviation of `U · U†` from identity; defaults to
///   the crate-wide unitary tolerance.
pub fn check_unitary_2x2(
    matrix: &crate::operations::Matrix2,
    tolerance: Option<f64>,
) -> Result<(), QuampError> {
    let effective_tolerance = tolerance.unwrap_or(UNITARY_TOLERANCE);
    let deviation = max_unitarity_deviation(&[&matrix[0], &matrix[1]]);
    if deviation > effective_tolerance {
        Err(QuampError::NotUnitary {
            message: format!(
                "2x2 gate matrix fails unitarity: max |U·U† - I| entry = {:.3e} (tolerance {:.0e})",
                deviation, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks a 4×4 gate matrix against the unitarity tolerance.
pub fn check_unitary_4x4(
    matrix: &crate::operations::Matrix4,
    tolerance: Option<f64>,
) -> Result<(), QuampError> {
    let effective_tolerance = tolerance.unwrap_or(UNITARY_TOLERANCE);
    let deviation = max_unitarity_deviation(&[&matrix[0], &matrix[1], &matrix[2], &matrix[3]]);
    if deviation > effective_tolerance {
        Err(QuampError::NotUnitary {
            message: format!(
                "4x4 gate matrix fails unitarity: max |U·U† - I| entry = {:.3e} (tolerance {:.0e})",
                deviation, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
