// src/simulation/engine.rs

use crate::core::constants::MAX_QUBITS;
use crate::core::{QuampError, StateVector};
use crate::operations::{rotation_matrix, GateOp, Matrix2, Matrix4};
use crate::validation::{check_unitary_2x2, check_unitary_4x4};
use num_complex::Complex;
use num_traits::Zero;
use std::collections::HashSet;

/// The core simulation engine: owns the amplitude vector of one register and
/// applies gate operations to it in place.
///
/// Qubit `q` occupies bit position `num_qubits - 1 - q` of a basis label
/// (qubit 0 is the most significant bit). Every gate is validated in full
/// (indices, then unitarity where applicable) before the vector is touched,
/// so a failed application commits no partial mutation.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// The amplitude vector, dimension 2^n.
    state: StateVector,
    /// Register size n. Fixed at construction; `reset` clears, never resizes.
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes an engine for an n-qubit register in the |0…0⟩ state.
    /// The capacity ceiling is enforced before the vector is allocated.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, QuampError> {
        if num_qubits == 0 {
            return Err(QuampError::DimensionMismatch {
                message: "cannot simulate a zero-qubit register".to_string(),
            });
        }
        if num_qubits > MAX_QUBITS {
            return Err(QuampError::CapacityExceeded { requested: num_qubits, limit: MAX_QUBITS });
        }
        Ok(Self {
            state: StateVector::ground(num_qubits),
            num_qubits,
        })
    }

    pub(crate) fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    /// Returns the register to |0…0⟩.
    pub(crate) fn reset(&mut self) {
        self.state.reset();
    }

    // Crate-visible state injection for tests.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), QuampError> {
        if state.dim() != self.state.dim() {
            Err(QuampError::DimensionMismatch {
                message: format!(
                    "cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            })
        } else {
            self.state = state;
            Ok(())
        }
    }

    /// Applies a single gate operation to the state vector.
    pub(crate) fn apply_operation(&mut self, op: &GateOp) -> Result<(), QuampError> {
        match op {
            GateOp::Unitary { target, matrix } => {
                self.check_qubit(*target)?;
                check_unitary_2x2(matrix, None)?;
                self.apply_single_qubit_gate(*target, matrix);
            }
            GateOp::Rotate { axis, theta, target } => {
                self.check_qubit(*target)?;
                // Unitary by construction; no matrix check needed.
                self.apply_single_qubit_gate(*target, &rotation_matrix(*axis, *theta));
            }
            GateOp::Entangle { targets, matrix } => {
                self.check_qubit(targets.0)?;
                self.check_qubit(targets.1)?;
                if targets.0 == targets.1 {
                    return Err(QuampError::DimensionMismatch {
                        message: format!("two-qubit gate targets collide on qubit {}", targets.0),
                    });
                }
                check_unitary_4x4(matrix, None)?;
                self.apply_two_qubit_gate(targets.0, targets.1, matrix);
            }
            GateOp::MultiControlledX { controls, target } => {
                self.check_qubit(*target)?;
                let mut seen = HashSet::with_capacity(controls.len());
                for &control in controls {
                    self.check_qubit(control)?;
                    if control == *target || !seen.insert(control) {
                        return Err(QuampError::DimensionMismatch {
                            message: format!(
                                "multi-controlled X controls collide (control {}, target {})",
                                control, target
                            ),
                        });
                    }
                }
                self.apply_multi_controlled_x(controls, *target);
            }
            GateOp::PhaseFlip { states } => {
                let dim = self.state.dim() as u64;
                for &label in states {
                    if label >= dim {
                        return Err(QuampError::DimensionMismatch {
                            message: format!(
                                "basis label {} outside state space of dimension {}",
                                label, dim
                            ),
                        });
                    }
                }
                self.apply_phase_flip(states);
            }
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), QuampError> {
        if qubit >= self.num_qubits {
            Err(QuampError::IndexOutOfRange { index: qubit, num_qubits: self.num_qubits })
        } else {
            Ok(())
        }
    }

    /// Applies a 2×2 matrix to one target qubit within the global state.
    ///
    /// Partitions the 2^n basis indices into pairs differing only at the
    /// target bit and multiplies each amplitude pair by the matrix. The pairs
    /// are disjoint, which is what makes this loop safe to parallelize; the
    /// engine keeps it sequential.
    fn apply_single_qubit_gate(&mut self, target: usize, matrix: &Matrix2) {
        let k = self.num_qubits - 1 - target; // bit position of the target qubit
        let k_mask = 1usize << k;
        let low_mask = k_mask - 1;

        let dim = self.state.dim();
        let mut next = vec![Complex::zero(); dim];
        let amps = self.state.amplitudes();

        for i in 0..dim / 2 {
            // Spread i across the non-target bits: bits below k stay, bits at
            // and above k shift left one place to leave bit k clear.
            let i0 = ((i & !low_mask) << 1) | (i & low_mask);
            let i1 = i0 | k_mask;

            let psi_0 = amps[i0];
            let psi_1 = amps[i1];

            next[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            next[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.state.replace(next);
    }

    /// Applies a 4×4 matrix to an ordered pair of qubits within the global
    /// state. The matrix basis order follows the pair order: row index is
    /// `bit(q1) * 2 + bit(q2)`.
    fn apply_two_qubit_gate(&mut self, q1: usize, q2: usize, matrix: &Matrix4) {
        let n = self.num_qubits;
        let b1 = n - 1 - q1; // bit position of the first target
        let b2 = n - 1 - q2;
        let (hi, lo) = (b1.max(b2), b1.min(b2));

        let dim = self.state.dim();
        let mut next = vec![Complex::zero(); dim];
        let amps = self.state.amplitudes();

        for i in 0..dim / 4 {
            // Spread the n-2 free bits of i around the two cleared positions.
            let low = i & ((1 << lo) - 1);
            let mid = (i >> lo) & ((1 << (hi - lo - 1)) - 1);
            let high = i >> (hi - 1);
            let base = (high << (hi + 1)) | (mid << (lo + 1)) | low;

            let indices = [
                base,                            // q1=0, q2=0
                base | (1 << b2),                // q1=0, q2=1
                base | (1 << b1),                // q1=1, q2=0
                base | (1 << b1) | (1 << b2),    // q1=1, q2=1
            ];

            let psi = [amps[indices[0]], amps[indices[1]], amps[indices[2]], amps[indices[3]]];

            for row in 0..4 {
                let mut acc = Complex::zero();
                for (col, &amp) in psi.iter().enumerate() {
                    acc += matrix[row][col] * amp;
                }
                next[indices[row]] = acc;
            }
        }

        self.state.replace(next);
    }

    /// Flips the target bit of every basis state whose control bits are all 1.
    /// A pure index permutation: amplitudes swap places in pairs and no
    /// arithmetic touches their values, so the norm is preserved exactly.
    fn apply_multi_controlled_x(&mut self, controls: &[usize], target: usize) {
        let n = self.num_qubits;
        let t_mask = 1usize << (n - 1 - target);
        let mut c_mask = 0usize;
        for &control in controls {
            c_mask |= 1usize << (n - 1 - control);
        }

        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            if i & c_mask == c_mask && i & t_mask == 0 {
                amps.swap(i, i | t_mask);
            }
        }
    }

    /// Negates the amplitude at each listed basis label. Diagonal and
    /// involutive; labels were bounds-checked by the caller.
    fn apply_phase_flip(&mut self, states: &[u64]) {
        let amps = self.state.amplitudes_mut();
        for &label in states {
            amps[label as usize] = -amps[label as usize];
        }
    }
}
