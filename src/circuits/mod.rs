// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! gate operations (`crate::operations::GateOp`).
//!
//! A `Circuit` is append-only while it is being constructed and treated as
//! read-only during simulation; it is a value object, built once and applied
//! any number of times without mutation.

pub mod encoding;

use crate::operations::{GateOp, Matrix2, RotationAxis};
use num_complex::Complex;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// An ordered sequence of gate operations applied to a set of qubits.
///
/// Order is load-bearing: gates do not commute in general, and concatenation
/// of two circuits concatenates their gate sequences without reordering.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// The unique set of qubit indices referenced across all operations.
    qubits: HashSet<usize>,

    /// The ordered gate sequence.
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            operations: Vec::new(),
        }
    }

    /// Appends a single operation to the end of the sequence, registering the
    /// qubits it references.
    pub fn add_operation(&mut self, op: GateOp) {
        for qubit in op.involved_qubits() {
            self.qubits.insert(qubit);
        }
        self.operations.push(op);
    }

    /// Appends multiple operations from an iterator.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = GateOp>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Returns a reference to the set of qubit indices referenced by this circuit.
    pub fn qubits(&self) -> &HashSet<usize> {
        &self.qubits
    }

    /// One past the highest qubit index referenced, or 0 for a circuit that
    /// references none. The register a circuit runs on must be at least this
    /// wide.
    pub fn width(&self) -> usize {
        self.qubits.iter().max().map_or(0, |q| q + 1)
    }

    /// Returns the ordered gate sequence.
    pub fn operations(&self) -> &[GateOp] {
        &self.operations
    }

    /// Returns the number of gates in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns a new circuit whose gate sequence is this circuit's sequence
    /// followed by `other`'s. Applying the result is observationally
    /// equivalent to applying `self` then `other`.
    pub fn concat(&self, other: &Circuit) -> Circuit {
        let mut combined = self.clone();
        combined.add_operations(other.operations.iter().cloned());
        combined
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances
/// using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single operation to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, op: GateOp) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = GateOp>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// Implement Default for convenient creation of builders.
impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// ASCII rendering
//-------------------------------------------------------------------------

fn complex_approx(a: Complex<f64>, b: Complex<f64>) -> bool {
    (a - b).norm() < 1e-12
}

fn matrix_approx(m: &Matrix2, n: &Matrix2) -> bool {
    (0..2).all(|r| (0..2).all(|c| complex_approx(m[r][c], n[r][c])))
}

/// Picks a display symbol for an explicit 2×2 matrix by recognizing the
/// standard gates; anything unrecognized renders as a generic "U".
fn unitary_symbol(matrix: &Matrix2) -> &'static str {
    use std::f64::consts::FRAC_1_SQRT_2;
    let one = Complex::new(1.0, 0.0);
    let zero = Complex::new(0.0, 0.0);
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    let i = Complex::i();

    if matrix_approx(matrix, &[[one, zero], [zero, one]]) {
        "I"
    } else if matrix_approx(matrix, &[[zero, one], [one, zero]]) {
        "X"
    } else if matrix_approx(matrix, &[[zero, -i], [i, zero]]) {
        "Y"
    } else if matrix_approx(matrix, &[[one, zero], [zero, -one]]) {
        "Z"
    } else if matrix_approx(matrix, &[[h, h], [h, -h]]) {
        "H"
    } else if complex_approx(matrix[0][0], one)
        && complex_approx(matrix[0][1], zero)
        && complex_approx(matrix[1][0], zero)
        && (matrix[1][1].norm() - 1.0).abs() < 1e-12
    {
        "P"
    } else {
        "U"
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return writeln!(f, "quamp::Circuit[0 gates on 0 qubits]");
        }

        let ops = &self.operations;
        let num_ops = ops.len();

        // Sorted qubit rows with a lookup map
        let mut sorted_qubits: Vec<usize> = self.qubits.iter().cloned().collect();
        sorted_qubits.sort();
        let num_rows = sorted_qubits.len();
        let qubit_to_row: HashMap<usize, usize> =
            sorted_qubits.iter().enumerate().map(|(row, q)| (*q, row)).collect();

        let max_label_width = sorted_qubits.iter().map(|q| format!("q{}", q).len()).max().unwrap_or(0);
        let label_padding = " ".repeat(max_label_width + 2);

        const GATE_WIDTH: usize = 7;
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][t] is the gate/wire segment; v_connect[row][t] the
        // vertical connector drawn below that row at column t.
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_rows];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_rows];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre = total_dashes / 2;
                let post = total_dashes - pre;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
            }
        }

        let connect_rows = |grid: &mut Vec<Vec<char>>, rows: &[usize], t: usize| {
            if let (Some(&lo), Some(&hi)) = (rows.iter().min(), rows.iter().max()) {
                for row_vec in grid.iter_mut().take(hi).skip(lo) {
                    row_vec[t] = V_WIRE;
                }
            }
        };

        for (t, op) in ops.iter().enumerate() {
            match op {
                GateOp::Unitary { target, matrix } => {
                    if let Some(&r) = qubit_to_row.get(target) {
                        op_grid[r][t] = format_gate(unitary_symbol(matrix));
                    }
                }
                GateOp::Rotate { axis, target, .. } => {
                    if let Some(&r) = qubit_to_row.get(target) {
                        let symbol = match axis {
                            RotationAxis::X => "Rx",
                            RotationAxis::Y => "Ry",
                            RotationAxis::Z => "Rz",
                        };
                        op_grid[r][t] = format_gate(symbol);
                    }
                }
                GateOp::Entangle { targets, .. } => {
                    if let (Some(&r1), Some(&r2)) =
                        (qubit_to_row.get(&targets.0), qubit_to_row.get(&targets.1))
                    {
                        op_grid[r1][t] = format_gate("E");
                        op_grid[r2][t] = format_gate("E");
                        connect_rows(&mut v_connect, &[r1, r2], t);
                    }
                }
                GateOp::MultiControlledX { controls, target } => {
                    let mut rows = Vec::with_capacity(controls.len() + 1);
                    for control in controls {
                        if let Some(&r) = qubit_to_row.get(control) {
                            op_grid[r][t] = format_gate("@");
                            rows.push(r);
                        }
                    }
                    if let Some(&r) = qubit_to_row.get(target) {
                        op_grid[r][t] = format_gate("X");
                        rows.push(r);
                    }
                    connect_rows(&mut v_connect, &rows, t);
                }
                GateOp::PhaseFlip { .. } => {
                    // Acts on basis labels, not individual wires; mark every row.
                    for row_vec in op_grid.iter_mut() {
                        row_vec[t] = format_gate("◆");
                    }
                }
            }
        }

        writeln!(f, "quamp::Circuit[{} gates on {} qubits]", num_ops, num_rows)?;
        for r in 0..num_rows {
            let label = format!("q{}: ", sorted_qubits[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_rows - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding = GATE_WIDTH.saturating_sub(1);
                    let pre = padding / 2;
                    let post = padding - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), connector, " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
