//! Dense linear system solver
//!
//! Gaussian elimination with partial pivoting over an augmented copy of the
//! input, used by the calibration fit to solve its normal equations.
//!
//! Algorithm tag: `algo-gauss-partial-pivot`

use crate::constants::solver;
use crate::error::{MeasurementError, Result};

/// Solver for dense n-by-n linear systems `A x = b`.
pub struct LinearSolver {
    /// Pivot magnitudes below this declare the system singular
    pivot_tolerance: f64,
}

impl Default for LinearSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearSolver {
    /// Create a solver with the default pivot tolerance
    pub fn new() -> Self {
        Self {
            pivot_tolerance: solver::PIVOT_TOLERANCE,
        }
    }

    /// Create a solver with a custom pivot tolerance
    pub fn with_tolerance(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }

    /// Solve `A x = b` by Gaussian elimination with partial pivoting.
    ///
    /// The inputs are not mutated; elimination runs on a private augmented
    /// copy `[A|b]`. At each step the row with the largest absolute value in
    /// the pivot column is selected, ties broken by lowest row index, so the
    /// result is reproducible for identical inputs.
    ///
    /// # Arguments
    ///
    /// * `a` - Square coefficient matrix, row major
    /// * `b` - Right-hand side, same length as `a`
    ///
    /// # Errors
    ///
    /// Returns `SingularSystem` if the best available pivot falls below the
    /// tolerance — no partial or approximate solution is returned.
    /// Returns `InvalidParameter` if `a` is empty or not square, or if the
    /// lengths of `a` and `b` disagree.
    pub fn solve(&self, a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
        let n = a.len();
        if n == 0 {
            return Err(MeasurementError::invalid_parameter("matrix_rows", 0));
        }
        if b.len() != n {
            return Err(MeasurementError::invalid_parameter("rhs_len", b.len()));
        }
        if let Some(row) = a.iter().find(|row| row.len() != n) {
            return Err(MeasurementError::invalid_parameter("matrix_cols", row.len()));
        }

        // Augmented copy [A|b]; callers keep their inputs untouched.
        let mut aug: Vec<Vec<f64>> = a
            .iter()
            .zip(b)
            .map(|(row, &rhs)| {
                let mut augmented = row.clone();
                augmented.push(rhs);
                augmented
            })
            .collect();

        // Forward elimination with partial pivoting
        for i in 0..n {
            let mut pivot_row = i;
            for j in (i + 1)..n {
                if aug[j][i].abs() > aug[pivot_row][i].abs() {
                    pivot_row = j;
                }
            }

            let pivot = aug[pivot_row][i];
            if pivot.abs() < self.pivot_tolerance {
                return Err(MeasurementError::SingularSystem {
                    pivot: pivot.abs(),
                    column: i,
                });
            }

            aug.swap(i, pivot_row);

            let (upper, lower) = aug.split_at_mut(i + 1);
            let pivot_line = &upper[i];
            for row in lower {
                let factor = row[i] / pivot_line[i];
                for col in i..=n {
                    row[col] -= factor * pivot_line[col];
                }
            }
        }

        // Back substitution
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut acc = aug[i][n];
            for j in (i + 1)..n {
                acc -= aug[i][j] * x[j];
            }
            x[i] = acc / aug[i][i];
        }

        Ok(x)
    }
}
