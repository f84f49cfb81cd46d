//! Linear algebra utilities.
//!
//! Dense direct solves for the small, well-conditioned systems that arise in
//! curve calibration (tens of unknowns). A direct factorization is preferred
//! over iterative methods for bit-level reproducibility of fitted curves.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Relative pivot threshold below which a matrix is treated as singular.
///
/// Pivots are compared against `SINGULARITY_THRESHOLD * max|a_ij|`, so the
/// check is invariant under uniform scaling of the system.
pub const SINGULARITY_THRESHOLD: f64 = 1e-13;

/// Solves a dense linear system `A * x = b` by LU factorization with
/// partial pivoting.
///
/// # Arguments
///
/// * `a` - Square coefficient matrix
/// * `b` - Right-hand side vector of matching length
///
/// # Returns
///
/// The solution vector `x`, or:
///
/// * [`MathError::DimensionMismatch`] if `a` is not square or `b` has the
///   wrong length
/// * [`MathError::SingularMatrix`] if elimination encounters a pivot below
///   the relative singularity threshold
///
/// # Example
///
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use rfr_math::linear_algebra::solve_linear_system;
///
/// let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
/// let b = DVector::from_vec(vec![5.0, 5.0]);
///
/// let x = solve_linear_system(&a, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() || n != b.len() {
        return Err(MathError::DimensionMismatch {
            rows: a.nrows(),
            cols: a.ncols(),
            rhs_len: b.len(),
        });
    }

    if n == 0 {
        return Ok(DVector::zeros(0));
    }

    let scale = a.amax();
    let threshold = SINGULARITY_THRESHOLD * scale.max(1.0);

    let mut lu = a.clone();
    let mut x = b.clone();

    // Forward elimination with row pivoting
    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_mag = lu[(k, k)].abs();
        for i in k + 1..n {
            let mag = lu[(i, k)].abs();
            if mag > pivot_mag {
                pivot_row = i;
                pivot_mag = mag;
            }
        }

        if pivot_mag <= threshold {
            return Err(MathError::SingularMatrix {
                pivot: pivot_mag,
                column: k,
            });
        }

        if pivot_row != k {
            lu.swap_rows(k, pivot_row);
            x.swap_rows(k, pivot_row);
        }

        for i in k + 1..n {
            let factor = lu[(i, k)] / lu[(k, k)];
            lu[(i, k)] = 0.0;
            for j in k + 1..n {
                lu[(i, j)] -= factor * lu[(k, j)];
            }
            x[i] -= factor * x[k];
        }
    }

    // Back substitution
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in i + 1..n {
            sum -= lu[(i, j)] * x[j];
        }
        x[i] = sum / lu[(i, i)];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_2x2() {
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![5.0, 5.0]);

        let x = solve_linear_system(&a, &b).unwrap();

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_requires_pivoting() {
        // Leading pivot is zero; naive elimination would fail
        let a = DMatrix::from_row_slice(3, 3, &[0.0, 1.0, 1.0, 2.0, 1.0, -1.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_vec(vec![4.0, 1.0, 4.0]);

        let x = solve_linear_system(&a, &b).unwrap();

        // Verify A * x = b
        let residual = &a * &x - &b;
        assert!(residual.amax() < 1e-12);
    }

    #[test]
    fn test_solve_symmetric() {
        let a = DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.5, 1.0, 3.0, 1.0, 0.5, 1.0, 2.0]);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);

        let x = solve_linear_system(&a, &b).unwrap();

        let residual = &a * &x - &b;
        assert!(residual.amax() < 1e-12);
    }

    #[test]
    fn test_singular_matrix() {
        // Second row is a multiple of the first
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);

        let result = solve_linear_system(&a, &b);
        assert!(matches!(result, Err(MathError::SingularMatrix { .. })));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);

        let result = solve_linear_system(&a, &b);
        assert!(matches!(result, Err(MathError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_empty_system() {
        let a = DMatrix::zeros(0, 0);
        let b = DVector::zeros(0);

        let x = solve_linear_system(&a, &b).unwrap();
        assert_eq!(x.len(), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn solves_diagonally_dominant_systems(
                values in proptest::collection::vec(-1.0_f64..1.0, 9),
                rhs in proptest::collection::vec(-10.0_f64..10.0, 3),
            ) {
                let mut a = DMatrix::from_row_slice(3, 3, &values);
                for i in 0..3 {
                    a[(i, i)] = 4.0 + a[(i, i)].abs();
                }
                let b = DVector::from_vec(rhs);

                let x = solve_linear_system(&a, &b).unwrap();

                let residual = (&a * &x - &b).amax();
                prop_assert!(residual < 1e-10);
            }
        }
    }
}
