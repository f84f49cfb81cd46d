//! The Wilson kernel and kernel matrix assembly.
//!
//! The Smith-Wilson method interpolates the discount function as the
//! asymptotic UFR term plus a weighted sum of kernel functions centred on
//! the observed maturities. The kernel of two maturities `t` and `u` is
//!
//! ```text
//! W(t, u) = e^(-mu*(t+u)) * (alpha*min(t,u)
//!           - 0.5 * e^(-alpha*max(t,u)) * (e^(alpha*min(t,u)) - e^(-alpha*min(t,u))))
//! ```
//!
//! with `alpha` the convergence speed and `mu` the continuously-compounded
//! ultimate forward rate. It is symmetric and strictly positive for
//! positive maturities, and its weighted contribution dies off at long
//! maturities, which is what drags the extrapolated curve onto the pure
//! `e^(-mu*t)` asymptote.
//!
//! Source: EIOPA QIS 5 Technical Paper, "Risk-free interest rates -
//! Extrapolation method", p. 11ff.

use nalgebra::DMatrix;

use crate::error::{CurveResult, DomainError};
use crate::validate;

/// Evaluates the Wilson kernel at a pair of maturities.
///
/// # Errors
///
/// [`DomainError::NonPositiveAlpha`] if `alpha <= 0`,
/// [`DomainError::NonPositiveTenor`] if either maturity is not positive.
///
/// # Example
///
/// ```rust
/// use rfr_curves::wilson::wilson;
///
/// let mu = (1.0_f64 + 0.029).ln();
/// let w_tu = wilson(5.0, 20.0, 0.15, mu).unwrap();
/// let w_ut = wilson(20.0, 5.0, 0.15, mu).unwrap();
/// assert_eq!(w_tu, w_ut);
/// ```
pub fn wilson(t: f64, u: f64, alpha: f64, mu: f64) -> Result<f64, DomainError> {
    if !(alpha > 0.0) {
        return Err(DomainError::NonPositiveAlpha { alpha });
    }
    if !(t > 0.0) {
        return Err(DomainError::NonPositiveTenor { tenor: t });
    }
    if !(u > 0.0) {
        return Err(DomainError::NonPositiveTenor { tenor: u });
    }
    Ok(wilson_unchecked(t, u, alpha, mu))
}

/// Kernel evaluation with the domain checks hoisted out, for tight
/// assembly loops that have already validated their inputs.
#[inline]
pub(crate) fn wilson_unchecked(t: f64, u: f64, alpha: f64, mu: f64) -> f64 {
    let lo = t.min(u);
    let hi = t.max(u);

    let ufr_disc = (-mu * (t + u)).exp();
    let tail = 0.5 * (-alpha * hi).exp() * ((alpha * lo).exp() - (-alpha * lo).exp());

    ufr_disc * (alpha * lo - tail)
}

/// Builds the symmetric kernel matrix over a set of observed maturities,
/// `M[i][j] = W(tenors[i], tenors[j])`.
///
/// The tenor sequence must be non-empty, strictly positive, and free of
/// duplicates (a repeated tenor produces two identical rows and a singular
/// system); violations are rejected before any kernel is evaluated.
pub fn wilson_matrix(tenors: &[f64], alpha: f64, mu: f64) -> CurveResult<DMatrix<f64>> {
    validate::check_tenors(tenors)?;
    validate::check_alpha(alpha)?;

    let n = tenors.len();
    let mut matrix = DMatrix::zeros(n, n);

    // Only the upper triangle is evaluated; symmetry fills the rest.
    for i in 0..n {
        for j in i..n {
            let w = wilson_unchecked(tenors[i], tenors[j], alpha, mu);
            matrix[(i, j)] = w;
            matrix[(j, i)] = w;
        }
    }

    Ok(matrix)
}

/// Builds the rectangular kernel matrix between target and observed
/// maturities, `C[k][j] = W(targets[k], tenors[j])`.
///
/// Both sequences are validated like in [`wilson_matrix`]. With the
/// `parallel` feature enabled, rows are assembled in parallel; entries are
/// independent, so the result is identical either way.
pub fn wilson_cross_matrix(
    targets: &[f64],
    tenors: &[f64],
    alpha: f64,
    mu: f64,
) -> CurveResult<DMatrix<f64>> {
    validate::check_tenors(targets)?;
    validate::check_tenors(tenors)?;
    validate::check_alpha(alpha)?;

    let n = targets.len();
    let m = tenors.len();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let rows: Vec<Vec<f64>> = targets
            .par_iter()
            .map(|&t| {
                tenors
                    .iter()
                    .map(|&u| wilson_unchecked(t, u, alpha, mu))
                    .collect()
            })
            .collect();

        Ok(DMatrix::from_fn(n, m, |i, j| rows[i][j]))
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok(DMatrix::from_fn(n, m, |i, j| {
            wilson_unchecked(targets[i], tenors[j], alpha, mu)
        }))
    }
}
