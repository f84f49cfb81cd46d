//! Smith-Wilson curve fitting and evaluation.
//!
//! The Smith-Wilson method is the regulatory standard for fitting and
//! extrapolating risk-free rate curves under Solvency II (EIOPA). The
//! fitted discount function reproduces every observed price exactly and
//! converges smoothly to the Ultimate Forward Rate (UFR) beyond the Last
//! Liquid Point (LLP):
//!
//! ```text
//! P(t) = e^(-mu*t) + sum_j W(t, u_j) * zeta_j
//! ```
//!
//! where `mu = ln(1 + ufr)`, `W` is the Wilson kernel over the observed
//! maturities `u_j`, and the weight vector `zeta` solves the kernel system
//! `M * zeta = p_obs - e^(-mu*u)`.
//!
//! # EIOPA Standard Parameters
//!
//! | Currency | UFR | LLP | Alpha |
//! |----------|-----|-----|-------|
//! | EUR | 3.45% | 20Y | 0.126 |
//! | GBP | 3.45% | 50Y | 0.100 |
//! | USD | 3.45% | 30Y | 0.100 |
//! | CHF | 3.45% | 25Y | 0.100 |
//!
//! Note: UFR values are updated annually by EIOPA. Values shown are as of 2024.
//!
//! # Example
//!
//! ```rust
//! use rfr_curves::smith_wilson::SmithWilson;
//!
//! let model = SmithWilson::new(0.04, 0.15).unwrap();
//! let curve = model
//!     .fit(&[0.01, 0.015, 0.02], &[1.0, 2.0, 3.0])
//!     .unwrap();
//!
//! // Observed maturities are reproduced exactly
//! let rate_2y = curve.zero_rate(2.0).unwrap();
//! assert!((rate_2y - 0.015).abs() < 1e-10);
//!
//! // Far beyond the observations the curve hugs the UFR asymptote
//! let fwd = curve.forward_rate(100.0, 101.0).unwrap();
//! assert!((fwd - 0.04).abs() < 1e-3);
//! ```

use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use rfr_math::linear_algebra::solve_linear_system;
use rfr_math::MathError;

use crate::conversion;
use crate::error::{CurveError, CurveResult, DomainError};
use crate::validate;
use crate::wilson;

/// Smith-Wilson parameter set: the ultimate forward rate and the speed at
/// which the extrapolated curve converges to it.
///
/// Parameters are immutable for the duration of one fit; every call to
/// [`SmithWilson::fit`] is independent and nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmithWilson {
    /// Ultimate Forward Rate (annually compounded).
    ufr: f64,
    /// Convergence speed parameter (alpha).
    alpha: f64,
}

impl SmithWilson {
    /// Creates a new Smith-Wilson parameter set.
    ///
    /// # Arguments
    ///
    /// * `ufr` - Ultimate Forward Rate, annually compounded (e.g. 0.0345
    ///   for 3.45%); may be negative, but must satisfy `1 + ufr > 0`
    /// * `alpha` - Convergence speed (higher = faster convergence)
    ///
    /// # Errors
    ///
    /// [`crate::ValidationError::NonPositiveAlpha`] if `alpha <= 0`,
    /// [`DomainError::InvalidRate`] if `1 + ufr <= 0`.
    pub fn new(ufr: f64, alpha: f64) -> CurveResult<Self> {
        validate::check_alpha(alpha)?;
        conversion::continuous_rate(ufr)?;
        Ok(Self { ufr, alpha })
    }

    /// EIOPA EUR parameters (UFR 3.45%, alpha 0.126).
    #[must_use]
    pub fn eiopa_eur() -> Self {
        Self {
            ufr: 0.0345,
            alpha: 0.126,
        }
    }

    /// EIOPA GBP parameters (UFR 3.45%, alpha 0.100).
    #[must_use]
    pub fn eiopa_gbp() -> Self {
        Self {
            ufr: 0.0345,
            alpha: 0.100,
        }
    }

    /// EIOPA USD parameters (UFR 3.45%, alpha 0.100).
    #[must_use]
    pub fn eiopa_usd() -> Self {
        Self {
            ufr: 0.0345,
            alpha: 0.100,
        }
    }

    /// EIOPA CHF parameters (UFR 3.45%, alpha 0.100).
    #[must_use]
    pub fn eiopa_chf() -> Self {
        Self {
            ufr: 0.0345,
            alpha: 0.100,
        }
    }

    /// Returns the UFR (annually compounded).
    #[must_use]
    pub fn ufr(&self) -> f64 {
        self.ufr
    }

    /// Returns the convergence speed (alpha).
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the continuously-compounded UFR, `mu = ln(1 + ufr)`.
    ///
    /// This is the instantaneous forward rate the fitted curve converges to.
    #[must_use]
    pub fn mu(&self) -> f64 {
        (1.0 + self.ufr).ln()
    }

    /// Fits a curve through the observed spot rates.
    ///
    /// Builds the symmetric Wilson matrix over the observed maturities and
    /// solves `M * zeta = p_obs - e^(-mu*u)` for the calibration weights.
    /// The resulting curve reprices every observation exactly (up to solve
    /// tolerance).
    ///
    /// # Arguments
    ///
    /// * `rates` - Observed annually-compounded spot rates
    /// * `tenors` - Observed maturities in years, aligned with `rates`;
    ///   strictly positive, no duplicates, any order
    ///
    /// # Errors
    ///
    /// Validation errors for malformed inputs (raised before any numeric
    /// work), domain errors for rates at or below -100%, and
    /// [`CurveError::SingularSystem`] if the kernel matrix cannot be
    /// reliably inverted.
    pub fn fit(&self, rates: &[f64], tenors: &[f64]) -> CurveResult<SmithWilsonCurve> {
        validate::check_tenors(tenors)?;
        validate::check_lengths(rates.len(), tenors.len())?;

        let mu = self.mu();
        let n = tenors.len();

        let prices = conversion::discount_factors(rates, tenors)?;
        let matrix = wilson::wilson_matrix(tenors, self.alpha, mu)?;

        let rhs = DVector::from_iterator(
            n,
            prices
                .iter()
                .zip(tenors)
                .map(|(&price, &tenor)| price - conversion::ufr_discount_factor(mu, tenor)),
        );

        let zeta = solve_linear_system(&matrix, &rhs).map_err(|err| match err {
            MathError::SingularMatrix { .. } => CurveError::SingularSystem { size: n },
            other => CurveError::Math {
                reason: other.to_string(),
            },
        })?;

        debug!(
            "fitted Smith-Wilson curve over {n} tenors (alpha {}, ufr {})",
            self.alpha, self.ufr
        );

        Ok(SmithWilsonCurve {
            tenors: tenors.to_vec(),
            weights: zeta.as_slice().to_vec(),
            ufr: self.ufr,
            alpha: self.alpha,
            mu,
        })
    }
}

/// A fitted Smith-Wilson discount curve.
///
/// Owns the observed maturities and the calibration weight vector; evaluates
/// discount factors, zero rates, and forward rates at arbitrary positive
/// maturities, interpolating between observations and extrapolating towards
/// the UFR beyond the last liquid point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmithWilsonCurve {
    /// Observed maturities the curve was fitted to.
    tenors: Vec<f64>,
    /// Calibration weights (zeta), one per observed maturity.
    weights: Vec<f64>,
    /// Ultimate Forward Rate (annually compounded).
    ufr: f64,
    /// Convergence speed parameter.
    alpha: f64,
    /// Continuously-compounded UFR.
    mu: f64,
}

impl SmithWilsonCurve {
    /// Returns the observed maturities the curve was fitted to.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Returns the calibration weight vector (zeta).
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the UFR (annually compounded).
    #[must_use]
    pub fn ufr(&self) -> f64 {
        self.ufr
    }

    /// Returns the convergence speed (alpha).
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the last liquid point: the largest observed maturity.
    #[must_use]
    pub fn last_liquid_point(&self) -> f64 {
        self.tenors.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Evaluates the fitted discount factor at a single maturity.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonPositiveTenor`] if `tenor <= 0`.
    pub fn discount_factor(&self, tenor: f64) -> CurveResult<f64> {
        if !(tenor > 0.0) {
            return Err(DomainError::NonPositiveTenor { tenor }.into());
        }

        let mut price = conversion::ufr_discount_factor(self.mu, tenor);
        for (&u, &weight) in self.tenors.iter().zip(&self.weights) {
            price += wilson::wilson_unchecked(tenor, u, self.alpha, self.mu) * weight;
        }
        Ok(price)
    }

    /// Evaluates the fitted zero rate (annually compounded) at a single
    /// maturity.
    pub fn zero_rate(&self, tenor: f64) -> CurveResult<f64> {
        let price = self.discount_factor(tenor)?;
        Ok(conversion::zero_rate(price, tenor)?)
    }

    /// Evaluates discount factors at a sequence of target maturities.
    ///
    /// The target sequence is validated like the observed one (non-empty,
    /// strictly positive, no duplicates); the output is aligned one-to-one
    /// with the target order.
    pub fn discount_factors(&self, targets: &[f64]) -> CurveResult<Vec<f64>> {
        let cross = wilson::wilson_cross_matrix(targets, &self.tenors, self.alpha, self.mu)?;
        let zeta = DVector::from_column_slice(&self.weights);
        let kernel_sum = cross * zeta;

        Ok(targets
            .iter()
            .zip(kernel_sum.iter())
            .map(|(&tenor, &sum)| conversion::ufr_discount_factor(self.mu, tenor) + sum)
            .collect())
    }

    /// Evaluates zero rates (annually compounded) at a sequence of target
    /// maturities.
    ///
    /// A target equal to an observed maturity reproduces the observed rate
    /// up to solve tolerance.
    pub fn zero_rates(&self, targets: &[f64]) -> CurveResult<Vec<f64>> {
        let prices = self.discount_factors(targets)?;
        Ok(conversion::zero_rates(&prices, targets)?)
    }

    /// Annually-compounded forward rate between two maturities, implied by
    /// the fitted discount factors:
    /// `f = (P(t1)/P(t2))^(1/(t2-t1)) - 1`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidInterval`] if `t2 <= t1`, domain errors for
    /// non-positive maturities or discount factors.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if !(t2 > t1) {
            return Err(DomainError::InvalidInterval { start: t1, end: t2 }.into());
        }

        let p1 = self.discount_factor(t1)?;
        let p2 = self.discount_factor(t2)?;
        if !(p1 > 0.0) {
            return Err(DomainError::InvalidPrice { price: p1 }.into());
        }
        if !(p2 > 0.0) {
            return Err(DomainError::InvalidPrice { price: p2 }.into());
        }

        Ok((p1 / p2).powf(1.0 / (t2 - t1)) - 1.0)
    }
}

/// Fits a Smith-Wilson curve and evaluates it at the target maturities in
/// one call.
///
/// This is the full pipeline: rates to prices, kernel matrix, weight solve,
/// evaluation at the targets, prices back to rates. The output is aligned
/// one-to-one with `targets`.
///
/// # Example
///
/// ```rust
/// use rfr_curves::smith_wilson::fit_zero_rates;
///
/// let fitted = fit_zero_rates(
///     &[0.01, 0.015, 0.02],
///     &[1.0, 2.0, 3.0],
///     &[1.0, 2.0, 3.0, 10.0, 50.0],
///     0.15,
///     0.04,
/// )
/// .unwrap();
///
/// assert_eq!(fitted.len(), 5);
/// assert!((fitted[0] - 0.01).abs() < 1e-8);
/// ```
pub fn fit_zero_rates(
    rates: &[f64],
    tenors: &[f64],
    targets: &[f64],
    alpha: f64,
    ufr: f64,
) -> CurveResult<Vec<f64>> {
    SmithWilson::new(ufr, alpha)?.fit(rates, tenors)?.zero_rates(targets)
}
