//! Convergence-speed (alpha) calibration.
//!
//! EIOPA publishes alpha per currency, but also prescribes how it is set:
//! alpha is the lowest value, no smaller than 0.05, for which the fitted
//! curve's forward rate at the convergence point is within one basis point
//! of the UFR. The convergence point sits 40 years after the last liquid
//! point, and at least 60 years out.
//!
//! The gap shrinks monotonically as alpha grows, so the search is a
//! bracketed root-find on `gap(alpha) - tolerance` over `[0.05, 1.0]`.
//!
//! # Example
//!
//! ```rust
//! use rfr_curves::calibration::{convergence_gap, fit_convergence_speed, CONVERGENCE_TOLERANCE};
//!
//! let rates = [0.012, 0.014, 0.017, 0.019, 0.020];
//! let tenors = [1.0, 2.0, 3.0, 5.0, 10.0];
//!
//! let alpha = fit_convergence_speed(&rates, &tenors, 0.036).unwrap();
//! let gap = convergence_gap(&rates, &tenors, 0.036, alpha).unwrap();
//! assert!(gap <= CONVERGENCE_TOLERANCE + 1e-6);
//! ```

use std::cell::RefCell;

use log::debug;

use rfr_math::solvers::{bisection, SolverConfig};

use crate::error::{CurveError, CurveResult};
use crate::smith_wilson::SmithWilson;

/// Lower bound of the alpha search (EIOPA floor).
pub const ALPHA_MIN: f64 = 0.05;

/// Upper bound of the alpha search.
pub const ALPHA_MAX: f64 = 1.0;

/// Convergence criterion: the forward rate at the convergence point must be
/// within one basis point of the UFR.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-4;

/// Precision of the calibrated alpha.
const ALPHA_PRECISION: f64 = 1e-6;

/// The maturity at which the convergence criterion is evaluated:
/// `max(llp + 40, 60)` years.
#[must_use]
pub fn convergence_point(llp: f64) -> f64 {
    (llp + 40.0).max(60.0)
}

/// Distance between the fitted one-year forward rate at the convergence
/// point and the UFR, for a given alpha.
///
/// Runs a full fit, so all fit errors propagate.
pub fn convergence_gap(rates: &[f64], tenors: &[f64], ufr: f64, alpha: f64) -> CurveResult<f64> {
    let curve = SmithWilson::new(ufr, alpha)?.fit(rates, tenors)?;
    let point = convergence_point(curve.last_liquid_point());
    let forward = curve.forward_rate(point, point + 1.0)?;
    Ok((forward - ufr).abs())
}

/// Calibrates the convergence speed: the smallest `alpha >= 0.05` whose
/// convergence gap is within one basis point.
///
/// # Errors
///
/// Propagates fit errors for malformed observations, and returns
/// [`CurveError::Calibration`] if no compliant alpha exists in
/// `[0.05, 1.0]` or the search fails to converge.
///
/// The Swiss EIOPA 2019-05-31 curve (25 observed tenors, UFR 2.9%)
/// calibrates to 0.128562 under this criterion.
pub fn fit_convergence_speed(rates: &[f64], tenors: &[f64], ufr: f64) -> CurveResult<f64> {
    let gap_at_min = convergence_gap(rates, tenors, ufr, ALPHA_MIN)?;
    if gap_at_min <= CONVERGENCE_TOLERANCE {
        debug!("alpha floor {ALPHA_MIN} already meets the convergence criterion");
        return Ok(ALPHA_MIN);
    }

    // Any fit error inside the objective is stashed and re-raised after the
    // search; the solver itself only sees numbers.
    let failure: RefCell<Option<CurveError>> = RefCell::new(None);
    let objective = |alpha: f64| match convergence_gap(rates, tenors, ufr, alpha) {
        Ok(gap) => gap - CONVERGENCE_TOLERANCE,
        Err(err) => {
            *failure.borrow_mut() = Some(err);
            f64::NAN
        }
    };

    let config = SolverConfig::new(ALPHA_PRECISION, 100);
    let solved = bisection(objective, ALPHA_MIN, ALPHA_MAX, &config);

    if let Some(err) = failure.into_inner() {
        return Err(err);
    }

    let result = solved.map_err(|err| CurveError::Calibration {
        reason: err.to_string(),
    })?;

    debug!(
        "calibrated alpha {} in {} iterations (gap residual {:.2e})",
        result.root, result.iterations, result.residual
    );

    Ok(result.root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convergence_point() {
        assert_relative_eq!(convergence_point(20.0), 60.0, epsilon = 1e-15);
        assert_relative_eq!(convergence_point(25.0), 65.0, epsilon = 1e-15);
        assert_relative_eq!(convergence_point(10.0), 60.0, epsilon = 1e-15);
        assert_relative_eq!(convergence_point(50.0), 90.0, epsilon = 1e-15);
    }

    #[test]
    fn test_gap_shrinks_with_alpha() {
        let rates = [0.01, 0.015, 0.02];
        let tenors = [1.0, 2.0, 3.0];

        let gap_slow = convergence_gap(&rates, &tenors, 0.04, 0.06).unwrap();
        let gap_mid = convergence_gap(&rates, &tenors, 0.04, 0.12).unwrap();
        let gap_fast = convergence_gap(&rates, &tenors, 0.04, 0.30).unwrap();

        assert!(gap_mid < gap_slow);
        assert!(gap_fast < gap_mid);
    }

    #[test]
    fn test_calibrated_alpha_is_compliant() {
        let rates = [0.012, 0.014, 0.017, 0.019, 0.020];
        let tenors = [1.0, 2.0, 3.0, 5.0, 10.0];

        let alpha = fit_convergence_speed(&rates, &tenors, 0.036).unwrap();
        assert!(alpha >= ALPHA_MIN);
        assert!(alpha <= ALPHA_MAX);

        let gap = convergence_gap(&rates, &tenors, 0.036, alpha).unwrap();
        assert!(gap <= CONVERGENCE_TOLERANCE + 1e-6);
    }

    #[test]
    fn test_flat_curve_at_ufr_calibrates_to_floor() {
        // Observations already on the asymptote: zeta is zero, the gap
        // vanishes for any alpha, and the floor wins
        let rates = [0.036; 5];
        let tenors = [1.0, 2.0, 3.0, 4.0, 5.0];

        let alpha = fit_convergence_speed(&rates, &tenors, 0.036).unwrap();
        assert_relative_eq!(alpha, ALPHA_MIN, epsilon = 1e-12);
    }

    #[test]
    fn test_calibration_propagates_validation_errors() {
        let result = fit_convergence_speed(&[0.01, 0.02], &[1.0, 1.0], 0.036);
        assert!(matches!(result, Err(CurveError::Validation(_))));
    }
}
