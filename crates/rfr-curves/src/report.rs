//! Post-fit quality diagnostics.
//!
//! A fitted curve is only trustworthy if it actually reprices its inputs
//! and behaves like a discount function. The diagnostics here check:
//! - Exact recovery: fitted rates at the observed maturities
//! - Monotonically decreasing discount factors over a scan grid
//! - The convergence gap at the EIOPA convergence point
//!
//! Diagnostics are opt-in; [`crate::smith_wilson::SmithWilson::fit`] never
//! runs them implicitly.
//!
//! # Example
//!
//! ```rust
//! use rfr_curves::report::FitDiagnostics;
//! use rfr_curves::smith_wilson::SmithWilson;
//!
//! let rates = [0.01, 0.015, 0.02];
//! let tenors = [1.0, 2.0, 3.0];
//! let curve = SmithWilson::new(0.04, 0.15).unwrap().fit(&rates, &tenors).unwrap();
//!
//! let report = FitDiagnostics::default().run(&curve, &rates, &tenors).unwrap();
//! assert!(report.is_valid());
//! ```

use crate::calibration::{convergence_point, CONVERGENCE_TOLERANCE};
use crate::error::CurveResult;
use crate::smith_wilson::SmithWilsonCurve;
use crate::validate;

/// Recovery of a single observation by the fitted curve.
#[derive(Debug, Clone, Copy)]
pub struct RecoveryResidual {
    /// Observed maturity in years.
    pub tenor: f64,
    /// Observed spot rate.
    pub observed: f64,
    /// Rate recovered from the fitted curve.
    pub fitted: f64,
}

impl RecoveryResidual {
    /// Absolute recovery error in rate terms.
    #[must_use]
    pub fn error(&self) -> f64 {
        (self.fitted - self.observed).abs()
    }
}

/// A point where the discount function failed to decrease.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicityBreak {
    /// Maturity in years where the break was found.
    pub tenor: f64,
    /// Discount factor at this maturity.
    pub price: f64,
    /// Discount factor one scan step earlier.
    pub previous: f64,
}

/// Result of running [`FitDiagnostics`] on a fitted curve.
#[derive(Debug, Clone)]
pub struct FitReport {
    residuals: Vec<RecoveryResidual>,
    max_residual: f64,
    rms_residual: f64,
    monotonicity_breaks: Vec<MonotonicityBreak>,
    convergence_tenor: f64,
    convergence_gap: f64,
    recovery_tolerance: f64,
}

impl FitReport {
    /// Per-observation recovery residuals.
    #[must_use]
    pub fn residuals(&self) -> &[RecoveryResidual] {
        &self.residuals
    }

    /// Largest absolute recovery error.
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        self.max_residual
    }

    /// Root mean square of the recovery errors.
    #[must_use]
    pub fn rms_residual(&self) -> f64 {
        self.rms_residual
    }

    /// Points where the discount function failed to decrease.
    #[must_use]
    pub fn monotonicity_breaks(&self) -> &[MonotonicityBreak] {
        &self.monotonicity_breaks
    }

    /// Maturity at which the convergence gap was evaluated.
    #[must_use]
    pub fn convergence_tenor(&self) -> f64 {
        self.convergence_tenor
    }

    /// Distance between the forward rate at the convergence point and
    /// the UFR.
    #[must_use]
    pub fn convergence_gap(&self) -> f64 {
        self.convergence_gap
    }

    /// True if every observation was recovered within tolerance and the
    /// discount function is monotone.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.max_residual <= self.recovery_tolerance && self.monotonicity_breaks.is_empty()
    }

    /// True if the convergence gap meets the EIOPA one-basis-point
    /// criterion.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.convergence_gap <= CONVERGENCE_TOLERANCE
    }
}

impl std::fmt::Display for FitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fit Report:")?;
        writeln!(
            f,
            "  Status: {}",
            if self.is_valid() { "PASSED" } else { "FAILED" }
        )?;
        writeln!(f, "  Max Residual: {:.2e}", self.max_residual)?;
        writeln!(f, "  RMS Residual: {:.2e}", self.rms_residual)?;
        writeln!(
            f,
            "  Convergence Gap at {:.0}Y: {:.2} bps ({})",
            self.convergence_tenor,
            self.convergence_gap * 10_000.0,
            if self.is_compliant() {
                "compliant"
            } else {
                "non-compliant"
            }
        )?;

        if !self.monotonicity_breaks.is_empty() {
            writeln!(
                f,
                "  Monotonicity Breaks ({}):",
                self.monotonicity_breaks.len()
            )?;
            for brk in &self.monotonicity_breaks {
                writeln!(
                    f,
                    "    - t={:.2}Y: DF={:.6} >= prev={:.6}",
                    brk.tenor, brk.price, brk.previous
                )?;
            }
        }

        Ok(())
    }
}

/// Fit diagnostics with configurable tolerances.
#[derive(Debug, Clone, Copy)]
pub struct FitDiagnostics {
    /// Tolerance for recovery residuals (absolute, in rate terms).
    recovery_tolerance: f64,
    /// Step of the discount-factor scan grid (years).
    scan_step: f64,
}

impl Default for FitDiagnostics {
    fn default() -> Self {
        Self {
            recovery_tolerance: 1e-8,
            scan_step: 1.0,
        }
    }
}

impl FitDiagnostics {
    /// Creates diagnostics with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recovery tolerance.
    #[must_use]
    pub fn with_recovery_tolerance(mut self, tolerance: f64) -> Self {
        self.recovery_tolerance = tolerance;
        self
    }

    /// Sets the scan step for the monotonicity check.
    #[must_use]
    pub fn with_scan_step(mut self, step: f64) -> Self {
        self.scan_step = step;
        self
    }

    /// Runs the diagnostics against the observations the curve was
    /// fitted to.
    pub fn run(
        &self,
        curve: &SmithWilsonCurve,
        rates: &[f64],
        tenors: &[f64],
    ) -> CurveResult<FitReport> {
        validate::check_lengths(rates.len(), tenors.len())?;

        let fitted = curve.zero_rates(tenors)?;

        let mut residuals = Vec::with_capacity(tenors.len());
        let mut max_residual = 0.0_f64;
        let mut sum_sq = 0.0_f64;
        for ((&tenor, &observed), &recovered) in tenors.iter().zip(rates).zip(&fitted) {
            let residual = RecoveryResidual {
                tenor,
                observed,
                fitted: recovered,
            };
            max_residual = max_residual.max(residual.error());
            sum_sq += residual.error() * residual.error();
            residuals.push(residual);
        }
        let rms_residual = (sum_sq / residuals.len() as f64).sqrt();

        let horizon = convergence_point(curve.last_liquid_point());

        let mut monotonicity_breaks = Vec::new();
        let mut previous = 1.0_f64; // P(0)
        let mut tenor = self.scan_step;
        while tenor <= horizon {
            let price = curve.discount_factor(tenor)?;
            if price >= previous {
                monotonicity_breaks.push(MonotonicityBreak {
                    tenor,
                    price,
                    previous,
                });
            }
            previous = price;
            tenor += self.scan_step;
        }

        let forward = curve.forward_rate(horizon, horizon + 1.0)?;
        let convergence_gap = (forward - curve.ufr()).abs();

        Ok(FitReport {
            residuals,
            max_residual,
            rms_residual,
            monotonicity_breaks,
            convergence_tenor: horizon,
            convergence_gap,
            recovery_tolerance: self.recovery_tolerance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smith_wilson::SmithWilson;

    fn sample() -> ([f64; 3], [f64; 3], SmithWilsonCurve) {
        let rates = [0.01, 0.015, 0.02];
        let tenors = [1.0, 2.0, 3.0];
        let curve = SmithWilson::new(0.04, 0.15)
            .unwrap()
            .fit(&rates, &tenors)
            .unwrap();
        (rates, tenors, curve)
    }

    #[test]
    fn test_clean_fit_passes() {
        let (rates, tenors, curve) = sample();

        let report = FitDiagnostics::default()
            .run(&curve, &rates, &tenors)
            .unwrap();

        assert!(report.is_valid());
        assert_eq!(report.residuals().len(), 3);
        assert!(report.max_residual() <= 1e-8);
        assert!(report.monotonicity_breaks().is_empty());
    }

    #[test]
    fn test_report_display() {
        let (rates, tenors, curve) = sample();

        let report = FitDiagnostics::default()
            .run(&curve, &rates, &tenors)
            .unwrap();
        let text = report.to_string();

        assert!(text.contains("PASSED"));
        assert!(text.contains("Convergence Gap"));
    }

    #[test]
    fn test_mismatched_observations_flagged() {
        let (_, tenors, curve) = sample();

        // A benchmark the curve was never fitted to must show up as a
        // recovery failure
        let shifted = [0.02, 0.025, 0.03];
        let report = FitDiagnostics::default()
            .run(&curve, &shifted, &tenors)
            .unwrap();

        assert!(!report.is_valid());
        assert!(report.max_residual() > 1e-3);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let (rates, _, curve) = sample();

        let result = FitDiagnostics::default().run(&curve, &rates, &[1.0, 2.0]);
        assert!(result.is_err());
    }
}
