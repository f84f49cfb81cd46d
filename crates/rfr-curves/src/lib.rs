//! # rfr Curves
//!
//! Smith-Wilson fitting and extrapolation of risk-free zero-coupon rate
//! curves, as prescribed for Solvency II (EIOPA).
//!
//! This crate provides:
//!
//! - **Conversion**: Annually-compounded spot rates vs zero-coupon prices
//! - **Wilson Kernel**: Kernel function and kernel matrix assembly
//! - **Fitting**: Exact-fit calibration of the discount function
//! - **Evaluation**: Discount factors, zero rates, and forward rates at
//!   arbitrary maturities
//! - **Alpha Calibration**: EIOPA convergence-speed search
//! - **Diagnostics**: Post-fit quality reports
//!
//! ## Quick Start
//!
//! ```rust
//! use rfr_curves::prelude::*;
//!
//! // Observed liquid curve
//! let rates = [0.01, 0.015, 0.02];
//! let tenors = [1.0, 2.0, 3.0];
//!
//! // Fit with UFR 4% and convergence speed 0.15
//! let curve = SmithWilson::new(0.04, 0.15)
//!     .unwrap()
//!     .fit(&rates, &tenors)
//!     .unwrap();
//!
//! // Extrapolate to 150 years
//! let targets: Vec<f64> = (1..=150).map(f64::from).collect();
//! let fitted = curve.zero_rates(&targets).unwrap();
//! assert_eq!(fitted.len(), 150);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]

pub mod calibration;
pub mod conversion;
pub mod error;
pub mod report;
pub mod smith_wilson;
mod validate;
pub mod wilson;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calibration::{convergence_gap, convergence_point, fit_convergence_speed};
    pub use crate::conversion::{discount_factor, ufr_discount_factor, zero_rate};
    pub use crate::error::{CurveError, CurveResult, DomainError, ValidationError};
    pub use crate::report::{FitDiagnostics, FitReport};
    pub use crate::smith_wilson::{fit_zero_rates, SmithWilson, SmithWilsonCurve};
    pub use crate::wilson::{wilson, wilson_cross_matrix, wilson_matrix};
}

pub use error::{CurveError, CurveResult, DomainError, ValidationError};
pub use smith_wilson::{fit_zero_rates, SmithWilson, SmithWilsonCurve};
