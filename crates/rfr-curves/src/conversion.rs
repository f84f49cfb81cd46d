//! Conversion between annually-compounded spot rates and zero-coupon prices.
//!
//! Market rates for regulatory curves are quoted with annual compounding,
//! so a zero-coupon bond paying 1 at maturity `t` is worth
//! `(1 + r)^-t` today. The asymptotic part of a fitted curve instead lives
//! in continuous time, `e^(-mu * t)` with `mu = ln(1 + ufr)`.
//!
//! # Example
//!
//! ```rust
//! use rfr_curves::conversion::{discount_factor, zero_rate};
//!
//! let price = discount_factor(0.02, 5.0).unwrap();
//! let rate = zero_rate(price, 5.0).unwrap();
//! assert!((rate - 0.02).abs() < 1e-12);
//! ```

use crate::error::DomainError;

/// Converts an annually-compounded spot rate into a zero-coupon price.
///
/// `price = (1 + rate)^-tenor`
///
/// # Errors
///
/// [`DomainError::NonPositiveTenor`] if `tenor <= 0`,
/// [`DomainError::InvalidRate`] if `1 + rate <= 0`.
pub fn discount_factor(rate: f64, tenor: f64) -> Result<f64, DomainError> {
    if !(tenor > 0.0) {
        return Err(DomainError::NonPositiveTenor { tenor });
    }
    if !(1.0 + rate > 0.0) {
        return Err(DomainError::InvalidRate { rate });
    }
    Ok((1.0 + rate).powf(-tenor))
}

/// Converts a zero-coupon price back into an annually-compounded spot rate.
///
/// `rate = price^(-1/tenor) - 1`
///
/// # Errors
///
/// [`DomainError::NonPositiveTenor`] if `tenor <= 0`,
/// [`DomainError::InvalidPrice`] if `price <= 0`.
pub fn zero_rate(price: f64, tenor: f64) -> Result<f64, DomainError> {
    if !(tenor > 0.0) {
        return Err(DomainError::NonPositiveTenor { tenor });
    }
    if !(price > 0.0) {
        return Err(DomainError::InvalidPrice { price });
    }
    Ok(price.powf(-1.0 / tenor) - 1.0)
}

/// Converts a rate vector into a price vector, pairwise over equal-length
/// slices.
pub fn discount_factors(rates: &[f64], tenors: &[f64]) -> Result<Vec<f64>, DomainError> {
    rates
        .iter()
        .zip(tenors)
        .map(|(&rate, &tenor)| discount_factor(rate, tenor))
        .collect()
}

/// Converts a price vector into a rate vector, pairwise over equal-length
/// slices.
pub fn zero_rates(prices: &[f64], tenors: &[f64]) -> Result<Vec<f64>, DomainError> {
    prices
        .iter()
        .zip(tenors)
        .map(|(&price, &tenor)| zero_rate(price, tenor))
        .collect()
}

/// Converts an annually-compounded rate to its continuously-compounded
/// equivalent, `ln(1 + rate)`.
///
/// # Errors
///
/// [`DomainError::InvalidRate`] if `1 + rate <= 0`.
pub fn continuous_rate(rate: f64) -> Result<f64, DomainError> {
    if !(1.0 + rate > 0.0) {
        return Err(DomainError::InvalidRate { rate });
    }
    Ok((1.0 + rate).ln())
}

/// Discount factor implied by the ultimate forward rate alone,
/// `e^(-mu * tenor)`, where `mu` is the continuously-compounded UFR.
///
/// This is the asymptotic term of the fitted discount function; the kernel
/// sum decays to zero at long maturities and leaves only this factor.
#[must_use]
pub fn ufr_discount_factor(mu: f64, tenor: f64) -> f64 {
    (-mu * tenor).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_known_values() {
        let rates = [0.02, 0.025, -0.033, 0.01, 0.0008];
        let tenors = [0.25, 1.0, 5.0, 49.5, 125.0];
        let expected = [
            0.995061577,
            0.975609756,
            1.182681027,
            0.611071456,
            0.904873593,
        ];

        let prices = discount_factors(&rates, &tenors).unwrap();
        for (price, want) in prices.iter().zip(expected) {
            assert_relative_eq!(*price, want, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_negative_rate_gives_price_above_par() {
        let price = discount_factor(-0.01, 10.0).unwrap();
        assert!(price > 1.0);
    }

    #[test]
    fn test_round_trip() {
        for rate in [-0.008, 0.0, 0.0135, 0.05] {
            for tenor in [0.25, 1.0, 7.0, 60.0] {
                let price = discount_factor(rate, tenor).unwrap();
                let back = zero_rate(price, tenor).unwrap();
                assert_relative_eq!(back, rate, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_ufr_discount_factor_known_values() {
        let mu = continuous_rate(0.029).unwrap();
        let tenors = [0.25, 1.0, 5.0, 49.5, 125.0];
        let expected = [
            0.992878614,
            0.971817298,
            0.866808430,
            0.242906395,
            0.028059385,
        ];

        for (tenor, want) in tenors.iter().zip(expected) {
            assert_relative_eq!(ufr_discount_factor(mu, *tenor), want, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            discount_factor(0.02, 0.0),
            Err(DomainError::NonPositiveTenor { .. })
        ));
        assert!(matches!(
            discount_factor(-1.0, 1.0),
            Err(DomainError::InvalidRate { .. })
        ));
        assert!(matches!(
            zero_rate(0.0, 1.0),
            Err(DomainError::InvalidPrice { .. })
        ));
        assert!(matches!(
            zero_rate(0.95, -2.0),
            Err(DomainError::NonPositiveTenor { .. })
        ));
        assert!(matches!(
            continuous_rate(-1.5),
            Err(DomainError::InvalidRate { .. })
        ));
    }
}
