//! Pre-flight input validation shared by the fitting pipeline.

use crate::error::ValidationError;

/// Checks that a tenor sequence is non-empty, strictly positive, and free
/// of duplicates (exact `f64` equality, since equal tenors make the kernel
/// matrix singular regardless of how close the rest are).
pub(crate) fn check_tenors(tenors: &[f64]) -> Result<(), ValidationError> {
    if tenors.is_empty() {
        return Err(ValidationError::EmptyTenors);
    }

    for (index, &tenor) in tenors.iter().enumerate() {
        // `!(tenor > 0.0)` also catches NaN
        if !(tenor > 0.0) {
            return Err(ValidationError::NonPositiveTenor { index, tenor });
        }
    }

    // The sequence is not required to be sorted, so duplicate detection
    // goes through a sorted view of the original indices.
    let mut order: Vec<usize> = (0..tenors.len()).collect();
    order.sort_by(|&a, &b| {
        tenors[a]
            .partial_cmp(&tenors[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for pair in order.windows(2) {
        if tenors[pair[0]] == tenors[pair[1]] {
            let index = pair[0].max(pair[1]);
            return Err(ValidationError::DuplicateTenor {
                index,
                tenor: tenors[index],
            });
        }
    }

    Ok(())
}

/// Checks that the rate vector matches the tenor vector in length.
pub(crate) fn check_lengths(rates: usize, tenors: usize) -> Result<(), ValidationError> {
    if rates != tenors {
        return Err(ValidationError::LengthMismatch { rates, tenors });
    }
    Ok(())
}

/// Checks that the convergence speed parameter is strictly positive.
pub(crate) fn check_alpha(alpha: f64) -> Result<(), ValidationError> {
    if !(alpha > 0.0) {
        return Err(ValidationError::NonPositiveAlpha { alpha });
    }
    Ok(())
}
