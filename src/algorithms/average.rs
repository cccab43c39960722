//! Arithmetic mean of numeric sequences.
//!
//! ## Purpose
//!
//! This module computes the arithmetic mean (sum divided by count) of a
//! sequence of numbers.
//!
//! ## Design notes
//!
//! * **Accumulation**: [`calculate_average`] widens every element to `f64`
//!   before summing, so integer inputs neither overflow nor truncate.
//! * **Float-generic**: [`mean`] stays in the input's own float type.
//!
//! ## Invariants
//!
//! * An empty sequence is rejected before any division takes place.
//! * Elements are summed left to right.
//!
//! ## Non-goals
//!
//! * This module does not use compensated (Kahan) summation.
//! * This module does not filter NaN or infinite values.

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SeqError;

// ============================================================================
// Mean Computation
// ============================================================================

/// Compute the arithmetic mean of `values` as `f64`.
///
/// Accepts any primitive integer or float element type.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] if `values` is empty, or if an
/// element cannot be represented as `f64`.
///
/// ```
/// use seqkit::prelude::*;
///
/// assert_eq!(calculate_average(&[10, 20, 30, 40])?, 25.0);
/// assert!(calculate_average::<i32>(&[]).is_err());
/// # Result::<(), SeqError>::Ok(())
/// ```
pub fn calculate_average<T>(values: &[T]) -> Result<f64, SeqError>
where
    T: Copy + ToPrimitive,
{
    Validator::validate_non_empty(values, "values")?;

    let mut total = 0.0;
    for (i, &value) in values.iter().enumerate() {
        total += Validator::validate_conversion(value, i)?;
    }

    Ok(total / values.len() as f64)
}

/// Compute the arithmetic mean of `values` in their own float type.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] if `values` is empty.
pub fn mean<T: Float>(values: &[T]) -> Result<T, SeqError> {
    Validator::validate_non_empty(values, "values")?;

    let total = values.iter().fold(T::zero(), |acc, &value| acc + value);
    let count = T::from(values.len()).ok_or_else(|| {
        SeqError::InvalidArgument("sequence length cannot be represented as a float".into())
    })?;

    Ok(total / count)
}
