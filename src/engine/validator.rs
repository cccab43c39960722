//! Input validation for sequence operations.
//!
//! ## Purpose
//!
//! This module provides the validation functions that guard operations with
//! a restricted input domain, such as the average calculator.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over the element type.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reject NaN or infinite values; they propagate
//!   through IEEE arithmetic.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::ToPrimitive;

// Internal dependencies
use crate::primitives::errors::SeqError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sequence inputs.
///
/// All methods fail fast with [`SeqError::InvalidArgument`] upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate that a sequence has at least one element.
    ///
    /// `name` identifies the argument in the error message.
    pub fn validate_non_empty<T>(values: &[T], name: &str) -> Result<(), SeqError> {
        if values.is_empty() {
            return Err(SeqError::InvalidArgument(format!(
                "`{name}` must contain at least one element"
            )));
        }
        Ok(())
    }

    /// Convert the element at `index` to `f64`, failing if it has no `f64`
    /// representation.
    pub fn validate_conversion<T: ToPrimitive>(value: T, index: usize) -> Result<f64, SeqError> {
        value.to_f64().ok_or_else(|| {
            SeqError::InvalidArgument(format!(
                "element {index} cannot be represented as f64"
            ))
        })
    }
}
