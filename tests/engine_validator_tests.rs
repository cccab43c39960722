#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! ## Test Organization
//!
//! 1. **Non-empty Checks** - Empty and populated sequences
//! 2. **Conversion Checks** - Integer and float conversion to f64

use seqkit::internals::engine::validator::Validator;
use seqkit::internals::primitives::errors::SeqError;

// ============================================================================
// Non-empty Tests
// ============================================================================

/// Test that an empty sequence is rejected and named in the message.
#[test]
fn test_validate_non_empty_rejects_empty() {
    let empty: [u8; 0] = [];
    let err = Validator::validate_non_empty(&empty, "numbers").unwrap_err();

    let SeqError::InvalidArgument(reason) = err;
    assert!(reason.contains("numbers"));
}

/// Test that a populated sequence is accepted.
#[test]
fn test_validate_non_empty_accepts_values() {
    assert!(Validator::validate_non_empty(&[1], "numbers").is_ok());
    assert!(Validator::validate_non_empty(&["a", "b"], "items").is_ok());
}

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test conversion of primitive numbers to f64.
#[test]
fn test_validate_conversion_primitives() {
    assert_eq!(Validator::validate_conversion(7_i32, 0), Ok(7.0));
    assert_eq!(Validator::validate_conversion(7_u64, 0), Ok(7.0));
    assert_eq!(Validator::validate_conversion(2.5_f32, 0), Ok(2.5));
    assert_eq!(Validator::validate_conversion(-2.5_f64, 0), Ok(-2.5));
}

/// Test that non-finite floats pass through unchanged.
#[test]
fn test_validate_conversion_non_finite() {
    let inf = Validator::validate_conversion(f64::INFINITY, 3).unwrap();
    assert!(inf.is_infinite());

    let nan = Validator::validate_conversion(f64::NAN, 3).unwrap();
    assert!(nan.is_nan());
}
