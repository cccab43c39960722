//! Tests for the sequence error type.
//!
//! ## Test Organization
//!
//! 1. **Display** - Message formatting
//! 2. **Trait Implementations** - Clone, PartialEq, std::error::Error

use seqkit::SeqError;

// ============================================================================
// Display Tests
// ============================================================================

/// Test SeqError display formatting.
#[test]
fn test_seq_error_display() {
    let err = SeqError::InvalidArgument("values is empty".to_string());
    assert_eq!(format!("{}", err), "Invalid argument: values is empty");
}

// ============================================================================
// Trait Implementation Tests
// ============================================================================

/// Test SeqError Clone and PartialEq.
#[test]
fn test_seq_error_clone_eq() {
    let err = SeqError::InvalidArgument("a".to_string());
    let cloned = err.clone();

    assert_eq!(err, cloned);
    assert_ne!(err, SeqError::InvalidArgument("b".to_string()));
}

/// Test SeqError Debug.
#[test]
fn test_seq_error_debug() {
    let err = SeqError::InvalidArgument("x".to_string());
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("InvalidArgument"));
}

/// Test SeqError works as a boxed std error.
#[cfg(feature = "std")]
#[test]
fn test_seq_error_is_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(SeqError::InvalidArgument("boxed".to_string()));
    assert_eq!(err.to_string(), "Invalid argument: boxed");
}
