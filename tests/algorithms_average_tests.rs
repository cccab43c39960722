//! Tests for arithmetic mean computation.
//!
//! ## Test Organization
//!
//! 1. **Basic Computation** - Integer and float inputs
//! 2. **Edge Cases** - Empty, single-element, and non-finite inputs
//! 3. **Float-generic Mean** - Agreement with the f64 average

use approx::assert_relative_eq;

use seqkit::{SeqError, calculate_average, mean};

// ============================================================================
// Basic Computation Tests
// ============================================================================

/// Test the average of an integer sequence.
#[test]
fn test_average_integers() {
    assert_eq!(calculate_average(&[10, 20, 30, 40]), Ok(25.0));
}

/// Test that integer averages are not truncated.
#[test]
fn test_average_integers_fractional_result() {
    assert_eq!(calculate_average(&[1, 2]), Ok(1.5));
    assert_eq!(calculate_average(&[-3_i64, 4]), Ok(0.5));
}

/// Test the average of a float sequence.
#[test]
fn test_average_floats() {
    let avg = calculate_average(&[0.1, 0.2, 0.3]).unwrap();
    assert_relative_eq!(avg, 0.2, epsilon = 1e-12);
}

/// Test that the average equals sum / len for several sequences.
#[test]
fn test_average_matches_sum_over_len() {
    let cases: [&[f64]; 5] = [
        &[1.0],
        &[2.0, 4.0],
        &[-1.5, 1.5, 3.0],
        &[1e10, 1.0, -1e10, 7.0],
        &[0.25; 9],
    ];

    for values in cases {
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert_eq!(calculate_average(values), Ok(expected), "values: {values:?}");
    }
}

/// Test that large integers do not overflow during summation.
#[test]
fn test_average_no_integer_overflow() {
    let avg = calculate_average(&[u64::MAX, u64::MAX]).unwrap();
    assert_relative_eq!(avg, u64::MAX as f64);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that an empty sequence fails with InvalidArgument.
#[test]
fn test_average_empty_fails() {
    let result = calculate_average::<i32>(&[]);
    assert!(matches!(result, Err(SeqError::InvalidArgument(_))));
}

/// Test a single-element sequence.
#[test]
fn test_average_single_element() {
    assert_eq!(calculate_average(&[42_u8]), Ok(42.0));
}

/// Test that NaN propagates rather than failing.
#[test]
fn test_average_nan_propagates() {
    let avg = calculate_average(&[1.0, f64::NAN, 3.0]).unwrap();
    assert!(avg.is_nan());
}

// ============================================================================
// Float-generic Mean Tests
// ============================================================================

/// Test mean in f32.
#[test]
fn test_mean_f32() {
    let values = [1.5_f32, 2.5, 3.5, 4.5];
    let m: f32 = mean(&values).unwrap();
    assert_relative_eq!(m, 3.0_f32);
}

/// Test that mean agrees with calculate_average.
#[test]
fn test_mean_agrees_with_average() {
    let values = [0.3_f32, 1.7, 2.2, 9.9, -4.1];
    let m = mean(&values).unwrap();
    let avg = calculate_average(&values).unwrap();
    assert_relative_eq!(f64::from(m), avg, epsilon = 1e-5);
}

/// Test that mean rejects an empty sequence.
#[test]
fn test_mean_empty_fails() {
    let result = mean::<f64>(&[]);
    assert!(matches!(result, Err(SeqError::InvalidArgument(_))));
}
