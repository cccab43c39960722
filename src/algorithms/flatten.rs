//! Flattening of nested sequences.
//!
//! ## Purpose
//!
//! This module collects the scalar leaves of an arbitrarily nested sequence
//! into a single flat `Vec`.
//!
//! ## Design notes
//!
//! * **Stack-based**: Traversal goes through [`Leaves`], which keeps its own
//!   stack, so deeply nested input cannot overflow the call stack.
//! * **Flexible input**: Accepts anything viewable as `[Nested<T>]`: slices,
//!   vectors, arrays, or a single `Nested` value.
//!
//! ## Invariants
//!
//! * Output order is depth-first, left-to-right.
//! * Output contains no list values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::nested::{Leaves, Nested};

// ============================================================================
// Flattening
// ============================================================================

/// Return all scalar leaves of `nested` in depth-first, left-to-right order.
///
/// ```
/// use seqkit::prelude::*;
///
/// let value = nested![1, [2, 3], [4, [5, 6]]];
/// assert_eq!(flatten(&value), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn flatten<T, S>(nested: &S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[Nested<T>]> + ?Sized,
{
    let mut flat = Vec::new();
    flatten_into(nested, &mut flat);
    flat
}

/// Append all scalar leaves of `nested` to `out`, in depth-first,
/// left-to-right order.
///
/// Existing contents of `out` are kept.
pub fn flatten_into<T, S>(nested: &S, out: &mut Vec<T>)
where
    T: Clone,
    S: AsRef<[Nested<T>]> + ?Sized,
{
    out.extend(Leaves::new(nested.as_ref()).cloned());
}
