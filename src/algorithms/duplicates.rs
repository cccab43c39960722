//! Detection of repeated values.
//!
//! ## Purpose
//!
//! This module reports the values that occur more than once in a sequence.
//!
//! ## Design notes
//!
//! * **Single pass**: O(n) time and O(n) space using hash sets of borrowed
//!   elements; only reported values are cloned.
//! * **No-std**: Uses `hashbrown` (the `hashbrown` feature) when `std` is disabled.
//!
//! ## Key concepts
//!
//! * **Second occurrence**: a value is reported at the position where it is
//!   seen for the second time. Later repetitions are not reported again.
//!
//! ## Invariants
//!
//! * Every reported value occurs at least twice in the input.
//! * Each value is reported at most once.
//! * Output is ordered by position of second occurrence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

// External dependencies
use core::hash::Hash;

// ============================================================================
// Duplicate Detection
// ============================================================================

/// Return the values that occur more than once in `items`, ordered by the
/// position of their second occurrence.
///
/// ```
/// use seqkit::prelude::*;
///
/// assert_eq!(find_duplicates(&[1, 2, 3, 2, 4, 3]), vec![2, 3]);
/// assert_eq!(find_duplicates(&[1, 1, 1]), vec![1]);
/// ```
pub fn find_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            duplicates.push(item.clone());
        }
    }

    duplicates
}

/// Return each repeated value of `items` with its total number of
/// occurrences, in the same order as [`find_duplicates`].
///
/// ```
/// use seqkit::prelude::*;
///
/// assert_eq!(duplicate_counts(&[1, 1, 1, 2, 2]), vec![(1, 3), (2, 2)]);
/// ```
pub fn duplicate_counts<T>(items: &[T]) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(items.len());
    let mut order = Vec::new();

    for item in items {
        let count = counts.entry(item).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(item);
        }
    }

    order
        .into_iter()
        .map(|item| (item.clone(), counts[&item]))
        .collect()
}
