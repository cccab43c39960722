//! # seqkit — Small Utilities over In-Memory Sequences
//!
//! Pure, stateless functions for three everyday sequence tasks:
//!
//! - **Averaging**: the arithmetic mean of a numeric sequence.
//! - **Duplicate detection**: the values that occur more than once, in the
//!   order of their second occurrence.
//! - **Flattening**: the leaves of an arbitrarily nested sequence, in
//!   depth-first, left-to-right order.
//!
//! Every function borrows its input, never mutates it, and returns freshly
//! allocated output owned by the caller. All functions are safe to call
//! concurrently on shared input.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let average = calculate_average(&[10, 20, 30, 40])?;
//! let duplicates = find_duplicates(&[1, 2, 3, 2, 4, 3]);
//! let flat = flatten(&nested![1, [2, 3], [4, [5, 6]]]);
//!
//! assert_eq!(average, 25.0);
//! assert_eq!(duplicates, vec![2, 3]);
//! assert_eq!(flat, vec![1, 2, 3, 4, 5, 6]);
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Only the average functions can fail. They return
//! `Result<_, SeqError>`, with `SeqError::InvalidArgument` for an empty
//! sequence:
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! match calculate_average::<f64>(&[]) {
//!     Ok(average) => println!("Average: {average}"),
//!     Err(e) => eprintln!("Averaging failed: {e}"),
//! }
//! ```
//!
//! Duplicate detection and flattening are total over their inputs.
//!
//! ## Nested Sequences
//!
//! Nested input is described by [`Nested`], either a scalar `Item` or a
//! `List` of further nested values. The [`nested!`] macro mirrors bracket
//! notation:
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let value: Nested<i32> = nested![1, [2, [3, [4]]]];
//!
//! assert_eq!(value.depth(), 4);
//! assert_eq!(value.to_string(), "[1, [2, [3, [4]]]]");
//! assert_eq!(value.leaves().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```
//!
//! Traversal, cloning, comparison, hashing, formatting, and dropping never
//! recurse, so nesting depth is limited by memory only.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! seqkit = { version = "0.1", default-features = false, features = ["hashbrown"] }
//! ```
//!
//! Without `std`, duplicate detection needs hash sets from `hashbrown`, so the
//! `hashbrown` feature is required.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[cfg(not(any(feature = "std", feature = "hashbrown")))]
compile_error!("seqkit requires either the `std` or the `hashbrown` feature");

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error types.
//
// Contains the `SeqError` type and the `Nested` sequence with its
// leaf iterator.
mod primitives;

// Layer 2: Engine - input validation.
//
// Contains the `Validator` that guards restricted input domains.
mod engine;

// Layer 3: Algorithms - the sequence operations.
//
// Contains averaging, duplicate detection, and flattening.
mod algorithms;

// High-level API gathering the public surface.
mod api;

pub use api::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard seqkit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to every operation and type:
///
/// ```
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Leaves, Nested, SeqError, calculate_average, duplicate_counts, find_duplicates, flatten,
        flatten_into, mean,
    };
    pub use crate::nested;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal input validation.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal sequence operations.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
