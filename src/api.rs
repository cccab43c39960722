//! High-level API for sequence utilities.
//!
//! ## Purpose
//!
//! This module gathers the user-facing operations and types from the lower
//! layers into a single surface, re-exported by the crate root and the
//! prelude.
//!
//! ## Key concepts
//!
//! * **Operations**: [`calculate_average`], [`find_duplicates`], [`flatten`]
//!   and their companions [`mean`], [`duplicate_counts`], [`flatten_into`].
//! * **Types**: [`Nested`] for nested input, [`SeqError`] for failures.

// Publicly re-exported operations
pub use crate::algorithms::average::{calculate_average, mean};
pub use crate::algorithms::duplicates::{duplicate_counts, find_duplicates};
pub use crate::algorithms::flatten::{flatten, flatten_into};

// Publicly re-exported types
pub use crate::primitives::errors::SeqError;
pub use crate::primitives::nested::{Leaves, Nested};
