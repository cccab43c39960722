//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures and error types used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Arbitrarily nested sequences.
pub mod nested;
