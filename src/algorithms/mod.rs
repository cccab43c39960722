//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the three sequence operations: averaging, duplicate
//! detection, and flattening. Each is a single pass over borrowed input that
//! returns freshly allocated output.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Arithmetic mean.
pub mod average;

/// Repeated-value detection.
pub mod duplicates;

/// Flattening of nested sequences.
pub mod flatten;
