//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer checks caller input before the algorithms run, so that the
//! algorithms themselves can assume a valid domain.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;
