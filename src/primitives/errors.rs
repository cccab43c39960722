//! Error types for sequence operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while operating
//! on caller-provided sequences.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry a message naming the offending input.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Only the average calculator can fail; duplicate detection and
//!   flattening are total over their inputs.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// An argument is outside the operation's domain (e.g., an empty sequence
    /// passed to the average calculator).
    InvalidArgument(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SeqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SeqError {}
