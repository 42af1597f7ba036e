//! Error types for array doubling operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions detectable at the checked entry
//! point of the doubling kernel. The C-style contract is entirely
//! caller-enforced; the checked Rust surface verifies what the slice types
//! make verifiable and reports violations before any write occurs.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (needed vs. actual lengths).
//! * **No-std**: No allocation; the type is plain data and `Copy`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * An error is reported only when the output buffer was left untouched.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Negative lengths are unrepresentable in the safe API; they are rejected
//!   at the C boundary by the bindings, not here.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for array doubling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesTwoError {
    /// The output buffer has fewer addressable elements than the input.
    OutputTooSmall {
        /// Number of elements the operation would write.
        needed: usize,
        /// Number of elements the output buffer holds.
        got: usize,
    },
}

impl Display for TimesTwoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TimesTwoError::OutputTooSmall { needed, got } => write!(
                f,
                "output buffer too small: needs {} elements, has {}",
                needed, got
            ),
        }
    }
}

#[cfg(feature = "std")]
impl Error for TimesTwoError {}
