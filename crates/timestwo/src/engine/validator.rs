//! Boundary validation for the doubling kernel.
//!
//! ## Purpose
//!
//! This module checks the caller's side of the boundary contract before the
//! engine writes anything. The C-style contract checks nothing; the safe
//! Rust surface verifies what slice types make verifiable and fails fast,
//! leaving the output buffer untouched on error.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation happens before the first write.
//! * **Minimal**: Slice lengths are the only checkable precondition left;
//!   non-negativity and buffer ownership are guaranteed by the types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not inspect element values; NaN and infinity are
//!   legal inputs and double like any other value.
//! * This module does not perform the element-wise pass itself.

// Internal dependencies
use crate::primitives::errors::TimesTwoError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for the kernel's boundary contract.
///
/// Provides static methods returning `Result<(), TimesTwoError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that the output buffer can hold one element per input element.
    ///
    /// The output buffer may be longer than the input; elements past
    /// `input.len()` are simply never written.
    pub fn validate_buffers(input: &[f64], output: &[f64]) -> Result<(), TimesTwoError> {
        if output.len() < input.len() {
            return Err(TimesTwoError::OutputTooSmall {
                needed: input.len(),
                got: output.len(),
            });
        }
        Ok(())
    }
}
