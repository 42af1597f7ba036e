//! Public API for the array doubling kernel.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the checked slice
//! API, the safe in-place variant, and the unchecked raw-pointer fast path
//! that the FFI bindings build on.
//!
//! ## Design notes
//!
//! * **Checked by default**: The slice entry point validates buffer sizes
//!   and fails fast before any write (the output buffer is left untouched
//!   on error).
//! * **Borrowed, never owned**: Both buffers are caller-allocated; the
//!   kernel borrows them for the duration of the call only and never
//!   allocates.
//! * **Unchecked path is opt-in**: The caller-enforced C-style contract
//!   survives as an `unsafe fn` for boundaries where the sizes are known
//!   out of band.

// Internal dependencies
use crate::engine::executor::{double_pass, double_pass_in_place, double_pass_raw};
use crate::engine::validator::Validator;
use crate::primitives::errors::TimesTwoError;

// ============================================================================
// Checked Entry Points
// ============================================================================

/// Double every element of `input` into the corresponding position of
/// `output`.
///
/// Writes `output[i] = 2.0 * input[i]` for every `i` in `0..input.len()`.
/// Elements of `output` beyond `input.len()` are not touched. An empty
/// input performs no writes and succeeds.
///
/// # Errors
///
/// Returns [`TimesTwoError::OutputTooSmall`] without writing anything if
/// `output.len() < input.len()`.
///
/// # Examples
///
/// ```rust
/// use timestwo::times_two;
///
/// let input = [1.0, -2.5, 0.0, 100.0];
/// let mut output = [0.0; 4];
/// times_two(&input, &mut output)?;
/// assert_eq!(output, [2.0, -5.0, 0.0, 200.0]);
/// # Result::<(), timestwo::TimesTwoError>::Ok(())
/// ```
pub fn times_two(input: &[f64], output: &mut [f64]) -> Result<(), TimesTwoError> {
    Validator::validate_buffers(input, output)?;
    double_pass(input, output);
    Ok(())
}

/// Double every element of `values` in place.
///
/// This is the aliased (`input == output`) case of [`times_two`], which
/// Rust's borrow rules keep out of the two-slice signature. Doubling is
/// element-local, so in-place application produces the same values as a
/// disjoint-buffer call on identical input.
pub fn times_two_in_place(values: &mut [f64]) {
    double_pass_in_place(values);
}

// ============================================================================
// Unchecked Entry Point
// ============================================================================

/// Double `length` elements from `input` into `output` with no checks.
///
/// This is the C-style boundary contract kept as an internal fast path
/// for FFI: the caller asserts the sizes, the kernel trusts them.
///
/// # Safety
///
/// `input` must point to at least `length` readable `f64` values and
/// `output` to at least `length` writable `f64` values, both valid for the
/// duration of the call. The buffers may overlap arbitrarily, including
/// `input == output`.
pub unsafe fn times_two_unchecked(length: usize, input: *const f64, output: *mut f64) {
    unsafe { double_pass_raw(length, input, output) }
}
