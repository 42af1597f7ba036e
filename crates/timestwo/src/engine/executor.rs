//! Execution passes for the doubling kernel.
//!
//! ## Purpose
//!
//! This module contains the element-wise passes over the caller's buffers:
//! the slice pass used by the checked API, the in-place pass for the
//! aliased case, and the raw-pointer pass that preserves the unchecked
//! C-style boundary contract for the FFI bindings.
//!
//! ## Design notes
//!
//! * **Single pass**: Each variant is one linear traversal with no
//!   cross-index dependency, so the compiler is free to vectorize.
//! * **Same kernel everywhere**: All passes multiply through
//!   [`crate::math::scalar::double`].
//!
//! ## Invariants
//!
//! * Exactly `input.len()` (resp. `length`) elements are written; nothing
//!   beyond that index is touched.
//! * Each output element depends only on the same-indexed input element,
//!   so the raw pass is correct under arbitrary aliasing, including
//!   `input == output`.
//!
//! ## Non-goals
//!
//! * This module does not validate buffer sizes (handled by `validator`).
//! * No allocation, no parallelism, no explicit SIMD.

// Internal dependencies
use crate::math::scalar::double;

// ============================================================================
// Slice Passes
// ============================================================================

/// Write `2 * input[i]` into `output[i]` for every input index.
///
/// The caller guarantees `output.len() >= input.len()`.
#[inline]
pub fn double_pass(input: &[f64], output: &mut [f64]) {
    for (dst, src) in output.iter_mut().zip(input.iter()) {
        *dst = double(*src);
    }
}

/// Double every element of `values` in place.
#[inline]
pub fn double_pass_in_place(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = double(*v);
    }
}

// ============================================================================
// Raw Pass
// ============================================================================

/// The unchecked C-style boundary contract: `length` elements read from
/// `input`, `length` elements written to `output`, no checks of any kind.
///
/// # Safety
///
/// The caller must guarantee that `input` points to at least `length`
/// readable `f64` values and `output` to at least `length` writable `f64`
/// values, both valid for the duration of the call. The buffers may alias;
/// each element is read before its counterpart is written.
#[inline]
pub unsafe fn double_pass_raw(length: usize, input: *const f64, output: *mut f64) {
    for i in 0..length {
        let v = unsafe { input.add(i).read() };
        unsafe { output.add(i).write(double(v)) };
    }
}
