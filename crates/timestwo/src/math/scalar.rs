//! Scalar kernels applied element-wise by the engine.
//!
//! ## Purpose
//!
//! The single scalar operation of the crate, factored out so the array
//! pass, the in-place pass, and the raw FFI pass all multiply through the
//! same definition. Also exported directly for the scalar-interop binding.
//!
//! ## Invariants
//!
//! * Pure: no allocation, no state, no rounding beyond IEEE 754
//!   double-precision multiplication.
//! * `double(x)` is exact for every finite `x` whose doubling does not
//!   overflow (multiplication by 2 only increments the exponent).

// ============================================================================
// Scalar Kernel
// ============================================================================

/// Double a single value.
#[inline(always)]
pub fn double(x: f64) -> f64 {
    2.0 * x
}
