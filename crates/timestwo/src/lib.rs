//! # timesTwo — element-wise array doubling for Rust, Python, and C
//!
//! A small cross-language numeric kernel: read `n` double-precision values
//! from an input buffer and write `2 × value` to the corresponding position
//! of a caller-provided output buffer. The crate exists as the Rust core of
//! a language-interop stack (Python and C bindings live in sibling crates),
//! so the boundary contract is the interesting part, not the arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use timestwo::prelude::*;
//!
//! let input = [1.0, -2.5, 0.0, 100.0];
//! let mut output = [0.0; 4];
//!
//! times_two(&input, &mut output)?;
//!
//! assert_eq!(output, [2.0, -5.0, 0.0, 200.0]);
//! # Result::<(), TimesTwoError>::Ok(())
//! ```
//!
//! ## Entry points
//!
//! * [`times_two`] — checked: validates buffer sizes before any write.
//! * [`times_two_in_place`] — the aliased (`input == output`) case,
//!   expressed safely.
//! * [`times_two_unchecked`] — raw-pointer fast path with the
//!   caller-enforced C-style contract; used by the FFI bindings.
//! * [`double`] — the scalar kernel.
//!
//! ## Boundary contract
//!
//! The caller allocates and owns both buffers; the kernel never allocates,
//! never frees, and never retains a reference past the call. The checked
//! entry point fails fast with [`TimesTwoError::OutputTooSmall`] before
//! touching the output buffer. A zero-length call performs no writes and
//! is not an error.
//!
//! ## `no_std`
//!
//! The crate is `no_std`-compatible (disable the default `std` feature);
//! it performs no allocation and needs nothing beyond `core`.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure scalar kernels.
mod math;

// Layer 3: Engine - validation and the element-wise pass.
mod engine;

// Public API surface.
mod api;

pub use crate::api::{times_two, times_two_in_place, times_two_unchecked};
pub use crate::math::scalar::double;
pub use crate::primitives::errors::TimesTwoError;

// Standard timesTwo prelude.
pub mod prelude {
    pub use crate::api::{times_two, times_two_in_place, times_two_unchecked};
    pub use crate::math::scalar::double;
    pub use crate::primitives::errors::TimesTwoError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
}
