//! # Duffing — a forced, damped Duffing oscillator for Rust and Python
//!
//! Integrates the Duffing equation
//!
//! ```text
//! x'' + delta·x' + alpha·x + beta·x^3 = gamma·cos(omega·t)
//! ```
//!
//! with classical fourth-order Runge-Kutta at a fixed timestep. The
//! oscillator is stateful: `iterate(n)` advances the persistent state and
//! returns the visited trajectory, so repeated calls continue where the
//! previous one stopped.
//!
//! ## Quick Start
//!
//! ```rust
//! use duffing::prelude::*;
//!
//! // Build the oscillator (defaults are the chaotic double-well regime)
//! let mut osc = Duffing::new()
//!     .damping(0.2)
//!     .forcing(0.3)
//!     .frequency(1.2)
//!     .timestep(0.01)
//!     .build()?;
//!
//! // Advance 10_000 steps
//! let trajectory = osc.iterate(10_000);
//!
//! println!("{}", trajectory);
//! assert_eq!(trajectory.len(), 10_001);
//! # Result::<(), DuffingError>::Ok(())
//! ```
//!
//! ## Model
//!
//! * `alpha` — linear stiffness (negative for the double-well potential)
//! * `beta` — cubic nonlinearity
//! * `delta` — viscous damping
//! * `gamma` — forcing amplitude
//! * `omega` — forcing angular frequency
//!
//! With `beta = gamma = delta = 0` the equation reduces to simple harmonic
//! motion, which the tests use as an analytic reference.

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - equations of motion and the RK4 step.
mod math;

// Layer 3: Engine - integration loop, validation, and output types.
mod engine;

// High-level builder API.
mod api;

pub use crate::api::{DuffingBuilder, DuffingOscillator};
pub use crate::engine::output::Trajectory;
pub use crate::math::dynamics::State;
pub use crate::primitives::errors::DuffingError;

// Standard Duffing prelude.
pub mod prelude {
    pub use crate::api::{DuffingBuilder as Duffing, DuffingOscillator};
    pub use crate::engine::output::Trajectory;
    pub use crate::math::dynamics::State;
    pub use crate::primitives::errors::DuffingError;
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
    pub mod api {
        pub use crate::api::*;
    }
}
