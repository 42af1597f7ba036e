//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the equations of motion and the Runge-Kutta step.
//! Everything here is pure: no state beyond the arguments, no allocation.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Equations of motion and RK4 stepping.
pub mod dynamics;
