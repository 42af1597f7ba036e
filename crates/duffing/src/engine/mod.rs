//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer validates configuration, runs the integration loop, and
//! records trajectories. It coordinates the primitives (error types) and
//! math (vector field, RK4) layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Integration loop.
pub mod executor;

/// Trajectory output type.
pub mod output;

/// Parameter validation.
pub mod validator;
