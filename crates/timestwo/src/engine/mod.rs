//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer performs boundary validation and runs the element-wise pass
//! over the caller's buffers. It coordinates the primitives (error types)
//! and math (scalar kernels) layers.
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

/// Element-wise execution passes.
pub mod executor;

/// Boundary validation.
pub mod validator;
