//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure scalar kernels the engine applies
//! element-wise. It depends only on the primitives layer.
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

/// Scalar kernels.
pub mod scalar;
