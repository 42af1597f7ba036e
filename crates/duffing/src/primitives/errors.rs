//! Error types for Duffing oscillator configuration.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported when building an
//! oscillator from user-supplied parameters. Integration itself cannot
//! fail once the parameters are validated, so no runtime error variants
//! exist.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the offending parameter and carry its value.
//! * **Deferred**: Errors are caught and stored during builder configuration
//!   and surfaced by `build()`.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Duffing oscillator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DuffingError {
    /// Timestep must be positive and finite.
    InvalidTimestep(f64),

    /// A model parameter or initial condition is NaN or infinite.
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl Display for DuffingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DuffingError::InvalidTimestep(dt) => {
                write!(f, "timestep must be positive and finite, got {}", dt)
            }
            DuffingError::NonFiniteParameter { name, value } => {
                write!(f, "parameter `{}` must be finite, got {}", name, value)
            }
        }
    }
}

impl Error for DuffingError {}
