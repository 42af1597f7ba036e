//! Parameter validation for the Duffing oscillator.
//!
//! ## Purpose
//!
//! This module checks model parameters and initial conditions before the
//! engine starts integrating. A non-finite parameter would silently poison
//! every subsequent sample, so everything is rejected up front.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Ordering**: The timestep is checked first since it gates every step.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct values.
//! * This module does not judge physical plausibility; any finite
//!   parameter set is accepted, stable or chaotic.

// Internal dependencies
use crate::math::dynamics::{DuffingParams, State};
use crate::primitives::errors::DuffingError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for oscillator configuration.
pub struct Validator;

impl Validator {
    /// Validate model parameters and the initial state.
    pub fn validate(params: &DuffingParams, initial: &State) -> Result<(), DuffingError> {
        // Check 1: usable timestep
        if !params.timestep.is_finite() || params.timestep <= 0.0 {
            return Err(DuffingError::InvalidTimestep(params.timestep));
        }

        // Check 2: finite model parameters and initial conditions
        let named = [
            ("stiffness", params.stiffness),
            ("nonlinearity", params.nonlinearity),
            ("damping", params.damping),
            ("forcing", params.forcing),
            ("frequency", params.frequency),
            ("position", initial.position),
            ("velocity", initial.velocity),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(DuffingError::NonFiniteParameter { name, value });
            }
        }

        Ok(())
    }
}
