//! High-level API for the Duffing oscillator.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring model parameters and the stateful oscillator it
//! produces.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters (the classic chaotic double-well regime).
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateful**: The built oscillator keeps its phase-space state and
//!   clock across `iterate` calls, so a simulation can be advanced in
//!   chunks.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DuffingBuilder`] via `Duffing::new()`.
//! 2. Chain configuration methods (`.damping()`, `.forcing()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`DuffingOscillator`].
//! 4. Call `.iterate(steps)` as often as needed.

// Internal dependencies
use crate::engine::executor::integrate;
use crate::engine::output::Trajectory;
use crate::engine::validator::Validator;
use crate::math::dynamics::{DuffingParams, State};
use crate::primitives::errors::DuffingError;

// ============================================================================
// Defaults
// ============================================================================

/// Default linear stiffness (double-well potential).
const DEFAULT_STIFFNESS: f64 = -1.0;
/// Default cubic nonlinearity.
const DEFAULT_NONLINEARITY: f64 = 1.0;
/// Default viscous damping.
const DEFAULT_DAMPING: f64 = 0.2;
/// Default forcing amplitude.
const DEFAULT_FORCING: f64 = 0.3;
/// Default forcing angular frequency.
const DEFAULT_FREQUENCY: f64 = 1.2;
/// Default integration timestep.
const DEFAULT_TIMESTEP: f64 = 0.01;
/// Default initial position.
const DEFAULT_POSITION: f64 = 0.5;
/// Default initial velocity.
const DEFAULT_VELOCITY: f64 = 0.0;

// ============================================================================
// Duffing Builder
// ============================================================================

/// Fluent builder for configuring a Duffing oscillator.
#[derive(Debug, Clone, Default)]
pub struct DuffingBuilder {
    /// Linear stiffness alpha.
    pub stiffness: Option<f64>,

    /// Cubic nonlinearity beta.
    pub nonlinearity: Option<f64>,

    /// Viscous damping delta.
    pub damping: Option<f64>,

    /// Forcing amplitude gamma.
    pub forcing: Option<f64>,

    /// Forcing angular frequency omega.
    pub frequency: Option<f64>,

    /// Integration timestep dt.
    pub timestep: Option<f64>,

    /// Initial position x(0).
    pub position: Option<f64>,

    /// Initial velocity x'(0).
    pub velocity: Option<f64>,
}

impl DuffingBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the linear stiffness alpha (default: -1.0, double-well).
    pub fn stiffness(mut self, alpha: f64) -> Self {
        self.stiffness = Some(alpha);
        self
    }

    /// Set the cubic nonlinearity beta (default: 1.0).
    pub fn nonlinearity(mut self, beta: f64) -> Self {
        self.nonlinearity = Some(beta);
        self
    }

    /// Set the viscous damping delta (default: 0.2).
    pub fn damping(mut self, delta: f64) -> Self {
        self.damping = Some(delta);
        self
    }

    /// Set the forcing amplitude gamma (default: 0.3).
    pub fn forcing(mut self, gamma: f64) -> Self {
        self.forcing = Some(gamma);
        self
    }

    /// Set the forcing angular frequency omega (default: 1.2).
    pub fn frequency(mut self, omega: f64) -> Self {
        self.frequency = Some(omega);
        self
    }

    /// Set the integration timestep dt (default: 0.01).
    pub fn timestep(mut self, dt: f64) -> Self {
        self.timestep = Some(dt);
        self
    }

    /// Set the initial state (default: x = 0.5, x' = 0.0).
    pub fn initial(mut self, position: f64, velocity: f64) -> Self {
        self.position = Some(position);
        self.velocity = Some(velocity);
        self
    }

    /// Validate the configuration and build the oscillator.
    ///
    /// # Errors
    ///
    /// Returns [`DuffingError::InvalidTimestep`] for a non-positive or
    /// non-finite timestep, and [`DuffingError::NonFiniteParameter`] for
    /// any NaN or infinite parameter or initial condition.
    pub fn build(self) -> Result<DuffingOscillator, DuffingError> {
        let params = DuffingParams {
            stiffness: self.stiffness.unwrap_or(DEFAULT_STIFFNESS),
            nonlinearity: self.nonlinearity.unwrap_or(DEFAULT_NONLINEARITY),
            damping: self.damping.unwrap_or(DEFAULT_DAMPING),
            forcing: self.forcing.unwrap_or(DEFAULT_FORCING),
            frequency: self.frequency.unwrap_or(DEFAULT_FREQUENCY),
            timestep: self.timestep.unwrap_or(DEFAULT_TIMESTEP),
        };
        let initial = State {
            position: self.position.unwrap_or(DEFAULT_POSITION),
            velocity: self.velocity.unwrap_or(DEFAULT_VELOCITY),
        };

        Validator::validate(&params, &initial)?;

        Ok(DuffingOscillator {
            params,
            initial,
            state: initial,
            time: 0.0,
        })
    }
}

// ============================================================================
// Duffing Oscillator
// ============================================================================

/// A validated, stateful Duffing oscillator.
#[derive(Debug, Clone, PartialEq)]
pub struct DuffingOscillator {
    params: DuffingParams,
    initial: State,
    state: State,
    time: f64,
}

impl DuffingOscillator {
    /// Advance the oscillator by `steps` RK4 steps.
    ///
    /// Returns a [`Trajectory`] of `steps + 1` samples: the state before
    /// integration plus one per step. The oscillator keeps its final state
    /// and clock, so a subsequent call continues the same orbit.
    pub fn iterate(&mut self, steps: usize) -> Trajectory {
        integrate(&self.params, &mut self.state, &mut self.time, steps)
    }

    /// Rewind the oscillator to its initial state and `t = 0`.
    pub fn reset(&mut self) {
        self.state = self.initial;
        self.time = 0.0;
    }

    /// Current phase-space state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.time
    }
}
