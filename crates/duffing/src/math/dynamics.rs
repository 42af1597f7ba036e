//! Equations of motion and the RK4 step for the Duffing oscillator.
//!
//! ## Purpose
//!
//! This module evaluates the Duffing vector field and advances a state by
//! one classical fourth-order Runge-Kutta step at a fixed timestep.
//!
//! ## Design notes
//!
//! * **Pure**: Both functions are deterministic in their arguments; the
//!   engine owns the persistent state and clock.
//! * **Fixed step**: Integration uses a fixed `dt`; no adaptive stepping
//!   or error control.
//!
//! ## Invariants
//!
//! * `rk4_step` has local truncation error O(dt^5) for the smooth Duffing
//!   right-hand side.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by the engine's
//!   validator before integration starts).
//! * This module does not record trajectories.

// ============================================================================
// State and Parameters
// ============================================================================

/// Instantaneous phase-space state of the oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Position x.
    pub position: f64,
    /// Velocity x'.
    pub velocity: f64,
}

/// Model parameters of the Duffing equation
/// `x'' + delta·x' + alpha·x + beta·x^3 = gamma·cos(omega·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuffingParams {
    /// Linear stiffness alpha.
    pub stiffness: f64,
    /// Cubic nonlinearity beta.
    pub nonlinearity: f64,
    /// Viscous damping delta.
    pub damping: f64,
    /// Forcing amplitude gamma.
    pub forcing: f64,
    /// Forcing angular frequency omega.
    pub frequency: f64,
    /// Integration timestep dt.
    pub timestep: f64,
}

// ============================================================================
// Vector Field
// ============================================================================

/// Acceleration x'' at the given time and state.
#[inline]
pub fn acceleration(params: &DuffingParams, t: f64, state: State) -> f64 {
    params.forcing * (params.frequency * t).cos()
        - params.damping * state.velocity
        - params.stiffness * state.position
        - params.nonlinearity * state.position.powi(3)
}

// ============================================================================
// RK4 Step
// ============================================================================

/// Advance the state by one RK4 step of size `params.timestep` from time `t`.
pub fn rk4_step(params: &DuffingParams, t: f64, state: State) -> State {
    let dt = params.timestep;
    let half = 0.5 * dt;

    // k1 at the step start
    let k1_x = state.velocity;
    let k1_v = acceleration(params, t, state);

    // k2 at the midpoint using k1
    let mid1 = State {
        position: state.position + half * k1_x,
        velocity: state.velocity + half * k1_v,
    };
    let k2_x = mid1.velocity;
    let k2_v = acceleration(params, t + half, mid1);

    // k3 at the midpoint using k2
    let mid2 = State {
        position: state.position + half * k2_x,
        velocity: state.velocity + half * k2_v,
    };
    let k3_x = mid2.velocity;
    let k3_v = acceleration(params, t + half, mid2);

    // k4 at the step end using k3
    let end = State {
        position: state.position + dt * k3_x,
        velocity: state.velocity + dt * k3_v,
    };
    let k4_x = end.velocity;
    let k4_v = acceleration(params, t + dt, end);

    let sixth = dt / 6.0;
    State {
        position: state.position + sixth * (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x),
        velocity: state.velocity + sixth * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v),
    }
}
