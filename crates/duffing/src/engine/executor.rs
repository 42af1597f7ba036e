//! Integration loop for the Duffing oscillator.
//!
//! ## Purpose
//!
//! This module advances a validated oscillator state through a requested
//! number of RK4 steps, recording every visited state into a
//! [`Trajectory`].
//!
//! ## Design notes
//!
//! * **Stateful caller**: The engine mutates the state and clock handed to
//!   it; the API layer owns them between calls so integration can resume.
//! * **Clock**: Time is derived as `t0 + i·dt` rather than accumulated, to
//!   avoid drift from repeated summation.
//!
//! ## Invariants
//!
//! * The returned trajectory holds exactly `steps + 1` samples: the state
//!   before integration plus one per step.
//! * Parameters are already validated (handled by `validator`).
//!
//! ## Non-goals
//!
//! * This module does not validate parameters.
//! * This module does not format output.

// Internal dependencies
use crate::engine::output::Trajectory;
use crate::math::dynamics::{rk4_step, DuffingParams, State};

// ============================================================================
// Integration
// ============================================================================

/// Advance `state` by `steps` RK4 steps starting at time `*t`, recording
/// the initial state and the state after each step.
///
/// On return, `*t` has advanced by `steps * params.timestep` and `state`
/// holds the final sample.
pub fn integrate(
    params: &DuffingParams,
    state: &mut State,
    t: &mut f64,
    steps: usize,
) -> Trajectory {
    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.push(*t, *state);

    let t0 = *t;
    for i in 0..steps {
        let ti = t0 + i as f64 * params.timestep;
        *state = rk4_step(params, ti, *state);
        trajectory.push(t0 + (i + 1) as f64 * params.timestep, *state);
    }

    *t = t0 + steps as f64 * params.timestep;
    trajectory
}
