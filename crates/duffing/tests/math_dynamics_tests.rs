#![cfg(feature = "dev")]
//! Tests for the equations of motion and the RK4 step.
//!
//! These tests exercise the math layer directly through the `dev`
//! internals:
//! - Vector field evaluation at known points
//! - Single-step RK4 accuracy against a Taylor expansion
//!
//! ## Test Organization
//!
//! 1. **Vector Field** - Acceleration at characteristic states
//! 2. **Stepping** - One-step accuracy

use approx::assert_relative_eq;

use duffing::internals::math::dynamics::{acceleration, rk4_step, DuffingParams, State};

// ============================================================================
// Helper Functions
// ============================================================================

fn harmonic_params(dt: f64) -> DuffingParams {
    DuffingParams {
        stiffness: 1.0,
        nonlinearity: 0.0,
        damping: 0.0,
        forcing: 0.0,
        frequency: 1.0,
        timestep: dt,
    }
}

// ============================================================================
// Vector Field Tests
// ============================================================================

/// Test acceleration at the rest state of the unforced harmonic limit.
#[test]
fn test_acceleration_at_rest() {
    let params = harmonic_params(0.01);
    let rest = State { position: 0.0, velocity: 0.0 };

    assert_eq!(acceleration(&params, 0.0, rest), 0.0);
}

/// Test that each term of the vector field enters with its sign.
#[test]
fn test_acceleration_term_signs() {
    let params = DuffingParams {
        stiffness: 2.0,
        nonlinearity: 3.0,
        damping: 0.5,
        forcing: 1.0,
        frequency: 0.0,
        timestep: 0.01,
    };
    let state = State { position: 1.0, velocity: 2.0 };

    // gamma*cos(0) - delta*v - alpha*x - beta*x^3 = 1 - 1 - 2 - 3
    assert_relative_eq!(acceleration(&params, 0.0, state), -5.0);
}

// ============================================================================
// Stepping Tests
// ============================================================================

/// Test one RK4 step against the harmonic closed form.
///
/// For x'' = -x with x(0) = 1, x'(0) = 0, a single step of size dt should
/// match cos(dt) to O(dt^5).
#[test]
fn test_rk4_single_step_accuracy() {
    let dt = 0.1;
    let params = harmonic_params(dt);
    let start = State { position: 1.0, velocity: 0.0 };

    let next = rk4_step(&params, 0.0, start);

    assert_relative_eq!(next.position, dt.cos(), epsilon = 1e-7);
    assert_relative_eq!(next.velocity, -dt.sin(), epsilon = 1e-7);
}

/// Test that halving the timestep shrinks the one-unit error ~16x.
///
/// Global RK4 error is O(dt^4), so integrating to t = 1 with dt and dt/2
/// should show roughly a fourth-order error ratio.
#[test]
fn test_rk4_fourth_order_convergence() {
    let run = |dt: f64| {
        let params = harmonic_params(dt);
        let steps = (1.0 / dt).round() as usize;
        let mut state = State { position: 1.0, velocity: 0.0 };
        for i in 0..steps {
            state = rk4_step(&params, i as f64 * dt, state);
        }
        (state.position - 1.0_f64.cos()).abs()
    };

    let coarse = run(0.1);
    let fine = run(0.05);
    let ratio = coarse / fine;

    assert!(
        (8.0..32.0).contains(&ratio),
        "expected ~16x error reduction, got {ratio}"
    );
}
