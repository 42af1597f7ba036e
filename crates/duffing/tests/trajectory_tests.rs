//! Tests for Duffing integration accuracy and dynamics.
//!
//! These tests verify the physics of the integrator:
//! - RK4 accuracy against the simple-harmonic analytic limit
//! - Energy decay under damping without forcing
//! - Determinism and continuation equivalence
//!
//! ## Test Organization
//!
//! 1. **Analytic Reference** - Harmonic limit of the Duffing equation
//! 2. **Dissipation** - Energy decay
//! 3. **Reproducibility** - Determinism, continuation

use approx::assert_relative_eq;

use duffing::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Total mechanical energy for the unforced oscillator:
/// v^2/2 + alpha*x^2/2 + beta*x^4/4.
fn energy(alpha: f64, beta: f64, x: f64, v: f64) -> f64 {
    0.5 * v * v + 0.5 * alpha * x * x + 0.25 * beta * x.powi(4)
}

// ============================================================================
// Analytic Reference Tests
// ============================================================================

/// Test the harmonic limit against x(t) = x0 * cos(t).
///
/// With beta = gamma = delta = 0 and alpha = 1, the Duffing equation is
/// simple harmonic motion. RK4 at dt = 0.01 should match the closed form
/// far below 1e-6 after one time unit.
#[test]
fn test_harmonic_limit_matches_cosine() {
    let mut osc = Duffing::new()
        .stiffness(1.0)
        .nonlinearity(0.0)
        .damping(0.0)
        .forcing(0.0)
        .timestep(0.01)
        .initial(1.0, 0.0)
        .build()
        .unwrap();

    let trajectory = osc.iterate(100);
    let last = trajectory.len() - 1;

    assert_relative_eq!(trajectory.position[last], 1.0_f64.cos(), epsilon = 1e-6);
    assert_relative_eq!(trajectory.velocity[last], -(1.0_f64.sin()), epsilon = 1e-6);
}

/// Test that the harmonic limit conserves energy over many periods.
#[test]
fn test_harmonic_limit_conserves_energy() {
    let mut osc = Duffing::new()
        .stiffness(1.0)
        .nonlinearity(0.0)
        .damping(0.0)
        .forcing(0.0)
        .timestep(0.01)
        .initial(1.0, 0.0)
        .build()
        .unwrap();

    let trajectory = osc.iterate(10_000);
    let last = trajectory.len() - 1;

    let e0 = energy(1.0, 0.0, trajectory.position[0], trajectory.velocity[0]);
    let e1 = energy(1.0, 0.0, trajectory.position[last], trajectory.velocity[last]);

    assert_relative_eq!(e0, e1, max_relative = 1e-5);
}

// ============================================================================
// Dissipation Tests
// ============================================================================

/// Test that damping without forcing dissipates energy.
#[test]
fn test_damped_unforced_energy_decays() {
    let mut osc = Duffing::new()
        .stiffness(1.0)
        .nonlinearity(0.5)
        .damping(0.3)
        .forcing(0.0)
        .timestep(0.01)
        .initial(1.0, 0.0)
        .build()
        .unwrap();

    let trajectory = osc.iterate(5_000);
    let last = trajectory.len() - 1;

    let e0 = energy(1.0, 0.5, trajectory.position[0], trajectory.velocity[0]);
    let e1 = energy(1.0, 0.5, trajectory.position[last], trajectory.velocity[last]);

    assert!(e1 < e0 * 0.01, "energy should decay: e0 = {e0}, e1 = {e1}");
}

// ============================================================================
// Reproducibility Tests
// ============================================================================

/// Test that identical configurations produce identical trajectories.
#[test]
fn test_integration_is_deterministic() {
    let mut a = Duffing::new().build().unwrap();
    let mut b = Duffing::new().build().unwrap();

    assert_eq!(a.iterate(1_000), b.iterate(1_000));
}

/// Test that two consecutive iterate calls continue the same orbit.
///
/// iterate(a) followed by iterate(b) must visit the same states as a
/// single iterate(a + b), up to floating-point clock reconstruction. Uses
/// a damped, regular regime so rounding differences cannot amplify.
#[test]
fn test_continuation_matches_single_run() {
    let build = || {
        Duffing::new()
            .stiffness(1.0)
            .nonlinearity(0.1)
            .damping(0.3)
            .forcing(0.3)
            .build()
            .unwrap()
    };
    let mut split = build();
    let mut whole = build();

    split.iterate(500);
    let tail = split.iterate(500);
    let full = whole.iterate(1_000);

    let last = full.len() - 1;
    assert_relative_eq!(
        tail.position[tail.len() - 1],
        full.position[last],
        epsilon = 1e-9
    );
    assert_relative_eq!(
        tail.velocity[tail.len() - 1],
        full.velocity[last],
        epsilon = 1e-9
    );
    assert_relative_eq!(tail.time[tail.len() - 1], full.time[last], epsilon = 1e-12);
}
