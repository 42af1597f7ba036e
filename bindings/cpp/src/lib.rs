//! C/C++ bindings for the timesTwo kernels and the Duffing oscillator.
//!
//! Preserves the classic C calling convention: the caller allocates and
//! owns every buffer, functions return `0` on success and a negative status
//! code on a detected contract violation, and nothing is written once a
//! violation is found.

#![allow(non_snake_case)]
#![allow(unsafe_op_in_unsafe_fn)]

use std::os::raw::{c_double, c_int, c_ulong};
use std::slice;

use ::duffing::prelude::Duffing as DuffingBuilder;
use ::timestwo::prelude::{double, times_two_unchecked};

// ============================================================================
// Status Codes
// ============================================================================

/// Success.
pub const TIMESTWO_OK: c_int = 0;
/// A negative length was passed.
pub const TIMESTWO_ERR_INVALID_LENGTH: c_int = -1;
/// A null buffer was passed with a nonzero length.
pub const TIMESTWO_ERR_NULL_POINTER: c_int = -2;
/// A model parameter was rejected by validation.
pub const TIMESTWO_ERR_INVALID_PARAMETER: c_int = -3;

// ============================================================================
// Array Kernel
// ============================================================================

/// Double `length` elements of `input` into `output`.
///
/// The classic interop signature: both buffers are caller-allocated with
/// at least `length` elements each. The buffers may alias. Returns
/// `TIMESTWO_OK`, or a negative status code without writing anything if
/// `length` is negative or a buffer is null.
///
/// # Safety
///
/// `input` and `output` must each point to at least `length` elements
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn timesTwo(
    length: c_int,
    input: *const c_double,
    output: *mut c_double,
) -> c_int {
    if length < 0 {
        return TIMESTWO_ERR_INVALID_LENGTH;
    }
    if length == 0 {
        return TIMESTWO_OK;
    }
    if input.is_null() || output.is_null() {
        return TIMESTWO_ERR_NULL_POINTER;
    }

    times_two_unchecked(length as usize, input, output);
    TIMESTWO_OK
}

/// Double a single value.
#[no_mangle]
pub extern "C" fn timesTwoValue(x: c_double) -> c_double {
    double(x)
}

// ============================================================================
// Duffing Oscillator
// ============================================================================

/// Model parameters and initial conditions for `duffingSimulate`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DuffingParams {
    /// Linear stiffness alpha.
    pub stiffness: c_double,
    /// Cubic nonlinearity beta.
    pub nonlinearity: c_double,
    /// Viscous damping delta.
    pub damping: c_double,
    /// Forcing amplitude gamma.
    pub forcing: c_double,
    /// Forcing angular frequency omega.
    pub frequency: c_double,
    /// Integration timestep dt.
    pub timestep: c_double,
    /// Initial position x(0).
    pub position: c_double,
    /// Initial velocity x'(0).
    pub velocity: c_double,
}

/// Integrate a Duffing oscillator for `steps` RK4 steps.
///
/// Writes `steps + 1` samples (the initial state plus one per step) into
/// the caller-allocated `time`, `position`, and `velocity` buffers, which
/// must each hold at least `steps + 1` elements. Returns `TIMESTWO_OK`,
/// `TIMESTWO_ERR_NULL_POINTER` for a null buffer, or
/// `TIMESTWO_ERR_INVALID_PARAMETER` if validation rejects the parameters;
/// nothing is written on error.
///
/// # Safety
///
/// `time`, `position`, and `velocity` must each point to at least
/// `steps + 1` elements valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn duffingSimulate(
    params: DuffingParams,
    steps: c_ulong,
    time: *mut c_double,
    position: *mut c_double,
    velocity: *mut c_double,
) -> c_int {
    if time.is_null() || position.is_null() || velocity.is_null() {
        return TIMESTWO_ERR_NULL_POINTER;
    }

    let built = DuffingBuilder::new()
        .stiffness(params.stiffness)
        .nonlinearity(params.nonlinearity)
        .damping(params.damping)
        .forcing(params.forcing)
        .frequency(params.frequency)
        .timestep(params.timestep)
        .initial(params.position, params.velocity)
        .build();
    let mut oscillator = match built {
        Ok(osc) => osc,
        Err(_) => return TIMESTWO_ERR_INVALID_PARAMETER,
    };

    let steps = steps as usize;
    let trajectory = oscillator.iterate(steps);

    let samples = steps + 1;
    slice::from_raw_parts_mut(time, samples).copy_from_slice(&trajectory.time);
    slice::from_raw_parts_mut(position, samples).copy_from_slice(&trajectory.position);
    slice::from_raw_parts_mut(velocity, samples).copy_from_slice(&trajectory.velocity);

    TIMESTWO_OK
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    /// A mixed-sign doubling scenario through the C entry point.
    #[test]
    fn times_two_matches_c_contract() {
        let input = [1.0, -2.5, 0.0, 100.0];
        let mut output = [0.0; 4];

        let status = unsafe { timesTwo(4, input.as_ptr(), output.as_mut_ptr()) };

        assert_eq!(status, TIMESTWO_OK);
        assert_eq!(output, [2.0, -5.0, 0.0, 200.0]);
    }

    #[test]
    fn times_two_rejects_negative_length() {
        let status = unsafe { timesTwo(-1, ptr::null(), ptr::null_mut()) };
        assert_eq!(status, TIMESTWO_ERR_INVALID_LENGTH);
    }

    #[test]
    fn times_two_rejects_null_buffers() {
        let input = [1.0];
        let status = unsafe { timesTwo(1, input.as_ptr(), ptr::null_mut()) };
        assert_eq!(status, TIMESTWO_ERR_NULL_POINTER);
    }

    #[test]
    fn times_two_zero_length_is_success() {
        let status = unsafe { timesTwo(0, ptr::null(), ptr::null_mut()) };
        assert_eq!(status, TIMESTWO_OK);
    }

    #[test]
    fn duffing_simulate_fills_caller_buffers() {
        let params = DuffingParams {
            stiffness: 1.0,
            nonlinearity: 0.0,
            damping: 0.0,
            forcing: 0.0,
            frequency: 1.0,
            timestep: 0.01,
            position: 1.0,
            velocity: 0.0,
        };
        let mut time = [0.0; 11];
        let mut position = [0.0; 11];
        let mut velocity = [0.0; 11];

        let status = unsafe {
            duffingSimulate(
                params,
                10,
                time.as_mut_ptr(),
                position.as_mut_ptr(),
                velocity.as_mut_ptr(),
            )
        };

        assert_eq!(status, TIMESTWO_OK);
        assert_eq!(position[0], 1.0);
        assert!(time[10] > time[0]);
        assert!(position[10] < 1.0, "harmonic motion should have moved");
    }

    #[test]
    fn duffing_simulate_rejects_bad_timestep() {
        let params = DuffingParams {
            stiffness: -1.0,
            nonlinearity: 1.0,
            damping: 0.2,
            forcing: 0.3,
            frequency: 1.2,
            timestep: 0.0,
            position: 0.5,
            velocity: 0.0,
        };
        let mut buf = [0.0; 1];

        let status = unsafe {
            duffingSimulate(
                params,
                0,
                buf.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.as_mut_ptr(),
            )
        };

        assert_eq!(status, TIMESTWO_ERR_INVALID_PARAMETER);
    }
}
