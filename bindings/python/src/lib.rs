//! Python bindings for the timesTwo kernels and the Duffing oscillator.

use numpy::{PyArray1, PyReadonlyArray1, PyReadwriteArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::fmt::Display;

use ::duffing::prelude::{Duffing as DuffingBuilder, DuffingOscillator, Trajectory};
use ::timestwo::prelude::{double as double_scalar, times_two};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a kernel error to a PyErr
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ============================================================================
// Array Kernels
// ============================================================================

/// Double every element of `input`, returning a new array.
#[pyfunction]
#[pyo3(name = "times_two")]
fn times_two_array<'py>(
    py: Python<'py>,
    input: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let input = input.as_slice().map_err(to_py_error)?;
    let mut output = vec![0.0; input.len()];

    times_two(input, &mut output).map_err(to_py_error)?;

    Ok(PyArray1::from_vec(py, output))
}

/// Double every element of `input` into the caller-provided `output` array.
///
/// This is the C-style interop calling convention: both buffers are owned
/// by the caller and `output` must be at least as long as `input`.
#[pyfunction]
fn times_two_into(
    input: PyReadonlyArray1<'_, f64>,
    mut output: PyReadwriteArray1<'_, f64>,
) -> PyResult<()> {
    let input = input.as_slice().map_err(to_py_error)?;
    let output = output.as_slice_mut().map_err(to_py_error)?;

    times_two(input, output).map_err(to_py_error)
}

/// Double a single value.
#[pyfunction]
fn double(x: f64) -> f64 {
    double_scalar(x)
}

// ============================================================================
// Python Classes
// ============================================================================

/// Sampled trajectory of a Duffing oscillator.
#[pyclass(name = "Trajectory")]
pub struct PyTrajectory {
    inner: Trajectory,
}

#[pymethods]
impl PyTrajectory {
    /// Sample times
    #[getter]
    fn time<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_vec(py, self.inner.time.clone())
    }

    /// Position x(t) at each sample time
    #[getter]
    fn position<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_vec(py, self.inner.position.clone())
    }

    /// Velocity x'(t) at each sample time
    #[getter]
    fn velocity<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_vec(py, self.inner.velocity.clone())
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("Trajectory(samples={})", self.inner.len())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// A forced, damped Duffing oscillator integrated with RK4.
#[pyclass(name = "Duffing")]
pub struct PyDuffing {
    inner: DuffingOscillator,
}

#[pymethods]
impl PyDuffing {
    #[new]
    #[pyo3(signature = (
        stiffness = -1.0,
        nonlinearity = 1.0,
        damping = 0.2,
        forcing = 0.3,
        frequency = 1.2,
        timestep = 0.01,
        position = 0.5,
        velocity = 0.0,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        stiffness: f64,
        nonlinearity: f64,
        damping: f64,
        forcing: f64,
        frequency: f64,
        timestep: f64,
        position: f64,
        velocity: f64,
    ) -> PyResult<Self> {
        let inner = DuffingBuilder::new()
            .stiffness(stiffness)
            .nonlinearity(nonlinearity)
            .damping(damping)
            .forcing(forcing)
            .frequency(frequency)
            .timestep(timestep)
            .initial(position, velocity)
            .build()
            .map_err(to_py_error)?;

        Ok(PyDuffing { inner })
    }

    /// Advance the oscillator by `steps` RK4 steps and return the trajectory.
    fn iterate(&mut self, steps: usize) -> PyTrajectory {
        PyTrajectory {
            inner: self.inner.iterate(steps),
        }
    }

    /// Rewind the oscillator to its initial state and t = 0.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current position
    #[getter]
    fn position(&self) -> f64 {
        self.inner.state().position
    }

    /// Current velocity
    #[getter]
    fn velocity(&self) -> f64 {
        self.inner.state().velocity
    }

    /// Current simulation time
    #[getter]
    fn time(&self) -> f64 {
        self.inner.time()
    }

    fn __repr__(&self) -> String {
        format!(
            "Duffing(t={:.4}, position={:.6}, velocity={:.6})",
            self.inner.time(),
            self.inner.state().position,
            self.inner.state().velocity
        )
    }
}

// ============================================================================
// Module Registration
// ============================================================================

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDuffing>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_function(wrap_pyfunction!(times_two_array, m)?)?;
    m.add_function(wrap_pyfunction!(times_two_into, m)?)?;
    m.add_function(wrap_pyfunction!(double, m)?)?;
    Ok(())
}
