//! Trajectory output type for Duffing integration.
//!
//! ## Purpose
//!
//! This module defines the `Trajectory` struct holding the time, position,
//! and velocity samples recorded during an `iterate` call, with a
//! human-readable `Display` rendering.
//!
//! ## Design notes
//!
//! * **Columnar**: Three parallel vectors, the column layout plotting
//!   front-ends expect.
//! * **Ergonomics**: Implements `Display` for quick inspection.
//!
//! ## Invariants
//!
//! * All three vectors have the same length.
//! * Time values are strictly increasing within one trajectory.
//!
//! ## Non-goals
//!
//! * This module does not perform integration; it only stores results.
//! * This module does not provide serialization or plotting.

// External dependencies
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Trajectory
// ============================================================================

/// Sampled trajectory of a Duffing oscillator.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Sample times.
    pub time: Vec<f64>,

    /// Position x(t) at each sample time.
    pub position: Vec<f64>,

    /// Velocity x'(t) at each sample time.
    pub velocity: Vec<f64>,
}

impl Trajectory {
    /// Create an empty trajectory with capacity for `samples` entries.
    pub(crate) fn with_capacity(samples: usize) -> Self {
        Self {
            time: Vec::with_capacity(samples),
            position: Vec::with_capacity(samples),
            velocity: Vec::with_capacity(samples),
        }
    }

    /// Record one sample.
    pub(crate) fn push(&mut self, time: f64, state: crate::math::dynamics::State) {
        self.time.push(time);
        self.position.push(state.position);
        self.velocity.push(state.velocity);
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

impl Display for Trajectory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples: {}", self.len())?;
        if let (Some(first), Some(last)) = (self.time.first(), self.time.last()) {
            writeln!(f, "  Time span: {:.4} .. {:.4}", first, last)?;
        }
        writeln!(f)?;

        writeln!(f, "Trajectory:")?;
        writeln!(f, "  {:>10} {:>13} {:>13}", "Time", "Position", "Velocity")?;
        writeln!(f, "  {:-<38}", "")?;

        const MAX_ROWS: usize = 10;
        let shown = self.len().min(MAX_ROWS);
        for i in 0..shown {
            writeln!(
                f,
                "  {:>10.4} {:>13.6} {:>13.6}",
                self.time[i], self.position[i], self.velocity[i]
            )?;
        }
        if self.len() > MAX_ROWS {
            writeln!(f, "  ... ({} more rows)", self.len() - MAX_ROWS)?;
        }

        Ok(())
    }
}
