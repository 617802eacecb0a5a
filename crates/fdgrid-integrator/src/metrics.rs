//! Per-step metrics for the integrator.
//!
//! [`StepMetrics`] is produced by every successful
//! [`Integrator::step`](crate::Integrator::step) and kept as
//! [`Integrator::last_metrics`](crate::Integrator::last_metrics).

/// Timing and magnitude data collected during a single step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Index of this step, counting from 1.
    pub step: u64,
    /// Timestep used.
    pub dt: f64,
    /// Number of interior cells written.
    pub cells_updated: usize,
    /// Largest `|∂φ/∂t|` applied to any cell. For Heun this is the averaged
    /// rate.
    pub max_abs_rate: f64,
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
}
