//! The integrator: a field, a stencil configuration and a model, advanced
//! in time by an explicit scheme.
//!
//! Each [`Integrator::step`] runs three phases:
//!
//! 1. **Validate**: `dt` must be finite, positive and within the model's
//!    `max_dt` for the configured stencil; the field must have at least one
//!    interior cell.
//! 2. **Evaluate**: the scheme is evaluated over interior cells into a
//!    staging buffer. Cells within the stencil reach of an edge keep their
//!    values; boundary handling is the caller's business.
//! 3. **Commit or roll back**: if any staged interior value is NaN or
//!    infinite, the step is discarded and the field is left as it was.
//!    Otherwise the staging buffer becomes the field.

use crate::config::StencilConfig;
use crate::error::StepError;
use crate::metrics::StepMetrics;
use crate::model::Model;
use fdgrid_core::{Field2D, Scalar};
use std::ops::Range;
use std::time::Instant;

/// Explicit time-stepping scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeScheme {
    /// `φ' = φ + dt·f(φ)`. First order.
    #[default]
    ForwardEuler,
    /// Predictor/corrector: `φ* = φ + dt·f(φ)`, then
    /// `φ' = φ + dt/2·(f(φ) + f(φ*))`. Second order.
    Heun,
}

/// Owns a field together with the stencils and model that advance it.
///
/// Ownership moves like any Rust value. `std::mem::take` leaves a default
/// integrator behind (empty field, default stencil and model), which is the
/// closest analogue of a moved-from object.
///
/// ```
/// use fdgrid_core::Field2D;
/// use fdgrid_integrator::{Central, Diffusion, Integrator, TimeScheme};
///
/// let model = Diffusion::builder().coefficient(0.1).build().unwrap();
/// let mut sim = Integrator::new(Field2D::random(32, 32, 1), Central::<4>, model)
///     .with_scheme(TimeScheme::Heun);
/// sim.run(10, 0.5).unwrap();
/// assert_eq!(sim.steps_taken(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Integrator<C, M> {
    field: Field2D,
    stencil: C,
    model: M,
    scheme: TimeScheme,
    steps_taken: u64,
    elapsed: f64,
    last_metrics: Option<StepMetrics>,
    staging: Field2D,
}

impl<C, M> Integrator<C, M> {
    /// Take ownership of the initial field, stencils and model.
    pub fn new(field: Field2D, stencil: C, model: M) -> Self {
        Self {
            field,
            stencil,
            model,
            scheme: TimeScheme::default(),
            steps_taken: 0,
            elapsed: 0.0,
            last_metrics: None,
            staging: Field2D::default(),
        }
    }

    /// Use `scheme` for subsequent steps.
    pub fn with_scheme(mut self, scheme: TimeScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// The current field.
    pub fn field(&self) -> &Field2D {
        &self.field
    }

    /// Mutable access to the field, e.g. to impose boundary values between
    /// steps.
    pub fn field_mut(&mut self) -> &mut Field2D {
        &mut self.field
    }

    /// The stencil configuration.
    pub fn stencil(&self) -> &C {
        &self.stencil
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The time-stepping scheme.
    pub fn scheme(&self) -> TimeScheme {
        self.scheme
    }

    /// Number of committed steps.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Sum of `dt` over committed steps.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Metrics of the most recent committed step.
    pub fn last_metrics(&self) -> Option<&StepMetrics> {
        self.last_metrics.as_ref()
    }

    /// Give back the field, stencils and model.
    pub fn into_parts(self) -> (Field2D, C, M) {
        (self.field, self.stencil, self.model)
    }
}

impl<C: StencilConfig, M: Model> Integrator<C, M> {
    /// Row and column ranges of the interior cells.
    ///
    /// # Errors
    ///
    /// [`StepError::FieldTooSmall`] when either axis is shorter than the
    /// stencil reach plus one.
    pub fn interior(&self) -> Result<(Range<usize>, Range<usize>), StepError> {
        let (below, above) = self.stencil.reach();
        let min_extent = below + above + 1;
        let (rows, cols) = self.field.shape();
        if rows < min_extent || cols < min_extent {
            return Err(StepError::FieldTooSmall {
                rows,
                cols,
                min_extent,
            });
        }
        Ok((below..rows - above, below..cols - above))
    }

    /// Advance the field by one step of size `dt`.
    ///
    /// # Errors
    ///
    /// See [`StepError`]. On error the field, step count and elapsed time
    /// are unchanged.
    pub fn step(&mut self, dt: f64) -> Result<StepMetrics, StepError> {
        let start = Instant::now();

        self.check_dt(dt)?;
        let (rows, cols) = self.interior()?;

        if self.staging.shape() == self.field.shape() {
            self.staging
                .as_mut_slice()
                .copy_from_slice(self.field.as_slice());
        } else {
            self.staging = self.field.clone();
        }

        let max_abs_rate = match self.scheme {
            TimeScheme::ForwardEuler => forward_euler(
                &self.field,
                &self.stencil,
                &self.model,
                &mut self.staging,
                dt,
                rows.clone(),
                cols.clone(),
            ),
            TimeScheme::Heun => heun(
                &self.field,
                &self.stencil,
                &self.model,
                &mut self.staging,
                dt,
                rows.clone(),
                cols.clone(),
            ),
        };

        if let Some((row, col)) = first_non_finite(&self.staging, rows.clone(), cols.clone()) {
            log::warn!(
                "{}: step {} produced a non-finite value at ({row}, {col}); rolled back",
                self.model.name(),
                self.steps_taken + 1,
            );
            return Err(StepError::NonFinite { row, col });
        }

        std::mem::swap(&mut self.field, &mut self.staging);
        self.steps_taken += 1;
        self.elapsed += dt;

        let metrics = StepMetrics {
            step: self.steps_taken,
            dt,
            cells_updated: rows.len() * cols.len(),
            max_abs_rate,
            total_us: start.elapsed().as_micros() as u64,
        };
        log::debug!(
            "{}: step {} dt={dt} cells={} max|rate|={:.3e} {}us",
            self.model.name(),
            metrics.step,
            metrics.cells_updated,
            metrics.max_abs_rate,
            metrics.total_us,
        );
        self.last_metrics = Some(metrics.clone());
        Ok(metrics)
    }

    /// Take `steps` steps of size `dt`, stopping at the first error.
    ///
    /// # Errors
    ///
    /// The first [`StepError`]; steps committed before it are kept.
    pub fn run(&mut self, steps: u64, dt: f64) -> Result<(), StepError> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }

    fn check_dt(&self, dt: f64) -> Result<(), StepError> {
        if !(dt > 0.0) || !dt.is_finite() {
            log::warn!("{}: rejected timestep {dt}", self.model.name());
            return Err(StepError::InvalidTimestep { dt });
        }
        if let Some(max) = self.model.max_dt(&self.stencil) {
            if dt > max {
                log::warn!(
                    "{}: timestep {dt} exceeds max_dt {max}",
                    self.model.name()
                );
                return Err(StepError::DtOutOfRange { dt, max });
            }
        }
        Ok(())
    }
}

fn forward_euler<C: StencilConfig, M: Model>(
    field: &Field2D,
    stencil: &C,
    model: &M,
    out: &mut Field2D,
    dt: f64,
    rows: Range<usize>,
    cols: Range<usize>,
) -> Scalar {
    let mut max_abs_rate: Scalar = 0.0;
    for i in rows {
        for j in cols.clone() {
            let rate = model.rate(field, stencil, i, j);
            max_abs_rate = max_abs_rate.max(rate.abs());
            out[i][j] = field[i][j] + dt * rate;
        }
    }
    max_abs_rate
}

fn heun<C: StencilConfig, M: Model>(
    field: &Field2D,
    stencil: &C,
    model: &M,
    out: &mut Field2D,
    dt: f64,
    rows: Range<usize>,
    cols: Range<usize>,
) -> Scalar {
    // Predictor: an Euler step into a copy, so cells outside the interior
    // read their unchanged values.
    let mut predictor = field.clone();
    let mut k1 = Vec::with_capacity(rows.len() * cols.len());
    for i in rows.clone() {
        for j in cols.clone() {
            let rate = model.rate(field, stencil, i, j);
            k1.push(rate);
            predictor[i][j] = field[i][j] + dt * rate;
        }
    }

    let mut max_abs_rate: Scalar = 0.0;
    let mut k = 0;
    for i in rows {
        for j in cols.clone() {
            let rate = 0.5 * (k1[k] + model.rate(&predictor, stencil, i, j));
            k += 1;
            max_abs_rate = max_abs_rate.max(rate.abs());
            out[i][j] = field[i][j] + dt * rate;
        }
    }
    max_abs_rate
}

fn first_non_finite(
    field: &Field2D,
    rows: Range<usize>,
    cols: Range<usize>,
) -> Option<(usize, usize)> {
    for i in rows {
        if let Some(j) = cols.clone().find(|&j| !field[i][j].is_finite()) {
            return Some((i, j));
        }
    }
    None
}
