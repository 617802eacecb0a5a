//! Errors from advancing the integrator.

use std::error::Error;
use std::fmt;

/// Errors from [`Integrator::step`](crate::Integrator::step).
///
/// A step that returns any of these has not modified the field.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// `dt` is zero, negative or not finite.
    InvalidTimestep {
        /// The rejected timestep.
        dt: f64,
    },
    /// `dt` exceeds the model's stability bound.
    DtOutOfRange {
        /// The rejected timestep.
        dt: f64,
        /// The model's `max_dt`.
        max: f64,
    },
    /// The field has no interior cell for the configured stencils.
    FieldTooSmall {
        /// Field rows.
        rows: usize,
        /// Field columns.
        cols: usize,
        /// Smallest extent that has one interior cell on each axis.
        min_extent: usize,
    },
    /// The step produced NaN or infinity; it was rolled back.
    NonFinite {
        /// Row of the first non-finite cell.
        row: usize,
        /// Column of the first non-finite cell.
        col: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestep { dt } => {
                write!(f, "timestep must be finite and > 0, got {dt}")
            }
            Self::DtOutOfRange { dt, max } => {
                write!(f, "dt {dt} exceeds model max_dt {max}")
            }
            Self::FieldTooSmall {
                rows,
                cols,
                min_extent,
            } => write!(
                f,
                "{rows}x{cols} field has no interior; each axis needs at least {min_extent} cells"
            ),
            Self::NonFinite { row, col } => {
                write!(f, "non-finite value at ({row}, {col}); step rolled back")
            }
        }
    }
}

impl Error for StepError {}
