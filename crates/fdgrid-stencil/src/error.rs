//! Errors from the runtime stencil registry.

use crate::kind::{AccuracyOrder, DerivativeKind, StaggerMode};
use std::error::Error;
use std::fmt;

/// Errors from resolving a stencil at runtime.
///
/// The compile-time API cannot produce these: an unsupported combination
/// there is a missing trait impl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StencilError {
    /// The accuracy order is zero or odd.
    InvalidOrder {
        /// The rejected order.
        order: AccuracyOrder,
    },
    /// The combination is well formed but has no coefficients.
    Unsupported {
        /// Requested derivative kind.
        kind: DerivativeKind,
        /// Requested accuracy order.
        order: AccuracyOrder,
        /// Requested stagger.
        stagger: StaggerMode,
    },
}

impl fmt::Display for StencilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder { order } => {
                write!(f, "accuracy order {order} is not a positive even integer")
            }
            Self::Unsupported {
                kind,
                order,
                stagger,
            } => write!(
                f,
                "no {kind}-derivative stencil of order {order} with {stagger} stagger"
            ),
        }
    }
}

impl Error for StencilError {}
