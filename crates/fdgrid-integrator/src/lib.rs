//! Explicit time integration of 2D fields on top of `fdgrid-stencil`.
//!
//! An [`Integrator`] owns a [`Field2D`](fdgrid_core::Field2D), a
//! [`StencilConfig`] choosing the derivative stencils and a [`Model`]
//! giving `∂φ/∂t`. Each [`step`](Integrator::step) updates the interior
//! cells with forward Euler or Heun and commits only if every new value is
//! finite.
//!
//! Logging goes through the [`log`] facade: one `debug` record per
//! committed step, `warn` for rejected timesteps and rolled-back steps.
//! No logger is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod integrator;
pub mod metrics;
pub mod model;

pub use config::{Central, DynamicStencil, Staggered, StencilConfig};
pub use error::StepError;
pub use integrator::{Integrator, TimeScheme};
pub use metrics::StepMetrics;
pub use model::{Advection, AdvectionBuilder, Diffusion, DiffusionBuilder, Model};
