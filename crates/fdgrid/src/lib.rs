//! fdgrid: finite-difference stencils on 2D structured grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fdgrid sub-crates. For most users, adding `fdgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fdgrid::prelude::*;
//!
//! // Derivatives at a point.
//! let f = Field2D::from_fn(9, 9, |r, c| (c * c) as f64 + 2.0 * r as f64);
//! assert!((second_x::<4, _>(&f, 4, 4) - 2.0).abs() < 1e-12);
//! assert!((first_y::<8, _>(&f, 4, 4) - 2.0).abs() < 1e-12);
//!
//! // Time stepping.
//! let model = Diffusion::builder().coefficient(0.1).build().unwrap();
//! let mut sim = Integrator::new(Field2D::random(32, 32, 42), Central::<4>, model);
//! let metrics = sim.step(0.5).unwrap();
//! assert_eq!(metrics.cells_updated, 28 * 28);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`field`] | `fdgrid-core` | `Scalar`, `Field2D`, the `Grid2D` read trait |
//! | [`stencil`] | `fdgrid-stencil` | Coefficient tables, stencil descriptors, application, derivative operators |
//! | [`integrator`] | `fdgrid-integrator` | Stencil configurations, models, time stepping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Field storage and grid access (`fdgrid-core`).
pub use fdgrid_core as field;

/// Finite-difference stencils (`fdgrid-stencil`).
///
/// Compile-time selection goes through [`stencil::Stencil`] and the
/// operators in [`stencil::derivative`]; runtime selection through
/// [`stencil::StencilDescriptor::lookup`].
pub use fdgrid_stencil as stencil;

/// Explicit time stepping (`fdgrid-integrator`).
///
/// [`integrator::Integrator`] owns a field, a
/// [`integrator::StencilConfig`] and a [`integrator::Model`].
pub use fdgrid_integrator as integrator;

/// Common imports for typical fdgrid usage.
///
/// ```rust
/// use fdgrid::prelude::*;
/// ```
pub mod prelude {
    // Fields
    pub use fdgrid_core::{Field2D, FieldError, Grid2D, Scalar};

    // Stencils
    pub use fdgrid_stencil::derivative::{
        first, first_x, first_x_staggered, first_y, first_y_staggered, second, second_x,
        second_x_staggered, second_y, second_y_staggered,
    };
    pub use fdgrid_stencil::{
        Axis, Center, DerivativeKind, First, Left, Right, Second, StaggerMode, Stencil,
        StencilDescriptor, StencilError,
    };

    // Integrator
    pub use fdgrid_integrator::{
        Advection, Central, Diffusion, DynamicStencil, Integrator, Model, Staggered,
        StencilConfig, StepError, StepMetrics, TimeScheme,
    };
}
