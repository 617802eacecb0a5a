//! Finite-difference stencils for 2D structured grids.
//!
//! Derivative kind, accuracy order and grid stagger are compile-time
//! parameters. Unsupported combinations have no trait impl and therefore do
//! not compile; there is no runtime path that can produce an empty or
//! zero-filled stencil. [`StencilDescriptor::lookup`] covers callers that
//! choose a stencil at runtime and returns an error instead.
//!
//! # Layers
//!
//! 1. [`coefficients`]: the weight table, keyed by `(ORDER, Stagger)`.
//! 2. [`antisymmetric`]: expands the independent half of a first-derivative
//!    stencil into its full antisymmetric form.
//! 3. [`stencil`]: binds weights to a footprint (`size`, `start`) and keeps a
//!    runtime registry of every supported combination.
//! 4. [`mod@apply`]: weighted sums over a local window or along one axis of
//!    a 2D field.
//! 5. [`derivative`]: named entry points (`first_x`, `second_y`, ...)
//!    defaulting to centred stencils.
//!
//! # Example
//!
//! ```
//! use fdgrid_core::Field2D;
//! use fdgrid_stencil::derivative::{first_x, second_y};
//!
//! // f(x, y) = 3x + y^2, sampled with unit spacing: x = col, y = row.
//! let f = Field2D::from_fn(9, 9, |r, c| 3.0 * c as f64 + (r * r) as f64);
//! assert!((first_x::<4, _>(&f, 4, 4) - 3.0).abs() < 1e-12);
//! assert!((second_y::<2, _>(&f, 4, 4) - 2.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod antisymmetric;
pub mod apply;
pub mod coefficients;
pub mod derivative;
pub mod error;
pub mod kind;
pub mod stencil;

pub use apply::{apply, apply_x, apply_y, CentralWindow, Window};
pub use coefficients::{Coefficients, Table};
pub use error::StencilError;
pub use kind::{
    AccuracyOrder, Axis, Center, Derivative, DerivativeKind, First, Left, Right, Second, Stagger,
    StaggerMode,
};
pub use stencil::{Stencil, StencilDescriptor, REGISTRY};
