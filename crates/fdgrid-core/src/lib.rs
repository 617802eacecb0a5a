//! Core types and traits for the fdgrid finite-difference workspace.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! scalar type, the row-major [`Field2D`] container, the [`Grid2D`] read
//! trait through which stencils sample fields, and the error types shared
//! by the other crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod traits;

pub use error::FieldError;
pub use field::Field2D;
pub use traits::Grid2D;

/// Floating-point type used for field values and stencil weights.
pub type Scalar = f64;
