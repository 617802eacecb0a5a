//! Named derivative operators.
//!
//! The plain names (`first_x`, `second_y`, ...) use centred stencils; the
//! `_staggered` variants take the stagger as a type parameter. All of them
//! assume unit grid spacing: divide by `h` (first) or `h²` (second) to get
//! physical units.
//!
//! The field type is inferred, so call sites spell it `_`:
//!
//! ```
//! use fdgrid_stencil::derivative::{first_x_staggered, second_x};
//! use fdgrid_stencil::Right;
//!
//! let row = [[0.0, 1.0, 4.0, 9.0, 16.0, 25.0, 36.0]];
//! assert_eq!(second_x::<2, _>(&row, 0, 3), 2.0);
//! assert_eq!(first_x_staggered::<2, Right, _>(&row, 0, 3), 7.0);
//! ```

use crate::apply::{apply, CentralWindow, Window};
use crate::coefficients::{Coefficients, Table};
use crate::kind::{Center, First, Second, Stagger};
use crate::stencil::Stencil;
use fdgrid_core::{Grid2D, Scalar};

/// Centred first derivative of a 1D window of `N` samples.
#[inline]
pub fn first<const N: usize>(data: &[Scalar; N]) -> Scalar
where
    Window<N>: CentralWindow,
{
    apply::<First, N>(data)
}

/// Centred second derivative of a 1D window of `N` samples.
#[inline]
pub fn second<const N: usize>(data: &[Scalar; N]) -> Scalar
where
    Window<N>: CentralWindow,
{
    apply::<Second, N>(data)
}

macro_rules! centred {
    ($(#[$doc:meta])* $name:ident, $kind:ty, $method:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $name<const ORDER: usize, F: Grid2D + ?Sized>(data: &F, i: usize, j: usize) -> Scalar
        where
            Table<ORDER, Center>: Coefficients,
        {
            Stencil::<$kind, ORDER, Center>::$method(data, i, j)
        }
    };
}

macro_rules! staggered {
    ($(#[$doc:meta])* $name:ident, $kind:ty, $method:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $name<const ORDER: usize, S: Stagger, F: Grid2D + ?Sized>(
            data: &F,
            i: usize,
            j: usize,
        ) -> Scalar
        where
            Table<ORDER, S>: Coefficients,
        {
            Stencil::<$kind, ORDER, S>::$method(data, i, j)
        }
    };
}

centred!(
    /// `∂f/∂x` at `(i, j)`, centred, accuracy `ORDER`.
    first_x, First, apply_x
);
centred!(
    /// `∂f/∂y` at `(i, j)`, centred, accuracy `ORDER`.
    first_y, First, apply_y
);
centred!(
    /// `∂²f/∂x²` at `(i, j)`, centred, accuracy `ORDER`.
    second_x, Second, apply_x
);
centred!(
    /// `∂²f/∂y²` at `(i, j)`, centred, accuracy `ORDER`.
    second_y, Second, apply_y
);

staggered!(
    /// `∂f/∂x` at `(i, j)` with stagger `S`.
    first_x_staggered, First, apply_x
);
staggered!(
    /// `∂f/∂y` at `(i, j)` with stagger `S`.
    first_y_staggered, First, apply_y
);
staggered!(
    /// `∂²f/∂x²` at `(i, j)` with stagger `S`.
    second_x_staggered, Second, apply_x
);
staggered!(
    /// `∂²f/∂y²` at `(i, j)` with stagger `S`.
    second_y_staggered, Second, apply_y
);
