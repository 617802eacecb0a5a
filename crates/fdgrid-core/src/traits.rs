//! Read access to two-dimensional grids.

use crate::Scalar;
use std::ops::Index;

/// Read-only `(row, col)` access to a 2D grid of scalars.
///
/// This is the only thing stencil application needs from a field. It is
/// blanket-implemented for every container that supports double indexing
/// `data[row][col]`, so `Vec<Vec<f64>>`, `[[f64; C]; R]`, `[Vec<f64>]` and
/// [`Field2D`](crate::Field2D) all qualify without adapters.
///
/// Implementations are not required to check bounds beyond what the
/// underlying container does; an out-of-range read is expected to panic.
pub trait Grid2D {
    /// Value at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> Scalar;
}

impl<T> Grid2D for T
where
    T: Index<usize> + ?Sized,
    T::Output: Index<usize, Output = Scalar>,
{
    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> Scalar {
        self[row][col]
    }
}
