//! Operator application: weighted sums of stencil weights against samples.
//!
//! Two input modes:
//!
//! - a local window already aligned with a centred stencil
//!   ([`apply`]); the window length selects the accuracy order;
//! - a 2D field and an evaluation point `(i, j)`, sampled along one axis
//!   ([`apply_x`] reads `data[i][j + k + start]`, [`apply_y`] reads
//!   `data[i + k + start][j]`).
//!
//! # Bounds
//!
//! This layer performs no bounds checking of its own. The caller must keep
//! the whole footprint inside the field: for `apply_x`,
//! `j + start >= 0` and `j + start + size - 1 < cols` (rows analogously
//! for `apply_y`). [`StencilDescriptor::reach`] gives the margins. A
//! violated precondition panics inside the container's indexing; it is
//! never clamped or wrapped into range.
//!
//! # Summation
//!
//! Terms are accumulated left to right starting from `0.0`, with no
//! compensation, so results are bit-reproducible against a plain loop.

use crate::coefficients::{Coefficients, Table};
use crate::kind::{Axis, Center, Derivative, Stagger};
use crate::stencil::{Stencil, StencilDescriptor};
use fdgrid_core::{Grid2D, Scalar};

#[inline(always)]
fn weighted_sum(coefficients: &[Scalar], mut sample: impl FnMut(usize) -> Scalar) -> Scalar {
    let mut result = 0.0;
    for (k, &c) in coefficients.iter().enumerate() {
        result += c * sample(k);
    }
    result
}

/// Maps a window length onto the centred stencil of matching size.
///
/// Implemented for [`Window<3>`], [`Window<5>`], [`Window<7>`] and
/// [`Window<9>`] (accuracy orders 2, 4, 6, 8). Other lengths, including
/// even ones and anything shorter than 3, have no impl:
///
/// ```compile_fail
/// use fdgrid_stencil::{apply, First};
///
/// apply::<First, 4>(&[0.0, 1.0, 2.0, 3.0]);
/// ```
pub trait CentralWindow {
    /// Accuracy order of the centred stencil with this many points.
    const ORDER: usize;

    /// Weights of that stencil for derivative `D`.
    fn coefficients<D: Derivative>() -> &'static [Scalar];
}

/// Type-level window length. Only its [`CentralWindow`] impls matter.
pub struct Window<const N: usize>;

macro_rules! central_window {
    ($($len:literal => $order:literal),* $(,)?) => {
        $(
            impl CentralWindow for Window<$len> {
                const ORDER: usize = $order;

                #[inline(always)]
                fn coefficients<D: Derivative>() -> &'static [Scalar] {
                    Stencil::<D, $order, Center>::COEFFICIENTS
                }
            }

            const _: () = assert!(<Table<$order, Center> as Coefficients>::FIRST.len() == $len);
        )*
    };
}

central_window!(3 => 2, 5 => 4, 7 => 6, 9 => 8);

/// Apply the centred `D` stencil to a window of `N` samples.
///
/// `data[k]` is the field at offset `k - N / 2` from the evaluation point,
/// with unit spacing. The accuracy order is `N - 1`.
///
/// ```
/// use fdgrid_stencil::{apply, First, Second};
///
/// // f(x) = x sampled at x - 1, x, x + 1.
/// assert_eq!(apply::<First, 3>(&[-1.0, 0.0, 1.0]), 1.0);
/// // f(x) = x^2.
/// assert_eq!(apply::<Second, 3>(&[1.0, 0.0, 1.0]), 2.0);
/// ```
#[inline]
pub fn apply<D: Derivative, const N: usize>(data: &[Scalar; N]) -> Scalar
where
    Window<N>: CentralWindow,
{
    weighted_sum(<Window<N> as CentralWindow>::coefficients::<D>(), |k| data[k])
}

/// Apply stencil `(D, ORDER, S)` along x (columns) at `(i, j)`.
///
/// # Panics
///
/// If the footprint leaves the field; see the [module docs](mod@crate::apply).
#[inline]
pub fn apply_x<D, const ORDER: usize, S, F>(data: &F, i: usize, j: usize) -> Scalar
where
    D: Derivative,
    S: Stagger,
    F: Grid2D + ?Sized,
    Table<ORDER, S>: Coefficients,
{
    Stencil::<D, ORDER, S>::apply_x(data, i, j)
}

/// Apply stencil `(D, ORDER, S)` along y (rows) at `(i, j)`.
///
/// # Panics
///
/// If the footprint leaves the field; see the [module docs](mod@crate::apply).
#[inline]
pub fn apply_y<D, const ORDER: usize, S, F>(data: &F, i: usize, j: usize) -> Scalar
where
    D: Derivative,
    S: Stagger,
    F: Grid2D + ?Sized,
    Table<ORDER, S>: Coefficients,
{
    Stencil::<D, ORDER, S>::apply_y(data, i, j)
}

impl<D: Derivative, const ORDER: usize, S: Stagger> Stencil<D, ORDER, S>
where
    Table<ORDER, S>: Coefficients,
{
    /// Sample along x at `(i, j)`: `Σ c[k] * data[i][j + k + START]`.
    #[inline(always)]
    pub fn apply_x<F: Grid2D + ?Sized>(data: &F, i: usize, j: usize) -> Scalar {
        Self::DESCRIPTOR.apply_x(data, i, j)
    }

    /// Sample along y at `(i, j)`: `Σ c[k] * data[i + k + START][j]`.
    #[inline(always)]
    pub fn apply_y<F: Grid2D + ?Sized>(data: &F, i: usize, j: usize) -> Scalar {
        Self::DESCRIPTOR.apply_y(data, i, j)
    }
}

impl StencilDescriptor {
    /// Apply to an explicit window aligned with the footprint.
    ///
    /// Returns `None` when `window.len() != self.size()`.
    pub fn apply_window(&self, window: &[Scalar]) -> Option<Scalar> {
        if window.len() != self.size() {
            return None;
        }
        Some(weighted_sum(self.coefficients(), |k| window[k]))
    }

    /// Sample along x at `(i, j)`.
    ///
    /// # Panics
    ///
    /// If `j + start` or `j + end` falls outside row `i`.
    #[inline(always)]
    pub fn apply_x<F: Grid2D + ?Sized>(&self, data: &F, i: usize, j: usize) -> Scalar {
        let start = self.start();
        weighted_sum(self.coefficients(), |k| {
            data.at(i, j.wrapping_add_signed(start + k as isize))
        })
    }

    /// Sample along y at `(i, j)`.
    ///
    /// # Panics
    ///
    /// If `i + start` or `i + end` falls outside column `j`.
    #[inline(always)]
    pub fn apply_y<F: Grid2D + ?Sized>(&self, data: &F, i: usize, j: usize) -> Scalar {
        let start = self.start();
        weighted_sum(self.coefficients(), |k| {
            data.at(i.wrapping_add_signed(start + k as isize), j)
        })
    }

    /// Sample along `axis` at `(i, j)`.
    #[inline]
    pub fn apply<F: Grid2D + ?Sized>(&self, axis: Axis, data: &F, i: usize, j: usize) -> Scalar {
        match axis {
            Axis::X => self.apply_x(data, i, j),
            Axis::Y => self.apply_y(data, i, j),
        }
    }
}
