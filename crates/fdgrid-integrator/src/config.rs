//! Stencil configuration: which first and second derivative stencils a model
//! samples with.
//!
//! [`Central`] and [`Staggered`] fix the choice at compile time and are
//! zero-sized. [`DynamicStencil`] resolves the same choice through the
//! runtime registry, for settings read from user input.

use fdgrid_core::{Field2D, Scalar};
use fdgrid_stencil::{
    Center, Coefficients, DerivativeKind, First, Second, Stagger, StaggerMode, Stencil,
    StencilDescriptor, StencilError, Table,
};
use std::fmt;
use std::marker::PhantomData;

/// A pair of first and second derivative stencils.
///
/// Only [`first`](StencilConfig::first) and
/// [`second`](StencilConfig::second) are required; the axis helpers and
/// [`reach`](StencilConfig::reach) follow from them.
pub trait StencilConfig {
    /// Stencil used for first derivatives.
    fn first(&self) -> StencilDescriptor;

    /// Stencil used for second derivatives.
    fn second(&self) -> StencilDescriptor;

    /// `∂f/∂x` at `(i, j)` with unit spacing.
    #[inline]
    fn first_x(&self, field: &Field2D, i: usize, j: usize) -> Scalar {
        self.first().apply_x(field, i, j)
    }

    /// `∂f/∂y` at `(i, j)` with unit spacing.
    #[inline]
    fn first_y(&self, field: &Field2D, i: usize, j: usize) -> Scalar {
        self.first().apply_y(field, i, j)
    }

    /// `∂²f/∂x²` at `(i, j)` with unit spacing.
    #[inline]
    fn second_x(&self, field: &Field2D, i: usize, j: usize) -> Scalar {
        self.second().apply_x(field, i, j)
    }

    /// `∂²f/∂y²` at `(i, j)` with unit spacing.
    #[inline]
    fn second_y(&self, field: &Field2D, i: usize, j: usize) -> Scalar {
        self.second().apply_y(field, i, j)
    }

    /// Largest `(below, above)` extension over both stencils.
    ///
    /// A cell is interior along an axis of length `n` when
    /// `below <= index < n - above`.
    fn reach(&self) -> (usize, usize) {
        let (b1, a1) = self.first().reach();
        let (b2, a2) = self.second().reach();
        (b1.max(b2), a1.max(a2))
    }
}

/// Centred stencils of accuracy `ORDER`.
pub struct Central<const ORDER: usize>;

impl<const ORDER: usize> StencilConfig for Central<ORDER>
where
    Table<ORDER, Center>: Coefficients,
{
    #[inline]
    fn first(&self) -> StencilDescriptor {
        Stencil::<First, ORDER, Center>::DESCRIPTOR
    }

    #[inline]
    fn second(&self) -> StencilDescriptor {
        Stencil::<Second, ORDER, Center>::DESCRIPTOR
    }
}

/// Stencils of accuracy `ORDER` placed with stagger `S`.
pub struct Staggered<const ORDER: usize, S>(PhantomData<S>);

impl<const ORDER: usize, S: Stagger> StencilConfig for Staggered<ORDER, S>
where
    Table<ORDER, S>: Coefficients,
{
    #[inline]
    fn first(&self) -> StencilDescriptor {
        Stencil::<First, ORDER, S>::DESCRIPTOR
    }

    #[inline]
    fn second(&self) -> StencilDescriptor {
        Stencil::<Second, ORDER, S>::DESCRIPTOR
    }
}

// Manual impls so the marker parameter `S` needs no bounds.
impl<const ORDER: usize> Clone for Central<ORDER> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const ORDER: usize> Copy for Central<ORDER> {}

impl<const ORDER: usize> Default for Central<ORDER> {
    fn default() -> Self {
        Self
    }
}

impl<const ORDER: usize> PartialEq for Central<ORDER> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<const ORDER: usize> Eq for Central<ORDER> {}

impl<const ORDER: usize> fmt::Debug for Central<ORDER> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Central<{ORDER}>")
    }
}

impl<const ORDER: usize, S> Clone for Staggered<ORDER, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const ORDER: usize, S> Copy for Staggered<ORDER, S> {}

impl<const ORDER: usize, S> Default for Staggered<ORDER, S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<const ORDER: usize, S> PartialEq for Staggered<ORDER, S> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<const ORDER: usize, S> Eq for Staggered<ORDER, S> {}

impl<const ORDER: usize, S: Stagger> fmt::Debug for Staggered<ORDER, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Staggered<{ORDER}, {}>", S::MODE)
    }
}

/// Stencils chosen at runtime.
///
/// ```
/// use fdgrid_integrator::{DynamicStencil, StencilConfig};
/// use fdgrid_stencil::StaggerMode;
///
/// let s = DynamicStencil::new(6u32, StaggerMode::Center).unwrap();
/// assert_eq!(s.reach(), (3, 3));
/// assert!(DynamicStencil::new(4u32, StaggerMode::Left).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicStencil {
    first: StencilDescriptor,
    second: StencilDescriptor,
}

impl DynamicStencil {
    /// Look up the first and second derivative stencils for
    /// `(order, stagger)`.
    ///
    /// # Errors
    ///
    /// Whatever [`StencilDescriptor::lookup`] reports for the combination.
    pub fn new(
        order: impl Into<fdgrid_stencil::AccuracyOrder>,
        stagger: StaggerMode,
    ) -> Result<Self, StencilError> {
        let order = order.into();
        Ok(Self {
            first: StencilDescriptor::lookup(DerivativeKind::First, order, stagger)?,
            second: StencilDescriptor::lookup(DerivativeKind::Second, order, stagger)?,
        })
    }
}

impl Default for DynamicStencil {
    /// Second-order centred stencils.
    fn default() -> Self {
        Self {
            first: Stencil::<First, 2, Center>::DESCRIPTOR,
            second: Stencil::<Second, 2, Center>::DESCRIPTOR,
        }
    }
}

impl StencilConfig for DynamicStencil {
    fn first(&self) -> StencilDescriptor {
        self.first
    }

    fn second(&self) -> StencilDescriptor {
        self.second
    }
}
