//! Stencil descriptors: weights bound to a spatial footprint.
//!
//! [`Stencil<D, ORDER, S>`] is the compile-time form. Its associated
//! consts exist only when `Table<ORDER, S>` has coefficients, so an
//! unsupported stencil is rejected while building:
//!
//! ```compile_fail
//! use fdgrid_stencil::{First, Right, Stencil};
//!
//! let _ = Stencil::<First, 4, Right>::DESCRIPTOR;
//! ```
//!
//! [`StencilDescriptor`] is the value form, a plain
//! `{kind, order, stagger, coefficients, start}` record. Every supported
//! combination is listed once in [`REGISTRY`], built from the compile-time
//! descriptors, and [`StencilDescriptor::lookup`] searches it for callers
//! that pick a stencil at runtime.

use crate::coefficients::{Coefficients, Table};
use crate::error::StencilError;
use crate::kind::{
    AccuracyOrder, Center, Derivative, DerivativeKind, First, Left, Right, Second, Stagger,
    StaggerMode,
};
use fdgrid_core::Scalar;
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Compile-time stencil for derivative `D`, accuracy `ORDER` and stagger `S`.
///
/// Zero-sized; all data lives in associated consts.
///
/// ```
/// use fdgrid_stencil::{Center, First, Right, Second, Stencil};
///
/// assert_eq!(Stencil::<First, 6, Center>::SIZE, 7);
/// assert_eq!(Stencil::<First, 6, Center>::START, -3);
/// assert_eq!(Stencil::<Second, 2, Right>::START, -1);
/// ```
pub struct Stencil<D, const ORDER: usize, S>(PhantomData<(D, S)>);

impl<D: Derivative, const ORDER: usize, S: Stagger> Stencil<D, ORDER, S>
where
    Table<ORDER, S>: Coefficients,
{
    /// Weights, lowest offset first.
    pub const COEFFICIENTS: &'static [Scalar] = match D::KIND {
        DerivativeKind::First => <Table<ORDER, S> as Coefficients>::FIRST,
        DerivativeKind::Second => <Table<ORDER, S> as Coefficients>::SECOND,
    };

    /// Number of points in the footprint.
    pub const SIZE: usize = Self::COEFFICIENTS.len();

    /// Offset of the first weight relative to the evaluation index.
    pub const START: isize = S::MODE.start_offset(Self::SIZE);

    /// Value form of this stencil.
    pub const DESCRIPTOR: StencilDescriptor = StencilDescriptor::new(
        D::KIND,
        AccuracyOrder(ORDER as u32),
        S::MODE,
        Self::COEFFICIENTS,
    );
}

/// A stencil's weights together with where they are applied.
///
/// For evaluation index `i` the stencil reads offsets
/// `i + start ..= i + start + size - 1`. Equality is structural.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StencilDescriptor {
    kind: DerivativeKind,
    order: AccuracyOrder,
    stagger: StaggerMode,
    coefficients: &'static [Scalar],
    start: isize,
}

impl StencilDescriptor {
    /// Bind `coefficients` to the footprint implied by `stagger`.
    const fn new(
        kind: DerivativeKind,
        order: AccuracyOrder,
        stagger: StaggerMode,
        coefficients: &'static [Scalar],
    ) -> Self {
        Self {
            kind,
            order,
            stagger,
            coefficients,
            start: stagger.start_offset(coefficients.len()),
        }
    }

    /// Resolve a supported combination at runtime.
    ///
    /// # Errors
    ///
    /// [`StencilError::InvalidOrder`] for a zero or odd order, and
    /// [`StencilError::Unsupported`] for a well-formed combination with no
    /// coefficients (e.g. order 4 with Right stagger).
    pub fn lookup(
        kind: DerivativeKind,
        order: impl Into<AccuracyOrder>,
        stagger: StaggerMode,
    ) -> Result<Self, StencilError> {
        let order = order.into();
        if !order.is_valid() {
            return Err(StencilError::InvalidOrder { order });
        }
        REGISTRY
            .iter()
            .find(|d| d.kind == kind && d.order == order && d.stagger == stagger)
            .copied()
            .ok_or(StencilError::Unsupported {
                kind,
                order,
                stagger,
            })
    }

    /// Every supported descriptor.
    pub fn supported() -> &'static [StencilDescriptor] {
        &REGISTRY
    }

    /// Accuracy orders available for `kind` under `stagger`, ascending.
    pub fn supported_orders(
        kind: DerivativeKind,
        stagger: StaggerMode,
    ) -> SmallVec<[AccuracyOrder; 4]> {
        let mut orders: SmallVec<[AccuracyOrder; 4]> = REGISTRY
            .iter()
            .filter(|d| d.kind == kind && d.stagger == stagger)
            .map(|d| d.order)
            .collect();
        orders.sort_unstable();
        orders
    }

    /// Derivative kind.
    pub const fn kind(&self) -> DerivativeKind {
        self.kind
    }

    /// Accuracy order.
    pub const fn order(&self) -> AccuracyOrder {
        self.order
    }

    /// Stagger.
    pub const fn stagger(&self) -> StaggerMode {
        self.stagger
    }

    /// Weights, lowest offset first.
    pub const fn coefficients(&self) -> &'static [Scalar] {
        self.coefficients
    }

    /// Number of points in the footprint.
    pub const fn size(&self) -> usize {
        self.coefficients.len()
    }

    /// Offset of the first weight.
    pub const fn start(&self) -> isize {
        self.start
    }

    /// Offset of the last weight.
    pub const fn end(&self) -> isize {
        self.start + self.coefficients.len() as isize - 1
    }

    /// How far the footprint extends past the evaluation index:
    /// `(cells below, cells above)`.
    ///
    /// An evaluation index `i` on an axis of length `n` is safe exactly when
    /// `below <= i` and `i + above < n`.
    pub const fn reach(&self) -> (usize, usize) {
        let below = if self.start < 0 { -self.start } else { 0 };
        let end = self.end();
        let above = if end > 0 { end } else { 0 };
        (below as usize, above as usize)
    }

    /// `Σ |c[k]|`, the largest magnitude the stencil can produce from
    /// samples bounded by 1.
    ///
    /// For a centred second derivative this is attained by the alternating
    /// `±1` mode, so it is the spectral radius of the operator.
    pub fn abs_sum(&self) -> Scalar {
        self.coefficients.iter().map(|c| c.abs()).sum()
    }
}

/// Every supported stencil, centred first.
pub static REGISTRY: [StencilDescriptor; 12] = [
    Stencil::<First, 2, Center>::DESCRIPTOR,
    Stencil::<Second, 2, Center>::DESCRIPTOR,
    Stencil::<First, 4, Center>::DESCRIPTOR,
    Stencil::<Second, 4, Center>::DESCRIPTOR,
    Stencil::<First, 6, Center>::DESCRIPTOR,
    Stencil::<Second, 6, Center>::DESCRIPTOR,
    Stencil::<First, 8, Center>::DESCRIPTOR,
    Stencil::<Second, 8, Center>::DESCRIPTOR,
    Stencil::<First, 2, Left>::DESCRIPTOR,
    Stencil::<Second, 2, Left>::DESCRIPTOR,
    Stencil::<First, 2, Right>::DESCRIPTOR,
    Stencil::<Second, 2, Right>::DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antisymmetric::{is_antisymmetric, is_symmetric};

    #[test]
    fn central_start_balances_size() {
        for d in REGISTRY.iter().filter(|d| d.stagger() == StaggerMode::Center) {
            assert_eq!(d.size() % 2, 1, "{d:?}");
            assert_eq!(d.start() + (d.size() / 2) as isize, 0, "{d:?}");
            assert_eq!(d.size(), d.order().0 as usize + 1);
        }
    }

    #[test]
    fn staggered_start_shifts_by_one() {
        assert_eq!(Stencil::<First, 2, Right>::START, 0);
        assert_eq!(Stencil::<First, 2, Left>::START, -2);
        assert_eq!(Stencil::<Second, 2, Right>::START, -1);
        assert_eq!(Stencil::<Second, 2, Left>::START, -3);
    }

    #[test]
    fn central_symmetry_invariants() {
        for d in REGISTRY.iter().filter(|d| d.stagger() == StaggerMode::Center) {
            match d.kind() {
                DerivativeKind::First => assert!(is_antisymmetric(d.coefficients()), "{d:?}"),
                DerivativeKind::Second => assert!(is_symmetric(d.coefficients()), "{d:?}"),
            }
        }
    }

    #[test]
    fn descriptor_matches_type_level_consts() {
        let d = Stencil::<Second, 8, Center>::DESCRIPTOR;
        assert_eq!(d.kind(), DerivativeKind::Second);
        assert_eq!(d.order(), AccuracyOrder(8));
        assert_eq!(d.stagger(), StaggerMode::Center);
        assert_eq!(d.coefficients(), Stencil::<Second, 8, Center>::COEFFICIENTS);
        assert_eq!(d.size(), Stencil::<Second, 8, Center>::SIZE);
        assert_eq!(d.start(), -4);
        assert_eq!(d.end(), 4);
    }

    #[test]
    fn registry_keys_are_unique() {
        for (a, da) in REGISTRY.iter().enumerate() {
            for db in &REGISTRY[a + 1..] {
                assert!(
                    (da.kind(), da.order(), da.stagger()) != (db.kind(), db.order(), db.stagger()),
                    "duplicate key {da:?}"
                );
            }
        }
    }

    #[test]
    fn lookup_finds_every_supported_key() {
        for d in StencilDescriptor::supported() {
            let found = StencilDescriptor::lookup(d.kind(), d.order(), d.stagger()).unwrap();
            assert_eq!(&found, d);
        }
    }

    #[test]
    fn lookup_rejects_higher_order_staggered() {
        for kind in DerivativeKind::ALL {
            for stagger in [StaggerMode::Left, StaggerMode::Right] {
                for order in [4u32, 6, 8] {
                    let err = StencilDescriptor::lookup(kind, order, stagger).unwrap_err();
                    assert_eq!(
                        err,
                        StencilError::Unsupported {
                            kind,
                            order: AccuracyOrder(order),
                            stagger
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn lookup_rejects_malformed_orders() {
        for order in [0u32, 1, 3, 7] {
            let err =
                StencilDescriptor::lookup(DerivativeKind::First, order, StaggerMode::Center)
                    .unwrap_err();
            assert_eq!(
                err,
                StencilError::InvalidOrder {
                    order: AccuracyOrder(order)
                }
            );
        }
        assert!(matches!(
            StencilDescriptor::lookup(DerivativeKind::Second, 10u32, StaggerMode::Center),
            Err(StencilError::Unsupported { .. })
        ));
    }

    #[test]
    fn supported_orders_per_stagger() {
        let central = StencilDescriptor::supported_orders(DerivativeKind::First, StaggerMode::Center);
        assert_eq!(
            central.as_slice(),
            &[AccuracyOrder(2), AccuracyOrder(4), AccuracyOrder(6), AccuracyOrder(8)]
        );
        let right = StencilDescriptor::supported_orders(DerivativeKind::Second, StaggerMode::Right);
        assert_eq!(right.as_slice(), &[AccuracyOrder(2)]);
    }

    #[test]
    fn reach_covers_footprint() {
        assert_eq!(Stencil::<First, 8, Center>::DESCRIPTOR.reach(), (4, 4));
        assert_eq!(Stencil::<First, 2, Right>::DESCRIPTOR.reach(), (0, 1));
        assert_eq!(Stencil::<First, 2, Left>::DESCRIPTOR.reach(), (2, 0));
        assert_eq!(Stencil::<Second, 2, Right>::DESCRIPTOR.reach(), (1, 2));
        assert_eq!(Stencil::<Second, 2, Left>::DESCRIPTOR.reach(), (3, 0));
    }

    #[test]
    fn abs_sum_of_centred_second_derivatives() {
        let sums: Vec<Scalar> = [2u32, 4, 6, 8]
            .iter()
            .map(|&o| {
                StencilDescriptor::lookup(DerivativeKind::Second, o, StaggerMode::Center)
                    .unwrap()
                    .abs_sum()
            })
            .collect();
        assert_eq!(sums[0], 4.0);
        assert!((sums[1] - 16.0 / 3.0).abs() < 1e-14);
        assert!((sums[2] - 272.0 / 45.0).abs() < 1e-14);
        let order8 = 2.0 * (1.0 / 560.0 + 8.0 / 315.0 + 0.2 + 1.6) + 205.0 / 72.0;
        assert!((sums[3] - order8).abs() < 1e-14);
        // Wider stencils resolve the Nyquist mode more sharply.
        assert!(sums.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn error_display_names_combination() {
        let err = StencilDescriptor::lookup(DerivativeKind::First, 4u32, StaggerMode::Right)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "no first-derivative stencil of order 4 with right stagger"
        );
    }
}
