//! Finite-difference weights for first and second derivatives.
//!
//! [`Table<ORDER, S>`] implements [`Coefficients`] only for the supported
//! combinations:
//!
//! | Stagger | Orders |
//! |---------|--------|
//! | `Center` | 2, 4, 6, 8 |
//! | `Left`, `Right` | 2 |
//!
//! Any other `(ORDER, S)` has no impl, so selecting it is a compile error:
//!
//! ```compile_fail
//! use fdgrid_stencil::{Coefficients, Right, Table};
//!
//! let _ = <Table<4, Right> as Coefficients>::FIRST;
//! ```
//!
//! Every weight is an exact rational built by [`ratio`], a single correctly
//! rounded division, rather than a decimal literal.

use crate::antisymmetric::{antisymmetric, is_antisymmetric, is_symmetric};
use crate::kind::{Center, Left, Right};
use fdgrid_core::Scalar;
use std::marker::PhantomData;

/// Weight sequences for one `(accuracy order, stagger)` pair.
pub trait Coefficients {
    /// First-derivative weights, lowest offset first.
    const FIRST: &'static [Scalar];
    /// Second-derivative weights, lowest offset first.
    const SECOND: &'static [Scalar];
}

/// Type-level key into the coefficient table.
///
/// Never constructed; only its [`Coefficients`] impls matter.
pub struct Table<const ORDER: usize, S>(PhantomData<S>);

/// `numerator / denominator` as a correctly rounded [`Scalar`].
pub const fn ratio(numerator: i64, denominator: i64) -> Scalar {
    numerator as Scalar / denominator as Scalar
}

// Independent halves of the centred first-derivative stencils (offsets +1..).
const CENTRAL_2_HALF: [Scalar; 1] = [ratio(1, 2)];
const CENTRAL_4_HALF: [Scalar; 2] = [ratio(2, 3), ratio(-1, 12)];
const CENTRAL_6_HALF: [Scalar; 3] = [ratio(3, 4), ratio(-3, 20), ratio(1, 60)];
const CENTRAL_8_HALF: [Scalar; 4] = [ratio(4, 5), ratio(-1, 5), ratio(4, 105), ratio(-1, 280)];

const CENTRAL_2_FIRST: [Scalar; 3] = antisymmetric(CENTRAL_2_HALF);
const CENTRAL_4_FIRST: [Scalar; 5] = antisymmetric(CENTRAL_4_HALF);
const CENTRAL_6_FIRST: [Scalar; 7] = antisymmetric(CENTRAL_6_HALF);
const CENTRAL_8_FIRST: [Scalar; 9] = antisymmetric(CENTRAL_8_HALF);

const CENTRAL_2_SECOND: [Scalar; 3] = [ratio(1, 1), ratio(-2, 1), ratio(1, 1)];
const CENTRAL_4_SECOND: [Scalar; 5] = [
    ratio(-1, 12),
    ratio(4, 3),
    ratio(-5, 2),
    ratio(4, 3),
    ratio(-1, 12),
];
const CENTRAL_6_SECOND: [Scalar; 7] = [
    ratio(1, 90),
    ratio(-3, 20),
    ratio(3, 2),
    ratio(-49, 18),
    ratio(3, 2),
    ratio(-3, 20),
    ratio(1, 90),
];
const CENTRAL_8_SECOND: [Scalar; 9] = [
    ratio(-1, 560),
    ratio(8, 315),
    ratio(-1, 5),
    ratio(8, 5),
    ratio(-205, 72),
    ratio(8, 5),
    ratio(-1, 5),
    ratio(8, 315),
    ratio(-1, 560),
];

// Two-point forward difference, and the mean of the two adjacent
// three-point second differences. Both sit on the half cell between the
// middle samples. Left and Right share weights; only placement differs.
const STAGGERED_2_FIRST: [Scalar; 2] = [ratio(-1, 1), ratio(1, 1)];
const STAGGERED_2_SECOND: [Scalar; 4] = [ratio(1, 2), ratio(-1, 2), ratio(-1, 2), ratio(1, 2)];

const _: () = {
    assert!(is_antisymmetric(&CENTRAL_2_FIRST));
    assert!(is_antisymmetric(&CENTRAL_4_FIRST));
    assert!(is_antisymmetric(&CENTRAL_6_FIRST));
    assert!(is_antisymmetric(&CENTRAL_8_FIRST));
    assert!(is_symmetric(&CENTRAL_2_SECOND));
    assert!(is_symmetric(&CENTRAL_4_SECOND));
    assert!(is_symmetric(&CENTRAL_6_SECOND));
    assert!(is_symmetric(&CENTRAL_8_SECOND));
    assert!(CENTRAL_2_FIRST.len() % 2 == 1 && CENTRAL_2_FIRST.len() == CENTRAL_2_SECOND.len());
    assert!(CENTRAL_4_FIRST.len() % 2 == 1 && CENTRAL_4_FIRST.len() == CENTRAL_4_SECOND.len());
    assert!(CENTRAL_6_FIRST.len() % 2 == 1 && CENTRAL_6_FIRST.len() == CENTRAL_6_SECOND.len());
    assert!(CENTRAL_8_FIRST.len() % 2 == 1 && CENTRAL_8_FIRST.len() == CENTRAL_8_SECOND.len());
    assert!(STAGGERED_2_FIRST.len() == 2 && STAGGERED_2_SECOND.len() == 4);
};

macro_rules! table {
    ($order:literal, $stagger:ty, $first:expr, $second:expr) => {
        impl Coefficients for Table<$order, $stagger> {
            const FIRST: &'static [Scalar] = &$first;
            const SECOND: &'static [Scalar] = &$second;
        }
    };
}

table!(2, Center, CENTRAL_2_FIRST, CENTRAL_2_SECOND);
table!(4, Center, CENTRAL_4_FIRST, CENTRAL_4_SECOND);
table!(6, Center, CENTRAL_6_FIRST, CENTRAL_6_SECOND);
table!(8, Center, CENTRAL_8_FIRST, CENTRAL_8_SECOND);
table!(2, Right, STAGGERED_2_FIRST, STAGGERED_2_SECOND);
table!(2, Left, STAGGERED_2_FIRST, STAGGERED_2_SECOND);
