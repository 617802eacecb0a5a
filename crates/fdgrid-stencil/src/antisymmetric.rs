//! Antisymmetric expansion of first-derivative coefficients.
//!
//! A centred first-derivative stencil satisfies `w(-k) = -w(k)` and
//! `w(0) = 0`, so only the weights at offsets `+1..=+N` are independent.
//! The table stores that half and derives the full stencil from it, which
//! keeps the two halves from drifting apart. The half is also what an
//! optimised kernel would use (one multiply per pair of samples).

use fdgrid_core::Scalar;

/// Expand the independent half of an antisymmetric stencil.
///
/// `partial[i]` is the weight at offset `+(i + 1)`. The result has
/// `M = 2N + 1` entries laid out from offset `-N` to `+N`:
///
/// ```text
/// full[N - 1 - i] = -partial[i]
/// full[N]         =  0
/// full[N + 1 + i] =  partial[i]
/// ```
///
/// `N == 0` or `M != 2N + 1` is rejected at compile time.
///
/// ```
/// use fdgrid_stencil::antisymmetric::antisymmetric;
///
/// let full: [f64; 7] = antisymmetric([3.0 / 4.0, -3.0 / 20.0, 1.0 / 60.0]);
/// assert_eq!(
///     full,
///     [-1.0 / 60.0, 3.0 / 20.0, -3.0 / 4.0, 0.0, 3.0 / 4.0, -3.0 / 20.0, 1.0 / 60.0]
/// );
/// ```
///
/// An empty half has no nonzero pair and does not compile:
///
/// ```compile_fail
/// use fdgrid_stencil::antisymmetric::antisymmetric;
///
/// const EMPTY: [f64; 1] = antisymmetric::<0, 1>([]);
/// ```
///
/// Neither does an output length other than `2N + 1`:
///
/// ```compile_fail
/// use fdgrid_stencil::antisymmetric::antisymmetric;
///
/// const WRONG: [f64; 5] = antisymmetric::<1, 5>([0.5]);
/// ```
pub const fn antisymmetric<const N: usize, const M: usize>(partial: [Scalar; N]) -> [Scalar; M] {
    const {
        assert!(N > 0, "antisymmetric stencil needs at least one nonzero pair");
        assert!(M == 2 * N + 1, "antisymmetric stencil must have 2N + 1 points");
    }

    let mut full = [0.0; M];
    let mut i = 0;
    while i < N {
        full[N - 1 - i] = -partial[i];
        full[N + 1 + i] = partial[i];
        i += 1;
    }
    full
}

/// Whether `c` is antisymmetric about its midpoint with an exact zero centre.
///
/// Even-length sequences have no midpoint and are never antisymmetric.
pub const fn is_antisymmetric(c: &[Scalar]) -> bool {
    let n = c.len();
    if n % 2 == 0 || c[n / 2] != 0.0 {
        return false;
    }
    let mut i = 0;
    while i < n / 2 {
        if c[i] != -c[n - 1 - i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether `c` has odd length and is symmetric about its midpoint.
pub const fn is_symmetric(c: &[Scalar]) -> bool {
    let n = c.len();
    if n % 2 == 0 {
        return false;
    }
    let mut i = 0;
    while i < n / 2 {
        if c[i] != c[n - 1 - i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixth_order_example() {
        let full: [Scalar; 7] = antisymmetric([3.0 / 4.0, -3.0 / 20.0, 1.0 / 60.0]);
        let expected = [
            -1.0 / 60.0,
            3.0 / 20.0,
            -3.0 / 4.0,
            0.0,
            3.0 / 4.0,
            -3.0 / 20.0,
            1.0 / 60.0,
        ];
        assert_eq!(full, expected);
    }

    #[test]
    fn single_pair() {
        let full: [Scalar; 3] = antisymmetric([0.5]);
        assert_eq!(full, [-0.5, 0.0, 0.5]);
    }

    #[test]
    fn usable_in_const_context() {
        const FULL: [Scalar; 5] = antisymmetric([2.0, -1.0]);
        assert_eq!(FULL, [1.0, -2.0, 0.0, 2.0, -1.0]);
    }

    #[test]
    fn expansion_is_antisymmetric() {
        let full: [Scalar; 9] = antisymmetric([0.8, -0.2, 0.04, -0.003]);
        assert!(is_antisymmetric(&full));
        assert!(!is_symmetric(&full));
    }

    #[test]
    fn symmetry_predicates() {
        assert!(is_symmetric(&[1.0, -2.0, 1.0]));
        assert!(!is_symmetric(&[1.0, -2.0, 1.5]));
        assert!(!is_symmetric(&[1.0, 1.0]));
        assert!(!is_antisymmetric(&[-1.0, 0.1, 1.0]));
        assert!(!is_antisymmetric(&[-1.0, 1.0]));
        assert!(is_antisymmetric(&[0.0]));
    }
}
