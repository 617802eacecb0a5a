//! Test fixtures and mock models for fdgrid development.
//!
//! Provides polynomial fields with known derivatives ([`Poly`],
//! [`separable_field`]), float comparison helpers, and mock
//! [`Model`](fdgrid_integrator::Model) implementations in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use fdgrid_core::{Field2D, Scalar};

/// A 1D polynomial `c[0] + c[1] t + c[2] t² + ...`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly {
    coeffs: Vec<Scalar>,
}

impl Poly {
    pub fn new(coeffs: impl Into<Vec<Scalar>>) -> Self {
        Self {
            coeffs: coeffs.into(),
        }
    }

    /// `t^n`.
    pub fn monomial(n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = 1.0;
        Self { coeffs }
    }

    /// Highest power with a stored coefficient.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluate with Horner's rule.
    pub fn eval(&self, t: Scalar) -> Scalar {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    /// The exact derivative.
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| k as Scalar * c)
            .collect();
        Self { coeffs }
    }
}

/// `px(col - origin.1) + py(row - origin.0)` at every cell.
///
/// With unit spacing the x derivative of the field at `(i, j)` is
/// `px'(j - origin.1)`, and likewise for y.
pub fn separable_field(
    rows: usize,
    cols: usize,
    px: &Poly,
    py: &Poly,
    origin: (Scalar, Scalar),
) -> Field2D {
    Field2D::from_fn(rows, cols, |r, c| {
        px.eval(c as Scalar - origin.1) + py.eval(r as Scalar - origin.0)
    })
}

/// Field that varies only along x: `p(col - origin)`.
pub fn field_along_x(rows: usize, cols: usize, p: &Poly, origin: Scalar) -> Field2D {
    separable_field(rows, cols, p, &Poly::new(vec![]), (0.0, origin))
}

/// Field that varies only along y: `p(row - origin)`.
pub fn field_along_y(rows: usize, cols: usize, p: &Poly, origin: Scalar) -> Field2D {
    separable_field(rows, cols, &Poly::new(vec![]), p, (origin, 0.0))
}

/// Assert `|actual - expected| <= tol * max(1, |expected|)`.
#[track_caller]
pub fn assert_close(actual: Scalar, expected: Scalar, tol: Scalar) {
    let bound = tol * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= bound,
        "expected {expected}, got {actual} (|diff| = {:e} > {bound:e})",
        (actual - expected).abs()
    );
}

/// Assert two fields have the same shape and agree cell by cell within
/// `tol`.
#[track_caller]
pub fn assert_fields_close(actual: &Field2D, expected: &Field2D, tol: Scalar) {
    assert_eq!(actual.shape(), expected.shape(), "shape mismatch");
    for (r, (a, e)) in actual.iter_rows().zip(expected.iter_rows()).enumerate() {
        for (c, (&a, &e)) in a.iter().zip(e).enumerate() {
            assert!(
                (a - e).abs() <= tol,
                "cell ({r}, {c}): expected {e}, got {a}"
            );
        }
    }
}
