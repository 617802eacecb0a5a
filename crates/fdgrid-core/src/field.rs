//! Row-major 2D scalar field storage.
//!
//! [`Field2D`] is the field type owned by the integrator. Rows are
//! contiguous, so `field[row]` is a `&[Scalar]` and `field[row][col]`
//! reads a single value, which is the access pattern the stencil layer
//! relies on (see [`Grid2D`](crate::Grid2D)).

use crate::error::FieldError;
use crate::Scalar;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::{Index, IndexMut};

/// A dense `rows x cols` grid of scalars stored in row-major order.
///
/// Equality is structural: two fields are equal when their shapes and
/// every value match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field2D {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

impl Field2D {
    /// A field of the given shape filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// A field of the given shape filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: Scalar) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build a field by evaluating `f(row, col)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Scalar) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Wrap a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::EmptyField`] for a zero extent and
    /// [`FieldError::ShapeMismatch`] when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Scalar>) -> Result<Self, FieldError> {
        if rows == 0 || cols == 0 {
            return Err(FieldError::EmptyField);
        }
        if data.len() != rows * cols {
            return Err(FieldError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a field from a list of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::EmptyField`] if there are no rows or the rows
    /// are empty, and [`FieldError::RaggedRows`] for the first row whose
    /// length differs from row 0.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self, FieldError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(FieldError::EmptyField);
        }
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(FieldError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// A field of uniform random values in `[-1, 1)`.
    ///
    /// Uses a ChaCha8 generator seeded from `seed`, so the same seed always
    /// produces the same field on every platform.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data = (0..rows * cols)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        Self { rows, cols, data }
    }

    /// Number of rows (the y extent).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the x extent).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked read of a single cell.
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Mutable access to the row-major backing buffer.
    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.data
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Scalar]> + '_ {
        // chunks_exact(0) panics, and a 0-column field has no rows to yield.
        let width = self.cols.max(1);
        self.data.chunks_exact(width).take(self.rows)
    }

    /// Consume the field and return its row-major buffer.
    pub fn into_vec(self) -> Vec<Scalar> {
        self.data
    }

    /// The transposed field (`rows` and `cols` swapped).
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self[c][r])
    }

    /// Largest absolute difference between two fields of equal shape.
    ///
    /// Returns `None` when the shapes differ.
    pub fn max_abs_diff(&self, other: &Self) -> Option<Scalar> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, Scalar::max),
        )
    }
}

impl Index<usize> for Field2D {
    type Output = [Scalar];

    #[inline(always)]
    fn index(&self, row: usize) -> &[Scalar] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl IndexMut<usize> for Field2D {
    #[inline(always)]
    fn index_mut(&mut self, row: usize) -> &mut [Scalar] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }
}
