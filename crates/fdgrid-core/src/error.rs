//! Error types for field construction.

use std::error::Error;
use std::fmt;

/// Errors from building a [`Field2D`](crate::Field2D) out of caller data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The field would have zero rows or zero columns.
    EmptyField,
    /// A row's length differs from the first row's.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Column count taken from row 0.
        expected: usize,
        /// Column count found in `row`.
        found: usize,
    },
    /// A flat buffer does not hold `rows * cols` values.
    ShapeMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Length of the supplied buffer.
        len: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field must have at least one row and one column"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
            Self::ShapeMismatch { rows, cols, len } => {
                write!(f, "buffer of {len} values cannot form a {rows}x{cols} field")
            }
        }
    }
}

impl Error for FieldError {}
