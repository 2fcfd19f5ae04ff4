//! # Augmented-matrix data model
//!
//! A [`Matrix`] is an ordered sequence of equal-length [`Row`]s; the last
//! column holds the right-hand-side constants of the linear system, every
//! other column a coefficient. Rows are value objects: stages replace whole
//! rows rather than mutating entries in place.

pub mod row_ops;

use itertools::Itertools;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::SLESolverError;
use crate::scalar::Scalar;

/// One equation's coefficients plus its right-hand-side constant.
pub type Row<T> = Vec<T>;
/// A rectangular matrix as ordered rows.
pub type Matrix<T> = Vec<Vec<T>>;

pub use row_ops::{add_rows, matrix_vector_mul, scale_row, swap_rows};

/// A row's first nonzero coefficient, augmented column excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadingEntry<T> {
    pub value: T,
    pub col_idx: usize,
}

/// Validates the matrix shape: at least one row, at least one column, and
/// every row of equal length.
///
/// # Errors
///
/// Returns `SLESolverError::MalformedMatrix` describing the first violation.
pub fn ensure_rectangular<T: Scalar>(a: &Matrix<T>) -> Result<(), SLESolverError> {
    if a.is_empty() {
        return Err(SLESolverError::MalformedMatrix(
            "matrix must contain at least one row".into(),
        ));
    }
    let n = a[0].len();
    if n == 0 {
        return Err(SLESolverError::MalformedMatrix(
            "rows must contain at least one column".into(),
        ));
    }
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(SLESolverError::MalformedMatrix(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(())
}

/// The coefficient block of a row: everything but the augmented column.
pub(crate) fn coefficients<T>(row: &[T]) -> &[T] {
    &row[..row.len().saturating_sub(1)]
}

/// True when every coefficient of the row is zero. The augmented-column value
/// is irrelevant: such a row encodes a redundant or inconsistent equation,
/// not resolved here.
pub fn is_zero_row<T: Scalar>(row: &[T]) -> bool {
    coefficients(row).iter().all(|v| v.is_zero())
}

/// Finds the first nonzero coefficient of a bare row, scanning columns left
/// to right. Returns `None` when the row has no nonzero coefficient.
///
/// # Example
///
/// ```
/// use num_rational::Rational64;
/// use sle_solver::matrix::leading_entry;
///
/// let row: Vec<Rational64> = vec![0.into(), 5.into(), 1.into()];
/// let le = leading_entry(&row).unwrap();
/// assert_eq!(le.col_idx, 1);
/// assert_eq!(le.value, 5.into());
/// ```
pub fn leading_entry<T: Scalar>(row: &[T]) -> Option<LeadingEntry<T>> {
    coefficients(row)
        .iter()
        .find_position(|v| !v.is_zero())
        .map(|(col_idx, value)| LeadingEntry {
            value: value.clone(),
            col_idx,
        })
}

/// Same lookup addressed as a `(matrix, row index)` pair.
///
/// # Errors
///
/// Returns `SLESolverError::RowIndexOutOfBounds` when `r` names no row.
pub fn leading_entry_at<T: Scalar>(
    a: &Matrix<T>,
    r: usize,
) -> Result<Option<LeadingEntry<T>>, SLESolverError> {
    if r >= a.len() {
        return Err(SLESolverError::RowIndexOutOfBounds {
            row: r,
            rows: a.len(),
        });
    }
    Ok(leading_entry(&a[r]))
}

/// Sort key over rows: the leading-entry column, with `usize::MAX` standing
/// in for rows that have none so they order after every real pivot column.
pub(crate) fn leading_col_key<T: Scalar>(row: &[T]) -> usize {
    leading_entry(row).map_or(usize::MAX, |le| le.col_idx)
}
