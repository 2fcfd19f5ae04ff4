//! # Null-space extraction
//!
//! The null space of a matrix equals the null space of its RREF, so the
//! extractor reduces first, classifies each column of the result as pivot or
//! free, and then builds one basis vector per free coefficient column. When
//! every coefficient column is a pivot column the basis is empty and the
//! columns are linearly independent.

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::SLESolverError;
use crate::matrix::{Matrix, Row, ensure_rectangular, leading_entry};
use crate::rref::rref;
use crate::scalar::Scalar;

/// Ordered pivot/free column indices of a reduced matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub pivot_cols: Vec<usize>,
    pub free_cols: Vec<usize>,
}

/// Result of a full null-space pass over one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullSpace<T> {
    /// The input in Reduced Row Echelon Form.
    pub reduced: Matrix<T>,
    /// Pivot/free classification of the reduced matrix's columns.
    pub classification: ColumnClassification,
    /// One vector per free coefficient column, spanning the solutions of the
    /// homogeneous system.
    pub basis: Vec<Row<T>>,
}

/// Classifies every column of a matrix in RREF as pivot or free.
///
/// A column counts as a pivot column when exactly one row holds a nonzero
/// entry there, i.e. its zero count is `m - 1`; every other column is free.
/// The rule reads the matrix as given, augmented column included.
///
/// Callers must reduce with [`rref`] first; only the shape is validated here.
/// Note the counting rule can claim a free column whose single nonzero entry
/// sits in another column's pivot row (e.g. column 1 of `[[1,2,0],[0,0,1]]`);
/// [`null_space_basis`] therefore derives its pivot columns from leading
/// entries instead.
///
/// # Errors
///
/// Returns `SLESolverError::MalformedMatrix` for an empty or ragged input.
pub fn classify_columns<T: Scalar>(
    a: &Matrix<T>,
) -> Result<ColumnClassification, SLESolverError> {
    ensure_rectangular(a)?;
    let rows = a.len();
    let columns = a[0].len();

    let mut pivot_cols = Vec::new();
    let mut free_cols = Vec::new();
    for c in 0..columns {
        let zeros = a.iter().filter(|row| row[c].is_zero()).count();
        if zeros == rows - 1 {
            pivot_cols.push(c);
        } else {
            free_cols.push(c);
        }
    }

    Ok(ColumnClassification {
        pivot_cols,
        free_cols,
    })
}

/// Builds a basis for the null space of the coefficient block of a matrix in
/// RREF.
///
/// Each nonzero row of the reduced matrix reads
/// `x[p] + Σ a[i][f]·x[f] = rhs` with `p` its pivot (leading-entry) column
/// and `f` ranging over the free columns. Setting one free variable to 1 and
/// the rest to 0 forces `x[p] = -a[i][f]`, so every free coefficient column
/// contributes one vector: 1 at its own coordinate, the negated entries of
/// that column at the pivot coordinates, 0 elsewhere.
///
/// The vectors have one coordinate per coefficient column; the augmented
/// column is not part of the solution space.
///
/// # Errors
///
/// Returns `SLESolverError::MalformedMatrix` for an empty or ragged input.
pub fn null_space_basis<T: Scalar>(a: &Matrix<T>) -> Result<Vec<Row<T>>, SLESolverError> {
    ensure_rectangular(a)?;
    let coefficient_cols = a[0].len() - 1;

    // (row, leading-entry column) of each nonzero row
    let pivots: Vec<(usize, usize)> = a
        .iter()
        .enumerate()
        .filter_map(|(r, row)| leading_entry(row).map(|le| (r, le.col_idx)))
        .collect();
    let pivot_cols: Vec<usize> = pivots.iter().map(|&(_, c)| c).collect();

    let mut basis = Vec::new();
    for f in (0..coefficient_cols).filter(|c| !pivot_cols.contains(c)) {
        let mut v: Row<T> = vec![T::zero(); coefficient_cols];
        v[f] = T::one();
        for &(r, p) in &pivots {
            v[p] = -a[r][f].clone();
        }
        basis.push(v);
    }
    Ok(basis)
}

/// Runs the full pipeline: reduces the matrix, classifies its columns, and
/// builds the null-space basis.
///
/// # Errors
///
/// Returns `SLESolverError::MalformedMatrix` for an empty, empty-row, or
/// ragged input.
pub fn null_space<T: Scalar>(a: Matrix<T>) -> Result<NullSpace<T>, SLESolverError> {
    let reduced = rref(a)?;
    let classification = classify_columns(&reduced)?;
    let basis = null_space_basis(&reduced)?;
    Ok(NullSpace {
        reduced,
        classification,
        basis,
    })
}
