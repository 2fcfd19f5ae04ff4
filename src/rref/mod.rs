//! # Gauss-Jordan reduction
//!
//! Reduces an augmented matrix to Reduced Row Echelon Form using the three
//! row operations that leave the encoded system's solution set unchanged:
//! swapping two rows, scaling a row by a nonzero value, and adding a scalar
//! multiple of one row to another.

use num_traits::{One, Zero};

use crate::errors::SLESolverError;
use crate::matrix::row_ops::{add_rows, scale_row, swap_rows};
use crate::matrix::{Matrix, ensure_rectangular, is_zero_row, leading_col_key};
use crate::scalar::Scalar;

/// Stable partition of rows: rows with at least one nonzero coefficient
/// first, all-zero rows (augmented column ignored) last. Relative order is
/// preserved within both groups.
pub fn zeros_to_bottom<T: Scalar>(mut a: Matrix<T>) -> Matrix<T> {
    a.sort_by_key(|row| is_zero_row(row));
    a
}

/// Stable sort of rows by leading-entry column, so each leading entry sits to
/// the right of the one above it. Rows without a leading entry go last.
pub fn sort_by_leading_entry<T: Scalar>(mut a: Matrix<T>) -> Matrix<T> {
    a.sort_by_key(|row| leading_col_key(row));
    a
}

/// Partial pivoting: swaps the row at or below `frontier` holding the
/// largest-magnitude entry in `column` into the frontier position. Ties go to
/// the earliest row. Choosing the largest candidate keeps later eliminations
/// from amplifying values once the pivot row is scaled by its inverse, and in
/// exact arithmetic it never selects a zero pivot while a nonzero candidate
/// exists in the column.
///
/// # Errors
///
/// Returns the out-of-bounds variants when `frontier` or `column` name no row
/// or column.
pub fn select_pivot<T: Scalar>(
    a: Matrix<T>,
    column: usize,
    frontier: usize,
) -> Result<Matrix<T>, SLESolverError> {
    let rows = a.len();
    if frontier >= rows {
        return Err(SLESolverError::RowIndexOutOfBounds {
            row: frontier,
            rows,
        });
    }
    let columns = a[0].len();
    if column >= columns {
        return Err(SLESolverError::ColumnIndexOutOfBounds { column, columns });
    }

    let mut best = frontier;
    for r in frontier + 1..rows {
        if a[r][column].abs() > a[best][column].abs() {
            best = r;
        }
    }
    swap_rows(a, frontier, best)
}

/// One elimination step: scales the pivot row so its entry in `column`
/// becomes exactly 1, then cancels that column in the target row by adding
/// the pivot row times `-a[target][column]`.
///
/// A zero entry at `(pivot_row, column)` means the row holds no pivot for
/// this column; the matrix is returned unchanged rather than dividing by
/// zero.
///
/// # Errors
///
/// Returns the out-of-bounds variants when a row or column index is invalid.
pub fn reduce_row<T: Scalar>(
    mut a: Matrix<T>,
    pivot_row: usize,
    target_row: usize,
    column: usize,
) -> Result<Matrix<T>, SLESolverError> {
    let rows = a.len();
    for r in [pivot_row, target_row] {
        if r >= rows {
            return Err(SLESolverError::RowIndexOutOfBounds { row: r, rows });
        }
    }
    let columns = a[0].len();
    if column >= columns {
        return Err(SLESolverError::ColumnIndexOutOfBounds { column, columns });
    }

    if a[pivot_row][column].is_zero() {
        return Ok(a);
    }

    let inverse = T::one() / a[pivot_row][column].clone();
    let scaled = scale_row(&a[pivot_row], &inverse);
    a[pivot_row] = scaled;

    let factor = -a[target_row][column].clone();
    let contribution = scale_row(&a[pivot_row], &factor);
    let replaced = add_rows(&contribution, &a[target_row])?;
    a[target_row] = replaced;

    Ok(a)
}

/// Reduces an augmented matrix to Reduced Row Echelon Form.
///
/// The frontier row counter advances down the matrix as the column walk moves
/// right through the coefficient columns; the augmented column is never
/// treated as a pivot column. Every pivot is chosen by [`select_pivot`] and
/// eliminated from all other rows, above and below, which is what makes the
/// result reduced rather than plain row-echelon. A column with no nonzero
/// candidate at or below the frontier is skipped — a system may legitimately
/// have fewer pivots than rows.
///
/// On success: every nonzero row's leading coefficient is 1, each pivot
/// column is zero everywhere outside its pivot row, all-zero rows sit at the
/// bottom, and the dimensions match the input.
///
/// # Errors
///
/// Returns `SLESolverError::MalformedMatrix` for an empty, empty-row, or
/// ragged input; validation runs before any reduction step.
///
/// # Example
///
/// ```
/// use num_rational::Rational64;
/// use sle_solver::rref::rref;
///
/// let a: Vec<Vec<Rational64>> = vec![
///     vec![2.into(), 4.into(), 6.into()],
///     vec![1.into(), 1.into(), 1.into()],
/// ];
/// let reduced = rref(a).unwrap();
/// assert_eq!(reduced[0], vec![1.into(), 0.into(), (-1).into()]);
/// assert_eq!(reduced[1], vec![0.into(), 1.into(), 2.into()]);
/// ```
pub fn rref<T: Scalar>(mut a: Matrix<T>) -> Result<Matrix<T>, SLESolverError> {
    ensure_rectangular(&a)?;
    let rows = a.len();
    let columns = a[0].len();

    let mut frontier = 0;
    for column in 0..columns - 1 {
        if frontier == rows {
            break;
        }
        a = zeros_to_bottom(a);
        if is_zero_row(&a[frontier]) {
            // zero rows were just pushed down: everything from the frontier
            // on is zero and the reduction is complete
            break;
        }
        a = select_pivot(a, column, frontier)?;
        if a[frontier][column].is_zero() {
            // no usable pivot at or below the frontier in this column
            continue;
        }
        let inverse = T::one() / a[frontier][column].clone();
        let normalized = scale_row(&a[frontier], &inverse);
        a[frontier] = normalized;
        for target in 0..rows {
            if target != frontier {
                a = reduce_row(a, frontier, target, column)?;
            }
        }
        frontier += 1;
    }

    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Row;
    use crate::scalar::Rational64;

    fn m(rows: &[&[i64]]) -> Matrix<Rational64> {
        rows.iter()
            .map(|r| r.iter().map(|&v| Rational64::from_integer(v)).collect())
            .collect()
    }

    fn row(values: &[i64]) -> Row<Rational64> {
        values.iter().map(|&v| Rational64::from_integer(v)).collect()
    }

    #[test]
    fn test_zeros_to_bottom() {
        let a = m(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);
        assert_eq!(
            zeros_to_bottom(a),
            m(&[&[1, 1, 1], &[0, 0, 0], &[0, 0, 0]])
        );
    }

    #[test]
    fn test_zeros_to_bottom_already_ordered() {
        let a = m(&[&[1, 5, 1], &[2, 11, 5]]);
        assert_eq!(zeros_to_bottom(a.clone()), a);
    }

    #[test]
    fn test_sort_by_leading_entry() {
        let a = m(&[&[0, 1, 0], &[0, 0, 1], &[1, 0, 0]]);
        // [0,0,1] has no coefficient leading entry, so it sorts last
        assert_eq!(
            sort_by_leading_entry(a),
            m(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]])
        );
    }

    #[test]
    fn test_select_pivot_prefers_largest_magnitude() {
        let a = m(&[&[1, 4, 5], &[2, 6, 7], &[3, 8, 9]]);
        let picked = select_pivot(a, 0, 0).unwrap();
        assert_eq!(picked, m(&[&[3, 8, 9], &[2, 6, 7], &[1, 4, 5]]));
    }

    #[test]
    fn test_select_pivot_tie_goes_to_earliest_row() {
        let a = m(&[&[0, 1, 1], &[2, 3, 4], &[-2, 5, 6]]);
        let picked = select_pivot(a, 0, 0).unwrap();
        // |2| == |-2|: row 1 was seen first
        assert_eq!(picked[0], row(&[2, 3, 4]));
    }

    #[test]
    fn test_select_pivot_out_of_bounds() {
        let a = m(&[&[1, 2], &[3, 4]]);
        assert!(select_pivot(a.clone(), 5, 0).is_err());
        assert!(select_pivot(a, 0, 5).is_err());
    }

    #[test]
    fn test_reduce_row() {
        let a = m(&[&[1, 2, 3], &[2, 0, -1]]);
        let reduced = reduce_row(a, 0, 1, 0).unwrap();
        // factor -2: [2,0,-1] + (-2)*[1,2,3] = [0,-4,-7]
        assert_eq!(reduced[0], row(&[1, 2, 3]));
        assert_eq!(reduced[1], row(&[0, -4, -7]));
    }

    #[test]
    fn test_reduce_row_zero_pivot_is_noop() {
        let a = m(&[&[0, 2, 3], &[4, 5, 6]]);
        let reduced = reduce_row(a.clone(), 0, 1, 0).unwrap();
        assert_eq!(reduced, a);
    }

    #[test]
    fn test_rref_single_row_is_normalized() {
        let a = m(&[&[2, 4, 6]]);
        assert_eq!(rref(a).unwrap(), m(&[&[1, 2, 3]]));
    }

    #[test]
    fn test_rref_skips_column_without_pivot() {
        let a = m(&[&[0, 1, 5], &[0, 2, 6]]);
        assert_eq!(rref(a).unwrap(), m(&[&[0, 1, 3], &[0, 0, 2]]));
    }

    #[test]
    fn test_rref_dependent_rows_leave_zero_row() {
        let a = m(&[&[1, 2, 3], &[2, 4, 6]]);
        assert_eq!(rref(a).unwrap(), m(&[&[1, 2, 3], &[0, 0, 0]]));
    }

    #[test]
    fn test_rref_rejects_malformed_input() {
        let empty: Matrix<Rational64> = Vec::new();
        assert!(rref(empty).is_err());
        assert!(rref(vec![Vec::<Rational64>::new()]).is_err());
        assert!(rref(m(&[&[1, 2, 3], &[4, 5]])).is_err());
    }
}
