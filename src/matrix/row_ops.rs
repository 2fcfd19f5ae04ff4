use num_traits::Zero;

use crate::errors::SLESolverError;
use crate::matrix::{Matrix, Row};
use crate::scalar::Scalar;

/// Swaps rows `r1` and `r2` of the matrix.
///
/// # Errors
///
/// Returns `SLESolverError::RowIndexOutOfBounds` when either index names no
/// row.
pub fn swap_rows<T: Scalar>(
    mut a: Matrix<T>,
    r1: usize,
    r2: usize,
) -> Result<Matrix<T>, SLESolverError> {
    let rows = a.len();
    if r1 >= rows {
        return Err(SLESolverError::RowIndexOutOfBounds { row: r1, rows });
    }
    if r2 >= rows {
        return Err(SLESolverError::RowIndexOutOfBounds { row: r2, rows });
    }
    a.swap(r1, r2);
    Ok(a)
}

/// Multiplies every entry of a row by the scalar, producing a new row.
pub fn scale_row<T: Scalar>(row: &[T], s: &T) -> Row<T> {
    row.iter().map(|v| v.clone() * s.clone()).collect()
}

/// Elementwise sum of two rows, producing a new row.
///
/// # Errors
///
/// Returns `SLESolverError::DimensionMismatch` if the rows have different
/// lengths.
pub fn add_rows<T: Scalar>(a: &[T], b: &[T]) -> Result<Row<T>, SLESolverError> {
    if a.len() != b.len() {
        return Err(SLESolverError::DimensionMismatch(format!(
            "Row lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| x.clone() + y.clone())
        .collect())
}

/// A·x where A is an m×n matrix and x is a length-n vector.
/// Returns an m-vector.
///
/// # Errors
///
/// Returns `SLESolverError::DimensionMismatch` if the vector length does not
/// match the column count, or if a row is ragged.
pub fn matrix_vector_mul<T: Scalar>(a: &Matrix<T>, x: &[T]) -> Result<Row<T>, SLESolverError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(SLESolverError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = Vec::with_capacity(m);
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(SLESolverError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
        let mut sum = T::zero();
        for (aij, xj) in row.iter().zip(x) {
            sum = sum + aij.clone() * xj.clone();
        }
        y.push(sum);
    }
    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Rational64;

    fn row(values: &[i64]) -> Row<Rational64> {
        values.iter().map(|&v| Rational64::from_integer(v)).collect()
    }

    #[test]
    fn test_swap_rows() {
        let a = vec![row(&[1, 2, 3]), row(&[4, 5, 6]), row(&[7, 8, 9])];
        let swapped = swap_rows(a, 2, 0).unwrap();
        assert_eq!(
            swapped,
            vec![row(&[7, 8, 9]), row(&[4, 5, 6]), row(&[1, 2, 3])]
        );
    }

    #[test]
    fn test_swap_rows_out_of_bounds() {
        let a = vec![row(&[1, 2])];
        assert!(swap_rows(a, 0, 1).is_err());
    }

    #[test]
    fn test_scale_row() {
        // row 1 of [[1,2,3],[0,0,1]] times 3
        let r = row(&[0, 0, 1]);
        assert_eq!(scale_row(&r, &Rational64::from_integer(3)), row(&[0, 0, 3]));
    }

    #[test]
    fn test_add_rows() {
        let sum = add_rows(&row(&[1, 2, 3]), &row(&[2, 0, -1])).unwrap();
        assert_eq!(sum, row(&[3, 2, 2]));
    }

    #[test]
    fn test_add_rows_dimension_mismatch() {
        assert!(add_rows(&row(&[1, 2, 3]), &row(&[1, 2])).is_err());
    }

    #[test]
    fn test_matrix_vector_mul() {
        let a = vec![row(&[1, 2]), row(&[3, 4])];
        let x = row(&[5, 6]);
        // R1: 1*5 + 2*6 = 17, R2: 3*5 + 4*6 = 39
        assert_eq!(matrix_vector_mul(&a, &x).unwrap(), row(&[17, 39]));
    }

    #[test]
    fn test_matrix_vector_mul_dimension_mismatch() {
        let a = vec![row(&[1, 2]), row(&[3, 4])];
        let x = row(&[5, 6, 7]);
        assert!(matrix_vector_mul(&a, &x).is_err());
    }
}
