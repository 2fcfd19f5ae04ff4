#[derive(thiserror::Error, Debug)]
pub enum SLESolverError {
    /// Input failed shape validation: empty matrix, zero-length row, or rows
    /// of unequal length. Raised before any reduction step runs.
    #[error("MalformedMatrix: {0}")]
    MalformedMatrix(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Row index {row} out of bounds for a matrix with {rows} rows")]
    RowIndexOutOfBounds { row: usize, rows: usize },
    #[error("Column index {column} out of bounds for a matrix with {columns} columns")]
    ColumnIndexOutOfBounds { column: usize, columns: usize },
}
