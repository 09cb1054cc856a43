use thiserror::Error;

pub type Result<T> = std::result::Result<T, Gf2Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Gf2Error {
    /// A row or matrix does not have the column count it is combined with.
    #[error("shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("column {column} is out of range for a matrix with {column_count} columns")]
    ColumnOutOfRange { column: usize, column_count: usize },

    #[error("row {row} is out of range for a matrix with {row_count} rows")]
    RowOutOfRange { row: usize, row_count: usize },

    /// A character that is neither a bit nor a separator was found while parsing.
    #[error("invalid character {0:?} in bit matrix")]
    InvalidCharacter(char),
}
