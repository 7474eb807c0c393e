//! Common functionalities.

use thiserror::Error;

/// Matrix dimensions as `(rows, cols)`.
pub type Shape = (usize, usize);

/// Coefficient vector over GF(2), one entry (`0` or `1`) per matrix.
pub type Coeffs = Vec<u8>;

/// Error type for the algebra and search operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinRankError {
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch { expected: Shape, found: Shape },
    #[error("{coeffs} coefficients given for {matrices} matrices")]
    LengthMismatch { matrices: usize, coeffs: usize },
    #[error("scalar {0} is not an element of GF(2)")]
    InvalidScalar(u8),
    #[error("entry ({row}, {col}) = {value} is not an element of GF(2)")]
    InvalidEntry { row: usize, col: usize, value: u8 },
    #[error("row {row} has {found} columns, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{k} matrices exceed the search limit of {max_k}")]
    TooManyMatrices { k: usize, max_k: usize },
    #[error("search cancelled before combination {combo}")]
    Cancelled { combo: u64 },
}

/// Checks that `value` is an element of GF(2).
pub(crate) fn check_bit(value: u8) -> Option<bool> {
    match value {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}
