//! Input validations shared by the public entry points.
//!
//! # Note
//!
//! - Every check here guards a public precondition and fails fast.

use itertools::Itertools;

use crate::{
    common::{check_bit, MinRankError, Shape},
    matrix::GF2Matrix,
};

/// Checks that `rows` is rectangular and contains only `0`/`1` entries.
///
/// Returns the number of columns (`0` if there are no rows).
pub fn check_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<usize, MinRankError> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let cols = first.as_ref().len();
    for (r, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != cols {
            return Err(MinRankError::JaggedRows {
                row: r,
                expected: cols,
                found: row.len(),
            });
        }
        if let Some((c, &value)) = row.iter().find_position(|&&v| check_bit(v).is_none()) {
            return Err(MinRankError::InvalidEntry { row: r, col: c, value });
        }
    }
    Ok(cols)
}

/// Checks that `a` and `b` share the same shape.
pub fn check_same_shape(a: &GF2Matrix, b: &GF2Matrix) -> Result<(), MinRankError> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(MinRankError::DimensionMismatch {
            expected: a.shape(),
            found: b.shape(),
        })
    }
}

/// Checks that all the matrices share the same shape.
///
/// Returns the common shape, or `None` if `matrices` is empty.
pub fn check_uniform(matrices: &[GF2Matrix]) -> Result<Option<Shape>, MinRankError> {
    match matrices.iter().map(GF2Matrix::shape).all_equal_value() {
        Ok(shape) => Ok(Some(shape)),
        Err(None) => Ok(None),
        Err(Some((expected, found))) => Err(MinRankError::DimensionMismatch { expected, found }),
    }
}
