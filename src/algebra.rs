//! GF(2) matrix algebra.
//!
//! All operations are pure: inputs are only read and results are freshly allocated.

use crate::{
    common::{check_bit, MinRankError},
    internal::{gf2_linalg::GF2Elimination, validate},
    matrix::GF2Matrix,
};

/// Adds two matrices over GF(2), i.e., XORs them entrywise.
///
/// # Errors
///
/// [`MinRankError::DimensionMismatch`] if the shapes of `a` and `b` differ.
pub fn add(a: &GF2Matrix, b: &GF2Matrix) -> Result<GF2Matrix, MinRankError> {
    validate::check_same_shape(a, b)?;
    let mut ret = a.clone();
    add_assign(&mut ret, b);
    Ok(ret)
}

/// `acc += other`, shapes assumed to match.
fn add_assign(acc: &mut GF2Matrix, other: &GF2Matrix) {
    debug_assert_eq!(acc.shape(), other.shape());
    for (dst, src) in acc.row_bitsets_mut().iter_mut().zip(other.row_bitsets()) {
        dst.symmetric_difference_with(src);
    }
}

/// Multiplies `a` by a scalar of GF(2).
///
/// `0` gives the zero matrix of the same shape, `1` a copy of `a`.
///
/// # Errors
///
/// [`MinRankError::InvalidScalar`] if `scalar` is neither `0` nor `1`.
pub fn scalar_multiply(scalar: u8, a: &GF2Matrix) -> Result<GF2Matrix, MinRankError> {
    match check_bit(scalar) {
        Some(false) => Ok(GF2Matrix::zeros(a.rows(), a.cols())),
        Some(true) => Ok(a.clone()),
        None => Err(MinRankError::InvalidScalar(scalar)),
    }
}

/// Computes `sum(coeffs[i] * matrices[i])` over GF(2).
///
/// Terms are accumulated in index order, starting from the zero matrix.
/// An empty list gives the `0` x `0` matrix.
///
/// # Errors
///
/// - [`MinRankError::LengthMismatch`] if `coeffs` and `matrices` differ in length.
/// - [`MinRankError::DimensionMismatch`] if the matrices differ in shape.
/// - [`MinRankError::InvalidScalar`] if a coefficient is neither `0` nor `1`.
pub fn linear_combination(
    matrices: &[GF2Matrix],
    coeffs: &[u8],
) -> Result<GF2Matrix, MinRankError> {
    if matrices.len() != coeffs.len() {
        return Err(MinRankError::LengthMismatch {
            matrices: matrices.len(),
            coeffs: coeffs.len(),
        });
    }
    let (rows, cols) = validate::check_uniform(matrices)?.unwrap_or_default();
    let mut acc = GF2Matrix::zeros(rows, cols);
    for (m, &a) in matrices.iter().zip(coeffs) {
        let term = scalar_multiply(a, m)?;
        add_assign(&mut acc, &term);
    }
    Ok(acc)
}

/// Computes the rank of `m` over GF(2) by Gauss-Jordan elimination.
///
/// The elimination runs on a private copy; `m` is left untouched.
/// Matrices without rows or columns have rank `0`.
#[must_use]
pub fn rank(m: &GF2Matrix) -> usize {
    GF2Elimination::attach(m.row_bitsets().to_vec(), m.cols()).rank()
}

/// Pivot columns of the reduced row echelon form of `m`, in increasing order.
///
/// The number of pivot columns equals [`rank`].
#[must_use]
pub fn pivot_columns(m: &GF2Matrix) -> Vec<usize> {
    let mut elim = GF2Elimination::attach(m.row_bitsets().to_vec(), m.cols());
    elim.pivots().to_vec()
}
