//! Dense matrix over GF(2).

use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Display, Formatter},
};

use fixedbitset::FixedBitSet;

use crate::{
    common::{check_bit, MinRankError, Shape},
    internal::validate,
};

/// Rectangular matrix over GF(2), stored as a sequence of row bitsets.
///
/// All rows have exactly `cols` bits. A matrix without rows has no columns.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GF2Matrix {
    /// Number of columns, kept explicitly as there may be no rows to read it from.
    cols: usize,
    /// Row vectors.
    data: Vec<FixedBitSet>,
}

impl GF2Matrix {
    /// Creates the `rows` x `cols` zero matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        Self {
            cols,
            data: vec![FixedBitSet::with_capacity(cols); rows],
        }
    }

    /// Creates the `n` x `n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut ret = Self::zeros(n, n);
        for (i, row) in ret.data.iter_mut().enumerate() {
            row.insert(i);
        }
        ret
    }

    /// Creates a matrix from row vectors of `0`/`1` entries.
    ///
    /// # Errors
    ///
    /// - [`MinRankError::JaggedRows`] if the rows differ in length.
    /// - [`MinRankError::InvalidEntry`] if an entry is neither `0` nor `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MinRankError> {
        let cols = validate::check_rows(rows)?;
        let mut data = vec![FixedBitSet::with_capacity(cols); rows.len()];
        for (dst, src) in data.iter_mut().zip(rows) {
            for (c, &v) in src.as_ref().iter().enumerate() {
                dst.set(c, v == 1);
            }
        }
        Ok(Self { cols, data })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> Shape {
        (self.rows(), self.cols)
    }

    /// Returns the entry at `(r, c)` as `0` or `1`.
    ///
    /// # Panics
    ///
    /// If `(r, c)` is out of range.
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> u8 {
        assert!(c < self.cols, "column out of range: {c} >= {}", self.cols);
        u8::from(self.data[r][c])
    }

    /// Sets the entry at `(r, c)`.
    ///
    /// # Errors
    ///
    /// [`MinRankError::InvalidEntry`] if `value` is neither `0` nor `1`.
    ///
    /// # Panics
    ///
    /// If `(r, c)` is out of range.
    pub fn set(&mut self, r: usize, c: usize, value: u8) -> Result<(), MinRankError> {
        assert!(c < self.cols, "column out of range: {c} >= {}", self.cols);
        let bit = check_bit(value).ok_or(MinRankError::InvalidEntry {
            row: r,
            col: c,
            value,
        })?;
        self.data[r].set(c, bit);
        Ok(())
    }

    /// Row `r` as a bitset of length `cols`.
    #[must_use]
    pub fn row(&self, r: usize) -> &FixedBitSet {
        &self.data[r]
    }

    pub(crate) fn row_bitsets(&self) -> &[FixedBitSet] {
        &self.data
    }

    pub(crate) fn row_bitsets_mut(&mut self) -> &mut [FixedBitSet] {
        &mut self.data
    }

    /// Expands the matrix into row vectors of `0`/`1` entries.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.data
            .iter()
            .map(|row| (0..self.cols).map(|c| u8::from(row[c])).collect())
            .collect()
    }

    /// `true` if every entry is `0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(FixedBitSet::is_clear)
    }
}

impl Display for GF2Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            f.write_str("[")?;
            for c in 0..self.cols {
                if c > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(if row[c] { "1" } else { "0" })?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl Debug for GF2Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut work = BTreeMap::new();
        for (r, row) in self.data.iter().enumerate() {
            let mut s = String::with_capacity(self.cols);
            for c in 0..self.cols {
                s.push(if row[c] { '1' } else { '0' });
            }
            work.insert(r, s);
        }
        f.debug_struct("GF2Matrix")
            .field("rows", &self.rows())
            .field("cols", &self.cols)
            .field("data", &work)
            .finish()
    }
}
