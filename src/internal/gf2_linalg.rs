//! Gauss-Jordan elimination over GF(2).

use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Formatter},
    ops::DerefMut,
};

use fixedbitset::FixedBitSet;

/// Row reduction of a GF(2) matrix.
#[derive(PartialEq, Eq)]
pub struct GF2Elimination<W: DerefMut<Target = [FixedBitSet]>> {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Rank of the matrix. Available after elimination.
    rank: Option<usize>,
    /// Pivot column of each pivot row, in row order.
    pivots: Vec<usize>,
    /// Working storage reduced in place.
    /// Compatible with both owned and borrowed storage.
    work: W,
}

impl<W: DerefMut<Target = [FixedBitSet]>> GF2Elimination<W> {
    /// Attaches to the existing working storage.
    ///
    /// # Arguments
    ///
    /// - `work`: Rows to be reduced. Overwritten by the elimination.
    /// - `cols`: Number of columns. Needed as `work` may have no rows.
    ///
    /// # Panics
    ///
    /// If some row of `work` is not `cols` bits long.
    pub fn attach(work: W, cols: usize) -> Self {
        assert!(
            work.iter().all(|row| row.len() == cols),
            "work is jagged or inconsistent with cols"
        );
        Self {
            rows: work.len(),
            cols,
            rank: None,
            pivots: Vec::new(),
            work,
        }
    }

    /// Finds the first row at or below `r` with `1` in column `c`.
    fn find_pivot(&self, r: usize, c: usize) -> Option<usize> {
        (r..self.rows).find(|&i| self.work[i][c])
    }

    /// Clears column `c` in every row except `r`.
    fn clear_column(&mut self, r: usize, c: usize) {
        for rr in 0..self.rows {
            if rr == r || !self.work[rr][c] {
                continue;
            }
            let [src, dst] = self.work.get_disjoint_mut([r, rr]).expect("r != rr");
            dst.symmetric_difference_with(src);
        }
    }

    /// Reduces `work` to the reduced row echelon form.
    ///
    /// A column without pivot candidate is skipped while staying on the same row.
    /// Guaranteed to be no-op if already eliminated.
    fn eliminate(&mut self) {
        if self.rank.is_some() {
            return;
        }
        let mut c = 0;
        let mut r = 0;
        while r < self.rows {
            if c >= self.cols {
                break;
            }
            let Some(p) = self.find_pivot(r, c) else {
                // Retry the same row against the next column
                c += 1;
                continue;
            };
            self.work.swap(r, p);
            self.clear_column(r, c);
            self.pivots.push(c);
            c += 1;
            r += 1;
        }
        self.rank = Some(r);
        debug_assert!(self.validate());
    }

    /// Validates the reduced row echelon form.
    ///
    /// Fails if `eliminate` is not called yet.
    fn validate(&self) -> bool {
        let rank = self.rank.expect("rank already known here");
        if self.pivots.len() != rank || !self.pivots.iter().is_sorted_by(|a, b| a < b) {
            return false;
        }
        for (i, &c) in self.pivots.iter().enumerate() {
            for (r, row) in self.work.iter().enumerate() {
                if row[c] != (r == i) {
                    return false;
                }
            }
            if self.work[i].count_ones(..c) != 0 {
                return false;
            }
        }
        self.work[rank..self.rows].iter().all(FixedBitSet::is_clear)
    }

    /// Rank of the attached matrix.
    ///
    /// Elimination is performed only if not done yet.
    pub fn rank(&mut self) -> usize {
        self.eliminate();
        self.rank.expect("rank already known here")
    }

    /// Pivot columns in row order.
    ///
    /// Elimination is performed only if not done yet.
    pub fn pivots(&mut self) -> &[usize] {
        self.eliminate();
        &self.pivots
    }
}

impl<W: DerefMut<Target = [FixedBitSet]>> Debug for GF2Elimination<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut ret = f.debug_struct("GF2Elimination");
        ret.field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("rank", &self.rank)
            .field("pivots", &self.pivots);
        let mut work = BTreeMap::new();
        for (r, row) in self.work.iter().enumerate() {
            let mut s = String::with_capacity(self.cols);
            for c in 0..self.cols {
                s.push(if row[c] { '1' } else { '0' });
            }
            work.insert(r, s);
        }
        ret.field("work", &work);
        ret.finish()
    }
}
