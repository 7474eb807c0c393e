//! Testing utilities.

use std::{collections::HashSet, sync::LazyLock};

use fixedbitset::FixedBitSet;
use rand::Rng;

use crate::matrix::GF2Matrix;

/// Creates a [`GF2Matrix`] from row literals, e.g. `gf2![[1, 0], [0, 1]]`.
macro_rules! gf2 {
    ($([$($v:expr),* $(,)?]),* $(,)?) => {
        $crate::matrix::GF2Matrix::from_rows::<::std::vec::Vec<u8>>(&[$(::std::vec![$($v),*]),*])
            .expect("valid test matrix")
    };
}

/// Random `rows` x `cols` matrix, each entry set with probability `p`.
pub fn rand_matrix(rows: usize, cols: usize, p: f64) -> GF2Matrix {
    assert!((0.0..=1.0).contains(&p));
    let mut rng = rand::rng();
    let mut ret = GF2Matrix::zeros(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            if rng.random::<f64>() < p {
                ret.set(r, c, 1).expect("0 or 1");
            }
        }
    }
    ret
}

/// Rank computed by enumerating the row space.
///
/// # Note
///
/// - Exponential in the number of rows, only for cross-checking.
pub fn span_rank(m: &GF2Matrix) -> usize {
    let rows = m.rows();
    assert!(rows <= 12, "too many rows for span enumeration");
    let mut span = HashSet::new();
    for mask in 0..1_usize << rows {
        let mut acc = FixedBitSet::with_capacity(m.cols());
        for r in (0..rows).filter(|r| mask >> r & 1 == 1) {
            acc.symmetric_difference_with(m.row(r));
        }
        span.insert(acc);
    }
    // |span| = 2^rank
    span.len().trailing_zeros() as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub matrices: Vec<GF2Matrix>,
    pub max_rank: usize,
}

pub static CASE0: LazyLock<TestCase> = LazyLock::new(|| {
    // Single rank-1 matrix, nothing below rank 1
    TestCase {
        matrices: vec![gf2![[1, 0], [0, 0]]],
        max_rank: 0,
    }
});

pub static CASE1: LazyLock<TestCase> = LazyLock::new(|| {
    // I + I = 0
    TestCase {
        matrices: vec![gf2![[1, 0], [0, 1]], gf2![[1, 0], [0, 1]]],
        max_rank: 0,
    }
});

pub static CASE2: LazyLock<TestCase> = LazyLock::new(|| {
    // M1 = M2, M3 unrelated
    TestCase {
        matrices: vec![
            gf2![[1, 1, 0], [0, 1, 1], [1, 0, 0]],
            gf2![[1, 1, 0], [0, 1, 1], [1, 0, 0]],
            gf2![[0, 0, 1], [1, 0, 1], [0, 1, 0]],
        ],
        max_rank: 0,
    }
});

pub static CASE3: LazyLock<TestCase> = LazyLock::new(|| {
    // Ranks 3, 2, 3 alone; M1 + M2 has rank 1
    TestCase {
        matrices: vec![
            gf2![[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            gf2![[0, 0, 0], [0, 1, 0], [0, 0, 1]],
            gf2![[0, 1, 0], [0, 0, 1], [1, 0, 0]],
        ],
        max_rank: 1,
    }
});
