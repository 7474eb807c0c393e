//! Brute-force MinRank search over GF(2).
//!
//! Given `k` matrices of identical shape, the search looks for a nonzero GF(2)
//! linear combination whose rank does not exceed a threshold by trying every
//! nonzero coefficient vector. The algebra it is built on is exposed as well.
#![warn(clippy::pedantic)]

#[macro_use]
mod internal;

pub mod algebra;
pub mod common;
pub mod generate;
pub mod matrix;
pub mod minrank;
pub mod report;

pub use algebra::{add, linear_combination, pivot_columns, rank, scalar_multiply};
pub use common::{Coeffs, MinRankError, Shape};
pub use matrix::GF2Matrix;
pub use minrank::{
    brute_force_min_rank, coeffs_of, MinRankSearch, MinRankSolution, SearchConfig, DEFAULT_MAX_K,
};
