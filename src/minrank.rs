//! Brute-force MinRank search over GF(2).
//!
//! # Bit layout
//!
//! Candidates are encoded as an integer `combo`: bit `i` of `combo` is the
//! coefficient of `matrices[i]` (bit 0 is the least significant).
//! Candidates are examined in increasing order of `combo`, skipping `0`, so the
//! returned solution is always the lowest-numbered one.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    algebra,
    common::{Coeffs, MinRankError},
    internal::validate,
    matrix::GF2Matrix,
};

/// Default upper bound on the number of matrices.
pub const DEFAULT_MAX_K: usize = 24;

/// Hard upper bound on the number of matrices, set by the width of `combo`.
pub const COMBO_BITS: usize = 63;

/// Limits of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest number of matrices accepted. Clamped to [`COMBO_BITS`].
    pub max_k: usize,
}

impl SearchConfig {
    #[must_use]
    pub fn new(max_k: usize) -> Self {
        Self { max_k }
    }

    /// Effective bound after clamping.
    #[must_use]
    pub fn effective_max_k(&self) -> usize {
        self.max_k.min(COMBO_BITS)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_K)
    }
}

/// Low-rank combination found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinRankSolution {
    /// Coefficient of each input matrix.
    pub coeffs: Coeffs,
    /// `sum(coeffs[i] * matrices[i])`.
    pub matrix: GF2Matrix,
    /// Rank of `matrix`.
    pub rank: usize,
    /// Integer encoding of `coeffs`.
    pub combo: u64,
}

/// Decodes `combo` into a coefficient vector of length `k`.
#[must_use]
pub fn coeffs_of(combo: u64, k: usize) -> Coeffs {
    debug_assert!(k <= COMBO_BITS);
    (0..k).map(|i| u8::from(combo >> i & 1 == 1)).collect()
}

/// Exhaustive MinRank searcher.
#[derive(Debug, Clone, Default)]
pub struct MinRankSearch<'a> {
    config: SearchConfig,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> MinRankSearch<'a> {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Makes the search abortable.
    ///
    /// `flag` is polled before each candidate; once it reads `true`, the search
    /// stops with [`MinRankError::Cancelled`].
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Finds the first nonzero combination of `matrices` with rank at most `max_rank`.
    ///
    /// Returns `Ok(None)` if there is no such combination, including when
    /// `matrices` is empty.
    ///
    /// # Errors
    ///
    /// - [`MinRankError::DimensionMismatch`] if the matrices differ in shape.
    /// - [`MinRankError::TooManyMatrices`] if `matrices` exceeds the configured bound.
    /// - [`MinRankError::Cancelled`] if the cancel flag is raised.
    #[tracing::instrument(skip(self, matrices), fields(k = matrices.len()))]
    pub fn run(
        &self,
        matrices: &[GF2Matrix],
        max_rank: usize,
    ) -> Result<Option<MinRankSolution>, MinRankError> {
        let k = matrices.len();
        let Some(shape) = validate::check_uniform(matrices)? else {
            tracing::debug!("empty matrix set");
            return Ok(None);
        };
        let max_k = self.config.effective_max_k();
        if k > max_k {
            return Err(MinRankError::TooManyMatrices { k, max_k });
        }
        tracing::debug!("shape: {shape:?}");
        for combo in 1..1_u64 << k {
            if self.cancelled() {
                tracing::debug!("cancelled at combo {combo}");
                return Err(MinRankError::Cancelled { combo });
            }
            let coeffs = coeffs_of(combo, k);
            let matrix = algebra::linear_combination(matrices, &coeffs)?;
            let rank = algebra::rank(&matrix);
            tracing::trace!("combo {combo:#b}: rank {rank}");
            if rank <= max_rank {
                tracing::debug!("found at combo {combo}: coeffs {coeffs:?}, rank {rank}");
                return Ok(Some(MinRankSolution {
                    coeffs,
                    matrix,
                    rank,
                    combo,
                }));
            }
        }
        tracing::debug!("no combination found");
        Ok(None)
    }
}

/// Finds the first nonzero combination of `matrices` with rank at most `max_rank`,
/// using [`SearchConfig::default`].
///
/// # Errors
///
/// See [`MinRankSearch::run`].
pub fn brute_force_min_rank(
    matrices: &[GF2Matrix],
    max_rank: usize,
) -> Result<Option<MinRankSolution>, MinRankError> {
    MinRankSearch::new(SearchConfig::default()).run(matrices, max_rank)
}
