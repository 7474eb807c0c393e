//! Random matrix generation for demonstrations.
//!
//! The random source is always supplied by the caller so that runs can be
//! reproduced from a seed.

use rand::Rng;

use crate::matrix::GF2Matrix;

/// Generates a `rows` x `cols` matrix of independent uniform bits.
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> GF2Matrix {
    let mut ret = GF2Matrix::zeros(rows, cols);
    for row in ret.row_bitsets_mut() {
        for c in 0..cols {
            row.set(c, rng.random::<bool>());
        }
    }
    ret
}

/// Generates `k` independent `rows` x `cols` random matrices.
pub fn random_matrix_set<R: Rng + ?Sized>(
    rng: &mut R,
    k: usize,
    rows: usize,
    cols: usize,
) -> Vec<GF2Matrix> {
    (0..k).map(|_| random_matrix(rng, rows, cols)).collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_random_matrix_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        let m = random_matrix(&mut rng, 3, 7);
        assert_eq!(m.shape(), (3, 7));
        assert!(m.to_rows().iter().flatten().all(|&v| v <= 1));
    }

    #[test]
    fn test_random_matrix_reproducible() {
        let a = random_matrix_set(&mut StdRng::seed_from_u64(42), 4, 6, 6);
        let b = random_matrix_set(&mut StdRng::seed_from_u64(42), 4, 6, 6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_random_matrix_seed_sensitive() {
        let a = random_matrix_set(&mut StdRng::seed_from_u64(1), 4, 8, 8);
        let b = random_matrix_set(&mut StdRng::seed_from_u64(2), 4, 8, 8);
        assert_ne!(a, b);
    }
}
