//! Human-readable rendering of a search.

use std::fmt::Write;

use crate::{matrix::GF2Matrix, minrank::MinRankSolution};

/// Renders the input matrices labelled `M1`, `M2`, ...
#[must_use]
pub fn render_matrices(matrices: &[GF2Matrix]) -> String {
    let mut out = String::from("Generated matrices over GF(2):\n");
    for (i, m) in matrices.iter().enumerate() {
        // Writing to a String never fails
        let _ = write!(out, "M{}:\n{m}\n", i + 1);
    }
    out
}

/// Renders the outcome of a search with threshold `max_rank`.
#[must_use]
pub fn render_outcome(max_rank: usize, outcome: Option<&MinRankSolution>) -> String {
    let Some(sol) = outcome else {
        return format!("No combination with rank <= {max_rank} found\n");
    };
    let mut out = String::new();
    let _ = writeln!(out, "Found coefficients giving rank <= {max_rank}");
    let _ = writeln!(out, "Coefficients: {:?}\n", sol.coeffs);
    let _ = writeln!(out, "Linear combination (resulting matrix):");
    let _ = write!(out, "{}", sol.matrix);
    let _ = writeln!(out, "Rank = {}", sol.rank);
    out
}
