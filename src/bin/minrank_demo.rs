//! MinRank brute-force demonstration.
//!
//! Generates a seeded random set of GF(2) matrices and searches for a nonzero
//! linear combination of low rank.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin minrank-demo -- --matrices 5 --rows 6 --cols 6 --max-rank 3 --seed 42
//! RUST_LOG=minrank=debug cargo run --bin minrank-demo
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use minrank::{generate, report, MinRankSearch, SearchConfig, DEFAULT_MAX_K};

#[derive(Parser, Debug)]
#[command(name = "minrank-demo")]
#[command(about = "Brute-force MinRank search over random GF(2) matrices")]
struct Args {
    /// Number of matrices.
    #[arg(short = 'k', long, default_value = "5")]
    matrices: usize,

    /// Rows per matrix.
    #[arg(short = 'n', long, default_value = "6")]
    rows: usize,

    /// Columns per matrix.
    #[arg(short = 'm', long, default_value = "6")]
    cols: usize,

    /// Largest acceptable rank.
    #[arg(short = 'r', long, default_value = "3")]
    max_rank: usize,

    /// Random seed. Drawn from the OS if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Largest number of matrices the search accepts.
    #[arg(long, default_value_t = DEFAULT_MAX_K)]
    max_k: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed: {seed}");
    println!("Seed: {seed}\n");

    let mut rng = StdRng::seed_from_u64(seed);
    let matrices = generate::random_matrix_set(&mut rng, args.matrices, args.rows, args.cols);
    print!("{}", report::render_matrices(&matrices));

    let search = MinRankSearch::new(SearchConfig::new(args.max_k));
    let outcome = search
        .run(&matrices, args.max_rank)
        .context("MinRank search failed")?;
    print!("{}", report::render_outcome(args.max_rank, outcome.as_ref()));
    Ok(())
}
