//! Randomized balanced a^n b^n block sequences.

use crate::error::GenerateError;
use rand_distr::{Distribution, Poisson};
use sibyl_process::Symbol;
use tracing::debug;

/// Samples a concatenation of balanced blocks.
///
/// Draws `n_blocks` block lengths `k ~ Poisson(mu) + 1` and emits, for each,
/// `k` [`Symbol::Zero`]s followed by `k` [`Symbol::One`]s, in draw order.
/// `mu == 0` is the degenerate rate: every block has length 1, so the output
/// is `n_blocks` copies of `[Zero, One]`.
///
/// # Arguments
///
/// * `n_blocks` - Number of blocks to generate.
/// * `mu` - Poisson rate for the block-length draws.
/// * `rng` - Random number generator.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidRate`] if `mu` is NaN, infinite, or
/// negative.
#[tracing::instrument(skip(rng))]
pub fn sample_anbn(
    n_blocks: usize,
    mu: f64,
    rng: &mut impl rand::Rng,
) -> Result<Vec<Symbol>, GenerateError> {
    if !mu.is_finite() || mu < 0.0 {
        return Err(GenerateError::InvalidRate { mu });
    }

    // `Poisson::new` rejects a zero rate, so the degenerate case is drawn
    // as a constant instead.
    let poisson = if mu == 0.0 {
        None
    } else {
        Some(Poisson::new(mu).map_err(|_| GenerateError::InvalidRate { mu })?)
    };

    let mut out = Vec::new();
    for _ in 0..n_blocks {
        let draw = match &poisson {
            Some(dist) => dist.sample(rng) as usize,
            None => 0,
        };
        let k = draw + 1;
        out.extend(std::iter::repeat_n(Symbol::Zero, k));
        out.extend(std::iter::repeat_n(Symbol::One, k));
    }

    debug!(n_blocks, len = out.len(), "sampled balanced block sequence");
    Ok(out)
}
