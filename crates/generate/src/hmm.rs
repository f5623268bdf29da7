//! Sample-path generation from hidden Markov process definitions.

use crate::error::GenerateError;
use sibyl_process::{Symbol, SymbolMatrices};
use tracing::debug;

/// Tolerance on the sum of the per-step emission weights.
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// A sampled sequence together with the belief state left behind by the run.
///
/// The belief-state history is deliberately *not* accumulated: only the state
/// after the last emission survives (the stationary vector when no symbols
/// were drawn). This matches the long-observed behavior of the generator this
/// library descends from; callers wanting full trajectories should step the
/// update themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct HmmSample {
    /// The emitted symbols, in order.
    pub symbols: Vec<Symbol>,
    /// The belief state after the final emission.
    pub state: Vec<f64>,
}

/// Samples a sequence of symbols from a hidden Markov process definition.
///
/// The belief state starts at the stationary vector of the combined matrix.
/// Each step computes the unnormalized emission weights
/// `w[x] = sum(Ts[x] @ v)`, draws a symbol proportionally, and reweights the
/// belief state by the chosen matrix.
///
/// # Arguments
///
/// * `matrices` - A validated process definition.
/// * `len` - Number of symbols to draw.
/// * `rng` - Random number generator.
///
/// # Errors
///
/// Returns [`GenerateError::Process`] if the stationary vector cannot be
/// computed, or [`GenerateError::InvalidEmissionWeights`] if a step's weights
/// are non-finite, negative, or do not sum to ~1.
#[tracing::instrument(skip(matrices, rng))]
pub fn sample_hmm(
    matrices: &SymbolMatrices,
    len: usize,
    rng: &mut impl rand::Rng,
) -> Result<Vec<Symbol>, GenerateError> {
    let mut out = vec![Symbol::Zero; len];
    sample_hmm_into(matrices, rng, &mut out)?;
    Ok(out)
}

/// Samples symbols into a pre-allocated buffer, filling it entirely.
///
/// Behaves exactly like [`sample_hmm`] with `len == out.len()`.
///
/// # Errors
///
/// Same as [`sample_hmm`].
pub fn sample_hmm_into(
    matrices: &SymbolMatrices,
    rng: &mut impl rand::Rng,
    out: &mut [Symbol],
) -> Result<(), GenerateError> {
    run(matrices, rng, out)?;
    Ok(())
}

/// Samples a sequence and returns the final belief state alongside it.
///
/// See [`HmmSample`] for what "final" means here.
///
/// # Errors
///
/// Same as [`sample_hmm`].
#[tracing::instrument(skip(matrices, rng))]
pub fn sample_hmm_with_state(
    matrices: &SymbolMatrices,
    len: usize,
    rng: &mut impl rand::Rng,
) -> Result<HmmSample, GenerateError> {
    let mut symbols = vec![Symbol::Zero; len];
    let state = run(matrices, rng, &mut symbols)?;
    Ok(HmmSample { symbols, state })
}

/// Core sampling loop. Fills `out` and returns the final belief state.
fn run(
    matrices: &SymbolMatrices,
    rng: &mut impl rand::Rng,
    out: &mut [Symbol],
) -> Result<Vec<f64>, GenerateError> {
    let mut v = matrices.stationary_vector()?;

    for slot in out.iter_mut() {
        let t0 = matrices.matrix(Symbol::Zero).mul_vec(&v);
        let t1 = matrices.matrix(Symbol::One).mul_vec(&v);
        let w0: f64 = t0.iter().sum();
        let w1: f64 = t1.iter().sum();

        if !w0.is_finite()
            || !w1.is_finite()
            || w0 < 0.0
            || w1 < 0.0
            || (w0 + w1 - 1.0).abs() > WEIGHT_TOLERANCE
        {
            return Err(GenerateError::InvalidEmissionWeights { zero: w0, one: w1 });
        }

        // Cumulative draw over the two weights. `u < w0` never selects a
        // zero-weight symbol, so the chosen weight is strictly positive and
        // safe to divide by.
        let u: f64 = rng.random();
        let (symbol, unnormalized, weight) = if u < w0 {
            (Symbol::Zero, t0, w0)
        } else {
            (Symbol::One, t1, w1)
        };

        *slot = symbol;
        v = unnormalized.into_iter().map(|x| x / weight).collect();
    }

    debug!(len = out.len(), "sampled hmm sequence");
    Ok(v)
}
