//! Dominant-eigenpair computation by power iteration.
//!
//! The matrices this library deals with are small (2x2 or 3x3) aggregate
//! transition matrices whose dominant eigenvalue is real and simple, so a
//! plain power method with L1 normalization is sufficient. Matrices whose
//! dominant eigenvalues tie in magnitude (periodic chains, rotations) make
//! the iterate oscillate and are reported as [`ProcessError::NoConvergence`].

use crate::error::ProcessError;
use crate::matrix::SquareMatrix;

/// Maximum number of power iterations before giving up.
const MAX_ITERATIONS: usize = 500;

/// Convergence threshold on the max-norm change of the normalized iterate.
const TOLERANCE: f64 = 1e-13;

/// Computes the dominant eigenvalue and eigenvector of a square matrix.
///
/// The returned vector is L1-normalized (`sum(|v_i|) == 1`); its sign is an
/// artifact of the iteration and not meaningful on its own. The eigenvalue is
/// a Rayleigh-quotient estimate taken at the converged iterate.
///
/// # Errors
///
/// - [`ProcessError::EmptyMatrix`] for a 0x0 matrix.
/// - [`ProcessError::ZeroVector`] if an iterate collapses to zero mass
///   (e.g. the zero matrix, or a matrix annihilating the start vector).
/// - [`ProcessError::NoConvergence`] if the iterate has not settled after
///   the iteration budget.
pub fn dominant_eigenpair(matrix: &SquareMatrix) -> Result<(f64, Vec<f64>), ProcessError> {
    let n = matrix.dim();
    if n == 0 {
        return Err(ProcessError::EmptyMatrix);
    }

    let mut v = vec![1.0 / n as f64; n];
    for _ in 0..MAX_ITERATIONS {
        let w = matrix.mul_vec(&v);
        let mass: f64 = w.iter().map(|x| x.abs()).sum();
        if mass <= f64::MIN_POSITIVE {
            return Err(ProcessError::ZeroVector);
        }
        let next: Vec<f64> = w.iter().map(|x| x / mass).collect();

        let delta = v
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);
        v = next;

        if delta < TOLERANCE {
            let eigenvalue = rayleigh_quotient(matrix, &v);
            return Ok((eigenvalue, v));
        }
    }

    Err(ProcessError::NoConvergence {
        iterations: MAX_ITERATIONS,
    })
}

/// Rayleigh-quotient eigenvalue estimate `(v . Mv) / (v . v)` at `v`.
fn rayleigh_quotient(matrix: &SquareMatrix, v: &[f64]) -> f64 {
    let mv = matrix.mul_vec(v);
    let num: f64 = v.iter().zip(mv.iter()).map(|(a, b)| a * b).sum();
    let den: f64 = v.iter().map(|a| a * a).sum();
    num / den
}

/// Normalizes a vector so its entries sum to 1.
///
/// This is the stationary-vector normalization: unlike the L1 scaling inside
/// the power method it divides by the *signed* sum, so a Perron vector keeps
/// non-negative entries.
///
/// # Errors
///
/// Returns [`ProcessError::ZeroVector`] if the entries sum to (numerically)
/// zero.
pub fn normalize_to_sum_one(v: &[f64]) -> Result<Vec<f64>, ProcessError> {
    let sum: f64 = v.iter().sum();
    if sum.abs() <= f64::MIN_POSITIVE {
        return Err(ProcessError::ZeroVector);
    }
    Ok(v.iter().map(|x| x / sum).collect())
}
