//! Error types for the sibyl-generate crate.

use sibyl_process::ProcessError;

/// Error type for all fallible operations in the sibyl-generate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Propagated from the process definition layer (validation, spectral).
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Returned when per-step emission weights are not a valid distribution.
    #[error("emission weights ({zero}, {one}) are not a probability distribution")]
    InvalidEmissionWeights {
        /// Unnormalized weight of emitting 0.
        zero: f64,
        /// Unnormalized weight of emitting 1.
        one: f64,
    },

    /// Returned when a Poisson rate is NaN, infinite, or negative.
    #[error("invalid Poisson rate: {mu} (must be finite and >= 0)")]
    InvalidRate {
        /// The offending rate.
        mu: f64,
    },
}
