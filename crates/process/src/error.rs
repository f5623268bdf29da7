//! Error types for the sibyl-process crate.

/// Error type for all fallible operations in the sibyl-process crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProcessError {
    /// Returned when a matrix literal is not square.
    #[error("matrix is not square: {rows} rows but row {bad_row} has {cols} columns")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Index of the offending row.
        bad_row: usize,
        /// Length of the offending row.
        cols: usize,
    },

    /// Returned when a matrix has dimension zero.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// Returned when the two symbol matrices disagree in dimension.
    #[error("dimension mismatch: symbol-0 matrix is {zero_dim}x{zero_dim}, symbol-1 matrix is {one_dim}x{one_dim}")]
    DimensionMismatch {
        /// Dimension of the symbol-0 matrix.
        zero_dim: usize,
        /// Dimension of the symbol-1 matrix.
        one_dim: usize,
    },

    /// Returned when a symbol matrix contains a NaN or infinite entry.
    #[error("symbol-{symbol} matrix entry ({row}, {col}) is not finite")]
    NonFiniteEntry {
        /// Emitted symbol the matrix is labelled with (0 or 1).
        symbol: u8,
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// Returned when a symbol matrix contains a negative entry.
    #[error("symbol-{symbol} matrix entry ({row}, {col}) is negative: {value}")]
    NegativeEntry {
        /// Emitted symbol the matrix is labelled with (0 or 1).
        symbol: u8,
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the combined matrix is not column-stochastic.
    #[error("combined matrix column {col} sums to {sum}, expected ~1.0")]
    NotStochastic {
        /// The offending column.
        col: usize,
        /// The column sum.
        sum: f64,
    },

    /// Returned when power iteration fails to settle on a dominant eigenvector.
    #[error("power iteration did not converge after {iterations} iterations")]
    NoConvergence {
        /// Number of iterations attempted.
        iterations: usize,
    },

    /// Returned when an iterate or eigenvector collapses to (numerically) zero
    /// and cannot be normalized.
    #[error("vector has (numerically) zero mass and cannot be normalized")]
    ZeroVector,
}
