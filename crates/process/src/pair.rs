//! Symbol-labelled transition matrix pairs.

use crate::error::ProcessError;
use crate::matrix::SquareMatrix;
use crate::spectral;
use crate::symbol::Symbol;

/// Column-sum tolerance for the aggregate stochasticity check.
const STOCHASTIC_TOLERANCE: f64 = 1e-6;

/// A hidden-process definition: one sub-stochastic matrix per emitted symbol.
///
/// Entry `(i, j)` of the symbol-`x` matrix is the probability of moving from
/// hidden state `j` to hidden state `i` while emitting `x`, so the combined
/// matrix `T = Ts[0] + Ts[1]` is column-stochastic. Construction validates
/// this; a `SymbolMatrices` value is immutable and always well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolMatrices {
    zero: SquareMatrix,
    one: SquareMatrix,
}

impl SymbolMatrices {
    /// Builds a validated process definition from its two symbol matrices.
    ///
    /// # Errors
    ///
    /// - [`ProcessError::EmptyMatrix`] if the matrices have dimension zero.
    /// - [`ProcessError::DimensionMismatch`] if the dimensions differ.
    /// - [`ProcessError::NonFiniteEntry`] / [`ProcessError::NegativeEntry`]
    ///   for invalid entries.
    /// - [`ProcessError::NotStochastic`] if any column of the combined matrix
    ///   does not sum to ~1.
    pub fn new(zero: SquareMatrix, one: SquareMatrix) -> Result<Self, ProcessError> {
        if zero.dim() == 0 || one.dim() == 0 {
            return Err(ProcessError::EmptyMatrix);
        }
        if zero.dim() != one.dim() {
            return Err(ProcessError::DimensionMismatch {
                zero_dim: zero.dim(),
                one_dim: one.dim(),
            });
        }
        for (symbol, matrix) in [(Symbol::Zero, &zero), (Symbol::One, &one)] {
            for (row, col, value) in matrix.entries() {
                if !value.is_finite() {
                    return Err(ProcessError::NonFiniteEntry {
                        symbol: symbol.into(),
                        row,
                        col,
                    });
                }
                if value < 0.0 {
                    return Err(ProcessError::NegativeEntry {
                        symbol: symbol.into(),
                        row,
                        col,
                        value,
                    });
                }
            }
        }
        let combined = zero.add(&one);
        for (col, sum) in combined.col_sums().into_iter().enumerate() {
            if (sum - 1.0).abs() > STOCHASTIC_TOLERANCE {
                return Err(ProcessError::NotStochastic { col, sum });
            }
        }
        Ok(Self { zero, one })
    }

    /// Returns the matrix labelled with the given symbol.
    pub fn matrix(&self, symbol: Symbol) -> &SquareMatrix {
        match symbol {
            Symbol::Zero => &self.zero,
            Symbol::One => &self.one,
        }
    }

    /// Returns the hidden-state dimension.
    pub fn dim(&self) -> usize {
        self.zero.dim()
    }

    /// Returns the combined matrix `T = Ts[0] + Ts[1]`.
    pub fn combined(&self) -> SquareMatrix {
        self.zero.add(&self.one)
    }

    /// Computes the stationary vector of the combined matrix.
    ///
    /// This is the dominant eigenvector of `T`, normalized so its entries
    /// sum to 1. For a validated definition the entries are non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::NoConvergence`] if the combined matrix is
    /// periodic (tied dominant eigenvalues), or [`ProcessError::ZeroVector`]
    /// if normalization degenerates.
    pub fn stationary_vector(&self) -> Result<Vec<f64>, ProcessError> {
        let (_eigenvalue, v) = spectral::dominant_eigenpair(&self.combined())?;
        spectral::normalize_to_sum_one(&v)
    }
}
