//! The library of canonical named processes.
//!
//! Four small finite-state stochastic sources standard in information-theory
//! pedagogy: the even process, the golden mean process, the simple
//! nonunifilar source, and the nemo process.

use crate::matrix::SquareMatrix;
use crate::pair::SymbolMatrices;

/// Names of the canonical process definitions shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    /// Even process: maximal interior runs of 1s have even length.
    Even,
    /// Golden mean process (with the conventional 0/1 roles swapped: the
    /// forbidden word is `00`).
    Golden,
    /// Simple nonunifilar source.
    Sns,
    /// Nemo process (three hidden states).
    Nemo,
}

impl ProcessKind {
    /// All four processes in registry order.
    pub const ALL: [ProcessKind; 4] = [Self::Even, Self::Golden, Self::Sns, Self::Nemo];

    /// Returns the registry name of this process.
    pub fn name(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Golden => "golden",
            Self::Sns => "sns",
            Self::Nemo => "nemo",
        }
    }

    /// Looks up a process by registry name.
    ///
    /// Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Builds the canonical transition matrix pair for this process.
    pub fn matrices(self) -> SymbolMatrices {
        let (zero, one) = match self {
            Self::Even => (
                mat(&[&[0.5, 0.0], &[0.0, 0.0]]),
                mat(&[&[0.0, 1.0], &[0.5, 0.0]]),
            ),
            Self::Golden => (
                mat(&[&[0.0, 0.0], &[0.5, 0.0]]),
                mat(&[&[0.5, 1.0], &[0.0, 0.0]]),
            ),
            Self::Sns => (
                mat(&[&[0.5, 0.0], &[0.5, 0.5]]),
                mat(&[&[0.0, 0.5], &[0.0, 0.0]]),
            ),
            Self::Nemo => (
                mat(&[&[0.0, 0.0, 0.5], &[0.5, 0.0, 0.0], &[0.0, 1.0, 0.0]]),
                mat(&[&[0.5, 0.0, 0.5], &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]]),
            ),
        };
        // The four shipped definitions are fixed constants known to pass
        // validation; see the stationarity integration tests.
        SymbolMatrices::new(zero, one).expect("canonical definition is well-formed")
    }
}

/// Builds a matrix from a canonical row literal.
fn mat(rows: &[&[f64]]) -> SquareMatrix {
    SquareMatrix::from_rows(rows).expect("canonical matrix literal is square")
}
