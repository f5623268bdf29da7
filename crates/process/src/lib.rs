//! Named stochastic process definitions for sequence generation.
//!
//! This crate carries the data model for hidden Markov-like binary sources:
//! the two-letter emission alphabet, symbol-labelled transition matrix pairs,
//! a small spectral routine for stationary distributions, and a library of
//! four canonical named processes (even, golden mean, simple nonunifilar
//! source, nemo).
//!
//! # Quick start
//!
//! ```rust
//! use sibyl_process::ProcessKind;
//!
//! let pair = ProcessKind::from_name("even").unwrap().matrices();
//! let pi = pair.stationary_vector().unwrap();
//!
//! let sum: f64 = pi.iter().sum();
//! assert!((sum - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod library;
pub mod matrix;
pub mod pair;
pub mod spectral;
pub mod symbol;

pub use error::ProcessError;
pub use library::ProcessKind;
pub use matrix::SquareMatrix;
pub use pair::SymbolMatrices;
pub use spectral::dominant_eigenpair;
pub use symbol::Symbol;
