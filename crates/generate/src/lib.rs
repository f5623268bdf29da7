//! Sequence generators for hidden Markov-like stochastic processes.
//!
//! Two generators over the binary alphabet from [`sibyl_process`]:
//!
//! - [`sample_hmm`] draws a sample path from a symbol-labelled transition
//!   matrix pair, starting the belief state at the stationary vector.
//! - [`sample_anbn`] draws a randomized balanced `a^n b^n` sequence with
//!   Poisson-distributed block lengths.
//!
//! Both take a caller-supplied `rand::Rng`, so seeded runs are reproducible.
//!
//! # Quick start
//!
//! ```rust
//! use sibyl_generate::{make_rng, sample_hmm};
//! use sibyl_process::ProcessKind;
//!
//! let pair = ProcessKind::Golden.matrices();
//! let mut rng = make_rng(Some(10));
//!
//! let seq = sample_hmm(&pair, 10, &mut rng).unwrap();
//! assert_eq!(seq.len(), 10);
//! ```

mod anbn;
mod error;
mod hmm;

pub use anbn::sample_anbn;
pub use error::GenerateError;
pub use hmm::{HmmSample, sample_hmm, sample_hmm_into, sample_hmm_with_state};

use rand::SeedableRng;

/// Builds a seeded or OS-sourced RNG.
pub fn make_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rngs_agree() {
        use rand::Rng;
        let mut a = make_rng(Some(5));
        let mut b = make_rng(Some(5));
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }
}
