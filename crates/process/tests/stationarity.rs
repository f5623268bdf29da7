use sibyl_process::{ProcessKind, dominant_eigenpair};

// ---------------------------------------------------------------------------
// 1. all_definitions_validate
// ---------------------------------------------------------------------------
#[test]
fn all_definitions_validate() {
    // `matrices()` validates on construction; reaching here means every
    // canonical definition passed the squareness/sign/stochasticity checks.
    for kind in ProcessKind::ALL {
        let pair = kind.matrices();
        assert!(pair.dim() >= 2, "{}: unexpected dimension", kind.name());
    }
}

// ---------------------------------------------------------------------------
// 2. dominant_eigenvalue_is_one
// ---------------------------------------------------------------------------
#[test]
fn dominant_eigenvalue_is_one() {
    for kind in ProcessKind::ALL {
        let (lambda, _) = dominant_eigenpair(&kind.matrices().combined())
            .unwrap_or_else(|e| panic!("{}: eigenpair failed: {e}", kind.name()));
        assert!(
            (lambda.abs() - 1.0).abs() < 1e-9,
            "{}: |lambda| = {}, expected ~1",
            kind.name(),
            lambda.abs()
        );
    }
}

// ---------------------------------------------------------------------------
// 3. stationary_vectors_are_distributions
// ---------------------------------------------------------------------------
#[test]
fn stationary_vectors_are_distributions() {
    for kind in ProcessKind::ALL {
        let pi = kind.matrices().stationary_vector().unwrap();
        let sum: f64 = pi.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{}: sum = {sum}", kind.name());
        for (i, &p) in pi.iter().enumerate() {
            assert!(p >= -1e-12, "{}: pi[{i}] = {p} is negative", kind.name());
        }
    }
}

// ---------------------------------------------------------------------------
// 4. known_stationary_values
// ---------------------------------------------------------------------------
#[test]
fn known_stationary_values() {
    // Solved by hand from T pi = pi with sum(pi) = 1.
    let cases: [(ProcessKind, &[f64]); 4] = [
        (ProcessKind::Even, &[2.0 / 3.0, 1.0 / 3.0]),
        (ProcessKind::Golden, &[2.0 / 3.0, 1.0 / 3.0]),
        (ProcessKind::Sns, &[0.5, 0.5]),
        (ProcessKind::Nemo, &[0.5, 0.25, 0.25]),
    ];
    for (kind, expected) in cases {
        let pi = kind.matrices().stationary_vector().unwrap();
        assert_eq!(pi.len(), expected.len(), "{}", kind.name());
        for (i, (&got, &want)) in pi.iter().zip(expected.iter()).enumerate() {
            assert!(
                (got - want).abs() < 1e-9,
                "{}: pi[{i}] = {got}, expected {want}",
                kind.name()
            );
        }
    }
}
