use super::realizability::{
    is_realizable_charpoly, is_realizable_charpoly_with,
    is_realizable_cholesky, CharpolyOptions,
};
use crate::math::charpoly::charpoly_coefficients;
use crate::math::mueller::{
    depolarizer, linear_polarizer, retarder, MuellerMatrix,
};
use std::f64::consts::FRAC_PI_2;

/// Convex mixture of a partial depolarizer and a polarizer: the
/// depolarizer part keeps the coherency matrix strictly positive-
/// definite, so both tests agree on `true`.
fn mixed_scattering_process() -> MuellerMatrix {
    depolarizer(0.5) * 0.5 + linear_polarizer(0.0) * 0.5
}

#[test]
fn both_tests_accept_strictly_positive_process() {
    let m = depolarizer(0.5);
    assert!(is_realizable_cholesky(&m));
    assert!(is_realizable_charpoly(&m));

    let m = mixed_scattering_process();
    assert!(is_realizable_cholesky(&m));
    assert!(is_realizable_charpoly(&m));
}

#[test]
fn both_tests_reject_indefinite_matrix() {
    // diag(1, p, p, p) with p = -0.5 has coherency eigenvalue
    // 1 + 3p = -0.5.
    let m = depolarizer(-0.5);
    assert!(!is_realizable_cholesky(&m));
    assert!(!is_realizable_charpoly(&m));

    // At least one coefficient must have gone negative for the
    // coefficient test to reject.
    let c = charpoly_coefficients(&m);
    assert!(c.iter().any(|&ck| ck < 0.0));
}

#[test]
fn singular_coherency_splits_the_tests() {
    // Fully polarizing elements have rank-deficient coherency matrices:
    // the coefficient test accepts the zero eigenvalues, the strict
    // Cholesky route does not. Fixtures here are chosen so the
    // coefficients come out exactly zero in f64; rotated elements land
    // within roundoff of zero and the exact comparisons then report
    // whatever side of the boundary the noise falls on.
    for m in [MuellerMatrix::identity(), linear_polarizer(0.0)] {
        assert!(is_realizable_charpoly(&m));
        assert!(!is_realizable_cholesky(&m));
    }
}

#[test]
fn cholesky_rejects_pure_retarder() {
    // For any retarder the coherency matrix has an exactly-zero second
    // diagonal entry, so the factorization fails at the second pivot.
    assert!(!is_realizable_cholesky(&retarder(FRAC_PI_2)));
    assert!(!is_realizable_cholesky(&retarder(1.1)));
}

#[test]
fn zero_matrix_splits_the_tests() {
    let m = MuellerMatrix::zeros();
    assert!(is_realizable_charpoly(&m));
    assert!(!is_realizable_cholesky(&m));
}

#[test]
fn verbose_flag_does_not_change_the_verdict() {
    for m in [depolarizer(0.5), depolarizer(-0.5), linear_polarizer(0.3)]
    {
        let verbose = CharpolyOptions { verbose: true };
        assert_eq!(
            is_realizable_charpoly_with(&m, verbose),
            is_realizable_charpoly(&m),
        );
    }
}

#[test]
fn verdicts_are_deterministic_and_leave_input_unchanged() {
    let m = mixed_scattering_process();
    let copy = m;

    let cholesky = is_realizable_cholesky(&m);
    let charpoly = is_realizable_charpoly(&m);
    for _ in 0..3 {
        assert_eq!(is_realizable_cholesky(&m), cholesky);
        assert_eq!(is_realizable_charpoly(&m), charpoly);
    }
    assert_eq!(m, copy);
}
