//! Realizability verdicts over measured Mueller matrices.
//!
//! Two independent tests decide whether a measured matrix could have
//! arisen from a physically admissible scattering process, i.e. whether
//! its coherency matrix is positive-semidefinite:
//!
//! - [`is_realizable_cholesky`] factors the coherency matrix and treats
//!   any factorization failure as "not realizable";
//! - [`is_realizable_charpoly`] checks the signs of the four
//!   characteristic-polynomial coefficients computed directly from the
//!   Mueller entries.
//!
//! The two tests treat the positive-semidefinite boundary differently:
//! the Cholesky route demands strictly positive pivots and therefore
//! rejects singular coherency matrices (ideal polarizers, retarders,
//! the identity, the zero matrix), while the coefficient route accepts
//! exact zeros. The divergence is inherited behavior and is kept as is;
//! callers that care about boundary cases should prefer the coefficient
//! test.

use tracing::debug;

use crate::math::charpoly::charpoly_coefficients;
use crate::math::cholesky::cholesky_lower;
use crate::math::coherency::build_coherency_matrix;
use crate::math::mueller::MuellerMatrix;

/// Options for the characteristic-polynomial test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharpolyOptions {
    /// Emit the four coefficient values as a diagnostic trace.
    pub verbose: bool,
}

/// Realizability via attempted Cholesky factorization of the coherency
/// matrix.
///
/// Returns `true` iff the factorization succeeds, i.e. the coherency
/// matrix is numerically positive-definite. Failure is converted
/// locally to `false` and never surfaced as an error.
pub fn is_realizable_cholesky(m: &MuellerMatrix) -> bool {
    let h = build_coherency_matrix(m);
    cholesky_lower(&h).is_some()
}

/// Realizability via the characteristic-polynomial coefficient signs.
///
/// Returns `true` iff all four coefficients are non-negative, equality
/// included. Comparisons are exact; no tolerance is applied.
pub fn is_realizable_charpoly(m: &MuellerMatrix) -> bool {
    is_realizable_charpoly_with(m, CharpolyOptions::default())
}

/// Like [`is_realizable_charpoly`], with explicit options.
pub fn is_realizable_charpoly_with(
    m: &MuellerMatrix,
    options: CharpolyOptions,
) -> bool {
    let [c1, c2, c3, c4] = charpoly_coefficients(m);
    if options.verbose {
        debug!("C1: {c1}");
        debug!("C2: {c2}");
        debug!("C3: {c3}");
        debug!("C4: {c4}");
    }
    c1 >= 0.0 && c2 >= 0.0 && c3 >= 0.0 && c4 >= 0.0
}
