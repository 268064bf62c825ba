//! Coherency-matrix construction.
//!
//! Every 4x4 real Mueller matrix `M` has an associated 4x4 complex
//! Hermitian coherency matrix `H(M)`, obtained by fixed linear
//! combinations of `M`'s entries. The eigenvalues of `H(M)` being
//! non-negative is the standard necessary-and-sufficient condition for
//! `M` to describe a physically realizable process, which makes `H` the
//! object both realizability tests ultimately reason about.

use nalgebra::Matrix4;
use num_complex::Complex64;

use super::mueller::MuellerMatrix;

/// 4x4 complex Hermitian matrix associated with a Mueller matrix.
pub type CoherencyMatrix = Matrix4<Complex64>;

/// Build the coherency matrix `H(M)` from a measured Mueller matrix.
///
/// The upper triangle and diagonal are direct linear combinations of
/// `M`'s entries; the lower triangle is filled in by conjugate
/// symmetry, so the result is Hermitian by construction and its
/// diagonal imaginary parts are exactly zero. Total over any real 4x4
/// input; the input is not modified.
pub fn build_coherency_matrix(m: &MuellerMatrix) -> CoherencyMatrix {
    let mut h = CoherencyMatrix::zeros();

    h[(0, 0)] = Complex64::new(
        m[(0, 0)] + m[(0, 1)] + m[(1, 0)] + m[(1, 1)],
        0.0,
    );
    h[(0, 1)] =
        Complex64::new(m[(0, 2)] + m[(1, 2)], m[(0, 3)] + m[(1, 3)]);
    h[(0, 2)] =
        Complex64::new(m[(2, 0)] + m[(2, 1)], -(m[(3, 0)] + m[(3, 1)]));
    h[(0, 3)] =
        Complex64::new(m[(2, 2)] + m[(3, 3)], m[(2, 3)] - m[(3, 2)]);

    h[(1, 1)] = Complex64::new(
        m[(0, 0)] - m[(0, 1)] + m[(1, 0)] - m[(1, 1)],
        0.0,
    );
    h[(1, 2)] =
        Complex64::new(m[(2, 2)] - m[(3, 3)], -(m[(2, 3)] + m[(3, 2)]));
    h[(1, 3)] =
        Complex64::new(m[(2, 0)] - m[(2, 1)], -(m[(3, 0)] - m[(3, 1)]));

    h[(2, 2)] = Complex64::new(
        m[(0, 0)] + m[(0, 1)] - m[(1, 0)] - m[(1, 1)],
        0.0,
    );
    h[(2, 3)] =
        Complex64::new(m[(0, 2)] - m[(1, 2)], m[(0, 3)] - m[(1, 3)]);

    h[(3, 3)] = Complex64::new(
        m[(0, 0)] - m[(0, 1)] - m[(1, 0)] + m[(1, 1)],
        0.0,
    );

    for i in 0..4 {
        for j in (i + 1)..4 {
            h[(j, i)] = h[(i, j)].conj();
        }
    }
    h
}
