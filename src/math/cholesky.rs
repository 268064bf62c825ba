//! Small-matrix Cholesky factorization for Hermitian inputs.
//!
//! The realizability check only ever factors the fixed-size 4x4
//! coherency matrix, so the decomposition is written out directly over
//! that type with an `Option` as the failure signal instead of going
//! through a general solver.

use num_complex::Complex64;

use super::coherency::CoherencyMatrix;

/// Attempt the factorization `H = L * L^H` for a Hermitian `h`.
///
/// Returns the lower-triangular factor `L` with real positive diagonal,
/// or `None` as soon as a pivot fails to be strictly positive (which
/// also covers non-finite pivots). Only the real parts of the diagonal
/// are consulted; for a Hermitian input they carry the whole value.
///
/// ```text
/// [h00, h01*, h02*, h03*]   [l00,   0,   0,   0]
/// [h01, h11,  h12*, h13*] = [l10, l11,   0,   0] * L^H
/// [h02, h12,  h22,  h23*]   [l20, l21, l22,   0]
/// [h03, h13,  h23,  h33 ]   [l30, l31, l32, l33]
/// ```
pub fn cholesky_lower(h: &CoherencyMatrix) -> Option<CoherencyMatrix> {
    let mut l = CoherencyMatrix::zeros();
    for j in 0..4 {
        let mut pivot = h[(j, j)].re;
        for k in 0..j {
            pivot -= l[(j, k)].norm_sqr();
        }
        if !(pivot > 0.0) {
            return None;
        }
        let d = pivot.sqrt();
        l[(j, j)] = Complex64::new(d, 0.0);
        for i in (j + 1)..4 {
            let mut s = h[(i, j)];
            for k in 0..j {
                s -= l[(i, k)] * l[(j, k)].conj();
            }
            l[(i, j)] = s / d;
        }
    }
    Some(l)
}
