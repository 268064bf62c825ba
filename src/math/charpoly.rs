//! Closed-form characteristic-polynomial coefficients.
//!
//! The four scalars computed here are the coefficients of the monic
//! degree-4 characteristic polynomial of the coherency matrix `H(M)`,
//! expanded symbolically so the test never has to materialize `H` or
//! run an eigensolver. The expressions are kept exactly in their
//! published collected form, term for term, rather than re-derived or
//! simplified; `C1..C4` have degrees 1 through 4 in the entries of `M`.

use super::mueller::MuellerMatrix;

fn sq(x: f64) -> f64 {
    x * x
}

/// Coefficients `[C1, C2, C3, C4]` of the characteristic polynomial of
/// the coherency matrix associated with `m`.
///
/// Under the sign convention fixed by these formulas, all four
/// coefficients are non-negative iff every eigenvalue of the coherency
/// matrix is non-negative. Total over any real 4x4 input; pure.
pub fn charpoly_coefficients(m: &MuellerMatrix) -> [f64; 4] {
    let m00 = m[(0, 0)];
    let m01 = m[(0, 1)];
    let m02 = m[(0, 2)];
    let m03 = m[(0, 3)];
    let m10 = m[(1, 0)];
    let m11 = m[(1, 1)];
    let m12 = m[(1, 2)];
    let m13 = m[(1, 3)];
    let m20 = m[(2, 0)];
    let m21 = m[(2, 1)];
    let m22 = m[(2, 2)];
    let m23 = m[(2, 3)];
    let m30 = m[(3, 0)];
    let m31 = m[(3, 1)];
    let m32 = m[(3, 2)];
    let m33 = m[(3, 3)];

    let c1 = m00;

    let c2 = 3.0 * sq(m00) - sq(m01) - sq(m02) - sq(m03)
        - sq(m10) - sq(m11) - sq(m12) - sq(m13)
        - sq(m20) - sq(m21) - sq(m22) - sq(m23)
        - sq(m30) - sq(m31) - sq(m32) - sq(m33);

    let c3 = 4.0 * m00.powi(3)
        + (-4.0 * sq(m01) - 4.0 * sq(m02) - 4.0 * sq(m03)
            + 4.0 * sq(m10) - 4.0 * sq(m11) - 4.0 * sq(m12) - 4.0 * sq(m13)
            + 4.0 * sq(m20) - 4.0 * sq(m21) - 4.0 * sq(m22) - 4.0 * sq(m23)
            + 4.0 * sq(m30) - 4.0 * sq(m31) - 4.0 * sq(m32) - 4.0 * sq(m33))
            * m00
        + (8.0 * m10 * m11 + 8.0 * m20 * m21 + 8.0 * m30 * m31) * m01
        + (8.0 * m10 * m12 + 8.0 * m20 * m22 + 8.0 * m30 * m32) * m02
        + (8.0 * m10 * m13 + 8.0 * m20 * m23 + 8.0 * m30 * m33) * m03
        + (8.0 * m22 * m33 - 8.0 * m23 * m32) * m11
        + (-8.0 * m21 * m33 + 8.0 * m23 * m31) * m12
        + 8.0 * m13 * (m21 * m32 - m22 * m31);

    let c4 = m00.powi(4) + m01.powi(4) + m02.powi(4) + m10.powi(4)
        + m11.powi(4) + m12.powi(4) + m20.powi(4) + m21.powi(4)
        + m22.powi(4) + m03.powi(4) + m13.powi(4) + m23.powi(4)
        + 8.0 * m22 * m23 * m32 * m33
        - 8.0 * m30 * (m21 * m31 + m22 * m32 + m23 * m33) * m20
        + 8.0 * m31 * (m22 * m32 + m23 * m33) * m21
        + 8.0 * m13 * (m22 * m23 + m32 * m33) * m12
        + sq(sq(m30) - sq(m31) - sq(m32) - sq(m33))
        + (2.0 * sq(m30) - 2.0 * sq(m31) - 2.0 * sq(m32) + 2.0 * sq(m33))
            * sq(m23)
        + (2.0 * sq(m23) + 2.0 * sq(m30) - 2.0 * sq(m31) + 2.0 * sq(m32)
            - 2.0 * sq(m33))
            * sq(m22)
        + (2.0 * sq(m22) + 2.0 * sq(m23) + 2.0 * sq(m30) + 2.0 * sq(m31)
            - 2.0 * sq(m32) - 2.0 * sq(m33))
            * sq(m21)
        + (-2.0 * sq(m21) - 2.0 * sq(m22) - 2.0 * sq(m23) + 2.0 * sq(m30)
            + 2.0 * sq(m31) + 2.0 * sq(m32) + 2.0 * sq(m33))
            * sq(m20)
        + (2.0 * sq(m20) - 2.0 * sq(m21) - 2.0 * sq(m22) + 2.0 * sq(m23)
            + 2.0 * sq(m30) - 2.0 * sq(m31) - 2.0 * sq(m32) + 2.0 * sq(m33))
            * sq(m13)
        + (2.0 * sq(m13) + 2.0 * sq(m20) - 2.0 * sq(m21) + 2.0 * sq(m22)
            - 2.0 * sq(m23) + 2.0 * sq(m30) - 2.0 * sq(m31) + 2.0 * sq(m32)
            - 2.0 * sq(m33))
            * sq(m12)
        + ((8.0 * m21 * m22 + 8.0 * m31 * m32) * m12
            + 8.0 * m13 * (m21 * m23 + m31 * m33))
            * m11
        + (2.0 * sq(m12) + 2.0 * sq(m13) + 2.0 * sq(m20) + 2.0 * sq(m21)
            - 2.0 * sq(m22) - 2.0 * sq(m23) + 2.0 * sq(m30) + 2.0 * sq(m31)
            - 2.0 * sq(m32) - 2.0 * sq(m33))
            * sq(m11)
        + ((-8.0 * m20 * m21 - 8.0 * m30 * m31) * m11
            + (-8.0 * m20 * m22 - 8.0 * m30 * m32) * m12
            - 8.0 * m13 * (m20 * m23 + m30 * m33))
            * m10
        + (-2.0 * sq(m11) - 2.0 * sq(m12) - 2.0 * sq(m13) + 2.0 * sq(m20)
            + 2.0 * sq(m21) + 2.0 * sq(m22) + 2.0 * sq(m23) + 2.0 * sq(m30)
            + 2.0 * sq(m31) + 2.0 * sq(m32) + 2.0 * sq(m33))
            * sq(m10)
        + ((-8.0 * m21 * m32 + 8.0 * m22 * m31) * m10
            + (8.0 * m20 * m32 - 8.0 * m22 * m30) * m11
            + 8.0 * m12 * (-m20 * m31 + m21 * m30))
            * m03
        + (-2.0 * sq(m10) + 2.0 * sq(m11) + 2.0 * sq(m12) - 2.0 * sq(m13)
            - 2.0 * sq(m20) + 2.0 * sq(m21) + 2.0 * sq(m22) - 2.0 * sq(m23)
            - 2.0 * sq(m30) + 2.0 * sq(m31) + 2.0 * sq(m32) - 2.0 * sq(m33))
            * sq(m03)
        + ((-8.0 * m12 * m13 - 8.0 * m22 * m23 - 8.0 * m32 * m33) * m03
            + (8.0 * m21 * m33 - 8.0 * m23 * m31) * m10
            + (-8.0 * m20 * m33 + 8.0 * m23 * m30) * m11
            - 8.0 * m13 * (-m20 * m31 + m21 * m30))
            * m02
        + (2.0 * sq(m03) - 2.0 * sq(m10) + 2.0 * sq(m11) - 2.0 * sq(m12)
            + 2.0 * sq(m13) - 2.0 * sq(m20) + 2.0 * sq(m21) - 2.0 * sq(m22)
            + 2.0 * sq(m23) - 2.0 * sq(m30) + 2.0 * sq(m31) - 2.0 * sq(m32)
            + 2.0 * sq(m33))
            * sq(m02)
        + ((-8.0 * m11 * m12 - 8.0 * m21 * m22 - 8.0 * m31 * m32) * m02
            + (-8.0 * m11 * m13 - 8.0 * m21 * m23 - 8.0 * m31 * m33) * m03
            + (-8.0 * m22 * m33 + 8.0 * m23 * m32) * m10
            + (8.0 * m20 * m33 - 8.0 * m23 * m30) * m12
            + 8.0 * m13 * (-m20 * m32 + m22 * m30))
            * m01
        + (2.0 * sq(m02) + 2.0 * sq(m03) - 2.0 * sq(m10) - 2.0 * sq(m11)
            + 2.0 * sq(m12) + 2.0 * sq(m13) - 2.0 * sq(m20) - 2.0 * sq(m21)
            + 2.0 * sq(m22) + 2.0 * sq(m23) - 2.0 * sq(m30) - 2.0 * sq(m31)
            + 2.0 * sq(m32) + 2.0 * sq(m33))
            * sq(m01)
        + ((8.0 * m10 * m11 + 8.0 * m20 * m21 + 8.0 * m30 * m31) * m01
            + (8.0 * m10 * m12 + 8.0 * m20 * m22 + 8.0 * m30 * m32) * m02
            + (8.0 * m10 * m13 + 8.0 * m20 * m23 + 8.0 * m30 * m33) * m03
            + (8.0 * m22 * m33 - 8.0 * m23 * m32) * m11
            + (-8.0 * m21 * m33 + 8.0 * m23 * m31) * m12
            + 8.0 * m13 * (m21 * m32 - m22 * m31))
            * m00
        + (-2.0 * sq(m01) - 2.0 * sq(m02) - 2.0 * sq(m03) - 2.0 * sq(m10)
            - 2.0 * sq(m11) - 2.0 * sq(m12) - 2.0 * sq(m13) - 2.0 * sq(m20)
            - 2.0 * sq(m21) - 2.0 * sq(m22) - 2.0 * sq(m23) - 2.0 * sq(m30)
            - 2.0 * sq(m31) - 2.0 * sq(m32) - 2.0 * sq(m33))
            * sq(m00);

    [c1, c2, c3, c4]
}
