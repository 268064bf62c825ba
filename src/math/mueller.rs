//! Mueller-matrix representation and canonical optical elements.
//!
//! A Mueller matrix is a 4x4 real matrix mapping an incident Stokes
//! vector to an outgoing one. No invariant is enforced on construction;
//! whether a given matrix corresponds to a physical process is exactly
//! what the realizability tests in `core` decide.

use nalgebra::{Matrix4, Vector4};

/// 4x4 real matrix acting on Stokes vectors, indexed `m[(row, col)]`.
pub type MuellerMatrix = Matrix4<f64>;

/// Input-validation failures for runtime-shaped data.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MuellerError {
    #[error("expected 16 matrix entries, got {0}")]
    InvalidLength(usize),
}

/// Build a Mueller matrix from 16 row-major entries.
///
/// The fixed-size API enforces the 4x4 shape at the type level; this is
/// the checked entry point for data whose length is only known at
/// runtime.
pub fn mueller_from_slice(
    entries: &[f64],
) -> Result<MuellerMatrix, MuellerError> {
    if entries.len() != 16 {
        return Err(MuellerError::InvalidLength(entries.len()));
    }
    Ok(MuellerMatrix::from_row_slice(entries))
}

/// Ideal linear polarizer with transmission axis at `theta` radians.
pub fn linear_polarizer(theta: f64) -> MuellerMatrix {
    let c = (2.0 * theta).cos();
    let s = (2.0 * theta).sin();
    MuellerMatrix::new(
        1.0, c, s, 0.0, //
        c, c * c, c * s, 0.0, //
        s, c * s, s * s, 0.0, //
        0.0, 0.0, 0.0, 0.0,
    ) * 0.5
}

/// Ideal linear retarder with horizontal fast axis and retardance
/// `delta` radians.
pub fn retarder(delta: f64) -> MuellerMatrix {
    let c = delta.cos();
    let s = delta.sin();
    MuellerMatrix::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, c, s, //
        0.0, 0.0, -s, c,
    )
}

/// Isotropic depolarizer scaling the polarized Stokes components by `p`.
///
/// `p = 1` is the identity (no transformation); `p = 0` fully
/// depolarizes.
pub fn depolarizer(p: f64) -> MuellerMatrix {
    MuellerMatrix::from_diagonal(&Vector4::new(1.0, p, p, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_round_trips_row_major_entries() {
        let entries: Vec<f64> = (0..16).map(f64::from).collect();
        let m = mueller_from_slice(&entries).unwrap();
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(0, 3)], 3.0);
        assert_eq!(m[(3, 0)], 12.0);
        assert_eq!(m[(3, 3)], 15.0);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert_eq!(
            mueller_from_slice(&[1.0; 15]),
            Err(MuellerError::InvalidLength(15))
        );
        assert_eq!(
            mueller_from_slice(&[]),
            Err(MuellerError::InvalidLength(0))
        );
    }

    #[test]
    fn horizontal_polarizer_entries() {
        let m = linear_polarizer(0.0);
        assert_eq!(m[(0, 0)], 0.5);
        assert_eq!(m[(0, 1)], 0.5);
        assert_eq!(m[(1, 0)], 0.5);
        assert_eq!(m[(1, 1)], 0.5);
        // Everything outside the top-left 2x2 block vanishes.
        for i in 0..4 {
            for j in 0..4 {
                if i > 1 || j > 1 {
                    assert_eq!(m[(i, j)], 0.0, "({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn unit_depolarizer_is_identity() {
        assert_eq!(depolarizer(1.0), MuellerMatrix::identity());
        assert_eq!(retarder(0.0), MuellerMatrix::identity());
    }
}
