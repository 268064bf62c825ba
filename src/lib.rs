//! Physical realizability tests for measured Mueller matrices.
//!
//! A measured 4x4 Mueller matrix describes how an optical system maps
//! incident Stokes vectors to outgoing ones. Measurement noise can
//! produce matrices no physical scattering process could generate; this
//! crate decides realizability through the matrix's associated complex
//! Hermitian coherency matrix, whose eigenvalues must all be
//! non-negative for the process to be admissible.
//!
//! Two independent verdicts are offered:
//!
//! - [`is_realizable_cholesky`]: builds the coherency matrix and
//!   attempts a Cholesky factorization; success means positive-definite.
//! - [`is_realizable_charpoly`]: evaluates the coherency matrix's four
//!   characteristic-polynomial coefficients in closed form straight
//!   from the Mueller entries and requires all of them to be
//!   non-negative.
//!
//! The tests disagree on the positive-semidefinite boundary: a
//! rank-deficient coherency matrix (ideal polarizer, ideal retarder,
//! the identity) passes the coefficient test but fails the strict
//! Cholesky one. That asymmetry is inherited, deliberate, and
//! documented on the [`core::realizability`] module.
//!
//! Every operation is a pure, synchronous function over a borrowed
//! matrix; there is no shared state and concurrent use needs no
//! coordination.

pub mod core;
pub mod math;

pub use crate::core::realizability::{
    is_realizable_charpoly, is_realizable_charpoly_with,
    is_realizable_cholesky, CharpolyOptions,
};
pub use crate::math::charpoly::charpoly_coefficients;
pub use crate::math::coherency::{build_coherency_matrix, CoherencyMatrix};
pub use crate::math::mueller::{
    depolarizer, linear_polarizer, mueller_from_slice, retarder,
    MuellerError, MuellerMatrix,
};
