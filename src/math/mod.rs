pub mod charpoly;
pub mod cholesky;
pub mod coherency;
pub mod mueller;

pub use charpoly::charpoly_coefficients;
pub use cholesky::cholesky_lower;
pub use coherency::{build_coherency_matrix, CoherencyMatrix};
pub use mueller::{
    depolarizer, linear_polarizer, mueller_from_slice, retarder,
    MuellerError, MuellerMatrix,
};
