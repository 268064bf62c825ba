pub mod realizability;

pub use realizability::{
    is_realizable_charpoly, is_realizable_charpoly_with,
    is_realizable_cholesky, CharpolyOptions,
};

#[cfg(test)]
mod tests;
