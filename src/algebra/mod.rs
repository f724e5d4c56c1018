//! Dense linear algebra containers and LU based routines.
//!
//! Storage comes in two generic layers, the 1-D [`Sequence`] and the row
//! major 2-D [`Grid`].  The numeric types [`NumericVector`] and
//! [`SquareMatrix`] wrap these and add norms, products, the LU
//! factorization and everything built on it.

mod error_types;
mod floats;
mod grid;
mod lu;
mod matrix_traits;
mod numeric_vector;
mod sequence;
mod square;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use grid::*;
pub use lu::*;
pub use matrix_traits::*;
pub use numeric_vector::*;
pub use sequence::*;
pub use square::*;
pub use vecmath::*;

#[cfg(test)]
mod tests;
