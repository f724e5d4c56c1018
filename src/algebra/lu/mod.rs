//! LU factorization, substitution and inversion for [`SquareMatrix`](crate::algebra::SquareMatrix).
//!
//! The free functions [`lu_fact`], [`lu_solve`] and [`reorder`] are the
//! building blocks.  [`LuSolver`] combines them with a settings object and
//! an output stream, and is what `SquareMatrix::inverse` uses internally.

mod factor;
mod settings;
mod solve;
mod solver;

pub use factor::*;
pub use settings::*;
pub use solve::*;
pub use solver::*;
