//! __denselu__ is a small dense linear algebra library built around the LU
//! factorization of square matrices.
//!
//! It provides generic bounds checked containers ([`Sequence`](algebra::Sequence)
//! and the row major [`Grid`](algebra::Grid)) and the floating point types
//! [`NumericVector`](algebra::NumericVector) and
//! [`SquareMatrix`](algebra::SquareMatrix) built on them.  For a square matrix
//! $A$ the library computes
//!
//! * the Doolittle factorization $A = LU$ ([`lu_fact`](algebra::lu_fact)),
//! * a row order for scaled partial pivoting ([`reorder`](algebra::reorder)),
//! * solutions of $LUx = b$ ([`lu_solve`](algebra::lu_solve)),
//! * the inverse $A^{-1}$ and the condition number $\lVert A^{-1}\rVert_1 \lVert A\rVert_1$,
//!
//! together with the one, two (Frobenius) and uniform norms.
//!
//! ```
//! use denselu::algebra::*;
//!
//! let A = SquareMatrix::from(&[[4f64, 3.], [6., 3.]]);
//! let LuFactors { l, u } = lu_fact(&A).unwrap();
//! assert_eq!(l.matmul(&u).unwrap(), A);
//!
//! let Ainv = A.inverse().unwrap();
//! assert!((Ainv[(1, 1)] + 2. / 3.).abs() < 1e-12);
//! ```
//!
//! Failures are reported through [`AlgebraError`](algebra::AlgebraError) and
//! never terminate the process.  A zero pivot surfaces as
//! [`AlgebraError::SingularPivot`](algebra::AlgebraError::SingularPivot).
//!
//! # Features
//!
//! * `serde` (default): `Serialize`/`Deserialize` for all containers and
//!   for [`LuSettings`](algebra::LuSettings), and JSON file I/O through
//!   [`JsonReadWrite`](io::JsonReadWrite).

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
