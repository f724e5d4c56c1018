#![allow(non_snake_case)]
use crate::algebra::{AlgebraError, FloatT, NumericVector, ShapedMatrix, SquareMatrix};

/// Solves `LUx = b` by forward substitution through `L` followed by back
/// substitution through `U`.
///
/// `L` is taken to be unit lower triangular, so its diagonal is never read.
/// Fails with [`AlgebraError::IncompatibleSize`] if the operands disagree in
/// size and with [`AlgebraError::SingularPivot`] if `U` has a zero on its
/// diagonal.
pub fn lu_solve<T: FloatT>(
    L: &SquareMatrix<T>,
    U: &SquareMatrix<T>,
    b: &NumericVector<T>,
) -> Result<NumericVector<T>, AlgebraError> {
    check_solve_dims(L, U, b)?;
    let mut x = b.clone();
    forward_substitute(L, x.as_mut_slice());
    back_substitute(U, x.as_mut_slice(), T::zero())?;
    Ok(x)
}

pub(crate) fn check_solve_dims<T: FloatT>(
    L: &SquareMatrix<T>,
    U: &SquareMatrix<T>,
    b: &NumericVector<T>,
) -> Result<(), AlgebraError> {
    if L.size() != U.size() {
        return Err(AlgebraError::incompatible(
            (L.nrows(), L.ncols()),
            (U.nrows(), U.ncols()),
        ));
    }
    if b.len() != L.size() {
        return Err(AlgebraError::incompatible(
            (L.nrows(), L.ncols()),
            (b.len(), 1),
        ));
    }
    Ok(())
}

// solves Ly = x in place for unit lower triangular L
pub(crate) fn forward_substitute<T: FloatT>(L: &SquareMatrix<T>, x: &mut [T]) {
    let n = L.size();
    assert_eq!(x.len(), n);
    for i in 1..n {
        for j in 0..i {
            let xj = x[j];
            x[i] -= L[(i, j)] * xj;
        }
    }
}

// solves Uy = x in place for upper triangular U
pub(crate) fn back_substitute<T: FloatT>(
    U: &SquareMatrix<T>,
    x: &mut [T],
    pivot_tol: T,
) -> Result<(), AlgebraError> {
    let n = U.size();
    assert_eq!(x.len(), n);
    for i in (0..n).rev() {
        for j in (i + 1)..n {
            let xj = x[j];
            x[i] -= U[(i, j)] * xj;
        }
        let d = U[(i, i)];
        if d.abs() <= pivot_tol {
            return Err(AlgebraError::SingularPivot(i));
        }
        x[i] /= d;
    }
    Ok(())
}
