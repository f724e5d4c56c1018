#![allow(non_snake_case)]
use crate::algebra::{AlgebraError, FloatT, SquareMatrix, VectorMath};

/// The pair `(L, U)` of an LU factorization.
///
/// `l` is unit lower triangular and `u` is upper triangular, both of the
/// same size as the factored matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors<T = f64> {
    pub l: SquareMatrix<T>,
    pub u: SquareMatrix<T>,
}

impl<T> LuFactors<T>
where
    T: FloatT,
{
    // Splits an eliminated matrix holding the multipliers below the
    // diagonal and U on and above it.
    fn split(packed: &SquareMatrix<T>) -> Self {
        let n = packed.size();
        let mut l = SquareMatrix::identity(n);
        let mut u = SquareMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if j < i {
                    l[(i, j)] = packed[(i, j)];
                } else {
                    u[(i, j)] = packed[(i, j)];
                }
            }
        }
        Self { l, u }
    }

    pub fn size(&self) -> usize {
        self.l.size()
    }
}

/// LU (Doolittle) factorization without pivoting, `A = LU`.
///
/// Fails with [`AlgebraError::SingularPivot`] if a zero pivot `A(k,k)` is
/// met at elimination step `k < n-1`.  The final diagonal entry of `U` is not
/// checked here; a zero there surfaces when the factors are used in
/// [`lu_solve`](crate::algebra::lu_solve).
pub fn lu_fact<T: FloatT>(A: &SquareMatrix<T>) -> Result<LuFactors<T>, AlgebraError> {
    doolittle(A, T::zero())
}

pub(crate) fn doolittle<T: FloatT>(
    A: &SquareMatrix<T>,
    pivot_tol: T,
) -> Result<LuFactors<T>, AlgebraError> {
    let n = A.size();
    let mut temp = A.clone();

    for k in 0..n.saturating_sub(1) {
        let pivot = temp[(k, k)];
        if pivot.abs() <= pivot_tol {
            return Err(AlgebraError::SingularPivot(k));
        }
        for i in (k + 1)..n {
            // multipliers are stored in place and become L
            let mult = temp[(i, k)] / pivot;
            temp[(i, k)] = mult;
            for j in (k + 1)..n {
                let ukj = temp[(k, j)];
                temp[(i, j)] -= mult * ukj;
            }
        }
    }

    Ok(LuFactors::split(&temp))
}

/// Permutation matrix `P` chosen by scaled partial pivoting, such that `P*A`
/// can be factored by [`lu_fact`] without zero pivots.
///
/// Fails with [`AlgebraError::SingularPivot`] if every candidate pivot in
/// some column is zero.
pub fn reorder<T: FloatT>(A: &SquareMatrix<T>) -> Result<SquareMatrix<T>, AlgebraError> {
    let perm = pivot_order(A, T::zero())?;
    Ok(SquareMatrix::permutation(&perm))
}

/// Row order selected by scaled partial pivoting.
///
/// Row `perm[k]` of `A` is the pivot row of elimination step `k`.  Each
/// candidate row is weighted by the largest absolute value in that row of
/// `A`, ties go to the first candidate in scan order, and rows are only
/// ever permuted logically through `perm`.
pub fn pivot_order<T: FloatT>(
    A: &SquareMatrix<T>,
    pivot_tol: T,
) -> Result<Vec<usize>, AlgebraError> {
    let n = A.size();
    let mut temp = A.clone();
    let mut perm: Vec<usize> = (0..n).collect();

    let scale: Vec<T> = (0..n).map(|r| A.row_slice(r).norm_inf()).collect();

    for k in 0..n.saturating_sub(1) {
        // find the pivot in column k among rows perm[k..n]
        let mut pc = k;
        let mut best = scaled_magnitude(temp[(perm[k], k)], scale[perm[k]]);
        for i in (k + 1)..n {
            let cand = scaled_magnitude(temp[(perm[i], k)], scale[perm[i]]);
            if cand > best {
                best = cand;
                pc = i;
            }
        }
        if best == T::zero() || temp[(perm[pc], k)].abs() <= pivot_tol {
            return Err(AlgebraError::SingularPivot(k));
        }
        perm.swap(k, pc);

        // eliminate the entries logically below the pivot row
        let pk = perm[k];
        for &pi in &perm[(k + 1)..] {
            if temp[(pi, k)] != T::zero() {
                let mult = temp[(pi, k)] / temp[(pk, k)];
                temp[(pi, k)] = mult;
                for j in (k + 1)..n {
                    let ukj = temp[(pk, j)];
                    temp[(pi, j)] -= mult * ukj;
                }
            }
        }
    }

    Ok(perm)
}

// |x| / s, with an all zero row contributing nothing
fn scaled_magnitude<T: FloatT>(x: T, s: T) -> T {
    if s == T::zero() {
        T::zero()
    } else {
        x.abs() / s
    }
}
