#![allow(non_snake_case)]
use crate::algebra::error_types::checked_dim;
use crate::algebra::grid::display_grid;
use crate::algebra::{
    lu_fact, AlgebraError, FloatT, Grid, LuSolver, NumericVector, ShapedMatrix, VectorMath,
};
use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// Dense `n x n` matrix of floating point values.
///
/// Wraps a row major [`Grid`] that is square by construction.  This is the
/// type the LU routines ([`lu_fact`], [`lu_solve`](crate::algebra::lu_solve),
/// [`reorder`](crate::algebra::reorder)) and the inverse / condition number
/// computations operate on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SquareMatrix<T = f64> {
    grid: Grid<T>,
}

impl<T> SquareMatrix<T>
where
    T: FloatT,
{
    /// `n x n` matrix of zeros.  Panics if `n * n` overflows `usize`.
    pub fn new(n: usize) -> Self {
        Self {
            grid: Grid::new(n, n),
        }
    }

    /// Matrix of zeros from an externally supplied size.
    ///
    /// Fails with [`AlgebraError::InvalidSize`] if `n` is negative or `n * n`
    /// overflows `usize`.
    pub fn try_new<D: TryInto<usize>>(n: D) -> Result<Self, AlgebraError> {
        let n = checked_dim(n)?;
        Ok(Self {
            grid: Grid::try_new(n, n)?,
        })
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Self::new(n);
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        self.grid.data_mut().set(T::zero());
        for i in 0..self.size() {
            self[(i, i)] = T::one();
        }
    }

    /// Row permutation matrix with `P(i, perm[i]) = 1`, so that row `i` of
    /// `P*A` is row `perm[i]` of `A`.
    pub fn permutation(perm: &[usize]) -> Self {
        let n = perm.len();
        let mut P = Self::new(n);
        for (i, &pi) in perm.iter().enumerate() {
            P[(i, pi)] = T::one();
        }
        P
    }

    /// Copy of `self` with row `i` taken from row `perm[i]`
    pub(crate) fn permute_rows(&self, perm: &[usize]) -> Self {
        assert_eq!(perm.len(), self.size());
        let mut out = Self::new(self.size());
        for (i, &pi) in perm.iter().enumerate() {
            out.grid
                .row_slice_mut(i)
                .copy_from_slice(self.grid.row_slice(pi));
        }
        out
    }

    pub fn transpose(&self) -> Self {
        Self {
            grid: self.grid.transpose(),
        }
    }

    /// number of rows (and columns)
    pub fn size(&self) -> usize {
        self.grid.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn get<I, J>(&self, i: I, j: J) -> Result<T, AlgebraError>
    where
        I: TryInto<usize>,
        J: TryInto<usize>,
    {
        self.grid.get(i, j).copied()
    }

    pub fn get_mut<I, J>(&mut self, i: I, j: J) -> Result<&mut T, AlgebraError>
    where
        I: TryInto<usize>,
        J: TryInto<usize>,
    {
        self.grid.get_mut(i, j)
    }

    pub fn set<I, J>(&mut self, i: I, j: J, value: T) -> Result<(), AlgebraError>
    where
        I: TryInto<usize>,
        J: TryInto<usize>,
    {
        self.grid.set(i, j, value)
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        self.grid.row_slice(row)
    }

    pub fn as_grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn is_triu(&self) -> bool {
        iproduct!(0..self.size(), 0..self.size())
            .filter(|(r, c)| r > c)
            .all(|(r, c)| self[(r, c)] == T::zero())
    }

    /// lower triangular with ones on the diagonal
    pub fn is_unit_tril(&self) -> bool {
        iproduct!(0..self.size(), 0..self.size()).all(|(r, c)| match r.cmp(&c) {
            std::cmp::Ordering::Less => self[(r, c)] == T::zero(),
            std::cmp::Ordering::Equal => self[(r, c)] == T::one(),
            std::cmp::Ordering::Greater => true,
        })
    }

    /// true if every entry is 0 or 1 and each row and column holds exactly one 1
    pub fn is_permutation(&self) -> bool {
        let n = self.size();
        let mut colcount = vec![0usize; n];
        for r in 0..n {
            let mut rowcount = 0;
            for (c, &x) in self.row_slice(r).iter().enumerate() {
                if x == T::one() {
                    rowcount += 1;
                    colcount[c] += 1;
                } else if x != T::zero() {
                    return false;
                }
            }
            if rowcount != 1 {
                return false;
            }
        }
        colcount.iter().all(|&c| c == 1)
    }

    /// Maximum absolute column sum.  NaN if any entry is NaN.
    pub fn one_norm(&self) -> T {
        let n = self.size();
        let colsums: Vec<T> = (0..n)
            .map(|c| (0..n).fold(T::zero(), |acc, r| acc + self[(r, c)].abs()))
            .collect();
        colsums.norm_inf()
    }

    /// Frobenius norm, the square root of the sum of squares of all elements
    pub fn two_norm(&self) -> T {
        self.grid.data().norm()
    }

    /// Maximum absolute row sum.  NaN if any entry is NaN.
    pub fn uniform_norm(&self) -> T {
        let rowsums: Vec<T> = (0..self.size())
            .map(|r| self.row_slice(r).norm_one())
            .collect();
        rowsums.norm_inf()
    }

    /// Matrix product `self * B`.
    ///
    /// Fails with [`AlgebraError::IncompatibleSize`] if the row counts differ,
    /// which for two square matrices is exactly the product precondition.
    pub fn matmul(&self, B: &SquareMatrix<T>) -> Result<SquareMatrix<T>, AlgebraError> {
        if self.size() != B.size() {
            return Err(AlgebraError::incompatible(
                self.grid.size(),
                B.grid.size(),
            ));
        }
        let grid = self.grid.matmul(&B.grid)?;
        Ok(Self { grid })
    }

    /// Matrix-vector product `y = self * x`.
    ///
    /// Fails with [`AlgebraError::IncompatibleSize`] unless `x.len() == n`.
    pub fn matvec(&self, x: &NumericVector<T>) -> Result<NumericVector<T>, AlgebraError> {
        let y = self.grid.matvec(x.as_sequence())?;
        Ok(NumericVector::from(y))
    }

    /// Unit lower triangular factor `L` of the unpivoted factorization `A = LU`.
    ///
    /// If both factors are needed, call [`lu_fact`] once instead.
    pub fn compute_lower(&self) -> Result<SquareMatrix<T>, AlgebraError> {
        Ok(lu_fact(self)?.l)
    }

    /// Upper triangular factor `U` of the unpivoted factorization `A = LU`.
    ///
    /// If both factors are needed, call [`lu_fact`] once instead.
    pub fn compute_upper(&self) -> Result<SquareMatrix<T>, AlgebraError> {
        Ok(lu_fact(self)?.u)
    }

    /// Matrix inverse computed from a scaled partial pivoting LU factorization,
    /// using default [`LuSettings`](crate::algebra::LuSettings).
    ///
    /// Fails with [`AlgebraError::SingularPivot`] if a zero pivot is encountered.
    pub fn inverse(&self) -> Result<SquareMatrix<T>, AlgebraError> {
        LuSolver::<T>::default().inverse(self)
    }

    /// Condition number in the one norm, `‖A⁻¹‖₁ ‖A‖₁`
    pub fn condition_num(&self) -> Result<T, AlgebraError> {
        LuSolver::<T>::default().condition_num(self)
    }

    /// Solves `A x = b` using a scaled partial pivoting LU factorization
    pub fn solve(&self, b: &NumericVector<T>) -> Result<NumericVector<T>, AlgebraError> {
        let mut solver = LuSolver::<T>::default();
        let factors = solver.factor(self)?;
        solver.solve(&factors, b)
    }
}

/// Square matrix from an array of rows, e.g. `SquareMatrix::from(&[[4., 3.], [6., 3.]])`
impl<T, const N: usize> From<&[[T; N]; N]> for SquareMatrix<T>
where
    T: Clone,
{
    fn from(rows: &[[T; N]; N]) -> Self {
        Self {
            grid: Grid::from(rows),
        }
    }
}

impl<T> TryFrom<Grid<T>> for SquareMatrix<T> {
    type Error = AlgebraError;
    fn try_from(grid: Grid<T>) -> Result<Self, Self::Error> {
        if !grid.is_square() {
            return Err(AlgebraError::incompatible(
                grid.size(),
                (grid.ncols(), grid.nrows()),
            ));
        }
        Ok(Self { grid })
    }
}

impl<T> From<SquareMatrix<T>> for Grid<T> {
    fn from(m: SquareMatrix<T>) -> Self {
        m.grid
    }
}

impl<T> ShapedMatrix for SquareMatrix<T> {
    fn nrows(&self) -> usize {
        self.grid.nrows()
    }
    fn ncols(&self) -> usize {
        self.grid.ncols()
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.grid[idx]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        &mut self.grid[idx]
    }
}

impl<T> std::fmt::Display for SquareMatrix<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_grid(&self.grid, f)
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for SquareMatrix<T>
where
    T: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.grid.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SquareMatrix<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let grid = Grid::<T>::deserialize(deserializer)?;
        SquareMatrix::try_from(grid).map_err(serde::de::Error::custom)
    }
}
