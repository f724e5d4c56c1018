#![allow(non_snake_case)]
use crate::algebra::error_types::{checked_dim, checked_index};
use crate::algebra::{AlgebraError, FloatT, Sequence, ShapedMatrix, VectorMath};
use itertools::iproduct;
use num_traits::Zero;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row major 2-D array built on a [`Sequence`].
///
/// Element `(i, j)` lives at linear index `i * ncols + j`.  A grid with zero
/// rows or zero columns holds no elements but keeps its `(rows, cols)`
/// metadata, so a `0 x 3` grid and a `0 x 5` grid compare unequal.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Sequence<T>,
}

// unchecked field layout used to validate deserialized grids
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid<T> {
    rows: usize,
    cols: usize,
    data: Sequence<T>,
}

fn element_count(rows: usize, cols: usize) -> Result<usize, AlgebraError> {
    rows.checked_mul(cols).ok_or(AlgebraError::InvalidSize)
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = AlgebraError;
    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        Grid::from_sequence(raw.rows, raw.cols, raw.data)
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero,
{
    /// `rows x cols` grid of zeros.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.  Use [`Grid::try_new`] for
    /// dimensions that come from outside the program.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: Sequence::new(element_count(rows, cols).expect("grid size overflows usize")),
        }
    }

    /// Grid of zeros from externally supplied dimensions.
    ///
    /// Fails with [`AlgebraError::InvalidSize`] if either dimension is
    /// negative or the element count `rows * cols` overflows `usize`.
    pub fn try_new<R, C>(rows: R, cols: C) -> Result<Self, AlgebraError>
    where
        R: TryInto<usize>,
        C: TryInto<usize>,
    {
        let (rows, cols) = (checked_dim(rows)?, checked_dim(cols)?);
        let count = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: Sequence::new(count),
        })
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        let mut out = Grid::new(self.cols, self.rows);
        for (i, j) in iproduct!(0..self.rows, 0..self.cols) {
            out[(j, i)] = self[(i, j)].clone();
        }
        out
    }
}

impl<T> Grid<T> {
    /// Wraps row major data.  Fails with [`AlgebraError::IncompatibleSize`] if
    /// `data.len() != rows * cols`, or with [`AlgebraError::InvalidSize`] if
    /// that product overflows `usize`.
    pub fn from_sequence(rows: usize, cols: usize, data: Sequence<T>) -> Result<Self, AlgebraError> {
        if data.len() != element_count(rows, cols)? {
            return Err(AlgebraError::incompatible((rows, cols), (data.len(), 1)));
        }
        Ok(Self { rows, cols, data })
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, AlgebraError> {
        Self::from_sequence(rows, cols, Sequence::from(data))
    }

    /// true if the grid holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.cols + idx.1
    }

    pub fn get<I, J>(&self, i: I, j: J) -> Result<&T, AlgebraError>
    where
        I: TryInto<usize>,
        J: TryInto<usize>,
    {
        let i = checked_index(i, self.rows)?;
        let j = checked_index(j, self.cols)?;
        Ok(&self.data[self.index_linear((i, j))])
    }

    pub fn get_mut<I, J>(&mut self, i: I, j: J) -> Result<&mut T, AlgebraError>
    where
        I: TryInto<usize>,
        J: TryInto<usize>,
    {
        let i = checked_index(i, self.rows)?;
        let j = checked_index(j, self.cols)?;
        let lidx = self.index_linear((i, j));
        Ok(&mut self.data[lidx])
    }

    pub fn set<I, J>(&mut self, i: I, j: J, value: T) -> Result<(), AlgebraError>
    where
        I: TryInto<usize>,
        J: TryInto<usize>,
    {
        *self.get_mut(i, j)? = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows);
        &self.data.as_slice()[(row * self.cols)..(row + 1) * self.cols]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows);
        let cols = self.cols;
        &mut self.data.as_mut_slice()[(row * cols)..(row + 1) * cols]
    }

    /// row major element data
    pub fn data(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn into_sequence(self) -> Sequence<T> {
        self.data
    }
}

impl<T> Grid<T>
where
    T: FloatT,
{
    /// Grid-vector product `y = A*x`.
    ///
    /// Fails with [`AlgebraError::IncompatibleSize`] unless `x.len() == ncols`.
    pub fn matvec(&self, x: &Sequence<T>) -> Result<Sequence<T>, AlgebraError> {
        if x.len() != self.cols {
            return Err(AlgebraError::incompatible(self.size(), (x.len(), 1)));
        }
        Ok((0..self.rows)
            .map(|i| self.row_slice(i).dot(x.as_slice()))
            .collect())
    }

    /// Grid-grid product `C = A*B`.
    ///
    /// Fails with [`AlgebraError::IncompatibleSize`] unless `A.ncols == B.nrows`.
    pub fn matmul(&self, B: &Grid<T>) -> Result<Grid<T>, AlgebraError> {
        if self.cols != B.rows {
            return Err(AlgebraError::incompatible(self.size(), B.size()));
        }
        let mut C = Grid::new(self.rows, B.cols);
        for (i, j) in iproduct!(0..self.rows, 0..B.cols) {
            C[(i, j)] = (0..self.cols).fold(T::zero(), |acc, k| acc + self[(i, k)] * B[(k, j)]);
        }
        Ok(C)
    }
}

/// Column grid (`cols == 1`) holding the sequence data.
impl<T> From<Sequence<T>> for Grid<T> {
    fn from(v: Sequence<T>) -> Self {
        Self {
            rows: v.len(),
            cols: 1,
            data: v,
        }
    }
}

/// Grid from an array of rows, e.g. `Grid::from(&[[1., 2.], [3., 4.]])`
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Grid<T>
where
    T: Clone,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let data: Sequence<T> = rows.iter().flat_map(|r| r.iter().cloned()).collect();
        Self {
            rows: M,
            cols: N,
            data,
        }
    }
}

impl<T> ShapedMatrix for Grid<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(idx.0 < self.rows && idx.1 < self.cols);
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(idx.0 < self.rows && idx.1 < self.cols);
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> std::fmt::Display for Grid<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_grid(self, f)
    }
}

pub(crate) fn display_grid<T>(g: &Grid<T>, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    T: std::fmt::Display,
{
    if g.is_empty() {
        return writeln!(f, "Matrix is empty.");
    }
    for i in 0..g.nrows() {
        for (j, x) in g.row_slice(i).iter().enumerate() {
            if j > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        writeln!(f)?;
    }
    Ok(())
}
