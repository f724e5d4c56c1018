use crate::algebra::{AlgebraError, FloatT, Sequence, VectorMath};
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mathematical n-vector of floating point values.
///
/// Wraps a [`Sequence`] and adds the vector norms.   All three norms
/// fail with [`AlgebraError::EmptyVector`] on a zero length vector.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumericVector<T = f64> {
    seq: Sequence<T>,
}

impl<T> NumericVector<T>
where
    T: FloatT,
{
    /// vector of `len` zeros
    pub fn new(len: usize) -> Self {
        Self {
            seq: Sequence::new(len),
        }
    }

    /// Vector of zeros from an externally supplied length.
    ///
    /// Fails with [`AlgebraError::InvalidSize`] if `len` is negative.
    pub fn try_new<D: TryInto<usize>>(len: D) -> Result<Self, AlgebraError> {
        Ok(Self {
            seq: Sequence::try_new(len)?,
        })
    }

    pub fn from_slice(src: &[T]) -> Self {
        Self {
            seq: Sequence::from(src),
        }
    }

    /// The `k`th standard basis vector of length `n`
    pub fn unit(n: usize, k: usize) -> Self {
        assert!(k < n);
        let mut e = Self::new(n);
        e[k] = T::one();
        e
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn get<I: TryInto<usize>>(&self, i: I) -> Result<T, AlgebraError> {
        self.seq.get(i).copied()
    }

    pub fn get_mut<I: TryInto<usize>>(&mut self, i: I) -> Result<&mut T, AlgebraError> {
        self.seq.get_mut(i)
    }

    pub fn set<I: TryInto<usize>>(&mut self, i: I, value: T) -> Result<(), AlgebraError> {
        self.seq.set(i, value)
    }

    pub fn as_slice(&self) -> &[T] {
        self.seq.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.seq.as_mut_slice()
    }

    pub fn as_sequence(&self) -> &Sequence<T> {
        &self.seq
    }

    pub fn into_sequence(self) -> Sequence<T> {
        self.seq
    }

    /// Sum of absolute values
    pub fn one_norm(&self) -> Result<T, AlgebraError> {
        self.check_nonempty()?;
        Ok(self.as_slice().norm_one())
    }

    /// Euclidean norm
    pub fn two_norm(&self) -> Result<T, AlgebraError> {
        self.check_nonempty()?;
        Ok(self.as_slice().norm())
    }

    /// Largest absolute value
    pub fn uniform_norm(&self) -> Result<T, AlgebraError> {
        self.check_nonempty()?;
        Ok(self.as_slice().norm_inf())
    }

    /// Dot product.  Fails with [`AlgebraError::IncompatibleSize`] on a
    /// length mismatch.
    pub fn dot(&self, y: &NumericVector<T>) -> Result<T, AlgebraError> {
        if self.len() != y.len() {
            return Err(AlgebraError::incompatible(
                (self.len(), 1),
                (y.len(), 1),
            ));
        }
        Ok(self.as_slice().dot(y.as_slice()))
    }

    fn check_nonempty(&self) -> Result<(), AlgebraError> {
        if self.is_empty() {
            Err(AlgebraError::EmptyVector)
        } else {
            Ok(())
        }
    }
}

impl<T> From<Vec<T>> for NumericVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            seq: Sequence::from(data),
        }
    }
}

impl<T> From<Sequence<T>> for NumericVector<T> {
    fn from(seq: Sequence<T>) -> Self {
        Self { seq }
    }
}

impl<T> Index<usize> for NumericVector<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.seq[i]
    }
}

impl<T> IndexMut<usize> for NumericVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.seq[i]
    }
}

impl<T> std::fmt::Display for NumericVector<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.seq.fmt(f)
    }
}
