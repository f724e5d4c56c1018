use crate::algebra::error_types::{checked_dim, checked_index};
use crate::algebra::AlgebraError;
use num_traits::Zero;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed length, heap allocated 1-D array with bounds checked access.
///
/// A `Sequence` owns its elements outright.  `Clone` produces a deep copy,
/// so two sequences never alias the same storage.  A zero length sequence
/// holds no allocation.
///
/// Checked access goes through [`get`](Sequence::get),
/// [`get_mut`](Sequence::get_mut) and [`set`](Sequence::set), which accept any
/// integer index and report negative or too large values as
/// [`AlgebraError::IndexOutOfRange`].   The `Index` operators behave like slice
/// indexing and panic instead.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    data: Vec<T>,
}

impl<T> Sequence<T>
where
    T: Clone + Zero,
{
    /// Sequence of `len` zeros.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Sequence of zeros from an externally supplied length.
    ///
    /// Fails with [`AlgebraError::InvalidSize`] if `len` is negative.
    pub fn try_new<D: TryInto<usize>>(len: D) -> Result<Self, AlgebraError> {
        Ok(Self::new(checked_dim(len)?))
    }
}

impl<T> Sequence<T> {
    /// number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get<I: TryInto<usize>>(&self, i: I) -> Result<&T, AlgebraError> {
        let i = checked_index(i, self.len())?;
        Ok(&self.data[i])
    }

    pub fn get_mut<I: TryInto<usize>>(&mut self, i: I) -> Result<&mut T, AlgebraError> {
        let i = checked_index(i, self.len())?;
        Ok(&mut self.data[i])
    }

    pub fn set<I: TryInto<usize>>(&mut self, i: I, value: T) -> Result<(), AlgebraError> {
        *self.get_mut(i)? = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(src: &[T]) -> Self {
        Self { data: src.to_vec() }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> std::fmt::Display for Sequence<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Vector is empty.");
        }
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}
