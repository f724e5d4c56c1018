#![allow(non_snake_case)]
use crate::algebra::*;

mod inverse;
mod lu;

fn hilbert<T: FloatT>(n: usize) -> SquareMatrix<T> {
    let mut H = SquareMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            H[(i, j)] = T::one() / T::from_usize(i + j + 1).unwrap();
        }
    }
    H
}

// strictly diagonally dominant, so every leading pivot is nonzero
fn diag_dominant<T: FloatT>(n: usize) -> SquareMatrix<T> {
    let mut A = SquareMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            A[(i, j)] = if i == j {
                T::from_usize(n + 1 + i).unwrap()
            } else {
                T::one() / T::from_usize(1 + i.abs_diff(j)).unwrap()
            };
        }
    }
    A
}
