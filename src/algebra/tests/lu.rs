#![allow(non_snake_case)]
use super::{diag_dominant, hilbert};
use crate::algebra::*;

fn assert_lu_reproduces<T: FloatT>(A: &SquareMatrix<T>, tol: T) {
    let LuFactors { l, u } = lu_fact(A).unwrap();
    assert_eq!(l.size(), A.size());
    assert!(l.is_unit_tril());
    assert!(u.is_triu());

    let LU = l.matmul(&u).unwrap();
    let err = LU.as_grid().data().norm_inf_diff(A.as_grid().data());
    assert!(err <= tol * T::max(T::one(), A.uniform_norm()));
}

macro_rules! generate_test_lu_fact {
    ($fxx:ty, $test_name:ident, $tol:expr) => {
        #[test]
        fn $test_name() {
            let A = SquareMatrix::<$fxx>::from(&[
                [4., -3., 7., 0.],  //
                [0., 8., -1., 0.],  //
                [1., 0., 2., -3.],  //
                [0., -1., 0., 1.],  //
            ]);
            assert_lu_reproduces(&A, $tol);

            for n in 1..=6 {
                assert_lu_reproduces(&hilbert::<$fxx>(n), $tol);
            }
            assert_lu_reproduces(&diag_dominant::<$fxx>(8), $tol);
        }
    };
}

generate_test_lu_fact!(f32, test_lu_fact_f32, 1e-5);
generate_test_lu_fact!(f64, test_lu_fact_f64, 1e-13);

#[test]
fn test_lu_fact_diag_dominant_pivots() {
    // the unpivoted pivots of a diagonally dominant matrix stay positive
    let A = diag_dominant::<f64>(8);
    let u = A.compute_upper().unwrap();
    assert!((0..8).all(|i| u[(i, i)] > 0.));

    // lu_fact agrees with the split accessors
    let LuFactors { l, u: u2 } = lu_fact(&A).unwrap();
    assert_eq!(l, A.compute_lower().unwrap());
    assert_eq!(u, u2);
}
