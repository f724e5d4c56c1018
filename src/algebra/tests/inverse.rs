#![allow(non_snake_case)]
use super::hilbert;
use crate::algebra::*;

fn assert_near_identity<T: FloatT>(A: &SquareMatrix<T>, tol: T) {
    let I = SquareMatrix::<T>::identity(A.size());
    assert!(A.as_grid().data().norm_inf_diff(I.as_grid().data()) < tol);
}

macro_rules! generate_test_inverse {
    ($fxx:ty, $test_name:ident, $tol:expr) => {
        #[test]
        fn $test_name() {
            let A = SquareMatrix::<$fxx>::from(&[
                [4., 3.], //
                [6., 3.], //
            ]);
            let Ainv = A.inverse().unwrap();
            let Aref = SquareMatrix::<$fxx>::from(&[
                [-0.5, 0.5], //
                [1., -2. / 3.], //
            ]);
            assert!(Ainv.as_grid().data().norm_inf_diff(Aref.as_grid().data()) < $tol);
            assert_near_identity(&A.matmul(&Ainv).unwrap(), $tol);
            assert_near_identity(&Ainv.matmul(&A).unwrap(), $tol);

            // ‖A‖₁ = 10, ‖A⁻¹‖₁ = 1.5
            let cond = A.condition_num().unwrap();
            assert!((cond - 15.).abs() < 100. * $tol);
        }
    };
}

generate_test_inverse!(f32, test_inverse_2x2_f32, 1e-5);
generate_test_inverse!(f64, test_inverse_2x2_f64, 1e-12);

macro_rules! generate_test_inverse_4x4 {
    ($fxx:ty, $test_name:ident, $tol_inv:expr, $tol_id:expr) => {
        #[test]
        fn $test_name() {
            let A = SquareMatrix::<$fxx>::from(&[
                [4., -3., 7., 0.],  //
                [0., 8., -1., 0.],  //
                [1., 0., 2., -3.],  //
                [0., -1., 0., 1.],  //
            ]);
            let Aref = SquareMatrix::<$fxx>::from(&[
                [-13., 15., 53., 159.], //
                [1., -1., -4., -12.],   //
                [8., -9., -32., -96.],  //
                [1., -1., -4., -11.],   //
            ]);
            let Ainv = A.inverse().unwrap();
            // cond(A) = 3336, so the inverse itself is only accurate to a
            // few thousand ulps while the residual stays small
            assert!(Ainv.as_grid().data().norm_inf_diff(Aref.as_grid().data()) < $tol_inv);
            assert_near_identity(&A.matmul(&Ainv).unwrap(), $tol_id);
        }
    };
}

generate_test_inverse_4x4!(f32, test_inverse_4x4_f32, 5e-2, 5e-3);
generate_test_inverse_4x4!(f64, test_inverse_4x4_f64, 1e-9, 1e-11);

#[test]
fn test_condition_identity_is_one() {
    for n in 1..6 {
        let I = SquareMatrix::<f64>::identity(n);
        assert_eq!(I.inverse().unwrap(), I);
        assert_eq!(I.condition_num().unwrap(), 1.);
    }
}

#[test]
fn test_condition_hilbert() {
    // exact value for the 4x4 Hilbert matrix in the one norm
    let cond = hilbert::<f64>(4).condition_num().unwrap();
    assert!((cond - 28375.).abs() / 28375. < 1e-8);
}

#[test]
fn test_inverse_needs_row_exchange() {
    let A = SquareMatrix::<f64>::from(&[[0., 1.], [1., 0.]]);
    assert_eq!(A.inverse().unwrap(), A);

    // factoring in the given row order hits the zero pivot
    let settings = LuSettingsBuilder::default()
        .pivoting(false)
        .build()
        .unwrap();
    let mut solver = LuSolver::new(settings).unwrap();
    assert_eq!(
        solver.inverse(&A).unwrap_err(),
        AlgebraError::SingularPivot(0)
    );
}

#[test]
fn test_inverse_singular() {
    let A = SquareMatrix::<f64>::from(&[[1., 2.], [2., 4.]]);
    assert!(matches!(
        A.inverse(),
        Err(AlgebraError::SingularPivot(_))
    ));
    assert!(A.condition_num().is_err());

    let Z = SquareMatrix::<f64>::new(3);
    assert_eq!(Z.inverse().unwrap_err(), AlgebraError::SingularPivot(0));
}

#[test]
fn test_inverse_empty() {
    let A = SquareMatrix::<f64>::new(0);
    assert!(A.inverse().unwrap().is_empty());
}

#[test]
fn test_solve_matches_inverse() {
    let A = hilbert::<f64>(3);
    let b = NumericVector::from(vec![1., 2., 3.]);
    let x = A.solve(&b).unwrap();
    let y = A.inverse().unwrap().matvec(&b).unwrap();
    assert!(x.as_slice().norm_inf_diff(y.as_slice()) < 1e-9);

    let r = A.matvec(&x).unwrap();
    assert!(r.as_slice().norm_inf_diff(b.as_slice()) < 1e-10);
}
