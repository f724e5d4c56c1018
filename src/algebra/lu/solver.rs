#![allow(non_snake_case)]
use super::factor::{doolittle, pivot_order};
use super::solve::{back_substitute, check_solve_dims, forward_substitute};
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

/// Factors `P*A = L*U` for a row permutation `P`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedLu<T = f64> {
    /// pivot row order, with row `k` of `P*A` taken from row `perm[k]` of `A`
    pub perm: Vec<usize>,
    /// permutation matrix built from `perm`
    pub p: SquareMatrix<T>,
    pub l: SquareMatrix<T>,
    pub u: SquareMatrix<T>,
}

/// Reusable LU solver holding settings, a print target and a
/// substitution workspace.
///
/// ```
/// use denselu::algebra::*;
///
/// let A = SquareMatrix::from(&[[4., 3.], [6., 3.]]);
/// let mut solver = LuSolver::<f64>::default();
/// let Ainv = solver.inverse(&A).unwrap();
/// assert!((Ainv[(0, 0)] + 0.5).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct LuSolver<T: FloatT = f64> {
    pub settings: LuSettings<T>,
    stream: PrintTarget,
    work: Vec<T>,
}

impl<T> Default for LuSolver<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self {
            settings: LuSettings::default(),
            stream: PrintTarget::default(),
            work: vec![],
        }
    }
}

impl<T> LuSolver<T>
where
    T: FloatT,
{
    pub fn new(settings: LuSettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::default()
        })
    }

    /// Computes `P*A = L*U`.
    ///
    /// With `settings.pivoting` the row order comes from scaled partial
    /// pivoting (see [`reorder`]), otherwise `P` is the identity.
    pub fn factor(&mut self, A: &SquareMatrix<T>) -> Result<PivotedLu<T>, AlgebraError> {
        let n = A.size();
        let tol = self.settings.pivot_tol;

        let perm = if self.settings.pivoting {
            pivot_order(A, tol)?
        } else {
            (0..n).collect()
        };

        let PA = A.permute_rows(&perm);
        let LuFactors { l, u } = doolittle(&PA, tol)?;
        let p = SquareMatrix::permutation(&perm);
        let factors = PivotedLu { perm, p, l, u };

        let _ = self.print_factorization(&factors);
        Ok(factors)
    }

    /// Solves `A x = b` from the factors of `A`.
    pub fn solve(
        &mut self,
        factors: &PivotedLu<T>,
        b: &NumericVector<T>,
    ) -> Result<NumericVector<T>, AlgebraError> {
        check_solve_dims(&factors.l, &factors.u, b)?;

        // x = U⁻¹ L⁻¹ P b
        let mut x = NumericVector::from(factors.perm.iter().map(|&i| b[i]).collect::<Vec<T>>());
        forward_substitute(&factors.l, x.as_mut_slice());
        back_substitute(&factors.u, x.as_mut_slice(), self.settings.pivot_tol)?;
        Ok(x)
    }

    /// Inverse of `A`, assembled as `U⁻¹ L⁻¹ P` from the factors of `P*A`.
    ///
    /// The columns of `L⁻¹` and `U⁻¹` are found by substituting each
    /// standard basis vector through `L` and `U` respectively.
    pub fn inverse(&mut self, A: &SquareMatrix<T>) -> Result<SquareMatrix<T>, AlgebraError> {
        let factors = self.factor(A)?;
        let n = A.size();
        let tol = self.settings.pivot_tol;

        let mut Linv = SquareMatrix::new(n);
        let mut Uinv = SquareMatrix::new(n);
        self.work.resize(n, T::zero());

        for k in 0..n {
            set_unit(&mut self.work, k);
            forward_substitute(&factors.l, &mut self.work);
            set_column(&mut Linv, k, &self.work);

            set_unit(&mut self.work, k);
            back_substitute(&factors.u, &mut self.work, tol)?;
            set_column(&mut Uinv, k, &self.work);
        }

        Uinv.matmul(&Linv)?.matmul(&factors.p)
    }

    /// Condition number in the one norm, `‖A⁻¹‖₁ ‖A‖₁`
    pub fn condition_num(&mut self, A: &SquareMatrix<T>) -> Result<T, AlgebraError> {
        let Ainv = self.inverse(A)?;
        let cond = Ainv.one_norm() * A.one_norm();
        let _ = self.print_condition(cond);
        Ok(cond)
    }

    fn print_factorization(&mut self, factors: &PivotedLu<T>) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;
        let n = factors.size();

        writeln!(out, "denselu v{} - LU factorization", crate::VERSION)?;
        writeln!(out, "  size          = {}", n)?;
        writeln!(out, "  pivoting      = {}", self.settings.pivoting)?;
        writeln!(out, "  pivot order   = {:?}", factors.perm)?;
        if n > 0 {
            let (min, max) = (0..n)
                .map(|i| factors.u[(i, i)].abs())
                .fold((T::infinity(), T::zero()), |(lo, hi), d| {
                    (T::min(lo, d), T::max(hi, d))
                });
            writeln!(out, "  |pivot| range = [{:.3e}, {:.3e}]", min, max)?;
        }
        Ok(())
    }

    fn print_condition(&mut self, cond: T) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        writeln!(self.stream, "  cond (1-norm) = {:.3e}", cond)
    }
}

impl<T> PivotedLu<T>
where
    T: FloatT,
{
    pub fn size(&self) -> usize {
        self.l.size()
    }
}

impl<T> ConfigurablePrintTarget for LuSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

fn set_unit<T: FloatT>(x: &mut [T], k: usize) {
    x.set(T::zero());
    x[k] = T::one();
}

fn set_column<T: FloatT>(M: &mut SquareMatrix<T>, col: usize, x: &[T]) {
    for (i, &xi) in x.iter().enumerate() {
        M[(i, col)] = xi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_matrix_3x3() -> SquareMatrix<f64> {
        // needs a row exchange at the first step
        SquareMatrix::from(&[
            [0., 2., 1.], //
            [1., 1., 0.], //
            [3., 0., 1.], //
        ])
    }

    #[test]
    fn test_factor_pivoted() {
        let A = test_matrix_3x3();
        let mut solver = LuSolver::<f64>::default();
        let f = solver.factor(&A).unwrap();

        assert!(f.p.is_permutation());
        assert!(f.l.is_unit_tril());
        assert!(f.u.is_triu());

        let PA = f.p.matmul(&A).unwrap();
        let LU = f.l.matmul(&f.u).unwrap();
        assert!(PA.as_grid().data().norm_inf_diff(LU.as_grid().data()) < 1e-14);
    }

    #[test]
    fn test_factor_unpivoted_fails_on_leading_zero() {
        let A = test_matrix_3x3();
        let settings = LuSettingsBuilder::default().pivoting(false).build().unwrap();
        let mut solver = LuSolver::<f64>::new(settings).unwrap();
        assert_eq!(
            solver.factor(&A).unwrap_err(),
            AlgebraError::SingularPivot(0)
        );
    }

    #[test]
    fn test_inverse_and_solve() {
        let A = test_matrix_3x3();
        let mut solver = LuSolver::<f64>::default();

        let Ainv = solver.inverse(&A).unwrap();
        let I = A.matmul(&Ainv).unwrap();
        let I_ref = SquareMatrix::identity(3);
        assert!(I.as_grid().data().norm_inf_diff(I_ref.as_grid().data()) < 1e-14);

        let x = NumericVector::from(vec![1., -2., 0.5]);
        let b = A.matvec(&x).unwrap();
        let f = solver.factor(&A).unwrap();
        let xsol = solver.solve(&f, &b).unwrap();
        assert!(xsol.as_slice().norm_inf_diff(x.as_slice()) < 1e-14);
    }

    #[test]
    fn test_pivot_tol() {
        let A = SquareMatrix::from(&[[1., 2.], [2., 4. + 1e-14]]);
        assert!(LuSolver::<f64>::default().inverse(&A).is_ok());

        let settings = LuSettingsBuilder::default().pivot_tol(1e-10).build().unwrap();
        let mut solver = LuSolver::<f64>::new(settings).unwrap();
        assert!(matches!(
            solver.inverse(&A),
            Err(AlgebraError::SingularPivot(_))
        ));
    }

    #[test]
    fn test_new_rejects_bad_settings() {
        let mut settings = LuSettings::<f64>::default();
        settings.pivot_tol = -1.;
        assert!(LuSolver::new(settings).is_err());
    }

    #[test]
    fn test_verbose_printing() {
        let A = test_matrix_3x3();
        let settings = LuSettingsBuilder::default().verbose(true).build().unwrap();
        let mut solver = LuSolver::<f64>::new(settings).unwrap();
        solver.print_to_buffer();
        solver.condition_num(&A).unwrap();

        let out = solver.get_print_buffer().unwrap();
        assert!(out.contains("LU factorization"));
        assert!(out.contains("pivot order   = [1, 0, 2]"));
        assert!(out.contains("cond (1-norm)"));
    }

    #[test]
    fn test_quiet_by_default() {
        let mut solver = LuSolver::<f64>::default();
        solver.print_to_buffer();
        solver.inverse(&test_matrix_3x3()).unwrap();
        assert!(solver.get_print_buffer().unwrap().is_empty());
    }
}
