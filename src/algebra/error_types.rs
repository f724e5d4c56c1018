use thiserror::Error;

/// Error type returned by container construction, element access and
/// the LU based numeric routines.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// A negative dimension was requested for a container
    #[error("Negative dimension requested")]
    InvalidSize,
    /// Element access outside of the container bounds
    #[error("Index out of range")]
    IndexOutOfRange,
    /// Operand dimensions do not satisfy the operation's precondition
    #[error("Incompatible dimensions {lhs:?} and {rhs:?}")]
    IncompatibleSize {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// A required pivot was zero, so the matrix cannot be factored or
    /// inverted by this algorithm
    #[error("Zero pivot encountered at elimination step {0}")]
    SingularPivot(usize),
    /// Norm requested on a zero-length vector
    #[error("Norm of an empty vector")]
    EmptyVector,
}

impl AlgebraError {
    pub(crate) fn incompatible(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        AlgebraError::IncompatibleSize { lhs, rhs }
    }
}

// Converts an externally supplied (possibly signed) dimension.
pub(crate) fn checked_dim<D: TryInto<usize>>(d: D) -> Result<usize, AlgebraError> {
    d.try_into().map_err(|_| AlgebraError::InvalidSize)
}

// Converts an externally supplied (possibly signed) index and checks it
// against the bound `len`.
pub(crate) fn checked_index<I: TryInto<usize>>(i: I, len: usize) -> Result<usize, AlgebraError> {
    match i.try_into() {
        Ok(i) if i < len => Ok(i),
        _ => Err(AlgebraError::IndexOutOfRange),
    }
}
