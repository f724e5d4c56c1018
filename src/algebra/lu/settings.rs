use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for [`LuSolver`](crate::algebra::LuSolver).
///
/// Construct with [`LuSettingsBuilder`], which validates field values in
/// `build()`, or use `LuSettings::default()`.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LuSettings<T: FloatT> {
    ///apply scaled partial pivoting before factoring.  When false
    ///the matrix is factored in its given row order
    #[builder(default = "true")]
    pub pivoting: bool,

    ///pivots with magnitude at or below this value are treated as zero
    #[builder(default = "(0.0).as_T()")]
    pub pivot_tol: T,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for LuSettings<T>
where
    T: FloatT,
{
    fn default() -> LuSettings<T> {
        LuSettingsBuilder::<T>::default().build().unwrap()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

impl<T> LuSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are legal.  Settings created through the
    /// builder are always valid, but public fields can be changed afterwards.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_pivot_tol(self.pivot_tol)
    }
}

impl<T> LuSettingsBuilder<T>
where
    T: FloatT,
{
    fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.pivot_tol {
            validate_pivot_tol(tol)?;
        }
        Ok(())
    }
}

impl From<SettingsError> for LuSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        LuSettingsBuilderError::ValidationError(e.to_string())
    }
}

fn validate_pivot_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("pivot_tol"))
    }
}
