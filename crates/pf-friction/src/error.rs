//! Error types for friction-factor calculations.

use pf_core::error::PfError;
use thiserror::Error;

/// Errors that can occur while evaluating friction correlations.
#[derive(Error, Debug, Clone)]
pub enum FrictionError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type FrictionResult<T> = Result<T, FrictionError>;

impl From<FrictionError> for PfError {
    fn from(e: FrictionError) -> Self {
        match e {
            FrictionError::NonPhysical { what } => PfError::InvalidArg { what },
            FrictionError::InvalidArg { what } => PfError::InvalidArg { what },
        }
    }
}
