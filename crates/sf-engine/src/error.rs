//! Error types for estimation stages.

use sf_core::error::SfError;
use thiserror::Error;

/// Errors that can occur during estimation stage calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {field} {constraint} (got {value})")]
    InvalidInput {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<EngineError> for SfError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidInput { field, .. } => SfError::InvalidArg { what: field },
            EngineError::NonPhysical { what } => SfError::InvalidArg { what },
        }
    }
}
