//! Crate-level error.

use thiserror::Error;

use crate::{
    models::thermal::intrusion::{DomainError, EvaluateError},
    registry::{DatasetError, RegistryError, ValidationError},
    support::constraint::ConstraintError,
};

/// Any failure surfaced by a [`Session`](crate::session::Session).
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed validation.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// No intrusion is registered under the requested id.
    #[error("no intrusion named `{id}`")]
    NotFound { id: String },

    /// An evaluation argument is outside the model's domain.
    #[error("outside the model domain")]
    Domain(#[from] DomainError),

    /// The closed form produced no attenuation factor.
    #[error("evaluation failed")]
    Attenuation(#[from] ConstraintError),

    /// A dataset could not be loaded or written.
    #[error("dataset error")]
    Dataset(#[from] DatasetError),
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { id } => Self::NotFound { id },
            RegistryError::Validation(source) => Self::Validation(source),
        }
    }
}

impl From<EvaluateError> for Error {
    fn from(err: EvaluateError) -> Self {
        match err {
            EvaluateError::Domain(source) => Self::Domain(source),
            EvaluateError::Validation(source) => Self::Validation(source),
            EvaluateError::Attenuation(source) => Self::Attenuation(source),
        }
    }
}
