use thiserror::Error;

use crate::{registry::ValidationError, support::constraint::ConstraintError};

/// An evaluation argument lies outside the domain of the closed forms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A time sample is zero, negative, or not finite.
    #[error("time sample {index} must be finite and positive, got {value}")]
    NonPositiveTime { index: usize, value: f64 },

    /// The distance from the contact is negative or not finite.
    #[error("distance from the contact must be finite and non-negative, got {distance} m")]
    NegativeDistance { distance: f64 },

    /// The radius or half-thickness is zero, negative, or not finite.
    #[error("intrusion size must be finite and positive, got {size} m")]
    NonPositiveSize { size: f64 },
}

/// Errors that can occur while evaluating a cooling curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    /// An argument is outside the model's domain.
    #[error("evaluation domain")]
    Domain(#[from] DomainError),

    /// The parameter set failed validation.
    #[error("invalid parameter set")]
    Validation(#[from] ValidationError),

    /// The closed form produced no attenuation factor.
    ///
    /// Validated inputs never reach this; it guards against values that
    /// overflow to infinity along the way.
    #[error("attenuation factor is undefined")]
    Attenuation(#[from] ConstraintError),
}
