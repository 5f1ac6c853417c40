use std::path::PathBuf;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// A parameter set field is missing, malformed, or out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The intrusion id is empty or whitespace.
    #[error("intrusion id must not be empty")]
    EmptyId,

    /// A scalar field violates its sign or finiteness requirement.
    #[error("invalid `{field}`: {source}")]
    Field {
        /// Dataset key of the offending field (`T0`, `K1`, `k`, ...).
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The magma is not hotter than the host rock at emplacement depth.
    #[error("initial temperature {initial} °C must exceed the ambient temperature {ambient} °C")]
    NotAboveAmbient {
        /// Initial magma temperature, °C.
        initial: f64,
        /// Ambient host-rock temperature (`g · l`), °C.
        ambient: f64,
    },

    /// The time grid has no samples.
    #[error("time grid must contain at least one sample")]
    EmptyTimeGrid,

    /// A time sample is zero, negative, or not finite.
    #[error("invalid time sample at index {index}: {source}")]
    Time {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    /// A time sample is not greater than the one before it.
    #[error("time samples must be strictly increasing (index {index})")]
    TimeNotIncreasing { index: usize },

    /// A time field in text input could not be parsed as a number.
    #[error("`{text}` is not a valid time value")]
    TimeNotANumber { text: String },

    /// A display range is reversed, empty, or not finite.
    #[error("invalid {what} range: bounds must be finite with the lower below the upper")]
    Range { what: &'static str },
}

/// Errors returned by [`Registry`](super::Registry) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No entry is registered under the requested id.
    #[error("no intrusion named `{id}`")]
    NotFound { id: String },

    /// The parameter set was rejected.
    #[error("parameter set rejected")]
    Validation(#[from] ValidationError),
}

/// Errors raised while reading or writing a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The document is not a JSON object of intrusion entries.
    #[error("malformed dataset")]
    Parse(#[from] serde_json::Error),

    /// One entry could not be decoded.
    #[error("malformed entry `{id}`")]
    Entry {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The dataset file could not be read or written.
    ///
    /// Raised by [`Registry::from_path`](super::Registry::from_path) and
    /// [`Registry::to_path`](super::Registry::to_path).
    #[error("cannot access dataset at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Duplicated fields of one entry disagree with each other.
    #[error("entry `{id}` has conflicting values for `{field}`")]
    Conflict { id: String, field: &'static str },

    /// An entry decoded cleanly but failed validation.
    #[error("entry `{id}` is invalid")]
    Invalid {
        id: String,
        #[source]
        source: ValidationError,
    },
}
