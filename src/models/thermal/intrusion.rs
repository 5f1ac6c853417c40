//! Cooling of a magmatic intrusion by conduction into its host rock.
//!
//! The computational core is in the internal `core` module. This module
//! re-exports its API, adds free-function shorthands for the default
//! configuration, and provides [`IntrusionCooling`], the
//! [`twine_core::Model`] adapter.
//!
//! # Example
//!
//! ```
//! use geotherm::{models::thermal::intrusion, registry::Registry};
//!
//! let registry = Registry::bundled()?;
//! let barcelona = registry.get("Barcelona")?;
//!
//! let curve = intrusion::evaluate(barcelona, None)?;
//! assert_eq!(curve.len(), barcelona.time.len());
//!
//! let temperatures = curve.temperatures();
//! assert!(temperatures.windows(2).all(|pair| pair[1] < pair[0]));
//! assert!(temperatures[temperatures.len() - 1] - curve.ambient() < 0.1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    CurvePoint, DomainError, EvaluateError, Evaluator, EvaluatorConfig, ProfilePoint,
    TemperatureCurve, TemperatureProfile, TimeUnit, attenuation,
};

use serde::{Deserialize, Serialize};
use twine_core::Model;

use crate::registry::ParameterSet;

/// Evaluates a cooling curve with the default configuration.
///
/// See [`Evaluator::evaluate`].
///
/// # Errors
///
/// Returns an [`EvaluateError`] if the arguments are outside the model's
/// domain or the set is invalid.
pub fn evaluate(
    set: &ParameterSet,
    distance: Option<f64>,
) -> Result<TemperatureCurve, EvaluateError> {
    Evaluator::default().evaluate(set, distance)
}

/// Evaluates one temperature with the default configuration.
///
/// See [`Evaluator::evaluate_at`].
///
/// # Errors
///
/// Returns an [`EvaluateError`] if the arguments are outside the model's
/// domain or the set is invalid.
pub fn evaluate_at(set: &ParameterSet, distance: f64, time: f64) -> Result<f64, EvaluateError> {
    Evaluator::default().evaluate_at(set, distance, time)
}

/// Evaluates a spatial profile with the default configuration.
///
/// See [`Evaluator::profile`].
///
/// # Errors
///
/// Returns an [`EvaluateError`] if the arguments are outside the model's
/// domain or the set is invalid.
pub fn profile(
    set: &ParameterSet,
    time: f64,
    distances: &[f64],
) -> Result<TemperatureProfile, EvaluateError> {
    Evaluator::default().profile(set, time, distances)
}

/// Input to [`IntrusionCooling`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingInput {
    pub parameters: ParameterSet,
    /// Distance outward from the contact, m. `None` is the contact itself.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl From<ParameterSet> for CoolingInput {
    fn from(parameters: ParameterSet) -> Self {
        Self {
            parameters,
            distance: None,
        }
    }
}

/// Cooling-curve model over a parameter set's own time grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrusionCooling {
    evaluator: Evaluator,
}

impl IntrusionCooling {
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
        }
    }
}

impl Model for IntrusionCooling {
    type Input = CoolingInput;
    type Output = TemperatureCurve;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluator.evaluate(&input.parameters, input.distance)
    }
}
