//! Closed-form cooling of an intrusion into its host rock.
//!
//! The evaluator resolves a [`ParameterSet`] into physical quantities,
//! then samples the geometry's conduction kernel over a time grid (a
//! cooling curve) or over a set of distances (a profile).

mod config;
mod curve;
mod error;
mod properties;

pub use config::{EvaluatorConfig, TimeUnit};
pub use curve::{CurvePoint, ProfilePoint, TemperatureCurve, TemperatureProfile};
pub use error::{DomainError, EvaluateError};

use log::trace;
use uom::si::{
    f64::{Length, Time},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    registry::{Geometry, ParameterSet},
    support::{
        conduction::{Attenuation, AttenuationFactor, Cylinder, Plane, Sphere, Spread},
        constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive, finite},
    },
};

use properties::Properties;

/// Computes attenuation for a geometry.
///
/// This is the pure kernel behind every evaluation: no validation beyond
/// the constrained argument types, no unit handling.
///
/// # Errors
///
/// Returns a [`ConstraintError`](crate::support::constraint::ConstraintError)
/// if a non-finite input makes the closed form undefined.
pub fn attenuation(
    geometry: Geometry,
    size: Constrained<Length, StrictlyPositive>,
    distance: Constrained<Length, NonNegative>,
    spread: Spread,
) -> ConstraintResult<AttenuationFactor> {
    shape(geometry).attenuation(size, distance, spread)
}

fn shape(geometry: Geometry) -> &'static dyn Attenuation {
    match geometry {
        Geometry::Plane => &Plane,
        Geometry::Cylinder => &Cylinder,
        Geometry::Sphere => &Sphere,
    }
}

/// Evaluates cooling curves and profiles with a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> EvaluatorConfig {
        self.config
    }

    /// Temperature against time over the set's own time grid.
    ///
    /// `distance` is measured outward from the contact in metres; `None`
    /// evaluates at the contact. A contact curve starts at the initial
    /// temperature and never warms. At a positive distance the curve
    /// starts at ambient, peaks once when the heat arrives, then cools.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::Domain`] for a non-positive time sample, a
    /// negative distance, or a non-positive size (checked in that order),
    /// and [`EvaluateError::Validation`] if the set is otherwise invalid.
    pub fn evaluate(
        &self,
        set: &ParameterSet,
        distance: Option<f64>,
    ) -> Result<TemperatureCurve, EvaluateError> {
        let times = set
            .time
            .iter()
            .enumerate()
            .map(|(index, &value)| self.time(index, value).map(|time| (value, time)))
            .collect::<Result<Vec<_>, _>>()?;
        let distance_m = distance.unwrap_or(0.0);
        let at = checked_distance(distance_m)?;
        let cooling = Cooling::prepare(set)?;

        trace!(
            "evaluating `{}` ({}) at {distance_m} m: κ_eff = {:.6e} m²/s over {} samples",
            set.id,
            set.geometry,
            cooling.properties.diffusivity.value,
            times.len()
        );

        let points = times
            .into_iter()
            .map(|(value, time)| {
                Ok(CurvePoint {
                    time: value,
                    temperature: cooling.temperature(at, time)?,
                })
            })
            .collect::<Result<Vec<_>, EvaluateError>>()?;

        Ok(TemperatureCurve::new(
            points,
            distance_m,
            set.ambient_temperature(),
        ))
    }

    /// Temperature at one distance and one time.
    ///
    /// # Errors
    ///
    /// As for [`Evaluator::evaluate`].
    pub fn evaluate_at(
        &self,
        set: &ParameterSet,
        distance: f64,
        time: f64,
    ) -> Result<f64, EvaluateError> {
        let time = self.time(0, time)?;
        let at = checked_distance(distance)?;
        Cooling::prepare(set)?.temperature(at, time)
    }

    /// Temperature against distance at one time.
    ///
    /// Distances are returned in the order given and need not be sorted.
    ///
    /// # Errors
    ///
    /// As for [`Evaluator::evaluate`], with every distance checked.
    pub fn profile(
        &self,
        set: &ParameterSet,
        time: f64,
        distances: &[f64],
    ) -> Result<TemperatureProfile, EvaluateError> {
        let at_time = self.time(0, time)?;
        let checked = distances
            .iter()
            .map(|&distance| checked_distance(distance).map(|at| (distance, at)))
            .collect::<Result<Vec<_>, _>>()?;
        let cooling = Cooling::prepare(set)?;

        trace!(
            "profiling `{}` ({}) at t = {time}: {} distances",
            set.id,
            set.geometry,
            checked.len()
        );

        let points = checked
            .into_iter()
            .map(|(distance, at)| {
                Ok(ProfilePoint {
                    distance,
                    temperature: cooling.temperature(at, at_time)?,
                })
            })
            .collect::<Result<Vec<_>, EvaluateError>>()?;

        Ok(TemperatureProfile::new(
            points,
            time,
            set.ambient_temperature(),
        ))
    }

    fn time(&self, index: usize, value: f64) -> Result<Time, DomainError> {
        if finite(value).is_err() || StrictlyPositive::new(value).is_err() {
            return Err(DomainError::NonPositiveTime { index, value });
        }
        Ok(self.config.time_unit.time(value))
    }
}

fn checked_distance(distance: f64) -> Result<Constrained<Length, NonNegative>, DomainError> {
    finite(distance)
        .ok()
        .and_then(|metres| NonNegative::new(Length::new::<meter>(metres)).ok())
        .ok_or(DomainError::NegativeDistance { distance })
}

/// A validated set, ready to sample.
struct Cooling {
    geometry: Geometry,
    size: Constrained<Length, StrictlyPositive>,
    properties: Properties,
}

impl Cooling {
    fn prepare(set: &ParameterSet) -> Result<Self, EvaluateError> {
        let size = finite(set.size)
            .ok()
            .and_then(|_| StrictlyPositive::new(properties::size(set)).ok())
            .ok_or(DomainError::NonPositiveSize { size: set.size })?;
        set.validate()?;

        Ok(Self {
            geometry: set.geometry,
            size,
            properties: Properties::of(set),
        })
    }

    fn temperature(
        &self,
        distance: Constrained<Length, NonNegative>,
        time: Time,
    ) -> Result<f64, EvaluateError> {
        let spread = Spread::from_diffusivity_and_time(self.properties.diffusivity, time)?;
        let factor = attenuation(self.geometry, self.size, distance, spread)?;
        Ok(self
            .properties
            .temperature(*factor)
            .get::<degree_celsius>())
    }
}
