//! Application state for an interactive front end.
//!
//! A [`Session`] owns the registry a user is working with, their plot
//! preferences, and the result of the last model run. Front ends hold one
//! `Session` per user instead of sharing global state.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    models::thermal::intrusion::{Evaluator, EvaluatorConfig, TemperatureCurve},
    registry::{DatasetError, Registry, ValidationError},
};

/// Display preferences carried between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotDefaults {
    /// Plot automatically after every run.
    pub auto_plot: bool,
    /// Fixed time axis `(min, max)`; `None` fits the data.
    pub time_range: Option<(f64, f64)>,
    /// Fixed temperature axis `(min, max)` in °C; `None` fits the data.
    pub temperature_range: Option<(f64, f64)>,
}

impl Default for PlotDefaults {
    fn default() -> Self {
        Self {
            auto_plot: true,
            time_range: None,
            temperature_range: None,
        }
    }
}

impl PlotDefaults {
    fn validate(&self) -> Result<(), ValidationError> {
        check_range(self.time_range, "time")?;
        check_range(self.temperature_range, "temperature")
    }
}

fn check_range(range: Option<(f64, f64)>, what: &'static str) -> Result<(), ValidationError> {
    match range {
        Some((lo, hi)) if !(lo.is_finite() && hi.is_finite() && lo < hi) => {
            Err(ValidationError::Range { what })
        }
        _ => Ok(()),
    }
}

/// A completed model run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Id of the evaluated parameter set.
    pub id: String,
    /// Distance from the contact, m. `None` is the contact.
    pub distance: Option<f64>,
    pub curve: TemperatureCurve,
}

/// One user's working state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Registry,
    evaluator: Evaluator,
    plot_defaults: PlotDefaults,
    last_run: Option<Run>,
}

impl Session {
    /// Creates a session with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session preloaded with the bundled reference intrusions.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the bundled data is rejected.
    pub fn with_bundled_dataset() -> Result<Self, DatasetError> {
        Ok(Self::with_registry(Registry::bundled()?))
    }

    /// Creates a session around an existing registry.
    #[must_use]
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Replaces the evaluator configuration used by [`Session::run`].
    #[must_use]
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.evaluator = Evaluator::new(config);
        self
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    #[must_use]
    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    /// Evaluates the registered set `id` and keeps the result.
    ///
    /// On failure the previous run, if any, is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id, or the evaluation
    /// error otherwise.
    pub fn run(&mut self, id: &str, distance: Option<f64>) -> Result<&Run, Error> {
        let set = self.registry.get(id)?;
        let curve = self.evaluator.evaluate(set, distance)?;
        debug!("ran `{id}` with {} samples", curve.len());

        Ok(self.last_run.insert(Run {
            id: id.to_owned(),
            distance,
            curve,
        }))
    }

    #[must_use]
    pub fn last_run(&self) -> Option<&Run> {
        self.last_run.as_ref()
    }

    /// Drops the last run. The registry and plot defaults are kept.
    pub fn clear(&mut self) {
        if self.last_run.take().is_some() {
            debug!("cleared last run");
        }
    }

    #[must_use]
    pub fn plot_defaults(&self) -> PlotDefaults {
        self.plot_defaults
    }

    /// Replaces the plot defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Range`] if a range is non-finite, empty
    /// or reversed; the previous defaults are kept.
    pub fn set_plot_defaults(&mut self, defaults: PlotDefaults) -> Result<(), ValidationError> {
        defaults.validate()?;
        self.plot_defaults = defaults;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::thermal::intrusion::{DomainError, TimeUnit},
        registry::ParameterSet,
    };

    fn session() -> Session {
        Session::with_bundled_dataset().unwrap()
    }

    #[test]
    fn run_keeps_the_result() {
        let mut session = session();
        let run = session.run("Barcelona", None).unwrap();
        assert_eq!(run.id, "Barcelona");
        assert_eq!(run.curve.len(), 9);

        let last = session.last_run().unwrap();
        assert_relative_eq!(last.curve.temperatures()[0], 715.507_44, epsilon = 1e-4);
    }

    #[test]
    fn failed_run_keeps_the_previous_one() {
        let mut session = session();
        session.run("Ballachulish", Some(50.0)).unwrap();

        assert!(matches!(
            session.run("nonexistent", None),
            Err(Error::NotFound { ref id }) if id == "nonexistent"
        ));
        assert!(matches!(
            session.run("Barcelona", Some(-1.0)),
            Err(Error::Domain(DomainError::NegativeDistance { .. }))
        ));

        let last = session.last_run().unwrap();
        assert_eq!(last.id, "Ballachulish");
        assert_eq!(last.distance, Some(50.0));
    }

    #[test]
    fn clear_drops_only_the_run() {
        let mut session = session();
        session.run("Torres del Paine", None).unwrap();
        session.clear();

        assert!(session.last_run().is_none());
        assert_eq!(session.registry().len(), 3);
        assert!(session.plot_defaults().auto_plot);
    }

    #[test]
    fn runs_see_registry_edits() {
        let mut session = Session::new().with_config(EvaluatorConfig {
            time_unit: TimeUnit::Second,
        });
        assert!(session.registry().is_empty());

        let set = ParameterSet {
            id: "Sill".into(),
            ..Registry::bundled().unwrap().get("Torres del Paine").unwrap().clone()
        };
        session.registry_mut().put(set).unwrap();

        let run = session.run("Sill", None).unwrap();
        // Ten million seconds is a few metres of diffusion: no visible cooling.
        assert!(run.curve.temperatures().iter().all(|&t| (t - 850.0).abs() < 1e-6));
    }

    #[test]
    fn plot_defaults_reject_bad_ranges() {
        let mut session = Session::new();
        let custom = PlotDefaults {
            auto_plot: false,
            time_range: Some((1.0, 1.0e7)),
            temperature_range: Some((550.0, 750.0)),
        };
        session.set_plot_defaults(custom).unwrap();
        assert_eq!(session.plot_defaults(), custom);

        let reversed = PlotDefaults {
            temperature_range: Some((750.0, 550.0)),
            ..custom
        };
        assert_eq!(
            session.set_plot_defaults(reversed),
            Err(ValidationError::Range {
                what: "temperature"
            })
        );

        let unbounded = PlotDefaults {
            time_range: Some((0.0, f64::INFINITY)),
            ..custom
        };
        assert_eq!(
            session.set_plot_defaults(unbounded),
            Err(ValidationError::Range { what: "time" })
        );
        assert_eq!(session.plot_defaults(), custom);
    }
}
