use serde::{Deserialize, Serialize};
use uom::si::{
    f64::Time,
    time::{second, year},
};

/// Unit of the values in a parameter set's time grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar years of 365 days.
    #[default]
    Year,
    /// SI seconds.
    Second,
}

impl TimeUnit {
    /// Interprets a raw grid value in this unit.
    #[must_use]
    pub fn time(self, value: f64) -> Time {
        match self {
            TimeUnit::Year => Time::new::<year>(value),
            TimeUnit::Second => Time::new::<second>(value),
        }
    }
}

/// Evaluator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Unit of the time grid and of single time arguments.
    pub time_unit: TimeUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn years_are_365_days() {
        let t = TimeUnit::Year.time(1.0);
        assert_relative_eq!(t.get::<second>(), 365.0 * 86_400.0, max_relative = 1e-12);
        assert_eq!(TimeUnit::default(), TimeUnit::Year);
    }

    #[test]
    fn seconds_pass_through() {
        assert_eq!(TimeUnit::Second.time(42.0).get::<second>(), 42.0);
    }
}
