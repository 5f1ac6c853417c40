use serde::{Deserialize, Serialize};

use crate::support::constraint::{ConstraintError, StrictlyPositive, finite};

use super::{Geometry, ValidationError};

/// Physical description of one named intrusion and its sampling grid.
///
/// Field units:
///
/// | Field | Key | Unit |
/// |---|---|---|
/// | `initial_temperature` | `T0` | °C |
/// | `magma_conductivity` | `K1` | W/(m·K) |
/// | `rock_diffusivity` | `k` | mm²/s |
/// | `rock_conductivity` | `K` | W/(m·K) |
/// | `magma_diffusivity` | `k1` | mm²/s |
/// | `gradient` | `g` | °C/km |
/// | `depth` | `l` | km |
/// | `size` | `d` | m |
/// | `time` | `time` | years, unless the evaluator is configured otherwise |
///
/// The undisturbed host-rock temperature is `g · l`; see
/// [`ambient_temperature`](Self::ambient_temperature).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub id: String,
    pub geometry: Geometry,
    #[serde(rename = "T0")]
    pub initial_temperature: f64,
    #[serde(rename = "K1")]
    pub magma_conductivity: f64,
    #[serde(rename = "k")]
    pub rock_diffusivity: f64,
    #[serde(rename = "K")]
    pub rock_conductivity: f64,
    #[serde(rename = "k1")]
    pub magma_diffusivity: f64,
    #[serde(rename = "g")]
    pub gradient: f64,
    #[serde(rename = "l")]
    pub depth: f64,
    #[serde(rename = "d")]
    pub size: f64,
    pub time: Vec<f64>,
}

impl ParameterSet {
    /// Host-rock temperature at emplacement depth, `g · l` in °C.
    #[must_use]
    pub fn ambient_temperature(&self) -> f64 {
        self.gradient * self.depth
    }

    /// Initial temperature excess of the magma over the host rock, °C.
    #[must_use]
    pub fn initial_excess(&self) -> f64 {
        self.initial_temperature - self.ambient_temperature()
    }

    /// Checks every field against its required sign and range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        finite(self.initial_temperature).map_err(|source| ValidationError::Field {
            field: "T0",
            source,
        })?;
        for (field, value) in [
            ("K1", self.magma_conductivity),
            ("k", self.rock_diffusivity),
            ("K", self.rock_conductivity),
            ("k1", self.magma_diffusivity),
            ("g", self.gradient),
            ("l", self.depth),
            ("d", self.size),
        ] {
            positive(value).map_err(|source| ValidationError::Field { field, source })?;
        }

        let ambient = self.ambient_temperature();
        if self.initial_temperature <= ambient {
            return Err(ValidationError::NotAboveAmbient {
                initial: self.initial_temperature,
                ambient,
            });
        }

        validate_time_grid(&self.time)
    }
}

fn positive(value: f64) -> Result<f64, ConstraintError> {
    let value = finite(value)?;
    Ok(StrictlyPositive::new(value)?.into_inner())
}

/// Checks that a time grid is non-empty, positive, finite, and strictly increasing.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first offending sample.
pub fn validate_time_grid(time: &[f64]) -> Result<(), ValidationError> {
    if time.is_empty() {
        return Err(ValidationError::EmptyTimeGrid);
    }
    for (index, &t) in time.iter().enumerate() {
        positive(t).map_err(|source| ValidationError::Time { index, source })?;
    }
    if let Some(index) = time
        .windows(2)
        .position(|pair| pair[1] <= pair[0])
        .map(|i| i + 1)
    {
        return Err(ValidationError::TimeNotIncreasing { index });
    }
    Ok(())
}

/// Parses a semicolon-separated list of times, as typed into an input form.
///
/// Blank fields are skipped. Ordering is left to [`validate_time_grid`].
///
/// ```
/// use geotherm::registry::parse_time_grid;
///
/// let grid = parse_time_grid("1; 10;100 ;").unwrap();
/// assert_eq!(grid, vec![1.0, 10.0, 100.0]);
/// assert!(parse_time_grid("1;0").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ValidationError::TimeNotANumber`] for unparsable fields and
/// [`ValidationError::Time`] for zero, negative, or non-finite values.
pub fn parse_time_grid(text: &str) -> Result<Vec<f64>, ValidationError> {
    text.split(';')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .enumerate()
        .map(|(index, field)| {
            let value: f64 = field
                .parse()
                .map_err(|_| ValidationError::TimeNotANumber {
                    text: field.to_owned(),
                })?;
            positive(value).map_err(|source| ValidationError::Time { index, source })
        })
        .collect()
}
