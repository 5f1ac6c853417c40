//! Extensions to [`uom`] for conduction problems.
//!
//! The evaluator builds its physical inputs as [`uom`] quantities and only
//! drops to raw SI `f64` inside the closed-form kernels. This module holds
//! the pieces [`uom`] does not ship:
//!
//! - quantity aliases for thermal diffusivity and geothermal gradient;
//! - [`TemperatureDifference`] and [`TemperatureShift`], which move between
//!   absolute temperatures and temperature intervals.
//!
//! ```
//! use uom::si::{
//!     f64::{TemperatureInterval, ThermodynamicTemperature},
//!     temperature_interval::degree_celsius as delta_celsius,
//!     thermodynamic_temperature::degree_celsius,
//! };
//! use geotherm::support::units::{TemperatureDifference, TemperatureShift};
//!
//! let magma = ThermodynamicTemperature::new::<degree_celsius>(716.0);
//! let host = ThermodynamicTemperature::new::<degree_celsius>(594.0);
//! let excess = magma.minus(host);
//! assert!((excess.get::<delta_celsius>() - 122.0).abs() < 1e-9);
//!
//! let back = host.plus(TemperatureInterval::new::<delta_celsius>(122.0));
//! assert!((back.get::<degree_celsius>() - 716.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{GeothermalGradient, ThermalDiffusivity};
pub(crate) use quantities::{diffusivity_from_mm2_per_s, gradient_from_celsius_per_km};
pub use temperature_difference::{TemperatureDifference, TemperatureShift};
