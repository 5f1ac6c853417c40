//! # GeoTherm
//!
//! Analytical cooling curves for magmatic intrusions.
//!
//! A body of magma emplaced at depth cools by conduction into the host
//! rock. For three idealized shapes (a tabular dyke or sill, a cylindrical
//! plug, and a sphere) the heat-conduction equation has closed-form
//! solutions, and this crate evaluates them to give temperature against
//! time at, or at a distance from, the contact.
//!
//! ## Crate layout
//!
//! - [`registry`]: named, validated parameter sets and the JSON dataset
//!   format, with a bundled set of reference intrusions.
//! - [`models`]: the cooling evaluator and its [`twine_core::Model`]
//!   adapter.
//! - [`session`]: application state for interactive front ends.
//! - [`support`]: conduction kernels, special functions, constraints and
//!   unit helpers used by the models.
//!
//! ## Example
//!
//! ```
//! use geotherm::{Session, models::thermal::intrusion};
//!
//! let mut session = Session::with_bundled_dataset()?;
//! let run = session.run("Barcelona", None)?;
//!
//! let first = run.curve.first().map(|point| point.temperature);
//! assert!(first.is_some_and(|t| (t - 716.0).abs() < 1.0));
//!
//! // Ten kilometres out, 100 000 years later, the host rock has barely warmed.
//! let barcelona = session.registry().get("Barcelona")?;
//! let far = intrusion::evaluate_at(barcelona, 10_000.0, 1.0e5)?;
//! assert!(far - barcelona.ambient_temperature() < 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.

pub mod error;
pub mod models;
pub mod registry;
pub mod session;
pub mod support;

pub use error::Error;
pub use registry::{Geometry, ParameterSet, Registry};
pub use session::Session;
