//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, but
//! their APIs are not stable.
//!
//! - [`conduction`]: closed-form conduction kernels per body shape.
//! - [`constraint`]: numeric invariants checked at construction.
//! - [`special`]: error function, scaled Bessel `I₀`, Gauss–Legendre quadrature.
//! - [`units`]: [`uom`] extensions for diffusivity, gradients and temperatures.

pub mod conduction;
pub mod constraint;
pub mod special;
pub mod units;
