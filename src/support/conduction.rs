//! Closed-form conduction kernels for cooling intrusions.
//!
//! A body of characteristic size `a` starts at a uniform excess temperature
//! and cools by conduction into an infinite medium. Each body shape
//! implements [`Attenuation`], which returns the fraction of the initial
//! excess left at a distance `x ≥ 0` outside the contact after heat has
//! spread over a length `√(κt)`.
//!
//! The factor is normalized to the contact value at `t → 0⁺`, so it is
//! exactly 1 there and falls towards 0 with time and with distance.
//!
//! # Example
//!
//! ```
//! use geotherm::support::{
//!     conduction::{Attenuation, Sphere, Spread},
//!     constraint::{ConstraintResult, NonNegative, StrictlyPositive},
//! };
//! use uom::si::{f64::Length, length::meter};
//!
//! fn main() -> ConstraintResult<()> {
//!     let radius = StrictlyPositive::new(Length::new::<meter>(1700.0))?;
//!     let contact = NonNegative::zero();
//!
//!     let early = Sphere.attenuation(radius, contact, Spread::new(Length::new::<meter>(1.0))?)?;
//!     let late = Sphere.attenuation(radius, contact, Spread::new(Length::new::<meter>(1.0e5))?)?;
//!
//!     assert!(*early > 0.99);
//!     assert!(*late < 1e-3);
//!     Ok(())
//! }
//! ```

mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;

use std::ops::Deref;

use uom::si::{
    f64::{Area, Length, Time},
    length::meter,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive, UnitInterval},
    units::ThermalDiffusivity,
};

/// Fraction of the initial temperature excess for a body shape.
pub trait Attenuation {
    /// Computes the attenuation factor for a body of characteristic `size`,
    /// at `distance` outside the contact, after heat has spread by `spread`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`](super::constraint::ConstraintError::NotANumber)
    /// if a non-finite input makes the closed form undefined.
    fn attenuation(
        &self,
        size: Constrained<Length, StrictlyPositive>,
        distance: Constrained<Length, NonNegative>,
        spread: Spread,
    ) -> ConstraintResult<AttenuationFactor>;
}

/// Dimensionless multiplier on the initial excess, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AttenuationFactor(Constrained<f64, UnitInterval>);

impl AttenuationFactor {
    /// Creates an [`AttenuationFactor`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside `[0, 1]`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(value)?))
    }

    /// Creates an [`AttenuationFactor`], clamping rounding excursions back
    /// into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is `NaN`.
    pub fn saturating(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::saturating(value)?))
    }
}

impl Deref for AttenuationFactor {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Diffusion length scale `√(κt)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Spread(Constrained<Length, NonNegative>);

impl Spread {
    /// Creates a [`Spread`] from a length.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the length is negative or `NaN`.
    pub fn new(length: Length) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(length)?))
    }

    /// Creates a [`Spread`] from a diffusivity and an elapsed time.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either input is negative.
    pub fn from_diffusivity_and_time(
        diffusivity: ThermalDiffusivity,
        time: Time,
    ) -> ConstraintResult<Self> {
        let area: Area = diffusivity * time;
        NonNegative::new(area)?;
        Self::new(area.sqrt())
    }
}

impl Deref for Spread {
    type Target = Length;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Shared limits and unit handling for the closed forms.
///
/// `fn_raw` receives the size `a`, the distance `x` outside the contact and
/// the spread `√(κt)`, all in metres, with a spread that is positive and
/// finite. A zero spread is the `t → 0⁺` limit and an infinite one the
/// `t → ∞` limit; neither reaches `fn_raw`.
#[inline]
pub(crate) fn attenuation_via(
    size: Constrained<Length, StrictlyPositive>,
    distance: Constrained<Length, NonNegative>,
    spread: Spread,
    fn_raw: impl Fn(f64, f64, f64) -> f64,
) -> ConstraintResult<AttenuationFactor> {
    let a = size.as_ref().get::<meter>();
    let x = distance.as_ref().get::<meter>();
    let s = spread.get::<meter>();

    if s == 0.0 {
        return AttenuationFactor::new(if x == 0.0 { 1.0 } else { 0.0 });
    }
    if s.is_infinite() {
        return AttenuationFactor::new(0.0);
    }
    AttenuationFactor::saturating(fn_raw(a, x, s))
}

/// Gaussian half-widths kept inside the contact; `exp(-49)` is below
/// double precision relative to the peak.
const WINDOW_HALF_WIDTHS: f64 = 14.0;

/// Panels per decay length of the integrand.
const PANELS_PER_SCALE: f64 = 2.0;

const MIN_PANELS: usize = 4;
const MAX_PANELS: usize = 256;

/// Depth `w` inside the contact beyond which `exp(-((x + w)² - x²)/(4τ))`
/// drops below `exp(-49)`.
///
/// Solves `w² + 2xw = 196τ` in the form that does not cancel for `x ≫ √τ`.
pub(crate) fn gaussian_reach(x: f64, sqrt_tau: f64) -> f64 {
    let reach = WINDOW_HALF_WIDTHS * WINDOW_HALF_WIDTHS * sqrt_tau * sqrt_tau;
    reach / (x + (x * x + reach).sqrt())
}

/// Quadrature panels for an interval of `width` whose integrand varies
/// on a length `scale`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn panel_count(width: f64, scale: f64) -> usize {
    let wanted = (width * PANELS_PER_SCALE / scale).ceil();
    if wanted >= MAX_PANELS as f64 {
        MAX_PANELS
    } else {
        (wanted as usize).max(MIN_PANELS)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::second;

    use crate::support::units::diffusivity_from_mm2_per_s;

    use test_support::at_distance;

    const SHAPES: [&dyn Attenuation; 3] = [&Plane, &Cylinder, &Sphere];

    #[test]
    fn spread_from_diffusivity_and_time() -> ConstraintResult<()> {
        let spread = Spread::from_diffusivity_and_time(
            diffusivity_from_mm2_per_s(1.0),
            Time::new::<second>(1.0e6),
        )?;
        assert_relative_eq!(spread.get::<meter>(), 1.0, max_relative = 1e-12);

        assert!(
            Spread::from_diffusivity_and_time(
                diffusivity_from_mm2_per_s(1.0),
                Time::new::<second>(-1.0),
            )
            .is_err()
        );
        Ok(())
    }

    #[test]
    fn limits_bypass_the_closed_forms() {
        for shape in SHAPES {
            assert_eq!(at_distance(shape, 1700.0, 0.0, 0.0), 1.0);
            assert_eq!(at_distance(shape, 1700.0, 10.0, 0.0), 0.0);
            assert_eq!(at_distance(shape, 1700.0, 0.0, f64::INFINITY), 0.0);
        }
    }

    #[test]
    fn every_shape_starts_at_one_and_decays() {
        for shape in SHAPES {
            let mut previous = 1.0;
            for spread in [1e-3, 1.0, 10.0, 100.0, 1e3, 1e4, 1e5] {
                let factor = at_distance(shape, 1700.0, 0.0, spread);
                assert!(factor <= previous, "spread {spread}: {factor} > {previous}");
                previous = factor;
            }
            assert_relative_eq!(at_distance(shape, 1700.0, 0.0, 1e-3), 1.0, epsilon = 1e-5);
            assert!(at_distance(shape, 1700.0, 0.0, 1e7) < 1e-3);
        }
    }

    #[test]
    fn plane_is_the_flattest_and_sphere_the_steepest() {
        let spread = 1000.0;
        let plane = at_distance(&Plane, 1700.0, 0.0, spread);
        let cylinder = at_distance(&Cylinder, 1700.0, 0.0, spread);
        let sphere = at_distance(&Sphere, 1700.0, 0.0, spread);
        assert!(plane > cylinder && cylinder > sphere);
    }

    #[test]
    fn panel_count_is_bounded() {
        assert_eq!(panel_count(1.0, 100.0), MIN_PANELS);
        assert_eq!(panel_count(14.0, 1.0), 28);
        assert_eq!(panel_count(1.0e6, 1.0), MAX_PANELS);
        assert_eq!(panel_count(1.0, 0.0), MAX_PANELS);
    }

    #[test]
    fn gaussian_reach_shrinks_away_from_the_contact() {
        assert_relative_eq!(gaussian_reach(0.0, 2.0), 28.0, max_relative = 1e-15);

        // For x ≫ √τ the reach tends to 98τ/x without cancelling.
        let (x, sqrt_tau) = (1.0e6, 1.0e-3);
        assert_relative_eq!(
            gaussian_reach(x, sqrt_tau),
            98.0 * sqrt_tau * sqrt_tau / x,
            max_relative = 1e-12
        );
    }

    #[test]
    fn decays_with_distance() {
        for distance in [0.0, 10.0, 100.0, 500.0] {
            let near = at_distance(&Sphere, 1700.0, distance, 500.0);
            let far = at_distance(&Sphere, 1700.0, distance + 100.0, 500.0);
            assert!(far < near);
        }
    }
}
