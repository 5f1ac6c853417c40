//! Infinitely long circular cylinder of radius `a`.
//!
//! The excess at radius `r = a + x` is the Bessel integral
//!
//! ```text
//! θ(r, τ) = ∫₀ᵃ ρ/(2τ) · exp(-(r² + ρ²)/(4τ)) · I₀(rρ/(2τ)) dρ
//! ```
//!
//! which has no elementary closed form. Writing `I₀(z) = eᶻ · I0e(z)` folds
//! the growing Bessel factor into the Gaussian, leaving the bounded
//! integrand `ρ/(2τ) · exp(-(r - ρ)²/(4τ)) · I0e(rρ/(2τ))`. It is
//! integrated over the depth `w = a - ρ` inside the contact, so the gap
//! `r - ρ = x + w` never cancels.
//!
//! While the spread is a tiny fraction of the radius the Gaussian is
//! narrower than the quadrature can resolve against `a`, and the
//! short-time expansion
//!
//! ```text
//! 2θ ≈ erfc(x/(2√τ)) - √τ/(r√π) · exp(-x²/(4τ)) · (1 + x/(4r))
//! ```
//!
//! is exact to double precision instead.

use std::f64::consts::PI;

use uom::si::f64::Length;

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    special::{bessel_i0e, erfc, gauss_legendre},
};

use super::{
    Attenuation, AttenuationFactor, Spread, attenuation_via, gaussian_reach, panel_count,
};

/// Largest `√τ / a` handled by the short-time expansion. Its truncation
/// error is of order `(√τ / a)³`.
const SHORT_TIME: f64 = 1.0e-6;

/// Plug-like body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cylinder;

impl Attenuation for Cylinder {
    fn attenuation(
        &self,
        size: Constrained<Length, StrictlyPositive>,
        distance: Constrained<Length, NonNegative>,
        spread: Spread,
    ) -> ConstraintResult<AttenuationFactor> {
        attenuation_via(size, distance, spread, |a, x, sqrt_tau| {
            if sqrt_tau <= SHORT_TIME * a {
                short_time(a, x, sqrt_tau)
            } else {
                bessel_integral(a, x, sqrt_tau)
            }
        })
    }
}

fn short_time(a: f64, x: f64, sqrt_tau: f64) -> f64 {
    let r = a + x;
    let u = x / (2.0 * sqrt_tau);
    erfc(u) - sqrt_tau / (r * PI.sqrt()) * (-u * u).exp() * (1.0 + x / (4.0 * r))
}

fn bessel_integral(a: f64, x: f64, sqrt_tau: f64) -> f64 {
    let r = a + x;
    let two_tau = 2.0 * sqrt_tau * sqrt_tau;
    let four_tau = 2.0 * two_tau;

    let depth = gaussian_reach(x, sqrt_tau).min(a);
    let scale = two_tau / (x + 2.0 * sqrt_tau);

    let theta = gauss_legendre(
        |w| {
            let rho = a - w;
            let gap = x + w;
            rho / two_tau * (-gap * gap / four_tau).exp() * bessel_i0e(r * rho / two_tau)
        },
        0.0,
        depth,
        panel_count(depth, scale),
    );
    2.0 * theta
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::conduction::{Plane, Sphere, test_support::at_distance};

    #[test]
    fn early_contact_is_close_to_one() {
        let factor = at_distance(&Cylinder, 1700.0, 0.0, 1.0e-2);
        assert_relative_eq!(factor, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn early_contact_loses_half_the_sphere_curvature() {
        // A ≈ 1 - √τ/(a√π) on both sides of the switch to quadrature.
        let a = 1700.0;
        for sqrt_tau in [1.0e-9, 1.0e-3, 1.7e-3, 1.8e-3, 1.0e-1] {
            assert_relative_eq!(
                at_distance(&Cylinder, a, 0.0, sqrt_tau),
                1.0 - sqrt_tau / (a * PI.sqrt()),
                max_relative = 1e-13
            );
        }
    }

    #[test]
    fn expansion_and_quadrature_agree_at_the_switch() {
        let (a, x) = (1700.0, 2.0e-3);
        let sqrt_tau = SHORT_TIME * a;
        let expansion = short_time(a, x, sqrt_tau);
        let quadrature = bessel_integral(a, x, sqrt_tau);
        assert_relative_eq!(expansion, quadrature, max_relative = 1e-13);
    }

    #[test]
    fn vanishing_spread_keeps_the_full_excess() {
        for sqrt_tau in [f64::MIN_POSITIVE, 1.0e-150, 1.0e-20] {
            assert_eq!(at_distance(&Cylinder, 1700.0, 0.0, sqrt_tau), 1.0);
        }
        assert_eq!(at_distance(&Cylinder, 1700.0, 1.0e-6, 1.0e-12), 0.0);
    }

    #[test]
    fn sits_between_plane_and_sphere() {
        for sqrt_tau in [10.0, 300.0, 3000.0] {
            let plane = at_distance(&Plane, 1700.0, 0.0, sqrt_tau);
            let cylinder = at_distance(&Cylinder, 1700.0, 0.0, sqrt_tau);
            let sphere = at_distance(&Sphere, 1700.0, 0.0, sqrt_tau);
            assert!(sphere < cylinder && cylinder < plane, "√τ = {sqrt_tau}");
        }
    }

    #[test]
    fn late_decay_follows_the_line_source() {
        // Far beyond the radius the plug acts as a line source:
        // A ≈ a² / (2τ) at the contact.
        let (a, sqrt_tau): (f64, f64) = (100.0, 1.0e4);
        assert_relative_eq!(
            at_distance(&Cylinder, a, 0.0, sqrt_tau),
            a * a / (2.0 * sqrt_tau * sqrt_tau),
            max_relative = 1e-3
        );
    }

    #[test]
    fn nothing_arrives_far_beyond_the_spread() {
        assert_eq!(at_distance(&Cylinder, 100.0, 1000.0, 10.0), 0.0);
    }
}
