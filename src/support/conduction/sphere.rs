//! Spherical body of radius `a`.
//!
//! The closed form is a planar term less a curvature term. Once the spread
//! exceeds the radius both terms are of order `a/√τ` while their
//! difference is of order `(a/√τ)³`, so the excess is integrated directly
//! from the positive kernel
//!
//! ```text
//! A = 1/(r√(πτ)) ∫₀ᵃ ρ · exp(-(r - ρ)²/(4τ)) · (1 - exp(-rρ/τ)) dρ
//! ```
//!
//! instead.

use std::f64::consts::PI;

use uom::si::f64::Length;

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    special::{erfc, gauss_legendre},
};

use super::{Attenuation, AttenuationFactor, Spread, attenuation_via, panel_count};

/// Spheric-like body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Attenuation for Sphere {
    fn attenuation(
        &self,
        size: Constrained<Length, StrictlyPositive>,
        distance: Constrained<Length, NonNegative>,
        spread: Spread,
    ) -> ConstraintResult<AttenuationFactor> {
        attenuation_via(size, distance, spread, |a, x, sqrt_tau| {
            if sqrt_tau < a {
                closed_form(a, x, sqrt_tau)
            } else {
                point_like(a, x, sqrt_tau)
            }
        })
    }
}

fn closed_form(a: f64, x: f64, sqrt_tau: f64) -> f64 {
    let r = a + x;
    let s = 2.0 * sqrt_tau;
    let four_tau = s * s;
    let far = 2.0 * a + x;

    let planar = erfc(x / s) - erfc(far / s);
    let curvature =
        s / (r * PI.sqrt()) * ((-x * x / four_tau).exp() - (-far * far / four_tau).exp());
    planar - curvature
}

fn point_like(a: f64, x: f64, sqrt_tau: f64) -> f64 {
    let r = a + x;
    let tau = sqrt_tau * sqrt_tau;
    let four_tau = 4.0 * tau;
    let scale = 2.0 * tau / (r + 2.0 * sqrt_tau);

    let integral = gauss_legendre(
        |w| {
            let rho = a - w;
            let gap = x + w;
            rho * (-gap * gap / four_tau).exp() * -(-r * rho / tau).exp_m1()
        },
        0.0,
        a,
        panel_count(a, scale),
    );
    integral / (r * PI.sqrt() * sqrt_tau)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::conduction::{Plane, test_support::at_distance};

    #[test]
    fn early_contact_loses_only_the_curvature_term() {
        // For √τ ≪ a the curvature correction is 2√τ/(a√π).
        let (a, sqrt_tau) = (1700.0, 1.0);
        assert_relative_eq!(
            at_distance(&Sphere, a, 0.0, sqrt_tau),
            1.0 - 2.0 * sqrt_tau / (a * PI.sqrt()),
            max_relative = 1e-12
        );
    }

    #[test]
    fn cools_faster_than_a_plane_of_the_same_size() {
        for sqrt_tau in [10.0, 300.0, 3000.0] {
            let sphere = at_distance(&Sphere, 1700.0, 0.0, sqrt_tau);
            let plane = at_distance(&Plane, 1700.0, 0.0, sqrt_tau);
            assert!(sphere < plane, "√τ = {sqrt_tau}: {sphere} >= {plane}");
        }
    }

    #[test]
    fn both_forms_agree_where_the_spread_reaches_the_radius() {
        let a = 1700.0;
        for x in [0.0, 100.0, 2000.0] {
            assert_relative_eq!(
                closed_form(a, x, a),
                point_like(a, x, a),
                max_relative = 1e-13
            );
        }
    }

    #[test]
    fn late_decay_follows_the_point_source() {
        // Far beyond the radius the body acts as a point source:
        // A ≈ a³ / (3 √π τ^{3/2}) at the contact.
        let (a, sqrt_tau): (f64, f64) = (100.0, 1.0e4);
        let point_source = a.powi(3) / (3.0 * PI.sqrt() * sqrt_tau.powi(3));
        assert_relative_eq!(
            at_distance(&Sphere, a, 0.0, sqrt_tau),
            point_source,
            max_relative = 1e-3
        );
    }

    #[test]
    fn late_contact_keeps_cooling() {
        // Spreads a few percent apart, far past the radius: the contact
        // factor is of order 1e-10 and must still fall at every step.
        let a = 1.0;
        let mut previous = at_distance(&Sphere, a, 0.0, 500.0);
        for step in 1..200 {
            let sqrt_tau = 500.0 * 1.01_f64.powi(step);
            let factor = at_distance(&Sphere, a, 0.0, sqrt_tau);
            assert!(factor > 0.0 && factor < previous, "√τ = {sqrt_tau}");
            previous = factor;
        }
    }
}
