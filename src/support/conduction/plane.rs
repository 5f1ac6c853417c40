//! Tabular body of half-thickness `a` and infinite lateral extent.

use uom::si::f64::Length;

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    special::erfc,
};

use super::{Attenuation, AttenuationFactor, Spread, attenuation_via};

/// Dyke or sill, heated over `-a < x < a`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plane;

impl Attenuation for Plane {
    fn attenuation(
        &self,
        size: Constrained<Length, StrictlyPositive>,
        distance: Constrained<Length, NonNegative>,
        spread: Spread,
    ) -> ConstraintResult<AttenuationFactor> {
        attenuation_via(size, distance, spread, |a, x, sqrt_tau| {
            let s = 2.0 * sqrt_tau;
            erfc(x / s) - erfc((2.0 * a + x) / s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{conduction::test_support::at_distance, special::erf};

    #[test]
    fn contact_holds_full_excess_while_the_body_is_thick() {
        // Both tails are far below double precision.
        assert_eq!(at_distance(&Plane, 1000.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn contact_reduces_to_erf() {
        let (a, sqrt_tau) = (1000.0, 800.0);
        assert_relative_eq!(
            at_distance(&Plane, a, 0.0, sqrt_tau),
            erf(a / sqrt_tau),
            max_relative = 1e-14
        );
    }

    #[test]
    fn half_excess_reaches_the_centre_plane_distance() {
        // At x = a outside the contact, erfc(a/s) - erfc(3a/s).
        let a = 500.0;
        let sqrt_tau = 500.0;
        let expected = erfc(0.5) - erfc(1.5);
        assert_relative_eq!(
            at_distance(&Plane, a, a, sqrt_tau),
            expected,
            max_relative = 1e-14
        );
    }
}
