//! Special functions used by the closed-form conduction solutions.
//!
//! Everything here is a plain `f64` function with a fixed sequence of
//! floating-point operations, so identical inputs give bit-identical
//! outputs.

use std::f64::consts::PI;

/// `2 / √π`.
const TWO_OVER_SQRT_PI: f64 = 1.128_379_167_095_512_6;

/// Above this argument `erfc` underflows to zero.
const ERFC_UNDERFLOW: f64 = 27.3;

/// Switch from the power series to the continued fraction.
const SERIES_LIMIT: f64 = 3.0;

const MAX_TERMS: usize = 500;

/// The error function.
#[must_use]
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return -erf(-x);
    }
    if x < SERIES_LIMIT {
        erf_series(x)
    } else {
        1.0 - erfc_continued_fraction(x)
    }
}

/// The complementary error function, `1 - erf(x)`.
///
/// Computed directly for large arguments so the tail keeps its relative
/// precision instead of cancelling against 1.
#[must_use]
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 2.0 - erfc(-x);
    }
    if x < SERIES_LIMIT {
        1.0 - erf_series(x)
    } else {
        erfc_continued_fraction(x)
    }
}

/// `erf(x) = 2/√π · e^(-x²) · Σ (2x²)ⁿ x / (1·3·…·(2n+1))`.
///
/// Every term is positive, so the sum does not cancel.
fn erf_series(x: f64) -> f64 {
    let two_x2 = 2.0 * x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..MAX_TERMS {
        term *= two_x2 / (2 * n + 1) as f64;
        sum += term;
        if term <= sum * f64::EPSILON * 0.5 {
            break;
        }
    }
    TWO_OVER_SQRT_PI * (-x * x).exp() * sum
}

/// `erfc(x) = e^(-x²)/√π · 1/(x + ½/(x + 1/(x + 3/2/(x + …))))`, by
/// the modified Lentz method.
fn erfc_continued_fraction(x: f64) -> f64 {
    if x > ERFC_UNDERFLOW {
        return 0.0;
    }

    const TINY: f64 = 1e-300;

    let mut f = x;
    let mut c = x;
    let mut d = 0.0;
    for n in 1..MAX_TERMS {
        let a = n as f64 * 0.5;
        d = x + a * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = x + a / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = d.recip();
        let delta = c * d;
        f *= delta;
        if (delta - 1.0).abs() < f64::EPSILON {
            break;
        }
    }
    (-x * x).exp() / (PI.sqrt() * f)
}

/// Above this argument `I₀` is summed from its asymptotic series.
const I0_SERIES_LIMIT: f64 = 30.0;

/// Exponentially scaled modified Bessel function of the first kind, order
/// zero: `e^(-|x|) I₀(x)`.
///
/// Summed from the power series `Σ (x²/4)ᵏ / (k!)²` for moderate arguments
/// and from the asymptotic series `e^|x| / √(2π|x|) · Σ ((2k-1)!!)² / (k! (8|x|)ᵏ)`
/// beyond 30, both to full double precision. The scaling
/// keeps the result finite for arguments where `I₀` itself overflows.
#[must_use]
pub fn bessel_i0e(x: f64) -> f64 {
    let ax = x.abs();
    if ax <= I0_SERIES_LIMIT {
        let quarter_x2 = 0.25 * ax * ax;
        let mut term = 1.0;
        let mut sum = 1.0;
        for k in 1..MAX_TERMS {
            let k = k as f64;
            term *= quarter_x2 / (k * k);
            sum += term;
            if term <= sum * f64::EPSILON * 0.5 {
                break;
            }
        }
        sum * (-ax).exp()
    } else {
        let eighth = 1.0 / (8.0 * ax);
        let mut term = 1.0;
        let mut sum = 1.0;
        for k in 1..MAX_TERMS {
            let odd = (2 * k - 1) as f64;
            term *= odd * odd * eighth / k as f64;
            sum += term;
            if term <= sum * f64::EPSILON * 0.5 {
                break;
            }
        }
        sum / (2.0 * PI * ax).sqrt()
    }
}

/// Nodes and weights of the 8-point Gauss–Legendre rule on `[-1, 1]`.
const GAUSS_LEGENDRE_8: [(f64, f64); 8] = [
    (-0.960_289_856_497_536_3, 0.101_228_536_290_376_3),
    (-0.796_666_477_413_626_7, 0.222_381_034_453_374_5),
    (-0.525_532_409_916_329_0, 0.313_706_645_877_887_3),
    (-0.183_434_642_495_649_8, 0.362_683_783_378_362_0),
    (0.183_434_642_495_649_8, 0.362_683_783_378_362_0),
    (0.525_532_409_916_329_0, 0.313_706_645_877_887_3),
    (0.796_666_477_413_626_7, 0.222_381_034_453_374_5),
    (0.960_289_856_497_536_3, 0.101_228_536_290_376_3),
];

/// Integrates `f` over `[lo, hi]` with composite 8-point Gauss–Legendre
/// quadrature on `panels` equal sub-intervals.
///
/// Returns zero for an empty or reversed interval.
pub fn gauss_legendre(f: impl Fn(f64) -> f64, lo: f64, hi: f64, panels: usize) -> f64 {
    if panels == 0 || lo.is_nan() || hi.is_nan() || hi <= lo {
        return 0.0;
    }
    let width = (hi - lo) / panels as f64;
    let half = 0.5 * width;
    (0..panels)
        .map(|panel| {
            let mid = lo + (panel as f64 + 0.5) * width;
            GAUSS_LEGENDRE_8
                .iter()
                .map(|&(node, weight)| weight * f(mid + half * node))
                .sum::<f64>()
                * half
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn erf_reference_values() {
        assert_eq!(erf(0.0), 0.0);
        assert_relative_eq!(erf(0.5), 0.520_499_877_813_046_5, max_relative = 1e-14);
        assert_relative_eq!(erf(1.0), 0.842_700_792_949_714_9, max_relative = 1e-14);
        assert_relative_eq!(erf(2.0), 0.995_322_265_018_952_7, max_relative = 1e-14);
        assert_relative_eq!(erf(-1.0), -0.842_700_792_949_714_9, max_relative = 1e-14);
    }

    #[test]
    fn erfc_keeps_tail_precision() {
        assert_relative_eq!(erfc(3.0), 2.209_049_699_858_544e-5, max_relative = 1e-12);
        assert_relative_eq!(erfc(5.0), 1.537_459_794_428_035e-12, max_relative = 1e-10);
        assert_relative_eq!(erfc(10.0), 2.088_487_583_762_545e-45, max_relative = 1e-10);
        assert_eq!(erfc(30.0), 0.0);
        assert_relative_eq!(erfc(-3.0), 2.0 - 2.209_049_699_858_544e-5, max_relative = 1e-14);
    }

    #[test]
    fn erf_and_erfc_agree_across_the_switch() {
        for x in [2.9, 2.99, 3.0, 3.01, 3.1] {
            assert_relative_eq!(erf(x) + erfc(x), 1.0, max_relative = 1e-14);
        }
        assert_relative_eq!(erfc(2.999_999), erfc(3.000_001), max_relative = 1e-4);
    }

    #[test]
    fn i0e_reference_values() {
        // e^-x I0(x) from tabulated I0.
        assert_eq!(bessel_i0e(0.0), 1.0);
        assert_relative_eq!(
            bessel_i0e(1.0),
            1.266_065_877_752_008_4 * (-1.0f64).exp(),
            max_relative = 1e-14
        );
        assert_relative_eq!(
            bessel_i0e(5.0),
            27.239_871_823_604_442 * (-5.0f64).exp(),
            max_relative = 1e-14
        );
        assert_relative_eq!(bessel_i0e(-5.0), bessel_i0e(5.0));
    }

    #[test]
    fn i0e_is_continuous_across_the_series_switch() {
        let below = bessel_i0e(I0_SERIES_LIMIT);
        let above = bessel_i0e(I0_SERIES_LIMIT * (1.0 + f64::EPSILON));
        assert_relative_eq!(below, above, max_relative = 1e-14);
    }

    #[test]
    fn i0e_stays_finite_for_huge_arguments() {
        let x = 1.0e12;
        let scaled = bessel_i0e(x);
        assert!(scaled.is_finite());
        assert_relative_eq!(scaled, 1.0 / (2.0 * PI * x).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn quadrature_is_exact_for_polynomials() {
        let integral = gauss_legendre(|x| 3.0 * x * x, 0.0, 2.0, 1);
        assert_relative_eq!(integral, 8.0, max_relative = 1e-14);
    }

    #[test]
    fn quadrature_of_a_narrow_gaussian() {
        // The tails beyond ±5 contribute about 2e-12.
        let integral = gauss_legendre(|x| (-x * x).exp(), -5.0, 5.0, 20);
        assert_relative_eq!(integral, PI.sqrt(), max_relative = 1e-10);
    }

    #[test]
    fn empty_interval_integrates_to_zero() {
        assert_eq!(gauss_legendre(|_| 1.0, 1.0, 1.0, 8), 0.0);
        assert_eq!(gauss_legendre(|_| 1.0, 2.0, 1.0, 8), 0.0);
    }
}
