// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Reference values of `j_n(x)` to check the recursions against.

Anything that can evaluate the spherical Bessel function implements
`SphericalBessel`, including plain closures, so tests can substitute their
own ground truth. `ReferenceOracle` is the built-in implementation and does
not depend on any external library. With the `gsl` feature enabled,
`gsl::GslOracle` provides the GSL values instead.

The built-in evaluation follows the standard strategy for `j_l`: the power
series at small argument, the closed forms for `l = 0, 1`, the leading
asymptotic term at very large argument, and otherwise Steed's continued
fraction for `j_{l+1} / j_l` (evaluated with the modified Lentz method)
feeding a downward recursion that is normalized against whichever of `j_0`
and `j_1` is larger.

*/

use std::f64;

use errors::{Error, Result};
use recursion::seeds;


/// A source of spherical Bessel function values.
pub trait SphericalBessel {
    /// Compute `j_order(x)`.
    fn jl(&self, order: u32, x: f64) -> Result<f64>;
}

impl<F> SphericalBessel for F where F: Fn(u32, f64) -> f64 {
    fn jl(&self, order: u32, x: f64) -> Result<f64> {
        Ok(self(order, x))
    }
}


/// The built-in reference implementation. See the module documentation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReferenceOracle;

impl SphericalBessel for ReferenceOracle {
    fn jl(&self, order: u32, x: f64) -> Result<f64> {
        spherical_jl(order, x)
    }
}


const MAX_CF_TERMS: usize = 1_000_000;


/// Compute `j_l(x)` with the built-in reference algorithm.
pub fn spherical_jl(l: u32, x: f64) -> Result<f64> {
    if x.is_nan() {
        return Ok(f64::NAN);
    }

    if x < 0. {
        let v = spherical_jl(l, -x)?;
        return Ok(if l % 2 == 0 { v } else { -v });
    }

    if x == 0. {
        return Ok(if l == 0 { 1. } else { 0. });
    }

    let lf = l as f64;

    if x * x < 10. * (lf + 0.5) / f64::consts::E {
        return Ok(power_series(l, x));
    }

    if l < 2 {
        let (j0, j1) = seeds(x);
        return Ok(if l == 0 { j0 } else { j1 });
    }

    if f64::EPSILON.cbrt() * x > lf * lf + lf + 1. {
        return Ok((x - 0.5 * lf * f64::consts::PI).sin() / x);
    }

    // Unnormalized downward recursion seeded with the exact ratio; the seed
    // magnitude keeps the recursion clear of both underflow and overflow.

    let ratio = bessel_j_ratio(lf + 0.5, x).ok_or(Error::NoConvergence { order: l, x: x })?;
    let small = f64::MIN_POSITIVE / f64::EPSILON;
    let mut above = small * ratio;
    let mut cur = small;

    for k in (1..l + 1).rev() {
        let below = ((2. * k as f64 + 1.) / x) * cur - above;
        above = cur;
        cur = below;
    }

    let (j0, j1) = seeds(x);

    if cur.abs() > above.abs() {
        Ok(small * j0 / cur)
    } else {
        Ok(small * j1 / above)
    }
}


/// The ascending series
/// `x^l / (2l+1)!! * sum_k (-x^2/2)^k / (k! (2l+3)(2l+5)...(2l+2k+1))`.
fn power_series(l: u32, x: f64) -> f64 {
    let mut prefactor = 1.;

    for i in 1..l + 1 {
        prefactor *= x / (2. * i as f64 + 1.);
    }

    let y = -0.5 * x * x;
    let two_l = 2. * l as f64;
    let mut term = 1.;
    let mut sum = 1.;
    let mut k = 1.;

    loop {
        term *= y / (k * (two_l + 2. * k + 1.));
        sum += term;

        if term.abs() < f64::EPSILON * sum.abs() {
            break;
        }

        k += 1.;
    }

    prefactor * sum
}


/// The ratio `J_{nu+1}(x) / J_nu(x)` from its continued fraction
///
/// ```text
/// 1 / (b_1 - 1 / (b_2 - 1 / (b_3 - ...))),   b_k = 2 (nu + k) / x
/// ```
///
/// This converges for any positive `x`, but needs O(x) terms once `x`
/// exceeds `nu`.
fn bessel_j_ratio(nu: f64, x: f64) -> Option<f64> {
    let tiny = f64::MAX.sqrt().recip();
    let mut f = tiny;
    let mut c = tiny;
    let mut d = 0.;

    for k in 1..MAX_CF_TERMS {
        let a = if k == 1 { 1. } else { -1. };
        let b = 2. * (nu + k as f64) / x;

        d = b + a * d;
        if d == 0. {
            d = tiny;
        }

        c = b + a / c;
        if c == 0. {
            c = tiny;
        }

        d = d.recip();
        let delta = c * d;
        f *= delta;

        if (delta - 1.).abs() <= f64::EPSILON {
            return Some(f);
        }
    }

    None
}


#[cfg(test)]
mod tests {
    use std::f64;
    use super::*;

    fn close(a: f64, b: f64, rtol: f64) -> bool {
        (a - b).abs() <= rtol * b.abs()
    }

    #[test]
    fn order_zero_is_sinc() {
        for &x in &[0.05, 0.5, 1., 3., 10., 42., 99.9] {
            assert!(close(spherical_jl(0, x).unwrap(), x.sin() / x, 1e-14), "x = {}", x);
        }
    }

    #[test]
    fn small_argument_limits() {
        assert_eq!(spherical_jl(0, 0.).unwrap(), 1.);
        assert_eq!(spherical_jl(3, 0.).unwrap(), 0.);
        // j_1(x) ~ x / 3 as x -> 0, where the closed form cancels badly.
        assert!(close(spherical_jl(1, 1e-8).unwrap(), 1e-8 / 3., 1e-12));
    }

    #[test]
    fn parity() {
        assert_eq!(spherical_jl(2, -3.).unwrap(), spherical_jl(2, 3.).unwrap());
        assert_eq!(spherical_jl(3, -3.).unwrap(), -spherical_jl(3, 3.).unwrap());
    }

    #[test]
    fn nan_in_nan_out() {
        assert!(spherical_jl(4, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn some_values() {
        // Series, continued fraction, continued fraction, series.
        assert!(close(spherical_jl(10, 1.).unwrap(), 7.1165526400473135e-11, 1e-13));
        assert!(close(spherical_jl(10, 25.).unwrap(), -3.6253285601128567e-02, 1e-13));
        assert!(close(spherical_jl(5, 10.).unwrap(), -5.5534511621452183e-02, 1e-13));
        assert!(close(spherical_jl(30, 10.).unwrap(), 2.5120573849989431e-13, 1e-13));
    }

    #[test]
    fn huge_argument_uses_asymptotic_form() {
        let x = 1e9;
        assert!(close(spherical_jl(2, x).unwrap(), (x - f64::consts::PI).sin() / x, 1e-12));
    }

    #[test]
    fn ratio_matches_neighbours() {
        let r = bessel_j_ratio(10.5, 10.).unwrap();
        assert!(close(r, 0.55064360058126351, 1e-13));
    }

    #[test]
    fn closures_are_oracles() {
        let fake = |_n: u32, x: f64| 2. * x;
        assert_eq!(fake.jl(10, 3.).unwrap(), 6.);
        assert_eq!(ReferenceOracle.jl(0, 2.).unwrap(), spherical_jl(0, 2.).unwrap());
    }
}
