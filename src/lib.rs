// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Compare upward and downward recursion for spherical Bessel functions.

The spherical Bessel function of the first kind, `j_n(x)`, obeys a simple
three-term recurrence in the order *n*. That makes it tempting to compute
high orders from the closed forms of `j_0` and `j_1`, but whether that works
depends on which direction you recurse and where you are in the
(*n*, *x*) plane. This crate implements both directions
(`recursion::up_recursion` and `recursion::down_recursion`), an accurate
reference implementation to judge them against (`oracle`), and a driver
(`sweep`) that tabulates all three over a range of *x* in the data-file
format described in `report`.

The classic picture, for *n* = 10 and a downward recursion starting at
order 50:

- below *x* ≈ 2 the upward recursion is useless, because `j_10` decays
  much faster than the rounding error it accumulates;
- between `ln x` ≈ 2 and 3.5 both methods agree with each other and with
  the reference to near machine precision;
- once *x* climbs toward the starting order the downward recursion falls
  apart, and from *x* ≈ 50 on it has nothing to do with the real function.

The `bessel` binary runs that sweep and writes `bessel.dat`.

*/

#![deny(missing_docs)]

#[cfg(test)] #[macro_use] extern crate assert_approx_eq;
#[cfg(feature = "gsl")] extern crate gsl_sys;
#[macro_use] extern crate slog;

pub mod errors;
#[cfg(feature = "gsl")] pub mod gsl;
pub mod oracle;
pub mod recursion;
pub mod report;
pub mod sweep;

pub use errors::{Error, Result};
pub use oracle::{spherical_jl, ReferenceOracle, SphericalBessel};
pub use recursion::{down_recursion, up_recursion, DownwardRecursion};
pub use sweep::{run_sweep, relative_difference, Sweep, SweepConfig, SweepRow, SweepSummary};
