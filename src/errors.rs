// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

//! The error type shared by the evaluators, the oracles, and the sweep
//! driver.
//!
//! Floating-point trouble (NaN, infinities, cancellation) is never an error
//! here. Those outcomes are the point of the experiment and get recorded in
//! the output as-is.

use std::error;
use std::fmt;
use std::io;


/// Everything that can go wrong while running a comparison sweep.
#[derive(Debug)]
pub enum Error {
    /// Writing the report failed.
    Io(io::Error),

    /// A `SweepConfig` field is outside of its valid range.
    InvalidConfig(String),

    /// The downward recursion was asked to start at an order whose seed
    /// entries (`start` and `start + 1`) do not fit in its buffer.
    StartOrderTooLarge {
        /// The requested starting order.
        start: u32,
        /// The number of entries in the recursion buffer.
        capacity: usize,
    },

    /// The downward recursion must start strictly above the target order.
    OrderNotBelowStart {
        /// The target order.
        order: u32,
        /// The requested starting order.
        start: u32,
    },

    /// The continued fraction used by the reference oracle did not
    /// converge.
    NoConvergence {
        /// The order being evaluated.
        order: u32,
        /// The argument being evaluated.
        x: f64,
    },

    /// GSL reported a failure.
    #[cfg(feature = "gsl")]
    Gsl {
        /// The GSL status code.
        status: i32,
        /// The order being evaluated.
        order: u32,
        /// The argument being evaluated.
        x: f64,
    },
}


/// A `Result` specialized to our `Error`.
pub type Result<T> = ::std::result::Result<T, Error>;


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "I/O error: {}", e),
            Error::InvalidConfig(ref msg) => write!(f, "invalid sweep configuration: {}", msg),
            Error::StartOrderTooLarge { start, capacity } => write!(
                f, "starting order {} needs {} buffer entries but only {} are available",
                start, start as usize + 2, capacity
            ),
            Error::OrderNotBelowStart { order, start } => write!(
                f, "target order {} must be below the starting order {}", order, start
            ),
            Error::NoConvergence { order, x } => write!(
                f, "continued fraction for j_{}({}) failed to converge", order, x
            ),
            #[cfg(feature = "gsl")]
            Error::Gsl { status, order, x } => write!(
                f, "GSL failed to compute j_{}({}): {} (status {})",
                order, x, ::gsl::strerror(status), status
            ),
        }
    }
}


impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}


impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
