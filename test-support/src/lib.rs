// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

//! A tiny helper for testing convenience.

extern crate rand;
#[macro_use] extern crate slog;

use rand::Rng;

/// A logger that throws everything away, for tests and benchmarks that only
/// care about return values.
pub fn null_log() -> slog::Logger {
    slog::Logger::root(slog::Discard, o!())
}


/// Relative difference `|a - b| / |b|`, with `b` taken as the truth.
pub fn rel_err(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}


/// A simple utility for sampling random numbers.
///
/// The distribution can be uniform or log-uniform.
pub struct Sampler {
    is_log: bool,
    low: f64,
    range: f64
}

impl Sampler {
    /// Create a new Sampler.
    pub fn new(is_log: bool, mut low: f64, mut high: f64) -> Self {
        if low > high {
            ::std::mem::swap(&mut low, &mut high);
        }

        if is_log {
            low = low.ln();
            high = high.ln();
        }

        Sampler { is_log: is_log, low: low, range: high - low }
    }

    /// Sample a number from the distribution.
    pub fn get(&self) -> f64 {
        self.get_with(&mut rand::thread_rng())
    }

    /// Sample a number using a specific generator, for reproducible runs.
    pub fn get_with<R: Rng>(&self, rng: &mut R) -> f64 {
        let n = self.low + rng.gen::<f64>() * self.range;

        if self.is_log {
            n.exp()
        } else {
            n
        }
    }

    /// Draw `count` samples.
    pub fn take(&self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.get()).collect()
    }
}
