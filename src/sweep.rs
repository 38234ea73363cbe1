// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Sweep the argument of `j_n(x)` and compare the two recursions.

For every sample point we evaluate the downward recursion, the upward
recursion, and an oracle, and measure how far apart they are with the
symmetric relative difference `|a - b| / (|a| + |b|)`. Nothing here
corrects or flags numerical trouble: NaNs and infinities are recorded like
any other value.

*/

use std::f64;
use std::io::Write;

use slog::Logger;

use errors::{Error, Result};
use oracle::SphericalBessel;
use recursion::{up_recursion, DownwardRecursion};
use report;


/// The most sample points a sweep may have.
pub const MAX_SAMPLES: usize = 1_000_000_000;


/// The parameters of a comparison sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    /// The first sample point. Must be finite and positive.
    pub x_min: f64,

    /// The last sample point, give or take rounding. Must be finite and no
    /// smaller than `x_min`.
    pub x_max: f64,

    /// The spacing between sample points. Must be finite and positive.
    pub step: f64,

    /// The order of the Bessel function to compute.
    pub order: u32,

    /// The order the downward recursion starts from. Must exceed `order`;
    /// accuracy improves as the margin grows.
    pub start: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            x_min: 0.1,
            x_max: 100.,
            step: 0.1,
            order: 10,
            start: 50,
        }
    }
}

impl SweepConfig {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<()> {
        if !(self.x_min.is_finite() && self.x_min > 0.) {
            return Err(Error::InvalidConfig(format!("x_min must be finite and positive; got {}", self.x_min)));
        }

        if !(self.x_max.is_finite() && self.x_max >= self.x_min) {
            return Err(Error::InvalidConfig(format!("x_max must be finite and at least x_min = {}; got {}",
                                                    self.x_min, self.x_max)));
        }

        if !(self.step.is_finite() && self.step > 0.) {
            return Err(Error::InvalidConfig(format!("step must be finite and positive; got {}", self.step)));
        }

        if self.start <= self.order {
            return Err(Error::InvalidConfig(format!("start ({}) must exceed order ({})",
                                                    self.start, self.order)));
        }

        let intervals = (self.x_max - self.x_min) / self.step;

        if !(intervals < MAX_SAMPLES as f64 - 1.) {
            return Err(Error::InvalidConfig(format!("step {} gives more than {} sample points",
                                                    self.step, MAX_SAMPLES)));
        }

        Ok(())
    }

    /// The number of sample points.
    ///
    /// The points are `x_min + i * step`. The small allowance makes the
    /// endpoint count even when `(x_max - x_min) / step` rounds to just
    /// under an integer. Saturates for configurations that `validate`
    /// rejects.
    pub fn n_samples(&self) -> usize {
        (((self.x_max - self.x_min) / self.step + 1e-9).floor() as usize).saturating_add(1)
    }

    /// The `i`th sample point.
    pub fn sample(&self, i: usize) -> f64 {
        self.x_min + i as f64 * self.step
    }
}


/// The symmetric relative difference `|a - b| / (|a| + |b|)`.
///
/// This is NaN when both values are zero.
#[inline]
pub fn relative_difference(a: f64, b: f64) -> f64 {
    (a - b).abs() / (a.abs() + b.abs())
}


/// The results at one sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepRow {
    /// The sample point.
    pub x: f64,

    /// The downward recursion result.
    pub ans_down: f64,

    /// The upward recursion result.
    pub ans_up: f64,

    /// The oracle's value.
    pub oracle: f64,

    /// The relative difference between the two recursions.
    pub rel_dif: f64,

    /// The relative difference between the downward recursion and the
    /// oracle.
    pub rel_dif_oracle: f64,
}

impl SweepRow {
    /// Assemble a row, computing the relative differences.
    pub fn new(x: f64, ans_down: f64, ans_up: f64, oracle: f64) -> Self {
        SweepRow {
            x: x,
            ans_down: ans_down,
            ans_up: ans_up,
            oracle: oracle,
            rel_dif: relative_difference(ans_up, ans_down),
            rel_dif_oracle: relative_difference(oracle, ans_down),
        }
    }

    /// The natural log of the sample point.
    pub fn log_x(&self) -> f64 {
        self.x.ln()
    }

    /// The natural log of the up/down relative difference.
    pub fn log_rel_dif(&self) -> f64 {
        self.rel_dif.ln()
    }

    /// The six report columns, in order.
    pub fn columns(&self) -> [f64; 6] {
        [self.log_x(), self.ans_down, self.ans_up, self.oracle, self.log_rel_dif(), self.rel_dif_oracle]
    }

    /// Whether every report column is finite.
    pub fn is_finite(&self) -> bool {
        self.columns().iter().all(|v| v.is_finite())
    }
}


/// Lazily evaluates the rows of a sweep.
pub struct Sweep<'a, O: 'a> {
    config: SweepConfig,
    oracle: &'a O,
    logger: &'a Logger,
    buffer: DownwardRecursion,
    index: usize,
    n_samples: usize,
}

impl<'a, O: 'a + SphericalBessel> Sweep<'a, O> {
    /// Set up a sweep, validating the configuration.
    pub fn new(config: SweepConfig, oracle: &'a O, logger: &'a Logger) -> Result<Self> {
        config.validate()?;

        Ok(Sweep {
            config: config,
            oracle: oracle,
            logger: logger,
            buffer: DownwardRecursion::for_start(config.start),
            index: 0,
            n_samples: config.n_samples(),
        })
    }

    /// Evaluate the row at `x`.
    pub fn evaluate(&mut self, x: f64) -> Result<SweepRow> {
        let n = self.config.order;
        let ans_down = self.buffer.evaluate(x, n, self.config.start)?;
        let ans_up = up_recursion(x, n);

        let oracle = match self.oracle.jl(n, x) {
            Ok(v) => v,
            Err(e) => {
                warn!(self.logger, "oracle failed; recording NaN"; "x" => x, "order" => n, "err" => %e);
                f64::NAN
            }
        };

        Ok(SweepRow::new(x, ans_down, ans_up, oracle))
    }
}

impl<'a, O: 'a + SphericalBessel> Iterator for Sweep<'a, O> {
    type Item = Result<SweepRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.n_samples {
            return None;
        }

        let x = self.config.sample(self.index);
        self.index += 1;
        Some(self.evaluate(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.n_samples - self.index;
        (n, Some(n))
    }
}


/// Statistics gathered over a whole sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SweepSummary {
    /// The number of rows produced.
    pub rows: usize,

    /// The number of rows with at least one non-finite column.
    pub non_finite_rows: usize,

    /// The sample point and value of the largest finite down-vs-oracle
    /// relative difference.
    pub worst: Option<(f64, f64)>,

    /// The sample point and value of the smallest finite down-vs-oracle
    /// relative difference.
    pub best: Option<(f64, f64)>,
}

impl SweepSummary {
    /// Fold one row into the statistics.
    pub fn observe(&mut self, row: &SweepRow) {
        self.rows += 1;

        if !row.is_finite() {
            self.non_finite_rows += 1;
        }

        let r = row.rel_dif_oracle;

        if !r.is_finite() {
            return;
        }

        match self.worst {
            Some((_, w)) if w >= r => {},
            _ => self.worst = Some((row.x, r)),
        }

        match self.best {
            Some((_, b)) if b <= r => {},
            _ => self.best = Some((row.x, r)),
        }
    }
}


/// Run a full sweep, writing the report to `out`.
pub fn run_sweep<O, W>(config: &SweepConfig, oracle: &O, mut out: W, logger: &Logger) -> Result<SweepSummary>
    where O: SphericalBessel, W: Write
{
    let sweep = Sweep::new(*config, oracle, logger)?;

    info!(logger, "starting sweep";
          "x_min" => config.x_min,
          "x_max" => config.x_max,
          "step" => config.step,
          "order" => config.order,
          "start" => config.start,
          "n_samples" => config.n_samples(),
    );

    report::write_header(&mut out)?;
    let mut summary = SweepSummary::default();

    for row in sweep {
        let row = row?;
        trace!(logger, "sample";
               "x" => row.x,
               "down" => row.ans_down,
               "up" => row.ans_up,
               "oracle" => row.oracle,
               "rel_dif" => row.rel_dif,
        );
        if !row.is_finite() {
            debug!(logger, "non-finite columns"; "x" => row.x, "columns" => ?row.columns());
        }
        report::write_row(&mut out, &row)?;
        summary.observe(&row);
    }

    out.flush()?;

    info!(logger, "sweep complete";
          "rows" => summary.rows,
          "non_finite_rows" => summary.non_finite_rows,
          "worst" => ?summary.worst,
          "best" => ?summary.best,
    );

    Ok(summary)
}
