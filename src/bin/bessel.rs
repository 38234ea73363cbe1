// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Tabulate j_10(x) by upward and downward recursion, and compare both with
/// a reference value, writing the results to `bessel.dat`.
///
/// All parameters are compiled in; see `SweepConfig::default()`.

extern crate anyhow;
extern crate bessel_recursion;
#[macro_use] extern crate slog;
extern crate slog_async;
extern crate slog_term;

use anyhow::Context;
use bessel_recursion::{run_sweep, SweepConfig};
use slog::Drain;
use std::fs::File;
use std::io::BufWriter;
use std::process;

const OUTPUT: &'static str = "bessel.dat";


fn make_logger() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::Block)
        .build().fuse();
    slog::Logger::root(drain, o!("program" => "bessel"))
}


#[cfg(feature = "gsl")]
fn oracle() -> bessel_recursion::gsl::GslOracle {
    bessel_recursion::gsl::GslOracle
}

#[cfg(not(feature = "gsl"))]
fn oracle() -> bessel_recursion::ReferenceOracle {
    bessel_recursion::ReferenceOracle
}


fn run(logger: &slog::Logger) -> anyhow::Result<()> {
    let config = SweepConfig::default();

    let file = File::create(OUTPUT)
        .with_context(|| format!("could not create output file \"{}\"", OUTPUT))?;

    run_sweep(&config, &oracle(), BufWriter::new(file), logger)
        .with_context(|| format!("failed to write \"{}\"", OUTPUT))?;

    println!("data stored in {}.", OUTPUT);
    Ok(())
}


fn main() {
    let logger = make_logger();

    let code = match run(&logger) {
        Ok(()) => 0,
        Err(e) => {
            crit!(logger, "{:#}", e);
            1
        }
    };

    // Dropping the logger flushes the async drain before we exit.
    drop(logger);
    process::exit(code);
}
