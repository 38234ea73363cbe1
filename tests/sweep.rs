// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Check where the two recursions succeed and fail, and the layout of the
/// data file.

#[macro_use] extern crate assert_approx_eq;
extern crate bessel_recursion;
extern crate bessel_recursion_test_support as support;
extern crate rand;
extern crate regex;

use bessel_recursion::{down_recursion, relative_difference, run_sweep, spherical_jl, up_recursion,
                       ReferenceOracle, Sweep, SweepConfig};
use bessel_recursion::report;
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;

const ORDER: u32 = 10;
const START: u32 = 50;


fn reference(x: f64) -> f64 {
    spherical_jl(ORDER, x).unwrap()
}


#[test]
fn upward_reproduces_seeds() {
    let s = support::Sampler::new(true, 0.01, 100.);

    for x in s.take(100) {
        let (sin, cos) = (x.sin(), x.cos());
        assert_eq!(up_recursion(x, 0), sin / x);
        assert_approx_eq!(up_recursion(x, 1), (sin - x * cos) / (x * x), 1e-15);
    }
}

/// For ln x between 2 and 3.5, both methods are good.
#[test]
fn stable_region_agrees_with_reference() {
    for &x in &[7.5, 10., 12.5, 15., 20., 25., 30., 33.] {
        let truth = reference(x);
        let down = down_recursion(x, ORDER, START).unwrap();
        let up = up_recursion(x, ORDER);
        assert!(relative_difference(down, truth) < 1e-9, "down at x = {}", x);
        assert!(relative_difference(up, truth) < 1e-9, "up at x = {}", x);
    }
}

/// Relative errors spike near zeros of j_10, so random points are checked
/// with an absolute tolerance instead; j_10 is of order 0.05 here.
#[test]
fn stable_region_random_points() {
    let s = support::Sampler::new(false, 2f64.exp(), 3.4f64.exp());
    let mut rng = StdRng::seed_from_u64(20180102);

    for _ in 0..200 {
        let x = s.get_with(&mut rng);
        let truth = reference(x);
        assert!((down_recursion(x, ORDER, START).unwrap() - truth).abs() < 1e-9, "down at x = {}", x);
        assert!((up_recursion(x, ORDER) - truth).abs() < 1e-9, "up at x = {}", x);
    }
}

#[test]
fn downward_at_x_equals_one() {
    let down = down_recursion(1., ORDER, START).unwrap();
    let rel = ((down - 7.1165526400473135e-11) / 7.1165526400473135e-11).abs();
    assert!(rel < 1e-8, "rel = {}", rel);
}

#[test]
fn upward_fails_at_small_x() {
    let x = 1.;
    assert!(relative_difference(up_recursion(x, ORDER), reference(x)) > 0.5);
}

#[test]
fn downward_fails_near_start_order() {
    let x = 50.;
    let down = down_recursion(x, ORDER, START).unwrap();
    let at_fifty = relative_difference(reference(x), down);
    let at_one = relative_difference(reference(1.), down_recursion(1., ORDER, START).unwrap());
    assert!(at_fifty > 1e-3, "rel_dif_oracle = {}", at_fifty);
    assert!(at_fifty > 1e6 * at_one);
}

/// The error falls as the seed gets further above the target order, until
/// it hits the rounding floor.
#[test]
fn downward_error_shrinks_with_margin() {
    const FLOOR: f64 = 1e-14;

    for &x in &[1., 5.] {
        let truth = reference(x);
        let mut prev = f64::INFINITY;

        for margin in 1..31 {
            let err = relative_difference(down_recursion(x, ORDER, ORDER + margin).unwrap(), truth);
            assert!(err <= prev.max(FLOOR), "x = {}, margin = {}: {} after {}", x, margin, err, prev);
            prev = err;
        }

        assert!(prev < FLOOR);
    }
}

#[test]
fn sweep_rows_match_direct_evaluation() {
    let log = support::null_log();
    let c = SweepConfig { x_min: 1., x_max: 40., step: 13., ..SweepConfig::default() };
    let rows: Vec<_> = Sweep::new(c, &ReferenceOracle, &log).unwrap().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 4);

    for row in rows {
        assert_eq!(row.ans_down, down_recursion(row.x, ORDER, START).unwrap());
        assert_eq!(row.ans_up, up_recursion(row.x, ORDER));
        assert_eq!(row.oracle, reference(row.x));
    }
}

#[test]
fn closure_oracle_can_stand_in() {
    let log = support::null_log();
    let c = SweepConfig { x_min: 10., x_max: 10., ..SweepConfig::default() };
    let oracle = |n: u32, x: f64| up_recursion(x, n);
    let row = Sweep::new(c, &oracle, &log).unwrap().next().unwrap().unwrap();
    assert_eq!(row.oracle, row.ans_up);
}


fn default_report() -> String {
    let log = support::null_log();
    let mut buf = Vec::new();
    let summary = run_sweep(&SweepConfig::default(), &ReferenceOracle, &mut buf, &log).unwrap();
    assert_eq!(summary.rows, 1000);
    String::from_utf8(buf).unwrap()
}

#[test]
fn report_layout() {
    let text = default_report();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some(report::COMMENT));
    assert_eq!(lines.next(), Some(report::HEADER));

    let sci = r"(?:-?\d\.\d{12}e[+-]\d{2,3}|-?inf|nan)";
    let fix = r"(?:-?\d+\.\d{12}|-?inf|nan)";
    let row_re = Regex::new(&format!(r"^ *{f} +{s} +{s} +{s} +{f} +{s} $", f = fix, s = sci)).unwrap();
    let mut n = 0;

    for line in lines {
        assert!(row_re.is_match(line), "bad row: {:?}", line);

        let fields: Vec<f64> = line.split_whitespace().map(|f| f.parse::<f64>().unwrap()).collect();
        assert_eq!(fields.len(), 6);
        n += 1;
    }

    assert_eq!(n, 1000);
}

#[test]
fn report_first_and_last_rows() {
    let text = default_report();
    let rows: Vec<Vec<f64>> = text.lines().skip(2)
        .map(|l| l.split_whitespace().map(|f| f.parse().unwrap()).collect())
        .collect();

    assert_approx_eq!(rows[0][0], 0.1f64.ln(), 1e-11);
    assert_approx_eq!(rows[999][0], 100f64.ln(), 1e-11);

    // At x = 0.1 the upward recursion is garbage but downward is spot on.
    assert!(rows[0][5] < 1e-12);
    assert!(rows[0][4] > -1.);

    // At x = 100 the roles are reversed.
    assert!(rows[999][5] > 1e-3);
}
