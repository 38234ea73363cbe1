// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! The text format of the comparison data file.

The file has a comment line, a line of column names, and then one line per
sample point with six right-justified fields, each followed by a space. The
numbers are laid out like C++ iostreams would print them (`fixed` or
`scientific` with 12 digits after the decimal point, and exponents that
carry a sign and at least two digits) so that existing plotting scripts
keep working.

*/

use std::io::Write;

use errors::Result;
use sweep::SweepRow;


/// The first line of the data file.
pub const COMMENT: &'static str = "# Spherical Bessel functions via up and down recursion";

/// The column names.
pub const HEADER: &'static str = "log(x)   ans_down   ans_up   gsl_bes   log(rel_dif)   rel_dif_gsl";

const PRECISION: usize = 12;
const LOG_X_WIDTH: usize = 8;
const WIDTH: usize = 13;


fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("nan")
    } else if v == ::std::f64::INFINITY {
        Some("inf")
    } else if v == ::std::f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}


/// Format `v` in fixed notation, right-justified to at least `width`
/// characters.
pub fn fixed(v: f64, precision: usize, width: usize) -> String {
    match non_finite(v) {
        Some(s) => format!("{:>w$}", s, w = width),
        None => format!("{:>w$.p$}", v, w = width, p = precision),
    }
}


/// Format `v` in scientific notation, right-justified to at least `width`
/// characters.
///
/// Rust writes `1.5e-7` where iostreams write `1.5e-07`; we follow the
/// latter.
pub fn scientific(v: f64, precision: usize, width: usize) -> String {
    if let Some(s) = non_finite(v) {
        return format!("{:>w$}", s, w = width);
    }

    let rust = format!("{:.p$e}", v, p = precision);
    let mut pieces = rust.splitn(2, 'e');
    let mantissa = pieces.next().unwrap_or("");
    let exponent: i32 = pieces.next().and_then(|e| e.parse().ok()).unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    let text = format!("{}e{}{:02}", mantissa, sign, exponent.abs());

    format!("{:>w$}", text, w = width)
}


/// Write the comment and column header lines.
pub fn write_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", COMMENT)?;
    writeln!(out, "{}", HEADER)?;
    Ok(())
}


/// Format the data line for one sample, without the trailing newline.
pub fn format_row(row: &SweepRow) -> String {
    format!(
        "{} {} {} {} {} {} ",
        fixed(row.log_x(), PRECISION, LOG_X_WIDTH),
        scientific(row.ans_down, PRECISION, WIDTH),
        scientific(row.ans_up, PRECISION, WIDTH),
        scientific(row.oracle, PRECISION, WIDTH),
        fixed(row.log_rel_dif(), PRECISION, WIDTH),
        scientific(row.rel_dif_oracle, PRECISION, WIDTH),
    )
}


/// Write the data line for one sample.
pub fn write_row<W: Write>(out: &mut W, row: &SweepRow) -> Result<()> {
    writeln!(out, "{}", format_row(row))?;
    Ok(())
}
