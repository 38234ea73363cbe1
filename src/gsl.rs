// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

//! Spherical Bessel values from the GNU Scientific Library.

use gsl_sys;
use std::ffi::CStr;
use std::f64;
use std::os::raw;
use std::sync::Once;

use errors::{Error, Result};
use oracle::SphericalBessel;


static DISABLE_HANDLER: Once = Once::new();

// GSL's default error handler calls abort(). We check status codes instead.
fn disable_error_handler() {
    DISABLE_HANDLER.call_once(|| unsafe {
        gsl_sys::gsl_set_error_handler_off();
    });
}


/// GSL's description of a status code.
pub fn strerror(status: i32) -> String {
    let msg = unsafe { gsl_sys::gsl_strerror(status as raw::c_int) };

    if msg.is_null() {
        return format!("unknown GSL error {}", status);
    }

    unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
}


/// The value and GSL's estimate of its absolute error.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct SpecialFunctionResult {
    /// The computed value.
    pub value: f64,
    /// GSL's error estimate.
    pub abserr: f64
}


/// Compute `j_l(x)` with `gsl_sf_bessel_jl_e`.
pub fn bessel_jl(l: u32, x: f64) -> Result<SpecialFunctionResult> {
    disable_error_handler();

    let mut r = gsl_sys::gsl_sf_result { val: f64::NAN, err: f64::NAN };
    let status = unsafe { gsl_sys::gsl_sf_bessel_jl_e(l as raw::c_int, x, &mut r) };

    if status != gsl_sys::GSL_SUCCESS {
        return Err(Error::Gsl { status: status as i32, order: l, x: x });
    }

    Ok(SpecialFunctionResult { value: r.val, abserr: r.err })
}


/// An oracle backed by GSL.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GslOracle;

impl SphericalBessel for GslOracle {
    fn jl(&self, order: u32, x: f64) -> Result<f64> {
        bessel_jl(order, x).map(|r| r.value)
    }
}
