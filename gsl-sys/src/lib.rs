// Copyright 2017 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

//! Raw bindings to the small corner of the GNU Scientific Library that we
//! use: the spherical Bessel functions and the error handler switch.

#![allow(non_camel_case_types)]

extern crate libc;

use libc::{c_char, c_double, c_int};

/// The status code GSL returns on success.
pub const GSL_SUCCESS: c_int = 0;

/// GSL's value-plus-error result for special functions.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct gsl_sf_result_struct {
    pub val: c_double,
    pub err: c_double,
}

pub type gsl_sf_result = gsl_sf_result_struct;

pub type gsl_error_handler_t = unsafe extern "C" fn(
    reason: *const c_char,
    file: *const c_char,
    line: c_int,
    gsl_errno: c_int,
);

extern "C" {
    pub fn gsl_sf_bessel_jl_e(l: c_int, x: c_double, result: *mut gsl_sf_result) -> c_int;
    pub fn gsl_set_error_handler_off() -> Option<gsl_error_handler_t>;
    pub fn gsl_strerror(gsl_errno: c_int) -> *const c_char;
}
