// Copyright 2017 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

extern crate pkg_config;

fn main() {
    // pkg-config emits the link directives itself when it finds GSL.
    if let Err(e) = pkg_config::Config::new().atleast_version("1.15").probe("gsl") {
        println!("cargo:warning=pkg-config could not find GSL ({}); assuming a system install", e);
        println!("cargo:rustc-link-lib=dylib=gsl");
        println!("cargo:rustc-link-lib=dylib=gslcblas");
    }
}
