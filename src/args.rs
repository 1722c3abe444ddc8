//! Command-line parsing.
//!
//! The only accepted form is `ocr-enhance <input> <output>`, which is simple
//! enough that there is nothing for an argument parsing library to do.

use std::ffi::{OsStr, OsString};

use crate::{
    enh_err,
    error::{EnhanceError, ErrorKind},
    plan::EnhancePlan,
};

pub const USAGE: &str = "ocr-enhance <input> <output>";

pub fn parse_args(args: Vec<OsString>) -> Result<EnhancePlan, EnhanceError> {
    let mut files = Vec::with_capacity(2);
    // skip argv[0], path to our binary
    for arg in args.into_iter().skip(1) {
        // a file named "-foo.png" has to be passed as "./-foo.png"
        if starts_with_sign(&arg) {
            return Err(enh_err!(
                ErrorKind::Args,
                "unrecognized option `{}'",
                arg.to_string_lossy()
            ));
        }
        files.push(arg);
    }

    match <[OsString; 2]>::try_from(files) {
        Ok([input, output]) => Ok(EnhancePlan::new(input, output)),
        Err(files) => Err(enh_err!(
            ErrorKind::Args,
            "expected an input and an output filename, got {} argument(s); usage: {USAGE}",
            files.len()
        )),
    }
}

/// Checks if the string starts with a `-` or a `+`
fn starts_with_sign(arg: &OsStr) -> bool {
    let first_byte = arg.as_encoded_bytes().first();
    (first_byte == Some(&b'-') || first_byte == Some(&b'+'))
    // Anything starting with two dashes instead of one is treated as filename
    && arg.as_encoded_bytes().get(1) != Some(&b'-')
}
