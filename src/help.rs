use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;

use crate::args::USAGE;

/// No arguments at all is left to `args::parse_args`, which reports it as a usage error.
pub fn maybe_print_help_and_exit() {
    if let Some(arg) = std::env::args_os().nth(1) {
        if is_help_flag(&arg) {
            print_help_and_exit()
        }
    }
}

fn is_help_flag(arg: &OsStr) -> bool {
    ["-h", "-help", "--help"].iter().any(|flag| arg == OsStr::new(flag))
}

fn print_help_and_exit() -> ! {
    print!("{}", help_text());
    std::process::exit(0);
}

fn help_text() -> String {
    format!(
        "Version: {}\n\
         License: {}\n\
         Usage: {USAGE}\n\
         \n\
         Converts <input> to grayscale, sharpens it for OCR and writes it to <output>.\n\
         The output format is chosen from the extension of <output>.\n\
         Set RUST_LOG=debug to trace each step.\n",
        version_string(),
        env!("CARGO_PKG_LICENSE"),
    )
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("ocr-enhance {version} {cpu} {repo}")
}
