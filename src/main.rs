use std::error::Error;

use ocr_enhance::{args, help};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    help::maybe_print_help_and_exit();
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_args(arguments)?;
    plan.execute()?;
    Ok(())
}
