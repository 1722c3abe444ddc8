//! Initialization that needs to be done on startup

use env_logger::Env;

/// Installs the logger. Diagnostics stay silent unless `RUST_LOG` asks for them.
/// Safe to call more than once; only the first call takes effect.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
