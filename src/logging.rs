//! Logger initialisation for the harness and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger.
///
/// When `verbose` is `true`, debug messages from the filters and the gait
/// are printed. Otherwise only info level and above are shown. `RUST_LOG`
/// overrides both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set, which is expected
    // when tests initialise logging repeatedly.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
