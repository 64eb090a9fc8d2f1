//! Diagnostic logging to stderr.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` once at startup. `RUST_LOG` overrides the level chosen from
//! the `-v` count.

use log::LevelFilter;

/// Maps the `-v` count to a log level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. Calling it again is a no-op.
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
