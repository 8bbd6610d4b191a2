//! Logging setup for the `jobs` binary.
//!
//! The library logs through the `log` facade; this installs `env_logger`
//! behind it. `RUST_LOG` always wins over the verbosity flag.

use env_logger::{Builder, Env};

/// Default filter: our crates at `debug` when verbose, everything at `warn` otherwise.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,job_link=debug,job_cli=debug,jobs=debug"
    } else {
        "warn"
    }
}

pub fn init_logging(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)));
    builder.format_timestamp_millis().format_target(verbose);
    // A second init (tests, embedding) is harmless.
    let _ = builder.try_init();
}
