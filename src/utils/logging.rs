//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Setup logging for the form client
///
/// `RUST_LOG` overrides the default filter. Log lines go to stderr so they
/// never interleave with the rendered form on stdout.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Stderr)
        .init();
}
