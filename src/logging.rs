//! Diagnostic logging for the command-line front end.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter (e.g. `JOT_LOG=jot=debug`).
pub const LOG_ENV: &str = "JOT_LOG";

/// Returns the default filter directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber.
///
/// `JOT_LOG` takes precedence over the verbosity count. Calling this more than
/// once keeps the first subscriber.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
