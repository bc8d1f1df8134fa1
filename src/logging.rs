use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `tracing` filter directive.
pub const LOG_ENV: &str = "WC_LOG";

/// Default level for the given `-v` count.
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber writing to stderr. `WC_LOG` wins over `-v`.
/// Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
