/// `tracing` subscriber setup for the binary.
///
/// Library crates only emit events; this is the one place a subscriber is
/// installed. Events go to stderr so stdout stays machine-readable.
use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Returns `true` if ANSI color codes should be emitted to stderr.
///
/// Colors are disabled when `--no-color` was passed, when the `NO_COLOR`
/// environment variable is present, or when stderr is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Default filter directive for the verbosity flags.
///
/// `RUST_LOG` overrides this when set.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber.
pub fn init(quiet: bool, verbose: bool, colors: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(colors)
                .with_writer(std::io::stderr),
        )
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: logging unavailable: {e}");
    }
}
