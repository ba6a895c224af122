// src/log.rs
//
// All crate logging goes through `tracing`; the short macros below keep call
// sites terse. Binaries call `init` once; the library never installs a
// subscriber on its own.

use tracing_subscriber::{fmt::time::uptime, EnvFilter};

const DEFAULT_FILTER: &str = "warn,pfr_stats=info";
const VERBOSE_FILTER: &str = "info,pfr_stats=debug";

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
/// Stdout stays reserved for command output (written CSV paths).
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (tests, embedding) keeps whichever subscriber came first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(uptime())
        .with_target(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
