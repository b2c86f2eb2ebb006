//! Logging utilities for the state stack
//!
//! Events are emitted through `tracing` when the `tracing` feature is enabled
//! (the default) and compiled out otherwise.

/// Initialize a tracing subscriber with sensible defaults
///
/// Shows `info` and above for this crate and `warn` and above for everything
/// else, unless `RUST_LOG` says otherwise.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gl_state_stack=info,warn".into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Initialize a tracing subscriber with a custom filter
///
/// Use `"gl_state_stack=trace"` to see every push, pop and skipped identifier.
#[cfg(feature = "tracing")]
pub fn init_tracing_with_filter(filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::new(filter);

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing_with_filter(_filter: &str) {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

macro_rules! state_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! state_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! state_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}
