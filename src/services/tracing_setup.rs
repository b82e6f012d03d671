//! Tracing subscriber setup
//!
//! Shared by the binary and by tests that want to capture log output.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber, logging to `log_file_path`.
///
/// Filtering follows `RUST_LOG`, defaulting to DEBUG. Returns false if the
/// log file could not be created or a subscriber was already installed.
pub fn init_global(log_file_path: &Path) -> bool {
    let log_file = match File::create(log_file_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: could not create log file {}: {}",
                log_file_path.display(),
                e
            );
            return false;
        }
    };

    build_subscriber(log_file).try_init().is_ok()
}

/// Build a subscriber with file logging and environment-based filtering.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::DEBUG.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}
