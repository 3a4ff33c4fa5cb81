//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so it logs to a file. The script runner
//! logs to stderr and prints results on stdout.

use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends tracing output to `path`, truncating it.
///
/// Does nothing if a subscriber is already installed.
pub fn init_file_logging(path: &Path) -> std::io::Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends tracing output to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
