//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to
//! `<cache_dir>/txlens/txlens.log`. Verbosity follows `RUST_LOG`
//! (default `info`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "txlens.log";

#[must_use]
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("txlens").join(LOG_FILE))
}

/// Install the global subscriber and return the log file path.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed. Callers treat this as non-fatal.
pub fn init() -> io::Result<PathBuf> {
    let path = log_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_under_cache_dir() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("txlens/txlens.log"));
        }
    }
}
