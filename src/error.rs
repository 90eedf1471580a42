//! Error taxonomy for build-log storage.

use thiserror::Error;

/// Errors surfaced by the log-sink API.
///
/// Nothing here is retried internally; every failure is the caller's
/// responsibility. A transfer failure leaves the local scratch file in
/// place so the log can be recovered manually.
#[derive(Debug, Error)]
pub enum LogStoreError {
    /// The sink configuration is incomplete or invalid. Raised once at
    /// construction time, never at use time.
    #[error("log store configuration error: {0}")]
    Configuration(String),

    /// Client construction or upload failed while finalizing the log.
    #[error("log transfer failed: {0}")]
    Transfer(String),

    /// Scratch-file I/O failure.
    #[error("log scratch file error: {0}")]
    Io(#[from] std::io::Error),
}
