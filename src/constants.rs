//! Fixed policy constants for build-log storage.
//!
//! These values are part of the storage contract with downstream log
//! consumers; change them only together with whatever reads the bucket.

/// Content type applied to every uploaded log object
pub const LOG_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Default ACL for uploaded log objects
pub const DEFAULT_LOG_ACL: &str = "public-read";

/// Prefix for scratch files buffering log output
pub const SCRATCH_FILE_PREFIX: &str = "buildlog-";

/// Suffix for scratch files buffering log output
pub const SCRATCH_FILE_SUFFIX: &str = ".log";

/// Timestamp format used in default log names
pub const LOG_NAME_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
