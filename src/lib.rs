//! # buildlog-store
//!
//! Build-log persistence for a container-image build tool.
//!
//! During a build, output is streamed into a [`sink::LogSink`]. The default
//! sink discards everything; the S3-backed sink buffers the output (with ANSI
//! terminal escape codes removed) in a local scratch file and uploads it to
//! an object-storage bucket when the build finishes. Empty logs are never
//! uploaded: an empty log means the image already existed and nothing was
//! built.
//!
//! ## Usage
//!
//! ```no_run
//! use buildlog_store::config::LogStoreConfig;
//! use buildlog_store::sink::{create_sink, LogSink};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = LogStoreConfig::from_yaml_file(Path::new("store.yaml"))?;
//! let mut sink = create_sink(&config, "builds/myimage.log")?;
//!
//! sink.write("Step 1/4 : FROM alpine\n")?;
//! sink.write("\x1b[32mSuccessfully built\x1b[0m abc123\n")?;
//! sink.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`sink`]: The log-sink contract, the null sink, and the S3 sink
//! - [`cloud`]: Object-storage client construction
//! - [`config`]: Configuration loading and environment-variable expansion
//! - [`utils`]: ANSI escape-code stripping
//! - [`constants`]: Fixed policy constants
//! - [`error`]: Error taxonomy

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Object-storage client construction
pub mod cloud;

/// Configuration management for log persistence
pub mod config;

/// Fixed policy constants
pub mod constants;

/// Error taxonomy for log storage
pub mod error;

/// Log sinks: contract, null implementation, S3 implementation
pub mod sink;

/// Utility functions for log processing
pub mod utils;
