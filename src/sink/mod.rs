//! Pluggable sinks for build-log persistence.
//!
//! The build orchestrator streams container build output into a [`LogSink`]
//! and closes it exactly once when the build finishes, success or failure.
//! The default [`NullLogSink`] discards everything; [`s3::S3LogSink`]
//! buffers output in a local scratch file and uploads it on close.

/// S3-backed sink implementation
pub mod s3;

use log::debug;

use crate::config::LogStoreConfig;
use crate::error::LogStoreError;
use s3::S3LogSink;

/// Destination-agnostic build-log sink.
///
/// `write` may be called any number of times while the build runs. `close`
/// consumes the sink, making the call-once contract a compile-time
/// property: a closed sink cannot be written to.
pub trait LogSink {
    /// The name identifying the log's destination path or key.
    fn name(&self) -> &str;

    /// Append text to the log.
    fn write(&mut self, text: &str) -> Result<(), LogStoreError>;

    /// Finish logging. Implementations may persist or upload the log.
    fn close(self: Box<Self>) -> Result<CloseOutcome, LogStoreError>;
}

/// What `close` did with the buffered log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The sink discards its input; nothing was persisted.
    Discarded,
    /// The log was empty, so no upload took place and the scratch file was
    /// left in place. An empty log means the image already existed and
    /// nothing was built.
    SkippedEmpty,
    /// The log was uploaded and the local scratch file removed.
    Uploaded { key: String, bytes: u64 },
}

/// A sink that drops all build output.
///
/// Selected when no external log persistence is configured.
pub struct NullLogSink {
    name: String,
}

impl NullLogSink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl LogSink for NullLogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, _text: &str) -> Result<(), LogStoreError> {
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<CloseOutcome, LogStoreError> {
        Ok(CloseOutcome::Discarded)
    }
}

/// Create the sink selected by `config`, storing the log under `name`.
///
/// A configured `s3` section yields an [`S3LogSink`]; otherwise the build
/// log is discarded through a [`NullLogSink`].
pub fn create_sink(
    config: &LogStoreConfig,
    name: &str,
) -> Result<Box<dyn LogSink>, LogStoreError> {
    match &config.s3 {
        Some(s3_config) => {
            let sink = S3LogSink::new(name, s3_config.clone())?;
            Ok(Box::new(sink))
        }
        None => {
            debug!("No log persistence configured, build log will be discarded");
            Ok(Box::new(NullLogSink::new(name)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_accepts_writes_and_close() {
        let mut sink = Box::new(NullLogSink::new("builds/test.log"));
        assert_eq!(sink.name(), "builds/test.log");

        sink.write("anything\n").unwrap();
        sink.write("\x1b[31mcolored\x1b[0m\n").unwrap();
        assert_eq!(sink.close().unwrap(), CloseOutcome::Discarded);
    }

    #[test]
    fn factory_defaults_to_null_sink() {
        let config = LogStoreConfig::default();
        let sink = create_sink(&config, "builds/test.log").unwrap();
        assert_eq!(sink.close().unwrap(), CloseOutcome::Discarded);
    }
}
