//! Build-log sink backed by an S3-compatible object store.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rusoto_core::ByteStream;
use rusoto_s3::{PutObjectRequest, S3};
use tempfile::Builder;
use tokio::runtime::Runtime;

use crate::cloud::client::create_s3_client;
use crate::config::S3LogConfig;
use crate::constants::{LOG_CONTENT_TYPE, SCRATCH_FILE_PREFIX, SCRATCH_FILE_SUFFIX};
use crate::error::LogStoreError;
use crate::sink::{CloseOutcome, LogSink};
use crate::utils::ansi::strip_ansi;

/// Local scratch file buffering log output before upload.
///
/// The file is persisted (not deleted on drop): it must survive a crash or
/// a failed upload so the log can be recovered manually.
struct ScratchFile {
    file: File,
    path: PathBuf,
}

impl ScratchFile {
    fn create() -> Result<Self, LogStoreError> {
        let (file, path) = Builder::new()
            .prefix(SCRATCH_FILE_PREFIX)
            .suffix(SCRATCH_FILE_SUFFIX)
            .tempfile()?
            .keep()
            .map_err(|e| LogStoreError::Io(e.error))?;

        debug!("Created scratch file {}", path.display());
        Ok(Self { file, path })
    }
}

/// Buffers build output in a scratch file and uploads it to a bucket when
/// the build finishes.
///
/// ANSI terminal escape codes are stripped on write, so the stored log is
/// plain text. The upload is a single blocking PUT with the configured ACL
/// and a `text/plain` content type. An empty log is never uploaded. On
/// upload failure the scratch file stays on disk.
pub struct S3LogSink {
    name: String,
    config: S3LogConfig,
    scratch: Option<ScratchFile>,
}

impl S3LogSink {
    /// Create a sink that stores the log under `name` in the configured
    /// bucket.
    ///
    /// Fails with [`LogStoreError::Configuration`] when a required
    /// connection or destination parameter is missing. This check runs once
    /// here, never at write or close time. The scratch file is created
    /// lazily on first use.
    pub fn new(name: &str, config: S3LogConfig) -> Result<Self, LogStoreError> {
        let required = [
            ("endpoint", &config.endpoint),
            ("access_key", &config.access_key),
            ("secret_key", &config.secret_key),
            ("bucket", &config.bucket),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(LogStoreError::Configuration(format!(
                    "s3 log store requires a non-empty {}",
                    field
                )));
            }
        }

        Ok(Self {
            name: name.to_string(),
            config,
            scratch: None,
        })
    }

    /// Path of the scratch file, if one has been created yet.
    pub fn scratch_path(&self) -> Option<&Path> {
        self.scratch.as_ref().map(|scratch| scratch.path.as_path())
    }

    /// Object key the log will be uploaded under: the configured prefix
    /// prepended verbatim to the log name.
    pub fn destination_key(&self) -> String {
        format!("{}{}", self.config.key_prefix, self.name)
    }

    fn scratch_mut(&mut self) -> Result<&mut ScratchFile, LogStoreError> {
        if self.scratch.is_none() {
            self.scratch = Some(ScratchFile::create()?);
        }
        Ok(self.scratch.as_mut().expect("scratch file just created"))
    }

    fn upload(&self, path: &Path, key: &str) -> Result<(), LogStoreError> {
        let client = create_s3_client(&self.config)?;
        let body = fs::read(path)?;

        let request = PutObjectRequest {
            bucket: self.config.bucket.clone(),
            key: key.to_string(),
            body: Some(ByteStream::from(body)),
            content_type: Some(LOG_CONTENT_TYPE.to_string()),
            acl: Some(self.config.acl.clone()),
            ..Default::default()
        };

        let runtime = Runtime::new().map_err(|e| {
            LogStoreError::Transfer(format!("failed to start upload runtime: {}", e))
        })?;
        runtime.block_on(client.put_object(request)).map_err(|e| {
            LogStoreError::Transfer(format!(
                "failed to upload log to bucket {}: {}",
                self.config.bucket, e
            ))
        })?;

        Ok(())
    }
}

impl LogSink for S3LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    /// Strip ANSI escape codes from `text` and append the result to the
    /// scratch file. Newlines are not added; calls accumulate in order.
    fn write(&mut self, text: &str) -> Result<(), LogStoreError> {
        let cleaned = strip_ansi(text);
        let scratch = self.scratch_mut()?;
        scratch.file.write_all(cleaned.as_bytes())?;
        Ok(())
    }

    /// Upload the buffered log and remove the scratch file.
    ///
    /// An empty log is skipped without uploading and without deleting the
    /// scratch file. Upload failures propagate unretried, also leaving the
    /// scratch file in place.
    fn close(mut self: Box<Self>) -> Result<CloseOutcome, LogStoreError> {
        let scratch = match self.scratch.take() {
            Some(scratch) => scratch,
            None => ScratchFile::create()?,
        };
        let ScratchFile { mut file, path } = scratch;
        file.flush()?;
        drop(file);

        let bytes = fs::metadata(&path)?.len();
        if bytes == 0 {
            debug!("Build log {} is empty, skipping upload", path.display());
            return Ok(CloseOutcome::SkippedEmpty);
        }

        let key = self.destination_key();
        info!(
            "Uploading log to {} bucket:{} key:{}",
            self.config.endpoint, self.config.bucket, key
        );

        self.upload(&path, &key)?;

        fs::remove_file(&path)?;
        debug!("Removed scratch file {}", path.display());

        Ok(CloseOutcome::Uploaded { key, bytes })
    }
}
