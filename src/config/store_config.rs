//! Configuration surface for build-log persistence.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::env_vars::expand_env_vars;
use crate::constants::DEFAULT_LOG_ACL;
use crate::error::LogStoreError;

/// Connection and destination parameters for the S3-backed log sink.
///
/// `session_token`, `region`, and `key_prefix` may be empty; `acl` defaults
/// to `public-read`. The key prefix is prepended verbatim to the log name,
/// so include a trailing `/` if the logs should live under a directory.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct S3LogConfig {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default)]
    pub session_token: String,
    #[serde(default)]
    pub region: String,
    pub bucket: String,
    #[serde(default)]
    pub key_prefix: String,
    #[serde(default = "default_acl")]
    pub acl: String,
}

fn default_acl() -> String {
    DEFAULT_LOG_ACL.to_string()
}

/// Top-level log store configuration.
///
/// An absent `s3` section means build logs are discarded.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LogStoreConfig {
    #[serde(default)]
    pub s3: Option<S3LogConfig>,
}

impl LogStoreConfig {
    /// Load configuration from a YAML file and expand environment-variable
    /// references in every string value.
    pub fn from_yaml_file(path: &Path) -> Result<Self, LogStoreError> {
        let content = fs::read_to_string(path)?;
        let mut config: LogStoreConfig = serde_yaml::from_str(&content).map_err(|e| {
            LogStoreError::Configuration(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.expand_environment_variables();
        debug!("Loaded log store configuration from {}", path.display());
        Ok(config)
    }

    /// Expand `${VAR}`, `$VAR`, and `%VAR%` references in every string field.
    pub fn expand_environment_variables(&mut self) {
        if let Some(s3) = &mut self.s3 {
            for value in [
                &mut s3.endpoint,
                &mut s3.access_key,
                &mut s3.secret_key,
                &mut s3.session_token,
                &mut s3.region,
                &mut s3.bucket,
                &mut s3.key_prefix,
                &mut s3.acl,
            ] {
                *value = expand_env_vars(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    #[test]
    fn parses_minimal_s3_section_with_defaults() {
        let yaml = r#"
s3:
  endpoint: http://localhost:9000
  access_key: access
  secret_key: secret
  bucket: build-logs
"#;
        let config: LogStoreConfig = serde_yaml::from_str(yaml).unwrap();
        let s3 = config.s3.unwrap();

        assert_eq!(s3.endpoint, "http://localhost:9000");
        assert_eq!(s3.session_token, "");
        assert_eq!(s3.region, "");
        assert_eq!(s3.key_prefix, "");
        assert_eq!(s3.acl, "public-read");
    }

    #[test]
    fn parses_full_s3_section() {
        let yaml = r#"
s3:
  endpoint: https://s3.eu-west-1.amazonaws.com
  access_key: access
  secret_key: secret
  session_token: short-lived
  region: eu-west-1
  bucket: build-logs
  key_prefix: "logs/"
  acl: private
"#;
        let config: LogStoreConfig = serde_yaml::from_str(yaml).unwrap();
        let s3 = config.s3.unwrap();

        assert_eq!(s3.session_token, "short-lived");
        assert_eq!(s3.region, "eu-west-1");
        assert_eq!(s3.key_prefix, "logs/");
        assert_eq!(s3.acl, "private");
    }

    #[test]
    fn empty_config_means_no_persistence() {
        let config: LogStoreConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.s3.is_none());
        assert!(LogStoreConfig::default().s3.is_none());
    }

    #[test]
    fn from_yaml_file_expands_env_references() {
        env::set_var("BUILDLOG_TEST_SECRET", "from-env");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
s3:
  endpoint: http://localhost:9000
  access_key: access
  secret_key: ${{BUILDLOG_TEST_SECRET}}
  bucket: build-logs
"#
        )
        .unwrap();

        let config = LogStoreConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.s3.unwrap().secret_key, "from-env");

        env::remove_var("BUILDLOG_TEST_SECRET");
    }

    #[test]
    fn from_yaml_file_rejects_malformed_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "s3: [not, a, mapping").unwrap();

        match LogStoreConfig::from_yaml_file(file.path()) {
            Err(LogStoreError::Configuration(_)) => {}
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        match LogStoreConfig::from_yaml_file(Path::new("/nonexistent/store.yaml")) {
            Err(LogStoreError::Io(_)) => {}
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
