use log::debug;
use rusoto_core::{HttpClient, Region};
use rusoto_credential::StaticProvider;
use rusoto_s3::S3Client;

use crate::config::S3LogConfig;
use crate::error::LogStoreError;

/// Create an S3 client for the configured endpoint and credentials.
///
/// The endpoint is addressed as a custom region so S3-compatible stores
/// work unchanged; requests are signed with AWS signature v4. The session
/// token is included only when non-empty.
pub fn create_s3_client(config: &S3LogConfig) -> Result<S3Client, LogStoreError> {
    let credentials = StaticProvider::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        session_token(config),
        None,
    );

    let region = Region::Custom {
        name: config.region.clone(),
        endpoint: config.endpoint.clone(),
    };

    let dispatcher = HttpClient::new()
        .map_err(|e| LogStoreError::Transfer(format!("failed to create HTTP client: {}", e)))?;

    debug!("Created S3 client for endpoint {}", config.endpoint);
    Ok(S3Client::new_with(dispatcher, credentials, region))
}

/// Session token to pass to the credentials provider.
///
/// An empty configured token is omitted entirely, never sent as an empty
/// string.
pub fn session_token(config: &S3LogConfig) -> Option<String> {
    if config.session_token.is_empty() {
        None
    } else {
        Some(config.session_token.clone())
    }
}
