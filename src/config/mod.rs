// Re-export all items from the submodules
mod env_vars;
mod store_config;

// Re-export store config
pub use store_config::{LogStoreConfig, S3LogConfig};

// Re-export environment variable expansion
pub use env_vars::expand_env_vars;
