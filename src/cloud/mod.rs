//! Object-storage integration for build-log uploads.
//!
//! The build tool talks to any S3-compatible store (AWS S3, MinIO, Ceph RGW)
//! through an explicitly configured endpoint and static credentials. There is
//! deliberately no credential chain or profile lookup: the orchestrator's
//! configuration is the single source of truth.

/// S3 client construction from explicit credentials
pub mod client;
