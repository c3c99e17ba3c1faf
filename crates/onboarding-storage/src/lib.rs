//! Onboarding Storage Library
//!
//! Storage abstraction and backends for the onboarding service. The pipeline
//! only ever needs one capability from a backend - "write an object given a
//! key, a byte payload and a content type" - plus a way to render the public
//! URL of a submission's folder.
//!
//! # Storage key format
//!
//! Every artifact of one submission lives under a shared root:
//!
//! - root: `{business_name}_{yyyymmddHHMMSSmmm}` (timestamped so repeated
//!   submissions for the same business never overwrite each other)
//! - key: `{root}/{section}/{file_name}`
//!
//! Keys must not contain `..` or a leading `/`. Key generation is centralized
//! in the `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::SubmissionPaths;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use onboarding_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
