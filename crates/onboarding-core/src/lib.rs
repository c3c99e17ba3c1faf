//! Onboarding Core Library
//!
//! This crate provides the domain models, payload normalization, error types,
//! and configuration shared across all onboarding service components.

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    BusinessProfile, Client, FilePayload, FinancialEntry, KycEntry, Section, Submission,
    SubmissionRequest,
};
pub use normalize::normalize;
pub use storage_types::StorageBackend;
