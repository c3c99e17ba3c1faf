//! Configuration module
//!
//! Environment-backed configuration for the API and storage layers. AWS
//! credentials are never read here; they flow through the environment straight
//! to the S3 client builder.

use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 3001;
const DEFAULT_MAX_BODY_SIZE_MB: usize = 150;

/// Application configuration, loaded once at startup and read-only thereafter.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Allowed CORS origins; empty means allow any origin.
    pub cors_origins: Vec<String>,
    /// Request body limit in bytes. Uploads arrive base64-encoded inside the
    /// JSON body, so this bounds the whole submission.
    pub max_body_size_bytes: usize,
    pub environment: String,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub aws_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = env_parse("SERVER_PORT", DEFAULT_SERVER_PORT)?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_body_size_mb: usize = env_parse("MAX_BODY_SIZE_MB", DEFAULT_MAX_BODY_SIZE_MB)?;

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => Some(
                value
                    .parse::<StorageBackend>()
                    .map_err(|e| anyhow::anyhow!("Invalid STORAGE_BACKEND: {}", e))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            server_port,
            cors_origins,
            max_body_size_bytes: max_body_size_mb * 1024 * 1024,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
        })
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Effective S3 region: explicit S3_REGION wins over the ambient AWS_REGION.
    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref().or(self.aws_region.as_deref())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
