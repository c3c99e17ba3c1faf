//! Error types module
//!
//! All request-processing errors are unified under the `AppError` enum. The
//! `ErrorMetadata` trait lets each variant self-describe how it should be
//! presented over HTTP (status code, machine-readable code, log level), so the
//! API layer never matches on variants directly.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_WRITE_FAILED")
    fn error_code(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The business profile or its name is absent. Caught at the normalization
    /// boundary before any side effect happens.
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A file entry was submitted with some but not all of data/name/type, or
    /// its content is not valid base64. Fails the whole request; partial
    /// uploads would leave storage inconsistent with the summaries.
    #[error("Invalid file payload: {0}")]
    InvalidFilePayload(String),

    /// An object-storage write failed. Always fatal to the remaining pipeline;
    /// objects already written stay written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Summary workbook construction or serialization failed.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingRequiredField(_)
            | AppError::InvalidFilePayload(_)
            | AppError::InvalidInput(_) => 400,
            AppError::Storage(_) | AppError::Spreadsheet(_) | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            AppError::InvalidFilePayload(_) => "INVALID_FILE_PAYLOAD",
            AppError::Storage(_) => "STORAGE_WRITE_FAILED",
            AppError::Spreadsheet(_) => "SPREADSHEET_FAILED",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingRequiredField(_)
            | AppError::InvalidFilePayload(_)
            | AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::Storage(_) | AppError::Spreadsheet(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }
}
