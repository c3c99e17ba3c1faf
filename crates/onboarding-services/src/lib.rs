//! Onboarding Services Library
//!
//! Submission processing on top of the storage abstraction: the upload
//! orchestrator that walks a normalized submission and stores every supplied
//! file, the summary generator that derives one spreadsheet per section, and
//! the pipeline that runs both in strict sequence for one request.

pub mod pipeline;
pub mod summary;
pub mod uploader;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use pipeline::{process_submission, SubmissionOutcome};
pub use summary::{build_summaries, summary_workbook, SummarySheet, XLSX_CONTENT_TYPE};
pub use uploader::{ManifestEntry, SubmissionUploader};
