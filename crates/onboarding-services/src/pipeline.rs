//! The end-to-end submission pipeline.
//!
//! Strictly sequential, single-shot, best-effort: uploads in traversal order,
//! then the four section summaries in fixed order. The first error of any
//! kind aborts everything that remains; objects already written stay written.
//! There is no retry, rollback or compensating cleanup.

use crate::summary::{build_summaries, summary_workbook, XLSX_CONTENT_TYPE};
use crate::uploader::SubmissionUploader;
use onboarding_core::{AppError, Submission};
use onboarding_storage::{Storage, SubmissionPaths};
use std::sync::Arc;

/// What one successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// Public URL of the submission's root folder.
    pub folder_url: String,
    /// Uploaded document count (summaries not included).
    pub files_uploaded: usize,
}

/// Run the whole pipeline for one normalized submission.
pub async fn process_submission(
    storage: Arc<dyn Storage>,
    submission: &Submission,
) -> Result<SubmissionOutcome, AppError> {
    let paths = SubmissionPaths::new(&submission.profile.business_name, submission.submitted_at);

    let mut uploader = SubmissionUploader::new(storage.clone(), paths.clone());
    uploader.upload_all(submission).await?;
    let files_uploaded = uploader.manifest().len();

    for sheet in build_summaries(submission) {
        let buffer = summary_workbook(&sheet)?;
        let key = paths.summary_key(sheet.section);
        storage
            .put_object(&key, buffer, XLSX_CONTENT_TYPE)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        tracing::debug!(section = %sheet.section, key = %key, "Stored summary");
    }

    tracing::info!(
        root = %paths.root(),
        files_uploaded,
        "Submission stored"
    );

    Ok(SubmissionOutcome {
        folder_url: storage.folder_url(paths.root()),
        files_uploaded,
    })
}
