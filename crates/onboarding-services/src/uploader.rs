//! Upload orchestration.
//!
//! Walks every file-bearing field of a normalized submission in a fixed order
//! and stores each supplied payload with exactly one object-storage write:
//!
//! 1. business-profile extra-document fields, in declaration order
//! 2. KYC labels, in declaration order
//! 3. financial categories in declaration order, each list by index
//! 4. clients in list order, each attempting payroll list, work order, invoice
//!
//! Payloads without content are skipped silently. Once a payload has content,
//! all of data/name/type are required; a partial payload fails the whole
//! request. The first storage error aborts the remaining traversal; earlier
//! writes stay in storage.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use onboarding_core::{AppError, FilePayload, Section, Submission};
use onboarding_storage::{Storage, SubmissionPaths};
use std::sync::Arc;

/// One record of a file that was actually uploaded. Bookkeeping only; the
/// summary generator never consults this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub section: Section,
    /// The originating field label or `{client}_{kind}` prefix.
    pub label: String,
    /// The declared original file name.
    pub file_name: String,
}

/// Sequential uploader for one submission.
pub struct SubmissionUploader {
    storage: Arc<dyn Storage>,
    paths: SubmissionPaths,
    manifest: Vec<ManifestEntry>,
}

impl SubmissionUploader {
    pub fn new(storage: Arc<dyn Storage>, paths: SubmissionPaths) -> Self {
        SubmissionUploader {
            storage,
            paths,
            manifest: Vec::new(),
        }
    }

    /// Upload every supplied file of the submission, in traversal order.
    pub async fn upload_all(&mut self, submission: &Submission) -> Result<(), AppError> {
        for (label, file) in &submission.profile.documents {
            if file.has_content() {
                self.store_file(file, Section::Business, label).await?;
            }
        }

        for entry in &submission.kyc {
            if let Some(file) = entry.file.as_ref().filter(|f| f.has_content()) {
                self.store_file(file, Section::Kyc, &entry.label).await?;
            }
        }

        for entry in &submission.financial {
            if let Some(file) = entry.file.as_ref().filter(|f| f.has_content()) {
                let prefix = format!("{}_{}", entry.category, entry.index);
                self.store_file(file, Section::Financial, &prefix).await?;
            }
        }

        for client in &submission.clients {
            let client_name = client.client_name.as_deref().unwrap_or("client");
            let kinds = [
                (&client.payroll_list_upload, "payroll"),
                (&client.work_order_upload, "workorder"),
                (&client.invoice_upload, "invoice"),
            ];
            for (upload, kind) in kinds {
                if let Some(file) = upload.as_ref().filter(|f| f.has_content()) {
                    let prefix = format!("{}_{}", client_name, kind);
                    self.store_file(file, Section::Clients, &prefix).await?;
                }
            }
        }

        Ok(())
    }

    /// Files uploaded so far, in write order.
    pub fn manifest(&self) -> &[ManifestEntry] {
        &self.manifest
    }

    /// Decode one payload and persist it under its computed key.
    async fn store_file(
        &mut self,
        file: &FilePayload,
        section: Section,
        prefix: &str,
    ) -> Result<(), AppError> {
        let data = file.data.as_deref().ok_or_else(|| {
            AppError::InvalidFilePayload(format!("{}: missing content", prefix))
        })?;
        let name = file.name.as_deref().ok_or_else(|| {
            AppError::InvalidFilePayload(format!("{}: missing file name", prefix))
        })?;
        let content_type = file.content_type.as_deref().ok_or_else(|| {
            AppError::InvalidFilePayload(format!("{}: missing content type", prefix))
        })?;

        let bytes = BASE64.decode(data).map_err(|e| {
            AppError::InvalidFilePayload(format!("{}: content is not valid base64: {}", prefix, e))
        })?;

        let key = self.paths.object_key(section, prefix, name);
        self.storage
            .put_object(&key, bytes, content_type)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        tracing::debug!(section = %section, key = %key, "Uploaded file");

        self.manifest.push(ManifestEntry {
            section,
            label: prefix.to_string(),
            file_name: name.to_string(),
        });

        Ok(())
    }
}
