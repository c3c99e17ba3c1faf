//! The submission endpoint.
//!
//! One POST triggers the whole synchronous pipeline: normalize the body,
//! upload every supplied file, generate and store the four section summaries,
//! respond with the submission's root folder URL. The first failure anywhere
//! aborts the remaining work; objects already written stay in storage.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, Json};
use onboarding_core::{normalize, SubmissionRequest};
use onboarding_services::process_submission;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub message: String,
    /// Public URL of the submission's root storage folder.
    pub folder: String,
    /// Uploaded document count, summaries not included.
    pub files_uploaded: usize,
}

#[utoipa::path(
    post,
    path = "/submit",
    tag = "submissions",
    request_body(content = inline(Object), content_type = "application/json",
        description = "Onboarding form submission: businessData, clientData, kycData, financialFiles"),
    responses(
        (status = 200, description = "Submission stored", body = SubmitResponse),
        (status = 400, description = "Missing business name or invalid file payload", body = ErrorResponse),
        (status = 500, description = "Storage or summary generation failure", body = ErrorResponse)
    )
)]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SubmissionRequest>,
) -> Result<Json<SubmitResponse>, HttpAppError> {
    let submission = normalize(request)?;

    tracing::info!(
        business = %submission.profile.business_name,
        kyc_labels = submission.kyc.len(),
        financial_entries = submission.financial.len(),
        clients = submission.clients.len(),
        "Processing submission"
    );

    let outcome = process_submission(state.storage.clone(), &submission).await?;

    Ok(Json(SubmitResponse {
        message: "Data submitted and stored successfully".to_string(),
        folder: outcome.folder_url,
        files_uploaded: outcome.files_uploaded,
    }))
}
