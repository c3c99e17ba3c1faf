//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Onboarding Intake API",
        version = "0.1.0",
        description = "Accepts business-onboarding form submissions, stores uploaded \
            documents in object storage under a per-submission folder, and generates \
            one summary spreadsheet per section."
    ),
    paths(handlers::submit::submit, handlers::health::health_check),
    tags(
        (name = "submissions", description = "Form submission intake"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
