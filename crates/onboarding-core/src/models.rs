//! Domain models for one onboarding submission.
//!
//! The wire shape (`SubmissionRequest`) is deliberately loose: apart from the
//! business name, every field is optional and malformed sections are treated as
//! "not provided". The normalized shape (`Submission`) is what the upload and
//! summary pipelines consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One uploaded document as it appears on the wire: base64 content, declared
/// original name, declared MIME type. All three are optional in the JSON; an
/// upload is only attempted for payloads with content, and at that point all
/// three fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    pub data: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

impl FilePayload {
    /// Whether this payload carries content worth uploading. Payloads without
    /// content are skipped silently wherever they appear.
    pub fn has_content(&self) -> bool {
        self.data.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// Raw request body for `POST /submit`. Sections are kept as `Value` so that a
/// malformed section degrades to "not provided" instead of rejecting the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub business_data: Option<Value>,
    #[serde(default)]
    pub client_data: Option<Value>,
    #[serde(default)]
    pub kyc_data: Option<Value>,
    #[serde(default)]
    pub financial_files: Option<Value>,
}

/// Normalized business profile. `documents` holds the open-ended extra fields
/// of the profile that turned out to be file payloads, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessProfile {
    pub business_name: String,
    pub entity: Option<String>,
    pub industry: Option<String>,
    pub business_age: Option<String>,
    pub registered_office: Option<String>,
    pub head_office: Option<String>,
    pub documents: Vec<(String, FilePayload)>,
}

/// One client row. Scalar fields are rendered verbatim in the client summary;
/// absent fields stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Client {
    pub client_name: Option<String>,
    pub client_type: Option<String>,
    pub invoice_size: Option<String>,
    pub payment_cycle: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub payroll_list_upload: Option<FilePayload>,
    pub work_order_upload: Option<FilePayload>,
    pub invoice_upload: Option<FilePayload>,
}

/// One KYC document label and the payload supplied for it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct KycEntry {
    pub label: String,
    pub file: Option<FilePayload>,
}

/// One financial document entry: the category it was declared under and its
/// position within that category's list.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialEntry {
    pub category: String,
    pub index: usize,
    pub file: Option<FilePayload>,
}

/// The normalized unit of work for one request. Constructed entirely from one
/// inbound request, never persisted, discarded after the response.
#[derive(Debug, Clone)]
pub struct Submission {
    pub profile: BusinessProfile,
    pub kyc: Vec<KycEntry>,
    pub financial: Vec<FinancialEntry>,
    pub clients: Vec<Client>,
    /// Captured once at normalization; feeds the storage root so repeated
    /// submissions for the same business never overwrite each other.
    pub submitted_at: DateTime<Utc>,
}

/// Logical submission section, each with its own storage sub-folder and
/// summary document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Business,
    Kyc,
    Financial,
    Clients,
}

impl Section {
    /// Storage sub-folder for this section.
    pub fn folder(&self) -> &'static str {
        match self {
            Section::Business => "business",
            Section::Kyc => "kyc",
            Section::Financial => "financial",
            Section::Clients => "clients",
        }
    }

    /// Label used in summary file names, e.g. `Acme_Business_Summary.xlsx`.
    pub fn summary_label(&self) -> &'static str {
        match self {
            Section::Business => "Business",
            Section::Kyc => "KYC",
            Section::Financial => "Financial",
            Section::Clients => "Client",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.folder())
    }
}
