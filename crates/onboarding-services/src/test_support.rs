//! Shared test fixtures: a recording in-memory storage backend and a fully
//! populated submission body.

use async_trait::async_trait;
use onboarding_core::{normalize, StorageBackend, Submission, SubmissionRequest};
use onboarding_storage::{Storage, StorageError, StorageResult};
use std::sync::Mutex;

/// A submission exercising every traversal branch: two business extra
/// documents, two KYC labels, one financial category with two files, and two
/// clients (one with all three uploads, one with only an invoice).
pub(crate) const FULL_FIXTURE: &str = r#"{
    "businessData": {
        "businessName": "Acme",
        "entity": "Pvt Ltd",
        "industry": "Staffing",
        "businessAge": 7,
        "registeredOffice": "12 High St",
        "headOffice": "14 High St",
        "registrationCert": { "data": "aGk=", "name": "cert.pdf", "type": "application/pdf" },
        "gstCert": { "data": "aGk=", "name": "gst.pdf", "type": "application/pdf" }
    },
    "kycData": {
        "PAN": { "data": "aGk=", "name": "pan.pdf", "type": "application/pdf" },
        "GST": { "data": "aGk=", "name": "gst-reg.pdf", "type": "application/pdf" }
    },
    "financialFiles": {
        "bankStatements": [
            { "data": "aGk=", "name": "jan.pdf", "type": "application/pdf" },
            { "data": "aGk=", "name": "feb.pdf", "type": "application/pdf" }
        ]
    },
    "clientData": [
        {
            "clientName": "Beta Corp",
            "clientType": "Enterprise",
            "invoiceSize": 120000,
            "paymentCycle": 45,
            "startDate": "2025-04-01",
            "endDate": "2026-03-31",
            "payrollListUpload": { "data": "aGk=", "name": "payroll.xlsx", "type": "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" },
            "workOrderUpload": { "data": "aGk=", "name": "wo.pdf", "type": "application/pdf" },
            "invoiceUpload": { "data": "aGk=", "name": "inv.pdf", "type": "application/pdf" }
        },
        {
            "clientName": "Gamma Inc",
            "invoiceUpload": { "data": "aGk=", "name": "inv2.pdf", "type": "application/pdf" }
        }
    ]
}"#;

pub(crate) fn submission_from(body: &str) -> Submission {
    let request: SubmissionRequest = serde_json::from_str(body).expect("fixture parses");
    normalize(request).expect("fixture normalizes")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WriteRecord {
    pub key: String,
    pub content_type: String,
    pub size: usize,
}

/// In-memory `Storage` that records every write and can be told to fail on
/// the nth write (0-based), mimicking a storage outage mid-request.
#[derive(Default)]
pub(crate) struct RecordingStorage {
    pub writes: Mutex<Vec<WriteRecord>>,
    fail_on: Option<usize>,
}

impl RecordingStorage {
    pub fn fail_on_write(n: usize) -> Self {
        RecordingStorage {
            writes: Mutex::new(Vec::new()),
            fail_on: Some(n),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|w| w.key.clone())
            .collect()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        let mut writes = self.writes.lock().unwrap();
        if self.fail_on == Some(writes.len()) {
            return Err(StorageError::UploadFailed("injected failure".to_string()));
        }
        writes.push(WriteRecord {
            key: key.to_string(),
            content_type: content_type.to_string(),
            size: data.len(),
        });
        Ok(format!("mock://bucket/{}", key))
    }

    fn folder_url(&self, prefix: &str) -> String {
        format!("mock://bucket/{}/", prefix)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
