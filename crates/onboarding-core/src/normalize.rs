//! Payload normalization.
//!
//! Turns the loose wire shape into a [`Submission`]. The only hard requirement
//! is the business name; everything else that is absent or malformed becomes
//! "not provided". Open-ended maps (`businessData` extras, `kycData`,
//! `financialFiles`) are iterated in declaration order - `serde_json` is built
//! with `preserve_order` so that order survives deserialization.

use chrono::Utc;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{
    BusinessProfile, Client, FilePayload, FinancialEntry, KycEntry, Submission, SubmissionRequest,
};

/// Well-known scalar keys of the business profile; every other key is a
/// candidate extra-document field.
const PROFILE_SCALAR_KEYS: [&str; 6] = [
    "businessName",
    "entity",
    "industry",
    "businessAge",
    "registeredOffice",
    "headOffice",
];

/// Normalize a raw submission request.
///
/// Fails with [`AppError::MissingRequiredField`] when the business profile or
/// its name is absent; performs no other validation.
pub fn normalize(request: SubmissionRequest) -> Result<Submission, AppError> {
    let business = match request.business_data.as_ref().and_then(Value::as_object) {
        Some(map) => map,
        None => {
            return Err(AppError::MissingRequiredField(
                "businessData".to_string(),
            ))
        }
    };

    let business_name = business
        .get("businessName")
        .and_then(scalar_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::MissingRequiredField("businessName".to_string()))?;

    let mut profile = BusinessProfile {
        business_name,
        entity: business.get("entity").and_then(scalar_to_string),
        industry: business.get("industry").and_then(scalar_to_string),
        business_age: business.get("businessAge").and_then(scalar_to_string),
        registered_office: business.get("registeredOffice").and_then(scalar_to_string),
        head_office: business.get("headOffice").and_then(scalar_to_string),
        documents: Vec::new(),
    };

    for (key, value) in business {
        if PROFILE_SCALAR_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Some(file) = file_payload_from(value) {
            profile.documents.push((key.clone(), file));
        }
    }

    let kyc = request
        .kyc_data
        .as_ref()
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(label, value)| KycEntry {
                    label: label.clone(),
                    file: file_payload_from(value),
                })
                .collect()
        })
        .unwrap_or_default();

    let mut financial = Vec::new();
    if let Some(map) = request.financial_files.as_ref().and_then(Value::as_object) {
        for (category, value) in map {
            let Some(items) = value.as_array() else {
                continue;
            };
            for (index, item) in items.iter().enumerate() {
                financial.push(FinancialEntry {
                    category: category.clone(),
                    index,
                    file: file_payload_from(item),
                });
            }
        }
    }

    let clients = request
        .client_data
        .as_ref()
        .and_then(Value::as_array)
        .map(|items| items.iter().map(client_from).collect())
        .unwrap_or_default();

    Ok(Submission {
        profile,
        kyc,
        financial,
        clients,
        submitted_at: Utc::now(),
    })
}

/// Interpret a JSON value as a file payload. Any object carrying at least one
/// of `data`/`name`/`type` qualifies; strictness about which of the three are
/// present is the uploader's concern, not the normalizer's.
fn file_payload_from(value: &Value) -> Option<FilePayload> {
    let map = value.as_object()?;
    if !map.contains_key("data") && !map.contains_key("name") && !map.contains_key("type") {
        return None;
    }
    Some(FilePayload {
        data: map.get("data").and_then(scalar_to_string),
        name: map.get("name").and_then(scalar_to_string),
        content_type: map.get("type").and_then(scalar_to_string),
    })
}

fn client_from(value: &Value) -> Client {
    let Some(map) = value.as_object() else {
        return Client::default();
    };
    Client {
        client_name: map.get("clientName").and_then(scalar_to_string),
        client_type: map.get("clientType").and_then(scalar_to_string),
        invoice_size: map.get("invoiceSize").and_then(scalar_to_string),
        payment_cycle: map.get("paymentCycle").and_then(scalar_to_string),
        start_date: map.get("startDate").and_then(scalar_to_string),
        end_date: map.get("endDate").and_then(scalar_to_string),
        payroll_list_upload: map.get("payrollListUpload").and_then(file_payload_from),
        work_order_upload: map.get("workOrderUpload").and_then(file_payload_from),
        invoice_upload: map.get("invoiceUpload").and_then(file_payload_from),
    }
}

/// Render a JSON scalar verbatim; objects, arrays and nulls are "not provided".
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SubmissionRequest {
        serde_json::from_value(body).expect("request should deserialize")
    }

    #[test]
    fn missing_business_data_is_rejected() {
        let err = normalize(request(json!({ "clientData": [] }))).unwrap_err();
        assert!(matches!(err, AppError::MissingRequiredField(ref f) if f == "businessData"));
    }

    #[test]
    fn missing_business_name_is_rejected() {
        let err = normalize(request(json!({
            "businessData": { "entity": "LLP" }
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::MissingRequiredField(ref f) if f == "businessName"));
    }

    #[test]
    fn blank_business_name_is_rejected() {
        let err = normalize(request(json!({
            "businessData": { "businessName": "   " }
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::MissingRequiredField(_)));
    }

    #[test]
    fn profile_scalars_are_extracted() {
        let submission = normalize(request(json!({
            "businessData": {
                "businessName": "Acme",
                "entity": "Pvt Ltd",
                "industry": "Staffing",
                "businessAge": 7,
                "registeredOffice": "12 High St",
                "headOffice": "14 High St"
            }
        })))
        .unwrap();

        let profile = &submission.profile;
        assert_eq!(profile.business_name, "Acme");
        assert_eq!(profile.entity.as_deref(), Some("Pvt Ltd"));
        assert_eq!(profile.business_age.as_deref(), Some("7"));
        assert!(profile.documents.is_empty());
    }

    #[test]
    fn extra_profile_fields_become_documents_in_declaration_order() {
        let submission = normalize(request(json!({
            "businessData": {
                "businessName": "Acme",
                "registrationCert": { "data": "aGk=", "name": "cert.pdf", "type": "application/pdf" },
                "notes": "just a string",
                "gstCert": { "data": "aGk=", "name": "gst.pdf", "type": "application/pdf" }
            }
        })))
        .unwrap();

        let labels: Vec<&str> = submission
            .profile
            .documents
            .iter()
            .map(|(label, _)| label.as_str())
            .collect();
        assert_eq!(labels, vec!["registrationCert", "gstCert"]);
    }

    #[test]
    fn kyc_labels_keep_declaration_order_and_presence() {
        let submission = normalize(request(json!({
            "businessData": { "businessName": "Acme" },
            "kycData": {
                "PAN": { "data": "aGk=", "name": "pan.pdf", "type": "application/pdf" },
                "GST": {}
            }
        })))
        .unwrap();

        assert_eq!(submission.kyc.len(), 2);
        assert_eq!(submission.kyc[0].label, "PAN");
        assert!(submission.kyc[0].file.as_ref().unwrap().has_content());
        assert_eq!(submission.kyc[1].label, "GST");
        assert!(submission.kyc[1].file.is_none());
    }

    #[test]
    fn financial_entries_are_enumerated_per_index() {
        let submission = normalize(request(json!({
            "businessData": { "businessName": "Acme" },
            "financialFiles": {
                "bankStatements": [
                    { "data": "aGk=", "name": "jan.pdf", "type": "application/pdf" },
                    { "data": "aGk=", "name": "feb.pdf", "type": "application/pdf" }
                ],
                "itr": "not an array"
            }
        })))
        .unwrap();

        assert_eq!(submission.financial.len(), 2);
        assert_eq!(submission.financial[0].category, "bankStatements");
        assert_eq!(submission.financial[0].index, 0);
        assert_eq!(submission.financial[1].index, 1);
    }

    #[test]
    fn malformed_client_data_is_empty_not_an_error() {
        let submission = normalize(request(json!({
            "businessData": { "businessName": "Acme" },
            "clientData": { "not": "an array" }
        })))
        .unwrap();
        assert!(submission.clients.is_empty());
    }

    #[test]
    fn clients_preserve_order_and_uploads() {
        let submission = normalize(request(json!({
            "businessData": { "businessName": "Acme" },
            "clientData": [
                {
                    "clientName": "Beta Corp",
                    "invoiceUpload": { "data": "aGk=", "name": "inv.pdf", "type": "application/pdf" }
                },
                { "clientName": "Gamma Inc", "paymentCycle": 45 }
            ]
        })))
        .unwrap();

        assert_eq!(submission.clients.len(), 2);
        assert_eq!(submission.clients[0].client_name.as_deref(), Some("Beta Corp"));
        assert!(submission.clients[0].invoice_upload.is_some());
        assert!(submission.clients[0].payroll_list_upload.is_none());
        assert_eq!(submission.clients[1].payment_cycle.as_deref(), Some("45"));
    }
}
