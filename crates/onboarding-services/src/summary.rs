//! Summary generation.
//!
//! Derives one tabular document per section from the normalized submission
//! and serializes each to an xlsx workbook in memory. Summaries are a pure
//! function of what was supplied in the payload - never of what actually made
//! it into storage - so a KYC row reads YES even if the corresponding upload
//! would have failed a moment later.

use onboarding_core::{AppError, Section, Submission};
use rust_xlsxwriter::Workbook;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// One section summary: a fixed header row plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySheet {
    pub section: Section,
    pub sheet_name: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// Build the four section summaries in their fixed generation order:
/// business, KYC, financial, clients.
pub fn build_summaries(submission: &Submission) -> Vec<SummarySheet> {
    vec![
        business_summary(submission),
        kyc_summary(submission),
        financial_summary(submission),
        client_summary(submission),
    ]
}

fn business_summary(submission: &Submission) -> SummarySheet {
    let profile = &submission.profile;
    SummarySheet {
        section: Section::Business,
        sheet_name: "Business Details",
        headers: &[
            "Business Name",
            "Entity",
            "Industry",
            "Business Age (in Years)",
            "Registered Address",
            "Head Office Address",
        ],
        rows: vec![vec![
            profile.business_name.clone(),
            profile.entity.clone().unwrap_or_default(),
            profile.industry.clone().unwrap_or_default(),
            profile.business_age.clone().unwrap_or_default(),
            profile.registered_office.clone().unwrap_or_default(),
            profile.head_office.clone().unwrap_or_default(),
        ]],
    }
}

fn kyc_summary(submission: &Submission) -> SummarySheet {
    SummarySheet {
        section: Section::Kyc,
        sheet_name: "KYC Details",
        headers: &["Document Name", "Present"],
        rows: submission
            .kyc
            .iter()
            .map(|entry| {
                let present = entry.file.as_ref().is_some_and(|f| f.has_content());
                vec![entry.label.clone(), presence_flag(present)]
            })
            .collect(),
    }
}

fn financial_summary(submission: &Submission) -> SummarySheet {
    SummarySheet {
        section: Section::Financial,
        sheet_name: "Financial Details",
        headers: &["Document Name", "Present"],
        rows: submission
            .financial
            .iter()
            .map(|entry| {
                let present = entry.file.as_ref().is_some_and(|f| f.has_content());
                vec![
                    format!("{}_{}", entry.category, entry.index),
                    presence_flag(present),
                ]
            })
            .collect(),
    }
}

fn client_summary(submission: &Submission) -> SummarySheet {
    SummarySheet {
        section: Section::Clients,
        sheet_name: "Client Details",
        headers: &[
            "Client Name",
            "Client Type",
            "Last Invoice Amount",
            "Payment Cycle (in Days)",
            "Project Start Date",
            "Work Order Valid till",
        ],
        rows: submission
            .clients
            .iter()
            .map(|client| {
                vec![
                    client.client_name.clone().unwrap_or_default(),
                    client.client_type.clone().unwrap_or_default(),
                    client.invoice_size.clone().unwrap_or_default(),
                    client.payment_cycle.clone().unwrap_or_default(),
                    client.start_date.clone().unwrap_or_default(),
                    client.end_date.clone().unwrap_or_default(),
                ]
            })
            .collect(),
    }
}

fn presence_flag(present: bool) -> String {
    if present { "YES" } else { "NO" }.to_string()
}

/// Serialize one summary sheet to an xlsx byte buffer.
pub fn summary_workbook(sheet: &SummarySheet) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet.sheet_name)
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| AppError::Spreadsheet(e.to_string()))?;
    }
    for (row, cells) in sheet.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, cell.as_str())
                .map_err(|e| AppError::Spreadsheet(e.to_string()))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Spreadsheet(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{submission_from, FULL_FIXTURE};

    #[test]
    fn summaries_come_in_fixed_section_order() {
        let submission = submission_from(FULL_FIXTURE);
        let sections: Vec<Section> = build_summaries(&submission)
            .iter()
            .map(|s| s.section)
            .collect();
        assert_eq!(
            sections,
            vec![
                Section::Business,
                Section::Kyc,
                Section::Financial,
                Section::Clients
            ]
        );
    }

    #[test]
    fn business_summary_has_exactly_one_row() {
        let submission = submission_from(FULL_FIXTURE);
        let sheet = business_summary(&submission);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(
            sheet.rows[0],
            vec![
                "Acme",
                "Pvt Ltd",
                "Staffing",
                "7",
                "12 High St",
                "14 High St"
            ]
        );
    }

    #[test]
    fn absent_business_scalars_render_empty() {
        let submission =
            submission_from(r#"{ "businessData": { "businessName": "Acme" } }"#);
        let sheet = business_summary(&submission);
        assert_eq!(sheet.rows[0], vec!["Acme", "", "", "", "", ""]);
    }

    #[test]
    fn kyc_flags_follow_supplied_payloads() {
        let submission = submission_from(
            r#"{
                "businessData": { "businessName": "Acme" },
                "kycData": {
                    "PAN": { "data": "aGk=", "name": "pan.pdf", "type": "application/pdf" },
                    "GST": {},
                    "Aadhaar": { "name": "aadhaar.pdf" }
                }
            }"#,
        );
        let sheet = kyc_summary(&submission);
        assert_eq!(
            sheet.rows,
            vec![
                vec!["PAN".to_string(), "YES".to_string()],
                vec!["GST".to_string(), "NO".to_string()],
                vec!["Aadhaar".to_string(), "NO".to_string()],
            ]
        );
    }

    #[test]
    fn financial_rows_match_the_upload_enumeration() {
        let submission = submission_from(FULL_FIXTURE);
        let sheet = financial_summary(&submission);
        assert_eq!(
            sheet.rows,
            vec![
                vec!["bankStatements_0".to_string(), "YES".to_string()],
                vec!["bankStatements_1".to_string(), "YES".to_string()],
            ]
        );
    }

    #[test]
    fn financial_summary_may_have_zero_rows() {
        let submission =
            submission_from(r#"{ "businessData": { "businessName": "Acme" } }"#);
        let sheet = financial_summary(&submission);
        assert!(sheet.rows.is_empty());
        assert_eq!(sheet.headers, &["Document Name", "Present"]);
    }

    #[test]
    fn client_rows_keep_original_order_and_verbatim_values() {
        let submission = submission_from(FULL_FIXTURE);
        let sheet = client_summary(&submission);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(
            sheet.rows[0],
            vec![
                "Beta Corp",
                "Enterprise",
                "120000",
                "45",
                "2025-04-01",
                "2026-03-31"
            ]
        );
        assert_eq!(sheet.rows[1][0], "Gamma Inc");
        assert_eq!(sheet.rows[1][2], ""); // absent field renders empty
    }

    #[test]
    fn workbooks_serialize_to_xlsx_buffers() {
        let submission = submission_from(FULL_FIXTURE);
        for sheet in build_summaries(&submission) {
            let buffer = summary_workbook(&sheet).unwrap();
            // xlsx is a zip container
            assert_eq!(&buffer[..2], b"PK");
        }
    }
}
