//! Shared key derivation for one submission.
//!
//! All artifacts of a submission share one root folder:
//! `{business_name}_{yyyymmddHHMMSSmmm}`. Below it, each section has a fixed
//! sub-folder and every file name embeds the business name, the originating
//! field (or client name plus document kind) and the uploaded original name.
//! Centralizing the format here keeps uploads, summaries and tests consistent.

use chrono::{DateTime, Utc};
use onboarding_core::Section;
use std::path::Path;

/// Derived storage layout for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPaths {
    business_name: String,
    root: String,
}

impl SubmissionPaths {
    /// Derive the layout from the business name and the submission timestamp.
    /// The timestamp is captured once per request so every write of the
    /// request lands under the same root. Millisecond precision keeps rapid
    /// repeat submissions for the same business apart.
    pub fn new(business_name: &str, submitted_at: DateTime<Utc>) -> Self {
        let business_name = sanitize_component(business_name, "business");
        let root = format!("{}_{}", business_name, submitted_at.format("%Y%m%d%H%M%S%3f"));
        SubmissionPaths {
            business_name,
            root,
        }
    }

    /// Root folder shared by every artifact of this submission.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Sanitized business name used inside file names.
    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    /// Key for one uploaded document:
    /// `{root}/{section}/{business}_{prefix}_{original_name}`.
    pub fn object_key(&self, section: Section, prefix: &str, original_name: &str) -> String {
        let file_name = format!(
            "{}_{}_{}",
            self.business_name,
            sanitize_component(prefix, "file"),
            sanitize_file_name(original_name, "unnamed"),
        );
        format!("{}/{}/{}", self.root, section.folder(), file_name)
    }

    /// Key for a generated section summary:
    /// `{root}/{section}/{business}_{Section}_Summary.xlsx`.
    pub fn summary_key(&self, section: Section) -> String {
        format!(
            "{}/{}/{}_{}_Summary.xlsx",
            self.root,
            section.folder(),
            self.business_name,
            section.summary_label()
        )
    }
}

/// Sanitize a caller-supplied key component. Path separators become
/// underscores and `..` is neutralized so a key can never escape its folder.
fn sanitize_component(raw: &str, fallback: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    let cleaned = cleaned.replace("..", "_");
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}

/// Sanitize an uploaded file name: keep only the base name (strips path
/// components like `../`), falling back when nothing usable remains.
fn sanitize_file_name(raw: &str, fallback: &str) -> String {
    Path::new(raw)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .map(|s| sanitize_component(s, fallback))
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn paths() -> SubmissionPaths {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        SubmissionPaths::new("Acme", at)
    }

    #[test]
    fn root_embeds_business_name_and_timestamp() {
        assert_eq!(paths().root(), "Acme_20260314092653000");
    }

    #[test]
    fn object_keys_have_three_segments_under_the_shared_root() {
        let p = paths();
        let key = p.object_key(Section::Kyc, "PAN", "pan-card.pdf");
        assert_eq!(key, "Acme_20260314092653000/kyc/Acme_PAN_pan-card.pdf");

        let segments: Vec<&str> = key.split('/').collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], p.root());
    }

    #[test]
    fn summary_keys_mirror_the_section_folder() {
        let p = paths();
        assert_eq!(
            p.summary_key(Section::Business),
            "Acme_20260314092653000/business/Acme_Business_Summary.xlsx"
        );
        assert_eq!(
            p.summary_key(Section::Clients),
            "Acme_20260314092653000/clients/Acme_Client_Summary.xlsx"
        );
    }

    #[test]
    fn traversal_attempts_are_neutralized() {
        let p = paths();
        let key = p.object_key(Section::Business, "../../etc", "../../passwd");
        assert!(!key.contains(".."));
        assert_eq!(key.split('/').count(), 3);
    }

    #[test]
    fn same_business_different_timestamps_never_collide() {
        let a = SubmissionPaths::new("Acme", Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
        let b = SubmissionPaths::new("Acme", Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 1).unwrap());
        assert_ne!(a.root(), b.root());
    }
}
