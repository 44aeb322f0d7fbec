//! Submission Gate — decides whether an analysis submission may proceed.
//!
//! Two layers, both over the same pair of checks:
//! - `can_submit` is the cheap derived predicate reflected on the submit
//!   control whenever an input changes (an affordance, not a boundary).
//! - `validate_submission` is the authoritative check run at submit time; it
//!   collects EVERY failing condition into one combined advisory message
//!   rather than stopping at the first.

use serde::Serialize;

/// MIME types a resume upload may carry: PDF, DOCX, and legacy DOC.
pub const ACCEPTED_FILE_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
];

pub const MISSING_FILE_MSG: &str = "Please upload a resume file.";
pub const MISSING_DESCRIPTION_MSG: &str = "Please enter a job description.";
pub const UNSUPPORTED_TYPE_MSG: &str = "Please upload a valid PDF or DOCX file.";

/// Result of the authoritative submit-time validation.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionValidation {
    pub passed: bool,
    /// Every failing condition, in check order.
    pub errors: Vec<String>,
}

impl SubmissionValidation {
    /// The single combined user-facing message, or `None` when validation passed.
    pub fn combined_message(&self) -> Option<String> {
        if self.passed {
            None
        } else {
            Some(self.errors.join(" "))
        }
    }
}

/// Derived readiness predicate: a file is attached AND the description has at
/// least one non-whitespace character.
pub fn can_submit(has_file: bool, description: &str) -> bool {
    has_file && !description.trim().is_empty()
}

/// Whether a file's MIME type is in the accepted set. Files outside it never
/// populate the selection.
pub fn is_accepted_type(mime: &str) -> bool {
    ACCEPTED_FILE_TYPES.contains(&mime)
}

/// Re-runs both gate checks at submit time, collecting all failures.
pub fn validate_submission(has_file: bool, description: &str) -> SubmissionValidation {
    let mut errors = Vec::new();

    if !has_file {
        errors.push(MISSING_FILE_MSG.to_string());
    }
    if description.trim().is_empty() {
        errors.push(MISSING_DESCRIPTION_MSG.to_string());
    }

    SubmissionValidation {
        passed: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_submit_requires_both_inputs() {
        assert!(can_submit(true, "Senior Rust engineer"));
        assert!(!can_submit(false, "Senior Rust engineer"));
        assert!(!can_submit(true, ""));
        assert!(!can_submit(false, ""));
    }

    #[test]
    fn test_can_submit_rejects_whitespace_only_description() {
        assert!(!can_submit(true, "   \n\t  "));
    }

    #[test]
    fn test_validate_passes_with_both_inputs() {
        let v = validate_submission(true, "We need Python and SQL.");
        assert!(v.passed);
        assert!(v.errors.is_empty());
        assert!(v.combined_message().is_none());
    }

    #[test]
    fn test_validate_names_missing_file_only() {
        let v = validate_submission(false, "We need Python and SQL.");
        assert!(!v.passed);
        assert_eq!(v.errors, vec![MISSING_FILE_MSG.to_string()]);
    }

    #[test]
    fn test_validate_names_missing_description_only() {
        let v = validate_submission(true, "   ");
        assert!(!v.passed);
        assert_eq!(v.errors, vec![MISSING_DESCRIPTION_MSG.to_string()]);
    }

    #[test]
    fn test_validate_names_every_failing_condition() {
        let v = validate_submission(false, "");
        assert_eq!(v.errors.len(), 2);
        assert_eq!(
            v.combined_message().unwrap(),
            format!("{MISSING_FILE_MSG} {MISSING_DESCRIPTION_MSG}")
        );
    }

    #[test]
    fn test_accepted_types_cover_pdf_docx_and_legacy_doc() {
        assert!(is_accepted_type("application/pdf"));
        assert!(is_accepted_type(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(is_accepted_type("application/msword"));
    }

    #[test]
    fn test_unsupported_types_rejected() {
        assert!(!is_accepted_type("text/plain"));
        assert!(!is_accepted_type("image/png"));
        assert!(!is_accepted_type(""));
    }
}
