//! Advisory notifications — the transient, auto-dismissing toasts the page
//! surfaces for its two failure kinds (missing inputs, unsupported file type)
//! and for success cues. Advisories never block further action and are never
//! retried; API responses embed them for the page to render.

use serde::Serialize;

const ERROR_DISMISS_MS: u64 = 4000;
const SUCCESS_DISMISS_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Error,
    Success,
}

/// A single transient notification.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
    /// Milliseconds before the toast dismisses itself.
    pub dismiss_after_ms: u64,
}

impl Advisory {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::Error,
            message: message.into(),
            dismiss_after_ms: ERROR_DISMISS_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::Success,
            message: message.into(),
            dismiss_after_ms: SUCCESS_DISMISS_MS,
        }
    }
}

/// Advisory for the share-results action: a granted clipboard copy confirms,
/// a denied one falls back to an equivalent advisory instead of surfacing the
/// raw error.
pub fn share_advisory(clipboard_copied: bool) -> Advisory {
    if clipboard_copied {
        Advisory::success("Results link copied to clipboard!")
    } else {
        Advisory::error("Could not copy the results link. Copy it from the address bar instead.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_advisory_dismisses_after_four_seconds() {
        let a = Advisory::error("Please upload a resume file.");
        assert_eq!(a.kind, AdvisoryKind::Error);
        assert_eq!(a.dismiss_after_ms, 4000);
    }

    #[test]
    fn test_success_advisory_dismisses_after_three_seconds() {
        let a = Advisory::success("Resume uploaded successfully!");
        assert_eq!(a.kind, AdvisoryKind::Success);
        assert_eq!(a.dismiss_after_ms, 3000);
    }

    #[test]
    fn test_share_fallback_is_advisory_not_fatal() {
        let denied = share_advisory(false);
        assert_eq!(denied.kind, AdvisoryKind::Error);
        assert!(denied.message.contains("address bar"));

        let granted = share_advisory(true);
        assert_eq!(granted.kind, AdvisoryKind::Success);
    }
}
