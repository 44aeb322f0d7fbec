//! Description meter — character-count feedback and keyword suggestion
//! insertion for the job-description field.

use serde::Serialize;

/// Counter turns amber above this count.
pub const WARNING_THRESHOLD: usize = 3000;
/// Counter turns red above this count.
pub const CRITICAL_THRESHOLD: usize = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterLevel {
    Normal,
    Warning,
    Critical,
}

/// Severity level for a given character count.
pub fn counter_level(count: usize) -> CounterLevel {
    if count > CRITICAL_THRESHOLD {
        CounterLevel::Critical
    } else if count > WARNING_THRESHOLD {
        CounterLevel::Warning
    } else {
        CounterLevel::Normal
    }
}

/// Appends a suggested keyword as a `- <keyword>` bullet line.
///
/// Returns `None` when the text already mentions the keyword
/// (case-insensitive), leaving the field untouched.
pub fn append_suggestion(current: &str, keyword: &str) -> Option<String> {
    if current.to_lowercase().contains(&keyword.to_lowercase()) {
        return None;
    }

    if current.is_empty() {
        Some(format!("- {keyword}"))
    } else {
        Some(format!("{current}\n- {keyword}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_normal_below_warning_threshold() {
        assert_eq!(counter_level(0), CounterLevel::Normal);
        assert_eq!(counter_level(3000), CounterLevel::Normal);
    }

    #[test]
    fn test_level_warning_band() {
        assert_eq!(counter_level(3001), CounterLevel::Warning);
        assert_eq!(counter_level(4500), CounterLevel::Warning);
    }

    #[test]
    fn test_level_critical_above_upper_threshold() {
        assert_eq!(counter_level(4501), CounterLevel::Critical);
    }

    #[test]
    fn test_append_to_empty_text() {
        assert_eq!(append_suggestion("", "Kubernetes").unwrap(), "- Kubernetes");
    }

    #[test]
    fn test_append_adds_bullet_line() {
        let out = append_suggestion("5+ years backend experience", "Rust").unwrap();
        assert_eq!(out, "5+ years backend experience\n- Rust");
    }

    #[test]
    fn test_append_skips_existing_keyword_case_insensitive() {
        assert!(append_suggestion("Must know RUST well", "rust").is_none());
    }
}
