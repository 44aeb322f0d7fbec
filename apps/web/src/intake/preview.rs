//! Upload preview — the name/size card shown once a resume is attached.

use serde::Serialize;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Preview card data for an attached resume.
#[derive(Debug, Clone, Serialize)]
pub struct FilePreview {
    pub name: String,
    pub size_label: String,
}

impl FilePreview {
    pub fn new(name: &str, size_bytes: u64) -> Self {
        Self {
            name: name.to_string(),
            size_label: format_file_size(size_bytes),
        }
    }
}

/// Human-readable file size in binary units (base 1024), two decimals with
/// trailing zeros trimmed. Zero bytes renders as "0 Bytes".
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut rendered = format!("{value:.2}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }

    format!("{} {}", rendered, SIZE_UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_two_megabyte_pdf() {
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
    }

    #[test]
    fn test_sub_kilobyte_stays_in_bytes() {
        assert_eq!(format_file_size(512), "512 Bytes");
    }

    #[test]
    fn test_kilobyte_boundary() {
        assert_eq!(format_file_size(1024), "1 KB");
    }

    #[test]
    fn test_fractional_size_keeps_two_decimals() {
        // 1536 KB = 1.5 MB
        assert_eq!(format_file_size(1536 * 1024), "1.5 MB");
        // 1.25 KB
        assert_eq!(format_file_size(1280), "1.25 KB");
    }

    #[test]
    fn test_gigabyte_range() {
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_preview_carries_name_and_label() {
        let preview = FilePreview::new("resume.pdf", 2 * 1024 * 1024);
        assert_eq!(preview.name, "resume.pdf");
        assert_eq!(preview.size_label, "2 MB");
    }
}
