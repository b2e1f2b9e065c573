//! Formatting utilities for display values.

/// Format a byte count for display (e.g., "1.5 KB", "2.25 MB").
///
/// Base-1024 units, rounded to two decimals with trailing zeros
/// dropped. Zero is special-cased as "0 Bytes".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", trim_decimals(rounded), UNITS[exponent])
}

/// Render a rounded value the way JS numbers print: no trailing zeros,
/// no decimal point on whole numbers.
fn trim_decimals(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_small_sizes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2048), "2 KB");
    }

    #[test]
    fn test_megabytes_and_gigabytes() {
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 256 * 1024), "5.25 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_no_trailing_zeros() {
        // 1.50 KB should print as 1.5 KB, 1.10 as 1.1.
        assert_eq!(format_file_size(1126), "1.1 KB");
        assert!(!format_file_size(1536).contains("1.50"));
    }
}
