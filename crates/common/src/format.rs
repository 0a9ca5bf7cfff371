//! Display formatting helpers shared by the presentation layers

use chrono::{DateTime, Utc};

/// Format a timestamp as a long-form date, e.g. "August 6, 2026".
pub fn format_date(date: DateTime<Utc>) -> String {
    // %-d would be nicer but is platform-dependent; strip the pad instead
    let day = date.format("%d").to_string();
    let day = day.trim_start_matches('0');
    format!("{} {}, {}", date.format("%B"), day, date.format("%Y"))
}

/// Truncate text to `max_length` characters, appending an ellipsis.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(date), "March 5, 2024");

        let date = Utc.with_ymd_and_hms(2023, 11, 21, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "November 21, 2023");
    }

    #[test]
    fn test_truncate_text_short_input_unchanged() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_text_long_input() {
        assert_eq!(truncate_text("hello world", 5), "hello...");
        // Trailing whitespace inside the cut is trimmed before the ellipsis
        assert_eq!(truncate_text("hello world", 6), "hello...");
    }
}
