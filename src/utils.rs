use chrono::Utc;

/// Collapse internal whitespace runs to single spaces and trim the ends
///
/// All extracted text passes through here so that markup indentation and
/// newlines never leak into the report.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// File name for a persisted report, unique per second of wall time
pub fn timestamped_filename() -> String {
    format!("scrape_{}.json", Utc::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Hello   world  "), "Hello world");
        assert_eq!(clean_text("line\none\n\tline two"), "line one line two");
        assert_eq!(clean_text("   \n\t "), "");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_timestamped_filename_shape() {
        let name = timestamped_filename();
        assert!(name.starts_with("scrape_"));
        assert!(name.ends_with(".json"));
        // scrape_YYYYMMDD_HHMMSS.json
        assert_eq!(name.len(), "scrape_20240101_000000.json".len());
    }
}
