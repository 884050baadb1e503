//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"d400_line_tracking--dashboard"`) and a
//! `data-page-category` with one of the constants below.

/// Edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Live dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Scanning workflow.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert!(is_valid_page_id("d400_line_tracking--dashboard"));
        assert!(!is_valid_page_id("d400_line_tracking"));
        assert!(!is_valid_page_id("--dashboard"));
    }
}
