//! Page category constants.
//!
//! Every routed page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a004_order--detail"`) and `data-page-category` with one of the
//! constants below, so a DOM node can be traced back to its module.

/// Table of records
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Stat cards / charts
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Section landing pages and error pages
pub const PAGE_CAT_SYSTEM: &str = "system";

/// CSS classes for the page root of a category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class("something-else"), "page");
    }
}
