//! Page category constants.
//!
//! Every page frame declares:
//!   - HTML `id` in the format `{usecase}--{category}` (e.g. `"u101_enhance_prompt--usecase"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the use case name searchable from the DOM
//! Inspector straight into `usecases/{usecase}/`.

/// Main work area of a use case.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Compact panel hosted by the sidebar.
pub const PAGE_CAT_PANEL: &str = "panel";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_USECASE, PAGE_CAT_PANEL];

/// Validate that a page id matches the `{usecase}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Page id for a use case rendered in the given category.
pub fn page_id(full_name: &str, category: &str) -> String {
    format!("{full_name}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("u101_enhance_prompt", PAGE_CAT_USECASE);
        assert_eq!(id, "u101_enhance_prompt--usecase");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("u101_enhance_prompt"));
        assert!(!is_valid_page_id("--usecase"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_PANEL));
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(!is_known_category("legacy"));
    }
}
