//! PageFrame — standard root wrapper for every use case on the page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{usecase}--{category}"`, e.g. `"u102_add_document--panel"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```rust,ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_USECASE;
//!
//! #[component]
//! pub fn MyUseCase() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="u101_enhance_prompt--usecase".to_string() category=PAGE_CAT_USECASE>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every use case.
///
/// Adds the BEM modifier class based on category:
/// - `usecase` → `page`
/// - `panel`   → `page page--panel`
#[component]
pub fn PageFrame(
    /// HTML id in format `{usecase}--{category}`.
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(&page_id), "bad page id {page_id}");
    debug_assert!(is_known_category(category), "unknown page category {category}");

    let base_class = match category {
        PAGE_CAT_PANEL => "page page--panel",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
