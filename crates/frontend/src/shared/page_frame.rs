//! PageFrame - standard root wrapper for every routed page.
//!
//! ```text
//! <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
//!     <div class="page__header">...</div>
//!     <div class="page__content">...</div>
//! </PageFrame>
//! ```

use super::page_standard::page_class;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a004_order--detail"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`
    category: &'static str,
    /// Extra CSS classes appended after the base class
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = page_class(category);
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
