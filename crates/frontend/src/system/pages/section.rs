use crate::layout::navigation::{resolve_title, NAVIGATION};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Placeholder for sections that have a navigation entry but no screen yet.
/// The heading follows the same title rules as the header.
#[component]
pub fn SectionPage(#[prop(optional)] icon_name: &'static str) -> impl IntoView {
    let location = use_location();
    let title = Memo::new(move |_| resolve_title(&location.pathname.get(), NAVIGATION));
    let icon_name = if icon_name.is_empty() { "layout-dashboard" } else { icon_name };

    view! {
        <PageFrame page_id="system--section" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(icon_name)}
                    <h2>{move || title.get()}</h2>
                </div>
            </div>
            <div class="page__content">
                <div class="empty-state">"Nothing to show here yet"</div>
            </div>
        </PageFrame>
    }
}
