use crate::layout::navigation::HOME_PATH;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <PageFrame page_id="system--not-found" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Page not found"</h2>
                </div>
            </div>
            <div class="page__content">
                <p>
                    "Nothing lives at "
                    <code>{move || location.pathname.get()}</code>
                </p>
                <A href=HOME_PATH>"Back to overview"</A>
            </div>
        </PageFrame>
    }
}
