//! Header - resolved page title and sidebar toggle.

use crate::layout::global_context::use_app_context;
use crate::layout::navigation::{resolve_title, NAVIGATION};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const APP_NAME: &str = "Admin Console";

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();

    let title = Memo::new(move |_| resolve_title(&location.pathname.get(), NAVIGATION));

    // keep the browser tab in sync with the header
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} · {}", title.get(), APP_NAME));
        }
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="header__icon-btn"
                    aria-label="Toggle navigation"
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <h1 class="header__title">{move || title.get()}</h1>
            </div>
            <div class="header__actions">
                <span class="header__brand">{APP_NAME}</span>
            </div>
        </header>
    }
}
