use crate::layout::global_context::{is_narrow_viewport, use_app_context};
use leptos::prelude::*;

/// Left zone; hidden via CSS when the sidebar is toggled off
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:app-sidebar--hidden=move || !is_open()>
            {children()}
        </aside>
        // backdrop closes the overlaying sidebar on narrow viewports.
        // Width is sampled when `left_open` changes, not on resize.
        <Show when=move || is_open() && is_narrow_viewport()>
            <div class="app-sidebar__backdrop" on:click=move |_| ctx.close_left()></div>
        </Show>
    }
}
