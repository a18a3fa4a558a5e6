//! Sidebar - registry-driven navigation with collapsible groups.

use crate::layout::global_context::use_app_context;
use crate::layout::navigation::{
    is_child_active, is_entry_active, NavigationEntry, SidebarExpansion, DEFAULT_EXPANDED,
    NAVIGATION,
};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let expansion = RwSignal::new(SidebarExpansion::new(DEFAULT_EXPANDED.iter().copied()));

    // following a link into a collapsed group opens that group
    Effect::new(move |_| {
        let path = location.pathname.get();
        expansion.update(|e| e.reveal(&path, NAVIGATION));
    });

    view! {
        <nav class="app-sidebar__content" aria-label="Main navigation">
            {NAVIGATION
                .iter()
                .map(|entry| view! { <SidebarGroup entry=entry expansion=expansion /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn SidebarGroup(
    entry: &'static NavigationEntry,
    expansion: RwSignal<SidebarExpansion>,
) -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let pathname = location.pathname;

    let label = entry.label;
    let is_expanded = move || expansion.with(|e| e.is_expanded(label));
    let toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        expansion.update(|e| e.toggle(label));
    };

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_entry_active(&pathname.get(), entry)
                style:padding-left="12px"
            >
                <A href=entry.path attr:class="app-sidebar__item-content" on:click=move |_| ctx.on_navigate()>
                    {icon(entry.icon)}
                    <span>{label}</span>
                </A>
                {entry.has_children().then(|| view! {
                    <button
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=is_expanded
                        aria-label=format!("Expand {}", label)
                        aria-expanded=move || is_expanded().to_string()
                        on:click=toggle
                    >
                        {icon("chevron-right")}
                    </button>
                })}
            </div>

            {entry.has_children().then(|| view! {
                <Show when=is_expanded>
                    <div class="app-sidebar__children">
                        {entry.children.iter().map(|child| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || is_child_active(&pathname.get(), child)
                                    style:padding-left="36px"
                                >
                                    <A href=child.path attr:class="app-sidebar__item-content" on:click=move |_| ctx.on_navigate()>
                                        <span>{child.label}</span>
                                    </A>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            })}
        </div>
    }
}
