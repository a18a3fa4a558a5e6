use leptos::prelude::*;

/// Content region of the shell
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-content">
            {children()}
        </main>
    }
}
