pub mod center;
pub mod global_context;
pub mod header;
pub mod left;
pub mod navigation;

use crate::shared::toast::ToastHost;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |           Header             |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |      Content (Center)        |
/// |           |                              |
/// +-----------+------------------------------+
/// ```
///
/// The toast host is rendered last so it overlays every zone.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-main">
                <header::Header />
                <center::Center>
                    {center()}
                </center::Center>
            </div>

            <ToastHost />
        </div>
    }
}
