use crate::dashboards::OverviewDashboard;
use crate::domain::a001_health_professional::ui::list::ProfessionalsList;
use crate::domain::a002_consultation::ui::list::ConsultationsList;
use crate::domain::a003_prescription::ui::list::PrescriptionsList;
use crate::domain::a004_order::ui::details::OrderDetails;
use crate::domain::a004_order::ui::list::{OrdersList, OrdersScope, FROM_QUERY_KEY};
use crate::layout::left::Sidebar;
use crate::layout::navigation::HOME_PATH;
use crate::layout::Shell;
use crate::system::pages::{NotFound, SectionPage};
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Outlet /> }.into_any()
        />
    }
}

/// Reads `:id` from the URL and closes back to the list it was opened from
#[component]
fn OrderDetailsRoute() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let back = query
            .with(|q| OrdersScope::from_query(q.get(FROM_QUERY_KEY).as_deref()))
            .list_path();
        let navigate = navigate.clone();
        view! {
            <OrderDetails
                id=id
                on_close=Callback::new(move |_| navigate(&back, Default::default()))
            />
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                <ParentRoute path=path!("/dashboard") view=MainLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path=path!("overview") view=OverviewDashboard />
                    <Route path=path!("orders") view=|| view! { <OrdersList /> } />
                    <Route path=path!("orders/:id") view=OrderDetailsRoute />
                    <Route path=path!("restaurants") view=|| view! { <SectionPage icon_name="store" /> } />
                    <Route path=path!("restaurants/directory") view=|| view! { <SectionPage icon_name="store" /> } />
                    <Route
                        path=path!("restaurants/orders")
                        view=|| view! { <OrdersList scope=OrdersScope::Restaurants /> }
                    />
                    <Route path=path!("consultations") view=|| view! { <ConsultationsList /> } />
                    <Route path=path!("consultations/doctors") view=|| view! { <ProfessionalsList /> } />
                    <Route path=path!("consultations/prescriptions") view=|| view! { <PrescriptionsList /> } />
                    <Route path=path!("users") view=|| view! { <SectionPage icon_name="users" /> } />
                    <Route path=path!("settings") view=|| view! { <SectionPage icon_name="settings" /> } />
                    <Route path=path!("*any") view=NotFound />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
