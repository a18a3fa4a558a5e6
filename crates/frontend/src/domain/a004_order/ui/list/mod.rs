use crate::domain::a004_order::ui::details::page::status_badge_variant;
use crate::layout::navigation::ROOT_PATH;
use crate::shared::api_utils::get_json;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a004_order::OrderListItem;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Query parameter on the detail route naming the list to return to
pub const FROM_QUERY_KEY: &str = "from";

/// Which slice of orders the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrdersScope {
    #[default]
    All,
    /// Orders grouped under the restaurants section
    Restaurants,
}

impl OrdersScope {
    fn api_path(&self) -> &'static str {
        match self {
            OrdersScope::All => "/api/orders",
            OrdersScope::Restaurants => "/api/orders?scope=restaurants",
        }
    }

    fn page_id(&self) -> &'static str {
        match self {
            OrdersScope::All => "a004_order--list",
            OrdersScope::Restaurants => "a004_order_restaurants--list",
        }
    }

    /// Value of the `from` query parameter, None for the default list
    fn query_value(&self) -> Option<&'static str> {
        match self {
            OrdersScope::All => None,
            OrdersScope::Restaurants => Some("restaurants"),
        }
    }

    /// Unknown or missing values fall back to the full list
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("restaurants") => OrdersScope::Restaurants,
            _ => OrdersScope::All,
        }
    }

    /// Route of the list itself
    pub fn list_path(&self) -> String {
        match self {
            OrdersScope::All => format!("{}/orders", ROOT_PATH),
            OrdersScope::Restaurants => format!("{}/restaurants/orders", ROOT_PATH),
        }
    }

    /// Detail route of an order, remembering which list it was opened from
    pub fn detail_href(&self, id: &str) -> String {
        let base = format!("{}/orders/{}", ROOT_PATH, urlencoding::encode(id));
        match self.query_value() {
            Some(from) => format!("{}?{}={}", base, FROM_QUERY_KEY, from),
            None => base,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub restaurant_name: String,
    pub status: OrderStatus,
    pub total: String,
    pub created_at: String,
}

impl From<OrderListItem> for OrderRow {
    fn from(o: OrderListItem) -> Self {
        Self {
            id: o.id,
            order_number: o.order_number,
            customer_name: o.customer_name,
            restaurant_name: o.restaurant_name,
            status: o.status,
            total: format_money(o.total),
            created_at: format_datetime(&o.created_at),
        }
    }
}

#[component]
pub fn OrdersList(#[prop(optional)] scope: OrdersScope) -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<OrderRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match get_json::<Vec<OrderListItem>>(scope.api_path()).await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load orders: {}", e);
                    toast.error(format!("Could not load orders: {}", e));
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <PageFrame page_id=scope.page_id() category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Orders"</h2>
                    <UiBadge variant="primary".to_string()>
                        {move || items.get().len().to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| fetch()
                    >
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Order"</TableHeaderCell>
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <TableHeaderCell>"Restaurant"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|row| row.id.clone()
                            children=move |row: OrderRow| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <A href=scope.detail_href(&row.id)>{row.order_number}</A>
                                        </TableCell>
                                        <TableCell>{row.customer_name}</TableCell>
                                        <TableCell>{row.restaurant_name}</TableCell>
                                        <TableCell>
                                            <UiBadge variant=status_badge_variant(row.status).to_string()>
                                                {row.status.display_name()}
                                            </UiBadge>
                                        </TableCell>
                                        <TableCell class="text-right">{row.total}</TableCell>
                                        <TableCell>{row.created_at}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || !loading.get() && error.get().is_none() && items.get().is_empty()>
                    <div class="empty-state">"No orders yet"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_href_keeps_origin() {
        assert_eq!(OrdersScope::All.detail_href("o-42"), "/dashboard/orders/o-42");
        assert_eq!(OrdersScope::All.detail_href("x y"), "/dashboard/orders/x%20y");
        assert_eq!(
            OrdersScope::Restaurants.detail_href("o-42"),
            "/dashboard/orders/o-42?from=restaurants"
        );
    }

    #[test]
    fn test_back_target_from_query() {
        assert_eq!(
            OrdersScope::from_query(Some("restaurants")).list_path(),
            "/dashboard/restaurants/orders"
        );
        assert_eq!(OrdersScope::from_query(None).list_path(), "/dashboard/orders");
        assert_eq!(OrdersScope::from_query(Some("bogus")), OrdersScope::All);
    }
}
