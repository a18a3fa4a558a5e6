//! Order details page (MVVM: model → view_model → page)

use super::view_model::OrderDetailsVm;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::components::ui::select::Select as UiSelect;
use crate::shared::date_utils::{format_datetime, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a004_order::Order;
use contracts::enums::{OrderStatus, PaymentStatus};
use leptos::prelude::*;
use thaw::*;

pub fn status_badge_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "warning",
        OrderStatus::Confirmed | OrderStatus::Preparing => "primary",
        OrderStatus::OutForDelivery => "primary",
        OrderStatus::Delivered => "success",
        OrderStatus::Cancelled => "error",
    }
}

fn payment_badge_variant(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "success",
        PaymentStatus::Pending => "warning",
        PaymentStatus::Refunded => "neutral",
        PaymentStatus::Failed => "error",
    }
}

/// Current status first, then the statuses reachable from it
pub fn status_options(current: OrderStatus) -> Vec<(String, String)> {
    std::iter::once(current)
        .chain(current.allowed_next().iter().copied())
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

#[component]
pub fn OrderDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = OrderDetailsVm::new(use_toast());
    vm.load(id);

    view! {
        <PageFrame page_id="a004_order--detail" category=PAGE_CAT_DETAIL>
            <Header vm=vm on_close=on_close />

            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else if let Some(err) = vm.error.get() {
                        view! {
                            <div class="alert alert--error">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }
                        .into_any()
                    } else if let Some(order) = vm.order.get() {
                        view! { <OrderBody order=order /> }.into_any()
                    } else {
                        view! { <div>"No data"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn Header(vm: OrderDetailsVm, on_close: Callback<()>) -> impl IntoView {
    let order_number = vm.order_number();
    let status = vm.status();
    let changed = vm.is_status_changed();

    let options = Signal::derive(move || status.get().map(status_options).unwrap_or_default());
    let locked = Signal::derive(move || {
        vm.saving.get() || status.get().map_or(true, |s| s.is_terminal())
    });

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2>{move || format!("Order {}", order_number.get())}</h2>
                {move || status.get().map(|s| view! {
                    <UiBadge variant=status_badge_variant(s).to_string()>{s.display_name()}</UiBadge>
                })}
            </div>
            <div class="page__header-right">
                <UiSelect
                    value=vm.selected_status
                    options=options
                    disabled=locked
                    on_change=Callback::new(move |code: String| vm.selected_status.set(code))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Medium
                    disabled=Signal::derive(move || !changed.get() || vm.saving.get())
                    on_click=move |_| vm.save_status()
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Update status" }}
                </Button>
                <Show when=move || changed.get()>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Medium
                        on_click=move |_| vm.reset_status()
                    >
                        "Reset"
                    </Button>
                </Show>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Medium
                    on_click=move |_| on_close.run(())
                >
                    {icon("arrow-left")}
                    "Back"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn OrderBody(order: Order) -> impl IntoView {
    let subtotal = order.items_subtotal();
    let mismatch = order.has_total_mismatch();
    let discount = order.discount;
    let payment = order.payment_status;

    let customer = order.customer.clone();
    let restaurant = order.restaurant.clone();
    let delivery_address = order.delivery_address.clone();
    let created = format_datetime(&order.created_at);
    let updated = format_datetime_opt(order.updated_at.as_ref());
    let items_title = format!("Items ({})", order.items_count());
    let items = order.items.clone();
    let delivery_fee = order.delivery_fee;
    let total = order.total;

    view! {
        <div class="detail-grid">
            <div class="detail-grid__col">
                <Card>
                    <h4 class="details-section__title">"Customer"</h4>
                    <dl class="details-list">
                        <dt>"Name"</dt><dd>{customer.name}</dd>
                        <dt>"Phone"</dt><dd>{customer.phone.unwrap_or_else(|| "—".to_string())}</dd>
                        <dt>"Email"</dt><dd>{customer.email.unwrap_or_else(|| "—".to_string())}</dd>
                        <dt>"Delivery address"</dt><dd>{delivery_address}</dd>
                    </dl>
                </Card>

                <Card>
                    <h4 class="details-section__title">"Restaurant"</h4>
                    <dl class="details-list">
                        <dt>"Name"</dt><dd>{restaurant.name}</dd>
                        <dt>"Address"</dt><dd>{restaurant.address.unwrap_or_else(|| "—".to_string())}</dd>
                    </dl>
                </Card>
            </div>

            <div class="detail-grid__col">
                <Card>
                    <h4 class="details-section__title">"Order"</h4>
                    <dl class="details-list">
                        <dt>"Created"</dt><dd>{created}</dd>
                        <dt>"Updated"</dt><dd>{updated}</dd>
                        <dt>"Payment"</dt>
                        <dd>
                            <UiBadge variant=payment_badge_variant(payment).to_string()>{payment.display_name()}</UiBadge>
                        </dd>
                    </dl>
                </Card>
            </div>
        </div>

        <Card>
            <h4 class="details-section__title">
                {items_title}
            </h4>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Item"</TableHeaderCell>
                        <TableHeaderCell>"Qty"</TableHeaderCell>
                        <TableHeaderCell>"Unit price"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {items.clone().into_iter().map(|item| {
                        let notes = item.notes.clone();
                        let name = item.name.clone();
                        let quantity = item.quantity;
                        let unit_price = format_money(item.unit_price);
                        let line_total = format_money(item.line_total());
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        {name}
                                        {notes.map(|n| view! { <div class="text-muted">{n}</div> })}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell class="text-right">{quantity}</TableCell>
                                <TableCell class="text-right">{unit_price}</TableCell>
                                <TableCell class="text-right">{line_total}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>

            <dl class="details-list details-list--totals">
                <dt>"Subtotal"</dt><dd>{format_money(subtotal)}</dd>
                <dt>"Delivery fee"</dt><dd>{format_money(delivery_fee)}</dd>
                {discount.map(|d| view! {
                    <dt>"Discount"</dt><dd>{format!("-{}", format_money(d))}</dd>
                })}
                <dt><strong>"Total"</strong></dt><dd><strong>{format_money(total)}</strong></dd>
            </dl>
            <Show when=move || mismatch>
                <div class="alert alert--warning">
                    "Total reported by the provider differs from the sum of items."
                </div>
            </Show>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_start_with_current() {
        let options = status_options(OrderStatus::Preparing);
        let codes: Vec<&str> = options.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(codes, vec!["PREPARING", "OUT_FOR_DELIVERY", "CANCELLED"]);
    }

    #[test]
    fn test_terminal_status_has_single_option() {
        assert_eq!(status_options(OrderStatus::Delivered).len(), 1);
    }
}
