//! ViewModel for order details

use super::model::{fetch_by_id, update_status};
use crate::shared::toast::ToastService;
use chrono::Utc;
use contracts::domain::a004_order::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dropdown code differs from the loaded order's status
fn status_differs(order: Option<&Order>, picked: &str) -> bool {
    order.map_or(false, |o| o.status.code() != picked)
}

#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub order: RwSignal<Option<Order>>,
    /// Status code picked in the dropdown, not yet sent
    pub selected_status: RwSignal<String>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    toast: ToastService,
}

impl OrderDetailsVm {
    pub fn new(toast: ToastService) -> Self {
        Self {
            id: RwSignal::new(None),
            order: RwSignal::new(None),
            selected_status: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            toast,
        }
    }

    pub fn order_number(&self) -> Signal<String> {
        let order = self.order;
        Signal::derive(move || {
            order
                .get()
                .map(|o| o.order_number)
                .unwrap_or_default()
        })
    }

    pub fn status(&self) -> Signal<Option<OrderStatus>> {
        let order = self.order;
        Signal::derive(move || order.with(|o| o.as_ref().map(|o| o.status)))
    }

    /// Dropdown holds a different status than the loaded order
    pub fn is_status_changed(&self) -> Signal<bool> {
        let order = self.order;
        let selected = self.selected_status;
        Signal::derive(move || {
            let picked = selected.get();
            order.with(|o| status_differs(o.as_ref(), &picked))
        })
    }

    pub fn load(&self, id: String) {
        let vm = *self;
        vm.id.set(Some(id.clone()));
        vm.loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            match fetch_by_id(&id).await {
                Ok(order) => {
                    log::info!("order {} loaded", order.order_number);
                    vm.apply(order);
                }
                Err(e) => {
                    log::error!("failed to load order {}: {}", id, e);
                    vm.toast.error(format!("Could not load order: {}", e));
                    vm.error.set(Some(e));
                }
            }
            vm.loading.set(false);
        });
    }

    fn apply(&self, order: Order) {
        self.selected_status.set(order.status.code().to_string());
        self.order.set(Some(order));
    }

    /// Sends the dropdown status to the provider and reloads on success
    pub fn save_status(&self) {
        let Some(id) = self.id.get_untracked() else {
            return;
        };
        let code = self.selected_status.get_untracked();
        let Some(status) = OrderStatus::from_code(&code) else {
            self.toast.error(format!("Unknown status: {}", code));
            return;
        };

        let vm = *self;
        vm.saving.set(true);

        spawn_local(async move {
            match update_status(&id, status).await {
                Ok(()) => {
                    // accepted by the provider; reflect it before the reload
                    vm.order.update(|o| {
                        if let Some(o) = o {
                            o.apply_status(status, Utc::now());
                        }
                    });
                    vm.toast
                        .success(format!("Status changed to \"{}\"", status.display_name()));
                    match fetch_by_id(&id).await {
                        Ok(order) => vm.apply(order),
                        Err(e) => {
                            log::error!("reload of order {} after status update failed: {}", id, e);
                            vm.toast.error(format!("Could not reload order: {}", e));
                        }
                    }
                }
                Err(e) => {
                    log::error!("status update for order {} failed: {}", id, e);
                    vm.toast.error(format!("Status update failed: {}", e));
                }
            }
            vm.saving.set(false);
        });
    }

    /// Drops the dropdown choice back to the loaded status
    pub fn reset_status(&self) {
        if let Some(status) = self.order.with_untracked(|o| o.as_ref().map(|o| o.status)) {
            self.selected_status.set(status.code().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a004_order::{OrderCustomer, OrderRestaurant};
    use contracts::enums::PaymentStatus;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "o-7".into(),
            order_number: "ORD-0007".into(),
            customer: OrderCustomer {
                id: "u-1".into(),
                name: "Ada".into(),
                phone: None,
                email: None,
            },
            restaurant: OrderRestaurant {
                id: "r-1".into(),
                name: "Suya Spot".into(),
                address: None,
            },
            items: vec![],
            status,
            payment_status: PaymentStatus::Paid,
            delivery_address: "3 Broad St".into(),
            delivery_fee: 0.0,
            discount: None,
            total: 0.0,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_status_differs() {
        let o = order(OrderStatus::Preparing);
        assert!(!status_differs(None, "PREPARING"));
        assert!(!status_differs(Some(&o), "PREPARING"));
        assert!(status_differs(Some(&o), "OUT_FOR_DELIVERY"));
    }

    #[test]
    fn test_accepted_status_clears_pending_change() {
        // PUT accepted, reload not yet (or never) back
        let mut o = order(OrderStatus::Preparing);
        let picked = OrderStatus::OutForDelivery.code();
        assert!(status_differs(Some(&o), picked));

        o.apply_status(OrderStatus::OutForDelivery, Utc::now());

        assert!(!status_differs(Some(&o), picked));
        assert_eq!(o.status.allowed_next(), &[OrderStatus::Delivered]);
    }
}
