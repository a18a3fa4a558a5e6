use crate::enums::{OrderStatus, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer who placed the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Restaurant fulfilling the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRestaurant {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub notes: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Delivery order as returned by the data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer: OrderCustomer,
    pub restaurant: OrderRestaurant,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub delivery_address: String,
    pub delivery_fee: f64,
    pub discount: Option<f64>,
    /// Total charged, as computed by the provider
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn items_subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Subtotal + delivery fee - discount
    pub fn computed_total(&self) -> f64 {
        self.items_subtotal() + self.delivery_fee - self.discount.unwrap_or(0.0)
    }

    /// True when the provider total differs from the item sum by more than a cent
    pub fn has_total_mismatch(&self) -> bool {
        (self.computed_total() - self.total).abs() > 0.01
    }

    pub fn items_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Records a status change the provider has accepted
    pub fn apply_status(&mut self, status: OrderStatus, at: DateTime<Utc>) {
        self.status = status;
        self.updated_at = Some(at);
    }
}

/// Row of the orders list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItem {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub restaurant_name: String,
    pub status: OrderStatus,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// Body of `PUT /api/orders/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: &str, quantity: u32, unit_price: f64) -> OrderItem {
        OrderItem {
            id: id.into(),
            name: format!("Item {}", id),
            quantity,
            unit_price,
            notes: None,
        }
    }

    fn order(items: Vec<OrderItem>, total: f64) -> Order {
        Order {
            id: "o-1".into(),
            order_number: "ORD-0001".into(),
            customer: OrderCustomer {
                id: "u-1".into(),
                name: "Chi".into(),
                phone: None,
                email: None,
            },
            restaurant: OrderRestaurant {
                id: "r-1".into(),
                name: "Mama Put".into(),
                address: None,
            },
            items,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Paid,
            delivery_address: "12 Allen Ave".into(),
            delivery_fee: 500.0,
            discount: Some(200.0),
            total,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_totals() {
        let o = order(vec![item("1", 2, 1500.0), item("2", 1, 800.0)], 4100.0);
        assert_eq!(o.items_subtotal(), 3800.0);
        assert_eq!(o.computed_total(), 4100.0);
        assert!(!o.has_total_mismatch());
        assert_eq!(o.items_count(), 3);
    }

    #[test]
    fn test_total_mismatch() {
        let o = order(vec![item("1", 1, 1000.0)], 2000.0);
        assert!(o.has_total_mismatch());
    }

    #[test]
    fn test_apply_status() {
        let mut o = order(vec![item("1", 1, 1000.0)], 1300.0);
        o.status = OrderStatus::Preparing;
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();

        o.apply_status(OrderStatus::OutForDelivery, at);

        assert_eq!(o.status, OrderStatus::OutForDelivery);
        assert_eq!(o.updated_at, Some(at));
        assert_eq!(o.status.allowed_next(), &[OrderStatus::Delivered]);
    }

    #[test]
    fn test_status_request_body() {
        let body = UpdateOrderStatusRequest {
            status: OrderStatus::Preparing,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"PREPARING"}"#
        );
    }
}
