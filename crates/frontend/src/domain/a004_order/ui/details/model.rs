//! API layer for order details

use crate::shared::api_utils::{get_json, put_json};
use contracts::domain::a004_order::{Order, UpdateOrderStatusRequest};
use contracts::enums::OrderStatus;

fn order_path(id: &str) -> String {
    format!("/api/orders/{}", urlencoding::encode(id))
}

pub async fn fetch_by_id(id: &str) -> Result<Order, String> {
    get_json(&order_path(id)).await
}

pub async fn update_status(id: &str, status: OrderStatus) -> Result<(), String> {
    let body = UpdateOrderStatusRequest { status };
    put_json(&format!("{}/status", order_path(id)), &body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_path_is_encoded() {
        assert_eq!(order_path("o-1"), "/api/orders/o-1");
        assert_eq!(order_path("a/b c"), "/api/orders/a%2Fb%20c");
    }
}
