use serde::Serialize;
use sqlx::FromRow;
use chrono::{DateTime, Utc};

/// Quantity strictly below this triggers a low-stock alert unless configured otherwise.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Confirmation returned by a successful removal.
pub const PRODUCT_REMOVED_MESSAGE: &str = "Product removed successfully";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert record handed to a store; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub message: String,
}

impl OperationResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Serialized as `{"alertSent": bool}`, the field name alert consumers key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LowStockCheck {
    #[serde(rename = "alertSent")]
    pub alert_sent: bool,
}

pub fn low_stock_message(sku: &str, quantity: i64) -> String {
    format!("Low stock alert: Product {sku} has only {quantity} units left")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_check_uses_camel_case_field() {
        let json = serde_json::to_value(LowStockCheck { alert_sent: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "alertSent": true }));
    }

    #[test]
    fn alert_message_names_sku_and_quantity() {
        assert_eq!(
            low_stock_message("LAP-001", 3),
            "Low stock alert: Product LAP-001 has only 3 units left"
        );
    }
}
