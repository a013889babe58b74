//! Sales orders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format::{format_amount, format_date};
use super::status::status_enum;
use super::{reference_name, Entity, EntityId, EntityKind, Reference};

status_enum! {
    OrderStatus {
        Pending => ("PENDING", "Pending"),
        Processing => ("PROCESSING", "Processing"),
        Shipped => ("SHIPPED", "Shipped"),
        Delivered => ("DELIVERED", "Delivered"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product: Option<Reference>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    #[serde(default, alias = "orderNumber")]
    pub code: String,
    #[serde(default)]
    pub customer: Option<Reference>,
    #[serde(default, alias = "orderDate")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Entity for Order {
    type Draft = Value;
    const KIND: EntityKind = EntityKind::Orders;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Customer", "Date", "Total", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            reference_name(&self.customer).to_string(),
            format_date(&self.created_at),
            format_amount(self.total_amount),
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Code", self.code.clone()),
            ("Customer", reference_name(&self.customer).to_string()),
            ("Date", format_date(&self.created_at)),
            ("Total", format_amount(self.total_amount)),
            ("Status", self.status.label().to_string()),
            ("Items", self.items.len().to_string()),
        ]
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.code.as_str(), reference_name(&self.customer)]
    }

    fn filter_code(&self) -> &str {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_row() {
        let order: Order = serde_json::from_str(
            r#"{"id":5,"code":"DH-005","customer":{"id":1,"name":"Acme"},"createdAt":"2024-01-02T08:00:00Z","status":"SHIPPED","totalAmount":1500}"#,
        )
        .unwrap();
        assert_eq!(
            order.cells(),
            vec!["DH-005", "Acme", "2024-01-02", "1,500.00", "Shipped"]
        );
        assert_eq!(order.filter_code(), "SHIPPED");
        assert_eq!(order.search_text(), vec!["DH-005", "Acme"]);
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let order: Order = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.items.is_empty());
    }
}
