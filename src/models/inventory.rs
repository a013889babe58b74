//! Warehouse stock and goods held at ports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format::{format_amount, format_date, format_optional};
use super::status::status_enum;
use super::{reference_name, Entity, EntityId, EntityKind, Reference};

status_enum! {
    ProductStatus {
        InStock => ("IN_STOCK", "In stock"),
        LowStock => ("LOW_STOCK", "Low stock"),
        OutOfStock => ("OUT_OF_STOCK", "Out of stock"),
        Discontinued => ("DISCONTINUED", "Discontinued"),
    }
}

status_enum! {
    PortInventoryStatus {
        InTransit => ("IN_TRANSIT", "In transit"),
        Arrived => ("ARRIVED", "Arrived"),
        CustomsClearance => ("CUSTOMS_CLEARANCE", "Customs clearance"),
        Storage => ("STORAGE", "In storage"),
        Released => ("RELEASED", "Released"),
        Delayed => ("DELAYED", "Delayed"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    #[serde(default, alias = "sku")]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, alias = "price")]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub warehouse: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
}

impl Entity for Product {
    type Draft = Value;
    const KIND: EntityKind = EntityKind::Inventory;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Name", "Category", "Qty", "Unit price", "Warehouse", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        let quantity = match (&self.quantity, &self.unit) {
            (Some(q), Some(unit)) => format!("{} {}", q, unit),
            (q, _) => format_optional(*q),
        };
        vec![
            self.code.clone(),
            self.name.clone(),
            self.category.clone().unwrap_or_default(),
            quantity,
            format_amount(self.unit_price),
            self.warehouse.clone().unwrap_or_default(),
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::columns().iter().copied().zip(self.cells()).collect()
    }

    fn search_text(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.name.as_str(),
            self.category.as_deref().unwrap_or(""),
        ]
    }

    fn filter_code(&self) -> &str {
        self.status.code()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortInventory {
    pub id: EntityId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub product: Option<Reference>,
    #[serde(default)]
    pub port: Option<Reference>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub status: PortInventoryStatus,
}

impl Entity for PortInventory {
    type Draft = Value;
    const KIND: EntityKind = EntityKind::PortInventory;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Product", "Port", "Qty", "Arrival", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            reference_name(&self.product).to_string(),
            reference_name(&self.port).to_string(),
            format_optional(self.quantity),
            format_date(&self.arrival_date),
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::columns().iter().copied().zip(self.cells()).collect()
    }

    fn search_text(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            reference_name(&self.product),
            reference_name(&self.port),
        ]
    }

    fn filter_code(&self) -> &str {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_quantity_with_unit() {
        let p: Product = serde_json::from_str(
            r#"{"id":1,"sku":"SP-1","name":"Rice","quantity":40,"unit":"bag","price":12.5,"status":"LOW_STOCK"}"#,
        )
        .unwrap();
        let cells = p.cells();
        assert_eq!(cells[0], "SP-1");
        assert_eq!(cells[3], "40 bag");
        assert_eq!(cells[4], "12.50");
        assert_eq!(cells[6], "Low stock");
    }

    #[test]
    fn test_port_inventory_unknown_status_kept() {
        let p: PortInventory = serde_json::from_str(
            r#"{"id":3,"code":"PI-3","product":{"name":"Steel"},"port":{"name":"Cat Lai"},"status":"QUARANTINE"}"#,
        )
        .unwrap();
        assert_eq!(p.status, PortInventoryStatus::Other("QUARANTINE".to_string()));
        assert_eq!(p.filter_code(), "QUARANTINE");
        assert_eq!(p.search_text(), vec!["PI-3", "Steel", "Cat Lai"]);
    }
}
