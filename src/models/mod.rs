//! Data models for CRM records.
//!
//! Every record type implements [`Entity`], which is what the services,
//! state slices and table views are generic over.

pub mod contract;
pub mod customer;
pub mod dashboard;
pub mod format;
pub mod inventory;
pub mod order;
pub mod procurement;
pub mod project;
pub mod status;
pub mod user;

pub use contract::{Contract, ContractStatus};
pub use customer::{Customer, CustomerDraft, CustomerType};
pub use dashboard::{Activity, DashboardData, TopProduct};
pub use inventory::{PortInventory, PortInventoryStatus, Product, ProductStatus};
pub use order::{Order, OrderItem, OrderStatus};
pub use procurement::{
    InternationalProcurement, InternationalProcurementStatus, Procurement, ProcurementStatus,
};
pub use project::{Project, ProjectMember, ProjectStatus};
pub use user::{User, UserDraft, UserRole, UserStatus};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier.
///
/// The backend is not consistent about numeric vs string ids, so both are
/// accepted and written back in the form they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

/// A nested `{id, name}` pointer to another record (customer, supplier...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, alias = "fullName")]
    pub name: String,
}

/// Display name of an optional reference, empty when absent.
pub fn reference_name(reference: &Option<Reference>) -> &str {
    reference.as_ref().map(|r| r.name.as_str()).unwrap_or("")
}

/// The record collections this client manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customers,
    Orders,
    Contracts,
    Inventory,
    PortInventory,
    Procurements,
    InternationalProcurements,
    Projects,
    Users,
}

impl EntityKind {
    /// Every kind, in navigation order.
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Customers,
        EntityKind::Orders,
        EntityKind::Contracts,
        EntityKind::Inventory,
        EntityKind::PortInventory,
        EntityKind::Procurements,
        EntityKind::InternationalProcurements,
        EntityKind::Projects,
        EntityKind::Users,
    ];

    /// REST collection path segment.
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Customers => "customers",
            EntityKind::Orders => "orders",
            EntityKind::Contracts => "contracts",
            EntityKind::Inventory => "inventory",
            EntityKind::PortInventory => "port-inventories",
            EntityKind::Procurements => "procurements",
            EntityKind::InternationalProcurements => "international-procurements",
            EntityKind::Projects => "projects",
            EntityKind::Users => "users",
        }
    }

    /// Plural title used in tabs and headers.
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Customers => "Customers",
            EntityKind::Orders => "Orders",
            EntityKind::Contracts => "Contracts",
            EntityKind::Inventory => "Inventory",
            EntityKind::PortInventory => "Port Inventory",
            EntityKind::Procurements => "Procurements",
            EntityKind::InternationalProcurements => "Intl. Procurements",
            EntityKind::Projects => "Projects",
            EntityKind::Users => "Users",
        }
    }

    /// Action tag stem, e.g. `CUSTOMERS` in `FETCH_CUSTOMERS_REQUEST`.
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Customers => "CUSTOMERS",
            EntityKind::Orders => "ORDERS",
            EntityKind::Contracts => "CONTRACTS",
            EntityKind::Inventory => "INVENTORY",
            EntityKind::PortInventory => "PORT_INVENTORY",
            EntityKind::Procurements => "PROCUREMENTS",
            EntityKind::InternationalProcurements => "INTERNATIONAL_PROCUREMENTS",
            EntityKind::Projects => "PROJECTS",
            EntityKind::Users => "USERS",
        }
    }

    /// Name of the field the list filter cycles through.
    pub fn filter_label(&self) -> &'static str {
        match self {
            EntityKind::Customers => "Type",
            EntityKind::Users => "Role",
            _ => "Status",
        }
    }

    /// `(code, label)` pairs the list filter cycles through.
    pub fn filter_options(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            EntityKind::Customers => CustomerType::options(),
            EntityKind::Orders => OrderStatus::options(),
            EntityKind::Contracts => ContractStatus::options(),
            EntityKind::Inventory => ProductStatus::options(),
            EntityKind::PortInventory => PortInventoryStatus::options(),
            EntityKind::Procurements => ProcurementStatus::options(),
            EntityKind::InternationalProcurements => InternationalProcurementStatus::options(),
            EntityKind::Projects => ProjectStatus::options(),
            EntityKind::Users => UserRole::options(),
        }
    }

    /// Whether records of this kind are created and edited through a form.
    pub fn has_form(&self) -> bool {
        matches!(self, EntityKind::Customers | EntityKind::Users)
    }

    /// File name an export of this kind is saved under.
    pub fn export_file_name(&self) -> String {
        format!("{}.xlsx", self.resource().replace('-', "_"))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A record type served from a REST collection.
pub trait Entity:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload sent on create and update.
    type Draft: Clone + fmt::Debug + PartialEq + Serialize + Send + Sync + 'static;

    /// Which collection this record belongs to.
    const KIND: EntityKind;

    /// Server-assigned identifier.
    fn id(&self) -> &EntityId;

    /// Table column headers.
    fn columns() -> &'static [&'static str];

    /// Table cells, one per column.
    fn cells(&self) -> Vec<String>;

    /// Labelled fields for the detail pane.
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Text the list search term is matched against.
    fn search_text(&self) -> Vec<&str>;

    /// Code compared against the active list filter.
    fn filter_code(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_accepts_numbers_and_strings() {
        let n: EntityId = serde_json::from_str("7").unwrap();
        let s: EntityId = serde_json::from_str(r#""64a1f""#).unwrap();
        assert_eq!(n, EntityId::Number(7));
        assert_eq!(s, EntityId::Text("64a1f".to_string()));
        assert_eq!(n.to_string(), "7");
        assert_eq!(serde_json::to_string(&s).unwrap(), r#""64a1f""#);
    }

    #[test]
    fn test_reference_accepts_full_name() {
        let r: Reference = serde_json::from_str(r#"{"id":3,"fullName":"Acme"}"#).unwrap();
        assert_eq!(r.name, "Acme");
        assert_eq!(r.id, Some(EntityId::Number(3)));
        assert_eq!(reference_name(&Some(r)), "Acme");
        assert_eq!(reference_name(&None), "");
    }

    #[test]
    fn test_kind_resources() {
        assert_eq!(EntityKind::PortInventory.resource(), "port-inventories");
        assert_eq!(
            EntityKind::InternationalProcurements.resource(),
            "international-procurements"
        );
        assert_eq!(
            EntityKind::InternationalProcurements.export_file_name(),
            "international_procurements.xlsx"
        );
    }

    #[test]
    fn test_filter_options_follow_kind() {
        assert_eq!(EntityKind::Users.filter_label(), "Role");
        assert!(EntityKind::Users
            .filter_options()
            .iter()
            .any(|(code, _)| *code == "ADMIN"));
        assert!(EntityKind::Orders
            .filter_options()
            .iter()
            .any(|(code, _)| *code == "SHIPPED"));
    }
}
