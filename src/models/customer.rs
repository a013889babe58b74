//! Customer records and the customer form payload.

use serde::{Deserialize, Serialize};

use super::status::status_enum;
use super::{Entity, EntityId, EntityKind};

status_enum! {
    /// Customer segment.
    CustomerType {
        Individual => ("INDIVIDUAL", "Individual"),
        Corporate => ("CORPORATE", "Corporate"),
        Vip => ("VIP", "VIP"),
        Potential => ("POTENTIAL", "Potential"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub customer_type: Option<CustomerType>,
    #[serde(default)]
    pub tax_code: Option<String>,
}

/// Fields a user can edit on a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
    pub customer_type: CustomerType,
    pub tax_code: String,
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone().unwrap_or_default(),
            notes: customer.notes.clone().unwrap_or_default(),
            customer_type: customer.customer_type.clone().unwrap_or_default(),
            tax_code: customer.tax_code.clone().unwrap_or_default(),
        }
    }
}

impl Entity for Customer {
    type Draft = CustomerDraft;
    const KIND: EntityKind = EntityKind::Customers;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Phone", "Type"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.customer_type
                .as_ref()
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Address", self.address.clone().unwrap_or_default()),
            (
                "Type",
                self.customer_type
                    .as_ref()
                    .map(|t| t.label().to_string())
                    .unwrap_or_default(),
            ),
            ("Tax code", self.tax_code.clone().unwrap_or_default()),
            ("Notes", self.notes.clone().unwrap_or_default()),
        ]
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn filter_code(&self) -> &str {
        self.customer_type.as_ref().map(|t| t.code()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_customer() {
        let c: Customer = serde_json::from_str(r#"{"id":1,"name":"A"}"#).unwrap();
        assert_eq!(c.id, EntityId::Number(1));
        assert_eq!(c.name, "A");
        assert!(c.email.is_empty());
        assert_eq!(c.filter_code(), "");
    }

    #[test]
    fn test_deserialize_full_name_alias_and_type() {
        let c: Customer = serde_json::from_str(
            r#"{"id":"c-9","fullName":"Tran Van B","email":"b@x.vn","phone":"0901","customerType":"VIP","taxCode":"0312"}"#,
        )
        .unwrap();
        assert_eq!(c.name, "Tran Van B");
        assert_eq!(c.customer_type, Some(CustomerType::Vip));
        assert_eq!(c.cells()[4], "VIP");
        assert_eq!(c.filter_code(), "VIP");
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = CustomerDraft {
            name: "A".into(),
            email: "a@b.co".into(),
            phone: "1".into(),
            customer_type: CustomerType::Corporate,
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["customerType"], "CORPORATE");
        assert_eq!(json["taxCode"], "");
    }
}
