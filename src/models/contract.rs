//! Customer contracts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format::{format_amount, format_date};
use super::status::status_enum;
use super::{reference_name, Entity, EntityId, EntityKind, Reference};

status_enum! {
    ContractStatus {
        Draft => ("DRAFT", "Draft"),
        Active => ("ACTIVE", "Active"),
        Expired => ("EXPIRED", "Expired"),
        Terminated => ("TERMINATED", "Terminated"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: EntityId,
    #[serde(default, alias = "contractNumber")]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub customer: Option<Reference>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub status: ContractStatus,
}

impl Entity for Contract {
    type Draft = Value;
    const KIND: EntityKind = EntityKind::Contracts;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Title", "Customer", "Start", "End", "Value", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.title.clone(),
            reference_name(&self.customer).to_string(),
            format_date(&self.start_date),
            format_date(&self.end_date),
            format_amount(self.value),
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::columns().iter().copied().zip(self.cells()).collect()
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.title.as_str(), reference_name(&self.customer)]
    }

    fn filter_code(&self) -> &str {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_fields_match_columns() {
        let c: Contract = serde_json::from_str(
            r#"{"id":2,"contractNumber":"HD-2","title":"Supply","status":"ACTIVE","value":99.5}"#,
        )
        .unwrap();
        let fields = c.fields();
        assert_eq!(fields.len(), Contract::columns().len());
        assert_eq!(fields[0], ("Code", "HD-2".to_string()));
        assert_eq!(fields[5], ("Value", "99.50".to_string()));
        assert_eq!(c.status, ContractStatus::Active);
    }
}
