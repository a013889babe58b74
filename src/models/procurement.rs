//! Domestic and international purchasing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format::{format_amount, format_date};
use super::status::status_enum;
use super::{reference_name, Entity, EntityId, EntityKind, Reference};

status_enum! {
    ProcurementStatus {
        Draft => ("DRAFT", "Draft"),
        Pending => ("PENDING", "Pending"),
        Approved => ("APPROVED", "Approved"),
        Processing => ("PROCESSING", "Processing"),
        Completed => ("COMPLETED", "Completed"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
}

status_enum! {
    InternationalProcurementStatus {
        QuoteRequest => ("QUOTE_REQUEST", "Quote request"),
        Negotiation => ("NEGOTIATION", "Negotiation"),
        PendingApproval => ("PENDING_APPROVAL", "Pending approval"),
        Approved => ("APPROVED", "Approved"),
        Processing => ("PROCESSING", "Processing"),
        Shipping => ("SHIPPING", "Shipping"),
        CustomsClearance => ("CUSTOMS_CLEARANCE", "Customs clearance"),
        Completed => ("COMPLETED", "Completed"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procurement {
    pub id: EntityId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub supplier: Option<Reference>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: ProcurementStatus,
}

impl Entity for Procurement {
    type Draft = Value;
    const KIND: EntityKind = EntityKind::Procurements;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Supplier", "Date", "Total", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            reference_name(&self.supplier).to_string(),
            format_date(&self.created_at),
            format_amount(self.total_amount),
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::columns().iter().copied().zip(self.cells()).collect()
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.code.as_str(), reference_name(&self.supplier)]
    }

    fn filter_code(&self) -> &str {
        self.status.code()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalProcurement {
    pub id: EntityId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub supplier: Option<Reference>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: InternationalProcurementStatus,
}

impl Entity for InternationalProcurement {
    type Draft = Value;
    const KIND: EntityKind = EntityKind::InternationalProcurements;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Supplier", "Country", "Total", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        let total = match (&self.total_amount, &self.currency) {
            (Some(_), Some(currency)) => {
                format!("{} {}", format_amount(self.total_amount), currency)
            }
            _ => format_amount(self.total_amount),
        };
        vec![
            self.code.clone(),
            reference_name(&self.supplier).to_string(),
            self.country.clone().unwrap_or_default(),
            total,
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::columns().iter().copied().zip(self.cells()).collect()
    }

    fn search_text(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            reference_name(&self.supplier),
            self.country.as_deref().unwrap_or(""),
        ]
    }

    fn filter_code(&self) -> &str {
        self.status.code()
    }
}
