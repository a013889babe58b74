//! Customer projects and their teams.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format::format_date;
use super::status::status_enum;
use super::{reference_name, Entity, EntityId, EntityKind, Reference};

status_enum! {
    ProjectStatus {
        Planning => ("PLANNING", "Planning"),
        InProgress => ("IN_PROGRESS", "In progress"),
        OnHold => ("ON_HOLD", "On hold"),
        Completed => ("COMPLETED", "Completed"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customer: Option<Reference>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Percent complete, 0 to 100.
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, alias = "teamMembers")]
    pub members: Vec<ProjectMember>,
}

impl Entity for Project {
    type Draft = Value;
    const KIND: EntityKind = EntityKind::Projects;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Name", "Customer", "Start", "End", "Progress", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            reference_name(&self.customer).to_string(),
            format_date(&self.start_date),
            format_date(&self.end_date),
            self.progress.map(|p| format!("{}%", p)).unwrap_or_default(),
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<_> = Self::columns().iter().copied().zip(self.cells()).collect();
        for member in &self.members {
            let mut line = member.name.clone();
            if let Some(role) = &member.role {
                line.push_str(&format!(" ({})", role));
            }
            if let Some(department) = &member.department {
                line.push_str(&format!(", {}", department));
            }
            fields.push(("Member", line));
        }
        fields
    }

    fn search_text(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.name.as_str(),
            reference_name(&self.customer),
        ]
    }

    fn filter_code(&self) -> &str {
        self.status.code()
    }
}
