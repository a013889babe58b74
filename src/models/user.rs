//! Staff accounts.

use serde::{Deserialize, Serialize};

use super::status::status_enum;
use super::{Entity, EntityId, EntityKind};

status_enum! {
    UserRole {
        Admin => ("ADMIN", "Administrator"),
        Manager => ("MANAGER", "Manager"),
        Staff => ("STAFF", "Staff"),
        Viewer => ("VIEWER", "Viewer"),
    }
}

status_enum! {
    UserStatus {
        Active => ("ACTIVE", "Active"),
        Inactive => ("INACTIVE", "Inactive"),
        Locked => ("LOCKED", "Locked"),
    }
}

impl UserStatus {
    /// Status a lock/unlock toggle moves to.
    pub fn toggled(&self) -> UserStatus {
        match self {
            UserStatus::Locked => UserStatus::Active,
            _ => UserStatus::Locked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
}

/// Fields a user can edit on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            department: user.department.clone().unwrap_or_default(),
        }
    }
}

impl Entity for User {
    type Draft = UserDraft;
    const KIND: EntityKind = EntityKind::Users;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Role", "Department", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.label().to_string(),
            self.department.clone().unwrap_or_default(),
            self.status.label().to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::columns().iter().copied().zip(self.cells()).collect()
    }

    fn search_text(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.department.as_deref().unwrap_or(""),
        ]
    }

    fn filter_code(&self) -> &str {
        self.role.code()
    }
}
