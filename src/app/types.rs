//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Tab`] - Entries of the navigation bar
//! - [`Prompt`] - Modal confirmation awaiting y/n
//! - [`Notice`] - One-line status message in the footer

use crate::models::{EntityId, EntityKind};

/// Represents which screen is currently active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    ForgotPassword,
    Dashboard,
    List(EntityKind),
    Detail(EntityKind, EntityId),
    CustomerForm,
    UserForm,
}

impl Screen {
    /// Screens reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Login | Screen::ForgotPassword)
    }

    /// The navigation tab this screen belongs to, if any.
    pub fn tab(&self) -> Option<Tab> {
        match self {
            Screen::Login | Screen::ForgotPassword => None,
            Screen::Dashboard => Some(Tab::Dashboard),
            Screen::List(kind) | Screen::Detail(kind, _) => Some(Tab::Entity(*kind)),
            Screen::CustomerForm => Some(Tab::Entity(EntityKind::Customers)),
            Screen::UserForm => Some(Tab::Entity(EntityKind::Users)),
        }
    }
}

/// Navigation bar entry: the dashboard followed by every entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Entity(EntityKind),
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        std::iter::once(Tab::Dashboard)
            .chain(EntityKind::ALL.into_iter().map(Tab::Entity))
            .collect()
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Entity(kind) => kind.title(),
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Home",
            Tab::Entity(EntityKind::Customers) => "Cust",
            Tab::Entity(EntityKind::Orders) => "Ord",
            Tab::Entity(EntityKind::Contracts) => "Ctr",
            Tab::Entity(EntityKind::Inventory) => "Inv",
            Tab::Entity(EntityKind::PortInventory) => "Port",
            Tab::Entity(EntityKind::Procurements) => "Proc",
            Tab::Entity(EntityKind::InternationalProcurements) => "Intl",
            Tab::Entity(EntityKind::Projects) => "Proj",
            Tab::Entity(EntityKind::Users) => "Users",
        }
    }

    /// Step through the tabs, wrapping at both ends.
    pub fn step(&self, forward: bool) -> Tab {
        let tabs = Tab::all();
        let len = tabs.len();
        let next = if forward {
            (self.index() + 1) % len
        } else {
            (self.index() + len - 1) % len
        };
        tabs[next]
    }

    pub fn screen(&self) -> Screen {
        match self {
            Tab::Dashboard => Screen::Dashboard,
            Tab::Entity(kind) => Screen::List(*kind),
        }
    }
}

/// Confirmation the user must answer before a destructive request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Delete {
        kind: EntityKind,
        id: EntityId,
        label: String,
    },
    Logout,
}

impl Prompt {
    pub fn question(&self) -> String {
        match self {
            Prompt::Delete { kind, label, .. } => {
                format!("Delete \"{}\" from {}?", label, kind.title())
            }
            Prompt::Logout => "Sign out?".to_string(),
        }
    }
}

/// Footer message; errors render in red.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_start_with_dashboard_and_wrap() {
        let tabs = Tab::all();
        assert_eq!(tabs.len(), 10);
        assert_eq!(tabs[0], Tab::Dashboard);
        assert_eq!(Tab::Dashboard.step(false), Tab::Entity(EntityKind::Users));
        assert_eq!(Tab::Entity(EntityKind::Users).step(true), Tab::Dashboard);
        assert_eq!(
            Tab::Dashboard.step(true),
            Tab::Entity(EntityKind::Customers)
        );
    }

    #[test]
    fn test_screen_tab() {
        assert_eq!(Screen::Login.tab(), None);
        assert_eq!(
            Screen::Detail(EntityKind::Orders, EntityId::from(3)).tab(),
            Some(Tab::Entity(EntityKind::Orders))
        );
        assert_eq!(
            Screen::UserForm.tab(),
            Some(Tab::Entity(EntityKind::Users))
        );
        assert!(Screen::ForgotPassword.is_public());
        assert!(!Screen::Dashboard.is_public());
    }

    #[test]
    fn test_delete_prompt_question() {
        let prompt = Prompt::Delete {
            kind: EntityKind::Customers,
            id: EntityId::from(1),
            label: "An".to_string(),
        };
        assert_eq!(prompt.question(), "Delete \"An\" from Customers?");
    }
}
