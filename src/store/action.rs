//! Action messages folded into [`AppState`](super::AppState).
//!
//! Each entity operation has a REQUEST / SUCCESS / FAILURE triple. Variants
//! carry plain data only; constructing one has no side effects.

use std::fmt;

use crate::auth::Credentials;
use crate::models::{
    Contract, Customer, DashboardData, Entity, EntityId, EntityKind, InternationalProcurement,
    Order, PortInventory, Procurement, Product, Project, User,
};

/// Monotonic number identifying one list or search request.
pub type Ticket = u64;

/// Lifecycle phase of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Request,
    Success,
    Failure,
    /// Local-only actions with no request behind them.
    Local,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Request => "REQUEST",
            Phase::Success => "SUCCESS",
            Phase::Failure => "FAILURE",
            Phase::Local => "LOCAL",
        }
    }
}

/// Operation an entity action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Search,
    Detail,
    Create,
    Update,
    Delete,
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction<E: Entity> {
    ListRequested { ticket: Ticket },
    ListSucceeded { ticket: Ticket, items: Vec<E> },
    ListFailed { ticket: Ticket, message: String },

    SearchRequested { ticket: Ticket, term: String },
    SearchSucceeded { ticket: Ticket, items: Vec<E> },
    SearchFailed { ticket: Ticket, message: String },

    DetailRequested { id: EntityId },
    DetailSucceeded(E),
    DetailFailed(String),

    CreateRequested,
    CreateSucceeded(E),
    CreateFailed(String),

    UpdateRequested { id: EntityId },
    UpdateSucceeded(E),
    UpdateFailed(String),

    DeleteRequested { id: EntityId },
    DeleteSucceeded { id: EntityId },
    DeleteFailed(String),

    /// Empty the selected slot, e.g. on leaving a detail screen.
    SelectionCleared,
}

impl<E: Entity> EntityAction<E> {
    pub fn operation(&self) -> Operation {
        use EntityAction::*;
        match self {
            ListRequested { .. } | ListSucceeded { .. } | ListFailed { .. } => Operation::List,
            SearchRequested { .. } | SearchSucceeded { .. } | SearchFailed { .. } => {
                Operation::Search
            }
            DetailRequested { .. } | DetailSucceeded(_) | DetailFailed(_) => Operation::Detail,
            CreateRequested | CreateSucceeded(_) | CreateFailed(_) => Operation::Create,
            UpdateRequested { .. } | UpdateSucceeded(_) | UpdateFailed(_) => Operation::Update,
            DeleteRequested { .. } | DeleteSucceeded { .. } | DeleteFailed(_) => Operation::Delete,
            SelectionCleared => Operation::ClearSelection,
        }
    }

    pub fn phase(&self) -> Phase {
        use EntityAction::*;
        match self {
            ListRequested { .. }
            | SearchRequested { .. }
            | DetailRequested { .. }
            | CreateRequested
            | UpdateRequested { .. }
            | DeleteRequested { .. } => Phase::Request,
            ListSucceeded { .. }
            | SearchSucceeded { .. }
            | DetailSucceeded(_)
            | CreateSucceeded(_)
            | UpdateSucceeded(_)
            | DeleteSucceeded { .. } => Phase::Success,
            ListFailed { .. }
            | SearchFailed { .. }
            | DetailFailed(_)
            | CreateFailed(_)
            | UpdateFailed(_)
            | DeleteFailed(_) => Phase::Failure,
            SelectionCleared => Phase::Local,
        }
    }

    /// Log tag such as `FETCH_CUSTOMERS_REQUEST`.
    pub fn tag(&self) -> String {
        let kind = E::KIND.tag();
        let stem = match self.operation() {
            Operation::List => format!("FETCH_{}", kind),
            Operation::Search => format!("SEARCH_{}", kind),
            Operation::Detail => format!("FETCH_{}_DETAIL", kind),
            Operation::Create => format!("CREATE_{}", kind),
            Operation::Update => format!("UPDATE_{}", kind),
            Operation::Delete => format!("DELETE_{}", kind),
            Operation::ClearSelection => return format!("CLEAR_{}_SELECTION", kind),
        };
        format!("{}_{}", stem, self.phase().as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    Requested,
    Succeeded(DashboardData),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    LoginRequested,
    LoginSucceeded(Credentials),
    LoginFailed(String),
    /// Credentials found on disk at startup.
    Restored(Credentials),
    LoggedOut,
}

/// Every message the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Customers(EntityAction<Customer>),
    Orders(EntityAction<Order>),
    Contracts(EntityAction<Contract>),
    Inventory(EntityAction<Product>),
    PortInventory(EntityAction<PortInventory>),
    Procurements(EntityAction<Procurement>),
    InternationalProcurements(EntityAction<InternationalProcurement>),
    Projects(EntityAction<Project>),
    Users(EntityAction<User>),
    Dashboard(DashboardAction),
    Session(SessionAction),
}

impl Action {
    /// The entity collection this action is addressed to, if any.
    pub fn kind(&self) -> Option<EntityKind> {
        Some(match self {
            Action::Customers(_) => EntityKind::Customers,
            Action::Orders(_) => EntityKind::Orders,
            Action::Contracts(_) => EntityKind::Contracts,
            Action::Inventory(_) => EntityKind::Inventory,
            Action::PortInventory(_) => EntityKind::PortInventory,
            Action::Procurements(_) => EntityKind::Procurements,
            Action::InternationalProcurements(_) => EntityKind::InternationalProcurements,
            Action::Projects(_) => EntityKind::Projects,
            Action::Users(_) => EntityKind::Users,
            Action::Dashboard(_) | Action::Session(_) => return None,
        })
    }

    pub fn tag(&self) -> String {
        match self {
            Action::Customers(a) => a.tag(),
            Action::Orders(a) => a.tag(),
            Action::Contracts(a) => a.tag(),
            Action::Inventory(a) => a.tag(),
            Action::PortInventory(a) => a.tag(),
            Action::Procurements(a) => a.tag(),
            Action::InternationalProcurements(a) => a.tag(),
            Action::Projects(a) => a.tag(),
            Action::Users(a) => a.tag(),
            Action::Dashboard(DashboardAction::Requested) => "FETCH_DASHBOARD_REQUEST".into(),
            Action::Dashboard(DashboardAction::Succeeded(_)) => "FETCH_DASHBOARD_SUCCESS".into(),
            Action::Dashboard(DashboardAction::Failed(_)) => "FETCH_DASHBOARD_FAILURE".into(),
            Action::Session(SessionAction::LoginRequested) => "LOGIN_REQUEST".into(),
            Action::Session(SessionAction::LoginSucceeded(_)) => "LOGIN_SUCCESS".into(),
            Action::Session(SessionAction::LoginFailed(_)) => "LOGIN_FAILURE".into(),
            Action::Session(SessionAction::Restored(_)) => "SESSION_RESTORED".into(),
            Action::Session(SessionAction::LoggedOut) => "LOGOUT".into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}
