//! Application state: one slice per entity kind plus dashboard and session.

use super::action::{Action, DashboardAction, EntityAction, SessionAction};
use super::slice::{RequestStatus, Slice};
use crate::auth::Credentials;
use crate::models::{
    Contract, Customer, DashboardData, Entity, InternationalProcurement, Order, PortInventory,
    Procurement, Product, Project, User,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSlice {
    pub data: Option<DashboardData>,
    pub status: RequestStatus,
}

impl DashboardSlice {
    pub fn reduce(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Requested => self.status = RequestStatus::Loading,
            DashboardAction::Succeeded(data) => {
                self.data = Some(data);
                self.status = RequestStatus::Loaded;
            }
            DashboardAction::Failed(message) => self.status = RequestStatus::Failed(message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSlice {
    pub credentials: Option<Credentials>,
    pub status: RequestStatus,
}

impl SessionSlice {
    pub fn is_authenticated(&self) -> bool {
        self.credentials.as_ref().is_some_and(Credentials::has_token)
    }

    pub fn reduce(&mut self, action: SessionAction) {
        match action {
            SessionAction::LoginRequested => self.status = RequestStatus::Loading,
            SessionAction::LoginSucceeded(credentials) | SessionAction::Restored(credentials) => {
                self.credentials = Some(credentials);
                self.status = RequestStatus::Loaded;
            }
            SessionAction::LoginFailed(message) => {
                self.credentials = None;
                self.status = RequestStatus::Failed(message);
            }
            SessionAction::LoggedOut => *self = SessionSlice::default(),
        }
    }
}

/// The single source of truth rendered by the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub customers: Slice<Customer>,
    pub orders: Slice<Order>,
    pub contracts: Slice<Contract>,
    pub inventory: Slice<Product>,
    pub port_inventory: Slice<PortInventory>,
    pub procurements: Slice<Procurement>,
    pub international_procurements: Slice<InternationalProcurement>,
    pub projects: Slice<Project>,
    pub users: Slice<User>,
    pub dashboard: DashboardSlice,
    pub session: SessionSlice,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an action to the slice it is addressed to.
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Customers(a) => self.customers.reduce(a),
            Action::Orders(a) => self.orders.reduce(a),
            Action::Contracts(a) => self.contracts.reduce(a),
            Action::Inventory(a) => self.inventory.reduce(a),
            Action::PortInventory(a) => self.port_inventory.reduce(a),
            Action::Procurements(a) => self.procurements.reduce(a),
            Action::InternationalProcurements(a) => self.international_procurements.reduce(a),
            Action::Projects(a) => self.projects.reduce(a),
            Action::Users(a) => self.users.reduce(a),
            Action::Dashboard(a) => self.dashboard.reduce(a),
            Action::Session(SessionAction::LoggedOut) => self.end_session(),
            Action::Session(a) => self.session.reduce(a),
        }
    }

    /// Nothing fetched under the old token survives a logout, including
    /// list responses still in flight.
    fn end_session(&mut self) {
        self.customers.reset();
        self.orders.reset();
        self.contracts.reset();
        self.inventory.reset();
        self.port_inventory.reset();
        self.procurements.reset();
        self.international_procurements.reset();
        self.projects.reset();
        self.users.reset();
        self.dashboard = DashboardSlice::default();
        self.session = SessionSlice::default();
    }
}

/// Binds an entity type to its [`Action`] variant and [`AppState`] slice.
pub trait Stored: Entity {
    fn wrap(action: EntityAction<Self>) -> Action;
    fn slice(state: &AppState) -> &Slice<Self>;
}

macro_rules! stored {
    ($($ty:ty => $variant:ident, $field:ident;)+) => {
        $(
            impl Stored for $ty {
                fn wrap(action: EntityAction<Self>) -> Action {
                    Action::$variant(action)
                }

                fn slice(state: &AppState) -> &Slice<Self> {
                    &state.$field
                }
            }
        )+
    };
}

stored! {
    Customer => Customers, customers;
    Order => Orders, orders;
    Contract => Contracts, contracts;
    Product => Inventory, inventory;
    PortInventory => PortInventory, port_inventory;
    Procurement => Procurements, procurements;
    InternationalProcurement => InternationalProcurements, international_procurements;
    Project => Projects, projects;
    User => Users, users;
}

/// Run `$body` with `$ty` bound to the record type of a runtime
/// [`EntityKind`](crate::models::EntityKind).
macro_rules! with_kind {
    ($kind:expr, $ty:ident => $body:expr) => {
        match $kind {
            $crate::models::EntityKind::Customers => {
                type $ty = $crate::models::Customer;
                $body
            }
            $crate::models::EntityKind::Orders => {
                type $ty = $crate::models::Order;
                $body
            }
            $crate::models::EntityKind::Contracts => {
                type $ty = $crate::models::Contract;
                $body
            }
            $crate::models::EntityKind::Inventory => {
                type $ty = $crate::models::Product;
                $body
            }
            $crate::models::EntityKind::PortInventory => {
                type $ty = $crate::models::PortInventory;
                $body
            }
            $crate::models::EntityKind::Procurements => {
                type $ty = $crate::models::Procurement;
                $body
            }
            $crate::models::EntityKind::InternationalProcurements => {
                type $ty = $crate::models::InternationalProcurement;
                $body
            }
            $crate::models::EntityKind::Projects => {
                type $ty = $crate::models::Project;
                $body
            }
            $crate::models::EntityKind::Users => {
                type $ty = $crate::models::User;
                $body
            }
        }
    };
}
pub(crate) use with_kind;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;

    fn order(id: i64) -> Order {
        serde_json::from_value(serde_json::json!({"id": id, "code": format!("DH-{}", id)}))
            .unwrap()
    }

    #[test]
    fn test_action_for_other_slice_leaves_slice_unchanged() {
        let mut state = AppState::new();
        state.reduce(Order::wrap(EntityAction::ListRequested { ticket: 1 }));
        state.reduce(Order::wrap(EntityAction::ListSucceeded {
            ticket: 1,
            items: vec![order(1)],
        }));
        let before = state.orders.clone();

        state.reduce(Action::Customers(EntityAction::ListRequested { ticket: 2 }));
        state.reduce(Action::Contracts(EntityAction::CreateFailed("x".into())));
        assert_eq!(state.orders, before);
        assert!(state.customers.status.is_loading());
    }

    #[test]
    fn test_slice_lookup_matches_kind() {
        let state = AppState::new();
        assert_eq!(<Product as Stored>::slice(&state).items.len(), 0);
        assert_eq!(
            PortInventory::wrap(EntityAction::CreateRequested).kind(),
            Some(EntityKind::PortInventory)
        );
    }

    #[test]
    fn test_with_kind_binds_record_type() {
        let state = AppState::new();
        for kind in EntityKind::ALL {
            let (bound, empty) = with_kind!(kind, E => (E::KIND, E::slice(&state).items.is_empty()));
            assert_eq!(bound, kind);
            assert!(empty);
        }
    }

    #[test]
    fn test_dashboard_reduce() {
        let mut state = AppState::new();
        state.reduce(Action::Dashboard(DashboardAction::Requested));
        assert!(state.dashboard.status.is_loading());
        state.reduce(Action::Dashboard(DashboardAction::Failed("down".into())));
        assert_eq!(state.dashboard.status.error(), Some("down"));
        assert!(state.dashboard.data.is_none());
    }

    #[test]
    fn test_session_login_and_logout() {
        let mut state = AppState::new();
        state.reduce(Action::Session(SessionAction::LoginRequested));
        state.reduce(Action::Session(SessionAction::LoginSucceeded(
            Credentials::signed_in("jwt", None),
        )));
        assert!(state.session.is_authenticated());

        state.reduce(Order::wrap(EntityAction::CreateSucceeded(order(3))));
        state.reduce(Action::Session(SessionAction::LoggedOut));
        assert!(!state.session.is_authenticated());
        assert!(state.orders.items.is_empty());
    }

    #[test]
    fn test_list_in_flight_at_logout_is_dropped() {
        let mut state = AppState::new();
        state.reduce(Customer::wrap(EntityAction::ListRequested { ticket: 5 }));
        state.reduce(Action::Session(SessionAction::LoggedOut));

        let old: Customer =
            serde_json::from_value(serde_json::json!({"id": 1, "name": "Old"})).unwrap();
        state.reduce(Customer::wrap(EntityAction::ListSucceeded {
            ticket: 5,
            items: vec![old],
        }));
        assert!(state.customers.items.is_empty());
        assert_eq!(state.customers.status, RequestStatus::Idle);

        // A fetch started in the new session still lands.
        state.reduce(Customer::wrap(EntityAction::ListRequested { ticket: 6 }));
        state.reduce(Customer::wrap(EntityAction::ListSucceeded {
            ticket: 6,
            items: Vec::new(),
        }));
        assert_eq!(state.customers.status, RequestStatus::Loaded);
    }

    #[test]
    fn test_login_failure_clears_credentials() {
        let mut state = AppState::new();
        state.reduce(Action::Session(SessionAction::LoginFailed("bad".into())));
        assert!(!state.session.is_authenticated());
        assert_eq!(state.session.status.error(), Some("bad"));
    }
}
