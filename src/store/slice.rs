//! Per-entity state slices and their reducer.

use super::action::{EntityAction, Ticket};
use crate::models::{Entity, EntityId};

/// Progress of the most recent request against a slice.
///
/// Loading and failed are mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    /// The failure message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// State owned by one entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<E: Entity> {
    /// Collection in server order.
    pub items: Vec<E>,
    pub selected: Option<E>,
    pub status: RequestStatus,
    /// Ticket of the newest list or search request; older responses are dropped.
    pub latest_fetch: Ticket,
}

impl<E: Entity> Default for Slice<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            status: RequestStatus::Idle,
            latest_fetch: 0,
        }
    }
}

impl<E: Entity> Slice<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the slice for a new session. Tickets issued so far stay stale.
    pub fn reset(&mut self) {
        *self = Self {
            latest_fetch: self.latest_fetch + 1,
            ..Self::default()
        };
    }

    pub fn find(&self, id: &EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Fold one action into the slice.
    pub fn reduce(&mut self, action: EntityAction<E>) {
        use EntityAction::*;
        match action {
            ListRequested { ticket } | SearchRequested { ticket, .. } => {
                self.latest_fetch = self.latest_fetch.max(ticket);
                self.status = RequestStatus::Loading;
            }
            ListSucceeded { ticket, items } | SearchSucceeded { ticket, items } => {
                if self.is_stale(ticket) {
                    return;
                }
                self.items = items;
                self.status = RequestStatus::Loaded;
            }
            ListFailed { ticket, message } | SearchFailed { ticket, message } => {
                if self.is_stale(ticket) {
                    return;
                }
                self.status = RequestStatus::Failed(message);
            }

            DetailRequested { .. }
            | CreateRequested
            | UpdateRequested { .. }
            | DeleteRequested { .. } => {
                self.status = RequestStatus::Loading;
            }

            DetailSucceeded(entity) => {
                self.selected = Some(entity);
                self.status = RequestStatus::Loaded;
            }
            CreateSucceeded(entity) => {
                self.items.push(entity);
                self.status = RequestStatus::Loaded;
            }
            UpdateSucceeded(entity) => {
                for item in self.items.iter_mut().filter(|i| i.id() == entity.id()) {
                    *item = entity.clone();
                }
                self.selected = Some(entity);
                self.status = RequestStatus::Loaded;
            }
            DeleteSucceeded { id } => {
                self.items.retain(|item| item.id() != &id);
                if self.selected.as_ref().is_some_and(|s| s.id() == &id) {
                    self.selected = None;
                }
                self.status = RequestStatus::Loaded;
            }

            DetailFailed(message)
            | CreateFailed(message)
            | UpdateFailed(message)
            | DeleteFailed(message) => {
                self.status = RequestStatus::Failed(message);
            }

            SelectionCleared => {
                self.selected = None;
            }
        }
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        if ticket < self.latest_fetch {
            tracing::trace!(
                kind = E::KIND.resource(),
                ticket,
                latest = self.latest_fetch,
                "dropping stale fetch result"
            );
            return true;
        }
        false
    }
}
