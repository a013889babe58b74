//! Centralized application state.
//!
//! Request tasks send [`Action`]s through a [`Dispatcher`]; the UI task
//! owns the [`Store`] and applies them one at a time, so reducers never
//! interleave. A `watch` revision bumps per applied action and the event
//! loop redraws when it moves.
//!
//! Dispatchers belong to a session. Ending the session makes every
//! dispatcher handed out before it inert, so a request still in flight at
//! logout cannot write into the next session's state.

pub mod action;
pub mod coordinator;
pub mod slice;
pub mod state;

pub use action::{Action, DashboardAction, EntityAction, Operation, Phase, SessionAction, Ticket};
pub use slice::{RequestStatus, Slice};
pub use state::{AppState, DashboardSlice, SessionSlice, Stored};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, watch};

/// Cloneable handle for sending actions to the store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
    tickets: Arc<AtomicU64>,
    /// Current session number, shared by every clone.
    session: Arc<Mutex<u64>>,
    /// Session this handle was issued for.
    epoch: u64,
}

impl Dispatcher {
    /// A dispatcher paired with the receiving end, for tests and the store.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            tx,
            tickets: Arc::new(AtomicU64::new(0)),
            session: Arc::new(Mutex::new(0)),
            epoch: 0,
        };
        (dispatcher, rx)
    }

    fn current_session(&self) -> MutexGuard<'_, u64> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A handle for the session that is current now.
    pub fn for_current_session(&self) -> Self {
        let epoch = *self.current_session();
        Self {
            epoch,
            ..self.clone()
        }
    }

    /// Send an action. Returns false if the store is gone or this handle
    /// belongs to a session that has ended.
    pub fn dispatch(&self, action: Action) -> bool {
        let session = self.current_session();
        if *session != self.epoch {
            tracing::debug!(action = %action, "dropping action from an ended session");
            return false;
        }
        tracing::trace!(action = %action, "dispatch");
        self.tx.send(action).is_ok()
    }

    /// Queue `LoggedOut` and retire every handle issued so far, this one
    /// included. Actions they send afterwards are dropped.
    pub fn end_session(&self) -> bool {
        let mut session = self.current_session();
        *session += 1;
        tracing::trace!(session = *session, "session ended");
        self.tx.send(Action::Session(SessionAction::LoggedOut)).is_ok()
    }

    /// Next list/search ticket. Strictly increasing across clones.
    pub fn next_ticket(&self) -> Ticket {
        self.tickets.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Owner of [`AppState`].
#[derive(Debug)]
pub struct Store {
    state: AppState,
    rx: mpsc::UnboundedReceiver<Action>,
    dispatcher: Dispatcher,
    revision: watch::Sender<u64>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (dispatcher, rx) = Dispatcher::channel();
        let (revision, _) = watch::channel(0);
        Self {
            state,
            rx,
            dispatcher,
            revision,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A dispatcher for the current session.
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.for_current_session()
    }

    /// Receiver that changes whenever the state does.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Apply an action immediately, bypassing the channel.
    pub fn apply(&mut self, action: Action) {
        tracing::trace!(action = %action, "reduce");
        self.state.reduce(action);
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Apply every queued action. Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.apply(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next action and apply it.
    ///
    /// Never resolves to `None` while the store holds its own dispatcher.
    pub async fn next(&mut self) -> Option<()> {
        let action = self.rx.recv().await?;
        self.apply(action);
        Some(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, EntityId};

    fn customer(id: i64) -> Customer {
        serde_json::from_value(serde_json::json!({"id": id, "name": "Old"})).unwrap()
    }

    #[test]
    fn test_tickets_increase_across_clones() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let other = dispatcher.clone();
        let a = dispatcher.next_ticket();
        let b = other.next_ticket();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_drain_applies_in_order_and_bumps_revision() {
        let mut store = Store::new();
        let mut watcher = store.subscribe();
        let dispatcher = store.dispatcher();

        dispatcher.dispatch(Action::Dashboard(DashboardAction::Requested));
        dispatcher.dispatch(Action::Dashboard(DashboardAction::Failed("down".into())));
        assert!(!watcher.has_changed().unwrap());
        assert_eq!(store.drain(), 2);

        assert!(watcher.has_changed().unwrap());
        assert_eq!(*watcher.borrow_and_update(), 2);
        assert!(!watcher.has_changed().unwrap());
        assert_eq!(store.state().dashboard.status.error(), Some("down"));
    }

    #[tokio::test]
    async fn test_ended_session_discards_late_results() {
        let mut store = Store::new();
        let in_flight = store.dispatcher();
        let ticket = in_flight.next_ticket();
        assert!(in_flight.dispatch(Customer::wrap(EntityAction::ListRequested { ticket })));
        assert!(in_flight.dispatch(Customer::wrap(EntityAction::DetailRequested {
            id: EntityId::from(1),
        })));

        assert!(store.dispatcher().end_session());

        let old = customer(1);
        assert!(!in_flight.dispatch(Customer::wrap(EntityAction::ListSucceeded {
            ticket,
            items: vec![old.clone()],
        })));
        assert!(!in_flight.dispatch(Customer::wrap(EntityAction::DetailSucceeded(old))));
        assert!(!in_flight.dispatch(Action::Dashboard(DashboardAction::Requested)));
        store.drain();

        let state = store.state();
        assert!(state.customers.items.is_empty());
        assert!(state.customers.selected.is_none());
        assert_eq!(state.dashboard.status, RequestStatus::Idle);

        // Handles issued after the logout work normally.
        let fresh = store.dispatcher();
        let ticket = fresh.next_ticket();
        fresh.dispatch(Customer::wrap(EntityAction::ListRequested { ticket }));
        fresh.dispatch(Customer::wrap(EntityAction::ListSucceeded {
            ticket,
            items: vec![customer(2)],
        }));
        store.drain();
        assert_eq!(store.state().customers.items.len(), 1);
    }

    #[tokio::test]
    async fn test_next_waits_for_spawned_dispatch() {
        let mut store = Store::new();
        let dispatcher = store.dispatcher();
        tokio::spawn(async move {
            dispatcher.dispatch(Action::Dashboard(DashboardAction::Requested));
        });
        store.next().await.unwrap();
        assert!(store.state().dashboard.status.is_loading());
    }
}
