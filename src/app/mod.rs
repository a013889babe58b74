//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Results of spawned request tasks
//! - [`ListView`] / [`DetailView`] - Render-ready snapshots of a slice
//!
//! The app owns the [`Store`]; request tasks only ever hold a
//! [`Dispatcher`](crate::store::Dispatcher) and a message sender.

mod actions;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;
mod view;

pub use messages::{AppMessage, Failure};
pub use types::{Notice, Prompt, Screen, Tab};
pub use view::{DetailView, ListView, Row};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::filter::ListQuery;
use crate::forms::{CustomerForm, ForgotPasswordForm, LoginForm, UserForm};
use crate::models::EntityKind;
use crate::startup::{CrmConfig, StartupResult};
use crate::store::coordinator::Services;
use crate::store::Store;
use crate::traits::CredentialsProvider;

/// Main application state
pub struct App {
    pub screen: Screen,
    pub store: Store,
    pub services: Services,
    pub credentials: Arc<dyn CredentialsProvider>,
    pub config: CrmConfig,
    /// Search term and filter per list.
    pub queries: HashMap<EntityKind, ListQuery>,
    /// Highlighted row per list, as an index into the filtered rows.
    pub cursors: HashMap<EntityKind, usize>,
    /// Keystrokes go to the search term of the current list.
    pub searching: bool,
    pub prompt: Option<Prompt>,
    pub notice: Option<Notice>,
    pub login_form: LoginForm,
    pub forgot_form: ForgotPasswordForm,
    pub customer_form: Option<CustomerForm>,
    pub user_form: Option<UserForm>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    /// Animation counter for the loading spinner.
    pub tick_count: u64,
}

impl App {
    pub fn new(startup: StartupResult) -> Self {
        let StartupResult {
            config,
            services,
            credentials,
            store,
        } = startup;
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let login_email = store
            .state()
            .session
            .credentials
            .as_ref()
            .and_then(|c| c.user.as_ref())
            .map(|u| u.email.clone())
            .unwrap_or_default();

        Self {
            screen: Screen::Login,
            store,
            services,
            credentials,
            config,
            queries: HashMap::new(),
            cursors: HashMap::new(),
            searching: false,
            prompt: None,
            notice: None,
            login_form: LoginForm::with_email(&login_email),
            forgot_form: ForgotPasswordForm::new(""),
            customer_form: None,
            user_form: None,
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    /// Enter the first screen: the dashboard with a restored session,
    /// otherwise the login screen. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        if self.is_authenticated() {
            self.navigate(Screen::Dashboard);
        } else {
            self.navigate(Screen::Login);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.state().session.is_authenticated()
    }

    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Redraws only while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    /// Whatever the current screen shows is waiting on a request.
    pub fn is_busy(&self) -> bool {
        let state = self.store.state();
        match &self.screen {
            Screen::Login => self.login_form.state.submitting,
            Screen::ForgotPassword => self.forgot_form.state.submitting,
            Screen::Dashboard => state.dashboard.status.is_loading(),
            Screen::List(kind) | Screen::Detail(kind, _) => {
                self.list_view(*kind).status.is_loading()
            }
            Screen::CustomerForm => self
                .customer_form
                .as_ref()
                .is_some_and(|f| f.state.submitting),
            Screen::UserForm => self.user_form.as_ref().is_some_and(|f| f.state.submitting),
        }
    }

    pub fn query(&self, kind: EntityKind) -> ListQuery {
        self.queries.get(&kind).cloned().unwrap_or_default()
    }

    pub fn query_mut(&mut self, kind: EntityKind) -> &mut ListQuery {
        self.queries.entry(kind).or_default()
    }

    pub fn cursor(&self, kind: EntityKind) -> usize {
        self.cursors.get(&kind).copied().unwrap_or(0)
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }
}
