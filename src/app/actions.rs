//! Request-spawning methods for the App.
//!
//! Every method here clones what its task needs, spawns one coordinator
//! call and returns immediately. Results reach the UI as actions through
//! the store and, where the UI must react, as [`AppMessage`]s.

use std::future::Future;

use super::{App, AppMessage, Failure, Notice, Prompt, Screen};
use crate::error::CrmResult;
use crate::export::save_export;
use crate::forms::{CustomerForm, FormMode, UserForm};
use crate::models::{Customer, Entity, EntityId, EntityKind, User};
use crate::store::coordinator;
use crate::store::state::with_kind;
use crate::store::Stored;

impl App {
    /// Spawn a request whose only UI side effect is a 401 handoff.
    fn spawn_request<F>(&self, request: F)
    where
        F: Future<Output = CrmResult<()>> + Send + 'static,
    {
        let tx = self.message_sender();
        tokio::spawn(async move {
            if let Err(err) = request.await {
                if err.requires_reauth() {
                    let _ = tx.send(AppMessage::SessionExpired);
                }
            }
        });
    }

    pub fn load_dashboard(&self) {
        let api = self.services.dashboard.clone();
        let dispatch = self.store.dispatcher();
        self.spawn_request(async move {
            coordinator::fetch_dashboard(&api, &dispatch).await.map(drop)
        });
    }

    pub fn load_list(&self, kind: EntityKind) {
        with_kind!(kind, E => self.spawn_list::<E>());
    }

    fn spawn_list<E: Stored>(&self) {
        let service = self.services.entity::<E>();
        let dispatch = self.store.dispatcher();
        self.spawn_request(async move { coordinator::fetch_list(&service, &dispatch).await.map(drop) });
    }

    pub fn load_detail(&self, kind: EntityKind, id: EntityId) {
        with_kind!(kind, E => self.spawn_detail::<E>(id));
    }

    fn spawn_detail<E: Stored>(&self, id: EntityId) {
        let service = self.services.entity::<E>();
        let dispatch = self.store.dispatcher();
        self.spawn_request(async move {
            coordinator::fetch_detail(&service, &dispatch, &id)
                .await
                .map(drop)
        });
    }

    /// Customers are searched on the server; other lists filter locally and
    /// only need the term, which is already applied.
    pub fn submit_search(&mut self, kind: EntityKind) {
        self.searching = false;
        self.mark_dirty();
        if kind != EntityKind::Customers {
            return;
        }
        let term = self.query(kind).term.trim().to_string();
        if term.is_empty() {
            self.load_list(kind);
            return;
        }
        let service = self.services.entity::<Customer>();
        let dispatch = self.store.dispatcher();
        self.spawn_request(async move {
            coordinator::search(&service, &dispatch, &term)
                .await
                .map(drop)
        });
    }

    /// Ask before deleting the highlighted or displayed record.
    pub fn request_delete(&mut self) {
        let Some((kind, id)) = self.selected_id() else {
            return;
        };
        let label = self.record_label(kind, &id);
        self.prompt = Some(Prompt::Delete { kind, id, label });
        self.mark_dirty();
    }

    fn record_label(&self, kind: EntityKind, id: &EntityId) -> String {
        let view = self.list_view(kind);
        view.rows
            .iter()
            .position(|row| &row.id == id)
            .and_then(|index| view.label(index))
            .unwrap_or_else(|| id.to_string())
    }

    /// Answer the open prompt.
    pub fn answer_prompt(&mut self, confirmed: bool) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        self.mark_dirty();
        if !confirmed {
            return;
        }
        match prompt {
            Prompt::Delete { kind, id, .. } => {
                with_kind!(kind, E => self.spawn_delete::<E>(id));
            }
            Prompt::Logout => self.logout(),
        }
    }

    fn spawn_delete<E: Stored>(&self, id: EntityId) {
        let service = self.services.entity::<E>();
        let dispatch = self.store.dispatcher();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = coordinator::delete(&service, &dispatch, &id)
                .await
                .map_err(Failure::from);
            let _ = tx.send(AppMessage::Deleted {
                kind: E::KIND,
                result,
            });
        });
    }

    /// Download the current list, with its term and filter, to the export
    /// directory.
    pub fn export(&mut self, kind: EntityKind) {
        self.set_notice(Notice::info(format!("Exporting {}...", kind.title())));
        with_kind!(kind, E => self.spawn_export::<E>());
    }

    fn spawn_export<E: Stored>(&self) {
        let service = self.services.entity::<E>();
        let query = self.query(E::KIND).export_query();
        let dir = self.config.export_dir.clone();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = match service.export(&query).await {
                Ok(data) => save_export(&dir, E::KIND, &data),
                Err(err) => Err(err),
            };
            let _ = tx.send(AppMessage::Exported {
                kind: E::KIND,
                result: result.map_err(Failure::from),
            });
        });
    }

    /// Lock or unlock the user under the cursor.
    pub fn toggle_user_status(&mut self) {
        let Some((EntityKind::Users, id)) = self.selected_id() else {
            return;
        };
        let Some(user) = self.store.state().users.find(&id).cloned() else {
            return;
        };
        let users = self.services.users.clone();
        let dispatch = self.store.dispatcher();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = coordinator::toggle_user_status(&users, &dispatch, &user)
                .await
                .map(|updated| format!("{} is now {}", updated.name, updated.status.label()))
                .map_err(Failure::from);
            let _ = tx.send(AppMessage::StatusToggled(result));
        });
    }

    /// Open the create form of a kind that has one.
    pub fn open_create_form(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Customers => {
                self.customer_form = Some(CustomerForm::new());
                self.navigate(Screen::CustomerForm);
            }
            EntityKind::Users => {
                self.user_form = Some(UserForm::new());
                self.navigate(Screen::UserForm);
            }
            _ => {}
        }
    }

    /// Open the edit form for the highlighted or displayed record.
    pub fn open_edit_form(&mut self) {
        let Some((kind, id)) = self.selected_id() else {
            return;
        };
        let state = self.store.state();
        match kind {
            EntityKind::Customers => {
                let Some(customer) = Self::known::<Customer>(state, &id) else {
                    return;
                };
                self.customer_form = Some(CustomerForm::edit(&customer));
                self.navigate(Screen::CustomerForm);
            }
            EntityKind::Users => {
                let Some(user) = Self::known::<User>(state, &id) else {
                    return;
                };
                self.user_form = Some(UserForm::edit(&user));
                self.navigate(Screen::UserForm);
            }
            _ => {}
        }
    }

    /// Prefer the freshly fetched detail over the list copy.
    fn known<E: Stored>(state: &crate::store::AppState, id: &EntityId) -> Option<E> {
        let slice = E::slice(state);
        slice
            .selected
            .as_ref()
            .filter(|s| s.id() == id)
            .or_else(|| slice.find(id))
            .cloned()
    }

    /// Validate the open form and, when clean, send the write. The form
    /// stays open until the result arrives.
    pub fn submit_form(&mut self) {
        match self.screen {
            Screen::CustomerForm => {
                let Some(form) = self.customer_form.as_mut() else {
                    return;
                };
                let mode = form.mode.clone();
                if let Some(draft) = form.submit() {
                    self.spawn_save::<Customer>(mode, draft);
                }
            }
            Screen::UserForm => {
                let Some(form) = self.user_form.as_mut() else {
                    return;
                };
                let mode = form.mode.clone();
                if let Some(draft) = form.submit() {
                    self.spawn_save::<User>(mode, draft);
                }
            }
            _ => return,
        }
        self.mark_dirty();
    }

    fn spawn_save<E: Stored>(&self, mode: FormMode, draft: E::Draft) {
        let service = self.services.entity::<E>();
        let dispatch = self.store.dispatcher();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = match mode {
                FormMode::Create => coordinator::create(&service, &dispatch, &draft).await,
                FormMode::Edit(id) => coordinator::update(&service, &dispatch, &id, &draft).await,
            };
            let _ = tx.send(AppMessage::Saved {
                kind: E::KIND,
                result: result.map(drop).map_err(Failure::from),
            });
        });
    }

    pub fn submit_login(&mut self) {
        let Some((email, password)) = self.login_form.submit() else {
            self.mark_dirty();
            return;
        };
        self.notice = None;
        self.mark_dirty();
        let auth = self.services.auth.clone();
        let client = self.services.client.clone();
        let credentials = self.credentials.clone();
        let dispatch = self.store.dispatcher();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = coordinator::login(
                &auth,
                &client,
                credentials.as_ref(),
                &dispatch,
                &email,
                &password,
            )
            .await;
            let _ = tx.send(AppMessage::LoginFinished(
                result.map(drop).map_err(Failure::from),
            ));
        });
    }

    pub fn submit_forgot_password(&mut self) {
        let Some(email) = self.forgot_form.submit() else {
            self.mark_dirty();
            return;
        };
        self.mark_dirty();
        let auth = self.services.auth.clone();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = auth.forgot_password(&email).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "password reset request failed");
            }
            let _ = tx.send(AppMessage::ResetRequested(result.map_err(Failure::from)));
        });
    }

    /// Drop the session locally and on disk.
    pub fn logout(&mut self) {
        let client = self.services.client.clone();
        let credentials = self.credentials.clone();
        let dispatch = self.store.dispatcher();
        let tx = self.message_sender();
        tokio::spawn(async move {
            if let Err(err) = coordinator::logout(&client, credentials.as_ref(), &dispatch).await {
                tracing::warn!(error = %err, "could not clear stored credentials");
            }
            let _ = tx.send(AppMessage::LoggedOut);
        });
    }
}
