//! Screen transitions and list cursor movement.

use super::{App, Screen, Tab};
use crate::models::{EntityId, EntityKind};
use crate::store::state::with_kind;
use crate::store::{EntityAction, Stored};

impl App {
    /// Switch screens and trigger the fetch the new screen needs.
    ///
    /// Leaving a detail screen clears that slice's selection. Private
    /// screens redirect to login without a session.
    pub fn navigate(&mut self, screen: Screen) {
        let screen = if !screen.is_public() && !self.is_authenticated() {
            Screen::Login
        } else {
            screen
        };

        if let Screen::Detail(kind, _) = &self.screen {
            if self.screen != screen {
                self.clear_selection(*kind);
            }
        }

        tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen.clone();
        self.searching = false;
        self.prompt = None;
        self.mark_dirty();

        match screen {
            Screen::Dashboard => self.load_dashboard(),
            Screen::List(kind) => self.load_list(kind),
            Screen::Detail(kind, id) => self.load_detail(kind, id),
            Screen::Login
            | Screen::ForgotPassword
            | Screen::CustomerForm
            | Screen::UserForm => {}
        }
    }

    /// Esc: detail and forms return to their list, reset returns to login.
    pub fn go_back(&mut self) {
        let target = match &self.screen {
            Screen::Detail(kind, _) => Screen::List(*kind),
            Screen::CustomerForm => {
                self.customer_form = None;
                Screen::List(EntityKind::Customers)
            }
            Screen::UserForm => {
                self.user_form = None;
                Screen::List(EntityKind::Users)
            }
            Screen::ForgotPassword => Screen::Login,
            Screen::Login | Screen::Dashboard | Screen::List(_) => return,
        };
        self.navigate(target);
    }

    pub fn switch_tab(&mut self, forward: bool) {
        let current = self.screen.tab().unwrap_or(Tab::Dashboard);
        self.navigate(current.step(forward).screen());
    }

    /// Jump to tab `index` (0 is the dashboard). Out of range is ignored.
    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.navigate(tab.screen());
        }
    }

    fn clear_selection(&self, kind: EntityKind) {
        let dispatch = self.store.dispatcher();
        with_kind!(kind, E => {
            dispatch.dispatch(E::wrap(EntityAction::SelectionCleared));
        });
    }

    /// Move the list cursor by `delta`, clamped to the visible rows.
    pub fn move_cursor(&mut self, delta: isize) {
        let Screen::List(kind) = self.screen else {
            return;
        };
        let len = self.list_view(kind).rows.len();
        let current = self.cursor(kind).min(len.saturating_sub(1));
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current
                .saturating_add(delta.unsigned_abs())
                .min(len.saturating_sub(1))
        };
        self.cursors.insert(kind, next);
        self.mark_dirty();
    }

    /// The record under the cursor on a list, or the one a detail shows.
    pub fn selected_id(&self) -> Option<(EntityKind, EntityId)> {
        match &self.screen {
            Screen::List(kind) => {
                let view = self.list_view(*kind);
                let index = self.cursor(*kind).min(view.rows.len().saturating_sub(1));
                view.rows.get(index).map(|row| (*kind, row.id.clone()))
            }
            Screen::Detail(kind, id) => Some((*kind, id.clone())),
            _ => None,
        }
    }

    /// Keep the cursor on a real row after the rows changed.
    pub fn clamp_cursors(&mut self) {
        let kinds: Vec<EntityKind> = self.cursors.keys().copied().collect();
        for kind in kinds {
            let len = self.list_view(kind).rows.len();
            if let Some(cursor) = self.cursors.get_mut(&kind) {
                *cursor = (*cursor).min(len.saturating_sub(1));
            }
        }
    }

    /// Open the detail screen for the highlighted row.
    pub fn open_selected(&mut self) {
        if let Some((kind, id)) = self.selected_id() {
            self.navigate(Screen::Detail(kind, id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, respond, settle};
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_private_screens_require_session() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, false);
        app.navigate(Screen::List(EntityKind::Orders));
        assert_eq!(app.screen, Screen::Login);
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_entering_list_fetches_it() {
        let mock = MockHttpClient::new();
        respond(&mock, "GET", "/orders", json!([{"id": 1, "code": "DH-1"}]));
        let (mut app, _) = app(&mock, true);

        app.navigate(Screen::List(EntityKind::Orders));
        settle(&mut app).await;

        assert_eq!(app.store.state().orders.items.len(), 1);
        assert_eq!(app.list_view(EntityKind::Orders).rows[0].cells[0], "DH-1");
    }

    #[tokio::test]
    async fn test_leaving_detail_clears_selection() {
        let mock = MockHttpClient::new();
        respond(&mock, "GET", "/customers", json!([{"id": 1, "name": "An"}]));
        respond(&mock, "GET", "/customers/1", json!({"id": 1, "name": "An"}));
        let (mut app, _) = app(&mock, true);

        app.navigate(Screen::List(EntityKind::Customers));
        settle(&mut app).await;
        app.open_selected();
        settle(&mut app).await;
        assert_eq!(
            app.screen,
            Screen::Detail(EntityKind::Customers, EntityId::from(1))
        );
        assert!(app.store.state().customers.selected.is_some());

        app.go_back();
        settle(&mut app).await;
        assert_eq!(app.screen, Screen::List(EntityKind::Customers));
        assert!(app.store.state().customers.selected.is_none());
    }

    #[tokio::test]
    async fn test_cursor_clamps_to_rows() {
        let mock = MockHttpClient::new();
        respond(
            &mock,
            "GET",
            "/customers",
            json!([{"id": 1, "name": "An"}, {"id": 2, "name": "Binh"}]),
        );
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::List(EntityKind::Customers));
        settle(&mut app).await;

        app.move_cursor(5);
        assert_eq!(app.cursor(EntityKind::Customers), 1);
        app.move_cursor(-3);
        assert_eq!(app.cursor(EntityKind::Customers), 0);
        assert_eq!(
            app.selected_id(),
            Some((EntityKind::Customers, EntityId::from(1)))
        );
    }

    #[tokio::test]
    async fn test_tab_switching_wraps() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::Dashboard);
        app.switch_tab(false);
        assert_eq!(app.screen, Screen::List(EntityKind::Users));
        app.select_tab(1);
        assert_eq!(app.screen, Screen::List(EntityKind::Customers));
        app.select_tab(42);
        assert_eq!(app.screen, Screen::List(EntityKind::Customers));
    }
}
