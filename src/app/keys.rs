//! Keyboard handling, per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Prompt, Screen};
use crate::forms::{FormState, ForgotPasswordForm};
use crate::models::EntityKind;

/// Outcome of a key press on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormInput {
    Submit,
    Cancel,
    Edited,
    Ignored,
}

fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn edit_form(state: &mut FormState, key: KeyEvent) -> FormInput {
    match key.code {
        KeyCode::Enter => FormInput::Submit,
        KeyCode::Esc => FormInput::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            FormInput::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            FormInput::Edited
        }
        KeyCode::Left => {
            state.cycle_choice(false);
            FormInput::Edited
        }
        KeyCode::Right => {
            state.cycle_choice(true);
            FormInput::Edited
        }
        KeyCode::Backspace => {
            state.backspace();
            FormInput::Edited
        }
        KeyCode::Char(c) if is_plain(&key) => {
            state.insert_char(c);
            FormInput::Edited
        }
        _ => FormInput::Ignored,
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match self.screen.clone() {
            Screen::Login => self.handle_login_key(key),
            Screen::ForgotPassword => self.handle_forgot_key(key),
            Screen::CustomerForm | Screen::UserForm => self.handle_form_key(key),
            Screen::Dashboard => {
                self.handle_browse_key(key);
            }
            Screen::List(kind) if self.searching => self.handle_search_key(kind, key),
            Screen::List(kind) => self.handle_list_key(kind, key),
            Screen::Detail(kind, _) => self.handle_detail_key(kind, key),
        }
    }

    /// Bracketed paste goes wherever typing would.
    pub fn handle_paste(&mut self, text: &str) {
        self.mark_dirty();
        let text = text.replace(['\r', '\n'], "");
        if let Screen::List(kind) = self.screen {
            if self.searching {
                self.query_mut(kind).term.push_str(&text);
                self.cursors.insert(kind, 0);
            }
            return;
        }
        let state = match self.screen {
            Screen::Login => Some(&mut self.login_form.state),
            Screen::ForgotPassword => Some(&mut self.forgot_form.state),
            Screen::CustomerForm => self.customer_form.as_mut().map(|f| &mut f.state),
            Screen::UserForm => self.user_form.as_mut().map(|f| &mut f.state),
            _ => None,
        };
        if let Some(state) = state {
            for c in text.chars() {
                state.insert_char(c);
            }
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.answer_prompt(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.answer_prompt(false),
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('f') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let email = self.login_form.state.trimmed("email");
            self.forgot_form = ForgotPasswordForm::new(&email);
            self.navigate(Screen::ForgotPassword);
            return;
        }
        if self.login_form.state.submitting {
            return;
        }
        match edit_form(&mut self.login_form.state, key) {
            FormInput::Submit => self.submit_login(),
            FormInput::Cancel => self.quit(),
            FormInput::Edited | FormInput::Ignored => {}
        }
    }

    fn handle_forgot_key(&mut self, key: KeyEvent) {
        match edit_form(&mut self.forgot_form.state, key) {
            FormInput::Submit if !self.forgot_form.state.submitting => {
                self.submit_forgot_password()
            }
            FormInput::Cancel => self.go_back(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let state = match self.screen {
            Screen::CustomerForm => self.customer_form.as_mut().map(|f| &mut f.state),
            Screen::UserForm => self.user_form.as_mut().map(|f| &mut f.state),
            _ => None,
        };
        let Some(state) = state else {
            return;
        };
        if state.submitting {
            // Wait for the write to come back.
            return;
        }
        match edit_form(state, key) {
            FormInput::Submit => self.submit_form(),
            FormInput::Cancel => self.go_back(),
            FormInput::Edited | FormInput::Ignored => {}
        }
    }

    /// Keys shared by the dashboard, lists and details. Returns true when
    /// the key was consumed.
    fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => self.switch_tab(true),
            KeyCode::BackTab => self.switch_tab(false),
            KeyCode::Char(c @ '0'..='9') => self.select_tab(c as usize - '0' as usize),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('O') => self.prompt = Some(Prompt::Logout),
            KeyCode::Char('r') => match self.screen.clone() {
                Screen::Dashboard => self.load_dashboard(),
                Screen::List(kind) => self.load_list(kind),
                Screen::Detail(kind, id) => self.load_detail(kind, id),
                _ => {}
            },
            _ => return false,
        }
        true
    }

    fn handle_list_key(&mut self, kind: EntityKind, key: KeyEvent) {
        if self.handle_browse_key(key) {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home => self.move_cursor(isize::MIN),
            KeyCode::End => self.move_cursor(isize::MAX),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('f') => {
                let options = kind.filter_options();
                self.query_mut(kind).cycle_filter(&options);
                self.cursors.insert(kind, 0);
            }
            KeyCode::Char('n') if kind.has_form() => self.open_create_form(kind),
            KeyCode::Char('e') if kind.has_form() => self.open_edit_form(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Char('x') => self.export(kind),
            KeyCode::Char('l') if kind == EntityKind::Users => self.toggle_user_status(),
            KeyCode::Esc if !self.query(kind).is_empty() => {
                let reload = kind == EntityKind::Customers && !self.query(kind).term.is_empty();
                self.queries.remove(&kind);
                self.cursors.insert(kind, 0);
                if reload {
                    self.load_list(kind);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, kind: EntityKind, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(kind),
            KeyCode::Esc => {
                let had_term = !self.query(kind).term.is_empty();
                self.query_mut(kind).term.clear();
                self.searching = false;
                self.cursors.insert(kind, 0);
                if had_term && kind == EntityKind::Customers {
                    self.load_list(kind);
                }
            }
            KeyCode::Backspace => {
                self.query_mut(kind).term.pop();
                self.cursors.insert(kind, 0);
            }
            KeyCode::Char(c) if is_plain(&key) => {
                self.query_mut(kind).term.push(c);
                self.cursors.insert(kind, 0);
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, kind: EntityKind, key: KeyEvent) {
        if self.handle_browse_key(key) {
            return;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            KeyCode::Char('e') if kind.has_form() => self.open_edit_form(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Char('l') if kind == EntityKind::Users => self.toggle_user_status(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, respond, settle};
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use serde_json::json;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_anywhere() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, false);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_login_typing_and_forgot_password() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, false);
        app.start();
        type_text(&mut app, "a@b.co");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        assert_eq!(app.login_form.state.value("email"), "a@b.co");
        assert_eq!(app.login_form.state.value("password"), "pw");

        app.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
        assert_eq!(app.screen, Screen::ForgotPassword);
        assert_eq!(app.forgot_form.state.value("email"), "a@b.co");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Login);
    }

    #[tokio::test]
    async fn test_forgot_password_shows_server_message() {
        let mock = MockHttpClient::new();
        respond(
            &mock,
            "POST",
            "/auth/forgot-password",
            json!({"message": "Check your inbox"}),
        );
        let (mut app, _) = app(&mock, false);
        app.navigate(Screen::ForgotPassword);
        type_text(&mut app, "a@b.co");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;
        assert_eq!(app.forgot_form.notice.as_deref(), Some("Check your inbox"));
    }

    #[tokio::test]
    async fn test_search_filters_rows_live() {
        let mock = MockHttpClient::new();
        respond(
            &mock,
            "GET",
            "/orders",
            json!([{"id": 1, "code": "DH-1"}, {"id": 2, "code": "DH-2"}]),
        );
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::List(EntityKind::Orders));
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('/'));
        assert!(app.searching);
        type_text(&mut app, "dh-2");
        assert_eq!(app.list_view(EntityKind::Orders).rows.len(), 1);
        press(&mut app, KeyCode::Enter);
        assert!(!app.searching);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.list_view(EntityKind::Orders).rows.len(), 2);
    }

    #[tokio::test]
    async fn test_customer_search_hits_server() {
        let mock = MockHttpClient::new();
        respond(&mock, "GET", "/customers", json!([{"id": 1, "name": "An"}]));
        respond(
            &mock,
            "GET",
            "/customers/search?term=binh",
            json!([{"id": 2, "name": "Binh"}]),
        );
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::List(EntityKind::Customers));
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "binh");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;
        assert_eq!(app.store.state().customers.items.len(), 1);
        assert_eq!(app.store.state().customers.items[0].name, "Binh");
    }

    #[tokio::test]
    async fn test_filter_key_cycles_status() {
        let mock = MockHttpClient::new();
        respond(
            &mock,
            "GET",
            "/users",
            json!([
                {"id": 1, "fullName": "A", "role": "ADMIN"},
                {"id": 2, "fullName": "B", "role": "STAFF"}
            ]),
        );
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::List(EntityKind::Users));
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.query(EntityKind::Users).filter.as_deref(), Some("ADMIN"));
        assert_eq!(app.list_view(EntityKind::Users).rows.len(), 1);
    }

    #[tokio::test]
    async fn test_new_only_for_kinds_with_forms() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::List(EntityKind::Orders));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen, Screen::List(EntityKind::Orders));

        app.navigate(Screen::List(EntityKind::Users));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen, Screen::UserForm);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::List(EntityKind::Users));
        assert!(app.user_form.is_none());
    }

    #[tokio::test]
    async fn test_logout_prompt() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::Dashboard);
        press(&mut app, KeyCode::Char('O'));
        assert_eq!(app.prompt, Some(Prompt::Logout));
        press(&mut app, KeyCode::Char('y'));
        settle(&mut app).await;
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.is_authenticated());
    }

    #[tokio::test]
    async fn test_paste_into_search() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, true);
        app.navigate(Screen::List(EntityKind::Projects));
        press(&mut app, KeyCode::Char('/'));
        app.handle_paste("DA-7\n");
        assert_eq!(app.query(EntityKind::Projects).term, "DA-7");
    }
}
