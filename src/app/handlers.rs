//! Message handling for the App.

use super::{App, AppMessage, Failure, Notice, Screen};
use crate::forms::LoginForm;

impl App {
    /// Handle a result sent back by a request task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoginFinished(Ok(())) => {
                self.login_form = LoginForm::new();
                self.notice = None;
                self.navigate(Screen::Dashboard);
            }
            AppMessage::LoginFinished(Err(failure)) => {
                self.login_form.state.fail_submit(failure.message);
            }
            AppMessage::ResetRequested(Ok(message)) => self.forgot_form.sent(message),
            AppMessage::ResetRequested(Err(failure)) => {
                self.forgot_form.state.fail_submit(failure.message);
            }
            AppMessage::Saved { kind, result } => match result {
                Ok(()) => {
                    self.customer_form = None;
                    self.user_form = None;
                    self.notice = Some(Notice::info(format!("{} saved", kind.title())));
                    self.navigate(Screen::List(kind));
                }
                Err(failure) => {
                    if self.expire_if_needed(&failure) {
                        return;
                    }
                    if let Some(form) = self.customer_form.as_mut() {
                        form.state.fail_submit(failure.message.clone());
                    }
                    if let Some(form) = self.user_form.as_mut() {
                        form.state.fail_submit(failure.message);
                    }
                }
            },
            AppMessage::Deleted { kind, result } => match result {
                Ok(()) => {
                    self.notice = Some(Notice::info("Deleted"));
                    if matches!(&self.screen, Screen::Detail(k, _) if *k == kind) {
                        self.navigate(Screen::List(kind));
                    }
                    self.clamp_cursors();
                }
                Err(failure) => self.report(failure, "Delete failed"),
            },
            AppMessage::StatusToggled(result) => match result {
                Ok(message) => self.notice = Some(Notice::info(message)),
                Err(failure) => self.report(failure, "Status change failed"),
            },
            AppMessage::Exported { kind, result } => match result {
                Ok(path) => {
                    self.notice = Some(Notice::info(format!(
                        "{} exported to {}",
                        kind.title(),
                        path.display()
                    )));
                }
                Err(failure) => self.report(failure, "Export failed"),
            },
            AppMessage::SessionExpired => {
                if self.is_authenticated() {
                    tracing::info!("session rejected by server");
                    self.logout();
                    self.notice = Some(Notice::error(
                        "Your session has expired. Please sign in again.",
                    ));
                }
            }
            AppMessage::LoggedOut => {
                self.customer_form = None;
                self.user_form = None;
                self.queries.clear();
                self.cursors.clear();
                self.navigate(Screen::Login);
            }
        }
    }

    /// Footer error for a failed background action.
    fn report(&mut self, failure: Failure, what: &str) {
        if self.expire_if_needed(&failure) {
            return;
        }
        self.notice = Some(Notice::error(failure.notice_text(what)));
    }

    fn expire_if_needed(&mut self, failure: &Failure) -> bool {
        if failure.reauth {
            self.handle_message(AppMessage::SessionExpired);
        }
        failure.reauth
    }
}
