//! Sign-in and password-reset forms.

use super::field::{FormField, FormState};
use super::{require, require_email, FormErrors};

#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub state: FormState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::with_email("")
    }

    /// Pre-fill the email, e.g. from the last session.
    pub fn with_email(email: &str) -> Self {
        let mut state = FormState::new(vec![
            FormField::text("email", "Email", email),
            FormField::password("password", "Password"),
        ]);
        if !email.is_empty() {
            state.focused = 1;
        }
        Self { state }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require_email(&mut errors, "email", self.state.value("email"));
        require(&mut errors, "password", "Password", self.state.value("password"));
        errors
    }

    /// Returns `(email, password)` when the form validates.
    pub fn submit(&mut self) -> Option<(String, String)> {
        let errors = self.validate();
        if !self.state.set_errors(errors) {
            return None;
        }
        self.state.begin_submit();
        Some((
            self.state.trimmed("email"),
            self.state.value("password").to_string(),
        ))
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Email-only form; `notice` holds the server's confirmation once sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ForgotPasswordForm {
    pub state: FormState,
    pub notice: Option<String>,
}

impl ForgotPasswordForm {
    pub fn new(email: &str) -> Self {
        Self {
            state: FormState::new(vec![FormField::text("email", "Email", email)]),
            notice: None,
        }
    }

    pub fn submit(&mut self) -> Option<String> {
        let mut errors = FormErrors::new();
        require_email(&mut errors, "email", self.state.value("email"));
        if !self.state.set_errors(errors) {
            return None;
        }
        self.notice = None;
        self.state.begin_submit();
        Some(self.state.trimmed("email"))
    }

    pub fn sent(&mut self, message: String) {
        self.state.submitting = false;
        self.notice = Some(message);
    }
}
