//! Local form state and validation.
//!
//! Forms hold uncommitted edits. Validation runs before any dispatch and
//! its errors never reach the store.

pub mod customer;
pub mod field;
pub mod login;
pub mod user;

pub use customer::CustomerForm;
pub use field::{FieldKind, FormField, FormState};
pub use login::{ForgotPasswordForm, LoginForm};
pub use user::UserForm;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::models::EntityId;

/// Field key to message; empty means valid.
pub type FormErrors = BTreeMap<&'static str, String>;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex pattern"));

/// Loose shape check: something@something.something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Record `"<label> is required"` when `value` is blank.
pub fn require(errors: &mut FormErrors, key: &'static str, label: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(key, format!("{} is required", label));
        false
    } else {
        true
    }
}

/// Required email with shape check.
pub fn require_email(errors: &mut FormErrors, key: &'static str, value: &str) {
    if require(errors, key, "Email", value) && !is_valid_email(value.trim()) {
        errors.insert(key, "Email is invalid".to_string());
    }
}

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

impl FormMode {
    pub fn title(&self, noun: &str) -> String {
        match self {
            FormMode::Create => format!("New {}", noun),
            FormMode::Edit(id) => format!("Edit {} #{}", noun, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.vn"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_require_email_messages() {
        let mut errors = FormErrors::new();
        require_email(&mut errors, "email", "  ");
        assert_eq!(errors["email"], "Email is required");

        let mut errors = FormErrors::new();
        require_email(&mut errors, "email", "bad");
        assert_eq!(errors["email"], "Email is invalid");

        let mut errors = FormErrors::new();
        require_email(&mut errors, "email", "ok@x.io");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_form_mode_title() {
        assert_eq!(FormMode::Create.title("customer"), "New customer");
        assert_eq!(FormMode::Edit(7.into()).title("user"), "Edit user #7");
    }
}
