//! User account create/edit form.

use super::field::{FormField, FormState};
use super::{require, require_email, FormErrors, FormMode};
use crate::models::{User, UserDraft, UserRole};

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub mode: FormMode,
    pub state: FormState,
}

impl UserForm {
    pub fn new() -> Self {
        Self::from_draft(FormMode::Create, &UserDraft::default())
    }

    pub fn edit(user: &User) -> Self {
        Self::from_draft(FormMode::Edit(user.id.clone()), &UserDraft::from(user))
    }

    fn from_draft(mode: FormMode, draft: &UserDraft) -> Self {
        let state = FormState::new(vec![
            FormField::text("name", "Full name", draft.name.clone()),
            FormField::text("email", "Email", draft.email.clone()),
            FormField::choice("role", "Role", UserRole::options(), draft.role.code()),
            FormField::text("department", "Department", draft.department.clone()),
        ]);
        Self { mode, state }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "name", "Name", self.state.value("name"));
        require_email(&mut errors, "email", self.state.value("email"));
        errors
    }

    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.state.trimmed("name"),
            email: self.state.trimmed("email"),
            role: UserRole::from_code(self.state.value("role")),
            department: self.state.trimmed("department"),
        }
    }

    pub fn submit(&mut self) -> Option<UserDraft> {
        let errors = self.validate();
        if !self.state.set_errors(errors) {
            return None;
        }
        self.state.begin_submit();
        Some(self.draft())
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}
