//! Customer create/edit form.

use super::field::{FormField, FormState};
use super::{require, require_email, FormErrors, FormMode};
use crate::models::{Customer, CustomerDraft, CustomerType};

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerForm {
    pub mode: FormMode,
    pub state: FormState,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::from_draft(FormMode::Create, &CustomerDraft::default())
    }

    pub fn edit(customer: &Customer) -> Self {
        Self::from_draft(
            FormMode::Edit(customer.id.clone()),
            &CustomerDraft::from(customer),
        )
    }

    fn from_draft(mode: FormMode, draft: &CustomerDraft) -> Self {
        let state = FormState::new(vec![
            FormField::text("name", "Name", draft.name.clone()),
            FormField::text("email", "Email", draft.email.clone()),
            FormField::text("phone", "Phone", draft.phone.clone()),
            FormField::text("address", "Address", draft.address.clone()),
            FormField::choice(
                "customerType",
                "Type",
                CustomerType::options(),
                draft.customer_type.code(),
            ),
            FormField::text("taxCode", "Tax code", draft.tax_code.clone()),
            FormField::text("notes", "Notes", draft.notes.clone()),
        ]);
        Self { mode, state }
    }

    /// Name, email and phone are required; email must look like one.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "name", "Name", self.state.value("name"));
        require_email(&mut errors, "email", self.state.value("email"));
        require(&mut errors, "phone", "Phone number", self.state.value("phone"));
        errors
    }

    pub fn draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.state.trimmed("name"),
            email: self.state.trimmed("email"),
            phone: self.state.trimmed("phone"),
            address: self.state.trimmed("address"),
            notes: self.state.trimmed("notes"),
            customer_type: CustomerType::from_code(self.state.value("customerType")),
            tax_code: self.state.trimmed("taxCode"),
        }
    }

    /// Validate and, when clean, produce the payload to send.
    ///
    /// On failure the errors are stored for inline display and nothing
    /// should be dispatched.
    pub fn submit(&mut self) -> Option<CustomerDraft> {
        let errors = self.validate();
        if !self.state.set_errors(errors) {
            return None;
        }
        self.state.begin_submit();
        Some(self.draft())
    }
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut CustomerForm, name: &str, email: &str, phone: &str) {
        form.state.set_value("name", name);
        form.state.set_value("email", email);
        form.state.set_value("phone", phone);
    }

    #[test]
    fn test_empty_name_and_bad_email_block_submit() {
        let mut form = CustomerForm::new();
        fill(&mut form, "", "not-an-email", "0901");
        assert!(form.submit().is_none());
        assert!(form.state.errors.contains_key("name"));
        assert!(form.state.errors.contains_key("email"));
        assert!(!form.state.errors.contains_key("phone"));
        assert!(!form.state.submitting);
    }

    #[test]
    fn test_phone_required() {
        let form = CustomerForm::new();
        let errors = form.validate();
        assert_eq!(errors["phone"], "Phone number is required");
    }

    #[test]
    fn test_valid_submit_yields_trimmed_draft() {
        let mut form = CustomerForm::new();
        fill(&mut form, " Acme ", "sales@acme.vn", "028 1234");
        form.state.focused = 4;
        form.state.cycle_choice(true);

        let draft = form.submit().unwrap();
        assert_eq!(draft.name, "Acme");
        assert_eq!(draft.customer_type, CustomerType::Corporate);
        assert!(form.state.submitting);
    }

    #[test]
    fn test_edit_prefills_from_customer() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "id": 3, "name": "B", "email": "b@c.de", "phone": "1", "customerType": "VIP"
        }))
        .unwrap();
        let form = CustomerForm::edit(&customer);
        assert_eq!(form.mode, FormMode::Edit(3.into()));
        assert_eq!(form.state.value("customerType"), "VIP");
        assert!(form.validate().is_empty());
    }
}
