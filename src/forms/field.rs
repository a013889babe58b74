//! Editable fields and focus handling shared by every form.

use super::FormErrors;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Password,
    /// Cycles through `(code, label)` options instead of taking text.
    Choice(Vec<(&'static str, &'static str)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn password(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: String::new(),
            kind: FieldKind::Password,
        }
    }

    /// A choice field. An unknown `value` falls back to the first option.
    pub fn choice(
        key: &'static str,
        label: &'static str,
        options: Vec<(&'static str, &'static str)>,
        value: &str,
    ) -> Self {
        let value = options
            .iter()
            .find(|(code, _)| *code == value)
            .or(options.first())
            .map(|(code, _)| code.to_string())
            .unwrap_or_default();
        Self {
            key,
            label,
            value,
            kind: FieldKind::Choice(options),
        }
    }

    /// Text shown in the input box.
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Choice(options) => options
                .iter()
                .find(|(code, _)| *code == self.value)
                .map(|(_, label)| format!("< {} >", label))
                .unwrap_or_else(|| self.value.clone()),
            _ => self.value.clone(),
        }
    }

    fn cycle(&mut self, forward: bool) {
        let FieldKind::Choice(options) = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|(code, _)| *code == self.value)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.value = options[next].0.to_string();
    }
}

/// Fields, focus and inline errors of one form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub errors: FormErrors,
    /// A write is in flight.
    pub submitting: bool,
    /// Server-side failure of the last submit.
    pub submit_error: Option<String>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            focused: 0,
            errors: FormErrors::new(),
            submitting: false,
            submit_error: None,
        }
    }

    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Trimmed value, for building payloads.
    pub fn trimmed(&self, key: &str) -> String {
        self.value(key).trim().to_string()
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type a character into the focused field. Choice fields ignore text
    /// except space, which cycles forward.
    pub fn insert_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        if matches!(field.kind, FieldKind::Choice(_)) {
            if c == ' ' {
                field.cycle(true);
            }
        } else {
            field.value.push(c);
        }
        let key = field.key;
        self.errors.remove(key);
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focused) {
            if !matches!(field.kind, FieldKind::Choice(_)) {
                field.value.pop();
            }
        }
    }

    /// Left/right on a choice field.
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.cycle(forward);
        }
    }

    /// Store validation results. Returns true when there are none.
    pub fn set_errors(&mut self, errors: FormErrors) -> bool {
        self.errors = errors;
        if let Some(first) = self.errors.keys().next() {
            if let Some(index) = self.fields.iter().position(|f| f.key == *first) {
                self.focused = index;
            }
        }
        self.errors.is_empty()
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.submit_error = None;
    }

    /// Record a rejected submit; the form becomes editable again.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.submit_error = Some(message.into());
    }
}
