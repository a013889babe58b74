//! Input Field Component
//!
//! A labelled text input with focus handling, password masking, choice
//! display and inline error line. Uses rounded borders like the dialogs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::forms::{FieldKind, FormField};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: String,
    pub focused: bool,
    /// Mask the value (for passwords)
    pub is_password: bool,
    /// Shown when the value is empty
    pub placeholder: Option<&'a str>,
    /// Shown below the input
    pub error: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            focused: false,
            is_password: false,
            placeholder: None,
            error: None,
        }
    }

    /// Configure from a form field, with choice fields rendered as
    /// `< Label >`.
    pub fn from_field(field: &'a FormField) -> Self {
        let mut config = Self::new(field.label, field.display_value());
        config.is_password = field.kind == FieldKind::Password;
        if matches!(field.kind, FieldKind::Choice(_)) {
            config.placeholder = Some("←/→ to choose");
        }
        config
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text inside the box, before the cursor is appended.
    fn display_text(&self) -> (String, bool) {
        if self.is_password {
            return ("\u{2022}".repeat(self.value.chars().count()), false);
        }
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => (placeholder.to_string(), true),
            _ => (self.value.clone(), false),
        }
    }
}

/// Rows needed: label, a 3-row box, and an error line when present.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// Render an input field at the top of `area`; returns the rows used.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;
    let inner_width = area.width.saturating_sub(4);

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: inner_width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );
    y_offset += 1;

    if y_offset + 3 > area.height {
        return y_offset;
    }
    let input_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: inner_width,
        height: 3,
    };

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let (mut content, is_placeholder) = config.display_text();
    let text_style = if is_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };
    if config.focused && !is_placeholder {
        content.push('\u{2588}'); // Block cursor
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        input_area,
    );
    y_offset += 3;

    if let Some(error) = config.error {
        if y_offset < area.height {
            let error_area = Rect {
                x: area.x + 2,
                y: area.y + y_offset,
                width: inner_width,
                height: 1,
            };
            let error_text = Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error, Style::default().fg(COLOR_ERROR)),
            ]));
            frame.render_widget(error_text, error_area);
            y_offset += 1;
        }
    }

    y_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Password", "secret")
            .focused(true)
            .password(true)
            .error(Some("Invalid"))
            .placeholder("Enter password");

        assert!(config.focused);
        assert!(config.is_password);
        assert_eq!(config.error, Some("Invalid"));
        assert_eq!(config.placeholder, Some("Enter password"));
    }

    #[test]
    fn test_password_masks_each_character() {
        let config = InputFieldConfig::new("Password", "mật").password(true);
        assert_eq!(config.display_text().0, "\u{2022}\u{2022}\u{2022}");
    }

    #[test]
    fn test_placeholder_only_when_empty() {
        let config = InputFieldConfig::new("Email", "").placeholder("you@company.vn");
        assert_eq!(config.display_text(), ("you@company.vn".to_string(), true));
        let config = InputFieldConfig::new("Email", "a@b.co").placeholder("you@company.vn");
        assert_eq!(config.display_text(), ("a@b.co".to_string(), false));
    }

    #[test]
    fn test_from_choice_field() {
        let field = FormField::choice(
            "role",
            "Role",
            vec![("ADMIN", "Administrator"), ("STAFF", "Staff")],
            "STAFF",
        );
        let config = InputFieldConfig::from_field(&field);
        assert_eq!(config.value, "< Staff >");
        assert!(!config.is_password);
    }

    #[test]
    fn test_calculate_height() {
        let config = InputFieldConfig::new("Label", "Value");
        assert_eq!(calculate_input_field_height(&config), 4);
        let config = config.error(Some("Error message"));
        assert_eq!(calculate_input_field_height(&config), 5);
    }
}
