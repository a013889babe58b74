//! Form rendering: the customer and user editors, plus the field stack
//! the login dialogs reuse.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::forms::FormState;

use super::components::{
    calculate_input_field_height, get_spinner_char, render_dialog_frame, render_input_field,
    DialogFrameConfig, InputFieldConfig,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_KEY, COLOR_LOADING};

fn field_config<'a>(state: &'a FormState, index: usize) -> InputFieldConfig<'a> {
    let field = &state.fields[index];
    InputFieldConfig::from_field(field)
        .focused(index == state.focused)
        .error(state.error(field.key))
}

/// Rows the whole form wants: every field, a status line and a hint line.
pub(super) fn form_content_height(state: &FormState) -> u16 {
    let fields: u16 = (0..state.fields.len())
        .map(|i| calculate_input_field_height(&field_config(state, i)))
        .sum();
    fields + 2
}

/// First field to draw so the focused one fits in `available` rows.
fn first_visible_field(state: &FormState, available: u16) -> usize {
    let mut used = 0;
    let mut first = state.focused.min(state.fields.len().saturating_sub(1));
    for i in (0..=first).rev() {
        let height = calculate_input_field_height(&field_config(state, i));
        if used + height > available {
            break;
        }
        used += height;
        first = i;
    }
    first
}

/// Draw fields, then the submit status and `hints` on the last two rows.
pub(super) fn render_form_body(
    frame: &mut Frame,
    area: Rect,
    state: &FormState,
    tick: u64,
    busy_label: &str,
    hints: &[(&str, &str)],
) {
    let fields_height = area.height.saturating_sub(2);
    let mut y = 0;
    for i in first_visible_field(state, fields_height)..state.fields.len() {
        let config = field_config(state, i);
        let height = calculate_input_field_height(&config);
        if y + height > fields_height {
            break;
        }
        let field_area = Rect::new(area.x, area.y + y, area.width, fields_height - y);
        y += render_input_field(frame, field_area, &config);
    }

    if area.height < 2 {
        return;
    }
    let status_line = if state.submitting {
        Line::from(Span::styled(
            format!("  {} {}", get_spinner_char(tick as usize), busy_label),
            Style::default().fg(COLOR_LOADING),
        ))
    } else if let Some(error) = &state.submit_error {
        Line::from(vec![
            Span::styled("  \u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(
                error.clone(),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from("")
    };
    let bottom = area.y + area.height;
    frame.render_widget(
        Paragraph::new(status_line),
        Rect::new(area.x, bottom - 2, area.width, 1),
    );
    frame.render_widget(
        Paragraph::new(hint_line(hints)),
        Rect::new(area.x, bottom - 1, area.width, 1),
    );
}

pub(super) fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(COLOR_KEY)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

const FORM_HINTS: [(&str, &str); 4] = [
    ("Tab", "next"),
    ("←/→", "choose"),
    ("Enter", "save"),
    ("Esc", "cancel"),
];

/// The customer or user editor, centered in the body area.
pub fn render_entity_form(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let (title, state) = match app.screen {
        Screen::CustomerForm => match &app.customer_form {
            Some(form) => (form.mode.title("customer"), &form.state),
            None => return,
        },
        Screen::UserForm => match &app.user_form {
            Some(form) => (form.mode.title("user"), &form.state),
            None => return,
        },
        _ => return,
    };

    let config = DialogFrameConfig::new(&title, form_content_height(state)).max_width(70);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    render_form_body(frame, inner, state, app.tick_count, "Saving…", &FORM_HINTS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::app::test_support::app;
    use crate::forms::{CustomerForm, FormErrors};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_first_visible_field_keeps_focus_on_screen() {
        let mut form = CustomerForm::new();
        assert_eq!(first_visible_field(&form.state, 12), 0);
        // Seven fields at four rows each; only three fit in twelve rows.
        for _ in 0..6 {
            form.state.focus_next();
        }
        assert_eq!(first_visible_field(&form.state, 12), 4);
    }

    #[test]
    fn test_form_height_grows_with_errors() {
        let mut form = CustomerForm::new();
        let base = form_content_height(&form.state);
        let mut errors = FormErrors::new();
        errors.insert("name", "Name is required".to_string());
        form.state.set_errors(errors);
        assert_eq!(form_content_height(&form.state), base + 1);
    }

    #[tokio::test]
    async fn test_render_customer_form_with_errors() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, true);
        let mut form = CustomerForm::new();
        form.state.set_value("email", "not-an-email");
        assert!(form.submit().is_none());
        app.customer_form = Some(form);
        app.screen = Screen::CustomerForm;

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| render_entity_form(f, f.area(), &app, &LayoutContext::new(100, 40)))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("New customer"));
        assert!(text.contains("Name"));
        assert!(text.contains("required"));
    }
}
