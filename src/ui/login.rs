//! Login and forgot-password screens.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Notice};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::form::{form_content_height, render_form_body};
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

const LOGIN_HINTS: [(&str, &str); 3] = [("Enter", "sign in"), ("^F", "forgot password"), ("Esc", "quit")];
const FORGOT_HINTS: [(&str, &str); 2] = [("Enter", "send link"), ("Esc", "back")];

fn render_backdrop(frame: &mut Frame, area: Rect) -> Rect {
    let outer_block = Block::default()
        .title(Span::styled(
            " CRM ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = outer_block.inner(area);
    frame.render_widget(outer_block, area);
    inner
}

/// A one-line message above the fields; returns the rows used.
fn render_message(frame: &mut Frame, area: Rect, text: &str, is_error: bool) -> u16 {
    if area.height == 0 {
        return 0;
    }
    let color = if is_error { COLOR_ERROR } else { COLOR_SUCCESS };
    let para = Paragraph::new(Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(color),
    )));
    frame.render_widget(para, Rect::new(area.x, area.y, area.width, 1));
    1
}

fn dialog(
    frame: &mut Frame,
    ctx: &LayoutContext,
    title: &str,
    content_height: u16,
) -> Rect {
    let area = render_backdrop(frame, frame.area());
    let config = DialogFrameConfig::new(title, content_height).max_width(64);
    render_dialog_frame(frame, area, ctx, &config)
}

pub fn render_login_screen(frame: &mut Frame, app: &App, ctx: &LayoutContext) {
    let state = &app.login_form.state;
    let notice = app.notice.as_ref();
    let message_rows = u16::from(notice.is_some());

    let inner = dialog(frame, ctx, "Sign in", form_content_height(state) + message_rows);
    let mut body = inner;
    if let Some(Notice { text, is_error }) = notice {
        let used = render_message(frame, body, text, *is_error);
        body.y += used;
        body.height = body.height.saturating_sub(used);
    }
    render_form_body(frame, body, state, app.tick_count, "Signing in…", &LOGIN_HINTS);
}

pub fn render_forgot_password_screen(frame: &mut Frame, app: &App, ctx: &LayoutContext) {
    let form = &app.forgot_form;
    let message_rows = u16::from(form.notice.is_some());

    let inner = dialog(
        frame,
        ctx,
        "Forgot password",
        form_content_height(&form.state) + message_rows,
    );
    let mut body = inner;
    if let Some(sent) = &form.notice {
        let used = render_message(frame, body, sent, false);
        body.y += used;
        body.height = body.height.saturating_sub(used);
    }
    render_form_body(frame, body, &form.state, app.tick_count, "Sending…", &FORGOT_HINTS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::app::test_support::app;
    use crate::app::Screen;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, forgot: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::from_rect(f.area());
                if forgot {
                    render_forgot_password_screen(f, app, &ctx);
                } else {
                    render_login_screen(f, app, &ctx);
                }
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_login_masks_password_and_shows_failure() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, false);
        app.login_form.state.set_value("email", "an@crm.vn");
        app.login_form.state.set_value("password", "hunter2");
        app.login_form.state.fail_submit("Invalid email or password");

        let text = draw(&app, false);
        assert!(text.contains("Sign in"));
        assert!(text.contains("an@crm.vn"));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_login_shows_session_notice() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, false);
        app.notice = Some(Notice::error("Session expired"));
        assert!(draw(&app, false).contains("Session expired"));
    }

    #[tokio::test]
    async fn test_forgot_password_shows_confirmation() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, false);
        app.screen = Screen::ForgotPassword;
        app.forgot_form.sent("Check your inbox".to_string());
        let text = draw(&app, true);
        assert!(text.contains("Forgot password"));
        assert!(text.contains("Check your inbox"));
    }
}
