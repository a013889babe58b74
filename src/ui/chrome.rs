//! Screen chrome around the body: navigation header, footer with key
//! hints or the current notice, and the confirmation overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Prompt, Screen, Tab};
use crate::models::EntityKind;

use super::components::{render_dialog_frame, render_tab_selector, DialogFrameConfig, TabItem};
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_KEY, COLOR_SUCCESS};

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let user = app
        .store
        .state()
        .session
        .credentials
        .as_ref()
        .and_then(|c| c.user.as_ref())
        .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
        .unwrap_or_default();

    let mut block = Block::default()
        .title(Span::styled(
            " CRM ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    if !user.is_empty() {
        block = block.title_top(
            Line::from(Span::styled(format!(" {} ", user), Style::default().fg(COLOR_DIM)))
                .right_aligned(),
        );
    }

    let tabs = Tab::all();
    let items: Vec<TabItem> = tabs
        .iter()
        .map(|t| TabItem::with_short_label(t.label(), t.short_label()))
        .collect();
    let selected = app.screen.tab().map(|t| t.index());
    let line = render_tab_selector(&items, selected, ctx);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Key hints for the current screen, most important first.
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match &app.screen {
        Screen::Dashboard => vec![
            ("Tab", "switch"),
            ("r", "refresh"),
            ("O", "sign out"),
            ("q", "quit"),
        ],
        Screen::List(_) if app.searching => vec![("Enter", "search"), ("Esc", "clear")],
        Screen::List(kind) => {
            let mut hints = vec![("↑↓", "move"), ("Enter", "open"), ("/", "search"), ("f", "filter")];
            if kind.has_form() {
                hints.push(("n", "new"));
                hints.push(("e", "edit"));
            }
            hints.push(("d", "delete"));
            if *kind == EntityKind::Users {
                hints.push(("l", "lock/unlock"));
            }
            hints.extend([("x", "export"), ("r", "refresh"), ("q", "quit")]);
            hints
        }
        Screen::Detail(kind, _) => {
            let mut hints = vec![("Esc", "back")];
            if kind.has_form() {
                hints.push(("e", "edit"));
            }
            hints.push(("d", "delete"));
            if *kind == EntityKind::Users {
                hints.push(("l", "lock/unlock"));
            }
            hints.push(("r", "refresh"));
            hints
        }
        Screen::CustomerForm | Screen::UserForm | Screen::Login | Screen::ForgotPassword => {
            Vec::new()
        }
    }
}

/// Hints that fit in `width` columns, dropping from the end.
fn fitted_hint_spans(hints: &[(&'static str, &'static str)], width: usize) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(" ")];
    let mut used = 1;
    for (key, action) in hints {
        let needed = key.width() + action.width() + 3;
        if used + needed > width {
            break;
        }
        used += needed;
        spans.push(Span::styled(*key, Style::default().fg(COLOR_KEY)));
        spans.push(Span::styled(format!(" {}  ", action), Style::default().fg(COLOR_DIM)));
    }
    spans
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.notice {
        Some(notice) => {
            let (marker, color) = if notice.is_error {
                ("\u{2717}", COLOR_ERROR)
            } else {
                ("\u{25CF}", COLOR_SUCCESS)
            };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(color)),
                Span::styled(notice.text.clone(), Style::default().fg(color)),
            ])
        }
        None => Line::from(fitted_hint_spans(&hints(app), area.width as usize)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: &LayoutContext, prompt: &Prompt) {
    let title = match prompt {
        Prompt::Delete { .. } => "Confirm delete",
        Prompt::Logout => "Sign out",
    };
    let config = DialogFrameConfig::new(title, 3);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let lines = vec![
        Line::from(Span::styled(
            prompt.question(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(COLOR_KEY)),
            Span::styled(" yes   ", Style::default().fg(COLOR_DIM)),
            Span::styled("n", Style::default().fg(COLOR_KEY)),
            Span::styled(" no", Style::default().fg(COLOR_DIM)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hints_drop_from_the_end() {
        let hints = [("Tab", "switch"), ("r", "refresh"), ("q", "quit")];
        let full = text(&fitted_hint_spans(&hints, 80));
        assert!(full.contains("q quit"));

        let narrow = text(&fitted_hint_spans(&hints, 24));
        assert!(narrow.contains("Tab switch"));
        assert!(narrow.contains("r refresh"));
        assert!(!narrow.contains("quit"));
    }
}
