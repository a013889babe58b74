//! Status Indicator Component
//!
//! Spinner, success, error and info lines shown in place of content while
//! a request is in flight or after it failed.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error {
        header: String,
        details: Option<String>,
    },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Cut `text` to at most `max_width` display columns, ending in `...`
/// when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Render an indicator as lines; `width` bounds the details line.
pub fn render_status_indicator(indicator: &StatusIndicatorType, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_LOADING),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_LOADING)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        StatusIndicatorType::Success { message } => {
            lines.push(Line::from(vec![
                Span::styled("  \u{25CF} ", Style::default().fg(COLOR_SUCCESS)),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_SUCCESS)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        StatusIndicatorType::Error { header, details } => {
            lines.push(Line::from(vec![
                Span::styled("  \u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(
                    header.clone(),
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(detail) = details {
                lines.push(Line::from(Span::styled(
                    format!("    {}", truncate_to_width(detail, width.saturating_sub(4))),
                    Style::default().fg(ratatui::style::Color::White),
                )));
            }
        }
        StatusIndicatorType::Info { message } => {
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines
}
