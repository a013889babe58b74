//! Centered overlay with a rounded border, used by the sign-in screens,
//! entity forms and confirmation prompts.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

const MIN_DIALOG_WIDTH: u16 = 30;
const DEFAULT_MAX_WIDTH: u16 = 60;

/// Title and size limits of one dialog.
#[derive(Debug, Clone, Copy)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Rows for content, borders excluded.
    pub content_height: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    pub fn max_width(self, max_width: u16) -> Self {
        Self { max_width, ..self }
    }

    /// Outer width on a terminal `available` columns wide.
    ///
    /// Tiny terminals keep a two-column margin on each side; otherwise the
    /// dialog takes a share of the width that grows as the terminal narrows.
    fn outer_width(&self, ctx: &LayoutContext, available: u16) -> u16 {
        let max = self.max_width.max(MIN_DIALOG_WIDTH);
        let width = if ctx.is_extra_small() {
            available.saturating_sub(4).min(max)
        } else if ctx.is_narrow() {
            ctx.bounded_width(80, MIN_DIALOG_WIDTH, max)
        } else {
            ctx.bounded_width(50, MIN_DIALOG_WIDTH, max)
        };
        width.min(available)
    }
}

/// Clear a centered box inside `area`, draw the titled border and return
/// the content area within it.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let width = config.outer_width(ctx, area.width);
    let height = config.content_height.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog);

    frame.render_widget(Clear, dialog);
    frame.render_widget(block, dialog);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn width_on(columns: u16, rows: u16, config: DialogFrameConfig) -> u16 {
        let ctx = LayoutContext::new(columns, rows);
        config.outer_width(&ctx, columns)
    }

    #[test]
    fn test_width_share_depends_on_terminal() {
        let config = DialogFrameConfig::new("Sign in", 6);
        assert_eq!(width_on(80, 24, config), 40);
        assert_eq!(width_on(200, 50, config), 60);
        assert_eq!(width_on(200, 50, config.max_width(70)), 70);
        assert_eq!(width_on(70, 24, config), 56);
    }

    #[test]
    fn test_tiny_terminal_keeps_margin() {
        let config = DialogFrameConfig::new("Confirm delete", 3);
        assert_eq!(width_on(24, 8, config), 20);
    }

    #[test]
    fn test_frame_is_centered() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|f| {
                let area = f.area();
                let ctx = LayoutContext::from_rect(area);
                inner = render_dialog_frame(f, area, &ctx, &DialogFrameConfig::new("Sign in", 6));
            })
            .unwrap();
        assert_eq!(inner, Rect::new(21, 9, 38, 6));

        let buffer = terminal.backend().buffer();
        let top: String = (0..80).map(|x| buffer[(x, 8)].symbol()).collect();
        assert!(top.contains(" Sign in "));
    }
}
