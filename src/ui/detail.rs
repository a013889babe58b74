//! Record detail screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::DetailView;

use super::components::{render_status_indicator, StatusIndicatorType};
use super::theme::{status_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

fn field_lines(fields: &[(&'static str, String)]) -> Vec<Line<'static>> {
    let label_width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(label, value)| {
            let value_style = if *label == "Status" {
                Style::default()
                    .fg(status_color(value))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let value = if value.is_empty() { "-" } else { value.as_str() };
            Line::from(vec![
                Span::styled(
                    format!("  {:<width$}  ", label, width = label_width),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(value.to_string(), value_style),
            ])
        })
        .collect()
}

pub fn render_detail(frame: &mut Frame, area: Rect, view: &DetailView, tick: u64) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} #{} ", view.kind.title(), view.id),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines = Vec::new();
    if view.status.is_loading() {
        lines.extend(render_status_indicator(
            &StatusIndicatorType::spinner("Loading…", tick as usize),
            width,
        ));
    }
    if let Some(message) = view.status.error() {
        lines.extend(render_status_indicator(
            &StatusIndicatorType::error("Request failed", Some(message.to_string())),
            width,
        ));
    }
    match &view.fields {
        Some(fields) => {
            lines.push(Line::from(""));
            lines.extend(field_lines(fields));
        }
        None if lines.is_empty() => lines.extend(render_status_indicator(
            &StatusIndicatorType::info("Record not found"),
            width,
        )),
        None => {}
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, EntityKind};
    use crate::store::RequestStatus;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(view: &DetailView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal
            .draw(|f| render_detail(f, f.area(), view, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_detail_aligns_labels() {
        let lines = field_lines(&[("Name", "An".to_string()), ("Phone", String::new())]);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        let second: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(first, "  Name   An");
        assert_eq!(second, "  Phone  -");
    }

    #[test]
    fn test_detail_renders_fields_and_title() {
        let view = DetailView {
            kind: EntityKind::Orders,
            id: EntityId::from(12),
            fields: Some(vec![
                ("Code", "ORD-12".to_string()),
                ("Status", "Shipped".to_string()),
            ]),
            status: RequestStatus::Loaded,
        };
        let text = draw(&view);
        assert!(text.contains("Orders #12"));
        assert!(text.contains("ORD-12"));
        assert!(text.contains("Shipped"));
    }

    #[test]
    fn test_detail_loading_without_record() {
        let view = DetailView {
            kind: EntityKind::Customers,
            id: EntityId::from(3),
            fields: None,
            status: RequestStatus::Loading,
        };
        let text = draw(&view);
        assert!(text.contains("Loading…"));
        assert!(!text.contains("Record not found"));
    }

    #[test]
    fn test_detail_failure_shows_message() {
        let view = DetailView {
            kind: EntityKind::Customers,
            id: EntityId::from(3),
            fields: None,
            status: RequestStatus::Failed("HTTP 404: Customer not found".to_string()),
        };
        assert!(draw(&view).contains("HTTP 404: Customer not found"));
    }
}
