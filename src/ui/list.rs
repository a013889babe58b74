//! Entity list screen: search bar, filter and the records table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};

use crate::app::{App, ListView};
use crate::models::EntityKind;
use crate::store::RequestStatus;

use super::components::{render_status_indicator, StatusIndicatorType};
use super::layout::LayoutContext;
use super::theme::{
    status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_BG,
    COLOR_KEY, COLOR_SELECTED_BG,
};

/// Columns to draw when only `visible` fit. A trailing "Status" column
/// takes the last slot so it is never the one dropped.
fn column_indices(columns: &[&str], visible: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..columns.len().min(visible)).collect();
    if let Some(status) = columns.iter().position(|c| *c == "Status") {
        if status >= visible && visible > 1 {
            indices.pop();
            indices.push(status);
        }
    }
    indices
}

fn column_width(column: &str) -> Constraint {
    match column {
        "ID" => Constraint::Length(6),
        "Code" | "Status" | "Type" | "Role" => Constraint::Length(14),
        _ => Constraint::Fill(1),
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App, kind: EntityKind, view: &ListView) {
    let query = app.query(kind);
    let mut spans = vec![Span::styled(" / ", Style::default().fg(COLOR_KEY))];
    if app.searching {
        spans.push(Span::styled(
            format!("{}\u{2588}", query.term),
            Style::default().fg(Color::White),
        ));
    } else if query.term.is_empty() {
        spans.push(Span::styled("search", Style::default().fg(COLOR_DIM)));
    } else {
        spans.push(Span::styled(query.term.clone(), Style::default().fg(Color::White)));
    }

    let filter = query
        .filter
        .as_deref()
        .and_then(|code| {
            kind.filter_options()
                .into_iter()
                .find(|(c, _)| *c == code)
                .map(|(_, label)| label)
        })
        .unwrap_or("All");
    spans.push(Span::styled(
        format!("   {}: ", kind.filter_label()),
        Style::default().fg(COLOR_DIM),
    ));
    spans.push(Span::styled(filter, Style::default().fg(COLOR_ACCENT)));
    if !query.is_empty() {
        spans.push(Span::styled(
            format!("   {} of {}", view.rows.len(), view.total),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(COLOR_INPUT_BG));
    frame.render_widget(bar, area);
}

fn render_table(frame: &mut Frame, area: Rect, view: &ListView, cursor: usize, ctx: &LayoutContext) {
    let indices = column_indices(view.columns, ctx.visible_columns(view.columns.len()));
    let status_column = view.columns.iter().position(|c| *c == "Status");

    let header = TableRow::new(indices.iter().map(|&i| {
        Cell::from(view.columns[i]).style(
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = view.rows.iter().map(|row| {
        TableRow::new(indices.iter().map(|&i| {
            let text = row.cells.get(i).cloned().unwrap_or_default();
            let style = if Some(i) == status_column {
                Style::default().fg(status_color(&text))
            } else {
                Style::default().fg(Color::Gray)
            };
            Cell::from(text).style(style)
        }))
    });

    let widths: Vec<Constraint> = indices.iter().map(|&i| column_width(view.columns[i])).collect();
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default()
                .bg(COLOR_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(cursor.min(view.rows.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut state);
}

pub fn render_list(frame: &mut Frame, area: Rect, app: &App, kind: EntityKind, ctx: &LayoutContext) {
    let view = app.list_view(kind);

    let title = format!(" {} ", kind.title());
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    render_search_bar(frame, chunks[0], app, kind, &view);

    let indicator = match &view.status {
        RequestStatus::Loading => Some(StatusIndicatorType::spinner(
            "Loading…",
            app.tick_count as usize,
        )),
        RequestStatus::Failed(message) => Some(StatusIndicatorType::error(
            format!("Could not load {}", kind.title().to_lowercase()),
            Some(message.clone()),
        )),
        _ if view.rows.is_empty() && view.total > 0 => {
            Some(StatusIndicatorType::info("No records match the search"))
        }
        _ if view.rows.is_empty() => Some(StatusIndicatorType::info("No records")),
        _ => None,
    };

    match indicator {
        Some(indicator) => {
            let lines = render_status_indicator(&indicator, chunks[2].width as usize);
            frame.render_widget(Paragraph::new(lines), chunks[2]);
        }
        None => render_table(frame, chunks[2], &view, app.cursor(kind), ctx),
    }
}
