//! Dashboard screen: KPI cards, top products and recent activity.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::format::{format_amount, format_date};
use crate::models::{DashboardData, TopProduct};
use crate::store::RequestStatus;

use super::components::{render_status_indicator, StatusIndicatorType};
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

/// Percent change against the previous period, signed and colored.
fn comparison_span(percent: f64) -> Span<'static> {
    let color = if percent < 0.0 { COLOR_ERROR } else { COLOR_SUCCESS };
    let arrow = if percent < 0.0 { "▼" } else { "▲" };
    Span::styled(
        format!("{} {:+.1}%", arrow, percent),
        Style::default().fg(color),
    )
}

fn kpis(data: &DashboardData) -> [(&'static str, String, Option<Span<'static>>); 4] {
    [
        (
            "Revenue",
            format_amount(Some(data.total_revenue)),
            Some(comparison_span(data.revenue_comparison)),
        ),
        ("New customers", data.new_customers.to_string(), None),
        ("Pending orders", data.pending_orders.to_string(), None),
        (
            "Inventory value",
            format_amount(Some(data.inventory_value)),
            None,
        ),
    ]
}

fn render_kpis(frame: &mut Frame, area: Rect, data: &DashboardData, ctx: &LayoutContext) {
    let cards = kpis(data);
    let direction = if ctx.should_stack_panels() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value, extra), chunk) in cards.into_iter().zip(chunks.iter()) {
        let mut spans = vec![Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(extra) = extra {
            spans.push(Span::raw("  "));
            spans.push(extra);
        }
        let para = if ctx.should_stack_panels() {
            Paragraph::new(Line::from(
                std::iter::once(Span::styled(
                    format!("{}: ", title),
                    Style::default().fg(COLOR_DIM),
                ))
                .chain(spans)
                .collect::<Vec<_>>(),
            ))
        } else {
            Paragraph::new(Line::from(spans)).block(panel(title))
        };
        frame.render_widget(para, *chunk);
    }
}

fn product_line(index: usize, product: &TopProduct) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:>2}. ", index + 1), Style::default().fg(COLOR_DIM)),
        Span::styled(product.name.clone(), Style::default().fg(Color::White)),
        Span::styled(
            format!("  ×{}", product.quantity),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if let Some(revenue) = product.revenue {
        spans.push(Span::styled(
            format!("  {}", format_amount(Some(revenue))),
            Style::default().fg(COLOR_SUCCESS),
        ));
    }
    Line::from(spans)
}

fn render_lists(frame: &mut Frame, area: Rect, data: &DashboardData, ctx: &LayoutContext) {
    let direction = if ctx.should_stack_panels() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let products: Vec<Line> = if data.top_products.is_empty() {
        vec![Line::from(Span::styled("  No sales yet", Style::default().fg(COLOR_DIM)))]
    } else {
        data.top_products
            .iter()
            .enumerate()
            .map(|(i, p)| product_line(i, p))
            .collect()
    };
    frame.render_widget(
        Paragraph::new(products).block(panel("Top products")),
        chunks[0],
    );

    let activities: Vec<Line> = if data.recent_activities.is_empty() {
        vec![Line::from(Span::styled("  Nothing recent", Style::default().fg(COLOR_DIM)))]
    } else {
        data.recent_activities
            .iter()
            .map(|a| {
                let mut spans = vec![Span::styled(
                    format!("{:<10} ", format_date(&a.timestamp)),
                    Style::default().fg(COLOR_DIM),
                )];
                if let Some(user) = &a.user {
                    spans.push(Span::styled(
                        format!("{} ", user),
                        Style::default().fg(Color::Gray),
                    ));
                }
                spans.push(Span::styled(
                    a.description.clone(),
                    Style::default().fg(Color::White),
                ));
                Line::from(spans)
            })
            .collect()
    };
    frame.render_widget(
        Paragraph::new(activities).block(panel("Recent activity")),
        chunks[1],
    );
}

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let slice = &app.store.state().dashboard;

    let indicator = match (&slice.status, &slice.data) {
        (RequestStatus::Failed(message), _) => Some(StatusIndicatorType::error(
            "Could not load the dashboard",
            Some(message.clone()),
        )),
        (RequestStatus::Loading, None) | (RequestStatus::Idle, None) => Some(
            StatusIndicatorType::spinner("Loading…", app.tick_count as usize),
        ),
        _ => None,
    };
    if let Some(indicator) = indicator {
        let lines = render_status_indicator(&indicator, area.width as usize);
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }
    let Some(data) = &slice.data else {
        return;
    };

    let kpi_height = if ctx.should_stack_panels() { 4 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(kpi_height), Constraint::Min(0)])
        .split(area);
    render_kpis(frame, chunks[0], data, ctx);
    render_lists(frame, chunks[1], data, ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::app::test_support::app;
    use crate::store::{Action, DashboardAction};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::from_rect(f.area());
                render_dashboard(f, f.area(), app, &ctx);
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

    #[test]
    fn test_comparison_sign() {
        assert_eq!(comparison_span(12.5).content, "▲ +12.5%");
        assert_eq!(comparison_span(-3.0).content, "▼ -3.0%");
    }

    #[tokio::test]
    async fn test_dashboard_loading_then_loaded() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, true);
        app.store
            .apply(Action::Dashboard(DashboardAction::Requested));
        assert!(draw(&app).contains("Loading…"));

        let data: DashboardData = serde_json::from_value(json!({
            "totalRevenue": 1250000,
            "newCustomers": 7,
            "pendingOrders": 3,
            "topProducts": [{"name": "Jasmine rice", "quantity": 40}],
            "recentActivities": [{"description": "Order ORD-9 shipped"}]
        }))
        .unwrap();
        app.store
            .apply(Action::Dashboard(DashboardAction::Succeeded(data)));
        let text = draw(&app);
        assert!(text.contains("1,250,000.00"));
        assert!(text.contains("Jasmine rice"));
        assert!(text.contains("Order ORD-9 shipped"));
    }

    #[tokio::test]
    async fn test_dashboard_failure_shows_message() {
        let mock = MockHttpClient::new();
        let (mut app, _) = app(&mock, true);
        app.store.apply(Action::Dashboard(DashboardAction::Failed(
            "HTTP 500: boom".to_string(),
        )));
        let text = draw(&app);
        assert!(text.contains("Could not load the dashboard"));
        assert!(text.contains("HTTP 500: boom"));
    }
}
