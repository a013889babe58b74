//! UI rendering for the CRM client
//!
//! Every screen draws from the [`App`] it is given and never mutates it:
//! - Login / forgot password: a centered dialog over a plain backdrop
//! - Dashboard, lists, details and forms: header tabs, body, footer hints
//! - A confirmation prompt, when open, overlays whatever is on screen
//!
//! ## Responsive Layout System
//!
//! Render functions receive a [`LayoutContext`] built from the frame size.
//! It decides dialog widths, whether panels stack, and how many table
//! columns a list shows.

mod chrome;
pub mod components;
mod dashboard;
mod detail;
mod form;
mod layout;
mod list;
mod login;
mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use theme::{
    status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_LOADING, COLOR_SUCCESS,
};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Screen};

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    match &app.screen {
        Screen::Login => login::render_login_screen(frame, app, &ctx),
        Screen::ForgotPassword => login::render_forgot_password_screen(frame, app, &ctx),
        screen => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header with tabs
                    Constraint::Min(0),    // Body
                    Constraint::Length(1), // Footer
                ])
                .split(area);

            chrome::render_header(frame, chunks[0], app, &ctx);
            match screen {
                Screen::Dashboard => dashboard::render_dashboard(frame, chunks[1], app, &ctx),
                Screen::List(kind) => list::render_list(frame, chunks[1], app, *kind, &ctx),
                Screen::Detail(..) => {
                    if let Some(view) = app.detail_view() {
                        detail::render_detail(frame, chunks[1], &view, app.tick_count);
                    }
                }
                Screen::CustomerForm | Screen::UserForm => {
                    form::render_entity_form(frame, chunks[1], app, &ctx)
                }
                Screen::Login | Screen::ForgotPassword => {}
            }
            chrome::render_footer(frame, chunks[2], app);
        }
    }

    if let Some(prompt) = &app.prompt {
        chrome::render_prompt(frame, area, &ctx, prompt);
    }
}
