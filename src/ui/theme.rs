//! Color theme constants for the CRM UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background of the highlighted table row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 44, 60);

/// Requests in flight
pub const COLOR_LOADING: Color = Color::Yellow;

/// Success state - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error state - red
pub const COLOR_ERROR: Color = Color::Red;

/// Key names in the footer hints
pub const COLOR_KEY: Color = Color::Cyan;

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Color for a status shown in a table cell, given its code or label.
///
/// Groups the statuses every entity uses by how settled they are.
pub fn status_color(status: &str) -> Color {
    let code = status.trim().to_uppercase().replace([' ', '-'], "_");
    match code.as_str() {
        "ACTIVE" | "COMPLETED" | "DELIVERED" | "APPROVED" | "IN_STOCK" | "ARRIVED"
        | "RELEASED" | "VIP" => COLOR_SUCCESS,
        "CANCELLED" | "TERMINATED" | "EXPIRED" | "OUT_OF_STOCK" | "LOCKED" | "DELAYED"
        | "DISCONTINUED" => COLOR_ERROR,
        "PENDING" | "PROCESSING" | "LOW_STOCK" | "IN_PROGRESS" | "ON_HOLD" | "SHIPPING"
        | "SHIPPED" | "IN_TRANSIT" | "CUSTOMS_CLEARANCE" | "NEGOTIATION"
        | "PENDING_APPROVAL" => COLOR_LOADING,
        _ => Color::Gray,
    }
}
