//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: summary sidebar, expense list,
//! suggestion panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (budget summary and goals)
    pub sidebar: Rect,
    /// Expense list area
    pub expenses: Rect,
    /// Investment suggestions area
    pub suggestions: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        // Split into main area and status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into sidebar and content
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(34), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        // Split content into expense list and suggestions
        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),        // Expenses
                Constraint::Percentage(35), // Suggestions
            ])
            .split(horizontal[1]);

        Self {
            sidebar: horizontal[0],
            expenses: content[0],
            suggestions: content[1],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
