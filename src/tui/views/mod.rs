//! TUI views
//!
//! The summary sidebar, the expense list, the suggestion panel, and the
//! status bar, plus the dialog dispatch.

pub mod expenses;
pub mod sidebar;
pub mod status_bar;
pub mod suggestions;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);
    expenses::render(frame, app, layout.expenses);
    suggestions::render(frame, app, layout.suggestions);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::Salary => dialogs::salary::render(frame, app),
        ActiveDialog::Goals => dialogs::goals::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
