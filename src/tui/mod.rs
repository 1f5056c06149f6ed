//! Terminal User Interface module
//!
//! A full-screen ratatui interface: a summary sidebar, the expense list,
//! the investment suggestion panel, and modal dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
