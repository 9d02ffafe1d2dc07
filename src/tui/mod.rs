//! Terminal User Interface module
//!
//! An interactive host for the sign-up wizard built on ratatui. Every frame
//! is drawn from `WizardView::project`; the TUI only keeps presentation state
//! of its own (focus, cursors, dialogs, toasts, the slide animation).

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
