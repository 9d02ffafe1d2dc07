//! TUI Views module
//!
//! The step indicator sidebar, the active page and the status bar.

pub mod page;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let view = app.view();

    sidebar::render(frame, &view, layout.sidebar);
    page::render(frame, app, &view, layout.main);
    status_bar::render(frame, app, &view, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(notification, toast_rect(layout.main));
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmQuit => {
            dialogs::confirm::render(frame, "Quit without confirming your subscription?")
        }
        ActiveDialog::None => {}
    }
}
