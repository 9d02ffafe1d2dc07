//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on exit and from the panic
//! hook.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::submission::Submission;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the sign-up wizard
///
/// Returns the submission if the user confirmed before quitting.
pub fn run_tui(settings: &Settings) -> Result<Option<Submission>> {
    let mut terminal = init_terminal()?;
    let result = run_app(&mut terminal, settings);
    restore_terminal()?;
    result
}

fn run_app(terminal: &mut Tui, settings: &Settings) -> Result<Option<Submission>> {
    let mut app = App::new(settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(10)));
    info!("Wizard started");

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?)?;
    }

    info!(submitted = app.wizard.is_complete(), "Wizard closed");
    Ok(app.into_submission())
}
