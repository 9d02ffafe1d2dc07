//! Event handler for the TUI
//!
//! Routes key presses to the open dialog or to the active page.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::wizard::StepId;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    // Keys that work on every page, including while typing
    match key.code {
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='4') if key.modifiers.contains(KeyModifiers::ALT) => {
            jump_to_number(app, c);
            return Ok(());
        }
        _ => {}
    }

    match app.current_step() {
        StepId::Info => handle_info_key(app, key),
        StepId::Plan => handle_plan_key(app, key),
        StepId::AddOns => handle_add_ons_key(app, key),
        StepId::Summary => handle_summary_key(app, key),
        StepId::Confirmation => {
            handle_confirmation_key(app, key);
            Ok(())
        }
    }
}

fn jump_to_number(app: &mut App, c: char) {
    if let Some(step) = c.to_digit(10).and_then(|n| StepId::from_index(n as usize)) {
        app.jump_to(step);
    }
}

/// Navigation keys shared by the pages without text entry
///
/// Returns false if the key was not handled.
fn handle_page_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.next(),
        KeyCode::Esc => app.back(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char(c @ '1'..='4') => jump_to_number(app, c),
        _ => return false,
    }
    true
}

fn handle_info_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.next(),
        KeyCode::Esc => app.back(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.edit_focused(|input| input.move_left())?,
        KeyCode::Right => app.edit_focused(|input| input.move_right())?,
        KeyCode::Home => app.edit_focused(|input| input.move_start())?,
        KeyCode::End => app.edit_focused(|input| input.move_end())?,
        KeyCode::Backspace => app.edit_focused(|input| input.backspace())?,
        KeyCode::Delete => app.edit_focused(|input| input.delete())?,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit_focused(|input| input.insert(c))?
        }
        _ => {}
    }
    Ok(())
}

fn handle_plan_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if handle_page_key(app, key) {
        return Ok(());
    }

    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') | KeyCode::Char('l') => {
            app.move_plan(true)?
        }
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Char('h') => {
            app.move_plan(false)?
        }
        KeyCode::Char(' ') | KeyCode::Char('b') => app.toggle_billing(),
        _ => {}
    }
    Ok(())
}

fn handle_add_ons_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if handle_page_key(app, key) {
        return Ok(());
    }

    match key.code {
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => app.focus_next(),
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => app.focus_prev(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_focused_add_on(),
        KeyCode::Char('b') => app.toggle_billing(),
        _ => {}
    }
    Ok(())
}

fn handle_summary_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if handle_page_key(app, key) {
        return Ok(());
    }

    match key.code {
        // "Change" link next to the plan line
        KeyCode::Char('c') => app.jump_to(StepId::Plan),
        KeyCode::Char('b') => app.toggle_billing(),
        _ => {}
    }
    Ok(())
}

fn handle_confirmation_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => match key.code {
            KeyCode::Esc
            | KeyCode::Enter
            | KeyCode::F(1)
            | KeyCode::Char('?')
            | KeyCode::Char('q') => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::ConfirmQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.quit();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keyboard_walkthrough() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        type_str(&mut app, "Yasin Walum");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "meekmill@gmail.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "+256 785 451 455");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), StepId::Plan);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), StepId::AddOns);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), StepId::Summary);

        press(&mut app, KeyCode::Enter);
        assert!(app.wizard.is_complete());

        let submission = app.submission().unwrap();
        assert_eq!(submission.values.plan, "advanced");
        assert_eq!(submission.summary.total, crate::models::Money::from_dollars(130));

        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit);
    }

    #[test]
    fn test_digits_are_typed_on_info_page() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_step(), StepId::Info);
        assert_eq!(app.wizard.values().name, "3");
    }

    #[test]
    fn test_digits_jump_outside_text_inputs() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT)),
        )
        .unwrap();
        assert_eq!(app.current_step(), StepId::Plan);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.current_step(), StepId::Summary);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.current_step(), StepId::Plan);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_step(), StepId::Info);
    }

    #[test]
    fn test_quit_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.jump_to(StepId::Plan);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmQuit);
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.wizard.values().name, "");
    }
}
