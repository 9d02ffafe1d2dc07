//! Help dialog
//!
//! Shows the keys for the current page

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::wizard::StepId;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.current_step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(step: StepId) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Everywhere"),
        Line::from(""),
        key_line("Enter", "Next step / confirm"),
        key_line("Esc", "Go back"),
        key_line("Alt+1-4", "Jump to a step"),
        key_line("F1", "Show/hide help"),
        key_line("Ctrl+C", "Quit immediately"),
        Line::from(""),
    ];

    match step {
        StepId::Info => {
            lines.push(section("Personal info"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/↓", "Next field"));
            lines.push(key_line("Shift+Tab/↑", "Previous field"));
            lines.push(key_line("←/→", "Move the cursor"));
        }
        StepId::Plan => {
            lines.push(section("Select plan"));
            lines.push(Line::from(""));
            lines.push(key_line("←/→ j/k", "Choose a plan"));
            lines.push(key_line("Space/b", "Switch monthly/yearly"));
            lines.push(key_line("1-4", "Jump to a step"));
            lines.push(key_line("q", "Quit"));
        }
        StepId::AddOns => {
            lines.push(section("Add-ons"));
            lines.push(Line::from(""));
            lines.push(key_line("↑/↓ j/k", "Move between add-ons"));
            lines.push(key_line("Space", "Toggle the add-on"));
            lines.push(key_line("b", "Switch monthly/yearly"));
            lines.push(key_line("1-4", "Jump to a step"));
            lines.push(key_line("q", "Quit"));
        }
        StepId::Summary => {
            lines.push(section("Summary"));
            lines.push(Line::from(""));
            lines.push(key_line("c", "Change the plan"));
            lines.push(key_line("b", "Switch monthly/yearly"));
            lines.push(key_line("1-4", "Jump to a step"));
            lines.push(key_line("q", "Quit"));
        }
        StepId::Confirmation => {
            lines.push(section("Done"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter/q", "Exit and print the submission"));
        }
    }

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}
