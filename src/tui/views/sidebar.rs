//! Sidebar view
//!
//! The step indicator. Steps can be selected directly with their number.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view::{StepIndicator, WizardView};

/// Render the step indicator
pub fn render(frame: &mut Frame, view: &WizardView, area: Rect) {
    let block = Block::default()
        .title(" Steps ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let mut lines = vec![Line::from("")];
    for step in &view.steps {
        lines.extend(step_lines(step));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Alt+1-4]", Style::default().fg(Color::Yellow)),
        Span::styled(" jump", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn step_lines(step: &StepIndicator) -> [Line<'static>; 2] {
    let badge_style = if step.active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if step.reached {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let name_style = if step.active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let indicator = if step.active { "▶" } else { " " };

    [
        Line::from(vec![
            Span::styled(indicator, Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {} ", step.number), badge_style),
            Span::styled(
                format!(" STEP {}", step.number),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", step.name.to_uppercase()),
            name_style,
        )),
    ]
}
