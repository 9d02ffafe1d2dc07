//! Status bar view
//!
//! Shows the current step, billing period, running total and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::pricing;
use crate::tui::app::App;
use crate::view::WizardView;
use crate::wizard::StepId;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, view: &WizardView, area: Rect) {
    let values = app.wizard.values();
    let mut spans = vec![];

    if view.current.is_terminal() {
        spans.push(Span::styled(
            " Submitted ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            format!(" Step {}/{}: {}", view.current.index(), view.steps.len(), view.current.name()),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        values.billing_period.to_string(),
        Style::default().fg(Color::White),
    ));

    if let Ok(summary) = pricing::summarize(values) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Total: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            pricing::price_label(
                summary.total,
                values.billing_period,
                &app.settings.currency_symbol,
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hints = key_hints(view.current);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(step: StepId) -> &'static str {
    match step {
        StepId::Info => " Tab:Field  Enter:Next  F1:Help  ^C:Quit ",
        StepId::Plan => " ←/→:Plan  b:Billing  Enter:Next  Esc:Back ",
        StepId::AddOns => " Space:Toggle  Enter:Next  Esc:Back ",
        StepId::Summary => " c:Change  Enter:Confirm  Esc:Back ",
        StepId::Confirmation => " Enter:Exit ",
    }
}
