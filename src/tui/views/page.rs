//! Page view
//!
//! Draws the active step from the projected `Page`: heading, step content and
//! navigation buttons.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::BillingPeriod;
use crate::tui::app::App;
use crate::tui::layout::{slide_rect, PageLayout};
use crate::tui::widgets::InputField;
use crate::view::{
    AddOnOption, NavButtons, Page, PlanOption, SummaryView, TextFieldView, WizardView,
};
use crate::wizard::StepId;

/// Render the active page
pub fn render(frame: &mut Frame, app: &App, view: &WizardView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let offset = app.slide.map(|slide| slide.offset()).unwrap_or(0);
    let layout = PageLayout::new(slide_rect(inner, offset));

    render_header(frame, view, layout.header);

    match &view.page {
        Page::Info { fields } => render_info(frame, app, fields, layout.body),
        Page::Plan {
            options,
            billing,
            error,
        } => render_plan(frame, options, *billing, error.as_deref(), layout.body),
        Page::AddOns { options } => render_add_ons(frame, app, options, layout.body),
        Page::Summary(summary) => render_summary(frame, summary.as_ref(), layout.body),
        Page::Confirmation => render_confirmation(frame, app, layout.body),
    }

    render_nav(frame, view.nav, layout.nav);
}

fn render_header(frame: &mut Frame, view: &WizardView, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        view.title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    // The confirmation body carries its own text
    if !view.current.is_terminal() {
        lines.push(Line::from(Span::styled(
            view.subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_info(frame: &mut Frame, app: &App, fields: &[TextFieldView], area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    let focused = app.focused_field();
    for (field, row) in fields.iter().zip(rows.iter()) {
        let Some(input) = app.input(field.field) else {
            continue;
        };
        frame.render_widget(
            InputField {
                label: field.label,
                input,
                placeholder: field.placeholder,
                error: field.error.as_deref(),
                focused: focused == Some(field.field),
            },
            *row,
        );
    }
}

fn render_plan(
    frame: &mut Frame,
    options: &[PlanOption],
    billing: BillingPeriod,
    error: Option<&str>,
    area: Rect,
) {
    let mut lines = Vec::new();

    for option in options {
        let (marker, style) = if option.selected {
            (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::White))
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{:<10}", option.name), style),
            Span::styled(format!("{:>8}", option.price_label), Style::default().fg(Color::Gray)),
        ];
        if let Some(bonus) = option.bonus {
            spans.push(Span::styled(
                format!("  {}", bonus),
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(billing_switch(billing));

    if let Some(error) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn billing_switch(billing: BillingPeriod) -> Line<'static> {
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);

    let (monthly, yearly, knob) = match billing {
        BillingPeriod::Monthly => (active, inactive, "[■  ]"),
        BillingPeriod::Yearly => (inactive, active, "[  ■]"),
    };

    Line::from(vec![
        Span::styled(" Monthly ", monthly),
        Span::styled(knob, Style::default().fg(Color::White)),
        Span::styled(" Yearly", yearly),
        Span::styled("   [b] switch", Style::default().fg(Color::Yellow)),
    ])
}

fn render_add_ons(frame: &mut Frame, app: &App, options: &[AddOnOption], area: Rect) {
    let mut lines = Vec::new();

    for (index, option) in options.iter().enumerate() {
        let focused = index == app.focus;
        let check = if option.selected { "[x]" } else { "[ ]" };
        let name_style = match (focused, option.selected) {
            (true, _) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::White),
        };
        let pointer = if focused { "▶" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(pointer, Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {} ", check), name_style),
            Span::styled(format!("{:<22}", option.name), name_style),
            Span::styled(option.price_label.clone(), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", option.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_summary(frame: &mut Frame, summary: Option<&SummaryView>, area: Rect) {
    let Some(summary) = summary else {
        let message = Paragraph::new(Line::from(Span::styled(
            "Select a plan to see the summary. [c] change plan",
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, area);
        return;
    };

    let width = area.width.saturating_sub(2) as usize;
    let row = |label: &str, price: &str| -> String {
        let gap = width
            .saturating_sub(label.chars().count())
            .saturating_sub(price.chars().count())
            .max(1);
        format!(" {}{}{}", label, " ".repeat(gap), price)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            row(&summary.plan_label, &summary.plan_price),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(" "),
            Span::styled("[c] Change", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            format!(" {}", "─".repeat(width.saturating_sub(1))),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for (label, price) in &summary.add_ons {
        lines.push(Line::from(Span::styled(
            row(label, price),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        row(&summary.total_caption, &summary.total_price),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_confirmation(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  ✔",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            StepId::Confirmation.subtitle(),
            Style::default().fg(Color::Gray),
        )),
    ];

    if let Some(submission) = app.submission() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Confirmation: ", Style::default().fg(Color::White)),
            Span::styled(
                submission.id.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_nav(frame: &mut Frame, nav: NavButtons, area: Rect) {
    let mut left = Vec::new();
    if nav.back {
        left.push(Span::styled("[Esc]", Style::default().fg(Color::Yellow)));
        left.push(Span::styled(" Go Back", Style::default().fg(Color::Gray)));
    }

    let right: Vec<Span> = if nav.confirm {
        vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::styled(
                " Confirm ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    } else if nav.next {
        vec![
            Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
            Span::styled(
                " Next Step ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    } else {
        Vec::new()
    };

    let used: usize = left
        .iter()
        .chain(right.iter())
        .map(|s| s.content.chars().count())
        .sum();
    let padding = (area.width as usize).saturating_sub(used);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(right);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
