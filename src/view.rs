//! View projection
//!
//! A pure function from wizard state to a description of what the screen
//! shows: the step indicator, the active page with its inline errors, and
//! the navigation buttons. Renderers draw this and never read the wizard
//! directly.

use crate::form::FieldName;
use crate::models::{AddOnId, BillingPeriod, PlanId, ADD_ONS, PLANS};
use crate::pricing;
use crate::wizard::{Direction, SignupWizard, StepId};

/// One entry of the step indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub step: StepId,
    pub number: usize,
    pub name: &'static str,
    /// The step being shown
    pub active: bool,
    /// At or before the step being shown
    pub reached: bool,
}

/// A text input with its inline error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub field: FieldName,
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOption {
    pub id: PlanId,
    pub name: &'static str,
    pub price_label: String,
    pub bonus: Option<&'static str>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOnOption {
    pub id: AddOnId,
    pub name: &'static str,
    pub description: &'static str,
    pub price_label: String,
    pub selected: bool,
}

/// Priced lines of the summary step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub plan_label: String,
    pub plan_price: String,
    pub add_ons: Vec<(String, String)>,
    pub total_caption: String,
    pub total_price: String,
}

/// Content of the active step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Info {
        fields: Vec<TextFieldView>,
    },
    Plan {
        options: Vec<PlanOption>,
        billing: BillingPeriod,
        error: Option<String>,
    },
    AddOns {
        options: Vec<AddOnOption>,
    },
    /// `None` when the plan does not resolve
    Summary(Option<SummaryView>),
    Confirmation,
}

/// Which navigation buttons are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavButtons {
    pub back: bool,
    pub next: bool,
    pub confirm: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub steps: Vec<StepIndicator>,
    pub current: StepId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub page: Page,
    pub nav: NavButtons,
    pub direction: Direction,
}

impl WizardView {
    /// Project the wizard state
    pub fn project(wizard: &SignupWizard, currency: &str) -> Self {
        let current = wizard.current_step();

        let steps = StepId::INDICATED
            .iter()
            .map(|&step| StepIndicator {
                step,
                number: step.index(),
                name: step.name(),
                active: step == current,
                reached: step.index() <= current.index(),
            })
            .collect();

        let nav = if current.is_terminal() {
            NavButtons::default()
        } else {
            NavButtons {
                back: current != StepId::Info,
                next: current.index() < StepId::Summary.index(),
                confirm: current == StepId::Summary,
            }
        };

        Self {
            steps,
            current,
            title: current.title(),
            subtitle: current.subtitle(),
            page: project_page(wizard, current, currency),
            nav,
            direction: wizard.direction(),
        }
    }
}

fn project_page(wizard: &SignupWizard, step: StepId, currency: &str) -> Page {
    let form = wizard.form();
    let values = form.values();
    let period = values.billing_period;

    match step {
        StepId::Info => Page::Info {
            fields: StepId::Info
                .fields()
                .iter()
                .map(|&field| TextFieldView {
                    field,
                    label: field.label(),
                    value: form.text(field).to_string(),
                    placeholder: placeholder(field),
                    error: form.error(field).map(str::to_string),
                })
                .collect(),
        },
        StepId::Plan => {
            let selected = values.selected_plan().map(|p| p.id);
            Page::Plan {
                options: PLANS
                    .iter()
                    .map(|plan| PlanOption {
                        id: plan.id,
                        name: plan.display_name,
                        price_label: pricing::price_label(
                            pricing::price(plan, period),
                            period,
                            currency,
                        ),
                        bonus: pricing::yearly_bonus(period),
                        selected: selected == Some(plan.id),
                    })
                    .collect(),
                billing: period,
                error: form.error(FieldName::Plan).map(str::to_string),
            }
        }
        StepId::AddOns => Page::AddOns {
            options: ADD_ONS
                .iter()
                .map(|add_on| AddOnOption {
                    id: add_on.id,
                    name: add_on.display_name,
                    description: add_on.description,
                    price_label: pricing::add_on_label(
                        pricing::add_on_price(add_on, period),
                        period,
                        currency,
                    ),
                    selected: values.has_add_on(add_on.id),
                })
                .collect(),
        },
        StepId::Summary => Page::Summary(pricing::summarize(values).ok().map(|summary| {
            SummaryView {
                plan_label: summary.plan.label,
                plan_price: pricing::price_label(summary.plan.amount, period, currency),
                add_ons: summary
                    .add_ons
                    .into_iter()
                    .map(|line| {
                        (
                            line.label,
                            pricing::add_on_label(line.amount, period, currency),
                        )
                    })
                    .collect(),
                total_caption: pricing::total_caption(period),
                total_price: pricing::price_label(summary.total, period, currency),
            }
        })),
        StepId::Confirmation => Page::Confirmation,
    }
}

fn placeholder(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "e.g. Stephen King",
        FieldName::Email => "e.g. stephenking@lorem.com",
        FieldName::Phone => "e.g. +1 234 567 890",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::MemorySink;

    fn wizard_at(step: StepId) -> SignupWizard {
        let mut wizard = SignupWizard::new(BillingPeriod::Monthly);
        wizard.jump_to(step);
        wizard
    }

    #[test]
    fn test_step_indicator() {
        let view = WizardView::project(&wizard_at(StepId::AddOns), "$");
        assert_eq!(view.steps.len(), 4);
        let active: Vec<_> = view.steps.iter().filter(|s| s.active).map(|s| s.number).collect();
        assert_eq!(active, [3]);
        let reached = view.steps.iter().filter(|s| s.reached).count();
        assert_eq!(reached, 3);
    }

    #[test]
    fn test_nav_buttons() {
        let first = WizardView::project(&wizard_at(StepId::Info), "$").nav;
        assert_eq!(first, NavButtons { back: false, next: true, confirm: false });

        let middle = WizardView::project(&wizard_at(StepId::Plan), "$").nav;
        assert_eq!(middle, NavButtons { back: true, next: true, confirm: false });

        let summary = WizardView::project(&wizard_at(StepId::Summary), "$").nav;
        assert_eq!(summary, NavButtons { back: true, next: false, confirm: true });
    }

    #[test]
    fn test_info_page_shows_errors() {
        let mut wizard = wizard_at(StepId::Info);
        wizard.set_field(FieldName::Email, "not-an-email").unwrap();
        wizard.advance();

        let view = WizardView::project(&wizard, "$");
        let Page::Info { fields } = view.page else {
            panic!("expected info page");
        };
        let email = fields.iter().find(|f| f.field == FieldName::Email).unwrap();
        assert_eq!(email.value, "not-an-email");
        assert_eq!(email.error.as_deref(), Some("Invalid email"));
    }

    #[test]
    fn test_plan_page_yearly_labels() {
        let mut wizard = wizard_at(StepId::Plan);
        wizard.set_billing_period(BillingPeriod::Yearly);
        wizard.set_field(FieldName::Plan, "pro").unwrap();

        let view = WizardView::project(&wizard, "$");
        let Page::Plan { options, billing, .. } = view.page else {
            panic!("expected plan page");
        };
        assert_eq!(billing, BillingPeriod::Yearly);
        assert_eq!(options[0].price_label, "$90/yr");
        assert_eq!(options[0].bonus, Some("2 months free"));
        assert!(options[2].selected);
        assert!(!options[0].selected);
    }

    #[test]
    fn test_summary_page() {
        let mut wizard = wizard_at(StepId::Summary);
        wizard.set_field(FieldName::Service, true).unwrap();
        wizard.set_field(FieldName::Storage, true).unwrap();

        let view = WizardView::project(&wizard, "$");
        let Page::Summary(Some(summary)) = view.page else {
            panic!("expected summary page");
        };
        assert_eq!(summary.plan_label, "Arcade (Monthly)");
        assert_eq!(summary.plan_price, "$9/mo");
        assert_eq!(
            summary.add_ons,
            vec![
                ("Online service".to_string(), "+$1/mo".to_string()),
                ("Larger storage".to_string(), "+$2/mo".to_string()),
            ]
        );
        assert_eq!(summary.total_caption, "Total (per month)");
        assert_eq!(summary.total_price, "$12/mo");
    }

    #[test]
    fn test_confirmation_hides_nav() {
        let mut wizard = wizard_at(StepId::Info);
        wizard.set_field(FieldName::Name, "Yasin Walum").unwrap();
        wizard.set_field(FieldName::Email, "meekmill@gmail.com").unwrap();
        wizard.set_field(FieldName::Phone, "+256 785 451 455").unwrap();
        wizard.jump_to(StepId::Summary);
        wizard.submit(&mut MemorySink::new()).unwrap();

        let view = WizardView::project(&wizard, "$");
        assert_eq!(view.page, Page::Confirmation);
        assert_eq!(view.nav, NavButtons::default());
        assert_eq!(view.title, "Thank you!");
    }

    #[test]
    fn test_direction_follows_transitions() {
        let mut wizard = wizard_at(StepId::AddOns);
        assert_eq!(WizardView::project(&wizard, "$").direction, Direction::Forward);
        wizard.retreat();
        assert_eq!(WizardView::project(&wizard, "$").direction, Direction::Backward);
    }
}
