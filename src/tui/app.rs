//! Application state for the TUI
//!
//! The App holds the wizard session plus the presentation state the wizard
//! does not care about: keyboard focus, text cursors, the open dialog, toasts
//! and the slide animation.

use tracing::{error, warn};

use crate::config::Settings;
use crate::error::SignupResult;
use crate::form::{FieldName, ValidationOutcome};
use crate::models::{ADD_ONS, PLANS};
use crate::submission::{LogSink, MemorySink, Submission, SubmissionSink, TeeSink};
use crate::view::WizardView;
use crate::wizard::{Direction, SignupWizard, StepId, SubmitOutcome, Transition};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Ticks a page slide lasts
pub const SLIDE_FRAMES: u16 = 6;

/// Columns the page moves per tick
const SLIDE_STEP: i16 = 3;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmQuit,
}

/// A page slide in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub frames_left: u16,
    pub direction: Direction,
}

impl Slide {
    /// Horizontal offset of the page for the current frame
    pub fn offset(&self) -> i16 {
        self.frames_left as i16 * SLIDE_STEP * self.direction.sign()
    }
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,

    pub wizard: SignupWizard,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Focused row on the current page
    pub focus: usize,

    pub name_input: TextInput,
    pub email_input: TextInput,
    pub phone_input: TextInput,

    pub notifications: NotificationQueue,

    pub slide: Option<Slide>,

    /// Receives the snapshot when the wizard is confirmed
    submissions: MemorySink,
}

impl<'a> App<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            wizard: SignupWizard::new(settings.default_billing),
            should_quit: false,
            active_dialog: ActiveDialog::None,
            focus: 0,
            name_input: TextInput::new(),
            email_input: TextInput::new(),
            phone_input: TextInput::new(),
            notifications: NotificationQueue::new(),
            slide: None,
            submissions: MemorySink::new(),
        }
    }

    /// Project the wizard for rendering
    pub fn view(&self) -> WizardView {
        WizardView::project(&self.wizard, &self.settings.currency_symbol)
    }

    pub fn current_step(&self) -> StepId {
        self.wizard.current_step()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Quit, asking first if the sign-up has not been confirmed
    pub fn request_quit(&mut self) {
        if self.wizard.is_complete() {
            self.quit();
        } else {
            self.open_dialog(ActiveDialog::ConfirmQuit);
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Number of focusable rows on the current page
    pub fn focus_count(&self) -> usize {
        match self.current_step() {
            StepId::Info => StepId::Info.fields().len(),
            StepId::Plan => PLANS.len(),
            StepId::AddOns => ADD_ONS.len(),
            StepId::Summary | StepId::Confirmation => 0,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// The text field with keyboard focus, on the info page
    pub fn focused_field(&self) -> Option<FieldName> {
        if self.current_step() != StepId::Info {
            return None;
        }
        StepId::Info.fields().get(self.focus).copied()
    }

    pub fn input(&self, field: FieldName) -> Option<&TextInput> {
        match field {
            FieldName::Name => Some(&self.name_input),
            FieldName::Email => Some(&self.email_input),
            FieldName::Phone => Some(&self.phone_input),
            _ => None,
        }
    }

    fn input_mut(&mut self, field: FieldName) -> Option<&mut TextInput> {
        match field {
            FieldName::Name => Some(&mut self.name_input),
            FieldName::Email => Some(&mut self.email_input),
            FieldName::Phone => Some(&mut self.phone_input),
            _ => None,
        }
    }

    /// Apply an edit to the focused input and store the new text in the form
    ///
    /// Cursor moves leave the form alone, so the field keeps its inline error.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) -> SignupResult<()> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        let Some(input) = self.input_mut(field) else {
            return Ok(());
        };
        let before = input.value().to_string();
        edit(input);
        if input.value() == before {
            return Ok(());
        }
        let value = input.value().to_string();
        self.wizard.set_field(field, value)
    }

    /// Select the plan at a catalog position
    pub fn select_plan(&mut self, index: usize) -> SignupResult<()> {
        let Some(plan) = PLANS.get(index) else {
            return Ok(());
        };
        self.focus = index;
        self.wizard.set_field(FieldName::Plan, plan.id.as_str())
    }

    /// Move the plan selection, wrapping around the catalog
    pub fn move_plan(&mut self, forward: bool) -> SignupResult<()> {
        let count = PLANS.len();
        let index = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
        self.select_plan(index)
    }

    pub fn toggle_focused_add_on(&mut self) {
        if let Some(add_on) = ADD_ONS.get(self.focus) {
            self.wizard.form_mut().toggle_add_on(add_on.id);
        }
    }

    pub fn toggle_billing(&mut self) {
        self.wizard.form_mut().toggle_billing_period();
    }

    /// Enter: next step, or confirm on the summary
    pub fn next(&mut self) {
        if self.current_step() == StepId::Summary {
            self.submit();
        } else {
            let transition = self.wizard.advance();
            self.apply_transition(transition);
        }
    }

    /// Esc: previous step
    pub fn back(&mut self) {
        let transition = self.wizard.retreat();
        self.apply_transition(transition);
    }

    /// Step indicator selection
    pub fn jump_to(&mut self, step: StepId) {
        let transition = self.wizard.jump_to(step);
        self.apply_transition(transition);
    }

    /// Confirm the sign-up
    pub fn submit(&mut self) {
        let mut log = LogSink;
        let result = {
            let sinks: Vec<&mut dyn SubmissionSink> = vec![&mut self.submissions, &mut log];
            let mut sink = TeeSink::new(sinks);
            self.wizard.submit(&mut sink)
        };

        match result {
            Ok(SubmitOutcome::Submitted(_)) => {
                self.notifications
                    .push(Notification::success("Subscription confirmed"));
                self.enter_step(StepId::Confirmation);
            }
            Ok(SubmitOutcome::Invalid {
                outcome,
                first_invalid,
            }) => {
                warn!(step = first_invalid.index(), "Confirmation blocked by invalid fields");
                self.jump_to(first_invalid);
                self.focus_first_error(&outcome);
                self.notifications
                    .push(Notification::warning(describe_errors(&outcome)));
            }
            Ok(SubmitOutcome::Ignored) => {}
            Err(e) => {
                // The wizard is already on the confirmation screen
                error!(error = %e, "Submission sink failed");
                self.notifications
                    .push(Notification::error(format!("Submission failed: {}", e)));
                self.enter_step(StepId::Confirmation);
            }
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Moved { to, .. } => self.enter_step(to),
            Transition::Blocked(outcome) => {
                self.focus_first_error(&outcome);
                self.notifications
                    .push(Notification::warning(describe_errors(&outcome)));
            }
            Transition::Ignored => {}
        }
    }

    /// Reset page state after the current step changed
    fn enter_step(&mut self, step: StepId) {
        self.focus = match step {
            StepId::Plan => self
                .wizard
                .values()
                .selected_plan()
                .and_then(|selected| PLANS.iter().position(|p| p.id == selected.id))
                .unwrap_or(0),
            _ => 0,
        };

        if self.settings.animate_transitions {
            self.slide = Some(Slide {
                frames_left: SLIDE_FRAMES,
                direction: self.wizard.direction(),
            });
        }
    }

    fn focus_first_error(&mut self, outcome: &ValidationOutcome) {
        if let Some(position) = self
            .current_step()
            .fields()
            .iter()
            .position(|field| outcome.errors.contains_key(field))
        {
            self.focus = position;
        }
    }

    /// Advance timers
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();

        if let Some(slide) = self.slide.as_mut() {
            slide.frames_left = slide.frames_left.saturating_sub(1);
            if slide.frames_left == 0 {
                self.slide = None;
            }
        }
    }

    /// The confirmed submission, once there is one
    pub fn submission(&self) -> Option<&Submission> {
        self.submissions.last()
    }

    pub fn into_submission(mut self) -> Option<Submission> {
        self.submissions.take().pop()
    }
}

fn describe_errors(outcome: &ValidationOutcome) -> String {
    outcome
        .errors
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}
