//! Step sequencer
//!
//! State machine over the wizard steps. Leaving a step forward requires its
//! fields to validate; going back and jumping from the step indicator do not.
//! Every transition records the previous step before the current one so the
//! view can derive a slide direction.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::error::SignupResult;
use crate::form::{FieldName, FormModel, ValidationOutcome};
use crate::submission::{Submission, SubmissionSink};

use super::step::StepId;

/// Direction of the latest transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction from the sign of (to - from); staying put counts as forward
    pub fn between(from: StepId, to: StepId) -> Self {
        match to.index().cmp(&from.index()) {
            Ordering::Less => Self::Backward,
            Ordering::Equal | Ordering::Greater => Self::Forward,
        }
    }

    /// +1 or -1, for offsetting slide animations
    pub fn sign(&self) -> i16 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The current step changed (or was re-selected)
    Moved { from: StepId, to: StepId },
    /// Validation of the active step failed; nothing changed
    Blocked(ValidationOutcome),
    /// The request does not apply in the current state
    Ignored,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Result of a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed, the sink received the snapshot, the wizard is complete
    Submitted(Submission),
    /// Validation failed; the wizard stays on the summary step
    Invalid {
        outcome: ValidationOutcome,
        /// First step owning an invalid field
        first_invalid: StepId,
    },
    /// Not on the summary step, or already submitted
    Ignored,
}

/// Current and previous step of a wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardSession {
    pub current: StepId,
    pub previous: StepId,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self {
            current: StepId::Info,
            previous: StepId::Info,
        }
    }
}

/// The step sequencer
#[derive(Debug, Clone, Default)]
pub struct StepSequencer {
    session: WizardSession,
}

impl StepSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered step sequence
    pub fn steps(&self) -> &'static [StepId] {
        &StepId::ALL
    }

    pub fn current(&self) -> StepId {
        self.session.current
    }

    pub fn previous(&self) -> StepId {
        self.session.previous
    }

    pub fn session(&self) -> WizardSession {
        self.session
    }

    /// Direction of the latest transition
    pub fn direction(&self) -> Direction {
        Direction::between(self.session.previous, self.session.current)
    }

    /// Whether the submission went through
    pub fn is_complete(&self) -> bool {
        self.session.current.is_terminal()
    }

    fn move_to(&mut self, to: StepId) -> Transition {
        let from = self.session.current;
        self.session.previous = from;
        self.session.current = to;
        debug!(from = from.index(), to = to.index(), "Step transition");
        Transition::Moved { from, to }
    }

    /// Move to the next step if the active step's fields validate
    ///
    /// From the summary step the way forward is `submit`.
    pub fn advance(&mut self, form: &mut FormModel) -> Transition {
        let current = self.session.current;
        let next = match current.next() {
            Some(next) if !next.is_terminal() => next,
            _ => return Transition::Ignored,
        };

        let outcome = form.validate_fields(current.fields());
        if !outcome.success() {
            return Transition::Blocked(outcome);
        }

        self.move_to(next)
    }

    /// Move to the previous step without validation
    pub fn retreat(&mut self) -> Transition {
        let current = self.session.current;
        if current.is_terminal() {
            return Transition::Ignored;
        }
        match current.prev() {
            Some(prev) => self.move_to(prev),
            None => Transition::Ignored,
        }
    }

    /// Select a step from the step indicator, without validation
    ///
    /// Only indicated steps can be selected, and a completed session stays on
    /// the confirmation screen.
    pub fn jump_to(&mut self, step: StepId) -> Transition {
        if self.is_complete() || !StepId::INDICATED.contains(&step) {
            return Transition::Ignored;
        }
        self.move_to(step)
    }

    /// Validate everything and hand the snapshot to the sink
    ///
    /// On success the wizard moves to the confirmation step before the sink is
    /// called, so the sink runs exactly once per session even if it fails.
    pub fn submit(
        &mut self,
        form: &mut FormModel,
        sink: &mut dyn SubmissionSink,
    ) -> SignupResult<SubmitOutcome> {
        if self.session.current != StepId::Summary {
            return Ok(SubmitOutcome::Ignored);
        }

        let outcome = form.validate_all();
        if !outcome.success() {
            let first_invalid = first_invalid_step(outcome.errors.keys().copied());
            return Ok(SubmitOutcome::Invalid {
                outcome,
                first_invalid,
            });
        }

        let submission = Submission::new(form.get_values())?;
        self.move_to(StepId::Confirmation);
        info!(id = %submission.id, "Submitting");
        sink.submit(&submission)?;

        Ok(SubmitOutcome::Submitted(submission))
    }
}

fn first_invalid_step(fields: impl Iterator<Item = FieldName>) -> StepId {
    fields
        .map(StepId::owning)
        .min()
        .unwrap_or(StepId::Info)
}
