//! Sign-up wizard
//!
//! Bundles the sequencer and the form model of one interactive session. Hosts
//! (the TUI and the `submit` command) drive the wizard only through this type.

use crate::error::SignupResult;
use crate::form::{FieldName, FieldValue, FormModel, FormValues};
use crate::models::BillingPeriod;
use crate::submission::SubmissionSink;

use super::sequencer::{Direction, StepSequencer, SubmitOutcome, Transition};
use super::step::StepId;

/// One wizard session
#[derive(Debug, Clone, Default)]
pub struct SignupWizard {
    sequencer: StepSequencer,
    form: FormModel,
}

impl SignupWizard {
    /// Start a session on the first step
    pub fn new(billing: BillingPeriod) -> Self {
        Self {
            sequencer: StepSequencer::new(),
            form: FormModel::with_billing_period(billing),
        }
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormModel {
        &mut self.form
    }

    pub fn current_step(&self) -> StepId {
        self.sequencer.current()
    }

    pub fn direction(&self) -> Direction {
        self.sequencer.direction()
    }

    pub fn is_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    pub fn values(&self) -> &FormValues {
        self.form.values()
    }

    pub fn set_field(&mut self, name: FieldName, value: impl Into<FieldValue>) -> SignupResult<()> {
        self.form.set_field(name, value)
    }

    pub fn set_billing_period(&mut self, period: BillingPeriod) {
        self.form.set_billing_period(period);
    }

    pub fn advance(&mut self) -> Transition {
        self.sequencer.advance(&mut self.form)
    }

    pub fn retreat(&mut self) -> Transition {
        self.sequencer.retreat()
    }

    pub fn jump_to(&mut self, step: StepId) -> Transition {
        self.sequencer.jump_to(step)
    }

    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> SignupResult<SubmitOutcome> {
        self.sequencer.submit(&mut self.form, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddOnId, Money};
    use crate::submission::MemorySink;

    #[test]
    fn test_full_walkthrough() {
        let mut wizard = SignupWizard::new(BillingPeriod::Monthly);
        let mut sink = MemorySink::new();

        wizard.set_field(FieldName::Name, "Yasin Walum").unwrap();
        wizard.set_field(FieldName::Email, "meekmill@gmail.com").unwrap();
        wizard.set_field(FieldName::Phone, "+256 785 451 455").unwrap();
        assert!(wizard.advance().moved());

        wizard.set_field(FieldName::Plan, "arcade").unwrap();
        wizard.set_billing_period(BillingPeriod::Yearly);
        assert!(wizard.advance().moved());

        wizard.set_field(FieldName::Service, true).unwrap();
        wizard.set_field(FieldName::Storage, true).unwrap();
        assert!(wizard.advance().moved());
        assert_eq!(wizard.current_step(), StepId::Summary);

        let submission = match wizard.submit(&mut sink).unwrap() {
            SubmitOutcome::Submitted(submission) => submission,
            other => panic!("expected Submitted, got {:?}", other),
        };
        assert_eq!(submission.summary.total, Money::from_dollars(120));
        assert!(submission.values.has_add_on(AddOnId::LargerStorage));
        assert!(wizard.is_complete());
        assert_eq!(sink.submissions().len(), 1);
    }

    #[test]
    fn test_back_then_forward_keeps_values() {
        let mut wizard = SignupWizard::new(BillingPeriod::Monthly);
        wizard.set_field(FieldName::Name, "Yasin Walum").unwrap();
        wizard.set_field(FieldName::Email, "meekmill@gmail.com").unwrap();
        wizard.set_field(FieldName::Phone, "+256 785 451 455").unwrap();
        wizard.advance();
        wizard.retreat();

        assert_eq!(wizard.current_step(), StepId::Info);
        assert_eq!(wizard.direction(), Direction::Backward);
        assert_eq!(wizard.values().name, "Yasin Walum");
        assert!(wizard.advance().moved());
    }
}
