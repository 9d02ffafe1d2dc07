//! Step wizard
//!
//! The step sequence, the sequencer state machine, and the session facade
//! used by the hosts.

pub mod sequencer;
pub mod session;
pub mod step;

pub use sequencer::{Direction, StepSequencer, SubmitOutcome, Transition, WizardSession};
pub use session::SignupWizard;
pub use step::StepId;
