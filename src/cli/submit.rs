//! Submit CLI command
//!
//! Runs a complete sign-up without the TUI: the values go through the same
//! wizard, and the submission is written to stdout.

use std::io::Write;

use clap::Args;

use super::catalog::SelectionArgs;
use crate::config::Settings;
use crate::display::format_validation_errors;
use crate::error::{SignupError, SignupResult};
use crate::form::FieldName;
use crate::models::AddOnId;
use crate::submission::{LogSink, OutputFormat, Submission, SubmissionSink, TeeSink, WriterSink};
use crate::wizard::{SignupWizard, StepId, SubmitOutcome};

/// Arguments of the `submit` command
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Full name
    #[arg(long)]
    pub name: String,
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Phone number
    #[arg(long)]
    pub phone: String,
    #[command(flatten)]
    pub selection: SelectionArgs,
    /// Output format (json, yaml); defaults to the configured format
    #[arg(short, long)]
    pub format: Option<String>,
}

impl SubmitArgs {
    fn output_format(&self, settings: &Settings) -> SignupResult<OutputFormat> {
        match &self.format {
            Some(format) => OutputFormat::parse(format).ok_or_else(|| {
                SignupError::Validation(format!(
                    "Invalid output format: '{}'. Valid formats: json, yaml",
                    format
                ))
            }),
            None => Ok(settings.submission_format),
        }
    }
}

/// Fill a wizard from the arguments and confirm it
///
/// Failed field validation is returned as a `Validation` error after the
/// failures have been written to `errors`.
pub fn submit<W: Write, E: Write>(
    args: &SubmitArgs,
    settings: &Settings,
    out: W,
    mut errors: E,
) -> SignupResult<Submission> {
    let plan = args.selection.resolve_plan()?;
    let add_ons = args.selection.resolve_add_ons()?;
    let format = args.output_format(settings)?;

    let mut wizard = SignupWizard::new(args.selection.billing_period(settings));
    wizard.set_field(FieldName::Name, args.name.as_str())?;
    wizard.set_field(FieldName::Email, args.email.as_str())?;
    wizard.set_field(FieldName::Phone, args.phone.as_str())?;
    wizard.set_field(FieldName::Plan, plan.id.as_str())?;
    for add_on in AddOnId::ALL {
        wizard.set_field(FieldName::for_add_on(add_on), add_ons.contains(&add_on))?;
    }

    wizard.jump_to(StepId::Summary);

    let mut writer = WriterSink::new(out, format);
    let mut log = LogSink;
    let sinks: Vec<&mut dyn SubmissionSink> = vec![&mut writer, &mut log];
    let outcome = wizard.submit(&mut TeeSink::new(sinks))?;

    match outcome {
        SubmitOutcome::Submitted(submission) => Ok(submission),
        SubmitOutcome::Invalid { outcome, .. } => {
            write!(errors, "{}", format_validation_errors(&outcome))?;
            Err(SignupError::Validation(format!(
                "{} field(s) failed validation",
                outcome.errors.len()
            )))
        }
        SubmitOutcome::Ignored => Err(SignupError::Submission(
            "The wizard did not reach the summary step".into(),
        )),
    }
}

/// Handle the `submit` command
pub fn handle_submit_command(args: &SubmitArgs, settings: &Settings) -> SignupResult<()> {
    submit(args, settings, std::io::stdout(), std::io::stderr())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::catalog::BillingArgs;
    use crate::models::Money;

    fn args(email: &str) -> SubmitArgs {
        SubmitArgs {
            name: "Yasin Walum".into(),
            email: email.into(),
            phone: "+256 785 451 455".into(),
            selection: SelectionArgs {
                plan: "advanced".into(),
                billing: BillingArgs::yearly(),
                add_ons: vec!["profile".into()],
            },
            format: None,
        }
    }

    #[test]
    fn test_submit_writes_json() {
        let mut out = Vec::new();
        let submission = submit(&args("meekmill@gmail.com"), &Settings::default(), &mut out, Vec::new()).unwrap();

        assert_eq!(submission.summary.total, Money::from_dollars(140));
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["values"]["plan"], "advanced");
        assert_eq!(parsed["values"]["billing_period"], "yearly");
    }

    #[test]
    fn test_submit_reports_invalid_fields() {
        let mut out = Vec::new();
        let mut errors = Vec::new();
        let err = submit(&args("not-an-email"), &Settings::default(), &mut out, &mut errors)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(out.is_empty());
        let errors = String::from_utf8(errors).unwrap();
        assert!(errors.contains("Invalid email"));
    }

    #[test]
    fn test_submit_rejects_unknown_format() {
        let mut args = args("meekmill@gmail.com");
        args.format = Some("toml".into());
        let err = submit(&args, &Settings::default(), Vec::new(), Vec::new()).unwrap_err();
        assert!(err.is_validation());
    }
}
