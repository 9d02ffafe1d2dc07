//! Submission callback
//!
//! The wizard hands the final snapshot to a `SubmissionSink` exactly once,
//! after full-schema validation. What the sink does with it is up to the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use tracing::info;
use uuid::Uuid;

use crate::error::{SignupError, SignupResult};
use crate::form::FormValues;
use crate::pricing::{self, PriceSummary};

/// The snapshot delivered on submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Confirmation id
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
    pub summary: PriceSummary,
}

impl Submission {
    /// Build a submission from validated values
    pub fn new(values: FormValues) -> SignupResult<Self> {
        let summary = pricing::summarize(&values)?;
        Ok(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
            summary,
        })
    }
}

/// Receives the submission snapshot
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission) -> SignupResult<()>;
}

/// Format used when writing a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse an output format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serialize a submission in the given format
pub fn render_submission(submission: &Submission, format: OutputFormat) -> SignupResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(submission)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(submission)?),
    }
}

/// Logs the submission as a tracing event
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &Submission) -> SignupResult<()> {
        info!(
            id = %submission.id,
            name = %submission.values.name,
            email = %submission.values.email,
            plan = %submission.values.plan,
            billing = %submission.values.billing_period,
            total = %submission.summary.total,
            "Subscription submitted"
        );
        Ok(())
    }
}

/// Writes the submission to any writer
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for WriterSink<W> {
    fn submit(&mut self, submission: &Submission) -> SignupResult<()> {
        let rendered = render_submission(submission, self.format)?;
        writeln!(self.writer, "{}", rendered.trim_end())
            .map_err(|e| SignupError::Submission(format!("Failed to write submission: {}", e)))?;
        self.writer
            .flush()
            .map_err(|e| SignupError::Submission(format!("Failed to flush submission: {}", e)))?;
        Ok(())
    }
}

/// Keeps the submissions it receives, for hosts that act after the wizard closes
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Vec<Submission>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions received so far
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// The latest submission, if any
    pub fn last(&self) -> Option<&Submission> {
        self.submissions.last()
    }

    pub fn take(&mut self) -> Vec<Submission> {
        std::mem::take(&mut self.submissions)
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, submission: &Submission) -> SignupResult<()> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}

/// Fans a submission out to several sinks in order
pub struct TeeSink<'a> {
    sinks: Vec<&'a mut dyn SubmissionSink>,
}

impl<'a> TeeSink<'a> {
    pub fn new(sinks: Vec<&'a mut dyn SubmissionSink>) -> Self {
        Self { sinks }
    }
}

impl SubmissionSink for TeeSink<'_> {
    fn submit(&mut self, submission: &Submission) -> SignupResult<()> {
        for sink in self.sinks.iter_mut() {
            sink.submit(submission)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddOnId, Money};

    fn sample() -> Submission {
        let mut values = FormValues {
            name: "Yasin Walum".into(),
            email: "meekmill@gmail.com".into(),
            phone: "+256 785 451 455".into(),
            ..FormValues::default()
        };
        values.add_ons.insert(AddOnId::OnlineService);
        Submission::new(values).unwrap()
    }

    #[test]
    fn test_submission_carries_summary() {
        let submission = sample();
        assert_eq!(submission.summary.total, Money::from_dollars(10));
    }

    #[test]
    fn test_writer_sink_json() {
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Json);
        sink.submit(&sample()).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["values"]["email"], "meekmill@gmail.com");
        assert_eq!(parsed["values"]["add_ons"][0], "online_service");
        assert_eq!(parsed["summary"]["total"], 1000);
    }

    #[test]
    fn test_writer_sink_yaml() {
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Yaml);
        sink.submit(&sample()).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.contains("name: Yasin Walum"));
        assert!(out.contains("billing_period: monthly"));
    }

    #[test]
    fn test_memory_and_tee_sinks() {
        let mut memory = MemorySink::new();
        let mut log = LogSink;
        {
            let sinks: Vec<&mut dyn SubmissionSink> = vec![&mut memory, &mut log];
            let mut tee = TeeSink::new(sinks);
            tee.submit(&sample()).unwrap();
        }
        assert_eq!(memory.submissions().len(), 1);
        assert_eq!(memory.take().len(), 1);
        assert!(memory.last().is_none());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("YML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("toml"), None);
    }
}
