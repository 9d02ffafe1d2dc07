//! SignupCLI - Terminal-based multi-step subscription sign-up
//!
//! This library provides the core of a sign-up wizard: personal info, plan
//! choice, add-ons and a priced summary, with per-step validation gating
//! navigation. The core is rendering-agnostic; the `tui` and `cli` modules
//! are two hosts driving it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Plan and add-on catalogs, billing periods, money
//! - `form`: Field values, the validation schema and the form model
//! - `pricing`: Pure price calculation and labels
//! - `wizard`: Step sequence, sequencer state machine and session facade
//! - `view`: Projection of wizard state into a renderable description
//! - `submission`: The submission snapshot and the sinks that receive it
//! - `config`: Configuration and path management
//! - `logging`: Tracing subscriber setup
//! - `cli`, `display`: Non-interactive commands and their output
//! - `tui`: The interactive terminal UI
//!
//! # Example
//!
//! ```rust,ignore
//! use signup::form::FieldName;
//! use signup::models::BillingPeriod;
//! use signup::submission::MemorySink;
//! use signup::wizard::SignupWizard;
//!
//! let mut wizard = SignupWizard::new(BillingPeriod::Monthly);
//! wizard.set_field(FieldName::Name, "Yasin Walum")?;
//! wizard.advance();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod submission;
pub mod tui;
pub mod view;
pub mod wizard;

pub use error::{SignupError, SignupResult};
