//! CLI command handlers
//!
//! Non-interactive commands bridging clap argument parsing with the catalog,
//! the pricing calculator and the wizard.

pub mod catalog;
pub mod submit;

pub use catalog::{handle_plans_command, handle_quote_command, BillingArgs, SelectionArgs};
pub use submit::{handle_submit_command, SubmitArgs};
