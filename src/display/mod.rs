//! Display formatting for terminal output
//!
//! Catalog tables, itemized summaries and validation failures for the CLI.

pub mod catalog;
pub mod summary;

pub use catalog::{format_add_on_table, format_plan_table};
pub use summary::{format_summary, format_validation_errors};
