//! Core data models for SignupCLI
//!
//! This module contains the static catalog (plans and add-ons), billing periods
//! and the money type used for every price.

pub mod add_on;
pub mod billing;
pub mod money;
pub mod plan;

pub use add_on::{AddOn, AddOnId, ADD_ONS};
pub use billing::BillingPeriod;
pub use money::Money;
pub use plan::{Plan, PlanId, PLANS};
