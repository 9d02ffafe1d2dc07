//! Pricing calculator
//!
//! Maps {plan, billing period, add-ons} to itemized and total prices.

pub mod calculator;

pub use calculator::{
    add_on_label, add_on_price, price, price_label, summarize, total, total_caption,
    yearly_bonus, LineItem, PriceSummary,
};
