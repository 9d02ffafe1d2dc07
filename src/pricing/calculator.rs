//! Price calculation
//!
//! Pure functions over the catalog. Yearly prices are looked up directly;
//! nothing here derives them from monthly prices.

use serde::Serialize;

use crate::error::{SignupError, SignupResult};
use crate::form::FormValues;
use crate::models::{AddOn, AddOnId, BillingPeriod, Money, Plan};

/// Plan price for a billing period
pub fn price(plan: &Plan, period: BillingPeriod) -> Money {
    plan.price(period)
}

/// Add-on price for a billing period
pub fn add_on_price(add_on: &AddOn, period: BillingPeriod) -> Money {
    add_on.price(period)
}

/// Plan price plus every selected add-on's price for the same period
pub fn total<'a, I>(plan: &Plan, period: BillingPeriod, add_ons: I) -> Money
where
    I: IntoIterator<Item = &'a AddOnId>,
{
    price(plan, period)
        + add_ons
            .into_iter()
            .map(|id| add_on_price(id.add_on(), period))
            .sum::<Money>()
}

/// One priced line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Money,
}

/// Itemized price summary shown on the summary step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub billing_period: BillingPeriod,
    pub plan: LineItem,
    /// Selected add-ons in catalog order
    pub add_ons: Vec<LineItem>,
    pub total: Money,
}

/// Build the itemized summary for the current values
///
/// Fails only when the plan id does not resolve, which the plan step's
/// validation rules out before the summary is reached.
pub fn summarize(values: &FormValues) -> SignupResult<PriceSummary> {
    let plan = values
        .selected_plan()
        .ok_or_else(|| SignupError::plan_not_found(&values.plan))?;
    let period = values.billing_period;

    let add_ons = values
        .add_ons
        .iter()
        .map(|id| {
            let add_on = id.add_on();
            LineItem {
                label: add_on.display_name.to_string(),
                amount: add_on_price(add_on, period),
            }
        })
        .collect();

    Ok(PriceSummary {
        billing_period: period,
        plan: LineItem {
            label: format!("{} ({})", plan.display_name, period),
            amount: price(plan, period),
        },
        add_ons,
        total: total(plan, period, &values.add_ons),
    })
}

/// "$9/mo"
pub fn price_label(amount: Money, period: BillingPeriod, symbol: &str) -> String {
    format!("{}/{}", amount.format_compact(symbol), period.suffix())
}

/// "+$1/mo"
pub fn add_on_label(amount: Money, period: BillingPeriod, symbol: &str) -> String {
    format!("+{}", price_label(amount, period, symbol))
}

/// "Total (per month)"
pub fn total_caption(period: BillingPeriod) -> String {
    format!("Total (per {})", period.unit())
}

/// Display-only annotation on yearly plan prices
pub fn yearly_bonus(period: BillingPeriod) -> Option<&'static str> {
    match period {
        BillingPeriod::Yearly => Some("2 months free"),
        BillingPeriod::Monthly => None,
    }
}
