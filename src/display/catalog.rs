//! Catalog display formatting
//!
//! Formats the plan and add-on catalogs as tables for terminal output.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{BillingPeriod, ADD_ONS, PLANS};
use crate::pricing;

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Plan")]
    name: &'static str,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "")]
    bonus: &'static str,
}

#[derive(Tabled)]
struct AddOnRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Add-on")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Price")]
    price: String,
}

/// Format the plan catalog for a billing period
pub fn format_plan_table(period: BillingPeriod, symbol: &str) -> String {
    let rows = PLANS.iter().map(|plan| PlanRow {
        id: plan.id.as_str(),
        name: plan.display_name,
        price: pricing::price_label(pricing::price(plan, period), period, symbol),
        bonus: pricing::yearly_bonus(period).unwrap_or(""),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format the add-on catalog for a billing period
pub fn format_add_on_table(period: BillingPeriod, symbol: &str) -> String {
    let rows = ADD_ONS.iter().map(|add_on| AddOnRow {
        id: add_on.id.as_str(),
        name: add_on.display_name,
        description: add_on.description,
        price: pricing::add_on_label(pricing::add_on_price(add_on, period), period, symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_table_monthly() {
        let table = format_plan_table(BillingPeriod::Monthly, "$");
        assert!(table.contains("Arcade"));
        assert!(table.contains("$15/mo"));
        assert!(!table.contains("2 months free"));
    }

    #[test]
    fn test_plan_table_yearly() {
        let table = format_plan_table(BillingPeriod::Yearly, "$");
        assert!(table.contains("$120/yr"));
        assert!(table.contains("2 months free"));
    }

    #[test]
    fn test_add_on_table() {
        let table = format_add_on_table(BillingPeriod::Monthly, "€");
        assert!(table.contains("Extra 1TB of cloud save"));
        assert!(table.contains("+€2/mo"));
        assert!(table.contains("profile"));
    }
}
