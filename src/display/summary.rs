//! Summary display formatting
//!
//! Formats itemized price summaries and validation failures.

use crate::form::ValidationOutcome;
use crate::pricing::{self, PriceSummary};

/// Format an itemized summary with right-aligned prices
pub fn format_summary(summary: &PriceSummary, symbol: &str) -> String {
    let period = summary.billing_period;
    let total_caption = pricing::total_caption(period);

    let mut rows: Vec<(String, String)> = Vec::with_capacity(summary.add_ons.len() + 1);
    rows.push((
        summary.plan.label.clone(),
        pricing::price_label(summary.plan.amount, period, symbol),
    ));
    for line in &summary.add_ons {
        rows.push((
            format!("  {}", line.label),
            pricing::add_on_label(line.amount, period, symbol),
        ));
    }
    let total = pricing::price_label(summary.total, period, symbol);

    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(total_caption.chars().count()))
        .max()
        .unwrap_or(0);
    let price_width = rows
        .iter()
        .map(|(_, price)| price.chars().count())
        .chain(std::iter::once(total.chars().count()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (label, price) in &rows {
        output.push_str(&format!(
            "{:<label_width$}  {:>price_width$}\n",
            label,
            price,
            label_width = label_width,
            price_width = price_width,
        ));
    }

    output.push_str(&format!(
        "{:-<width$}\n",
        "",
        width = label_width + 2 + price_width
    ));
    output.push_str(&format!(
        "{:<label_width$}  {:>price_width$}\n",
        total_caption,
        total,
        label_width = label_width,
        price_width = price_width,
    ));

    output
}

/// Format validation failures, one field per line
pub fn format_validation_errors(outcome: &ValidationOutcome) -> String {
    let mut output = String::new();
    for (field, message) in &outcome.errors {
        output.push_str(&format!("  {}: {}\n", field.label(), message));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{schema, FieldName, FormValues};
    use crate::models::{AddOnId, BillingPeriod};

    #[test]
    fn test_format_summary() {
        let mut values = FormValues {
            billing_period: BillingPeriod::Yearly,
            ..FormValues::default()
        };
        values.add_ons.insert(AddOnId::OnlineService);
        values.add_ons.insert(AddOnId::LargerStorage);

        let output = format_summary(&pricing::summarize(&values).unwrap(), "$");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Arcade (Yearly)"));
        assert!(lines[0].ends_with("$90/yr"));
        assert!(lines[1].contains("Online service"));
        assert!(lines[1].ends_with("+$10/yr"));
        assert!(lines[4].starts_with("Total (per year)"));
        assert!(lines[4].ends_with("$120/yr"));
    }

    #[test]
    fn test_format_validation_errors() {
        let values = FormValues {
            name: "Yasin Walum".into(),
            email: "not-an-email".into(),
            phone: "123".into(),
            ..FormValues::default()
        };
        let outcome = schema::validate(&values, &[FieldName::Email, FieldName::Phone]);

        let output = format_validation_errors(&outcome);
        assert!(output.contains("Email Address: Invalid email"));
        assert!(output.contains("Phone Number: Phone number must be 10 characters"));
    }
}
