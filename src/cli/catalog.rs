//! Catalog CLI commands
//!
//! `plans` lists the catalog, `quote` prices a selection without asking for
//! personal info.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_add_on_table, format_plan_table, format_summary};
use crate::error::{SignupError, SignupResult};
use crate::form::FormValues;
use crate::models::{AddOnId, BillingPeriod, Plan};
use crate::pricing;

/// Billing period override; the configured default applies when neither flag is given
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BillingArgs {
    /// Bill yearly
    #[arg(short, long, conflicts_with = "monthly")]
    pub yearly: bool,
    /// Bill monthly
    #[arg(short, long)]
    pub monthly: bool,
}

impl BillingArgs {
    pub fn yearly() -> Self {
        Self {
            yearly: true,
            monthly: false,
        }
    }

    pub fn monthly() -> Self {
        Self {
            yearly: false,
            monthly: true,
        }
    }

    /// Billing period, falling back to the configured default
    pub fn period(&self, settings: &Settings) -> BillingPeriod {
        match (self.yearly, self.monthly) {
            (true, _) => BillingPeriod::Yearly,
            (_, true) => BillingPeriod::Monthly,
            _ => settings.default_billing,
        }
    }
}

/// Plan, billing period and add-ons chosen on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Plan id (arcade, advanced, pro)
    #[arg(short, long, default_value = "arcade")]
    pub plan: String,
    #[command(flatten)]
    pub billing: BillingArgs,
    /// Add-on id (service, storage, profile); repeat for several
    #[arg(short, long = "add-on", value_name = "ADD_ON")]
    pub add_ons: Vec<String>,
}

impl SelectionArgs {
    /// Billing period, falling back to the configured default
    pub fn billing_period(&self, settings: &Settings) -> BillingPeriod {
        self.billing.period(settings)
    }

    /// Resolve the plan id against the catalog
    pub fn resolve_plan(&self) -> SignupResult<&'static Plan> {
        Plan::find(&self.plan).ok_or_else(|| SignupError::plan_not_found(&self.plan))
    }

    /// Resolve every add-on id against the catalog
    pub fn resolve_add_ons(&self) -> SignupResult<Vec<AddOnId>> {
        self.add_ons
            .iter()
            .map(|id| AddOnId::parse(id).ok_or_else(|| SignupError::add_on_not_found(id)))
            .collect()
    }
}

/// Handle the `plans` command
pub fn handle_plans_command(billing: &BillingArgs, settings: &Settings) -> SignupResult<()> {
    let period = billing.period(settings);

    println!("Plans ({})", period);
    print!("{}", format_plan_table(period, &settings.currency_symbol));
    println!();
    println!("Add-ons ({})", period);
    print!("{}", format_add_on_table(period, &settings.currency_symbol));
    Ok(())
}

/// Price a selection
pub fn quote(selection: &SelectionArgs, settings: &Settings) -> SignupResult<pricing::PriceSummary> {
    let plan = selection.resolve_plan()?;
    let values = FormValues {
        plan: plan.id.as_str().to_string(),
        billing_period: selection.billing_period(settings),
        add_ons: selection.resolve_add_ons()?.into_iter().collect(),
        ..FormValues::default()
    };
    pricing::summarize(&values)
}

/// Handle the `quote` command
pub fn handle_quote_command(selection: &SelectionArgs, settings: &Settings) -> SignupResult<()> {
    let summary = quote(selection, settings)?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn selection(plan: &str, yearly: bool, add_ons: &[&str]) -> SelectionArgs {
        SelectionArgs {
            plan: plan.to_string(),
            billing: BillingArgs {
                yearly,
                monthly: false,
            },
            add_ons: add_ons.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_quote_monthly() {
        let summary = quote(&selection("arcade", false, &["service"]), &Settings::default()).unwrap();
        assert_eq!(summary.total, Money::from_dollars(10));
    }

    #[test]
    fn test_quote_uses_default_billing() {
        let settings = Settings {
            default_billing: BillingPeriod::Yearly,
            ..Settings::default()
        };
        let summary = quote(&selection("pro", false, &[]), &settings).unwrap();
        assert_eq!(summary.billing_period, BillingPeriod::Yearly);
        assert_eq!(summary.total, Money::from_dollars(150));
    }

    #[test]
    fn test_monthly_flag_overrides_yearly_default() {
        let settings = Settings {
            default_billing: BillingPeriod::Yearly,
            ..Settings::default()
        };
        let selection = SelectionArgs {
            plan: "pro".to_string(),
            billing: BillingArgs::monthly(),
            add_ons: Vec::new(),
        };
        let summary = quote(&selection, &settings).unwrap();
        assert_eq!(summary.billing_period, BillingPeriod::Monthly);
        assert_eq!(summary.total, Money::from_dollars(15));
    }

    #[test]
    fn test_billing_flags_conflict() {
        use clap::Parser;

        #[derive(Parser)]
        struct Harness {
            #[command(flatten)]
            billing: BillingArgs,
        }

        assert!(Harness::try_parse_from(["quote", "--yearly", "--monthly"]).is_err());
        let parsed = Harness::try_parse_from(["quote", "-m"]).unwrap();
        assert_eq!(parsed.billing.period(&Settings::default()), BillingPeriod::Monthly);
    }

    #[test]
    fn test_duplicate_add_ons_count_once() {
        let summary = quote(
            &selection("arcade", true, &["service", "storage", "service"]),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(summary.total, Money::from_dollars(120));
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let settings = Settings::default();
        let err = quote(&selection("gold", false, &[]), &settings).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Plan not found: gold");

        let err = quote(&selection("arcade", false, &["jetpack"]), &settings).unwrap_err();
        assert_eq!(err.to_string(), "Add-on not found: jetpack");
    }
}
