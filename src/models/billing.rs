//! Billing period model
//!
//! Monthly or yearly billing, toggled on the plan step and applied to both
//! plan and add-on prices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing period for a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    /// Billed every month (default)
    #[default]
    Monthly,
    /// Billed once a year
    Yearly,
}

impl BillingPeriod {
    /// Parse a billing period from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "mo" => Some(Self::Monthly),
            "yearly" | "year" | "yr" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// The other billing period
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    /// Short suffix used on price labels ("mo" / "yr")
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Monthly => "mo",
            Self::Yearly => "yr",
        }
    }

    /// Noun used on the summary total ("month" / "year")
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}
