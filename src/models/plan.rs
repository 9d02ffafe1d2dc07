//! Plan catalog
//!
//! The three subscription plans offered on the plan step. Yearly prices are
//! flat catalog values, not derived from the monthly price.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::billing::BillingPeriod;
use super::money::Money;

/// Identifier of a subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Arcade,
    Advanced,
    Pro,
}

impl PlanId {
    /// Stable string id stored in the form values
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arcade => "arcade",
            Self::Advanced => "advanced",
            Self::Pro => "pro",
        }
    }

    /// Parse a plan id from its string id or its 0-based catalog index
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arcade" | "0" => Some(Self::Arcade),
            "advanced" | "1" => Some(Self::Advanced),
            "pro" | "2" => Some(Self::Pro),
            _ => None,
        }
    }

    /// Catalog entry for this id
    pub fn plan(&self) -> &'static Plan {
        match self {
            Self::Arcade => &PLANS[0],
            Self::Advanced => &PLANS[1],
            Self::Pro => &PLANS[2],
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A subscription plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Catalog id
    pub id: PlanId,
    /// Name shown to the user
    pub display_name: &'static str,
    /// Price billed monthly
    pub monthly_price: Money,
    /// Price billed yearly
    pub yearly_price: Money,
}

impl Plan {
    /// Price for the given billing period
    pub fn price(&self, period: BillingPeriod) -> Money {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }

    /// Look up a plan by string id or catalog index
    pub fn find(id: &str) -> Option<&'static Plan> {
        PlanId::parse(id).map(|id| id.plan())
    }

    /// The default plan preselected on a fresh form
    pub fn default_plan() -> &'static Plan {
        &PLANS[0]
    }
}

/// All plans in display order
pub static PLANS: [Plan; 3] = [
    Plan {
        id: PlanId::Arcade,
        display_name: "Arcade",
        monthly_price: Money::from_dollars(9),
        yearly_price: Money::from_dollars(90),
    },
    Plan {
        id: PlanId::Advanced,
        display_name: "Advanced",
        monthly_price: Money::from_dollars(12),
        yearly_price: Money::from_dollars(120),
    },
    Plan {
        id: PlanId::Pro,
        display_name: "Pro",
        monthly_price: Money::from_dollars(15),
        yearly_price: Money::from_dollars(150),
    },
];
