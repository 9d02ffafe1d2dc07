//! Add-on catalog
//!
//! Optional priced features selectable independently of the plan.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::billing::BillingPeriod;
use super::money::Money;

/// Identifier of an add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnId {
    OnlineService,
    LargerStorage,
    CustomizableProfile,
}

impl AddOnId {
    /// All add-on ids in catalog order
    pub const ALL: [AddOnId; 3] = [
        Self::OnlineService,
        Self::LargerStorage,
        Self::CustomizableProfile,
    ];

    /// Stable string id
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnlineService => "service",
            Self::LargerStorage => "storage",
            Self::CustomizableProfile => "profile",
        }
    }

    /// Parse an add-on id from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "service" | "online_service" | "online-service" => Some(Self::OnlineService),
            "storage" | "larger_storage" | "larger-storage" => Some(Self::LargerStorage),
            "profile" | "customizable_profile" | "customizable-profile" => {
                Some(Self::CustomizableProfile)
            }
            _ => None,
        }
    }

    /// Catalog entry for this id
    pub fn add_on(&self) -> &'static AddOn {
        match self {
            Self::OnlineService => &ADD_ONS[0],
            Self::LargerStorage => &ADD_ONS[1],
            Self::CustomizableProfile => &ADD_ONS[2],
        }
    }
}

impl fmt::Display for AddOnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An optional add-on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOn {
    pub id: AddOnId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub monthly_price: Money,
    pub yearly_price: Money,
}

impl AddOn {
    /// Price for the given billing period
    pub fn price(&self, period: BillingPeriod) -> Money {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }
}

/// All add-ons in display order
pub static ADD_ONS: [AddOn; 3] = [
    AddOn {
        id: AddOnId::OnlineService,
        display_name: "Online service",
        description: "Access to multiplayer games",
        monthly_price: Money::from_dollars(1),
        yearly_price: Money::from_dollars(10),
    },
    AddOn {
        id: AddOnId::LargerStorage,
        display_name: "Larger storage",
        description: "Extra 1TB of cloud save",
        monthly_price: Money::from_dollars(2),
        yearly_price: Money::from_dollars(20),
    },
    AddOn {
        id: AddOnId::CustomizableProfile,
        display_name: "Customizable profile",
        description: "Custom theme on your profile",
        monthly_price: Money::from_dollars(2),
        yearly_price: Money::from_dollars(20),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_ids() {
        for (id, add_on) in AddOnId::ALL.iter().zip(ADD_ONS.iter()) {
            assert_eq!(id.add_on(), add_on);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(AddOnId::parse("service"), Some(AddOnId::OnlineService));
        assert_eq!(AddOnId::parse("Larger-Storage"), Some(AddOnId::LargerStorage));
        assert_eq!(AddOnId::parse("theme"), None);
    }

    #[test]
    fn test_price() {
        let storage = AddOnId::LargerStorage.add_on();
        assert_eq!(storage.price(BillingPeriod::Monthly), Money::from_dollars(2));
        assert_eq!(storage.price(BillingPeriod::Yearly), Money::from_dollars(20));
    }
}
