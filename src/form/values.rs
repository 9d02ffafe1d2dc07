//! Snapshot of the values collected by the wizard

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{AddOnId, BillingPeriod, Plan};

/// Values entered across all wizard steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Catalog id of the chosen plan
    pub plan: String,

    pub billing_period: BillingPeriod,

    /// Selected add-ons, kept in catalog order
    #[serde(default)]
    pub add_ons: BTreeSet<AddOnId>,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            plan: Plan::default_plan().id.as_str().to_string(),
            billing_period: BillingPeriod::default(),
            add_ons: BTreeSet::new(),
        }
    }
}

impl FormValues {
    /// The chosen plan, if the id resolves in the catalog
    pub fn selected_plan(&self) -> Option<&'static Plan> {
        Plan::find(&self.plan)
    }

    /// Whether an add-on is selected
    pub fn has_add_on(&self, id: AddOnId) -> bool {
        self.add_ons.contains(&id)
    }
}
