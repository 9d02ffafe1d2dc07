//! Wizard steps
//!
//! The ordered step sequence and the fields each step governs. Step numbers
//! are 1-based and derived from the enum, never from an array offset.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::form::FieldName;

/// A wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Info,
    Plan,
    AddOns,
    Summary,
    Confirmation,
}

impl StepId {
    /// Every step in order
    pub const ALL: [StepId; 5] = [
        Self::Info,
        Self::Plan,
        Self::AddOns,
        Self::Summary,
        Self::Confirmation,
    ];

    /// Steps listed in the step indicator (the confirmation screen is not)
    pub const INDICATED: [StepId; 4] = [Self::Info, Self::Plan, Self::AddOns, Self::Summary];

    /// 1-based position
    pub fn index(&self) -> usize {
        match self {
            Self::Info => 1,
            Self::Plan => 2,
            Self::AddOns => 3,
            Self::Summary => 4,
            Self::Confirmation => 5,
        }
    }

    /// Step at a 1-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    /// Name shown in the step indicator
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "Your info",
            Self::Plan => "Select plan",
            Self::AddOns => "Add-ons",
            Self::Summary => "Summary",
            Self::Confirmation => "Thank you",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Personal info",
            Self::Plan => "Select your plan",
            Self::AddOns => "Pick add-ons",
            Self::Summary => "Finishing up",
            Self::Confirmation => "Thank you!",
        }
    }

    /// Page subheading
    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Info => "Please provide your name, email address, and phone number.",
            Self::Plan => "You have the option of monthly or yearly billing.",
            Self::AddOns => "Add-ons help enhance your gaming experience.",
            Self::Summary => "Double-check everything looks OK before confirming.",
            Self::Confirmation => {
                "Thanks for confirming your subscription! We hope you have fun using our \
                 platform. If you ever need support, please feel free to email us at \
                 support@loremgaming.com."
            }
        }
    }

    /// Fields validated before leaving this step
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            Self::Info => &[FieldName::Name, FieldName::Email, FieldName::Phone],
            Self::Plan => &[FieldName::Plan],
            Self::AddOns => &[FieldName::Service, FieldName::Storage, FieldName::Profile],
            Self::Summary | Self::Confirmation => &[],
        }
    }

    /// The step that owns a field
    pub fn owning(field: FieldName) -> Self {
        Self::ALL
            .into_iter()
            .find(|step| step.fields().contains(&field))
            .unwrap_or(Self::Info)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        Self::from_index(self.index() - 1)
    }

    /// Whether this is the terminal step
    pub fn is_terminal(&self) -> bool {
        *self == Self::Confirmation
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.index(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_round_trip() {
        for (i, step) in StepId::ALL.iter().enumerate() {
            assert_eq!(step.index(), i + 1);
            assert_eq!(StepId::from_index(i + 1), Some(*step));
        }
        assert_eq!(StepId::from_index(0), None);
        assert_eq!(StepId::from_index(6), None);
    }

    #[test]
    fn test_fields_per_step() {
        assert_eq!(
            StepId::Info.fields(),
            &[FieldName::Name, FieldName::Email, FieldName::Phone]
        );
        assert_eq!(StepId::Plan.fields(), &[FieldName::Plan]);
        assert!(StepId::Summary.fields().is_empty());
        assert!(StepId::Confirmation.fields().is_empty());
    }

    #[test]
    fn test_every_field_has_one_owner() {
        for field in FieldName::ALL {
            let owners = StepId::ALL
                .iter()
                .filter(|s| s.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{}", field);
        }
        assert_eq!(StepId::owning(FieldName::Email), StepId::Info);
        assert_eq!(StepId::owning(FieldName::Profile), StepId::AddOns);
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(StepId::Info.prev(), None);
        assert_eq!(StepId::Info.next(), Some(StepId::Plan));
        assert_eq!(StepId::Confirmation.next(), None);
        assert!(StepId::Confirmation.is_terminal());
    }
}
