//! Form field names and values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::AddOnId;

/// A field governed by the validation schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Plan,
    Service,
    Storage,
    Profile,
}

impl FieldName {
    /// Every field in schema order
    pub const ALL: [FieldName; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Plan,
        Self::Service,
        Self::Storage,
        Self::Profile,
    ];

    /// Schema key of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Plan => "plan",
            Self::Service => "service",
            Self::Storage => "storage",
            Self::Profile => "profile",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Plan => "Plan",
            Self::Service => "Online service",
            Self::Storage => "Larger storage",
            Self::Profile => "Customizable profile",
        }
    }

    /// Whether the field holds a boolean flag rather than text
    pub fn is_flag(&self) -> bool {
        self.add_on().is_some()
    }

    /// The add-on toggled by this field, if it is an add-on flag
    pub fn add_on(&self) -> Option<AddOnId> {
        match self {
            Self::Service => Some(AddOnId::OnlineService),
            Self::Storage => Some(AddOnId::LargerStorage),
            Self::Profile => Some(AddOnId::CustomizableProfile),
            _ => None,
        }
    }

    /// The flag field that toggles an add-on
    pub fn for_add_on(id: AddOnId) -> Self {
        match id {
            AddOnId::OnlineService => Self::Service,
            AddOnId::LargerStorage => Self::Storage,
            AddOnId::CustomizableProfile => Self::Profile,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value assigned to a field through `FormModel::set_field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}
