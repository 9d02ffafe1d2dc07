//! Form model
//!
//! Owns the field values and the inline errors from the latest validation.
//! Values change only through the setters below.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{SignupError, SignupResult};
use crate::models::{AddOnId, BillingPeriod};

use super::field::{FieldName, FieldValue};
use super::schema::{self, ValidationOutcome};
use super::values::FormValues;

/// The form state for one wizard session
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    values: FormValues,
    errors: BTreeMap<FieldName, String>,
}

impl FormModel {
    /// Create a form with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form starting on the given billing period
    pub fn with_billing_period(period: BillingPeriod) -> Self {
        let mut form = Self::new();
        form.values.billing_period = period;
        form
    }

    /// Set a field value
    ///
    /// Text fields take `FieldValue::Text`, add-on flags take `FieldValue::Flag`.
    /// Editing a field clears its inline error.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<FieldValue>) -> SignupResult<()> {
        match (name, value.into()) {
            (FieldName::Name, FieldValue::Text(s)) => self.values.name = s,
            (FieldName::Email, FieldValue::Text(s)) => self.values.email = s,
            (FieldName::Phone, FieldValue::Text(s)) => self.values.phone = s,
            (FieldName::Plan, FieldValue::Text(s)) => self.values.plan = s,
            (field, FieldValue::Flag(on)) => {
                let add_on = field.add_on().ok_or(SignupError::FieldType {
                    field,
                    expected: "text",
                })?;
                if on {
                    self.values.add_ons.insert(add_on);
                } else {
                    self.values.add_ons.remove(&add_on);
                }
            }
            (field, FieldValue::Text(_)) => {
                return Err(SignupError::FieldType {
                    field,
                    expected: "boolean",
                })
            }
        }

        self.errors.remove(&name);
        Ok(())
    }

    /// Current text of a text field (empty for flags)
    pub fn text(&self, name: FieldName) -> &str {
        match name {
            FieldName::Name => &self.values.name,
            FieldName::Email => &self.values.email,
            FieldName::Phone => &self.values.phone,
            FieldName::Plan => &self.values.plan,
            _ => "",
        }
    }

    /// Flip an add-on selection
    pub fn toggle_add_on(&mut self, id: AddOnId) {
        let on = !self.is_add_on_selected(id);
        if on {
            self.values.add_ons.insert(id);
        } else {
            self.values.add_ons.remove(&id);
        }
        self.errors.remove(&FieldName::for_add_on(id));
    }

    /// Whether an add-on is selected
    pub fn is_add_on_selected(&self, id: AddOnId) -> bool {
        self.values.has_add_on(id)
    }

    /// Current billing period
    pub fn billing_period(&self) -> BillingPeriod {
        self.values.billing_period
    }

    /// Set the billing period
    pub fn set_billing_period(&mut self, period: BillingPeriod) {
        self.values.billing_period = period;
    }

    /// Switch between monthly and yearly billing
    pub fn toggle_billing_period(&mut self) {
        self.values.billing_period = self.values.billing_period.toggled();
    }

    /// Validate a subset of fields
    ///
    /// The validated fields' inline errors are replaced by the outcome; other
    /// fields keep theirs.
    pub fn validate_fields(&mut self, names: &[FieldName]) -> ValidationOutcome {
        let outcome = schema::validate(&self.values, names);

        for name in names {
            self.errors.remove(name);
        }
        self.errors
            .extend(outcome.errors.iter().map(|(k, v)| (*k, v.clone())));

        if !outcome.success() {
            debug!(
                fields = ?outcome.errors.keys().collect::<Vec<_>>(),
                "Validation failed"
            );
        }

        outcome
    }

    /// Validate the full schema
    pub fn validate_all(&mut self) -> ValidationOutcome {
        self.validate_fields(&FieldName::ALL)
    }

    /// Inline error for a field
    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    /// All inline errors
    pub fn errors(&self) -> &BTreeMap<FieldName, String> {
        &self.errors
    }

    /// Snapshot of the current values
    pub fn get_values(&self) -> FormValues {
        self.values.clone()
    }

    /// Borrow the current values
    pub fn values(&self) -> &FormValues {
        &self.values
    }
}
