//! Validation schema
//!
//! Each field has at most one rule: a predicate over the form values and the
//! message shown inline when it fails. Rules are independent of each other and
//! of evaluation order. Add-on flags carry no rule.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

use super::field::FieldName;
use super::values::FormValues;

lazy_static! {
    // Dot-separated local part (no leading, trailing or doubled dots) whose
    // last character is not an apostrophe, then a domain with at least one
    // label and an alphabetic TLD.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^([A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    )
    .unwrap();
}

/// Minimum number of characters in a name
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum number of characters in a phone number
pub const PHONE_MIN_CHARS: usize = 10;

/// A predicate + message pair for one field
pub struct Rule {
    pub field: FieldName,
    pub message: &'static str,
    check: fn(&FormValues) -> bool,
}

impl Rule {
    /// Whether the values satisfy this rule
    pub fn passes(&self, values: &FormValues) -> bool {
        (self.check)(values)
    }
}

/// The full schema
pub static SCHEMA: [Rule; 4] = [
    Rule {
        field: FieldName::Name,
        message: "Name is required",
        check: name_is_valid,
    },
    Rule {
        field: FieldName::Email,
        message: "Invalid email",
        check: email_is_valid,
    },
    Rule {
        field: FieldName::Phone,
        message: "Phone number must be 10 characters",
        check: phone_is_valid,
    },
    Rule {
        field: FieldName::Plan,
        message: "Please select a plan",
        check: plan_is_valid,
    },
];

// Surrounding whitespace does not count towards the minimum
fn name_is_valid(values: &FormValues) -> bool {
    values.name.trim().chars().count() >= NAME_MIN_CHARS
}

fn email_is_valid(values: &FormValues) -> bool {
    is_valid_email(&values.email)
}

// Format agnostic: only the length is checked
fn phone_is_valid(values: &FormValues) -> bool {
    values.phone.chars().count() >= PHONE_MIN_CHARS
}

fn plan_is_valid(values: &FormValues) -> bool {
    !values.plan.trim().is_empty() && values.selected_plan().is_some()
}

/// Check an address against the email syntax
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Result of validating a set of fields
///
/// Validation never fails: an unsuccessful outcome carries one message per
/// offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub errors: BTreeMap<FieldName, String>,
}

impl ValidationOutcome {
    /// True when no field failed
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a field, if it failed
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Validate only the given fields
pub fn validate(values: &FormValues, fields: &[FieldName]) -> ValidationOutcome {
    let errors = SCHEMA
        .iter()
        .filter(|rule| fields.contains(&rule.field))
        .filter(|rule| !rule.passes(values))
        .map(|rule| (rule.field, rule.message.to_string()))
        .collect();

    ValidationOutcome { errors }
}

/// Validate every field of the schema
pub fn validate_all(values: &FormValues) -> ValidationOutcome {
    validate(values, &FieldName::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddOnId, BillingPeriod};

    fn valid_values() -> FormValues {
        FormValues {
            name: "Yasin Walum".into(),
            email: "meekmill@gmail.com".into(),
            phone: "+256 785 451 455".into(),
            ..FormValues::default()
        }
    }

    #[test]
    fn test_valid_values_pass_full_schema() {
        let mut values = valid_values();
        assert!(validate_all(&values).success());

        for plan in ["arcade", "advanced", "pro"] {
            for period in [BillingPeriod::Monthly, BillingPeriod::Yearly] {
                values.plan = plan.into();
                values.billing_period = period;
                values.add_ons = AddOnId::ALL.into_iter().collect();
                assert!(validate_all(&values).success(), "{} {}", plan, period);
            }
        }
    }

    #[test]
    fn test_default_values_fail_personal_info() {
        let outcome = validate_all(&FormValues::default());
        assert!(!outcome.success());
        assert_eq!(outcome.error(FieldName::Name), Some("Name is required"));
        assert_eq!(outcome.error(FieldName::Email), Some("Invalid email"));
        assert_eq!(
            outcome.error(FieldName::Phone),
            Some("Phone number must be 10 characters")
        );
        // The first plan is preselected
        assert_eq!(outcome.error(FieldName::Plan), None);
    }

    #[test]
    fn test_only_requested_fields_are_checked() {
        let values = FormValues::default();
        let outcome = validate(&values, &[FieldName::Plan]);
        assert!(outcome.success());

        let outcome = validate(&values, &[FieldName::Email]);
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn test_name_length() {
        let mut values = valid_values();
        values.name = "J".into();
        assert!(!validate(&values, &[FieldName::Name]).success());
        values.name = "  ".into();
        assert!(!validate(&values, &[FieldName::Name]).success());
        values.name = "Jo".into();
        assert!(validate(&values, &[FieldName::Name]).success());
    }

    #[test]
    fn test_phone_is_format_agnostic() {
        let mut values = valid_values();
        values.phone = "123456789".into();
        assert!(!validate(&values, &[FieldName::Phone]).success());
        values.phone = "abcdefghij".into();
        assert!(validate(&values, &[FieldName::Phone]).success());
    }

    #[test]
    fn test_plan_must_resolve() {
        let mut values = valid_values();
        values.plan = String::new();
        assert!(!validate(&values, &[FieldName::Plan]).success());
        values.plan = "platinum".into();
        assert!(!validate(&values, &[FieldName::Plan]).success());
        values.plan = "2".into();
        assert!(validate(&values, &[FieldName::Plan]).success());
    }

    #[test]
    fn test_flags_have_no_rule() {
        let outcome = validate(
            &FormValues::default(),
            &[FieldName::Service, FieldName::Storage, FieldName::Profile],
        );
        assert!(outcome.success());
    }

    #[test]
    fn test_email_syntax() {
        for good in [
            "a@b.co",
            "first.last@example.com",
            "o'neil+tag@mail.example.org",
            "x_y-z@sub-domain.io",
        ] {
            assert!(is_valid_email(good), "{}", good);
        }

        for bad in [
            "not-an-email",
            "",
            "@example.com",
            "user@",
            "user@example",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user @example.com",
            "user@example.c",
            "o'@example.com",
            "first.o'@example.com",
            "  @example.com",
        ] {
            assert!(!is_valid_email(bad), "{}", bad);
        }
    }
}
