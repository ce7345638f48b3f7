//! Validation pass over a field snapshot

use super::rules::{RuleKind, ValidationRule, RULES};
use super::store::Snapshot;
use crate::state::forms::FieldValue;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Field name to error message; empty means valid
pub type ValidationErrors = BTreeMap<String, String>;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate a snapshot against the full rule table
pub fn validate(snapshot: &Snapshot, today: NaiveDate) -> ValidationErrors {
    validate_rules(RULES, snapshot, today)
}

/// Validate a snapshot against the given rules. Every rule is checked.
pub fn validate_rules<'a, I>(rules: I, snapshot: &Snapshot, today: NaiveDate) -> ValidationErrors
where
    I: IntoIterator<Item = &'a ValidationRule>,
{
    rules
        .into_iter()
        .filter_map(|rule| {
            check(rule, snapshot.get(rule.field), today)
                .map(|message| (rule.field.to_string(), message.to_string()))
        })
        .collect()
}

/// First failing check of a rule, if any
fn check(rule: &ValidationRule, value: Option<&FieldValue>, today: NaiveDate) -> Option<&'static str> {
    let messages = &rule.messages;

    if rule.kind == RuleKind::Collection {
        let count = value.map_or(0, FieldValue::selected_count);
        let min = rule.constraints.min_selected.max(usize::from(rule.required));
        return (count < min).then_some(messages.required);
    }

    let text = value.map_or("", FieldValue::as_text).trim();
    if text.is_empty() {
        return rule.required.then_some(messages.required);
    }

    match rule.kind {
        RuleKind::Text | RuleKind::Collection => None,
        RuleKind::Email => (!EMAIL_RE.is_match(text)).then_some(messages.invalid),
        RuleKind::Date => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Err(_) => Some(messages.invalid),
            Ok(date) if rule.constraints.not_in_future && date > today => {
                Some(messages.constraint)
            }
            Ok(_) => None,
        },
        RuleKind::Number => match text.parse::<f64>() {
            Ok(n) if !n.is_finite() => Some(messages.invalid),
            Ok(n) if rule.constraints.positive && n <= 0.0 => Some(messages.constraint),
            Ok(_) => None,
            Err(_) => Some(messages.invalid),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::wizard::DocumentDescriptor;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Every field at a valid example value
    fn valid_values() -> Vec<(&'static str, FieldValue)> {
        vec![
            ("fullName", FieldValue::text("Ada Lovelace")),
            ("dateOfBirth", FieldValue::text("2000-01-31")),
            ("gender", FieldValue::text("female")),
            ("nationality", FieldValue::text("British")),
            ("contactNumber", FieldValue::text("+44 20 7946 0958")),
            ("email", FieldValue::text("ada@example.com")),
            ("address", FieldValue::text("12 St James's Square")),
            ("currentEducationLevel", FieldValue::text("Bachelor")),
            ("institutionsAttended", FieldValue::text("University of London")),
            ("academicPerformance", FieldValue::text("First class")),
            ("major", FieldValue::text("Mathematics")),
            ("standardizedTests", FieldValue::text("IELTS 8.0")),
            ("preferredCountries", FieldValue::selections(["France"])),
            ("preferredUniversities", FieldValue::selections(["ETH Zurich"])),
            ("programStartDate", FieldValue::text("2025-09-01")),
            ("budget", FieldValue::text("25000")),
            ("healthInsurance", FieldValue::text("Yes")),
            (
                "documents",
                FieldValue::Documents(vec![DocumentDescriptor {
                    uri: "file:///tmp/passport.pdf".to_string(),
                    name: "passport.pdf".to_string(),
                    mime_type: "application/pdf".to_string(),
                    size: 2048,
                }]),
            ),
        ]
    }

    fn snapshot_with(field: &str, value: FieldValue) -> Snapshot {
        valid_values()
            .into_iter()
            .map(|(name, v)| if name == field { (name, value.clone()) } else { (name, v) })
            .collect()
    }

    fn only_error(errors: &ValidationErrors) -> (&str, &str) {
        assert_eq!(errors.len(), 1, "expected exactly one error, got {errors:?}");
        let (k, v) = errors.iter().next().unwrap();
        (k.as_str(), v.as_str())
    }

    #[test]
    fn test_valid_snapshot_has_no_errors() {
        let snapshot: Snapshot = valid_values().into_iter().collect();
        assert!(validate(&snapshot, today()).is_empty());
    }

    #[test]
    fn test_each_blank_required_field_yields_exactly_its_error() {
        for rule in RULES {
            let blank = match rule.kind {
                RuleKind::Collection if rule.field == "documents" => FieldValue::Documents(vec![]),
                RuleKind::Collection => FieldValue::Selections(vec![]),
                _ => FieldValue::text("   "),
            };
            let errors = validate(&snapshot_with(rule.field, blank), today());
            let (field, message) = only_error(&errors);
            assert_eq!(field, rule.field);
            assert_eq!(message, rule.messages.required);
        }
    }

    #[test]
    fn test_empty_snapshot_fails_every_rule() {
        let errors = validate(&Snapshot::default(), today());
        assert_eq!(errors.len(), RULES.len());
    }

    #[test]
    fn test_invalid_email() {
        for bad in ["ada", "ada@", "ada@example", "a da@example.com"] {
            let errors = validate(&snapshot_with("email", FieldValue::text(bad)), today());
            assert_eq!(only_error(&errors), ("email", "Invalid email"), "{bad}");
        }
    }

    #[test]
    fn test_birth_date_in_future() {
        let errors = validate(
            &snapshot_with("dateOfBirth", FieldValue::text("2024-06-16")),
            today(),
        );
        assert_eq!(
            only_error(&errors),
            ("dateOfBirth", "Date of Birth cannot be in the future")
        );
    }

    #[test]
    fn test_birth_date_today_is_valid() {
        let errors = validate(
            &snapshot_with("dateOfBirth", FieldValue::text("2024-06-15")),
            today(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unparsable_date() {
        let errors = validate(
            &snapshot_with("programStartDate", FieldValue::text("next autumn")),
            today(),
        );
        assert_eq!(
            only_error(&errors),
            ("programStartDate", "Program Start Date must be a valid date")
        );
    }

    #[test]
    fn test_program_start_may_be_in_future() {
        let errors = validate(
            &snapshot_with("programStartDate", FieldValue::text("2030-01-01")),
            today(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_budget_rules() {
        let cases = [
            ("-5", "Budget must be positive"),
            ("0", "Budget must be positive"),
            ("lots", "Budget must be a number"),
            ("inf", "Budget must be a number"),
            ("", "Budget is required"),
        ];
        for (input, expected) in cases {
            let errors = validate(&snapshot_with("budget", FieldValue::text(input)), today());
            assert_eq!(only_error(&errors), ("budget", expected), "{input}");
        }
    }

    #[test]
    fn test_budget_accepts_decimals() {
        let errors = validate(&snapshot_with("budget", FieldValue::text("0.5")), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_text_value_in_collection_field_counts_as_empty() {
        let errors = validate(
            &snapshot_with("preferredCountries", FieldValue::text("France")),
            today(),
        );
        assert_eq!(
            only_error(&errors),
            ("preferredCountries", "At least one country must be selected")
        );
    }

    #[test]
    fn test_optional_rule_skips_empty_value() {
        let rule = ValidationRule {
            required: false,
            ..*crate::state::wizard::rule_for("email").unwrap()
        };
        let snapshot: Snapshot = [("email", FieldValue::text(""))].into_iter().collect();
        assert!(validate_rules([&rule], &snapshot, today()).is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let snapshot = snapshot_with("budget", FieldValue::text("-1"));
        assert_eq!(validate(&snapshot, today()), validate(&snapshot, today()));
    }
}
