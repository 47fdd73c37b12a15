//! Rule evaluator — pure logic, no I/O.

use rust_decimal::Decimal;
use validator::{ValidateLength, ValidateRange};

use super::rules::{
    FieldRule, RuleKind, SalaryFloorRule, ValidationResult, Violation, ViolationScope,
    SALARY_FLOOR_RULES, STAFF_FIELD_RULES,
};
use crate::staff::{Field, FieldValue, StaffPerson};

/// Validate a staff record against the full staff rule set.
///
/// Field rules run first, then the salary floor clauses. Nothing
/// short-circuits: every failing rule contributes one violation.
pub fn validate_staff_person(person: &StaffPerson) -> ValidationResult {
    let mut violations = evaluate_field_rules(STAFF_FIELD_RULES, person);
    violations.extend(evaluate_record_rules(SALARY_FLOOR_RULES, person));
    ValidationResult::from_violations(violations)
}

/// Evaluate single-field rules in order.
pub fn evaluate_field_rules(rules: &[FieldRule], person: &StaffPerson) -> Vec<Violation> {
    rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, person.value_of(rule.field)))
        .collect()
}

/// Evaluate salary floor clauses in order. A clause whose access level does
/// not match the record is skipped.
pub fn evaluate_record_rules(rules: &[SalaryFloorRule], person: &StaffPerson) -> Vec<Violation> {
    rules
        .iter()
        .filter(|rule| rule.access_level == person.access_level)
        .filter(|rule| person.salary <= Decimal::from(rule.min_exclusive))
        .map(|rule| Violation {
            scope: ViolationScope::Record,
            rule_type: SalaryFloorRule::RULE_TYPE,
            message: format!(
                "'{}' must be greater than {} when access level is {}. You entered {}.",
                Field::Salary.display_name(),
                rule.min_exclusive,
                rule.access_level,
                FieldValue::Decimal(person.salary),
            ),
        })
        .collect()
}

fn evaluate_single_rule(rule: &FieldRule, value: FieldValue<'_>) -> Option<Violation> {
    let label = rule.field.display_name();

    let message = match (rule.kind, value) {
        (RuleKind::Required, value) => {
            let present = match value {
                FieldValue::Text(s) => !s.is_empty(),
                FieldValue::Integer(n) => n != 0,
                FieldValue::Decimal(n) => !n.is_zero(),
            };
            (!present).then(|| format!("'{label}' must not be empty."))
        }
        (RuleKind::MinLength(min), FieldValue::Text(s)) => {
            (!s.validate_length(Some(min), None, None)).then(|| {
                format!(
                    "The length of '{label}' must be at least {min} characters. You entered {} characters.",
                    char_count(s)
                )
            })
        }
        (RuleKind::MaxLength(max), FieldValue::Text(s)) => {
            (!s.validate_length(None, Some(max), None)).then(|| {
                format!(
                    "The length of '{label}' must be {max} characters or fewer. You entered {} characters.",
                    char_count(s)
                )
            })
        }
        (RuleKind::ExactLength(len), FieldValue::Text(s)) => {
            (!s.validate_length(None, None, Some(len))).then(|| {
                format!(
                    "'{label}' must be {len} characters in length. You entered {} characters.",
                    char_count(s)
                )
            })
        }
        (RuleKind::Pattern(re), FieldValue::Text(s)) => {
            (!re.is_match(s)).then(|| format!("'{label}' is not in the correct format."))
        }
        (RuleKind::InclusiveRange { min, max }, value) => {
            let in_range = match value {
                FieldValue::Integer(n) => n.validate_range(Some(min), Some(max), None, None),
                FieldValue::Decimal(n) => (Decimal::from(min)..=Decimal::from(max)).contains(&n),
                FieldValue::Text(_) => true,
            };
            (!in_range).then(|| format!("'{label}' must be between {min} and {max}. You entered {value}."))
        }
        // Length and pattern rules only apply to text.
        _ => None,
    }?;

    Some(Violation {
        scope: ViolationScope::Field(rule.field),
        rule_type: rule.kind.rule_type(),
        message,
    })
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}
