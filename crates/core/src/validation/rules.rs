//! Validation rule and result types, plus the staff rule tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CoreError, ValidationFailure};
use crate::staff::Field;

/// Exactly eleven ASCII digits.
pub const PHONE_PATTERN: &str = r"^[0-9]{11}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

/// What a [`FieldRule`] checks.
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// Text must be non-empty; numbers must be non-zero.
    Required,
    MinLength(u64),
    MaxLength(u64),
    ExactLength(u64),
    Pattern(&'static LazyLock<Regex>),
    /// Both bounds inclusive.
    InclusiveRange { min: i32, max: i32 },
}

impl RuleKind {
    pub fn rule_type(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinLength(_) => "min_length",
            RuleKind::MaxLength(_) => "max_length",
            RuleKind::ExactLength(_) => "exact_length",
            RuleKind::Pattern(_) => "regex_pattern",
            RuleKind::InclusiveRange { .. } => "inclusive_range",
        }
    }
}

/// A single-field constraint.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub kind: RuleKind,
}

/// Cross-field clause: when `access_level` matches, salary must be strictly
/// greater than `min_exclusive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryFloorRule {
    pub access_level: i32,
    pub min_exclusive: i32,
}

impl SalaryFloorRule {
    pub const RULE_TYPE: &'static str = "salary_floor";
}

const fn rule(field: Field, kind: RuleKind) -> FieldRule {
    FieldRule { field, kind }
}

/// Field rules for [`StaffPerson`](crate::staff::StaffPerson), in evaluation
/// order.
pub static STAFF_FIELD_RULES: &[FieldRule] = &[
    rule(Field::Name, RuleKind::Required),
    rule(Field::Name, RuleKind::MinLength(5)),
    rule(Field::Name, RuleKind::MaxLength(100)),
    rule(Field::Lastname, RuleKind::Required),
    rule(Field::Lastname, RuleKind::MinLength(5)),
    rule(Field::Lastname, RuleKind::MaxLength(100)),
    rule(Field::Phone, RuleKind::Required),
    rule(Field::Phone, RuleKind::ExactLength(11)),
    rule(Field::Phone, RuleKind::Pattern(&PHONE_RE)),
    rule(Field::AccessLevel, RuleKind::Required),
    rule(Field::AccessLevel, RuleKind::InclusiveRange { min: 1, max: 5 }),
    rule(Field::Salary, RuleKind::Required),
    rule(Field::Salary, RuleKind::InclusiveRange { min: 5000, max: 50000 }),
];

/// Salary floors by access level. Level 5 has no clause and is bounded only
/// by the base salary range.
pub static SALARY_FLOOR_RULES: &[SalaryFloorRule] = &[
    SalaryFloorRule { access_level: 1, min_exclusive: 10000 },
    SalaryFloorRule { access_level: 2, min_exclusive: 20000 },
    SalaryFloorRule { access_level: 3, min_exclusive: 30000 },
    SalaryFloorRule { access_level: 4, min_exclusive: 40000 },
];

/// Whether a violation belongs to one field or to the record as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationScope {
    Field(Field),
    Record,
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub scope: ViolationScope,
    pub rule_type: &'static str,
    pub message: String,
}

/// Aggregated result of evaluating all rules against one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    /// Convert into `Ok(())` when valid, otherwise a [`CoreError::Validation`]
    /// carrying every message in order.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            return Ok(());
        }
        let messages = self.violations.into_iter().map(|v| v.message).collect();
        Err(CoreError::Validation(ValidationFailure::new(messages)))
    }
}
