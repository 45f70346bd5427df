use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::super::domain::ApplicationDraft;

/// Field key a validation message is displayed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorField {
    Age,
    InpatientLimit,
    SpouseAge,
    NumberOfChildren,
    Maternity,
    Dental,
}

impl ErrorField {
    pub const fn key(self) -> &'static str {
        match self {
            ErrorField::Age => "age",
            ErrorField::InpatientLimit => "inpatientLimit",
            ErrorField::SpouseAge => "spouseAge",
            ErrorField::NumberOfChildren => "numberOfChildren",
            ErrorField::Maternity => "maternity",
            ErrorField::Dental => "dental",
        }
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Eligibility rule that produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    PrincipalAgeRange,
    InpatientLimitRequired,
    SpouseAgeRange,
    PrincipalOverSeniorAge,
    SpouseOverSeniorAge,
    ChildrenCountRange,
    ChildrenDependencies,
    MaternityDependencies,
    DentalDependencies,
}

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ErrorField,
    pub rule: ValidationRule,
    pub message: String,
}

/// Every rule violation found in a draft, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, field: ErrorField, rule: ValidationRule, message: &str) {
        self.errors.push(FieldError {
            field,
            rule,
            message: message.to_string(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_error(&self, field: ErrorField) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn has_rule(&self, rule: ValidationRule) -> bool {
        self.errors.iter().any(|error| error.rule == rule)
    }

    pub fn messages_for(&self, field: ErrorField) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message.as_str())
            .collect()
    }

    /// Messages grouped by field for display next to each control.
    pub fn by_field(&self) -> BTreeMap<ErrorField, Vec<String>> {
        let mut grouped: BTreeMap<ErrorField, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            grouped
                .entry(error.field)
                .or_default()
                .push(error.message.clone());
        }
        grouped
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("draft is valid");
        }
        let rendered: Vec<String> = self
            .errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect();
        f.write_str(&rendered.join("; "))
    }
}

/// Draft that passed every eligibility rule. Only the rule set can produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft(ApplicationDraft);

impl ValidatedDraft {
    pub(super) fn new(draft: ApplicationDraft) -> Self {
        Self(draft)
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.0
    }

    pub fn into_inner(self) -> ApplicationDraft {
        self.0
    }
}
