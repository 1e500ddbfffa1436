use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::prospects::models::TargetingCriteria;

/// Longest accepted value for any single form field, in characters.
pub const MAX_FIELD_CHARS: usize = 200;

/// Raw form input. Missing JSON fields deserialize as empty so that they are
/// reported as validation issues rather than as a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaInput {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub demographic: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub industry_focus: Option<String>,
    #[serde(default)]
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub reason: String,
}

/// Collects every problem with the input, required fields first.
pub fn find_field_issues(input: &CriteriaInput) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    let required = [
        ("location", input.location.as_str()),
        ("demographic", input.demographic.as_str()),
        ("industry", input.industry.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(FieldIssue {
                field,
                reason: "is required".to_string(),
            });
        }
    }

    let all = required.into_iter().chain([
        ("industry_focus", input.industry_focus.as_deref().unwrap_or_default()),
        ("target_role", input.target_role.as_deref().unwrap_or_default()),
    ]);
    for (field, value) in all {
        if value.trim().chars().count() > MAX_FIELD_CHARS {
            issues.push(FieldIssue {
                field,
                reason: format!("must be at most {MAX_FIELD_CHARS} characters"),
            });
        }
    }

    issues
}

/// Validates and normalizes form input into `TargetingCriteria`.
///
/// Fails with `AppError::Validation` naming every offending field; the
/// generation core is never invoked with blank required fields.
pub fn validate_criteria(input: &CriteriaInput) -> Result<TargetingCriteria, AppError> {
    let issues = find_field_issues(input);
    if !issues.is_empty() {
        let detail = issues
            .iter()
            .map(|i| format!("{} {}", i.field, i.reason))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AppError::Validation(format!(
            "Please fill in all fields to continue ({detail})"
        )));
    }

    Ok(TargetingCriteria {
        location: input.location.trim().to_string(),
        demographic: input.demographic.trim().to_string(),
        industry: input.industry.trim().to_string(),
        industry_focus: normalize_optional(input.industry_focus.as_deref()),
        target_role: normalize_optional(input.target_role.as_deref()),
    })
}

/// Trims an optional field; blank becomes `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
