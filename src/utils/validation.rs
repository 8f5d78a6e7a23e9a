use crate::domain::model::{FieldIssue, FieldKind};
use crate::utils::error::{FieldsError, Result};
use std::collections::HashSet;
use std::fmt::Display;
use std::ops::RangeInclusive;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The first issue as an error, for submit handlers that stop at one.
pub fn first_issue(issues: Vec<FieldIssue>) -> Result<()> {
    match issues.into_iter().next() {
        Some(issue) => Err(FieldsError::InvalidFieldError {
            field: issue.field,
            value: issue.value,
            reason: issue.message,
        }),
        None => Ok(()),
    }
}

/// Accumulates every problem on a form so each input can show its own message.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<FieldIssue>,
}

impl IssueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, field: &str, value: &str, ok: bool, message: &str) {
        if !ok {
            self.issues.push(FieldIssue::new(field, value, message));
        }
    }

    pub fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.issues
                .push(FieldIssue::new(field, value, format!("{} is required", field)));
        }
    }

    /// Runs the rule for `kind`; a blank value is an issue only when `required`.
    pub fn check_field(&mut self, field: &str, kind: FieldKind, value: &str, required: bool) {
        if value.trim().is_empty() {
            if required {
                self.require_text(field, value);
            }
            return;
        }
        self.check(field, value, kind.validate(value), kind.rule_message());
    }

    pub fn check_range<T: PartialOrd + Display + Copy>(
        &mut self,
        field: &str,
        value: T,
        range: RangeInclusive<T>,
    ) {
        if !range.contains(&value) {
            self.issues.push(FieldIssue::new(
                field,
                value.to_string(),
                format!("Value must be between {} and {}", range.start(), range.end()),
            ));
        }
    }

    pub fn finish(self) -> Vec<FieldIssue> {
        self.issues
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FieldsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FieldsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(FieldsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(FieldsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FieldsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a>(field_name: &str, values: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(FieldsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "data/people.csv").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input.path", "people.csv", &["csv", "tsv"]).is_ok());
        assert!(validate_file_extension("input.path", "PEOPLE.TSV", &["csv", "tsv"]).is_ok());
        assert!(validate_file_extension("input.path", "people.txt", &["csv", "tsv"]).is_err());
        assert!(validate_file_extension("input.path", "people", &["csv", "tsv"]).is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("columns", ["email", "phone"]).is_ok());
        assert!(validate_unique("columns", ["email", "email"]).is_err());
    }

    #[test]
    fn test_collector_optional_and_required_fields() {
        let mut issues = IssueCollector::new();
        issues.check_field("home_phone", FieldKind::Phone, "", false);
        issues.check_field("phone", FieldKind::Phone, "", true);
        issues.check_field("email", FieldKind::Email, "a@b", true);
        issues.check_range("frequency", 7u8, 1..=6);
        let issues = issues.finish();

        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].message, "phone is required");
        assert_eq!(issues[1].message, "Please enter a valid email address");
        assert_eq!(issues[2].message, "Value must be between 1 and 6");
    }

    #[test]
    fn test_first_issue() {
        assert!(first_issue(Vec::new()).is_ok());
        let err = first_issue(vec![FieldIssue::new("email", "x", "bad")]).unwrap_err();
        assert!(matches!(err, FieldsError::InvalidFieldError { ref field, .. } if field == "email"));
    }
}
