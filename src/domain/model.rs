use serde::{Deserialize, Serialize};
use std::fmt;

/// 表單上需要驗證與格式化的欄位種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[serde(alias = "lat")]
    Latitude,
    #[serde(alias = "lng", alias = "lon")]
    Longitude,
    Phone,
    Email,
    Time,
}

/// A single problem found on a form, ready to render next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub value: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// 1-based data row, header excluded
    pub row: usize,
    pub column: String,
    pub value: String,
    pub formatted: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub name: String,
    pub total_rows: usize,
    pub rows_with_issues: usize,
    pub issues: Vec<RowIssue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} rows checked, {} with issues",
            self.name, self.total_rows, self.rows_with_issues
        )?;
        for issue in &self.issues {
            writeln!(
                f,
                "  row {} [{}] '{}': {}",
                issue.row, issue.column, issue.value, issue.message
            )?;
        }
        Ok(())
    }
}
