use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Field '{field}' is invalid ('{value}'): {reason}")]
    InvalidFieldError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Column '{column}' not found in {file}")]
    MissingColumnError { file: String, column: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FieldsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FieldsError::IoError(_) => ErrorCategory::Io,
            FieldsError::CsvError(_)
            | FieldsError::SerializationError(_)
            | FieldsError::MissingColumnError { .. } => ErrorCategory::Data,
            FieldsError::ConfigError { .. }
            | FieldsError::InvalidConfigValueError { .. }
            | FieldsError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FieldsError::InvalidFieldError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FieldsError::InvalidFieldError { .. } => ErrorSeverity::Low,
            FieldsError::CsvError(_) | FieldsError::MissingColumnError { .. } => {
                ErrorSeverity::Medium
            }
            FieldsError::ConfigError { .. }
            | FieldsError::InvalidConfigValueError { .. }
            | FieldsError::MissingConfigError { .. }
            | FieldsError::SerializationError(_) => ErrorSeverity::High,
            FieldsError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FieldsError::IoError(_) => {
                "Check that the file exists and that you have permission to read and write it"
                    .to_string()
            }
            FieldsError::CsvError(_) => {
                "Check the CSV delimiter and that every row has the same number of columns"
                    .to_string()
            }
            FieldsError::SerializationError(_) => {
                "The report could not be serialized; try report_format = \"text\"".to_string()
            }
            FieldsError::ConfigError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            FieldsError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            FieldsError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
            FieldsError::InvalidFieldError { field, .. } => {
                format!("Correct the '{}' field and submit again", field)
            }
            FieldsError::MissingColumnError { column, .. } => format!(
                "Add a '{}' column to the input header or remove its [[columns]] entry",
                column
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FieldsError::IoError(e) => format!("Could not access a file: {}", e),
            FieldsError::CsvError(e) => format!("The input file could not be read as CSV: {}", e),
            FieldsError::InvalidFieldError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FieldsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_is_low_severity() {
        let err = FieldsError::InvalidFieldError {
            field: "phone".to_string(),
            value: "123".to_string(),
            reason: "Phone must be in format XXX-XXX-XXXX".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(
            err.user_friendly_message(),
            "phone: Phone must be in format XXX-XXX-XXXX"
        );
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: FieldsError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_missing_column_suggestion_names_column() {
        let err = FieldsError::MissingColumnError {
            file: "people.csv".to_string(),
            column: "email".to_string(),
        };
        assert!(err.recovery_suggestion().contains("'email'"));
        assert_eq!(err.to_string(), "Column 'email' not found in people.csv");
    }
}
