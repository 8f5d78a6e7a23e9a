use crate::domain::model::FieldKind;
use crate::utils::error::{FieldsError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub check: CheckInfo,
    pub input: InputConfig,
    pub columns: Vec<ColumnBinding>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    pub delimiter: Option<String>,
    pub has_headers: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnBinding {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// 驗證前先套用格式化
    #[serde(default)]
    pub format: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub report_path: Option<String>,
    pub normalized_path: Option<String>,
    pub report_format: Option<String>,
    pub fail_on_issues: Option<bool>,
}

impl CheckConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FieldsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FieldsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn delimiter(&self) -> u8 {
        self.input
            .delimiter
            .as_deref()
            .and_then(|d| d.bytes().next())
            .unwrap_or(b',')
    }

    pub fn has_headers(&self) -> bool {
        self.input.has_headers.unwrap_or(true)
    }

    pub fn report_format(&self) -> &str {
        self.output.report_format.as_deref().unwrap_or("text")
    }

    pub fn fail_on_issues(&self) -> bool {
        self.output.fail_on_issues.unwrap_or(true)
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("check.name", &self.check.name)?;
        validate_path("input.path", &self.input.path)?;
        validate_file_extension("input.path", &self.input.path, &["csv", "tsv"])?;

        if let Some(delimiter) = &self.input.delimiter {
            if delimiter.len() != 1 || !delimiter.is_ascii() {
                return Err(FieldsError::InvalidConfigValueError {
                    field: "input.delimiter".to_string(),
                    value: delimiter.clone(),
                    reason: "Delimiter must be a single ASCII character".to_string(),
                });
            }
        }

        if self.columns.is_empty() {
            return Err(FieldsError::MissingConfigError {
                field: "columns".to_string(),
            });
        }
        for (index, column) in self.columns.iter().enumerate() {
            validate_non_empty_string(&format!("columns[{}].name", index), &column.name)?;
        }
        validate_unique("columns.name", self.columns.iter().map(|c| c.name.as_str()))?;

        let valid_formats = ["json", "text"];
        if !valid_formats.contains(&self.report_format()) {
            return Err(FieldsError::InvalidConfigValueError {
                field: "output.report_format".to_string(),
                value: self.report_format().to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }

        if let Some(path) = &self.output.normalized_path {
            validate_path("output.normalized_path", path)?;
        }
        if let Some(path) = &self.output.report_path {
            validate_path("output.report_path", path)?;
        }

        Ok(())
    }
}
