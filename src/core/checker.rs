use crate::config::toml_config::{CheckConfig, ColumnBinding};
use crate::domain::model::{CheckReport, RowIssue};
use crate::utils::error::{FieldsError, Result};
use crate::utils::validation::IssueCollector;
use csv::StringRecord;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Result of checking one table: the report plus the rows with formatted
/// values substituted into the bound columns.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub report: CheckReport,
    pub headers: Option<StringRecord>,
    pub normalized: Vec<StringRecord>,
}

pub struct BatchChecker {
    config: CheckConfig,
}

impl BatchChecker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Checks the configured input file and writes whatever outputs are configured.
    pub fn run(&self) -> Result<CheckReport> {
        let input_path = &self.config.input.path;
        tracing::info!("📥 Checking {} ({})", input_path, self.config.check.name);

        let file = File::open(input_path)?;
        let outcome = self.check_reader(file, input_path)?;

        if let Some(path) = &self.config.output.normalized_path {
            let writer = create_output(path)?;
            self.write_normalized(&outcome, writer)?;
            tracing::info!("📁 Normalized rows written to: {}", path);
        }

        if let Some(path) = &self.config.output.report_path {
            let writer = create_output(path)?;
            write_report(&outcome.report, self.config.report_format(), writer)?;
            tracing::info!("📁 Report written to: {}", path);
        }

        if outcome.report.is_clean() {
            tracing::info!("✅ {} rows checked, no issues", outcome.report.total_rows);
        } else {
            tracing::warn!(
                "⚠️ {} of {} rows have issues ({} total)",
                outcome.report.rows_with_issues,
                outcome.report.total_rows,
                outcome.report.issues.len()
            );
        }

        Ok(outcome.report)
    }

    /// `source` only names the input in errors and logs.
    pub fn check_reader<R: Read>(&self, reader: R, source: &str) -> Result<CheckOutcome> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter())
            .has_headers(self.config.has_headers())
            .from_reader(reader);

        let headers = if self.config.has_headers() {
            Some(reader.headers()?.clone())
        } else {
            None
        };

        let bindings = self
            .config
            .columns
            .iter()
            .map(|binding| {
                resolve_column(headers.as_ref(), binding, source).map(|index| (index, binding))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut report = CheckReport {
            name: self.config.check.name.clone(),
            ..Default::default()
        };
        let mut normalized = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index + 1;
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            let mut row_has_issue = false;

            for &(column, binding) in &bindings {
                let raw = cells.get(column).cloned().unwrap_or_default();
                let value = if binding.format {
                    binding.kind.format(&raw)
                } else {
                    raw.clone()
                };

                let mut issues = IssueCollector::new();
                issues.check_field(&binding.name, binding.kind, &value, binding.required);
                for issue in issues.finish() {
                    tracing::debug!("row {} [{}]: {}", row, issue.field, issue.message);
                    row_has_issue = true;
                    report.issues.push(RowIssue {
                        row,
                        column: issue.field,
                        value: raw.clone(),
                        formatted: issue.value,
                        message: issue.message,
                    });
                }

                if let Some(cell) = cells.get_mut(column) {
                    *cell = value;
                }
            }

            report.total_rows += 1;
            if row_has_issue {
                report.rows_with_issues += 1;
            }
            normalized.push(StringRecord::from(cells));
        }

        Ok(CheckOutcome {
            report,
            headers,
            normalized,
        })
    }

    pub fn write_normalized<W: Write>(&self, outcome: &CheckOutcome, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter())
            .from_writer(writer);

        if let Some(headers) = &outcome.headers {
            writer.write_record(headers)?;
        }
        for record in &outcome.normalized {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

pub fn write_report<W: Write>(report: &CheckReport, format: &str, mut writer: W) -> Result<()> {
    match format {
        "json" => serde_json::to_writer_pretty(&mut writer, report)?,
        _ => write!(writer, "{}", report)?,
    }
    writer.flush()?;
    Ok(())
}

fn create_output(path: &str) -> Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

/// Header name lookup, or a 0-based index when the input has no header row.
fn resolve_column(headers: Option<&StringRecord>, binding: &ColumnBinding, source: &str) -> Result<usize> {
    let found = match headers {
        Some(headers) => headers.iter().position(|h| h.trim() == binding.name),
        None => binding.name.parse::<usize>().ok(),
    };

    found.ok_or_else(|| FieldsError::MissingColumnError {
        file: source.to_string(),
        column: binding.name.clone(),
    })
}
