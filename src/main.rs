use clap::Parser;
use exrsim_fields::utils::error::{ErrorSeverity, FieldsError};
use exrsim_fields::utils::{logger, validation::Validate};
use exrsim_fields::{BatchChecker, CheckConfig, CliConfig, Command, FieldKind};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let exit_code = match config.command {
        Command::Validate { kind, values } => validate_values(kind, &values),
        Command::Format { kind, values } => {
            for value in &values {
                println!("{}", kind.format(value));
            }
            0
        }
        Command::Check {
            config: config_path,
            dry_run,
        } => match run_check(&config_path, dry_run) {
            Ok(code) => code,
            Err(e) => report_failure(&e),
        },
    };

    std::process::exit(exit_code);
}

fn validate_values(kind: FieldKind, values: &[String]) -> i32 {
    let mut all_valid = true;
    for value in values {
        if kind.validate(value) {
            println!("✅ {}", value);
        } else {
            all_valid = false;
            println!("❌ {} ({})", value, kind.rule_message());
        }
    }
    if all_valid {
        0
    } else {
        1
    }
}

fn run_check(config_path: &str, dry_run: bool) -> exrsim_fields::Result<i32> {
    tracing::info!("📁 Loading configuration from: {}", config_path);
    let config = CheckConfig::from_file(config_path)?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - input will not be read");
        for column in &config.columns {
            println!(
                "{} -> {} (required: {}, format: {})",
                column.name, column.kind, column.required, column.format
            );
        }
        return Ok(0);
    }

    let fail_on_issues = config.fail_on_issues();
    let print_report = config.output.report_path.is_none();
    let report_format = config.report_format().to_string();

    let checker = BatchChecker::new(config);
    let report = checker.run()?;

    if print_report {
        exrsim_fields::core::checker::write_report(&report, &report_format, std::io::stdout())?;
    }

    if fail_on_issues && !report.is_clean() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn report_failure(e: &FieldsError) -> i32 {
    tracing::error!(
        "❌ Check failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 依嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
