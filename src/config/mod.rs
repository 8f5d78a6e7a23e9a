pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::FieldKind;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "exrsim-fields")]
#[command(about = "Validate and format exercise-planning form fields")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check values against a field rule
    Validate {
        /// lat, lng, phone, email or time
        kind: FieldKind,
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Print the canonical form of values
    Format {
        kind: FieldKind,
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Check a CSV file using a TOML configuration
    Check {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "check.toml")]
        config: String,

        /// Validate the configuration and stop
        #[arg(long)]
        dry_run: bool,
    },
}
