use crate::io::SessionConfig;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Manage interest-bearing bank accounts from a text menu
#[derive(Parser, Debug)]
#[command(name = "interest-bank")]
#[command(about = "Manage interest-bearing bank accounts from a text menu", long_about = None)]
pub struct CliArgs {
    /// Initial system date used for long-term interest
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        default_value = "2023-05-05",
        help = "Initial system date (default: 2023-05-05)"
    )]
    pub start_date: NaiveDate,

    /// Seed for lottery draws
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed for lottery draws (default: random)"
    )]
    pub seed: Option<u64>,

    /// Hide the menu banner and prompts
    #[arg(long = "no-menu", help = "Hide the menu banner and prompts, for scripted input")]
    pub no_menu: bool,

    /// Write the final account listing to a CSV file on exit
    #[arg(
        long = "export",
        value_name = "PATH",
        help = "Write the final account listing as CSV to PATH on exit"
    )]
    pub export: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for stderr output: error, warn, info, debug, trace"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            start_date: self.start_date,
            seed: self.seed,
            show_menu: !self.no_menu,
        }
    }
}
