//! CLI argument definitions for the enrollment validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tracker-validate",
    version,
    about = "Validate tracker enrollment imports against committed enrollments",
    long_about = "Validate a batch of tracker enrollments before import.\n\n\
                  Reads a JSON fixture holding the import bundle, the acting user, \
                  the resolved reference entities and the committed enrollments, \
                  then runs the enrollment validation hooks and reports every conflict."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record identifiers (tracked entity UIDs) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the enrollments in a fixture file.
    Validate(ValidateArgs),

    /// List the hooks of the default validation pipeline.
    Hooks,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the JSON fixture.
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Optional JSON validation config.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Let deleted committed enrollments take part in conflict checks.
    #[arg(long = "include-deleted")]
    pub include_deleted: bool,

    /// Ignore owned enrollments the user cannot read instead of failing.
    ///
    /// By default such an enrollment indicates inconsistent access control
    /// and aborts validation.
    #[arg(long = "skip-read-denied")]
    pub skip_read_denied: bool,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
