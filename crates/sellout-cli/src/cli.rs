//! CLI argument definitions for the sellout compiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sellout",
    version,
    about = "Compile monthly JBP sellout exports into one trusted dataset",
    long_about = "Compile the raw JBP sellout CSV exports for one reference month\n\
                  into a single cleaned, period-filtered dataset.\n\n\
                  Reads semicolon-delimited CSVs under raw/jbp/<year>/<month>/ of the\n\
                  bucket root and writes the compiled file under trusted/jbp/."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile the sellout data for one reference period.
    Run(RunArgs),

    /// List the canonical output columns in order.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Bucket root directory holding raw/ and trusted/.
    #[arg(long = "root", value_name = "DIR")]
    pub root: PathBuf,

    /// Reference month (1-12).
    #[arg(long = "month", value_name = "M")]
    pub month: u32,

    /// Reference year.
    #[arg(long = "year", value_name = "YYYY")]
    pub year: i32,

    /// What to do when a canonical column is absent from the inputs.
    #[arg(
        long = "missing-columns",
        value_enum,
        default_value = "fill-empty",
        value_name = "POLICY"
    )]
    pub missing_columns: MissingColumnsArg,

    /// Load and normalize but skip the trusted write.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// Missing canonical column policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MissingColumnsArg {
    /// Fail the run, naming every absent column.
    Reject,
    /// Synthesize absent columns with empty values.
    FillEmpty,
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
