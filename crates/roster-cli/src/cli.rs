//! CLI argument definitions for the roster toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Student roster toolkit - import records, assign emails, export",
    long_about = "Import student records from CSV, XML, or JSON files, assign each\n\
                  student a deterministic, de-duplicated email address, and re-export\n\
                  the roster. Duplicate names are disambiguated by a numeric suffix\n\
                  in input order."
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
    /// Import a roster, assign de-duplicated email addresses, and print it.
    Assign(AssignArgs),

    /// Convert a roster file to another format.
    Convert(ConvertArgs),

    /// Show class and student statistics for a roster file.
    Stats(StatsArgs),
}

#[derive(Parser)]
pub struct AssignArgs {
    /// Path to the roster file (CSV, XML, or JSON).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Input format (default: inferred from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<InputFormatArg>,

    /// Write the updated roster to this path after assignment.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (default: inferred from --output).
    ///
    /// When set without --output, the roster is written next to the input
    /// file under a date-stamped name.
    #[arg(long = "output-format", value_enum)]
    pub output_format: Option<OutputFormatArg>,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the roster file (CSV, XML, or JSON).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Input format (default: inferred from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<InputFormatArg>,

    /// Target format.
    #[arg(long = "to", value_enum)]
    pub to: OutputFormatArg,

    /// Output path (default: date-stamped sibling of the input file).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Path to the roster file (CSV, XML, or JSON).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Input format (default: inferred from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<InputFormatArg>,
}

/// Importable roster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormatArg {
    Csv,
    Xml,
    Json,
}

/// Exportable roster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Xml,
    Json,
}

impl OutputFormatArg {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormatArg::Xml => "xml",
            OutputFormatArg::Json => "json",
        }
    }
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
