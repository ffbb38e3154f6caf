//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// DocFlow CLI - Classify documents and extract their fields.
#[derive(Debug, Parser)]
#[command(name = "docflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCFLOW_CONFIG")]
    pub config: Option<String>,

    /// Log classification and extraction details to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a document and show per-category scores
    Classify(InputArgs),

    /// Extract the fields of a document
    Extract(ExtractArgs),

    /// Classify, extract and map a document to its workflow task
    Process(InputArgs),

    /// List registered categories with their fields and task types
    Categories,
}

/// A document to read.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// Document path, or `-` for stdin
    pub input: String,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Category to extract as (classified automatically when omitted)
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Document path, or `-` for stdin
    pub input: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
