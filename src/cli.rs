use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::analyzer::ClassScope;
use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Lines attributed to each class record
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeChoice {
    /// Whole-file counts for every class
    File,
    /// Only the lines inside the class body
    Body,
}

impl From<ScopeChoice> for ClassScope {
    fn from(choice: ScopeChoice) -> Self {
        match choice {
            ScopeChoice::File => Self::File,
            ScopeChoice::Body => Self::Body,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "loc-inspect")]
#[command(author, version, about = "Count physical and logical lines of code and enforce brace-language style rules")]
#[command(long_about = "Counts physical and logical lines of code per program and per class, \
    skipping files that break the style rules.\n\n\
    Without a subcommand an interactive session is started.\n\n\
    Exit codes:\n  \
    0 - Analysis completed\n  \
    1 - Style violations found (with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one directory and print the report
    Analyze(AnalyzeArgs),

    /// Prompt for directories to analyze until told to stop
    Interactive(InteractiveArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnalyzeArgs {
    /// Directory to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: table, legacy, json]
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Source file extensions (comma-separated, e.g., java,jav)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Maximum characters per trimmed line (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Report every style violation instead of stopping at the first per file
    #[arg(long)]
    pub collect_all: bool,

    /// Lines attributed to each class (overrides config)
    #[arg(long, value_enum)]
    pub class_scope: Option<ScopeChoice>,

    /// Respect .gitignore rules while scanning
    #[arg(long)]
    pub gitignore: bool,

    /// Exit with code 1 when any file was skipped
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug, Default)]
pub struct InteractiveArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: table, legacy, json]
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
