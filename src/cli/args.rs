//! Command line argument parsing for the kotoba CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::CounterConfig;

/// kotoba - word counting and reading metrics across writing systems
#[derive(Parser, Debug, Clone)]
#[command(name = "kotoba")]
#[command(about = "Word counting, keyword scoring and reading metrics across writing systems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KotobaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KotobaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count the words in the input
    Count(InputArgs),

    /// List every word in the input
    Parse(InputArgs),

    /// List space-separated tokens before script segmentation
    Tokenize(InputArgs),

    /// Score the input against query keywords
    Search(SearchArgs),

    /// Estimate reading times for the input
    Metrics(MetricsArgs),
}

/// Input source and punctuation handling, shared by all commands.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Text to analyze; reads standard input when neither this nor
    /// --file is given
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Extra punctuation characters to recognize
    #[arg(short, long, value_name = "CHARS")]
    pub punctuation: Option<String>,

    /// Treat punctuation as a word break instead of deleting it
    #[arg(long)]
    pub punctuation_as_breaker: bool,

    /// Recognize only the characters given with --punctuation
    #[arg(long)]
    pub no_default_punctuation: bool,
}

impl InputArgs {
    /// Build the counter configuration described by these flags.
    pub fn counter_config(&self) -> CounterConfig {
        let mut config = CounterConfig::new()
            .with_punctuation_as_breaker(self.punctuation_as_breaker)
            .with_disable_default_punctuation(self.no_default_punctuation);
        if let Some(chars) = &self.punctuation {
            config = config.with_punctuation(chars.chars());
        }
        config
    }
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query keywords
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the metrics command
#[derive(Parser, Debug, Clone)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Average reading speed in words per minute
    #[arg(long, value_name = "WPM")]
    pub average_wpm: Option<f64>,

    /// Relaxed reading speed in words per minute
    #[arg(long, value_name = "WPM")]
    pub relaxed_wpm: Option<f64>,
}

impl MetricsArgs {
    /// Build the counter configuration described by these flags.
    pub fn counter_config(&self) -> CounterConfig {
        let mut config = self.input.counter_config();
        if let Some(wpm) = self.average_wpm {
            config = config.with_average_wpm(wpm);
        }
        if let Some(wpm) = self.relaxed_wpm {
            config = config.with_relaxed_wpm(wpm);
        }
        config
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
