// dataguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the dataguard application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "dataguard",
    author = "DataGuard Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrub PII from text and strip metadata from files, locally",
    long_about = "DataGuard redacts emails, SSNs, Luhn-valid credit card numbers, IPv4/IPv6 addresses and AWS access keys from text, and removes embedded metadata (EXIF, XMP, document info) from images and PDFs. Nothing leaves the host: the same engine backs the CLI and the local HTTP service.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the dataguard crates)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `dataguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redacts PII from an input file or stdin.
    #[command(about = "Redacts PII from an input file or stdin.")]
    Scrub(ScrubCommand),

    /// Counts PII in an input without printing the cleaned text.
    #[command(about = "Counts PII in an input and reports a per-category summary without redacting.")]
    Scan(ScanCommand),

    /// Strips embedded metadata from an image or PDF file.
    #[command(name = "clean-file", about = "Strips embedded metadata from an image or PDF file.")]
    CleanFile(CleanFileCommand),

    /// Runs the local HTTP service.
    #[command(about = "Runs the local HTTP service.")]
    Serve(ServeCommand),
}

/// Arguments for the `scrub` command.
#[derive(Parser, Debug)]
pub struct ScrubCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write cleaned output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Print the cleaned text and tally as JSON.
    #[arg(long, conflicts_with = "diff", help = "Print the cleaned text and per-category counts as JSON.")]
    pub json: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Path to a custom rules file (YAML).
    #[arg(long = "rules", value_name = "FILE", help = "Use a custom rules file (YAML) instead of the built-in rules.")]
    pub rules: Option<PathBuf>,

    /// Suppress the redaction summary.
    #[arg(long = "no-redaction-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom rules file (YAML).
    #[arg(long = "rules", value_name = "FILE", help = "Use a custom rules file (YAML) instead of the built-in rules.")]
    pub rules: Option<PathBuf>,

    /// Exit with a non-zero code if the total number of detections exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of detections exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export scan report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan report to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print scan report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the scan report to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Arguments for the `clean-file` command.
#[derive(Parser, Debug)]
pub struct CleanFileCommand {
    /// The file to clean.
    #[arg(long, short = 'i', value_name = "FILE", help = "The image or PDF file to clean.")]
    pub input_file: PathBuf,

    /// Where to write the cleaned copy. Defaults to `clean_<name>` beside the input.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the cleaned file here instead of clean_<name> beside the input.")]
    pub output: Option<PathBuf>,

    /// Declared kind (MIME type or format name). Defaults to the file extension.
    #[arg(long, value_name = "KIND", help = "Declared kind, e.g. image/png or pdf. Defaults to the file extension.")]
    pub kind: Option<String>,
}

/// Arguments for the `serve` command.
#[derive(Parser, Debug)]
pub struct ServeCommand {
    /// Address to bind.
    #[arg(long, value_name = "HOST", env = "DATAGUARD_HOST", help = "Address to bind (overrides the config file).")]
    pub host: Option<String>,

    /// Port to bind.
    #[arg(long, short = 'p', value_name = "PORT", env = "DATAGUARD_PORT", help = "Port to bind (overrides the config file).")]
    pub port: Option<u16>,

    /// Largest accepted request body.
    #[arg(
        long,
        value_name = "BYTES",
        env = "DATAGUARD_MAX_UPLOAD_BYTES",
        help = "Largest accepted request body in bytes (overrides the config file)."
    )]
    pub max_upload_bytes: Option<usize>,

    /// Path to a service configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a service configuration file (YAML).")]
    pub config: Option<PathBuf>,
}
