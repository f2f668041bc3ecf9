// dataguard/src/commands/mod.rs
//! Command implementations and the small helpers they share.
//! License: MIT OR APACHE 2.0

pub mod clean_file;
pub mod scan;
pub mod scrub;
pub mod serve;

use anyhow::{Context, Result};
use dataguard_core::{compile_rules, RedactionConfig, RegexEngine};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the engine from the built-in rules, or from a custom rules file.
pub fn build_engine(rules: Option<&Path>) -> Result<RegexEngine> {
    match rules {
        None => RegexEngine::new().context("Failed to compile the built-in rules"),
        Some(path) => {
            debug!("Loading custom rules from {}", path.display());
            let config = RedactionConfig::load_from_file(path)?;
            let registry = compile_rules(&config)
                .with_context(|| format!("Failed to compile rules from {}", path.display()))?;
            Ok(RegexEngine::with_registry(Arc::new(registry)))
        }
    }
}
