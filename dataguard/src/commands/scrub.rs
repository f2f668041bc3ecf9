//! `scrub` command: redacts PII from text and writes the cleaned result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use dataguard_core::{SanitizationEngine, ScrubResult};

use super::info_msg;
use crate::ui::{diff_viewer, redaction_summary};

/// Options for [`run_scrub`].
#[derive(Debug, Default, Clone)]
pub struct ScrubOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub json: bool,
    pub diff: bool,
    pub no_redaction_summary: bool,
    pub quiet: bool,
}

/// Scrubs `opts.input` and writes the result to stdout or `opts.output_path`.
pub fn run_scrub(engine: &dyn SanitizationEngine, opts: &ScrubOptions) -> Result<ScrubResult> {
    info!("Starting scrub operation.");
    let result = engine.sanitize(&opts.input);
    debug!(
        "Content scrubbed. Original length: {}, cleaned length: {}",
        opts.input.len(),
        result.clean_text.len()
    );

    handle_primary_output(opts, &result)?;
    handle_redaction_summary(opts, &result)?;

    info!("Scrub operation completed.");
    Ok(result)
}

fn write_result<W: Write>(writer: &mut W, opts: &ScrubOptions, result: &ScrubResult, supports_color: bool) -> Result<()> {
    if opts.json {
        serde_json::to_writer_pretty(&mut *writer, result).context("Failed to serialize scrub result")?;
        writeln!(writer)?;
    } else if opts.diff {
        diff_viewer::print_diff(&opts.input, &result.clean_text, writer, supports_color)?;
    } else {
        write!(writer, "{}", result.clean_text)?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_primary_output(opts: &ScrubOptions, result: &ScrubResult) -> Result<()> {
    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing cleaned content to file: {}", path.display()));
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_result(&mut file, opts, result, false)
        }
        None => {
            let stdout = io::stdout();
            let supports_color = stdout.is_terminal();
            let mut writer = stdout.lock();
            write_result(&mut writer, opts, result, supports_color)
        }
    }
}

fn handle_redaction_summary(opts: &ScrubOptions, result: &ScrubResult) -> Result<()> {
    if !opts.no_redaction_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_tally(&result.tally, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}
