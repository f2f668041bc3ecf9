//! `scan` command: reports how much PII an input holds, without emitting cleaned text.
//!
//! The JSON report carries only counts and SHA-256 sample hashes; raw matched values are
//! never written.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use is_terminal::IsTerminal;
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use uuid::Uuid;

use dataguard_core::{RedactionSummaryItem, SanitizationEngine};

use super::info_msg;
use crate::ui::redaction_summary;

/// Options for [`run_scan`].
#[derive(Debug, Default, Clone)]
pub struct ScanOptions {
    pub input: String,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub fail_over_threshold: Option<usize>,
    pub quiet: bool,
}

/// The exported scan report.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub run_id: String,
    pub timestamp: String,
    pub total: usize,
    pub items: Vec<RedactionSummaryItem>,
}

impl ScanReport {
    pub fn new(items: Vec<RedactionSummaryItem>) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            total: items.iter().map(|item| item.occurrences).sum(),
            items,
        }
    }

    /// True when a threshold is set and the total is above it.
    pub fn exceeds(&self, threshold: Option<usize>) -> bool {
        threshold.is_some_and(|limit| self.total > limit)
    }
}

/// Scans `opts.input`, prints or exports the report, and returns it.
pub fn run_scan(engine: &dyn SanitizationEngine, opts: &ScanOptions) -> Result<ScanReport> {
    info!("Starting scan operation.");
    let report = ScanReport::new(engine.analyze_for_stats(&opts.input));
    info!("Scan {} found {} item(s).", report.run_id, report.total);

    if opts.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        serde_json::to_writer_pretty(&mut writer, &report).context("Failed to serialize scan report")?;
        writeln!(writer)?;
    } else if !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(&report.items, &mut io::stderr(), stderr_supports_color)?;
    }

    if let Some(path) = &opts.json_file {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?;
        fs::write(path, json).with_context(|| format!("Failed to write scan report: {}", path.display()))?;
        if !opts.quiet {
            info_msg(format!("Scan report written to {}", path.display()));
        }
    }

    if report.exceeds(opts.fail_over_threshold) {
        warn!(
            "Scan total {} exceeds threshold {:?}.",
            report.total, opts.fail_over_threshold
        );
    }

    Ok(report)
}
