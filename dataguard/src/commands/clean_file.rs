//! `clean-file` command: writes a metadata-free copy of an image or PDF.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use dataguard_core::{FileCleaner, MediaKind, MetadataCleaner};

/// Options for [`run_clean_file`].
#[derive(Debug, Clone)]
pub struct CleanFileOptions {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub kind: Option<String>,
}

/// `clean_<name>` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cleaned_file".to_string());
    input.with_file_name(format!("clean_{}", name))
}

/// Cleans the input file and returns the path that was written.
pub fn run_clean_file(cleaner: &dyn FileCleaner, opts: &CleanFileOptions) -> Result<PathBuf> {
    let kind = match &opts.kind {
        Some(declared) => MediaKind::from_declared(declared)?,
        None => MediaKind::from_extension(&opts.input_path)?,
    };

    let bytes = fs::read(&opts.input_path)
        .with_context(|| format!("Failed to read input file: {}", opts.input_path.display()))?;
    let cleaned = cleaner
        .clean(&bytes, kind)
        .with_context(|| format!("Failed to clean {}", opts.input_path.display()))?;

    let output = opts
        .output_path
        .clone()
        .unwrap_or_else(|| default_output_path(&opts.input_path));
    fs::write(&output, &cleaned).with_context(|| format!("Failed to write output file: {}", output.display()))?;

    info!(
        "Cleaned {} ({}) -> {} ({} bytes).",
        opts.input_path.display(),
        kind,
        output.display(),
        cleaned.len()
    );
    Ok(output)
}

/// Convenience wrapper over the default cleaner.
pub fn clean_with_default(opts: &CleanFileOptions) -> Result<PathBuf> {
    run_clean_file(&MetadataCleaner, opts)
}
