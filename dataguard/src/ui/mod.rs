// dataguard/src/ui/mod.rs
//! Console presentation: status messages, redaction summaries and diffs.

pub mod diff_viewer;
pub mod output_format;
pub mod redaction_summary;
