// dataguard-core/src/engine.rs
//! Defines the `SanitizationEngine` trait.
//!
//! The trait is the seam between the detection/rewriting logic and its callers (the CLI
//! and the HTTP service). Every method is a pure function of its input: engines hold only
//! immutable state and may be shared across threads.
//!
//! License: MIT OR APACHE 2.0

use crate::redaction_match::RedactionMatch;
use crate::sanitizers::compiler::PatternRegistry;
use crate::tally::{RedactionSummaryItem, ScrubResult};

/// Core functionality of a PII scrubbing engine.
pub trait SanitizationEngine: Send + Sync {
    /// Redacts every accepted match and returns the cleaned text with its tally.
    ///
    /// Never fails; empty input yields empty output and an all-zero tally.
    fn sanitize(&self, content: &str) -> ScrubResult {
        self.sanitize_with_matches(content).0
    }

    /// Like [`sanitize`](Self::sanitize), also returning each accepted match in the order
    /// the passes produced them.
    fn sanitize_with_matches(&self, content: &str) -> (ScrubResult, Vec<RedactionMatch>);

    /// Counts accepted matches per category without exposing the cleaned text.
    ///
    /// Categories with no matches are included with zero occurrences.
    fn analyze_for_stats(&self, content: &str) -> Vec<RedactionSummaryItem>;

    /// The registry the engine detects with.
    fn registry(&self) -> &PatternRegistry;
}
