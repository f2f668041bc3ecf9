// dataguard-core/src/tally.rs
//! Per-call redaction counts and the result type returned by a scrub.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::collections::BTreeMap;

use crate::category::Category;

/// Count of accepted redactions per category, plus their sum.
///
/// Every category is always present, including at zero. `total` is only ever changed
/// together with a per-category count, so it always equals their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactionTally {
    total: usize,
    details: BTreeMap<Category, usize>,
}

impl Default for RedactionTally {
    fn default() -> Self {
        Self {
            total: 0,
            details: Category::ALL.iter().map(|c| (*c, 0)).collect(),
        }
    }
}

impl RedactionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` accepted redactions for `category`.
    pub fn record(&mut self, category: Category, count: usize) {
        *self.details.entry(category).or_insert(0) += count;
        self.total += count;
    }

    pub fn count(&self, category: Category) -> usize {
        self.details.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Per-category counts in registry order.
    pub fn details(&self) -> &BTreeMap<Category, usize> {
        &self.details
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// The cleaned text of one scrub together with its tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrubResult {
    pub clean_text: String,
    #[serde(flatten)]
    pub tally: RedactionTally,
}

impl ScrubResult {
    /// A result that leaves `text` as it was with an all-zero tally.
    pub fn unchanged(text: &str) -> Self {
        Self {
            clean_text: text.to_string(),
            tally: RedactionTally::new(),
        }
    }
}

/// Aggregated view of one category's accepted matches, safe to display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactionSummaryItem {
    pub category: Category,
    pub occurrences: usize,
    /// SHA-256 hashes of the matched text; the raw values are never included.
    pub sample_hashes: Vec<String>,
}
