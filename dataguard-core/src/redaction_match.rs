// dataguard-core/src/redaction_match.rs
//! Match records produced by a scrub, and PII-safe debug logging helpers.

use log::debug;
use serde::{Deserialize, Serialize};

use lazy_static::lazy_static;
use sha2::{Digest, Sha256};

use crate::category::Category;

lazy_static! {
    /// Whether raw PII may appear in debug logs. Off unless explicitly enabled.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("DATAGUARD_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A detected occurrence of one category.
///
/// `start..end` is a half-open byte range into the text as it stood when this category's
/// pass began; earlier passes may already have rewritten other spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionMatch {
    pub category: Category,
    pub start: usize,
    pub end: usize,
    pub original_string: String,
    pub sanitized_string: String,
}

impl RedactionMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Stable hash of the matched text, safe to put in reports.
    pub fn sample_hash(&self) -> String {
        canonical_sample_hash(self.category.as_str(), &self.original_string)
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_captured_match_debug(module_path: &str, category: Category, original_sensitive_content: &str) {
    debug!(
        "{} Captured match for category '{}' (original): '{}'",
        module_path,
        category,
        get_loggable_content(original_sensitive_content)
    );
}

pub fn log_rejected_match_debug(module_path: &str, category: Category, original_sensitive_content: &str) {
    debug!(
        "{} Validator rejected candidate for category '{}': '{}'",
        module_path,
        category,
        get_loggable_content(original_sensitive_content)
    );
}

pub fn log_redaction_action_debug(
    module_path: &str,
    original_sensitive_content: &str,
    sanitized_replacement: &str,
    category: Category,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}' for category '{}'",
        module_path,
        get_loggable_content(original_sensitive_content),
        sanitized_replacement,
        category
    );
}

pub fn canonical_sample_hash(rule_id: &str, snippet: &str) -> String {
    let normalized = snippet
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let mut hasher = Sha256::new();
    hasher.update(rule_id.as_bytes());
    hasher.update(b":");
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}
