// dataguard-core/src/engines/regex_engine.rs
//! A `SanitizationEngine` that detects PII with the compiled regex registry.
//!
//! Categories that require checksum validation are matched, validated and rewritten
//! first. Each remaining category then runs as its own match-then-rewrite pass over the
//! progressively updated text, in registry order.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use log::debug;

use crate::category::Category;
use crate::engine::SanitizationEngine;
use crate::errors::DataguardError;
use crate::redaction_match::{log_rejected_match_debug, RedactionMatch};
use crate::sanitizers::compiler::{default_registry, CompiledRule, PatternRegistry};
use crate::sanitizers::matcher::find_all;
use crate::sanitizers::rewriter::apply_redactions;
use crate::tally::{RedactionSummaryItem, RedactionTally, ScrubResult};
use crate::validators;

#[derive(Debug, Clone)]
pub struct RegexEngine {
    registry: Arc<PatternRegistry>,
}

impl RegexEngine {
    /// Builds an engine over the built-in registry.
    pub fn new() -> Result<Self, DataguardError> {
        Ok(Self::with_registry(default_registry()?))
    }

    pub fn with_registry(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Scrubs `text`, returning the cleaned text and its tally.
    pub fn scrub_text(&self, text: &str) -> ScrubResult {
        self.sanitize(text)
    }

    /// Validated categories first, then the rest, each group in registry order.
    fn pass_order() -> impl Iterator<Item = Category> {
        let validated = Category::ALL.into_iter().filter(|c| c.requires_validation());
        let plain = Category::ALL.into_iter().filter(|c| !c.requires_validation());
        validated.chain(plain)
    }

    fn run_programmatic_validator(&self, compiled_rule: &CompiledRule, candidate: &RedactionMatch) -> bool {
        if !compiled_rule.programmatic_validation {
            return true;
        }
        let accepted = match compiled_rule.category {
            Category::CreditCard => validators::is_valid_credit_card(&candidate.original_string),
            _ => true,
        };
        if !accepted {
            log_rejected_match_debug(module_path!(), compiled_rule.category, &candidate.original_string);
        }
        accepted
    }
}

impl SanitizationEngine for RegexEngine {
    fn sanitize_with_matches(&self, content: &str) -> (ScrubResult, Vec<RedactionMatch>) {
        if content.is_empty() {
            return (ScrubResult::unchanged(content), Vec::new());
        }

        let mut text = content.to_string();
        let mut tally = RedactionTally::new();
        let mut all_matches = Vec::new();

        for category in Self::pass_order() {
            let rule = self.registry.get(category);
            let accepted: Vec<RedactionMatch> = find_all(&text, rule)
                .into_iter()
                .filter(|m| self.run_programmatic_validator(rule, m))
                .collect();

            if accepted.is_empty() {
                continue;
            }

            debug!("Category '{}': {} accepted match(es).", category, accepted.len());
            text = apply_redactions(&text, &accepted);
            tally.record(category, accepted.len());
            all_matches.extend(accepted);
        }

        debug!(
            "Scrub complete. Input length: {}, output length: {}, redactions: {}",
            content.len(),
            text.len(),
            tally.total()
        );

        (ScrubResult { clean_text: text, tally }, all_matches)
    }

    fn analyze_for_stats(&self, content: &str) -> Vec<RedactionSummaryItem> {
        let (_, matches) = self.sanitize_with_matches(content);
        Category::ALL
            .iter()
            .map(|category| {
                let sample_hashes: Vec<String> = matches
                    .iter()
                    .filter(|m| m.category == *category)
                    .map(RedactionMatch::sample_hash)
                    .collect();
                RedactionSummaryItem {
                    category: *category,
                    occurrences: sample_hashes.len(),
                    sample_hashes,
                }
            })
            .collect()
    }

    fn registry(&self) -> &PatternRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_runs_first() {
        let order: Vec<Category> = RegexEngine::pass_order().collect();
        assert_eq!(
            order,
            vec![
                Category::CreditCard,
                Category::Email,
                Category::Ssn,
                Category::Ipv4,
                Category::Ipv6,
                Category::AwsKey,
            ]
        );
    }

    #[test]
    fn test_rejected_card_is_left_in_place() {
        let engine = RegexEngine::new().unwrap();
        let result = engine.scrub_text("Card 4532 1488 0343 6468 here");
        assert_eq!(result.clean_text, "Card 4532 1488 0343 6468 here");
        assert_eq!(result.tally.total(), 0);
    }

    #[test]
    fn test_matches_are_reported_per_pass() {
        let engine = RegexEngine::new().unwrap();
        let (result, matches) = engine.sanitize_with_matches("pay 4111 1111 1111 1111 or mail a@b.co");
        assert_eq!(result.clean_text, "pay [CREDIT_CARD] or mail [EMAIL]");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].category, Category::CreditCard);
        assert_eq!(matches[0].start, 4);
        assert_eq!(matches[1].category, Category::Email);
        // Offsets of later passes refer to the already rewritten text.
        assert_eq!(matches[1].start, "pay [CREDIT_CARD] or mail ".len());
    }

    #[test]
    fn test_analyze_for_stats_lists_every_category() {
        let engine = RegexEngine::new().unwrap();
        let stats = engine.analyze_for_stats("a@b.co and c@d.org");
        assert_eq!(stats.len(), 6);
        let email = stats.iter().find(|s| s.category == Category::Email).unwrap();
        assert_eq!(email.occurrences, 2);
        assert_eq!(email.sample_hashes.len(), 2);
        assert!(stats.iter().filter(|s| s.category != Category::Email).all(|s| s.occurrences == 0));
    }
}
