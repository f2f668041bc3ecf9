//! Rule configuration for `dataguard-core`.
//!
//! The six PII rules are shipped as an embedded YAML document and parsed once at startup.
//! This module defines the serialized rule shape and validates that a rule set covers
//! every category exactly once with a pattern the regex engine accepts.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::category::Category;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

const DEFAULT_RULES_YAML: &str = include_str!("../config/default_rules.yaml");

/// A single detection rule as written in a rules file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RedactionRule {
    /// Category key (e.g. "credit_card").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// The token that replaces every accepted match.
    pub replace_with: String,
    /// Security severity level (e.g. "high", "medium").
    pub severity: Option<String>,
    /// If true, matches must also pass a checksum validator before being redacted.
    pub programmatic_validation: bool,
}

impl Default for RedactionRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            replace_with: "[REDACTED]".to_string(),
            severity: None,
            programmatic_validation: false,
        }
    }
}

impl RedactionRule {
    /// The category this rule is bound to, if its name is one of the six known keys.
    pub fn category(&self) -> Option<Category> {
        self.name.parse().ok()
    }
}

/// The top-level rules document.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct RedactionConfig {
    pub rules: Vec<RedactionRule>,
}

impl RedactionConfig {
    /// Loads the built-in rule set embedded in the binary.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let config = Self::from_yaml_str(DEFAULT_RULES_YAML).context("Failed to parse default rules")?;
        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Loads a rule set from a YAML file on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("Failed to parse rules file {}", path.display()))
    }

    /// Parses and validates a rules document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: RedactionConfig = serde_yml::from_str(text)?;
        validate_rules(&config.rules)?;
        Ok(config)
    }

    /// Looks up the rule bound to `category`.
    pub fn rule_for(&self, category: Category) -> Option<&RedactionRule> {
        self.rules.iter().find(|r| r.name == category.as_str())
    }
}

/// Validates that every category is covered exactly once and every pattern compiles.
fn validate_rules(rules: &[RedactionRule]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        let Some(category) = rule.category() else {
            errors.push(format!("Rule '{}' does not name a known category.", rule.name));
            continue;
        };
        if !seen.insert(category) {
            errors.push(format!("Duplicate rule found for category '{}'.", category));
        }
        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
        } else if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
        } else if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
        }
        if rule.replace_with.is_empty() {
            errors.push(format!("Rule '{}' has an empty `replace_with` token.", rule.name));
        }
        if rule.programmatic_validation != category.requires_validation() {
            errors.push(format!(
                "Rule '{}': `programmatic_validation` must be {} for this category.",
                rule.name,
                category.requires_validation()
            ));
        }
    }

    for category in Category::ALL {
        if !seen.contains(&category) {
            errors.push(format!("No rule defined for category '{}'.", category));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    }
}
