//! compiler.rs - Builds the immutable pattern registry.
//!
//! Converts a validated `RedactionConfig` into a `PatternRegistry`: one compiled rule per
//! category, stored in registry order. The built-in registry is compiled once per process
//! and shared by `Arc`.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use crate::category::Category;
use crate::config::{RedactionConfig, RedactionRule, MAX_PATTERN_LENGTH};
use crate::errors::DataguardError;

/// A single compiled detection rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The category this rule detects.
    pub category: Category,
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The token that replaces each accepted match.
    pub replace_with: String,
    /// Whether matches must also pass a checksum validator.
    pub programmatic_validation: bool,
}

/// The six compiled rules, indexed by category.
///
/// Read-only after construction, so it can be shared across threads without locking.
#[derive(Debug)]
pub struct PatternRegistry {
    rules: Vec<CompiledRule>,
}

impl PatternRegistry {
    /// Returns the rule bound to `category`.
    pub fn get(&self, category: Category) -> &CompiledRule {
        &self.rules[category as usize]
    }

    /// Iterates over all rules in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

static DEFAULT_REGISTRY: OnceCell<Arc<PatternRegistry>> = OnceCell::new();

fn compile_rule(rule: &RedactionRule, category: Category) -> Result<CompiledRule, DataguardError> {
    if rule.pattern.len() > MAX_PATTERN_LENGTH {
        return Err(DataguardError::PatternLengthExceeded(
            rule.name.clone(),
            rule.pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(&rule.pattern)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| DataguardError::RuleCompilationError(rule.name.clone(), e))?;

    log::debug!(
        target: "dataguard_core::sanitizer",
        "Rule '{}' compiled successfully.",
        &rule.name
    );

    Ok(CompiledRule {
        category,
        regex,
        replace_with: rule.replace_with.clone(),
        programmatic_validation: rule.programmatic_validation,
    })
}

/// Compiles every rule of `config` into a registry.
///
/// All compilation errors are collected and reported together.
pub fn compile_rules(config: &RedactionConfig) -> Result<PatternRegistry, DataguardError> {
    debug!("Starting compilation of {} rules.", config.rules.len());

    let mut compiled_rules = Vec::with_capacity(Category::ALL.len());
    let mut compilation_errors = Vec::new();

    for category in Category::ALL {
        let Some(rule) = config.rule_for(category) else {
            compilation_errors.push(DataguardError::Fatal(format!("No rule defined for category '{}'", category)));
            continue;
        };
        match compile_rule(rule, category) {
            Ok(compiled) => compiled_rules.push(compiled),
            Err(e) => compilation_errors.push(e),
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(DataguardError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(PatternRegistry { rules: compiled_rules })
}

/// Returns the process-wide registry built from the embedded default rules.
pub fn default_registry() -> Result<Arc<PatternRegistry>, DataguardError> {
    DEFAULT_REGISTRY
        .get_or_try_init(|| -> Result<Arc<PatternRegistry>, DataguardError> {
            debug!("Compiling default pattern registry.");
            let config = RedactionConfig::load_default_rules()?;
            Ok(Arc::new(compile_rules(&config)?))
        })
        .cloned()
}
