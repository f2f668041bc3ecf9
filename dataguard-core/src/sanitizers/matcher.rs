//! Finds every non-overlapping occurrence of one rule in a text.

use crate::category::Category;
use crate::redaction_match::{log_captured_match_debug, RedactionMatch};
use crate::sanitizers::compiler::CompiledRule;
use crate::validators;

/// Byte offset of the character after `pos`, or `text.len() + 1` at the end of input.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Constraints the regex cannot express without look-around.
fn passes_shape_guard(category: Category, text: &str, start: usize, end: usize) -> bool {
    match category {
        Category::Ssn => validators::is_valid_ssn_shape(&text[start..end]),
        Category::Ipv6 => validators::has_ipv6_edges(text, start, end),
        _ => true,
    }
}

/// Returns all matches of `rule` in `text`, leftmost-first, ascending and non-overlapping.
///
/// A candidate rejected by the category's shape guard is skipped as if the pattern had
/// failed at that position: scanning resumes one character after its start. The text is
/// never modified.
pub fn find_all(text: &str, rule: &CompiledRule) -> Vec<RedactionMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(m) = rule.regex.find_at(text, pos) else { break; };

        if !passes_shape_guard(rule.category, text, m.start(), m.end()) {
            pos = next_char_boundary(text, m.start());
            continue;
        }

        log_captured_match_debug(module_path!(), rule.category, m.as_str());
        matches.push(RedactionMatch {
            category: rule.category,
            start: m.start(),
            end: m.end(),
            original_string: m.as_str().to_string(),
            sanitized_string: rule.replace_with.clone(),
        });

        pos = if m.end() > m.start() { m.end() } else { next_char_boundary(text, m.end()) };
    }

    matches
}
