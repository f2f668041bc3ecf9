//! Position-safe application of accepted matches to a text.

use log::warn;

use crate::redaction_match::{log_redaction_action_debug, RedactionMatch};

/// Replaces every span in `matches` with its `sanitized_string`.
///
/// All offsets must refer to `text` as given. Replacements are applied from the rightmost
/// span to the leftmost, so each replacement only shifts bytes that have already been
/// rewritten. A span that overlaps one already applied is skipped.
pub fn apply_redactions(text: &str, matches: &[RedactionMatch]) -> String {
    let mut ordered: Vec<&RedactionMatch> = matches.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    let mut out = text.to_string();
    let mut limit = text.len();

    for m in ordered {
        if m.end > limit || m.start > m.end {
            warn!(
                "Skipping overlapping or inverted span {}..{} for category '{}'.",
                m.start, m.end, m.category
            );
            continue;
        }
        log_redaction_action_debug(module_path!(), &m.original_string, &m.sanitized_string, m.category);
        out.replace_range(m.start..m.end, &m.sanitized_string);
        limit = m.start;
    }

    out
}
