// dataguard/src/ui/diff_viewer.rs
//! Line diff between the original and the scrubbed text.
//!
//! Removed lines are printed red, inserted lines green. Without colour support the
//! `-`/`+` prefixes carry the same information.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_diff<W: Write>(original: &str, sanitized: &str, writer: &mut W, supports_color: bool) -> io::Result<()> {
    let patch = create_patch(original, sanitized);

    if supports_color {
        writeln!(writer, "{}", "--- Diff View ---".yellow().bold())?;
    } else {
        writeln!(writer, "--- Diff View ---")?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    changed = true;
                    let text = format!("-{}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", text.red())?;
                    } else {
                        writeln!(writer, "{}", text)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let text = format!("+{}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", text.green())?;
                    } else {
                        writeln!(writer, "{}", text)?;
                    }
                }
                DiffLine::Context(s) => writeln!(writer, " {}", s.trim_end_matches('\n'))?,
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    writeln!(writer, "-----------------")
}
