// dataguard/src/ui/redaction_summary.rs
//! Per-category redaction summary table printed after `scrub` and `scan`.
//! License: MIT OR APACHE 2.0

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use dataguard_core::{Category, RedactionSummaryItem, RedactionTally};
use owo_colors::OwoColorize;
use std::collections::BTreeSet;
use std::io::{self, Write};

fn build_table(rows: impl IntoIterator<Item = (Category, usize, Option<usize>)>, with_unique: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Category", "Occurrences"];
    if with_unique {
        header.push("Unique values");
    }
    table.set_header(header);

    for (category, occurrences, unique) in rows {
        let mut row = vec![category.to_string(), occurrences.to_string()];
        if with_unique {
            row.push(unique.unwrap_or(0).to_string());
        }
        table.add_row(row);
    }
    for index in 1..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

fn write_heading<W: Write>(writer: &mut W, total: usize, supports_color: bool) -> io::Result<()> {
    let heading = format!("Redaction summary ({} total)", total);
    if supports_color {
        if total == 0 {
            writeln!(writer, "{}", heading.green().bold())
        } else {
            writeln!(writer, "{}", heading.yellow().bold())
        }
    } else {
        writeln!(writer, "{}", heading)
    }
}

/// Prints the six category counts of one scrub.
pub fn print_tally<W: Write>(tally: &RedactionTally, writer: &mut W, supports_color: bool) -> io::Result<()> {
    write_heading(writer, tally.total(), supports_color)?;
    let rows = tally.details().iter().map(|(category, count)| (*category, *count, None));
    writeln!(writer, "{}", build_table(rows, false))
}

/// Prints a scan summary, including how many distinct values each category had.
pub fn print_summary<W: Write>(summary: &[RedactionSummaryItem], writer: &mut W, supports_color: bool) -> io::Result<()> {
    let total = summary.iter().map(|item| item.occurrences).sum();
    write_heading(writer, total, supports_color)?;
    let rows = summary.iter().map(|item| {
        let unique: BTreeSet<&String> = item.sample_hashes.iter().collect();
        (item.category, item.occurrences, Some(unique.len()))
    });
    writeln!(writer, "{}", build_table(rows, true))
}
