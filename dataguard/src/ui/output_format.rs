// dataguard/src/ui/output_format.rs
//! Prefixed status lines for stderr. Colour is applied only when the caller says the
//! target supports it.
//! License: MIT OR APACHE 2.0

use owo_colors::OwoColorize;
use std::io::{self, Write};

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    paint: impl Fn(&str) -> String,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", paint(prefix), message)
    } else {
        writeln!(writer, "{} {}", prefix, message)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "[dataguard]", message, |p| p.cyan().to_string(), supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "[dataguard WARN]", message, |p| p.yellow().bold().to_string(), supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "[dataguard ERROR]", message, |p| p.red().bold().to_string(), supports_color)
}
