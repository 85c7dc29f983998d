//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use colored::Colorize;

/// Print a success line to stderr.
pub fn print_ok(message: &str) {
    eprintln!("  {} {}", "✔".green().bold(), message);
}

/// Print a hint line to stderr.
pub fn print_hint(message: &str) {
    eprintln!("  {} {}", "→".cyan(), message.dimmed());
}
