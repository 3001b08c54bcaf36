//! Terminal output for the final summary and fatal errors.

use std::fmt::Display;
use std::io::{self, Write};

use owo_colors::OwoColorize;
use vidshrink_core::BatchReport;

/// Prints the report to stdout, as JSON or as the green text summary.
pub fn print_report(report: &BatchReport, json: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let text = report.to_json().map_err(io::Error::other)?;
        writeln!(out, "{text}")?;
    } else {
        let text = report.to_text();
        writeln!(out)?;
        if console::colors_enabled() {
            write!(out, "{}", text.green().bold())?;
        } else {
            write!(out, "{text}")?;
        }
    }
    out.flush()
}

/// Prints `Error: <message>` to stderr, in bold red on a colour terminal.
pub fn print_error(error: &dyn Display) {
    let message = format!("Error: {error}");
    if console::colors_enabled_stderr() {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{message}");
    }
}
