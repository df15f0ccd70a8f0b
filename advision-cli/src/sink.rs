//! Terminal notification sink.

use colored::Colorize;

use advision_core::{NotificationSink, Severity};

/// Prints each notification as one coloured line on stderr.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&mut self, message: &str, severity: Severity) {
        tracing::debug!(%severity, message, "notification");
        eprintln!("{} {}", indicator(severity), message);
    }
}

fn indicator(severity: Severity) -> String {
    match severity {
        Severity::Success => "✓".green().bold().to_string(),
        Severity::Error => "✗".red().bold().to_string(),
        Severity::Warning => "!".yellow().bold().to_string(),
        Severity::Info => "i".blue().bold().to_string(),
    }
}
