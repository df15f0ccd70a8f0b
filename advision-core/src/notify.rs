//! Notification collaborator interface.
//!
//! The registry never notifies; the dashboard layer reports outcomes through a
//! [`NotificationSink`] after each user action.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Displays transient user-facing messages.
pub trait NotificationSink {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Recording sink: keeps every notification in order.
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push(Notification::new(message, severity));
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, message: &str, severity: Severity) {
        (**self).notify(message, severity);
    }
}

/// Messages shown after dashboard actions.
pub mod messages {
    pub const PROJECT_CREATED: &str = "Project created successfully!";
    pub const PROJECT_UPDATED: &str = "Project updated successfully!";
    pub const PROJECT_DELETED: &str = "Project deleted successfully!";
    pub const REQUIRED_FIELDS: &str = "Please fill in all required fields.";
    pub const REPORT_GENERATED: &str = "Report generated successfully!";
    pub const SETTINGS_SAVED: &str = "Settings saved successfully!";
    pub const LEAD_SUBMITTED: &str =
        "Project request submitted successfully! We'll contact you soon.";
    pub const MESSAGE_SENT: &str = "Message sent successfully! We'll get back to you soon.";

    pub fn viewing(name: &str) -> String {
        format!("Viewing details for: {name}")
    }
}
