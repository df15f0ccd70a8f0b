//! `advision lead request|contact`: validate marketing-site forms.
//!
//! Nothing is sent; a valid form only produces the confirmation message.

use anyhow::Result;
use clap::{Args, Subcommand};

use advision_core::leads::{ContactMessage, ProjectRequest};
use advision_core::notify::messages;
use advision_core::{LeadError, NotificationSink, Severity};

use crate::sink::TerminalSink;

#[derive(Subcommand, Debug)]
pub enum LeadCommand {
    /// "Start your project" form.
    Request(RequestArgs),

    /// Contact form.
    Contact(ContactArgs),
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    pub project_type: String,
    #[arg(long, default_value = "")]
    pub budget: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

pub fn run(cmd: LeadCommand) -> Result<()> {
    let (validation, success) = match cmd {
        LeadCommand::Request(args) => (
            ProjectRequest {
                name: args.name,
                email: args.email,
                phone: args.phone,
                project_type: args.project_type,
                budget: args.budget,
                message: args.message,
            }
            .validate(),
            messages::LEAD_SUBMITTED,
        ),
        LeadCommand::Contact(args) => (
            ContactMessage {
                name: args.name,
                email: args.email,
                message: args.message,
            }
            .validate(),
            messages::MESSAGE_SENT,
        ),
    };
    confirm(&mut TerminalSink, validation, success)
}

/// Emit the success message, or the bulleted error list, through `sink`.
pub(crate) fn confirm(
    sink: &mut impl NotificationSink,
    validation: Result<(), LeadError>,
    success: &str,
) -> Result<()> {
    match validation {
        Ok(()) => {
            sink.notify(success, Severity::Success);
            Ok(())
        }
        Err(err) => {
            sink.notify(&err.to_string(), Severity::Error);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advision_core::Notification;

    #[test]
    fn valid_contact_notifies_success() {
        let mut sink: Vec<Notification> = Vec::new();
        let form = ContactMessage {
            name: "Ana".into(),
            email: "ana@studio.io".into(),
            message: "Hello".into(),
        };
        confirm(&mut sink, form.validate(), messages::MESSAGE_SENT).expect("valid");
        assert_eq!(sink, vec![Notification::new(messages::MESSAGE_SENT, Severity::Success)]);
    }

    #[test]
    fn invalid_request_lists_every_error() {
        let mut sink: Vec<Notification> = Vec::new();
        let form = ProjectRequest {
            email: "nope".into(),
            ..Default::default()
        };
        assert!(confirm(&mut sink, form.validate(), messages::LEAD_SUBMITTED).is_err());
        let message = &sink[0].message;
        assert!(message.starts_with("Please fix the following errors:"));
        assert!(message.contains("• Please enter a valid email address"));
        assert!(message.contains("• Please select a project type"));
        assert_eq!(sink[0].severity, Severity::Error);
    }
}
