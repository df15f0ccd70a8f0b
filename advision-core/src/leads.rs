//! Lead capture forms from the marketing site.
//!
//! # Responsibility
//! - Validate "start a project" requests and contact messages.
//! - Produce the user-facing error list in form order.
//!
//! # Invariants
//! - Text fields are trimmed before the emptiness check.
//! - An email is only shape-checked once it is non-empty, so a blank email
//!   reports "required" and never "invalid".
//!
//! Nothing is submitted anywhere; a valid form is simply accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LeadError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// "Start your project" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

/// Short contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ProjectRequest {
    pub fn validate(&self) -> Result<(), LeadError> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        require(&mut errors, &self.phone, "Phone number is required");
        require(&mut errors, &self.project_type, "Please select a project type");
        require(&mut errors, &self.budget, "Budget is required");
        require(&mut errors, &self.message, "Message is required");
        finish(errors)
    }
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), LeadError> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        require(&mut errors, &self.message, "Message is required");
        finish(errors)
    }
}

fn require(errors: &mut Vec<String>, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(message.to_owned());
    }
}

fn check_email(errors: &mut Vec<String>, email: &str) {
    if email.trim().is_empty() {
        errors.push("Email is required".to_owned());
    } else if !is_valid_email(email) {
        errors.push("Please enter a valid email address".to_owned());
    }
}

fn finish(errors: Vec<String>) -> Result<(), LeadError> {
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "lead form rejected");
        Err(LeadError::Invalid { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ana@studio.io"));
        assert!(!is_valid_email("ana@studio"));
        assert!(!is_valid_email("ana studio@x.io"));
        assert!(!is_valid_email("@x.io"));
    }

    #[test]
    fn blank_email_is_required_not_invalid() {
        let msg = ContactMessage {
            name: "Ana".into(),
            email: "   ".into(),
            message: "Hi".into(),
        };
        let err = msg.validate().unwrap_err();
        assert_eq!(err.errors(), ["Email is required".to_string()]);
    }
}
