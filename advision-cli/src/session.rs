//! Newline-delimited JSON session over a [`Dashboard`].
//!
//! Each input line is one [`SessionRequest`], tagged by `cmd`; each produces
//! exactly one [`SessionResponse`] line. A malformed or failing request yields
//! `ok: false` and the session keeps going.
//!
//! ```text
//! {"cmd":"create","fields":{"name":"New Camp","client":"Acme","budget":"$1,000","duration":"1 month"}}
//! {"ok":true,"data":{"id":5,...},"notifications":[{"message":"Project created successfully!","severity":"success"}]}
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use advision_core::charts::dashboard_charts;
use advision_core::leads::{ContactMessage, ProjectRequest};
use advision_core::notify::messages;
use advision_core::{Notification, ProjectDraft, ProjectId, ProjectPatch};
use advision_renderer::ListingFormat;

use crate::commands::lead::confirm;
use crate::dashboard::Dashboard;

/// JSON newline-delimited request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SessionRequest {
    /// Create a project from form fields, whatever the editor state.
    Create {
        #[serde(default)]
        fields: ProjectDraft,
    },
    /// Open the editor on a project; returns its form values.
    Edit { id: ProjectId },
    /// Submit the editor: creates, or updates the project being edited.
    Save {
        #[serde(default)]
        fields: ProjectDraft,
    },
    /// Close the editor without saving.
    Cancel,
    /// Partial update outside the editor.
    Update {
        id: ProjectId,
        #[serde(default)]
        fields: ProjectPatch,
    },
    Delete { id: ProjectId },
    /// Plain lookup; a missing id is reported as an error toast.
    Find { id: ProjectId },
    /// Lookup that reports "Viewing details for: …".
    View { id: ProjectId },
    /// Set the active filter. Empty strings match everything.
    Query {
        #[serde(default)]
        search: String,
        #[serde(default)]
        status: String,
    },
    /// Render the visible projects; the session's default format when omitted.
    Render {
        #[serde(default)]
        format: Option<String>,
    },
    Charts,
    Report,
    SaveSettings,
    SubmitLead {
        #[serde(default)]
        fields: ProjectRequest,
    },
    SendMessage {
        #[serde(default)]
        fields: ContactMessage,
    },
}

/// JSON newline-delimited response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl SessionResponse {
    pub fn ok(data: Value, notifications: Vec<Notification>) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            notifications,
        }
    }

    pub fn error(message: impl Into<String>, notifications: Vec<Notification>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
            notifications,
        }
    }
}

/// Counters reported when the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub requests: usize,
    pub failures: usize,
}

/// Serve requests from `input` until EOF, writing one response line per request.
/// Blank lines are skipped.
pub fn run<R: BufRead, W: Write>(
    dashboard: &mut Dashboard<Vec<Notification>>,
    input: R,
    mut output: W,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();
    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }
        stats.requests += 1;

        let response = match serde_json::from_str::<SessionRequest>(&line) {
            Ok(request) => respond(dashboard, request),
            Err(err) => {
                tracing::warn!(error = %err, "malformed session request");
                SessionResponse::error(format!("invalid request: {err}"), Vec::new())
            }
        };
        if !response.ok {
            stats.failures += 1;
        }

        let payload = serde_json::to_string(&response)?;
        writeln!(output, "{payload}").context("failed to write session response")?;
        output.flush().context("failed to flush session output")?;
    }
    tracing::info!(requests = stats.requests, failures = stats.failures, "session finished");
    Ok(stats)
}

/// Handle one request and collect the notifications it produced.
pub fn respond(dashboard: &mut Dashboard<Vec<Notification>>, request: SessionRequest) -> SessionResponse {
    let outcome = handle(dashboard, request);
    let notifications = std::mem::take(dashboard.sink_mut());
    match outcome {
        Ok(data) => SessionResponse::ok(data, notifications),
        Err(err) => SessionResponse::error(err.to_string(), notifications),
    }
}

fn handle(dashboard: &mut Dashboard<Vec<Notification>>, request: SessionRequest) -> Result<Value> {
    let data = match request {
        SessionRequest::Create { fields } => serde_json::to_value(dashboard.create(fields)?)?,
        SessionRequest::Edit { id } => serde_json::to_value(dashboard.open_edit(id)?)?,
        SessionRequest::Save { fields } => serde_json::to_value(dashboard.save(fields)?)?,
        SessionRequest::Cancel => {
            dashboard.close_editor();
            Value::Null
        }
        SessionRequest::Update { id, fields } => {
            serde_json::to_value(dashboard.update(id, fields)?)?
        }
        SessionRequest::Delete { id } => serde_json::to_value(dashboard.delete(id)?)?,
        SessionRequest::Find { id } => serde_json::to_value(dashboard.find(id)?)?,
        SessionRequest::View { id } => serde_json::to_value(dashboard.view(id)?)?,
        SessionRequest::Query { search, status } => {
            serde_json::to_value(dashboard.apply_filter(&search, &status)?)?
        }
        SessionRequest::Render { format } => {
            let (format, content) = match format {
                Some(raw) => {
                    let format: ListingFormat = raw.parse()?;
                    (format, dashboard.render_as(format)?)
                }
                None => (dashboard.format(), dashboard.listing().to_owned()),
            };
            json!({ "format": format.to_string(), "content": content })
        }
        SessionRequest::Charts => serde_json::to_value(dashboard_charts())?,
        SessionRequest::Report => {
            dashboard.generate_report();
            Value::Null
        }
        SessionRequest::SaveSettings => {
            dashboard.save_settings();
            Value::Null
        }
        SessionRequest::SubmitLead { fields } => {
            confirm(dashboard.sink_mut(), fields.validate(), messages::LEAD_SUBMITTED)?;
            Value::Null
        }
        SessionRequest::SendMessage { fields } => {
            confirm(dashboard.sink_mut(), fields.validate(), messages::MESSAGE_SENT)?;
            Value::Null
        }
    };
    Ok(data)
}
