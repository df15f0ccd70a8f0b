//! Domain types for the AdVision project registry.
//!
//! All types are serializable/deserializable via serde. Dates use
//! `chrono::NaiveDate`, which serializes as an ISO-8601 `YYYY-MM-DD` string.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RegistryError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed project identifier, assigned by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of a project. Caller-assigned; no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

impl ProjectStatus {
    /// All statuses in display order.
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::Completed,
        ]
    }

    /// Progress assigned to a freshly created project with this status.
    pub fn initial_progress(self) -> u8 {
        match self {
            ProjectStatus::Completed => 100,
            ProjectStatus::Active => 50,
            ProjectStatus::Planning => 25,
        }
    }

    /// Lowercase identifier, as used in filters and css classes.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Capitalized label for listings.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Parse a status filter coming from a form control.
    ///
    /// The empty string (and whitespace) means "any status" and yields `None`.
    pub fn parse_filter(value: &str) -> Result<Option<ProjectStatus>, RegistryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planning" => Ok(ProjectStatus::Planning),
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(RegistryError::UnknownStatus {
                value: other.to_owned(),
            }),
        }
    }
}

/// A field every stored project must carry a non-empty value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Name,
    Client,
    Budget,
    Duration,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => write!(f, "name"),
            RequiredField::Client => write!(f, "client"),
            RequiredField::Budget => write!(f, "budget"),
            RequiredField::Duration => write!(f, "duration"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A marketing project stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    /// Free-form, currency formatted (e.g. `$25,000`).
    pub budget: String,
    /// Free-form (e.g. `3 months`).
    pub duration: String,
    pub status: ProjectStatus,
    /// Percentage, always within `0..=100`.
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Project {
    /// Required fields that are empty (or whitespace only), in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        missing_required(&self.name, &self.client, &self.budget, &self.duration)
    }
}

/// Field record for creating a project, as collected from a form.
///
/// Every field defaults, so a partially filled record deserializes and is
/// then rejected by validation rather than by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub name: String,
    pub client: String,
    pub budget: String,
    pub duration: String,
    /// Empty or unrecognised form values read as `None` (planning).
    #[serde(deserialize_with = "lenient_status")]
    pub status: Option<ProjectStatus>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ProjectDraft {
    pub fn new(
        name: impl Into<String>,
        client: impl Into<String>,
        budget: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            client: client.into(),
            budget: budget.into(),
            duration: duration.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        missing_required(&self.name, &self.client, &self.budget, &self.duration)
    }

    /// Convert into a full-replacement patch, used when a form edits an
    /// existing project. Dates are only carried over when the form supplied them.
    pub fn into_patch(self) -> ProjectPatch {
        ProjectPatch {
            name: Some(self.name),
            client: Some(self.client),
            budget: Some(self.budget),
            duration: Some(self.duration),
            status: self.status,
            progress: None,
            start_date: self.start_date,
            end_date: self.end_date,
            description: Some(self.description.unwrap_or_default()),
        }
    }
}

/// Shallow-merge record for updating a project. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub client: Option<String>,
    pub budget: Option<String>,
    pub duration: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == ProjectPatch::default()
    }

    /// Apply onto a copy of `project`; the original is left untouched.
    pub fn merged_onto(&self, project: &Project) -> Project {
        let mut merged = project.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(client) = &self.client {
            merged.client = client.clone();
        }
        if let Some(budget) = &self.budget {
            merged.budget = budget.clone();
        }
        if let Some(duration) = &self.duration {
            merged.duration = duration.clone();
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(progress) = self.progress {
            merged.progress = progress;
        }
        if let Some(start) = self.start_date {
            merged.start_date = start;
        }
        if let Some(end) = self.end_date {
            merged.end_date = end;
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        merged
    }
}

/// Form status select: anything that is not a known status is left unset.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ProjectStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse() {
        Ok(status) => Some(status),
        Err(err) => {
            if !value.trim().is_empty() {
                tracing::debug!(error = %err, "draft status ignored");
            }
            None
        }
    }))
}

fn missing_required(name: &str, client: &str, budget: &str, duration: &str) -> Vec<RequiredField> {
    [
        (RequiredField::Name, name),
        (RequiredField::Client, client),
        (RequiredField::Budget, budget),
        (RequiredField::Duration, duration),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: ProjectId(7),
            name: "Launch".to_string(),
            client: "Acme".to_string(),
            budget: "$1,000".to_string(),
            duration: "1 month".to_string(),
            status: ProjectStatus::Active,
            progress: 50,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<ProjectStatus>().unwrap(), ProjectStatus::Active);
        assert_eq!(" completed ".parse::<ProjectStatus>().unwrap(), ProjectStatus::Completed);
        assert!("archived".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn empty_filter_means_any_status() {
        assert_eq!(ProjectStatus::parse_filter("").unwrap(), None);
        assert_eq!(ProjectStatus::parse_filter("  ").unwrap(), None);
        assert_eq!(
            ProjectStatus::parse_filter("planning").unwrap(),
            Some(ProjectStatus::Planning)
        );
    }

    #[test]
    fn draft_status_tolerates_blank_and_unknown_values() {
        for raw in [r#""""#, r#""on-hold""#, "null"] {
            let json = format!(
                r#"{{"name":"A","client":"B","budget":"$1","duration":"1 day","status":{raw}}}"#
            );
            let draft: ProjectDraft = serde_json::from_str(&json).expect("draft");
            assert_eq!(draft.status, None, "status {raw}");
        }
        let draft: ProjectDraft = serde_json::from_str(r#"{"status":"Completed"}"#).expect("draft");
        assert_eq!(draft.status, Some(ProjectStatus::Completed));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Completed).expect("serialize");
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let draft = ProjectDraft::new("  ", "Acme", "", "1 month");
        assert_eq!(
            draft.missing_fields(),
            vec![RequiredField::Name, RequiredField::Budget]
        );
    }

    #[test]
    fn draft_deserializes_with_missing_fields() {
        let draft: ProjectDraft =
            serde_json::from_str(r#"{"name":"Only name","status":"active"}"#).expect("parse");
        assert_eq!(draft.status, Some(ProjectStatus::Active));
        assert!(draft.client.is_empty());
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let original = project();
        let patch = ProjectPatch {
            name: Some("Relaunch".to_string()),
            ..Default::default()
        };
        let merged = patch.merged_onto(&original);
        assert_eq!(merged.name, "Relaunch");
        assert_eq!(merged.client, original.client);
        assert_eq!(merged.progress, original.progress);
        assert_eq!(original.name, "Launch", "source must be untouched");
    }

    #[test]
    fn date_serializes_as_iso_string() {
        let json = serde_json::to_value(project()).expect("serialize");
        assert_eq!(json["start_date"], "2025-01-01");
        assert_eq!(json["status"], "active");
    }
}
