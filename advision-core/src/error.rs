//! Error types for advision-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ProjectId, RequiredField};

/// All errors that can arise from registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// One or more required fields were empty on create/update.
    #[error("missing required fields: {}", join_fields(.fields))]
    Validation { fields: Vec<RequiredField> },

    /// A progress value above 100 was supplied on update.
    #[error("progress {value} is out of range (expected 0-100)")]
    ProgressOutOfRange { value: u8 },

    /// The id does not resolve to a stored project.
    #[error("project {id} not found")]
    NotFound { id: ProjectId },

    /// A status string that is not planning, active or completed.
    #[error("unknown status '{value}'; expected: planning, active, completed")]
    UnknownStatus { value: String },
}

impl RegistryError {
    /// True for errors caused by user input rather than a missing project.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistryError::Validation { .. }
                | RegistryError::ProgressOutOfRange { .. }
                | RegistryError::UnknownStatus { .. }
        )
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors from loading or storing UI preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// Underlying I/O failure, with the path being read or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load.
    #[error("failed to parse preferences at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    #[error("unknown theme '{0}'; expected: light, dark")]
    UnknownTheme(String),

    #[error("unknown accent color '{0}'; expected: teal, blue, purple, green, orange")]
    UnknownAccent(String),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PreferencesError {
    PreferencesError::Io {
        path: path.into(),
        source,
    }
}

/// Lead or contact form rejected by validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("Please fix the following errors:\n• {}", bullets(.errors))]
    Invalid { errors: Vec<String> },
}

fn bullets(errors: &[String]) -> String {
    errors.join("\n• ")
}

impl LeadError {
    pub fn errors(&self) -> &[String] {
        match self {
            LeadError::Invalid { errors } => errors,
        }
    }
}
