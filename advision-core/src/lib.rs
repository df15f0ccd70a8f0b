//! AdVision core library: project registry, domain types, errors.
//!
//! Public API surface:
//! - [`types`]: project entity and input records
//! - [`error`]: [`RegistryError`], [`PreferencesError`], [`LeadError`]
//! - [`registry`]: [`ProjectRegistry`], the in-memory owning store
//! - [`notify`]: [`NotificationSink`] collaborator interface
//! - [`preferences`]: theme / accent persistence
//! - [`charts`]: static overview datasets
//! - [`leads`]: marketing-site form validation

pub mod charts;
pub mod error;
pub mod leads;
pub mod notify;
pub mod preferences;
pub mod registry;
pub mod sample;
pub mod types;

pub use error::{LeadError, PreferencesError, RegistryError};
pub use notify::{Notification, NotificationSink, Severity};
pub use registry::{ProjectFilter, ProjectRegistry};
pub use types::{
    Project, ProjectDraft, ProjectId, ProjectPatch, ProjectStatus, RequiredField,
};
