//! In-memory project registry.
//!
//! # Ownership
//!
//! [`ProjectRegistry`] exclusively owns the project collection. Callers get
//! shared references or cloned snapshots; nothing outside this module mutates
//! a stored [`Project`].
//!
//! # Invariants
//!
//! - Ids are issued from a monotonic counter and never reused, even after delete.
//! - `progress` of every stored project is within `0..=100`.
//! - `name`, `client`, `budget` and `duration` are non-empty for every stored
//!   project. Validation runs on the candidate value before the collection is
//!   touched, so a rejected write leaves the registry unchanged.
//! - Collection order is insertion order; [`ProjectRegistry::query`] preserves it.
//!
//! The registry is synchronous and does no locking: a multi-threaded host has
//! to serialize access itself.

use chrono::{Days, NaiveDate, Utc};

use crate::error::RegistryError;
use crate::sample;
use crate::types::{Project, ProjectDraft, ProjectId, ProjectPatch, ProjectStatus};

/// Days between a new project's default start and end date.
pub const DEFAULT_RUN_DAYS: u64 = 90;

/// Upper bound for `progress`.
pub const MAX_PROGRESS: u8 = 100;

// ---------------------------------------------------------------------------
// 1. Filter
// ---------------------------------------------------------------------------

/// Status part of a [`ProjectFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum StatusMatch {
    #[default]
    Any,
    Exactly(ProjectStatus),
    /// A status value no project can carry; matches nothing.
    Unrecognized,
}

/// Free-text search plus optional status, ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Lowercased search term; empty matches everything.
    needle: String,
    status: StatusMatch,
}

impl ProjectFilter {
    pub fn new(search: &str, status: Option<ProjectStatus>) -> Self {
        Self {
            needle: search.to_lowercase(),
            status: status.map_or(StatusMatch::Any, StatusMatch::Exactly),
        }
    }

    /// Build from raw form values. `""` means any status; a value that is not
    /// a known status yields a filter that matches no project.
    pub fn from_form(search: &str, status: &str) -> Self {
        match ProjectStatus::parse_filter(status) {
            Ok(status) => Self::new(search, status),
            Err(err) => {
                tracing::debug!(error = %err, "status filter matches nothing");
                Self {
                    needle: search.to_lowercase(),
                    status: StatusMatch::Unrecognized,
                }
            }
        }
    }

    pub fn search(&self) -> &str {
        &self.needle
    }

    /// The status being matched; `None` for "any" and for unrecognised values.
    pub fn status(&self) -> Option<ProjectStatus> {
        match self.status {
            StatusMatch::Exactly(status) => Some(status),
            StatusMatch::Any | StatusMatch::Unrecognized => None,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_empty() && self.status == StatusMatch::Any
    }

    /// Case-insensitive substring match on name or client, and exact status match.
    pub fn matches(&self, project: &Project) -> bool {
        let status_ok = match self.status {
            StatusMatch::Any => true,
            StatusMatch::Exactly(status) => project.status == status,
            StatusMatch::Unrecognized => false,
        };
        let text_ok = self.needle.is_empty()
            || project.name.to_lowercase().contains(&self.needle)
            || project.client.to_lowercase().contains(&self.needle);
        status_ok && text_ok
    }
}

// ---------------------------------------------------------------------------
// 2. Registry
// ---------------------------------------------------------------------------

/// Owning store of [`Project`] entities.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    next_id: u64,
    today: fn() -> NaiveDate,
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRegistry {
    /// An empty registry. The first project gets id 1.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: 1,
            today: utc_today,
        }
    }

    /// A registry holding the four sample campaigns.
    pub fn seeded() -> Self {
        Self::from_projects(sample::seed_projects())
    }

    /// Adopt an existing collection. New ids continue after the highest one present.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let next_id = projects.iter().map(|p| p.id.0).max().map_or(1, |max| max + 1);
        Self {
            projects,
            next_id,
            today: utc_today,
        }
    }

    /// Replace the date source used for derived start/end dates.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    // -- reads --------------------------------------------------------------

    /// All projects, insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Exact lookup by id.
    pub fn find(&self, id: ProjectId) -> Result<&Project, RegistryError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(RegistryError::NotFound { id })
    }

    /// Projects whose name or client contains `search` (case-insensitive) and,
    /// when `status` is set, whose status equals it. Insertion order is kept.
    pub fn query(&self, search: &str, status: Option<ProjectStatus>) -> Vec<Project> {
        self.filtered(&ProjectFilter::new(search, status))
    }

    /// [`ProjectRegistry::query`] with a prepared filter.
    pub fn filtered(&self, filter: &ProjectFilter) -> Vec<Project> {
        let hits: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        tracing::debug!(
            search = filter.search(),
            status = ?filter.status(),
            hits = hits.len(),
            "project query"
        );
        hits
    }

    /// Number of projects per status, in [`ProjectStatus::all`] order.
    pub fn status_counts(&self) -> Vec<(ProjectStatus, usize)> {
        ProjectStatus::all()
            .iter()
            .map(|&status| {
                let n = self.projects.iter().filter(|p| p.status == status).count();
                (status, n)
            })
            .collect()
    }

    // -- writes -------------------------------------------------------------

    /// Validate `draft`, derive progress and dates, and append a new project.
    pub fn create(&mut self, draft: ProjectDraft) -> Result<Project, RegistryError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(RegistryError::Validation { fields: missing });
        }

        let status = draft.status.unwrap_or_default();
        let today = (self.today)();
        let start_date = draft.start_date.unwrap_or(today);
        let end_date = draft.end_date.unwrap_or_else(|| default_end_date(today));

        let project = Project {
            id: ProjectId(self.next_id),
            name: draft.name,
            client: draft.client,
            budget: draft.budget,
            duration: draft.duration,
            status,
            progress: status.initial_progress(),
            start_date,
            end_date,
            description: draft.description.unwrap_or_default(),
        };
        self.next_id += 1;
        self.projects.push(project.clone());

        tracing::info!(id = %project.id, name = %project.name, status = %status, "project created");
        Ok(project)
    }

    /// Shallow-merge `patch` onto the project with `id`.
    ///
    /// The merged value is validated before it replaces the stored one.
    /// Progress and dates are never re-derived from a status change.
    pub fn update(&mut self, id: ProjectId, patch: ProjectPatch) -> Result<Project, RegistryError> {
        let index = self.index_of(id)?;
        let merged = patch.merged_onto(&self.projects[index]);

        let missing = merged.missing_fields();
        if !missing.is_empty() {
            return Err(RegistryError::Validation { fields: missing });
        }
        if merged.progress > MAX_PROGRESS {
            return Err(RegistryError::ProgressOutOfRange {
                value: merged.progress,
            });
        }

        self.projects[index] = merged.clone();
        tracing::info!(id = %id, "project updated");
        Ok(merged)
    }

    /// Remove the project with `id` and return it.
    pub fn delete(&mut self, id: ProjectId) -> Result<Project, RegistryError> {
        let index = self.index_of(id)?;
        let removed = self.projects.remove(index);
        tracing::info!(id = %id, name = %removed.name, "project deleted");
        Ok(removed)
    }

    fn index_of(&self, id: ProjectId) -> Result<usize, RegistryError> {
        self.projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(RegistryError::NotFound { id })
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

fn default_end_date(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_days(Days::new(DEFAULT_RUN_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn registry() -> ProjectRegistry {
        ProjectRegistry::new().with_clock(fixed_today)
    }

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft::new(name, "Acme", "$1,000", "1 month")
    }

    #[test]
    fn first_id_is_one() {
        let mut reg = registry();
        let p = reg.create(draft("A")).expect("create");
        assert_eq!(p.id, ProjectId(1));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut reg = registry();
        let a = reg.create(draft("A")).expect("a");
        reg.delete(a.id).expect("delete");
        let b = reg.create(draft("B")).expect("b");
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
    }

    #[test]
    fn seeded_ids_continue_after_max() {
        let mut reg = ProjectRegistry::seeded();
        let p = reg.create(draft("A")).expect("create");
        assert_eq!(p.id, ProjectId(5));
    }

    #[test]
    fn default_dates_span_ninety_days() {
        let mut reg = registry();
        let p = reg.create(draft("A")).expect("create");
        assert_eq!(p.start_date, fixed_today());
        assert_eq!(p.end_date, NaiveDate::from_ymd_opt(2025, 9, 29).unwrap());
    }

    #[test]
    fn supplied_dates_are_kept() {
        let mut reg = registry();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let mut d = draft("A");
        d.start_date = Some(start);
        d.end_date = Some(end);
        let p = reg.create(d).expect("create");
        assert_eq!((p.start_date, p.end_date), (start, end));
    }

    #[test]
    fn missing_status_defaults_to_planning() {
        let mut reg = registry();
        let p = reg.create(draft("A")).expect("create");
        assert_eq!(p.status, ProjectStatus::Planning);
        assert_eq!(p.progress, 25);
    }

    #[test]
    fn rejected_create_leaves_registry_empty() {
        let mut reg = registry();
        let err = reg.create(ProjectDraft::new("A", "", "$1", "")).unwrap_err();
        assert!(matches!(err, RegistryError::Validation { ref fields } if fields.len() == 2));
        assert!(reg.is_empty());
    }

    #[test]
    fn progress_over_hundred_is_rejected() {
        let mut reg = registry();
        let p = reg.create(draft("A")).expect("create");
        let patch = ProjectPatch {
            progress: Some(101),
            ..Default::default()
        };
        let err = reg.update(p.id, patch).unwrap_err();
        assert_eq!(err, RegistryError::ProgressOutOfRange { value: 101 });
        assert_eq!(reg.find(p.id).unwrap().progress, 25);
    }

    #[test]
    fn unknown_form_status_matches_nothing() {
        let reg = ProjectRegistry::seeded();
        let filter = ProjectFilter::from_form("", "archived");
        assert!(!filter.is_unfiltered());
        assert_eq!(filter.status(), None);
        assert!(reg.filtered(&filter).is_empty());
        assert_eq!(reg.filtered(&ProjectFilter::from_form("", "")).len(), 4);
        assert_eq!(reg.filtered(&ProjectFilter::from_form("", "active")).len(), 2);
    }

    #[test]
    fn status_counts_follow_display_order() {
        let reg = ProjectRegistry::seeded();
        assert_eq!(
            reg.status_counts(),
            vec![
                (ProjectStatus::Planning, 1),
                (ProjectStatus::Active, 2),
                (ProjectStatus::Completed, 1),
            ]
        );
    }
}
