//! Listing context: serializable view-model built from registry snapshots.

use serde::{Deserialize, Serialize};

use advision_core::Project;

use crate::error::RenderError;

/// Everything a single project card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: u64,
    pub name: String,
    pub client: String,
    /// Lowercase status, doubles as the css modifier class.
    pub status: String,
    /// Capitalized status for display.
    pub status_label: String,
    pub budget: String,
    pub duration: String,
    pub description: String,
    pub progress: u8,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        ProjectCard {
            id: project.id.0,
            name: project.name.clone(),
            client: project.client.clone(),
            status: project.status.as_str().to_owned(),
            status_label: project.status.label().to_owned(),
            budget: project.budget.clone(),
            duration: project.duration.clone(),
            description: project.description.clone(),
            progress: project.progress.min(100),
            start_date: project.start_date.format("%Y-%m-%d").to_string(),
            end_date: project.end_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Rendering payload for a whole listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingContext {
    pub count: usize,
    pub projects: Vec<ProjectCard>,
}

impl ListingContext {
    /// Build a [`ListingContext`] from a snapshot, keeping its order.
    pub fn from_projects(projects: &[Project]) -> Self {
        let projects: Vec<ProjectCard> = projects.iter().map(ProjectCard::from_project).collect();
        ListingContext {
            count: projects.len(),
            projects,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
