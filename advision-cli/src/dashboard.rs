//! Dashboard controller: wires the registry to the renderer and a
//! notification sink.
//!
//! The registry stays UI-agnostic; this layer owns editor state and the
//! active filter, re-renders after every mutation, and reports each outcome
//! through the sink.

use anyhow::Result;

use advision_core::notify::messages;
use advision_core::{
    NotificationSink, Project, ProjectDraft, ProjectFilter, ProjectId, ProjectPatch,
    ProjectRegistry, RegistryError, Severity,
};
use advision_renderer::{ListingFormat, Renderer};

/// Project editor: closed, or open on a new or an existing project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    Closed,
    New,
    Editing(ProjectId),
}

pub struct Dashboard<S: NotificationSink> {
    registry: ProjectRegistry,
    renderer: Renderer,
    sink: S,
    editor: Editor,
    filter: ProjectFilter,
    format: ListingFormat,
    listing: String,
}

impl<S: NotificationSink> Dashboard<S> {
    /// Take ownership of `registry` and render the initial listing.
    pub fn new(registry: ProjectRegistry, sink: S, format: ListingFormat) -> Result<Self> {
        let mut dashboard = Dashboard {
            registry,
            renderer: Renderer::new()?,
            sink,
            editor: Editor::Closed,
            filter: ProjectFilter::default(),
            format,
            listing: String::new(),
        };
        dashboard.rerender()?;
        Ok(dashboard)
    }

    #[cfg(test)]
    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[cfg(test)]
    pub fn editor(&self) -> Editor {
        self.editor
    }

    #[cfg(test)]
    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    /// Format used for the maintained listing.
    pub fn format(&self) -> ListingFormat {
        self.format
    }

    /// Last rendered listing.
    pub fn listing(&self) -> &str {
        &self.listing
    }

    /// Projects matching the active filter.
    pub fn visible(&self) -> Vec<Project> {
        self.registry.filtered(&self.filter)
    }

    pub fn notify(&mut self, message: &str, severity: Severity) {
        self.sink.notify(message, severity);
    }

    // -- editor -------------------------------------------------------------

    pub fn open_new(&mut self) {
        self.editor = Editor::New;
    }

    /// Open the editor on an existing project and return its form values.
    pub fn open_edit(&mut self, id: ProjectId) -> Result<ProjectDraft> {
        let draft = self
            .registry
            .find(id)
            .map(form_values)
            .map_err(|err| self.report(err))?;
        self.editor = Editor::Editing(id);
        Ok(draft)
    }

    pub fn close_editor(&mut self) {
        self.editor = Editor::Closed;
    }

    /// Submit the editor form: create when nothing is being edited, otherwise
    /// update the edited project. The editor stays open on failure.
    pub fn save(&mut self, draft: ProjectDraft) -> Result<Project> {
        let outcome = match self.editor {
            Editor::Editing(id) => self
                .registry
                .update(id, draft.into_patch())
                .map(|p| (p, messages::PROJECT_UPDATED)),
            Editor::New | Editor::Closed => self
                .registry
                .create(draft)
                .map(|p| (p, messages::PROJECT_CREATED)),
        };
        let (project, message) = outcome.map_err(|err| self.report(err))?;
        self.notify(message, Severity::Success);
        self.rerender()?;
        self.close_editor();
        Ok(project)
    }

    /// Create regardless of editor state.
    pub fn create(&mut self, draft: ProjectDraft) -> Result<Project> {
        self.open_new();
        self.save(draft)
    }

    /// Apply a partial update outside the editor flow.
    pub fn update(&mut self, id: ProjectId, patch: ProjectPatch) -> Result<Project> {
        let project = self
            .registry
            .update(id, patch)
            .map_err(|err| self.report(err))?;
        self.notify(messages::PROJECT_UPDATED, Severity::Success);
        self.rerender()?;
        Ok(project)
    }

    pub fn delete(&mut self, id: ProjectId) -> Result<Project> {
        let removed = self.registry.delete(id).map_err(|err| self.report(err))?;
        if self.editor == Editor::Editing(id) {
            self.close_editor();
        }
        self.notify(messages::PROJECT_DELETED, Severity::Success);
        self.rerender()?;
        Ok(removed)
    }

    /// Plain lookup; only a missing id is reported.
    pub fn find(&mut self, id: ProjectId) -> Result<Project> {
        self.registry
            .find(id)
            .cloned()
            .map_err(|err| self.report(err))
    }

    pub fn view(&mut self, id: ProjectId) -> Result<Project> {
        let project = self
            .registry
            .find(id)
            .cloned()
            .map_err(|err| self.report(err))?;
        self.notify(&messages::viewing(&project.name), Severity::Info);
        Ok(project)
    }

    // -- listing ------------------------------------------------------------

    /// Set the active filter from raw form values and re-render. An unknown
    /// status shows an empty listing.
    pub fn apply_filter(&mut self, search: &str, status: &str) -> Result<Vec<Project>> {
        self.filter = ProjectFilter::from_form(search, status);
        self.rerender()?;
        Ok(self.visible())
    }

    /// Render the visible projects in `format` without changing the default format.
    pub fn render_as(&self, format: ListingFormat) -> Result<String> {
        Ok(self.renderer.render(&self.visible(), format)?)
    }

    pub fn generate_report(&mut self) {
        self.notify(messages::REPORT_GENERATED, Severity::Success);
    }

    pub fn save_settings(&mut self) {
        self.notify(messages::SETTINGS_SAVED, Severity::Success);
    }

    fn rerender(&mut self) -> Result<()> {
        self.listing = self.renderer.render(&self.visible(), self.format)?;
        Ok(())
    }

    /// Surface a registry failure as an error toast and hand it back.
    fn report(&mut self, err: RegistryError) -> anyhow::Error {
        let message = match &err {
            RegistryError::Validation { .. } => messages::REQUIRED_FIELDS.to_string(),
            other => capitalize_first(&other.to_string()),
        };
        tracing::debug!(error = %err, "dashboard action rejected");
        self.notify(&message, Severity::Error);
        err.into()
    }
}

/// Editor form pre-filled from a stored project. Dates are not form fields.
fn form_values(project: &Project) -> ProjectDraft {
    ProjectDraft {
        name: project.name.clone(),
        client: project.client.clone(),
        budget: project.budget.clone(),
        duration: project.duration.clone(),
        status: Some(project.status),
        description: Some(project.description.clone()),
        start_date: None,
        end_date: None,
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
