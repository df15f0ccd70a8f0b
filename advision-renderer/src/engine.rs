//! Tera rendering engine: [`ListingFormat`] enum and [`Renderer`].
//!
//! # Formats
//!
//! | Format   | Template                | Escaping            |
//! |----------|-------------------------|---------------------|
//! | Html     | `listing/grid.html`     | autoescaped         |
//! | Markdown | `listing/listing.md`    | none                |
//! | Json     | (serde_json)            | n/a                 |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tera::{Tera, Value};

use advision_core::Project;

use crate::context::ListingContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (
        "shared/_progress.html",
        include_str!("templates/_partials/progress.html.tera"),
    ),
    ("listing/grid.html", include_str!("templates/grid.html.tera")),
    ("listing/listing.md", include_str!("templates/listing.md.tera")),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    // Only `.html` names are escaped; Markdown goes out verbatim.
    tera.autoescape_on(vec![".html"]);
    tera.add_raw_templates(TPLS.iter().copied())?;
    tera.register_filter("md_cell", md_cell);
    Ok(tera)
}

/// Markdown table cell: pipes are escaped and line breaks folded so a value
/// cannot split its row.
fn md_cell(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = tera::try_get_value!("md_cell", "value", String, value);
    Ok(Value::String(text.replace('|', "\\|").replace(['\r', '\n'], " ")))
}

// ---------------------------------------------------------------------------
// ListingFormat
// ---------------------------------------------------------------------------

/// Output format of a rendered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListingFormat {
    #[default]
    Html,
    Markdown,
    Json,
}

impl ListingFormat {
    /// All formats in a stable order.
    pub fn all() -> &'static [ListingFormat] {
        &[ListingFormat::Html, ListingFormat::Markdown, ListingFormat::Json]
    }

    /// Template backing this format; `None` for serde-only formats.
    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            ListingFormat::Html => Some("listing/grid.html"),
            ListingFormat::Markdown => Some("listing/listing.md"),
            ListingFormat::Json => None,
        }
    }
}

impl fmt::Display for ListingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingFormat::Html => write!(f, "html"),
            ListingFormat::Markdown => write!(f, "markdown"),
            ListingFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ListingFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ListingFormat::Html),
            "markdown" | "md" => Ok(ListingFormat::Markdown),
            "json" => Ok(ListingFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for project listings.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render a snapshot of projects in the given format, keeping its order.
    pub fn render(&self, projects: &[Project], format: ListingFormat) -> Result<String, RenderError> {
        let ctx = ListingContext::from_projects(projects);
        self.render_with_context(&ctx, format)
    }

    /// Render using a caller-provided [`ListingContext`].
    pub fn render_with_context(
        &self,
        ctx: &ListingContext,
        format: ListingFormat,
    ) -> Result<String, RenderError> {
        match format.template_name() {
            Some(name) => {
                let tera_ctx = ctx.to_tera_context()?;
                Ok(self.tera.render(name, &tera_ctx)?)
            }
            None => Ok(serde_json::to_string_pretty(&ctx.projects)?),
        }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
