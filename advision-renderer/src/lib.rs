//! # advision-renderer
//!
//! Tera-based renderer that turns registry snapshots into project listings.
//! The registry emits plain [`Project`](advision_core::Project) data; every
//! presentation concern lives here.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use advision_core::ProjectRegistry;
//! use advision_renderer::{ListingFormat, Renderer};
//!
//! fn print_listing(registry: &ProjectRegistry) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(html) = renderer.render(registry.projects(), ListingFormat::Html) {
//!             println!("{html}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{ListingContext, ProjectCard};
pub use engine::{ListingFormat, Renderer};
pub use error::RenderError;
