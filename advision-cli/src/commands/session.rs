//! `advision session`: JSON-lines dashboard session on stdin/stdout.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Args;

use advision_core::ProjectRegistry;
use advision_renderer::ListingFormat;

use crate::dashboard::Dashboard;
use crate::session;

/// Arguments for `advision session`.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Start from an empty registry instead of the sample projects.
    #[arg(long)]
    pub empty: bool,

    /// Default listing format for `render` requests without one.
    #[arg(long, short = 'f', default_value = "html")]
    pub format: ListingFormat,
}

impl SessionArgs {
    pub fn run(self) -> Result<()> {
        let registry = if self.empty {
            ProjectRegistry::new()
        } else {
            ProjectRegistry::seeded()
        };
        let mut dashboard = Dashboard::new(registry, Vec::new(), self.format)
            .context("failed to start dashboard")?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let stats = session::run(&mut dashboard, stdin.lock(), BufWriter::new(stdout.lock()))?;
        tracing::debug!(?stats, "session closed");
        Ok(())
    }
}
