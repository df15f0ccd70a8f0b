//! `advision report`

use anyhow::Result;
use clap::Args;

use advision_core::ProjectRegistry;

use crate::dashboard::Dashboard;
use crate::sink::TerminalSink;

/// Report generation is simulated: only the confirmation is emitted.
#[derive(Args, Debug)]
pub struct ReportArgs {}

impl ReportArgs {
    pub fn run(self) -> Result<()> {
        let mut dashboard =
            Dashboard::new(ProjectRegistry::seeded(), TerminalSink, Default::default())?;
        dashboard.generate_report();
        Ok(())
    }
}
