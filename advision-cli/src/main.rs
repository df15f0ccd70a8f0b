//! AdVision: marketing agency project dashboard CLI.
//!
//! # Usage
//!
//! ```text
//! advision projects list [--search <text>] [--status planning|active|completed|all] [--format table|html|markdown|json]
//! advision projects show <id> [--json]
//! advision projects add <name> --client <c> --budget <b> --duration <d> [--status ...]
//! advision session [--empty] [--format html|markdown|json]
//! advision theme show|set <light|dark>|toggle
//! advision accent show|set <color>|list
//! advision charts [--json]
//! advision report
//! advision lead request|contact ...
//! ```
//!
//! Projects live in memory only: every invocation starts from the sample
//! registry. Set `RUST_LOG=debug` for diagnostic logs on stderr.

mod commands;
mod dashboard;
mod session;
mod sink;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use advision_core::ProjectStatus;
use advision_renderer::ListingFormat;
use commands::{
    charts::ChartsArgs, lead::LeadCommand, prefs::AccentCommand, prefs::ThemeCommand,
    projects::ProjectsCommand, report::ReportArgs, session::SessionArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "advision",
    version,
    about = "Manage marketing campaign projects from the terminal",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List, inspect and add projects.
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },

    /// Serve JSON-lines dashboard requests on stdin/stdout.
    Session(SessionArgs),

    /// Show or change the color theme.
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },

    /// Show or change the accent color.
    Accent {
        #[command(subcommand)]
        command: AccentCommand,
    },

    /// Print the overview analytics datasets.
    Charts(ChartsArgs),

    /// Generate the project report.
    Report(ReportArgs),

    /// Validate marketing-site lead forms.
    Lead {
        #[command(subcommand)]
        command: LeadCommand,
    },
}

// ---------------------------------------------------------------------------
// Shared argument types: parsed from CLI strings, convert to core types
// ---------------------------------------------------------------------------

/// Status filter: a concrete status, or `all` (also the empty string) for any.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusFilterArg(pub Option<ProjectStatus>);

impl FromStr for StatusFilterArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self(None));
        }
        ProjectStatus::parse_filter(s)
            .map(Self)
            .map_err(|_| format!("unknown status '{s}'; expected: planning, active, completed, all"))
    }
}

impl fmt::Display for StatusFilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(status) => status.fmt(f),
            None => f.write_str("all"),
        }
    }
}

/// Listing output: a terminal table, or one of the renderer formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Listing(ListingFormat),
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("table") {
            return Ok(Self::Table);
        }
        s.parse::<ListingFormat>()
            .map(Self::Listing)
            .map_err(|_| format!("unknown format '{s}'; expected: table, html, markdown, json"))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Listing(format) => format.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Projects { command } => commands::projects::run(command),
        Commands::Session(args) => args.run(),
        Commands::Theme { command } => commands::prefs::run_theme(command),
        Commands::Accent { command } => commands::prefs::run_accent(command),
        Commands::Charts(args) => args.run(),
        Commands::Report(args) => args.run(),
        Commands::Lead { command } => commands::lead::run(command),
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
